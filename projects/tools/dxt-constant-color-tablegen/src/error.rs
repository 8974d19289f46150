use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableGenError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The output path has no ancestor directory to derive the include guard from.
    #[error("Cannot derive include guard: '{path}' is not inside a '{root}' directory")]
    GuardRootNotFound { path: PathBuf, root: String },

    #[error("Failed to run formatter '{program}': {source}")]
    FormatterSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Formatter '{program}' failed on '{path}' with {status}")]
    FormatterFailed {
        program: String,
        path: PathBuf,
        status: ExitStatus,
    },
}
