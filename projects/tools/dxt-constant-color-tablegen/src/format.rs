use crate::error::TableGenError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Style passed to the formatter.
pub const FORMAT_STYLE: &str = "-style=chromium";

/// Name of the `clang-format` executable; it ships as a batch script on Windows.
pub fn formatter_program() -> String {
    if cfg!(target_os = "windows") {
        "clang-format.bat".to_string()
    } else {
        "clang-format".to_string()
    }
}

/// Formats all `files` in place with [`formatter_program`].
pub fn format_files(files: &[PathBuf]) -> Result<(), TableGenError> {
    let program = formatter_program();
    for file in files {
        println!("Formatting {}", file.display());
        format_file(&program, file)?;
    }
    Ok(())
}

/// Runs `program -i -style=chromium path` and waits for it to finish.
pub fn format_file(program: &str, path: &Path) -> Result<(), TableGenError> {
    let status = Command::new(program)
        .arg("-i")
        .arg(FORMAT_STYLE)
        .arg(path)
        .status()
        .map_err(|source| TableGenError::FormatterSpawn {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(TableGenError::FormatterFailed {
            program: program.to_string(),
            path: path.to_path_buf(),
            status,
        });
    }

    Ok(())
}
