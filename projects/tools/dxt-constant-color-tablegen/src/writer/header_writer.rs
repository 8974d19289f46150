use super::{CWriter, WriteOutcome};
use crate::error::TableGenError;
use std::ffi::OsStr;
use std::path::{self, Path};

/// Directory the include guard is derived relative to.
pub const GUARD_ROOT_DIR: &str = "src";

/// Derives a header's include guard from its location below the `root` directory.
///
/// The path relative to the nearest ancestor named `root` has every character that is not
/// ASCII alphanumeric replaced by `_`, is upper-cased and gets a trailing `_`.
/// `.../src/a/b/c.h` becomes `A_B_C_H_`.
///
/// # Errors
///
/// [`TableGenError::GuardRootNotFound`] if no ancestor of `path` is named `root`.
pub fn include_guard(path: &Path, root: &str) -> Result<String, TableGenError> {
    let absolute = path::absolute(path)?;
    let relative = absolute
        .ancestors()
        .skip(1)
        .find(|ancestor| ancestor.file_name() == Some(OsStr::new(root)))
        .and_then(|base| absolute.strip_prefix(base).ok())
        .ok_or_else(|| TableGenError::GuardRootNotFound {
            path: absolute.clone(),
            root: root.to_string(),
        })?;

    let mut guard: String = relative
        .to_string_lossy()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    guard.push('_');
    Ok(guard)
}

/// [`CWriter`] for a C header, wrapping the content in an include guard.
#[derive(Debug)]
pub struct CHeaderWriter {
    writer: CWriter,
    guard: String,
}

impl CHeaderWriter {
    /// Starts a header at `path`, deriving its guard relative to [`GUARD_ROOT_DIR`].
    pub fn new(path: &Path, file_comment: Option<&str>) -> Result<Self, TableGenError> {
        Self::with_guard_root(path, GUARD_ROOT_DIR, file_comment)
    }

    pub fn with_guard_root(
        path: &Path,
        root: &str,
        file_comment: Option<&str>,
    ) -> Result<Self, TableGenError> {
        let guard = include_guard(path, root)?;
        let mut writer = CWriter::new(path);

        if let Some(comment) = file_comment {
            writer.write(comment);
        }
        writer.write(&format!("#ifndef {guard}\n"));
        writer.write(&format!("#define {guard}\n\n"));

        Ok(Self { writer, guard })
    }

    pub fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub fn path(&self) -> &Path {
        self.writer.path()
    }

    /// Terminates the include guard and writes the header if its content changed.
    pub fn close(mut self) -> Result<WriteOutcome, TableGenError> {
        let terminator = format!("#endif  // {}\n\n", self.guard);
        self.writer.write(&terminator);
        self.writer.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case("/work/src/a/b/c.h", "A_B_C_H_")]
    #[case("/work/src/third_party/texture_compressor/dxt_encoder_implementation_autogen.h",
        "THIRD_PARTY_TEXTURE_COMPRESSOR_DXT_ENCODER_IMPLEMENTATION_AUTOGEN_H_")]
    #[case("/src/gen/tables-v2.h", "GEN_TABLES_V2_H_")]
    // Nearest `src` wins.
    #[case("/src/engine/src/x.h", "X_H_")]
    fn derives_guard_from_root_relative_path(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(include_guard(Path::new(path), "src").unwrap(), expected);
    }

    #[test]
    fn fails_without_guard_root() {
        let result = include_guard(Path::new("/work/include/c.h"), "src");
        assert!(matches!(
            result,
            Err(TableGenError::GuardRootNotFound { root, .. }) if root == "src"
        ));
    }

    #[test]
    fn relative_path_resolves_against_working_directory() {
        // Nothing above the test binary's working directory is expected to be called this.
        let result = include_guard(Path::new("c.h"), "no-such-guard-root-dir");
        assert!(matches!(result, Err(TableGenError::GuardRootNotFound { .. })));
    }

    #[test]
    fn wraps_content_in_guard() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        let path = src.join("table.h");

        let mut header = CHeaderWriter::new(&path, Some("// tables\n")).unwrap();
        header.write("int x;\n");
        header.close().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let expected_tail = "// tables\n#ifndef TABLE_H_\n#define TABLE_H_\n\nint x;\n#endif  // TABLE_H_\n\n";
        assert!(written.ends_with(expected_tail), "{written}");
    }
}
