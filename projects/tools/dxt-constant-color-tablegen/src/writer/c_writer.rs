use super::WriteOutcome;
use crate::error::TableGenError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// License of the encoder the generated source is compiled into.
pub const LICENSE: &str = "// Copyright 2015 The Chromium Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

";

/// Marks the output as generated, and names the tool and the formatting pass applied to it.
pub const DO_NOT_EDIT_WARNING: &str = concat!(
    "// This file is auto-generated from\n",
    "// ",
    env!("CARGO_PKG_NAME"),
    "\n",
    "// It's formatted by clang-format using chromium coding style:\n",
    "//    clang-format -i -style=chromium filename\n",
    "// DO NOT EDIT!\n",
    "\n",
);

/// Buffers generated C source in memory and writes it out on [`close`](Self::close).
///
/// Every buffer starts with [`LICENSE`] and [`DO_NOT_EDIT_WARNING`].
#[derive(Debug)]
pub struct CWriter {
    path: PathBuf,
    content: String,
}

impl CWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut writer = Self {
            path: path.into(),
            content: String::new(),
        };
        writer.write(LICENSE);
        writer.write(DO_NOT_EDIT_WARNING);
        writer
    }

    /// Appends `text` line by line.
    ///
    /// Line endings are normalized to `\n`. The last line only gets a newline if `text` ended
    /// with one, so partial lines can be built up over several calls.
    pub fn write(&mut self, text: &str) {
        let mut lines = text.lines().peekable();
        while let Some(line) = lines.next() {
            self.content.push_str(line);
            if lines.peek().is_some() || text.ends_with('\n') {
                self.content.push('\n');
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Writes the buffered content to disk, unless the file already holds exactly that content.
    ///
    /// Leaving an identical file untouched keeps its timestamp, so build systems do not
    /// recompile everything that includes it.
    pub fn close(self) -> Result<WriteOutcome, TableGenError> {
        write_if_changed(&self.path, self.content().as_bytes())
    }
}

/// Writes `content` to `path` unless the existing file's bytes are identical.
pub fn write_if_changed(path: &Path, content: &[u8]) -> Result<WriteOutcome, TableGenError> {
    match fs::read(path) {
        Ok(existing) if existing == content => return Ok(WriteOutcome::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    fs::write(path, content)?;
    Ok(WriteOutcome::Written)
}
