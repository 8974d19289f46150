//! Buffered writers for generated C source.
//!
//! Content is assembled in memory and only written to disk when it differs from what is already
//! there.

mod c_writer;
mod header_writer;

pub use c_writer::*;
pub use header_writer::*;

/// What [`CWriter::close`] did with the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was missing or differed, and has been (over)written.
    Written,
    /// The file already held identical content and was left untouched.
    Unchanged,
}
