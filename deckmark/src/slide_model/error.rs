//! Error types for metadata block parsing

use thiserror::Error;

/// Reasons a leading metadata block could not be parsed
///
/// These errors never leave the slide model: a segment with a malformed block
/// is treated as plain body text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataBlockError {
    /// The opening boundary line has no matching closing boundary
    #[error("metadata block opened on line 1 is never closed")]
    Unterminated,

    /// A line inside the block is not a `key: value` pair
    #[error("line {line_number} of metadata block is not a `key: value` pair: {line:?}")]
    InvalidLine {
        /// 1-based line number within the segment
        line_number: usize,
        /// The offending line
        line: String,
    },
}
