//! Error types for board operations.

/// Errors raised by cell-level board operations.
///
/// These are contract violations, not recoverable runtime conditions: they
/// surface immediately instead of clamping indices, since a silently
/// tolerated bad index would mask simulation bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has not been initialized")]
    NotInitialized,

    #[error("cell ({row}, {column}) is out of range for a {rows}x{columns} board")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("row {row} has {len} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}
