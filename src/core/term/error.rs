//! Errors raised while constructing or querying cells, colors and rows.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellError {
    #[error("Palette index {index} is outside the palette (size {size})")]
    InvalidPaletteIndex { index: usize, size: usize },

    #[error("Invalid palette size: {0}")]
    InvalidPaletteSize(usize),

    #[error("Invalid character width: {0} (must be at least 1)")]
    InvalidWidth(usize),

    #[error("Cell is a continuation of a wide character, not a real character")]
    NotARealCharacter,

    #[error("Column {col} is outside the row (width {cols})")]
    ColumnOutOfBounds { col: usize, cols: usize },

    #[error("Character of width {width} at column {col} does not fit in a row of {cols} columns")]
    SpanOverflow { col: usize, width: usize, cols: usize },

    #[error("Continuation cells cannot be written without their owning character")]
    DetachedContinuation,

    #[error("Malformed wide-character span at column {0}")]
    MalformedSpan(usize),
}

pub type Result<T> = std::result::Result<T, CellError>;
