//! Screen cells
//!
//! A cell is either a real character or the continuation of a wide character
//! that starts at an earlier column of the same row. A character occupying
//! `N` columns is stored as one character cell with `width == N` followed by
//! `N - 1` continuation cells. Continuation cells carry the owning character's
//! attributes so the background of every occupied column is painted alike.
//!
//! Cells only provide the primitives; keeping spans intact when columns are
//! rewritten is the job of [`Row`](super::row::Row).

use unicode_width::UnicodeWidthChar;

use super::attrs::AttributeSet;
use super::error::{CellError, Result};

/// Contents of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellValue {
    /// A character and the number of columns it occupies (at least 1)
    Char { value: char, width: u16 },
    /// Tail of a wide character placed earlier in the row
    Continuation,
}

/// A single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    value: CellValue,
    attributes: AttributeSet,
}

impl Cell {
    /// Character cell occupying `width` columns
    pub fn character(value: char, attributes: AttributeSet, width: usize) -> Result<Self> {
        if width < 1 {
            return Err(CellError::InvalidWidth(width));
        }
        let width = u16::try_from(width).map_err(|_| CellError::InvalidWidth(width))?;
        Ok(Self {
            value: CellValue::Char { value, width },
            attributes,
        })
    }

    /// Character cell with its display width taken from Unicode.
    ///
    /// Zero-width and control characters have no cell of their own and fail
    /// with `InvalidWidth`.
    pub fn for_char(value: char, attributes: AttributeSet) -> Result<Self> {
        let width = value.width().unwrap_or(0);
        Self::character(value, attributes, width)
    }

    /// Blank single-column cell used to fill cleared columns
    pub fn blank(attributes: AttributeSet) -> Self {
        Self {
            value: CellValue::Char {
                value: ' ',
                width: 1,
            },
            attributes,
        }
    }

    /// Continuation marker. `attributes` must be those of the owning character.
    pub(crate) fn continuation(attributes: AttributeSet) -> Self {
        Self {
            value: CellValue::Continuation,
            attributes,
        }
    }

    /// Continuation marker carrying the attributes of `owner`
    pub fn continuation_of(owner: &Cell) -> Result<Self> {
        if owner.is_continuation() {
            return Err(CellError::NotARealCharacter);
        }
        Ok(Self::continuation(owner.attributes))
    }

    /// The character cell followed by the continuation cells it owns
    pub fn span(&self) -> Result<Vec<Cell>> {
        let width = self.columns_occupied()?;
        let mut cells = Vec::with_capacity(width as usize);
        cells.push(*self);
        cells.extend((1..width).map(|_| Self::continuation(self.attributes)));
        Ok(cells)
    }

    pub fn is_continuation(&self) -> bool {
        matches!(self.value, CellValue::Continuation)
    }

    /// Number of columns taken by this character. Only meaningful on the
    /// leftmost cell of a span; continuations fail with `NotARealCharacter`.
    pub fn columns_occupied(&self) -> Result<u16> {
        match self.value {
            CellValue::Char { width, .. } => Ok(width),
            CellValue::Continuation => Err(CellError::NotARealCharacter),
        }
    }

    /// The character, or `None` for a continuation
    pub fn value(&self) -> Option<char> {
        match self.value {
            CellValue::Char { value, .. } => Some(value),
            CellValue::Continuation => None,
        }
    }

    pub fn cell_value(&self) -> CellValue {
        self.value
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}
