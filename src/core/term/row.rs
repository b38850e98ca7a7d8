//! A single row of cells
//!
//! The row owns the wide-character span rule: a character of width `N` at
//! column `c` always occupies `[c, c + N)` as one character cell followed by
//! `N - 1` continuations, and any write that touches part of an existing span
//! first collapses the whole span to blank cells.

use std::ops::Range;

use super::attrs::AttributeSet;
use super::cell::Cell;
use super::error::{CellError, Result};

/// A row of cells with atomic wide-character writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    blank: Cell,
}

impl Row {
    /// Row of `cols` blank cells using `attributes`
    pub fn new(cols: usize, attributes: AttributeSet) -> Self {
        let blank = Cell::blank(attributes);
        Self {
            cells: vec![blank; cols],
            blank,
        }
    }

    pub fn cols(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Column of the character owning `col`, walking back over continuations
    pub fn owner_of(&self, col: usize) -> Option<usize> {
        if col >= self.cells.len() {
            return None;
        }
        (0..=col).rev().find(|&c| !self.cells[c].is_continuation())
    }

    /// Character cells paired with their starting column
    pub fn chars(&self) -> impl Iterator<Item = (usize, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_continuation())
    }

    /// Write `cell` at `col` together with its continuation cells.
    ///
    /// Returns the number of columns written.
    pub fn write(&mut self, col: usize, cell: Cell) -> Result<usize> {
        let cols = self.cells.len();
        if col >= cols {
            return Err(CellError::ColumnOutOfBounds { col, cols });
        }
        let width = match cell.columns_occupied() {
            Ok(width) => width as usize,
            Err(_) => return Err(CellError::DetachedContinuation),
        };
        if col + width > cols {
            return Err(CellError::SpanOverflow { col, width, cols });
        }

        self.collapse(col, col + width);
        for (offset, part) in cell.span()?.into_iter().enumerate() {
            self.cells[col + offset] = part;
        }
        Ok(width)
    }

    /// Write a character, taking its width from Unicode
    pub fn write_char(&mut self, col: usize, ch: char, attributes: AttributeSet) -> Result<usize> {
        let cell = Cell::for_char(ch, attributes)?;
        self.write(col, cell)
    }

    /// Reset the columns in `range` to blanks with `attributes`. Spans that
    /// stick out of the range are collapsed to the row's default blank.
    pub fn erase(&mut self, range: Range<usize>, attributes: AttributeSet) {
        let end = range.end.min(self.cells.len());
        let start = range.start;
        if start >= end {
            return;
        }

        self.collapse(start, end);
        let blank = Cell::blank(attributes);
        for cell in &mut self.cells[start..end] {
            *cell = blank;
        }
    }

    /// Reset every column to the row's default blank
    pub fn clear(&mut self) {
        let blank = self.blank;
        for cell in &mut self.cells {
            *cell = blank;
        }
    }

    /// Blank every span intersecting `[start, end)`
    fn collapse(&mut self, start: usize, end: usize) {
        let blank = self.blank;
        let mut col = self.owner_of(start).unwrap_or(start);
        while col < end {
            // A leading continuation with no owner is treated as one column
            let width = self.cells[col]
                .columns_occupied()
                .map_or(1, |w| w as usize);
            let span_end = (col + width).min(self.cells.len());

            if col < start || span_end > end {
                tracing::trace!(
                    "Collapsing wide character span [{}, {}) overlapping write at [{}, {})",
                    col,
                    span_end,
                    start,
                    end
                );
            }
            for cell in &mut self.cells[col..span_end] {
                *cell = blank;
            }
            col = span_end;
        }
    }

    /// Check that every span is well formed: each character of width `N` is
    /// followed by exactly `N - 1` continuations carrying its attributes, and
    /// no continuation exists without an owner.
    pub fn validate(&self) -> Result<()> {
        let mut col = 0;
        while col < self.cells.len() {
            let owner = &self.cells[col];
            let width = owner
                .columns_occupied()
                .map_err(|_| CellError::MalformedSpan(col))? as usize;
            if col + width > self.cells.len() {
                return Err(CellError::MalformedSpan(col));
            }
            for tail in &self.cells[col + 1..col + width] {
                if !tail.is_continuation() || tail.attributes() != owner.attributes() {
                    return Err(CellError::MalformedSpan(col));
                }
            }
            col += width;
        }
        Ok(())
    }

    /// Text content, one char per character cell
    pub fn text(&self) -> String {
        self.chars().filter_map(|(_, cell)| cell.value()).collect()
    }
}
