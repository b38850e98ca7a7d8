//! Terminal cell model
//!
//! - **color**: RGB colors with optional palette provenance
//! - **palette**: fixed-size index to RGB table
//! - **attrs**: copy-on-write character attributes
//! - **cell**: character and continuation cells
//! - **row**: a row of cells enforcing the wide-character span rule

pub mod attrs;
pub mod cell;
pub mod color;
pub mod error;
pub mod palette;
pub mod row;

pub use attrs::{AttrFlags, AttributeSet};
pub use cell::{Cell, CellValue};
pub use color::Color;
pub use error::{CellError, Result};
pub use palette::{Palette, Rgb, DEFAULT_PALETTE_SIZE};
pub use row::Row;
