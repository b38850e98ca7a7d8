//! termcell - the display state of a single terminal screen position
//!
//! termcell models what a terminal cell *means*: a character or the
//! continuation of a wide character, the attributes it is drawn with, and
//! the colors those attributes use.
//!
//! # Features
//!
//! - **Colors**: literal RGB or palette slots that keep their index
//! - **Attributes**: copy-on-write bold/reverse/cursor/underscore flags
//! - **Cells**: wide characters as one head cell plus continuation cells
//! - **Rows**: atomic span writes that never leave stray continuations
//! - **Config**: TOML palette and color scheme configuration
//!
//! # Example
//!
//! ```
//! use termcell::core::term::{AttributeSet, Palette, Row};
//!
//! let palette = Palette::new();
//! let attrs = AttributeSet::from_palette(&palette);
//! let mut row = Row::new(10, attrs);
//!
//! row.write_char(5, '漢', attrs.with_bold(true)).unwrap();
//! row.write_char(6, 'x', attrs).unwrap();
//!
//! // The wide character was collapsed as a whole
//! assert_eq!(row.cell(5).unwrap().value(), Some(' '));
//! assert!(row.validate().is_ok());
//! ```

pub mod config;
pub mod core;
pub mod ui;

pub use crate::core::term::{AttributeSet, Cell, CellError, CellValue, Color, Palette, Rgb, Row};
