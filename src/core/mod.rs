//! Core terminal display state.
//!
//! # Architecture
//!
//! ```text
//! Row
//! └── Cell (character | continuation)
//!     └── AttributeSet (bold, reverse, cursor, underscore)
//!         └── Color (RGB + optional palette index)
//!                   └── Palette (index -> RGB)
//! ```

pub mod term;
