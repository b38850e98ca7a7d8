//! Rendering of cell rows.
//!
//! - **renderer**: crossterm renderer and a plain-text debug renderer

pub mod renderer;

pub use renderer::*;
