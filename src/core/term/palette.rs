//! Terminal color palette
//!
//! A fixed-size table mapping indices to RGB values. Slots 0-15 hold the
//! standard and bright ANSI colors, 16-231 the 6x6x6 color cube and 232-255
//! the grayscale ramp. Palettes larger than 256 entries are padded with black,
//! smaller ones are truncated.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{CellError, Result};

/// Number of slots in the standard palette.
pub const DEFAULT_PALETTE_SIZE: usize = 256;

/// Largest palette that can be addressed by a `Color` palette index.
pub const MAX_PALETTE_SIZE: usize = u16::MAX as usize + 1;

/// Default foreground slot (gray).
pub const DEFAULT_FOREGROUND_INDEX: u16 = 7;

/// Default background slot (black).
pub const DEFAULT_BACKGROUND_INDEX: u16 = 0;

/// A plain RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const ANSI_COLORS: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // Black
    Rgb::new(0x99, 0x3E, 0x3E), // Red
    Rgb::new(0x3E, 0x99, 0x3E), // Green
    Rgb::new(0x99, 0x99, 0x3E), // Brown
    Rgb::new(0x3E, 0x3E, 0x99), // Blue
    Rgb::new(0x99, 0x3E, 0x99), // Magenta
    Rgb::new(0x3E, 0x99, 0x99), // Cyan
    Rgb::new(0x99, 0x99, 0x99), // White (gray)
    Rgb::new(0x3E, 0x3E, 0x3E), // Bright black
    Rgb::new(0xFF, 0x67, 0x67), // Bright red
    Rgb::new(0x67, 0xFF, 0x67), // Bright green
    Rgb::new(0xFF, 0xFF, 0x67), // Bright yellow
    Rgb::new(0x67, 0x67, 0xFF), // Bright blue
    Rgb::new(0xFF, 0x67, 0xFF), // Bright magenta
    Rgb::new(0x67, 0xFF, 0xFF), // Bright cyan
    Rgb::new(0xFF, 0xFF, 0xFF), // Bright white
];

const CUBE_LEVELS: [u8; 6] = [0x00, 0x5F, 0x87, 0xAF, 0xD7, 0xFF];

/// Initial RGB value of a slot in the standard 256-color table.
fn initial_color(index: usize) -> Rgb {
    match index {
        0..=15 => ANSI_COLORS[index],
        16..=231 => {
            let i = index - 16;
            Rgb::new(
                CUBE_LEVELS[i / 36],
                CUBE_LEVELS[(i / 6) % 6],
                CUBE_LEVELS[i % 6],
            )
        }
        232..=255 => {
            let v = 8 + (index - 232) as u8 * 10;
            Rgb::new(v, v, v)
        }
        _ => Rgb::default(),
    }
}

/// Fixed-size color palette with redefinable slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    initial: Vec<Rgb>,
    default_foreground: u16,
    default_background: u16,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Standard 256-color palette, gray on black.
    pub fn new() -> Self {
        Self::build(DEFAULT_PALETTE_SIZE)
    }

    /// Palette with `size` slots. The default foreground/background indices
    /// must fall inside it, so sizes below 8 are rejected.
    pub fn with_size(size: usize) -> Result<Self> {
        if size <= DEFAULT_FOREGROUND_INDEX as usize || size > MAX_PALETTE_SIZE {
            return Err(CellError::InvalidPaletteSize(size));
        }
        Ok(Self::build(size))
    }

    fn build(size: usize) -> Self {
        let colors: Vec<Rgb> = (0..size).map(initial_color).collect();
        Self {
            initial: colors.clone(),
            colors,
            default_foreground: DEFAULT_FOREGROUND_INDEX,
            default_background: DEFAULT_BACKGROUND_INDEX,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.colors.len() {
            Ok(())
        } else {
            Err(CellError::InvalidPaletteIndex {
                index,
                size: self.colors.len(),
            })
        }
    }

    /// Current RGB value of a slot
    pub fn get(&self, index: usize) -> Result<Rgb> {
        self.check(index)?;
        Ok(self.colors[index])
    }

    /// Value a slot had when the palette was built
    pub fn initial(&self, index: usize) -> Result<Rgb> {
        self.check(index)?;
        Ok(self.initial[index])
    }

    /// Resolve a slot into a palette `Color`
    pub fn color(&self, index: u16) -> Result<Color> {
        Color::from_palette(self, index)
    }

    /// Redefine a slot. Colors already resolved from it keep their old RGB.
    pub fn set(&mut self, index: usize, rgb: Rgb) -> Result<()> {
        self.check(index)?;
        tracing::debug!(
            "Palette slot {} redefined: {:?} -> {:?}",
            index,
            self.colors[index],
            rgb
        );
        self.colors[index] = rgb;
        Ok(())
    }

    /// Restore a slot to its initial value
    pub fn reset(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.colors[index] = self.initial[index];
        Ok(())
    }

    /// Restore every slot to its initial value
    pub fn reset_all(&mut self) {
        self.colors.clone_from(&self.initial);
    }

    /// Change which slots the default foreground and background resolve from
    pub fn set_defaults(&mut self, foreground: u16, background: u16) -> Result<()> {
        self.check(foreground as usize)?;
        self.check(background as usize)?;
        self.default_foreground = foreground;
        self.default_background = background;
        Ok(())
    }

    pub fn default_foreground_index(&self) -> u16 {
        self.default_foreground
    }

    pub fn default_background_index(&self) -> u16 {
        self.default_background
    }

    /// Default foreground, resolved against the current slot contents
    pub fn default_foreground(&self) -> Color {
        self.resolve_unchecked(self.default_foreground)
    }

    /// Default background, resolved against the current slot contents
    pub fn default_background(&self) -> Color {
        self.resolve_unchecked(self.default_background)
    }

    // Only called with indices validated by set_defaults/with_size.
    fn resolve_unchecked(&self, index: u16) -> Color {
        let rgb = self.colors[index as usize];
        Color::indexed(index, rgb)
    }
}
