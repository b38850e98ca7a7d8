//! Color values stored in cell attributes
//!
//! A `Color` is always a concrete RGB value. Colors resolved from the palette
//! also remember the slot they came from, so an encoder can emit a compact
//! indexed reference instead of the literal triple. The RGB is a snapshot:
//! redefining the slot later does not change colors already constructed.

use super::error::Result;
use super::palette::{Palette, Rgb};

/// Terminal color: RGB plus optional palette provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    palette_index: Option<u16>,
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Direct (true color) value with no palette index
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            palette_index: None,
            red,
            green,
            blue,
        }
    }

    /// Resolve a palette slot, copying its current RGB value
    pub fn from_palette(palette: &Palette, index: u16) -> Result<Self> {
        let rgb = palette.get(index as usize)?;
        Ok(Self::indexed(index, rgb))
    }

    pub(crate) const fn indexed(index: u16, rgb: Rgb) -> Self {
        Self {
            palette_index: Some(index),
            red: rgb.r,
            green: rgb.g,
            blue: rgb.b,
        }
    }

    pub fn is_palette_color(&self) -> bool {
        self.palette_index.is_some()
    }

    pub fn palette_index(&self) -> Option<u16> {
        self.palette_index
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    /// Compare only the displayed RGB, ignoring palette provenance
    pub fn same_rgb(&self, other: &Color) -> bool {
        self.rgb() == other.rgb()
    }

    /// Convert to crossterm Color for output through `palette`.
    ///
    /// The indexed form is only used while the slot still holds its standard
    /// value, since the host terminal draws indices with its own table.
    /// Redefined slots and stale snapshots are written as literal RGB.
    pub fn to_crossterm(&self, palette: &Palette) -> crossterm::style::Color {
        let standard = |index: u16| {
            palette
                .initial(index as usize)
                .is_ok_and(|rgb| rgb == self.rgb())
        };
        match self.palette_index {
            Some(index) if index <= u8::MAX as u16 && standard(index) => {
                crossterm::style::Color::AnsiValue(index as u8)
            }
            _ => crossterm::style::Color::Rgb {
                r: self.red,
                g: self.green,
                b: self.blue,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::term::CellError;

    #[test]
    fn test_rgb_is_not_palette() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 7)] {
            let color = Color::from_rgb(r, g, b);
            assert!(!color.is_palette_color());
            assert_eq!(color.palette_index(), None);
            assert_eq!((color.red(), color.green(), color.blue()), (r, g, b));
        }
    }

    #[test]
    fn test_from_palette() {
        let palette = Palette::new();
        let color = Color::from_palette(&palette, 9).unwrap();
        assert!(color.is_palette_color());
        assert_eq!(color.palette_index(), Some(9));
        assert_eq!(color.rgb(), palette.get(9).unwrap());
    }

    #[test]
    fn test_from_palette_out_of_range() {
        let palette = Palette::with_size(16).unwrap();
        assert_eq!(
            Color::from_palette(&palette, 16),
            Err(CellError::InvalidPaletteIndex { index: 16, size: 16 })
        );
    }

    #[test]
    fn test_palette_snapshot() {
        let mut palette = Palette::new();
        let before = Color::from_palette(&palette, 1).unwrap();

        palette.set(1, Rgb::new(10, 20, 30)).unwrap();
        let after = Color::from_palette(&palette, 1).unwrap();

        // Earlier value is untouched by the redefinition
        assert_eq!(before.rgb(), Rgb::new(0x99, 0x3E, 0x3E));
        assert_eq!(after.rgb(), Rgb::new(10, 20, 30));
        assert_ne!(before, after);
        assert_eq!(before.is_palette_color(), after.is_palette_color());
    }

    #[test]
    fn test_provenance_affects_equality() {
        let palette = Palette::new();
        let indexed = Color::from_palette(&palette, 15).unwrap();
        let direct = Color::from_rgb(0xFF, 0xFF, 0xFF);

        assert_ne!(indexed, direct);
        assert!(indexed.same_rgb(&direct));
    }

    #[test]
    fn test_to_crossterm() {
        let palette = Palette::new();
        assert_eq!(
            Color::from_palette(&palette, 4).unwrap().to_crossterm(&palette),
            crossterm::style::Color::AnsiValue(4)
        );
        assert_eq!(
            Color::from_rgb(1, 2, 3).to_crossterm(&palette),
            crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 }
        );

        // Slots beyond the 256-color range fall back to literal RGB
        let mut large = Palette::with_size(300).unwrap();
        large.set(280, Rgb::new(4, 5, 6)).unwrap();
        assert_eq!(
            Color::from_palette(&large, 280).unwrap().to_crossterm(&large),
            crossterm::style::Color::Rgb { r: 4, g: 5, b: 6 }
        );
    }

    #[test]
    fn test_to_crossterm_redefined_slot() {
        let mut palette = Palette::new();
        let before = palette.color(1).unwrap();
        palette.set(1, Rgb::new(255, 0, 0)).unwrap();
        let after = palette.color(1).unwrap();

        assert_eq!(
            after.to_crossterm(&palette),
            crossterm::style::Color::Rgb { r: 255, g: 0, b: 0 }
        );
        // The snapshot still matches the standard slot value
        assert_eq!(
            before.to_crossterm(&palette),
            crossterm::style::Color::AnsiValue(1)
        );

        palette.reset(1).unwrap();
        assert_eq!(
            after.to_crossterm(&palette),
            crossterm::style::Color::Rgb { r: 255, g: 0, b: 0 }
        );
    }
}
