//! Cell attributes
//!
//! `AttributeSet` is a small `Copy` value. Every mutator returns a modified
//! copy, so attributes already stamped onto cells never change when the
//! interpreter's current style does.

use bitflags::bitflags;

use super::color::Color;
use super::palette::Palette;

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct AttrFlags: u8 {
        const BOLD       = 0b0000_0001;
        const REVERSE    = 0b0000_0010;
        const CURSOR     = 0b0000_0100;
        const UNDERSCORE = 0b0000_1000;
    }
}

/// Number of base ANSI colors that have a bright counterpart
const BRIGHTENABLE_COLORS: u16 = 8;

/// Attributes applied to a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeSet {
    flags: AttrFlags,
    foreground: Color,
    background: Color,
}

impl AttributeSet {
    /// All flags cleared, using the given default colors
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            flags: AttrFlags::empty(),
            foreground,
            background,
        }
    }

    /// All flags cleared, using the palette's default colors
    pub fn from_palette(palette: &Palette) -> Self {
        Self::new(palette.default_foreground(), palette.default_background())
    }

    pub fn flags(&self) -> AttrFlags {
        self.flags
    }

    pub fn bold(&self) -> bool {
        self.flags.contains(AttrFlags::BOLD)
    }

    pub fn reverse(&self) -> bool {
        self.flags.contains(AttrFlags::REVERSE)
    }

    /// Whether the character is highlighted by the cursor
    pub fn cursor(&self) -> bool {
        self.flags.contains(AttrFlags::CURSOR)
    }

    pub fn underscore(&self) -> bool {
        self.flags.contains(AttrFlags::UNDERSCORE)
    }

    /// Stored foreground, ignoring `reverse`
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Stored background, ignoring `reverse`
    pub fn background(&self) -> Color {
        self.background
    }

    fn with_flag(mut self, flag: AttrFlags, value: bool) -> Self {
        self.flags.set(flag, value);
        self
    }

    pub fn with_bold(self, bold: bool) -> Self {
        self.with_flag(AttrFlags::BOLD, bold)
    }

    pub fn with_reverse(self, reverse: bool) -> Self {
        self.with_flag(AttrFlags::REVERSE, reverse)
    }

    pub fn with_cursor(self, cursor: bool) -> Self {
        self.with_flag(AttrFlags::CURSOR, cursor)
    }

    pub fn with_underscore(self, underscore: bool) -> Self {
        self.with_flag(AttrFlags::UNDERSCORE, underscore)
    }

    pub fn with_foreground(mut self, foreground: Color) -> Self {
        self.foreground = foreground;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Foreground as displayed: the stored background when reversed
    pub fn effective_foreground(&self) -> Color {
        if self.reverse() {
            self.background
        } else {
            self.foreground
        }
    }

    /// Background as displayed: the stored foreground when reversed
    pub fn effective_background(&self) -> Color {
        if self.reverse() {
            self.foreground
        } else {
            self.background
        }
    }

    /// Colors a renderer should paint, as `(foreground, background)`.
    ///
    /// The cursor highlight inverts the cell, so a reversed cell under the
    /// cursor is drawn with its stored colors. Bold text using one of the
    /// eight base palette colors is drawn with the bright variant (slot + 8)
    /// as it is currently defined in `palette`.
    pub fn display_colors(&self, palette: &Palette) -> (Color, Color) {
        let (mut foreground, background) = if self.reverse() != self.cursor() {
            (self.background, self.foreground)
        } else {
            (self.foreground, self.background)
        };

        if self.bold() {
            if let Some(index) = foreground.palette_index() {
                if index < BRIGHTENABLE_COLORS {
                    if let Ok(bright) = palette.color(index + BRIGHTENABLE_COLORS) {
                        foreground = bright;
                    }
                }
            }
        }

        (foreground, background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> (Palette, AttributeSet) {
        let palette = Palette::new();
        let attrs = AttributeSet::new(
            Color::from_palette(&palette, 7).unwrap(),
            Color::from_palette(&palette, 0).unwrap(),
        );
        (palette, attrs)
    }

    #[test]
    fn test_default_flags() {
        let (_, attrs) = defaults();
        assert!(!attrs.bold());
        assert!(!attrs.reverse());
        assert!(!attrs.cursor());
        assert!(!attrs.underscore());
        assert_eq!(attrs.flags(), AttrFlags::empty());
        assert_eq!(attrs, AttributeSet::from_palette(&Palette::new()));
    }

    #[test]
    fn test_copy_on_write() {
        let (_, attrs) = defaults();
        let bold = attrs.with_bold(true);

        assert!(bold.bold());
        assert!(!attrs.bold());

        let styled = bold.with_underscore(true).with_cursor(true);
        assert!(styled.bold() && styled.underscore() && styled.cursor());
        assert!(!bold.underscore());

        let colored = attrs.with_foreground(Color::from_rgb(1, 2, 3));
        assert_eq!(colored.foreground(), Color::from_rgb(1, 2, 3));
        assert_eq!(attrs.foreground().palette_index(), Some(7));

        let cleared = styled.with_bold(false);
        assert!(!cleared.bold());
        assert!(cleared.underscore());
    }

    #[test]
    fn test_bold_idempotent() {
        let (_, attrs) = defaults();
        assert_eq!(attrs.with_bold(true).with_bold(true), attrs.with_bold(true));
    }

    #[test]
    fn test_reverse_scenario() {
        let (_, attrs) = defaults();
        let reversed = attrs.with_reverse(true);

        assert_eq!(reversed.effective_foreground(), attrs.background());
        assert_eq!(reversed.effective_background(), attrs.foreground());

        // Stored colors are untouched
        assert_eq!(reversed.foreground(), attrs.foreground());
        assert_eq!(reversed.background(), attrs.background());

        let restored = reversed.with_reverse(false);
        assert_eq!(restored.effective_foreground(), attrs.effective_foreground());
        assert_eq!(restored.effective_background(), attrs.effective_background());
        assert_eq!(restored, attrs);
    }

    #[test]
    fn test_display_colors_cursor_inverts() {
        let (palette, attrs) = defaults();
        let fg = attrs.foreground();
        let bg = attrs.background();

        assert_eq!(attrs.display_colors(&palette), (fg, bg));
        assert_eq!(attrs.with_cursor(true).display_colors(&palette), (bg, fg));
        assert_eq!(attrs.with_reverse(true).display_colors(&palette), (bg, fg));
        assert_eq!(
            attrs.with_reverse(true).with_cursor(true).display_colors(&palette),
            (fg, bg)
        );
    }

    #[test]
    fn test_display_colors_bold_brightens() {
        let (palette, attrs) = defaults();
        let (fg, _) = attrs.with_bold(true).display_colors(&palette);
        assert_eq!(fg.palette_index(), Some(15));
        assert_eq!(fg.rgb(), palette.get(15).unwrap());

        // Already bright and direct colors are left alone
        let bright = attrs.with_foreground(palette.color(12).unwrap()).with_bold(true);
        assert_eq!(bright.display_colors(&palette).0.palette_index(), Some(12));

        let direct = attrs.with_foreground(Color::from_rgb(9, 9, 9)).with_bold(true);
        assert_eq!(direct.display_colors(&palette).0, Color::from_rgb(9, 9, 9));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<AttributeSet>();
        assert_send_sync::<Color>();
    }
}
