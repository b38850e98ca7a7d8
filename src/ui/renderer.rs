//! Row renderer using crossterm
//!
//! Renders rows of cells as styled terminal output. Palette colors holding
//! their standard value are emitted as indexed references, everything else
//! as literal RGB.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::core::term::{AttributeSet, Color, Palette, Row};

/// Resolved style of a run of characters
#[derive(Clone, Copy, PartialEq, Eq)]
struct RunStyle {
    foreground: Color,
    background: Color,
    bold: bool,
    underscore: bool,
}

impl RunStyle {
    fn resolve(attrs: &AttributeSet, palette: &Palette) -> Self {
        let (foreground, background) = attrs.display_colors(palette);
        Self {
            foreground,
            background,
            bold: attrs.bold(),
            underscore: attrs.underscore(),
        }
    }
}

/// Row renderer
pub struct Renderer<'a> {
    palette: &'a Palette,
}

impl<'a> Renderer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Render a row, merging runs of identically styled characters
    pub fn render_row<W: Write>(&self, out: &mut W, row: &Row) -> io::Result<()> {
        let mut current: Option<RunStyle> = None;
        let mut line_buffer = String::with_capacity(row.cols());

        // Continuation columns are covered by their owning character
        for (_, cell) in row.chars() {
            let style = RunStyle::resolve(cell.attributes(), self.palette);

            if current != Some(style) {
                if let Some(previous) = current {
                    self.flush(out, &previous, &mut line_buffer)?;
                }
                current = Some(style);
            }

            if let Some(ch) = cell.value() {
                line_buffer.push(ch);
            }
        }

        if let Some(previous) = current {
            self.flush(out, &previous, &mut line_buffer)?;
        }

        queue!(out, SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Render several rows, one per line
    pub fn render_rows<W: Write>(&self, out: &mut W, rows: &[Row]) -> io::Result<()> {
        for row in rows {
            self.render_row(out, row)?;
            queue!(out, Print("\r\n"))?;
        }
        out.flush()
    }

    fn flush<W: Write>(&self, out: &mut W, style: &RunStyle, text: &mut String) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.apply_style(out, style)?;
        queue!(out, Print(text.as_str()))?;
        text.clear();
        Ok(())
    }

    fn apply_style<W: Write>(&self, out: &mut W, style: &RunStyle) -> io::Result<()> {
        // Reset first
        queue!(out, SetAttribute(Attribute::Reset))?;

        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.underscore {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }

        queue!(
            out,
            SetForegroundColor(style.foreground.to_crossterm(self.palette)),
            SetBackgroundColor(style.background.to_crossterm(self.palette))
        )?;
        Ok(())
    }
}

/// Simple debug renderer that outputs to a string
pub struct DebugRenderer;

impl DebugRenderer {
    /// Render a row as its text followed by a span map: `.` for a narrow
    /// character, `W` for the head of a wide character and `>` for each
    /// continuation column.
    pub fn render(row: &Row) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Row {} cols ===\n", row.cols()));
        output.push_str(&row.text());
        output.push('\n');

        for cell in row.cells() {
            let marker = match cell.columns_occupied() {
                Ok(1) => '.',
                Ok(_) => 'W',
                Err(_) => '>',
            };
            output.push(marker);
        }
        output.push('\n');

        output
    }
}
