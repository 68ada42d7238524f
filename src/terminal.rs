//! ANSI escape sequence generation for 24-bit colored glyph output
//!
//! Every colored cell is written as `fg [bg] glyph reset` so that terminal
//! color state never carries over into the next cell or line.

use crate::color::Rgb;

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a color to an ANSI 24-bit foreground escape sequence.
///
/// # Examples
///
/// ```
/// use img2term::color::Rgb;
/// use img2term::terminal::ansi_fg;
///
/// assert_eq!(ansi_fg(Rgb::new(255, 0, 0)), "\x1b[38;2;255;0;0m");
/// ```
pub fn ansi_fg(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Convert a color to an ANSI 24-bit background escape sequence.
///
/// # Examples
///
/// ```
/// use img2term::color::Rgb;
/// use img2term::terminal::ansi_bg;
///
/// assert_eq!(ansi_bg(Rgb::new(0, 0, 255)), "\x1b[48;2;0;0;255m");
/// ```
pub fn ansi_bg(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// A glyph plus the colors it is drawn with.
///
/// Built through the constructors so that a two-color glyph always carries
/// both colors and a single-color glyph only a foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledCell {
    glyph: char,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl StyledCell {
    /// An uncolored space.
    pub const fn blank() -> Self {
        Self { glyph: ' ', fg: None, bg: None }
    }

    /// A single-color glyph drawn in `fg` over the terminal's own background.
    pub const fn solid(glyph: char, fg: Rgb) -> Self {
        Self { glyph, fg: Some(fg), bg: None }
    }

    /// A glyph whose filled part is `fg` and unfilled part is `bg`.
    pub const fn two_tone(glyph: char, fg: Rgb, bg: Rgb) -> Self {
        Self { glyph, fg: Some(fg), bg: Some(bg) }
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn fg(&self) -> Option<Rgb> {
        self.fg
    }

    pub fn bg(&self) -> Option<Rgb> {
        self.bg
    }

    /// Append this cell's escape sequences and glyph to `out`.
    pub fn write_to(&self, out: &mut String) {
        if self.fg.is_none() && self.bg.is_none() {
            out.push(self.glyph);
            return;
        }
        if let Some(fg) = self.fg {
            out.push_str(&ansi_fg(fg));
        }
        if let Some(bg) = self.bg {
            out.push_str(&ansi_bg(bg));
        }
        out.push(self.glyph);
        out.push_str(ANSI_RESET);
    }
}

impl std::fmt::Display for StyledCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

/// Bold `--- source ---` banner printed above each image when several are rendered.
pub fn source_header(source: &str) -> String {
    format!("\x1b[1m--- {} ---{}", source, ANSI_RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_fg() {
        assert_eq!(ansi_fg(Rgb::new(255, 0, 0)), "\x1b[38;2;255;0;0m");
        assert_eq!(ansi_fg(Rgb::new(1, 22, 233)), "\x1b[38;2;1;22;233m");
    }

    #[test]
    fn test_ansi_bg() {
        assert_eq!(ansi_bg(Rgb::new(0, 255, 0)), "\x1b[48;2;0;255;0m");
    }

    #[test]
    fn test_blank_cell_has_no_escapes() {
        assert_eq!(StyledCell::blank().to_string(), " ");
    }

    #[test]
    fn test_solid_cell() {
        let cell = StyledCell::solid('\u{2588}', Rgb::new(255, 0, 0));
        assert_eq!(cell.to_string(), "\x1b[38;2;255;0;0m\u{2588}\x1b[0m");
        assert_eq!(cell.bg(), None);
    }

    #[test]
    fn test_two_tone_cell_orders_fg_then_bg() {
        let cell = StyledCell::two_tone('\u{2580}', Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        assert_eq!(cell.to_string(), "\x1b[38;2;1;2;3m\x1b[48;2;4;5;6m\u{2580}\x1b[0m");
    }

    #[test]
    fn test_source_header() {
        assert_eq!(source_header("cat.png"), "\x1b[1m--- cat.png ---\x1b[0m");
    }
}
