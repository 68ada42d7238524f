//! Output width tokens: absolute columns or a percentage of the terminal
//!
//! Resolution never queries the terminal itself. Callers pass the current
//! column count (see [`terminal_columns`]) so resolution stays testable.

use std::str::FromStr;

use crate::error::RenderError;

/// Column count used when no terminal is attached (e.g. output redirected).
pub const DEFAULT_TERMINAL_COLUMNS: u16 = 120;

/// A parsed `--width` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthSpec {
    /// Exact number of character columns
    Columns(i64),
    /// Percentage of the terminal width
    Percent(f64),
}

impl WidthSpec {
    /// Parse `"80"` or `"50%"` style tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use img2term::width::WidthSpec;
    ///
    /// assert_eq!(WidthSpec::parse("80").unwrap(), WidthSpec::Columns(80));
    /// assert_eq!(WidthSpec::parse("50%").unwrap(), WidthSpec::Percent(50.0));
    /// assert!(WidthSpec::parse("wide").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, RenderError> {
        let trimmed = token.trim();
        let invalid = || RenderError::InvalidWidthSpec(token.to_string());
        if let Some(number) = trimmed.strip_suffix('%') {
            let pct: f64 = number.trim().parse().map_err(|_| invalid())?;
            if !pct.is_finite() {
                return Err(invalid());
            }
            return Ok(WidthSpec::Percent(pct));
        }
        trimmed.parse::<i64>().map(WidthSpec::Columns).map_err(|_| invalid())
    }

    /// Resolve to a column count.
    ///
    /// Percentages are taken of `terminal_columns`, or of `fallback` when no
    /// terminal is attached, truncated and floored at 1.
    pub fn resolve(&self, terminal_columns: Option<u16>, fallback: u16) -> Result<u32, RenderError> {
        let columns = match *self {
            WidthSpec::Columns(n) => n,
            WidthSpec::Percent(pct) => {
                let cols = terminal_columns.unwrap_or(fallback) as f64;
                ((cols * pct / 100.0) as i64).max(1)
            }
        };
        if columns <= 0 {
            return Err(RenderError::InvalidDimensions(format!(
                "output width must be at least 1 column, got {}",
                columns
            )));
        }
        u32::try_from(columns).map_err(|_| {
            RenderError::InvalidDimensions(format!("output width {} is too large", columns))
        })
    }
}

impl FromStr for WidthSpec {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidthSpec::parse(s)
    }
}

impl std::fmt::Display for WidthSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidthSpec::Columns(n) => write!(f, "{}", n),
            WidthSpec::Percent(p) => write!(f, "{}%", p),
        }
    }
}

/// Columns of the terminal attached to stdout, or `None` when stdout is not
/// a terminal or its size cannot be read.
pub fn terminal_columns() -> Option<u16> {
    if !atty::is(atty::Stream::Stdout) {
        return None;
    }
    match crossterm::terminal::size() {
        Ok((cols, _rows)) if cols > 0 => Some(cols),
        _ => None,
    }
}
