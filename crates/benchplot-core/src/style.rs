// File: crates/benchplot-core/src/style.rs
// Summary: Per-series style descriptors (line form, marker, color) and format-string parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("unknown token `{token}` in format string `{fmt}`")]
    UnknownToken { token: char, fmt: String },
    #[error("format string `{fmt}` sets the {part} twice")]
    Repeated { part: &'static str, fmt: String },
    #[error("invalid color literal `{0}` (expected #rrggbb or #rrggbbaa)")]
    InvalidColor(String),
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Single-letter base colors of the classic plotting notation.
    pub fn from_code(code: char) -> Option<Self> {
        let c = match code {
            'b' => Rgba::rgb(0, 0, 255),
            'g' => Rgba::rgb(0, 128, 0),
            'r' => Rgba::rgb(255, 0, 0),
            'c' => Rgba::rgb(0, 191, 191),
            'm' => Rgba::rgb(191, 0, 191),
            'y' => Rgba::rgb(191, 191, 0),
            'k' => Rgba::BLACK,
            'w' => Rgba::WHITE,
            _ => return None,
        };
        Some(c)
    }
}

impl FromStr for Rgba {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || StyleParseError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Rgba::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Rgba {
    type Error = StyleParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

/// ggplot color cycle, in order.
pub const GGPLOT_CYCLE: [Rgba; 7] = [
    Rgba::rgb(0xE2, 0x4A, 0x33),
    Rgba::rgb(0x34, 0x8A, 0xBD),
    Rgba::rgb(0x98, 0x8E, 0xD5),
    Rgba::rgb(0x77, 0x77, 0x77),
    Rgba::rgb(0xFB, 0xC1, 0x5E),
    Rgba::rgb(0x8E, 0xBA, 0x42),
    Rgba::rgb(0xFF, 0xB5, 0xB8),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineForm {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    #[default]
    None,
    Point,
    Circle,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    Hexagon,
    Octagon,
    Star,
    Plus,
    Cross,
}

impl Marker {
    pub fn from_code(code: char) -> Option<Self> {
        let m = match code {
            '.' => Marker::Point,
            'o' => Marker::Circle,
            's' => Marker::Square,
            'D' => Marker::Diamond,
            '^' => Marker::TriangleUp,
            'v' => Marker::TriangleDown,
            'h' => Marker::Hexagon,
            '8' => Marker::Octagon,
            '*' => Marker::Star,
            '+' => Marker::Plus,
            'x' => Marker::Cross,
            _ => return None,
        };
        Some(m)
    }
}

/// How one series is drawn: connecting line, point marker, color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesStyle {
    #[serde(default)]
    pub line: LineForm,
    #[serde(default)]
    pub marker: Marker,
    pub color: Rgba,
}

/// Solid line, no marker, first ggplot cycle color.
impl Default for SeriesStyle {
    fn default() -> Self {
        Self::new(LineForm::Solid, Marker::None, GGPLOT_CYCLE[0])
    }
}

impl SeriesStyle {
    pub const fn new(line: LineForm, marker: Marker, color: Rgba) -> Self {
        Self { line, marker, color }
    }

    /// Parse a compact `[line][marker][color]` format string such as `-xk`.
    ///
    /// `color` is used when the string carries no color code. A string with a
    /// marker but no line token draws markers only; an empty string draws a
    /// solid line.
    pub fn from_fmt(fmt: &str, color: Rgba) -> Result<Self, StyleParseError> {
        let repeated = |part| StyleParseError::Repeated { part, fmt: fmt.to_string() };

        let mut line = None;
        let mut marker = None;
        let mut code_color = None;
        let mut rest = fmt;

        while let Some(c) = rest.chars().next() {
            let (found, width) = if rest.starts_with("--") {
                (Some(LineForm::Dashed), 2)
            } else if rest.starts_with("-.") {
                (Some(LineForm::DashDot), 2)
            } else if c == '-' {
                (Some(LineForm::Solid), 1)
            } else if c == ':' {
                (Some(LineForm::Dotted), 1)
            } else {
                (None, c.len_utf8())
            };

            if let Some(form) = found {
                if line.replace(form).is_some() {
                    return Err(repeated("line"));
                }
            } else if let Some(m) = Marker::from_code(c) {
                if marker.replace(m).is_some() {
                    return Err(repeated("marker"));
                }
            } else if let Some(col) = Rgba::from_code(c) {
                if code_color.replace(col).is_some() {
                    return Err(repeated("color"));
                }
            } else {
                return Err(StyleParseError::UnknownToken { token: c, fmt: fmt.to_string() });
            }
            rest = &rest[width..];
        }

        let line = match (line, marker) {
            (Some(l), _) => l,
            (None, Some(_)) => LineForm::None,
            (None, None) => LineForm::Solid,
        };
        Ok(Self {
            line,
            marker: marker.unwrap_or_default(),
            color: code_color.unwrap_or(color),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_marker_color() {
        let s = SeriesStyle::from_fmt("-xk", Rgba::WHITE).unwrap();
        assert_eq!(s, SeriesStyle::new(LineForm::Solid, Marker::Cross, Rgba::BLACK));

        let s = SeriesStyle::from_fmt("-hg", Rgba::WHITE).unwrap();
        assert_eq!(s.marker, Marker::Hexagon);
        assert_eq!(s.color, Rgba::rgb(0, 128, 0));
    }

    #[test]
    fn missing_color_uses_fallback() {
        let s = SeriesStyle::from_fmt("-8", GGPLOT_CYCLE[2]).unwrap();
        assert_eq!(s.marker, Marker::Octagon);
        assert_eq!(s.color, GGPLOT_CYCLE[2]);
    }

    #[test]
    fn two_char_line_tokens() {
        assert_eq!(SeriesStyle::from_fmt("--o", Rgba::BLACK).unwrap().line, LineForm::Dashed);
        assert_eq!(SeriesStyle::from_fmt("-.", Rgba::BLACK).unwrap().line, LineForm::DashDot);
        assert_eq!(SeriesStyle::from_fmt(":s", Rgba::BLACK).unwrap().line, LineForm::Dotted);
    }

    #[test]
    fn marker_only_has_no_line() {
        let s = SeriesStyle::from_fmt("o", Rgba::BLACK).unwrap();
        assert_eq!(s.line, LineForm::None);
        assert_eq!(SeriesStyle::from_fmt("", Rgba::BLACK).unwrap().line, LineForm::Solid);
    }

    #[test]
    fn rejects_bad_format_strings() {
        assert!(matches!(
            SeriesStyle::from_fmt("-q", Rgba::BLACK),
            Err(StyleParseError::UnknownToken { token: 'q', .. })
        ));
        assert!(matches!(
            SeriesStyle::from_fmt("-ox", Rgba::BLACK),
            Err(StyleParseError::Repeated { part: "marker", .. })
        ));
        assert!(matches!(
            SeriesStyle::from_fmt("-:", Rgba::BLACK),
            Err(StyleParseError::Repeated { part: "line", .. })
        ));
    }

    #[test]
    fn color_literals() {
        assert_eq!("#e24a33".parse::<Rgba>().unwrap(), GGPLOT_CYCLE[0]);
        assert_eq!("#00000080".parse::<Rgba>().unwrap(), Rgba::rgba(0, 0, 0, 0x80));
        assert_eq!(Rgba::rgba(1, 2, 3, 4).to_string(), "#01020304");
        assert!("e24a33".parse::<Rgba>().is_err());
        assert!("#e24a3".parse::<Rgba>().is_err());
    }
}
