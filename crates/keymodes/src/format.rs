//! # Styled text
//!
//! ## Overview
//!
//! Status text is described as a sequence of [FormatItem]s: attribute changes, foreground and
//! background colors, and literal text. The sequence is handed to a [Formatter], which turns it
//! into a single string that the host can display.
//!
//! [FormatItem] serializes to the same shape that WezTerm's `wezterm.format` accepts, so hosts
//! that want to do their own rendering can pass the items through unchanged:
//!
//! ```
//! use keymodes::{FormatColor, FormatItem};
//!
//! let item = FormatItem::Foreground(FormatColor::Color("red".into()));
//!
//! assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"Foreground":{"Color":"red"}}"#);
//! ```
//!
//! Hosts that just want ANSI escape sequences can use [AnsiFormatter].
use crossterm::style::{
    Attribute,
    Color,
    Print,
    SetAttribute,
    SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::Command;
use serde::{Deserialize, Serialize};

use crate::errors::FormatError;

/// Text weight.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Intensity {
    /// Regular weight.
    Normal,

    /// Bold weight.
    #[default]
    Bold,

    /// Dimmed text.
    Half,
}

/// Underline styles.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Underline {
    /// No underline.
    None,
    /// A single line.
    Single,
    /// Two lines.
    Double,
    /// A wavy line.
    Curly,
    /// A dotted line.
    Dotted,
    /// A dashed line.
    Dashed,
}

/// A text attribute.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum FormatAttribute {
    /// Set the underline style.
    Underline(Underline),

    /// Set the text weight.
    Intensity(Intensity),

    /// Turn italics on or off.
    Italic(bool),
}

/// A color, either by name or hex code, or by ANSI palette name.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum FormatColor {
    /// A named color (`"red"`) or a hex code (`"#ff0000"`).
    Color(String),

    /// A color from the terminal's ANSI palette.
    AnsiColor(String),
}

/// A single styling instruction.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum FormatItem {
    /// Change a text attribute.
    Attribute(FormatAttribute),

    /// Change the foreground color.
    Foreground(FormatColor),

    /// Change the background color.
    Background(FormatColor),

    /// Literal text, styled with the current attributes and colors.
    Text(String),
}

impl FormatItem {
    /// Shorthand for a [FormatItem::Foreground] using a named color.
    pub fn fg(color: &str) -> Self {
        FormatItem::Foreground(FormatColor::Color(color.to_string()))
    }

    /// Shorthand for a [FormatItem::Background] using a named color.
    pub fn bg(color: &str) -> Self {
        FormatItem::Background(FormatColor::Color(color.to_string()))
    }

    /// Shorthand for [FormatItem::Text].
    pub fn text(text: impl Into<String>) -> Self {
        FormatItem::Text(text.into())
    }
}

/// Turns a sequence of styling instructions into a string.
pub trait Formatter {
    /// Render `items` into a single string.
    fn format(&self, items: &[FormatItem]) -> Result<String, FormatError>;
}

/// A [Formatter] that writes ANSI escape sequences.
///
/// Colors can be given as any name understood by [crossterm's Color](Color) (`"red"`,
/// `"dark_grey"`, ...), or as a `#rrggbb` hex code. The rendered string always ends by resetting
/// all attributes, so that styles don't leak into whatever text follows it.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiFormatter;

impl AnsiFormatter {
    fn color(color: &FormatColor) -> Result<Color, FormatError> {
        let s = match color {
            FormatColor::Color(s) | FormatColor::AnsiColor(s) => s.as_str(),
        };

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| FormatError::InvalidColor(s.to_string()));
        }

        let name = s.to_ascii_lowercase();

        Color::try_from(name.as_str()).map_err(|_| FormatError::InvalidColor(s.to_string()))
    }

    fn attribute(attr: &FormatAttribute) -> Attribute {
        match attr {
            FormatAttribute::Intensity(Intensity::Normal) => Attribute::NormalIntensity,
            FormatAttribute::Intensity(Intensity::Bold) => Attribute::Bold,
            FormatAttribute::Intensity(Intensity::Half) => Attribute::Dim,
            FormatAttribute::Italic(true) => Attribute::Italic,
            FormatAttribute::Italic(false) => Attribute::NoItalic,
            FormatAttribute::Underline(Underline::None) => Attribute::NoUnderline,
            FormatAttribute::Underline(Underline::Single) => Attribute::Underlined,
            FormatAttribute::Underline(Underline::Double) => Attribute::DoubleUnderlined,
            FormatAttribute::Underline(Underline::Curly) => Attribute::Undercurled,
            FormatAttribute::Underline(Underline::Dotted) => Attribute::Underdotted,
            FormatAttribute::Underline(Underline::Dashed) => Attribute::Underdashed,
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb { r, g, b })
}

impl Formatter for AnsiFormatter {
    fn format(&self, items: &[FormatItem]) -> Result<String, FormatError> {
        let mut out = String::new();

        for item in items {
            match item {
                FormatItem::Attribute(attr) => {
                    SetAttribute(Self::attribute(attr)).write_ansi(&mut out)?;
                },
                FormatItem::Foreground(color) => {
                    SetForegroundColor(Self::color(color)?).write_ansi(&mut out)?;
                },
                FormatItem::Background(color) => {
                    SetBackgroundColor(Self::color(color)?).write_ansi(&mut out)?;
                },
                FormatItem::Text(text) => {
                    Print(text).write_ansi(&mut out)?;
                },
            }
        }

        SetAttribute(Attribute::Reset).write_ansi(&mut out)?;

        return Ok(out);
    }
}

/// Remove ANSI escape sequences from rendered text, leaving only what would be displayed.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\u{1B}' {
            out.push(c);
            continue;
        }

        // Skip "[", any parameters, and the final byte.
        for c in chars.by_ref() {
            if c.is_ascii_alphabetic() {
                break;
            }
        }
    }

    return out;
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESC: &str = "\u{1B}";

    #[test]
    fn test_serialize_shape() {
        let items = vec![
            FormatItem::Attribute(FormatAttribute::Intensity(Intensity::Bold)),
            FormatItem::fg("white"),
            FormatItem::Background(FormatColor::AnsiColor("Maroon".into())),
            FormatItem::text("hi"),
        ];

        assert_eq!(
            serde_json::to_value(&items).unwrap(),
            serde_json::json!([
                {"Attribute": {"Intensity": "Bold"}},
                {"Foreground": {"Color": "white"}},
                {"Background": {"AnsiColor": "Maroon"}},
                {"Text": "hi"},
            ])
        );
    }

    #[test]
    fn test_ansi_text() {
        let out = AnsiFormatter.format(&[FormatItem::text("plain")]).unwrap();

        assert_eq!(out, format!("plain{ESC}[0m"));
    }

    #[test]
    fn test_ansi_colors() {
        let out = AnsiFormatter
            .format(&[
                FormatItem::Attribute(FormatAttribute::Intensity(Intensity::Bold)),
                FormatItem::fg("red"),
                FormatItem::bg("#0080ff"),
                FormatItem::text("x"),
            ])
            .unwrap();

        assert_eq!(out, format!("{ESC}[1m{ESC}[38;5;9m{ESC}[48;2;0;128;255mx{ESC}[0m"));
    }

    #[test]
    fn test_ansi_color_names() {
        assert_eq!(AnsiFormatter::color(&FormatColor::Color("Black".into())).unwrap(), Color::Black);
        assert_eq!(
            AnsiFormatter::color(&FormatColor::AnsiColor("dark_grey".into())).unwrap(),
            Color::DarkGrey
        );
        assert_eq!(
            AnsiFormatter::color(&FormatColor::Color("#FFFFFF".into())).unwrap(),
            Color::Rgb { r: 255, g: 255, b: 255 }
        );
    }

    #[test]
    fn test_ansi_invalid_color() {
        let err = AnsiFormatter.format(&[FormatItem::fg("chartreuse")]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidColor(c) if c == "chartreuse"));

        let err = AnsiFormatter.format(&[FormatItem::bg("#12345")]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidColor(c) if c == "#12345"));
    }

    #[test]
    fn test_strip_ansi() {
        let out = AnsiFormatter
            .format(&[
                FormatItem::Attribute(FormatAttribute::Italic(true)),
                FormatItem::fg("green"),
                FormatItem::text("<h"),
                FormatItem::fg("white"),
                FormatItem::text("> left"),
            ])
            .unwrap();

        assert_eq!(strip_ansi(&out), "<h> left");
    }
}
