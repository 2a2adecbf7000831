//! # Options
//!
//! ## Overview
//!
//! [Options] control the global modifier used to enter modes and how status text is styled.
//! Callers usually only want to change a handful of values, so overrides are given as a partial
//! JSON mapping that gets merged over the defaults:
//!
//! ```
//! use keymodes::{Modifiers, Options};
//! use serde_json::json;
//!
//! let opts = Options::resolve(Some(&json!({
//!     "modifier": "ALT|SHIFT",
//!     "theme": { "hint_color": "cyan" },
//! })))
//! .unwrap();
//!
//! assert_eq!(opts.modifier.flags(), Modifiers::ALT | Modifiers::SHIFT);
//! assert_eq!(opts.modifier.to_string(), "ALT|SHIFT");
//! assert_eq!(opts.theme.hint_color, "cyan");
//! assert_eq!(opts.theme.text_color, "white");
//! ```
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::Intensity;
use crate::key::{ModifierSet, Modifiers};
use crate::merge::merge_value;

/// Colors and weight used when rendering status text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Theme {
    /// Color of the modifier prefix, and background of the normal mode's badge.
    pub normal_mode_color: String,

    /// Color of the key in each hint.
    pub hint_color: String,

    /// Color of the text inside mode badges.
    pub mode_text_color: String,

    /// Color of hint descriptions and punctuation.
    pub text_color: String,

    /// Text weight used throughout.
    pub intensity: Intensity,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal_mode_color: "red".into(),
            hint_color: "green".into(),
            mode_text_color: "black".into(),
            text_color: "white".into(),
            intensity: Intensity::Bold,
        }
    }
}

/// Options for building key tables and status text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Options {
    /// The modifier held along with a mode's key to enter it. Its label is shown as written at
    /// the start of the normal status text.
    pub modifier: ModifierSet,

    /// Text placed between hints.
    pub hint_separator: String,

    /// A glyph drawn in the mode's color just before its badge, such as a powerline arrow.
    pub badge_glyph: Option<String>,

    /// Status text styling.
    pub theme: Theme,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            modifier: Modifiers::CTRL.into(),
            hint_separator: "/".into(),
            badge_glyph: None,
            theme: Theme::default(),
        }
    }
}

impl Options {
    /// Merge `overrides` over the default options.
    ///
    /// Nested mappings are merged key by key, so overriding one theme color leaves the others at
    /// their defaults. Keys that don't correspond to any option are ignored.
    pub fn resolve(overrides: Option<&Value>) -> Result<Self, serde_json::Error> {
        Options::default().merge(overrides)
    }

    /// Merge `overrides` over these options.
    pub fn merge(&self, overrides: Option<&Value>) -> Result<Self, serde_json::Error> {
        let Some(overrides) = overrides else {
            return Ok(self.clone());
        };

        let mut value = serde_json::to_value(self)?;
        merge_value(&mut value, overrides);

        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let opts = Options::resolve(None).unwrap();

        assert_eq!(opts, Options::default());
        assert_eq!(opts.modifier.flags(), Modifiers::CTRL);
        assert_eq!(opts.hint_separator, "/");
        assert_eq!(opts.badge_glyph, None);
        assert_eq!(opts.theme.normal_mode_color, "red");
        assert_eq!(opts.theme.hint_color, "green");
        assert_eq!(opts.theme.mode_text_color, "black");
        assert_eq!(opts.theme.text_color, "white");
        assert_eq!(opts.theme.intensity, Intensity::Bold);
    }

    #[test]
    fn test_empty_override() {
        let opts = Options::resolve(Some(&json!({}))).unwrap();

        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_partial_theme_override() {
        let opts = Options::resolve(Some(&json!({
            "hint_separator": "|",
            "badge_glyph": "\u{e0b2}",
            "theme": {
                "normal_mode_color": "#336699",
                "intensity": "Half",
            },
        })))
        .unwrap();

        assert_eq!(opts.modifier.flags(), Modifiers::CTRL);
        assert_eq!(opts.hint_separator, "|");
        assert_eq!(opts.badge_glyph.as_deref(), Some("\u{e0b2}"));
        assert_eq!(opts.theme.normal_mode_color, "#336699");
        assert_eq!(opts.theme.intensity, Intensity::Half);
        assert_eq!(opts.theme.hint_color, "green");
        assert_eq!(opts.theme.text_color, "white");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let opts = Options::resolve(Some(&json!({"colour": "blue"}))).unwrap();

        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_merge_over_existing() {
        let base = Options::resolve(Some(&json!({"modifier": "SUPER"}))).unwrap();
        let opts = base.merge(Some(&json!({"theme": {"text_color": "grey"}}))).unwrap();

        assert_eq!(opts.modifier.flags(), Modifiers::SUPER);
        assert_eq!(opts.theme.text_color, "grey");
    }

    #[test]
    fn test_modifier_order_kept() {
        let opts = Options::resolve(Some(&json!({"modifier": "ALT|CTRL"}))).unwrap();

        assert_eq!(opts.modifier.flags(), Modifiers::CTRL | Modifiers::ALT);
        assert_eq!(opts.modifier.label(), "ALT|CTRL");

        // Merging again goes through the serialized label, which keeps the order.
        let opts = opts.merge(Some(&json!({"hint_separator": "|"}))).unwrap();
        assert_eq!(opts.modifier.label(), "ALT|CTRL");
    }

    #[test]
    fn test_invalid_overrides() {
        assert!(Options::resolve(Some(&json!({"modifier": "HYPER"}))).is_err());
        assert!(Options::resolve(Some(&json!({"theme": "dark"}))).is_err());
        assert!(Options::resolve(Some(&json!({"hint_separator": 3}))).is_err());
        assert!(Options::resolve(Some(&json!(["CTRL"]))).is_err());
    }
}
