//! # Keys and modifiers
//!
//! ## Overview
//!
//! This module contains the key descriptors and modifier sets used in key bindings. Both are
//! written the same way the host's configuration writes them, so `"phys:a"` and `"CTRL|SHIFT"`
//! parse into [KeyDescriptor] and [Modifiers], and display back unchanged. A [ModifierSet] also
//! keeps the order its modifiers were written in, for showing to the user.
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use self::parse::{parse_key_str, parse_modifiers_str};
use crate::errors::KeyError;

pub(crate) mod parse;

/// How the host should interpret a key name.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum KeyLayout {
    /// Let the host apply its default interpretation.
    #[default]
    Default,

    /// Match the key after the keyboard layout has been applied (`mapped:`).
    Mapped,

    /// Match the physical key position, regardless of layout (`phys:`).
    Physical,
}

impl KeyLayout {
    /// The prefix written before a key name for this layout.
    pub fn prefix(&self) -> &'static str {
        match self {
            KeyLayout::Default => "",
            KeyLayout::Mapped => "mapped:",
            KeyLayout::Physical => "phys:",
        }
    }
}

/// A key that triggers a binding.
///
/// The key name is passed through to the host as-is: it can be a single character, or a named
/// key like `LeftArrow`, `Enter` or `F5`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeyDescriptor {
    layout: KeyLayout,
    name: String,
}

impl KeyDescriptor {
    /// Create a new key descriptor.
    pub fn new(layout: KeyLayout, name: impl Into<String>) -> Self {
        KeyDescriptor { layout, name: name.into() }
    }

    /// How this key should be interpreted.
    pub fn layout(&self) -> KeyLayout {
        self.layout
    }

    /// The key name, without any layout prefix.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl FromStr for KeyDescriptor {
    type Err = KeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(KeyError::Empty);
        } else if let Ok((_, key)) = parse_key_str(input) {
            return Ok(key);
        } else {
            return Err(KeyError::InvalidKey(input.to_string()));
        }
    }
}

impl fmt::Display for KeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.layout.prefix(), self.name)
    }
}

impl Serialize for KeyDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        s.parse().map_err(serde::de::Error::custom)
    }
}

bitflags! {
    /// A set of modifier keys held along with a key.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Modifiers: u16 {
        /// The Super key.
        const SUPER = 0b0000_0000_0001;

        /// The Command key; the same physical key as [Modifiers::SUPER].
        const CMD = 0b0000_0000_0010;

        /// The Windows key; the same physical key as [Modifiers::SUPER].
        const WIN = 0b0000_0000_0100;

        /// The Control key.
        const CTRL = 0b0000_0000_1000;

        /// The Shift key.
        const SHIFT = 0b0000_0001_0000;

        /// The Alt key.
        const ALT = 0b0000_0010_0000;

        /// The Option key; the same physical key as [Modifiers::ALT].
        const OPT = 0b0000_0100_0000;

        /// The Meta key; the same physical key as [Modifiers::ALT].
        const META = 0b0000_1000_0000;

        /// The host's leader key.
        const LEADER = 0b0001_0000_0000;

        /// A modifier that is never pressed.
        const VOID_SYMBOL = 0b0010_0000_0000;
    }
}

/// Names for each modifier, in display order.
pub(crate) const MODIFIER_NAMES: [(Modifiers, &str); 10] = [
    (Modifiers::SUPER, "SUPER"),
    (Modifiers::CMD, "CMD"),
    (Modifiers::WIN, "WIN"),
    (Modifiers::CTRL, "CTRL"),
    (Modifiers::SHIFT, "SHIFT"),
    (Modifiers::ALT, "ALT"),
    (Modifiers::OPT, "OPT"),
    (Modifiers::META, "META"),
    (Modifiers::LEADER, "LEADER"),
    (Modifiers::VOID_SYMBOL, "VoidSymbol"),
];

impl FromStr for Modifiers {
    type Err = KeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().is_empty() {
            return Err(KeyError::Empty);
        } else if let Ok((_, mods)) = parse_modifiers_str(input) {
            return Ok(mods);
        } else {
            return Err(KeyError::InvalidModifiers(input.to_string()));
        }
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }

        let mut first = true;

        for (flag, name) in MODIFIER_NAMES.iter() {
            if !self.contains(*flag) {
                continue;
            }

            if !first {
                write!(f, "|")?;
            }

            write!(f, "{name}")?;
            first = false;
        }

        Ok(())
    }
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Modifiers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A [Modifiers] set that remembers how it was written.
///
/// The flags are what gets bound, while the label is what gets shown, so `"ALT|CTRL"` displays
/// as `ALT|CTRL` rather than in declaration order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModifierSet {
    flags: Modifiers,
    label: String,
}

impl ModifierSet {
    /// The modifiers in this set.
    pub fn flags(&self) -> Modifiers {
        self.flags
    }

    /// The set as it was written.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}

impl From<Modifiers> for ModifierSet {
    fn from(flags: Modifiers) -> Self {
        ModifierSet { flags, label: flags.to_string() }
    }
}

impl FromStr for ModifierSet {
    type Err = KeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let flags = input.parse::<Modifiers>()?;
        let label = input.split('|').map(str::trim).collect::<Vec<_>>().join("|");

        Ok(ModifierSet { flags, label })
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl Serialize for ModifierSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModifierSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        s.parse().map_err(serde::de::Error::custom)
    }
}
