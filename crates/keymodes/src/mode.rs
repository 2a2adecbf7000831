//! # Modes
//!
//! ## Overview
//!
//! A [Mode] is a named key table, entered by pressing its trigger key along with the global
//! modifier. Each binding in the table carries a short description, which is shown as a hint in
//! the mode's status text.
//!
//! Actions are opaque: `A` is whatever type the host uses for its actions, and is passed through
//! without being inspected.
use serde::{Deserialize, Serialize};

use crate::key::{KeyDescriptor, Modifiers};

/// A key binding in the shape the host expects.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct KeyBind<A> {
    /// The key that triggers this binding.
    pub key: KeyDescriptor,

    /// Modifiers that must be held along with the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mods: Option<Modifiers>,

    /// What the host should do when the binding is triggered.
    pub action: A,
}

/// A key binding inside a mode, along with a description to show in the mode's status text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DescribedKeyBind<A> {
    /// The binding itself.
    #[serde(flatten)]
    pub bind: KeyBind<A>,

    /// A short, human-readable description of the action.
    pub desc: String,
}

impl<A> DescribedKeyBind<A> {
    /// Create a new described binding.
    pub fn new(
        key: KeyDescriptor,
        mods: Option<Modifiers>,
        action: A,
        desc: impl Into<String>,
    ) -> Self {
        let bind = KeyBind { key, mods, action };

        DescribedKeyBind { bind, desc: desc.into() }
    }

    /// Drop the description, leaving the binding in the host's shape.
    pub fn into_key_bind(self) -> KeyBind<A> {
        self.bind
    }
}

/// Parameters for the host action that activates a mode's key table.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ActivateKeyTable {
    /// The name of the key table to activate.
    pub name: String,

    /// Leave the key table after a single binding has been triggered.
    pub one_shot: bool,

    /// Stay in the key table until a key that isn't in it is pressed.
    pub until_unknown: bool,

    /// Don't fall back to bindings outside of the key table for unknown keys.
    pub prevent_fallback: bool,
}

/// A named set of key bindings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Mode<A> {
    /// The mode's name, which is also the name of its key table.
    pub name: String,

    /// The key that enters this mode, along with the global modifier.
    pub key: KeyDescriptor,

    /// Background color for this mode's badge in the status text.
    pub color: String,

    /// Bindings available while the mode is active.
    #[serde(default = "Vec::new")]
    pub key_table: Vec<DescribedKeyBind<A>>,

    /// See [ActivateKeyTable::one_shot].
    #[serde(default)]
    pub one_shot: bool,

    /// See [ActivateKeyTable::until_unknown].
    #[serde(default)]
    pub until_unknown: bool,

    /// See [ActivateKeyTable::prevent_fallback].
    #[serde(default)]
    pub prevent_fallback: bool,
}

impl<A> Mode<A> {
    /// Create a new mode with an empty key table.
    pub fn new(name: impl Into<String>, key: KeyDescriptor, color: impl Into<String>) -> Self {
        Mode {
            name: name.into(),
            key,
            color: color.into(),
            key_table: vec![],
            one_shot: false,
            until_unknown: false,
            prevent_fallback: false,
        }
    }

    /// Add a binding to this mode's key table.
    pub fn bind(
        mut self,
        key: KeyDescriptor,
        mods: Option<Modifiers>,
        action: A,
        desc: &str,
    ) -> Self {
        self.key_table.push(DescribedKeyBind::new(key, mods, action, desc));
        self
    }

    /// Set whether this mode is left after one binding.
    pub fn one_shot(mut self, one_shot: bool) -> Self {
        self.one_shot = one_shot;
        self
    }

    /// Set whether this mode stays active until an unknown key is pressed.
    pub fn until_unknown(mut self, until_unknown: bool) -> Self {
        self.until_unknown = until_unknown;
        self
    }

    /// Set whether unknown keys are kept from falling back to other bindings.
    pub fn prevent_fallback(mut self, prevent_fallback: bool) -> Self {
        self.prevent_fallback = prevent_fallback;
        self
    }

    /// The parameters for activating this mode's key table.
    pub fn activation(&self) -> ActivateKeyTable {
        ActivateKeyTable {
            name: self.name.clone(),
            one_shot: self.one_shot,
            until_unknown: self.until_unknown,
            prevent_fallback: self.prevent_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let mode = Mode::new("pane", key!("p"), "blue")
            .bind(key!("h"), None, "left", "focus left")
            .bind(key!("phys:s"), Some(mods!("SHIFT")), "split", "split")
            .one_shot(true)
            .prevent_fallback(true);

        assert_eq!(mode.key_table.len(), 2);
        assert_eq!(mode.key_table[1].bind.mods, Some(Modifiers::SHIFT));
        assert_eq!(mode.activation(), ActivateKeyTable {
            name: "pane".into(),
            one_shot: true,
            until_unknown: false,
            prevent_fallback: true,
        });
    }

    #[test]
    fn test_deserialize_mode() {
        let mode: Mode<String> = serde_json::from_value(json!({
            "name": "tab",
            "key": "t",
            "color": "#ffaa00",
            "key_table": [
                {"key": "n", "action": "NextTab", "desc": "next"},
                {"key": "mapped:x", "mods": "CTRL|SHIFT", "action": "CloseTab", "desc": "close"},
            ],
            "until_unknown": true,
        }))
        .unwrap();

        assert_eq!(mode.name, "tab");
        assert_eq!(mode.key, key!("t"));
        assert!(mode.until_unknown);
        assert!(!mode.one_shot);
        assert_eq!(mode.key_table, vec![
            DescribedKeyBind::new(key!("n"), None, "NextTab".to_string(), "next"),
            DescribedKeyBind::new(
                key!("mapped:x"),
                Some(Modifiers::CTRL | Modifiers::SHIFT),
                "CloseTab".to_string(),
                "close"
            ),
        ]);
    }

    #[test]
    fn test_serialize_key_bind() {
        let bind = DescribedKeyBind::new(key!("h"), Some(Modifiers::ALT), 3, "left");

        assert_eq!(
            serde_json::to_value(&bind).unwrap(),
            json!({"key": "h", "mods": "ALT", "action": 3, "desc": "left"})
        );
        assert_eq!(
            serde_json::to_value(bind.into_key_bind()).unwrap(),
            json!({"key": "h", "mods": "ALT", "action": 3})
        );
    }

    #[test]
    fn test_deserialize_mode_missing_key() {
        let res = serde_json::from_value::<Mode<String>>(json!({
            "name": "tab",
            "key": "",
            "color": "red",
        }));

        assert!(res.is_err());
    }
}
