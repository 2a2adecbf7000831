//! # keymodes
//!
//! ## Overview
//!
//! This crate builds modal key tables for terminal emulators that support named key tables, such
//! as [WezTerm](https://wezfurlong.org/wezterm/).
//!
//! A [Mode] groups a set of described key bindings under a name, a trigger key and a color. The
//! [Registry] turns a list of modes into:
//!
//! * a flat list of [KeyBind]s, one per mode, that activate each mode's key table when the
//!   trigger key is pressed along with the global modifier,
//! * a map from mode name to that mode's own key table,
//! * a map from mode name to a pre-rendered status line, listing a hint for each binding.
//!
//! The host application stays in charge of formatting and of its own action type: the registry
//! only talks to it through the [Host], [EventSource] and [StatusWindow] traits. An
//! [AnsiFormatter] is provided for hosts that want plain ANSI escape sequences.
//!
//! ## Example
//!
//! ```
//! use keymodes::{
//!     ActivateKeyTable,
//!     AnsiFormatter,
//!     FormatError,
//!     FormatItem,
//!     Formatter,
//!     Host,
//!     Mode,
//!     Registry,
//! };
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Action {
//!     Activate(String),
//!     SplitPane,
//!     CloseTab,
//! }
//!
//! struct Terminal;
//!
//! impl Formatter for Terminal {
//!     fn format(&self, items: &[FormatItem]) -> Result<String, FormatError> {
//!         AnsiFormatter.format(items)
//!     }
//! }
//!
//! impl Host for Terminal {
//!     type Action = Action;
//!
//!     fn activate_key_table(&self, args: ActivateKeyTable) -> Action {
//!         Action::Activate(args.name)
//!     }
//! }
//!
//! let pane = Mode::new("pane", "p".parse().unwrap(), "blue")
//!     .bind("s".parse().unwrap(), None, Action::SplitPane, "split");
//! let tab = Mode::new("tab", "t".parse().unwrap(), "yellow")
//!     .bind("x".parse().unwrap(), None, Action::CloseTab, "close");
//!
//! let registry = Registry::build(&Terminal, vec![pane, tab], None).unwrap();
//!
//! assert_eq!(registry.keys().len(), 2);
//! assert_eq!(registry.keys()[0].action, Action::Activate("pane".into()));
//! assert!(registry.mode_text("normal").unwrap().contains("NORMAL MODE"));
//! assert!(registry.mode_text("tab").unwrap().contains("close"));
//! assert!(registry.mode_text("window").is_none());
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]

#[macro_use]
mod util;

pub mod errors;
pub mod format;
pub mod host;
pub mod key;
pub mod merge;
pub mod mode;
pub mod options;
pub mod registry;

mod render;

pub use self::errors::{FormatError, KeyError, SetupError};
pub use self::format::{AnsiFormatter, FormatAttribute, FormatColor, FormatItem, Formatter};
pub use self::format::{Intensity, Underline};
pub use self::host::{EventHandler, EventSource, Host, StatusWindow, UPDATE_RIGHT_STATUS};
pub use self::key::{KeyDescriptor, KeyLayout, ModifierSet, Modifiers};
pub use self::merge::{extend_table, merge_tables, merge_value};
pub use self::mode::{ActivateKeyTable, DescribedKeyBind, KeyBind, Mode};
pub use self::options::{Options, Theme};
pub use self::registry::{Registry, NORMAL_MODE};

pub use crossterm;
pub use serde_json;
