//! # Mode registry
//!
//! ## Overview
//!
//! The [Registry] holds everything built from a list of [Mode]s: the bindings that enter each
//! mode, each mode's key table, and the rendered status text for each mode (plus
//! [NORMAL_MODE], shown when no mode is active).
//!
//! Registries are populated by [Registry::setup]. Calling it again adds to what is already
//! there: entering bindings are appended, while key tables and status text for a repeated mode
//! name replace the earlier ones.
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::errors::SetupError;
use crate::host::{EventSource, Host, StatusWindow, UPDATE_RIGHT_STATUS};
use crate::mode::{DescribedKeyBind, KeyBind, Mode};
use crate::options::Options;
use crate::render;

/// Name of the status text shown when no key table is active.
pub const NORMAL_MODE: &str = "normal";

/// Key bindings and status text built from a list of modes.
#[derive(Clone, Debug)]
pub struct Registry<A> {
    keys: Vec<KeyBind<A>>,
    mode_texts: HashMap<String, String>,
    key_tables: HashMap<String, Vec<DescribedKeyBind<A>>>,
    options: Option<Options>,
}

impl<A> Default for Registry<A> {
    fn default() -> Self {
        Registry {
            keys: vec![],
            mode_texts: HashMap::new(),
            key_tables: HashMap::new(),
            options: None,
        }
    }
}

impl<A> Registry<A> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry and populate it with [Registry::setup].
    pub fn build<H>(
        host: &H,
        modes: Vec<Mode<A>>,
        overrides: Option<&Value>,
    ) -> Result<Self, SetupError>
    where
        H: Host<Action = A>,
    {
        let mut registry = Registry::new();
        registry.setup(host, modes, overrides)?;

        Ok(registry)
    }

    /// Register `modes`, using `overrides` merged over the default [Options].
    ///
    /// For each mode, in order, this adds a binding that activates the mode's key table when its
    /// key is pressed with [Options::modifier], stores the mode's key table, and renders its
    /// status text. The status text for [NORMAL_MODE] lists every mode in `modes`.
    ///
    /// If the formatter fails, setup stops: modes handled before the failing one keep their
    /// entries, the failing mode keeps its binding and key table but has no status text, and
    /// the modes after it are left out.
    pub fn setup<H>(
        &mut self,
        host: &H,
        modes: Vec<Mode<A>>,
        overrides: Option<&Value>,
    ) -> Result<(), SetupError>
    where
        H: Host<Action = A>,
    {
        let options = Options::resolve(overrides)?;

        debug!(modifier = %options.modifier, modes = modes.len(), "setting up modes");

        let entries = modes.iter().map(|m| (&m.key, m.name.as_str()));
        let normal = render::normal_text(host, &options, entries).map_err(|source| {
            SetupError::Render { mode: NORMAL_MODE.to_string(), source }
        })?;

        self.mode_texts.insert(NORMAL_MODE.to_string(), normal);
        self.options = Some(options.clone());

        for mode in modes {
            let action = host.activate_key_table(mode.activation());

            debug!(
                mode = mode.name.as_str(),
                key = %mode.key,
                binds = mode.key_table.len(),
                "registering mode"
            );

            let mods = Some(options.modifier.flags());
            self.keys.push(KeyBind { key: mode.key, mods, action });
            self.key_tables.insert(mode.name.clone(), mode.key_table);

            let binds = self.key_tables[&mode.name].iter().map(|b| (&b.bind.key, b.desc.as_str()));
            let text = render::mode_text(host, &options, &mode.name, &mode.color, binds)
                .map_err(|source| SetupError::Render { mode: mode.name.clone(), source })?;

            self.mode_texts.insert(mode.name, text);
        }

        Ok(())
    }

    /// The rendered status text for a mode, if it has been registered.
    pub fn mode_text(&self, name: &str) -> Option<&str> {
        self.mode_texts.get(name).map(String::as_str)
    }

    /// The bindings that enter each registered mode, in registration order.
    pub fn keys(&self) -> &[KeyBind<A>] {
        self.keys.as_slice()
    }

    /// The key table of each registered mode.
    pub fn key_tables(&self) -> &HashMap<String, Vec<DescribedKeyBind<A>>> {
        &self.key_tables
    }

    /// The options used by the most recent setup.
    pub fn options(&self) -> Option<&Options> {
        self.options.as_ref()
    }

    /// Show the status text for the window's active key table.
    ///
    /// When no key table is active, the [NORMAL_MODE] text is shown. If the active key table
    /// wasn't registered here, the window is left untouched.
    pub fn update_status(&self, window: &mut dyn StatusWindow) {
        let active = window.active_key_table();
        let name = active.as_deref().unwrap_or(NORMAL_MODE);

        match self.mode_text(name) {
            Some(text) => {
                trace!(mode = name, "updating status");
                window.set_right_status(text);
            },
            None => {
                warn!(mode = name, "no status text for active key table");
            },
        }
    }
}

impl<A: 'static> Registry<A> {
    /// Update the window's status text from this registry each time the host fires
    /// [UPDATE_RIGHT_STATUS].
    pub fn register_status_update_hook<E>(self: &Rc<Self>, events: &mut E)
    where
        E: EventSource + ?Sized,
    {
        let registry = Rc::clone(self);

        events.on(
            UPDATE_RIGHT_STATUS,
            Box::new(move |window: &mut dyn StatusWindow| registry.update_status(window)),
        );
    }
}
