//! # Host interfaces
//!
//! ## Overview
//!
//! The registry doesn't know how the host application formats text, represents actions or
//! delivers events. These traits describe the small part of the host that it needs.
use crate::format::Formatter;
use crate::mode::ActivateKeyTable;

/// Name of the event fired by the host when the status line should be refreshed.
pub const UPDATE_RIGHT_STATUS: &str = "update-right-status";

/// The host application that key tables are built for.
pub trait Host: Formatter {
    /// The host's action type.
    type Action: Clone;

    /// Build the action that activates a named key table.
    fn activate_key_table(&self, args: ActivateKeyTable) -> Self::Action;
}

/// A host window, as seen by the status update hook.
pub trait StatusWindow {
    /// The name of the currently active key table, if any.
    fn active_key_table(&self) -> Option<String>;

    /// Replace the text shown on the right side of the status line.
    fn set_right_status(&mut self, text: &str);
}

/// A callback for host events.
pub type EventHandler = Box<dyn FnMut(&mut dyn StatusWindow)>;

/// Something that delivers host events to registered handlers.
pub trait EventSource {
    /// Call `handler` each time `event` fires.
    fn on(&mut self, event: &str, handler: EventHandler);
}
