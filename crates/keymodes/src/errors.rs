//! # Error Types
//!
//! ## Overview
//!
//! This module contains the errors returned while parsing keys, rendering status text and
//! setting up a [Registry](crate::Registry).

/// Errors returned while parsing a [KeyDescriptor](crate::KeyDescriptor) or
/// [Modifiers](crate::Modifiers).
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyError {
    /// Empty key string.
    #[error("Empty key string")]
    Empty,

    /// Failure to interpret a key string.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Failure to interpret a modifier string.
    #[error("Invalid modifiers: {0:?}")]
    InvalidModifiers(String),
}

/// Errors returned by a [Formatter](crate::Formatter).
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum FormatError {
    /// A color that the formatter doesn't know how to render.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Failure while writing escape sequences.
    #[error("Failed to write formatted text: {0}")]
    Write(#[from] std::fmt::Error),

    /// Failure reported by the host's own formatting engine.
    #[error("Host formatting error: {0}")]
    Host(String),
}

/// Errors returned from [Registry::setup](crate::Registry::setup).
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SetupError {
    /// The option overrides could not be combined with the defaults.
    #[error("Invalid options: {0}")]
    Options(#[from] serde_json::Error),

    /// Failure while rendering the status text of a mode.
    #[error("Failed to render status text for mode {mode:?}: {source}")]
    Render {
        /// The mode whose status text was being rendered.
        mode: String,

        /// The formatter's error.
        #[source]
        source: FormatError,
    },
}
