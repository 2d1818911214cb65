//! Error types for Menu Motion.

use crate::selector::Selector;

/// Result type alias for menu item operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or activating a menu item.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `shortcut` value could not be parsed.
    #[error("invalid shortcut: {0}")]
    Shortcut(#[from] ShortcutParseError),

    /// The configured action could not be delivered.
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// A configuration mapping carried a value of the wrong kind.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Error type for parsing accelerator strings such as `"cmd+h"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutParseError {
    /// The string is empty.
    #[error("empty shortcut")]
    Empty,

    /// Two separators follow each other, or a separator leads or trails.
    #[error("empty token in shortcut '{0}'")]
    EmptyToken(String),

    /// A token is neither a modifier nor a key.
    #[error("unknown token '{token}' in shortcut '{shortcut}'")]
    UnknownToken { shortcut: String, token: String },

    /// Only modifiers were given.
    #[error("no key specified in shortcut '{0}' (only modifiers)")]
    NoKey(String),

    /// More than one non-modifier token was given.
    #[error("more than one key in shortcut '{0}'")]
    MultipleKeys(String),
}

impl ShortcutParseError {
    pub(crate) fn unknown_token(shortcut: &str, token: &str) -> Self {
        Self::UnknownToken {
            shortcut: shortcut.to_string(),
            token: token.to_string(),
        }
    }
}

/// Errors raised by [`perform_action`](crate::dispatch::perform_action).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No target was ever configured.
    #[error("menu item has no target")]
    NoTarget,

    /// The target was configured but has since been dropped.
    #[error("menu item target has been released")]
    TargetReleased,

    /// No action was configured.
    #[error("menu item has no action")]
    NoAction,

    /// The target does not respond to the selector.
    #[error("target does not respond to '{0}'")]
    UnrecognizedSelector(Selector),

    /// The handler registered for the selector disagrees with its argument marker.
    #[error("action '{selector}' is registered {}", arity_hint(.handler_takes_sender))]
    ArityMismatch {
        selector: Selector,
        handler_takes_sender: bool,
    },
}

fn arity_hint(handler_takes_sender: &bool) -> &'static str {
    if *handler_takes_sender {
        "with a sender but the selector has no ':'"
    } else {
        "without a sender but the selector ends in ':'"
    }
}

/// Errors raised while building a [`MenuItemConfig`](crate::config::MenuItemConfig)
/// from a loose mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A recognized key carried a value of the wrong kind.
    #[error("invalid value for '{key}': expected {expected}")]
    InvalidValue { key: String, expected: &'static str },

    /// A JSON payload was not an object.
    #[error("menu item configuration must be a JSON object")]
    NotAnObject,
}

impl ConfigError {
    /// Create a value error.
    pub fn invalid_value(key: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidValue {
            key: key.into(),
            expected,
        }
    }
}
