//! Declarative menu item configuration.
//!
//! A [`MenuItemConfig`] lists the attributes to write onto a
//! [`MenuItem`](crate::MenuItem). Every field is optional; only the fields
//! that are set are applied, so the same type serves for construction and
//! for sparse updates.
//!
//! Configurations are usually built with the typed builder:
//!
//! ```
//! use menu_motion_core::MenuItemConfig;
//!
//! let config = MenuItemConfig::new()
//!     .title("Close Window")
//!     .action("close_window:")
//!     .shortcut("cmd-control-w")
//!     .checked(false);
//! assert_eq!(config.keys().count(), 4);
//! ```
//!
//! Loose mappings go through [`MenuItemConfig::from_entries`] or
//! [`MenuItemConfig::from_json`]. Keys outside [`RECOGNIZED_KEYS`] are
//! ignored and logged at `debug`.

use std::fmt;

use crate::error::ConfigError;
use crate::handle::{ObjectRef, TargetRef, ViewRef};
use crate::logging::targets;
use crate::selector::Selector;

// ============================================================================
// ConfigKey
// ============================================================================

/// A recognized configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Title,
    Target,
    Action,
    Shortcut,
    Object,
    Checked,
    View,
}

/// Every key a configuration mapping may carry.
pub const RECOGNIZED_KEYS: [&str; 7] = [
    "title", "target", "action", "shortcut", "object", "checked", "view",
];

impl ConfigKey {
    /// All keys, in application order.
    pub const ALL: [ConfigKey; 7] = [
        ConfigKey::Title,
        ConfigKey::Target,
        ConfigKey::Action,
        ConfigKey::Shortcut,
        ConfigKey::Object,
        ConfigKey::Checked,
        ConfigKey::View,
    ];

    /// The mapping key for this field.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Title => "title",
            ConfigKey::Target => "target",
            ConfigKey::Action => "action",
            ConfigKey::Shortcut => "shortcut",
            ConfigKey::Object => "object",
            ConfigKey::Checked => "checked",
            ConfigKey::View => "view",
        }
    }

    /// Look up a mapping key. Matching is exact.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Description of the value kind this key accepts.
    pub const fn expected(self) -> &'static str {
        match self {
            ConfigKey::Title => "a string",
            ConfigKey::Target => "a target reference",
            ConfigKey::Action => "a string or selector",
            ConfigKey::Shortcut => "a shortcut string",
            ConfigKey::Object => "an object reference",
            ConfigKey::Checked => "a boolean",
            ConfigKey::View => "a view reference",
        }
    }

    /// Whether the key carries a reference rather than plain data.
    pub const fn is_reference(self) -> bool {
        matches!(self, ConfigKey::Target | ConfigKey::Object | ConfigKey::View)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ConfigValue
// ============================================================================

/// A loosely typed configuration value.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    Text(String),
    Bool(bool),
    Selector(Selector),
    Target(TargetRef),
    Object(ObjectRef),
    View(ViewRef),
}

impl ConfigValue {
    fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Text(_) => "text",
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Selector(_) => "selector",
            ConfigValue::Target(_) => "target",
            ConfigValue::Object(_) => "object",
            ConfigValue::View(_) => "view",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<Selector> for ConfigValue {
    fn from(value: Selector) -> Self {
        ConfigValue::Selector(value)
    }
}

impl From<TargetRef> for ConfigValue {
    fn from(value: TargetRef) -> Self {
        ConfigValue::Target(value)
    }
}

impl From<ObjectRef> for ConfigValue {
    fn from(value: ObjectRef) -> Self {
        ConfigValue::Object(value)
    }
}

impl From<ViewRef> for ConfigValue {
    fn from(value: ViewRef) -> Self {
        ConfigValue::View(value)
    }
}

// ============================================================================
// MenuItemConfig
// ============================================================================

/// Attributes to apply to a menu item.
///
/// The shortcut is kept as the raw accelerator string and parsed when the
/// configuration is applied.
#[derive(Debug, Clone, Default)]
pub struct MenuItemConfig {
    pub title: Option<String>,
    pub target: Option<TargetRef>,
    pub action: Option<Selector>,
    pub shortcut: Option<String>,
    pub object: Option<ObjectRef>,
    pub checked: Option<bool>,
    pub view: Option<ViewRef>,
}

impl MenuItemConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the action target.
    pub fn target(mut self, target: impl Into<TargetRef>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the action.
    pub fn action(mut self, action: impl Into<Selector>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the accelerator string, e.g. `"cmd+h"`.
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Set the represented object.
    pub fn object(mut self, object: impl Into<ObjectRef>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Set the check mark.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Set the custom view.
    pub fn view(mut self, view: impl Into<ViewRef>) -> Self {
        self.view = Some(view.into());
        self
    }

    /// Check if no key is set.
    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }

    /// The keys that are set, in application order.
    pub fn keys(&self) -> impl Iterator<Item = ConfigKey> + '_ {
        ConfigKey::ALL.into_iter().filter(|key| self.contains(*key))
    }

    /// Check whether `key` is set.
    pub fn contains(&self, key: ConfigKey) -> bool {
        match key {
            ConfigKey::Title => self.title.is_some(),
            ConfigKey::Target => self.target.is_some(),
            ConfigKey::Action => self.action.is_some(),
            ConfigKey::Shortcut => self.shortcut.is_some(),
            ConfigKey::Object => self.object.is_some(),
            ConfigKey::Checked => self.checked.is_some(),
            ConfigKey::View => self.view.is_some(),
        }
    }

    /// Set `key` from a loosely typed value.
    ///
    /// `action` accepts text or a selector. Every other key accepts exactly
    /// one value kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the value kind does not match.
    pub fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<(), ConfigError> {
        match (key, value) {
            (ConfigKey::Title, ConfigValue::Text(title)) => self.title = Some(title),
            (ConfigKey::Target, ConfigValue::Target(target)) => self.target = Some(target),
            (ConfigKey::Action, ConfigValue::Text(action)) => {
                self.action = Some(Selector::from(action));
            }
            (ConfigKey::Action, ConfigValue::Selector(action)) => self.action = Some(action),
            (ConfigKey::Shortcut, ConfigValue::Text(shortcut)) => self.shortcut = Some(shortcut),
            (ConfigKey::Object, ConfigValue::Object(object)) => self.object = Some(object),
            (ConfigKey::Checked, ConfigValue::Bool(checked)) => self.checked = Some(checked),
            (ConfigKey::View, ConfigValue::View(view)) => self.view = Some(view),
            (key, value) => {
                tracing::debug!(
                    target: targets::CONFIG,
                    key = key.as_str(),
                    kind = value.kind(),
                    "rejected configuration value"
                );
                return Err(ConfigError::invalid_value(key.as_str(), key.expected()));
            }
        }
        Ok(())
    }

    /// Build a configuration from `(key, value)` pairs.
    ///
    /// Unrecognized keys are skipped. Later entries for the same key win.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a recognized key carries the
    /// wrong value kind.
    pub fn from_entries<K, I>(entries: I) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, ConfigValue)>,
    {
        let mut config = Self::new();
        for (key, value) in entries {
            let key = key.as_ref();
            match ConfigKey::from_key(key) {
                Some(known) => config.set(known, value)?,
                None => {
                    tracing::debug!(target: targets::CONFIG, key, "ignoring unrecognized configuration key");
                }
            }
        }
        Ok(config)
    }

    /// Build a configuration from a JSON object.
    ///
    /// Only `title`, `action`, `shortcut` and `checked` can be expressed in
    /// JSON. Reference keys are skipped with a warning, unknown keys with a
    /// debug event.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAnObject`] if `value` is not an object, and
    /// [`ConfigError::InvalidValue`] if a plain-data key has the wrong type.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        let map = value.as_object().ok_or(ConfigError::NotAnObject)?;
        let mut config = Self::new();

        for (key, value) in map {
            let Some(known) = ConfigKey::from_key(key) else {
                tracing::debug!(target: targets::CONFIG, key = key.as_str(), "ignoring unrecognized configuration key");
                continue;
            };

            if known.is_reference() {
                tracing::warn!(
                    target: targets::CONFIG,
                    key = key.as_str(),
                    "reference keys cannot be loaded from JSON; ignoring"
                );
                continue;
            }

            let value = match value {
                serde_json::Value::String(s) => ConfigValue::Text(s.clone()),
                serde_json::Value::Bool(b) => ConfigValue::Bool(*b),
                _ => return Err(ConfigError::invalid_value(known.as_str(), known.expected())),
            };
            config.set(known, value)?;
        }

        Ok(config)
    }
}
