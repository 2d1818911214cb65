//! Action identifiers.
//!
//! A [`Selector`] names a method on a menu item's target. Whether the method
//! receives the item as its argument is decided by the name alone: a trailing
//! [`ARGUMENT_MARKER`] (`:`) means it does.
//!
//! Selectors can be built from strings at runtime or from identifiers with the
//! [`selector!`](crate::selector!) macro. Both produce the same value:
//!
//! ```
//! use menu_motion_core::{Selector, selector};
//!
//! assert_eq!(selector!(save), Selector::new("save"));
//! assert_eq!(selector!(save_as:), Selector::new("save_as:"));
//! assert!(selector!(save_as:).takes_sender());
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Trailing character marking an action that receives the sending item.
pub const ARGUMENT_MARKER: char = ':';

/// The name of an action, normalized from a string or a symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(Cow<'static, str>);

impl Selector {
    /// Create a selector from a runtime name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Create a selector from a static name without allocating.
    ///
    /// This is what [`selector!`](crate::selector!) expands to.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The full selector string, including any argument marker.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The method name without the argument marker.
    pub fn name(&self) -> &str {
        self.0.strip_suffix(ARGUMENT_MARKER).unwrap_or(&self.0)
    }

    /// Whether the action receives the sending item as its argument.
    pub fn takes_sender(&self) -> bool {
        self.0.ends_with(ARGUMENT_MARKER)
    }

    /// Check if the selector is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Self(Cow::Owned(name.to_string()))
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&Selector> for Selector {
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Selector {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Build a [`Selector`] from a symbolic name.
///
/// `selector!(refresh)` names a plain action; `selector!(open_item:)` names an
/// action that receives the sending item.
#[macro_export]
macro_rules! selector {
    ($name:ident :) => {
        $crate::Selector::from_static(concat!(stringify!($name), ":"))
    };
    ($name:ident) => {
        $crate::Selector::from_static(stringify!($name))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_plain_selector() {
        let sel = Selector::new("dummy_action");
        assert!(!sel.takes_sender());
        assert_eq!(sel.name(), "dummy_action");
        assert_eq!(sel.as_str(), "dummy_action");
    }

    #[test]
    fn test_sender_selector() {
        let sel = Selector::new("dummy_action_with_sender:");
        assert!(sel.takes_sender());
        assert_eq!(sel.name(), "dummy_action_with_sender");
        assert_eq!(sel.to_string(), "dummy_action_with_sender:");
    }

    #[test]
    fn test_macro_matches_string() {
        assert_eq!(selector!(dummy_action), Selector::from("dummy_action"));
        assert_eq!(
            selector!(dummy_action_with_sender:),
            Selector::from(String::from("dummy_action_with_sender:"))
        );
        assert!(selector!(dummy_action_with_sender:).takes_sender());
    }

    #[test]
    fn test_borrowed_and_owned_hash_alike() {
        let mut set = HashSet::new();
        set.insert(selector!(refresh));
        assert!(set.contains(&Selector::new(String::from("refresh"))));
        assert!(set.contains("refresh"));
    }

    #[test]
    fn test_empty_selector() {
        assert!(Selector::new("").is_empty());
        assert!(!Selector::new(":").is_empty());
        assert!(Selector::new(":").takes_sender());
    }

    #[test]
    fn test_serde_transparent() {
        let sel: Selector = serde_json::from_str("\"open_item:\"").unwrap();
        assert_eq!(sel, selector!(open_item:));
        assert_eq!(serde_json::to_string(&sel).unwrap(), "\"open_item:\"");
    }
}
