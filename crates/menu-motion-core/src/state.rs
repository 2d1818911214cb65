//! Tri-state check mark values and the boolean `checked` adapter.

use serde::{Deserialize, Serialize};

/// The check mark state of a menu item.
///
/// Mirrors `NSControlStateValue`: `Mixed` is `-1`, `Off` is `0`, `On` is `1`.
/// Only `Off` and `On` are produced by [`ControlState::from_checked`]; `Mixed`
/// can still arrive through [`MenuItem::set_state`](crate::MenuItem::set_state)
/// or from the native item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlState {
    /// Partially checked (e.g. a selection with mixed attributes).
    Mixed = -1,
    /// Not checked.
    #[default]
    Off = 0,
    /// Checked.
    On = 1,
}

impl ControlState {
    /// Map a `checked` flag to a state.
    pub const fn from_checked(checked: bool) -> Self {
        if checked { Self::On } else { Self::Off }
    }

    /// Map a state back to a `checked` flag.
    ///
    /// `Mixed` reads as unchecked. The boolean view has no third value, so
    /// this is a deliberate approximation.
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::On)
    }

    /// Raw native value.
    pub const fn raw(self) -> isize {
        self as isize
    }

    /// Interpret a raw native value. Negative values are `Mixed`, positive
    /// values are `On`.
    pub const fn from_raw(raw: isize) -> Self {
        if raw < 0 {
            Self::Mixed
        } else if raw == 0 {
            Self::Off
        } else {
            Self::On
        }
    }
}

impl From<bool> for ControlState {
    fn from(checked: bool) -> Self {
        Self::from_checked(checked)
    }
}

impl From<ControlState> for bool {
    fn from(state: ControlState) -> Self {
        state.is_checked()
    }
}
