//! macOS native menu item support.
//!
//! [`NativeMenuItem`] owns an AppKit `NSMenuItem` and copies a
//! [`MenuItem`]'s title, key equivalent, modifier mask and check mark state
//! onto it. The native item's tag carries the [`MenuItemId`] so the host can
//! route a click back to [`MenuItem::perform_action`].
//!
//! # Thread Safety
//!
//! All operations must be performed on the main thread (AppKit requirement).
//! [`NativeMenuItem::from_menu_item`] returns an error if called from a
//! non-main thread.

use std::fmt;

use objc2::MainThreadMarker;
use objc2::rc::Retained;
use objc2_app_kit::{NSEventModifierFlags, NSMenuItem};
use objc2_foundation::NSString;

use menu_motion_core::logging::targets;
use menu_motion_core::{ControlState, MenuItem, MenuItemId, ModifierFlags};

// ============================================================================
// Error Types
// ============================================================================

/// Error type for native menu operations.
#[derive(Debug)]
pub struct NativeMenuError {
    kind: NativeMenuErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NativeMenuErrorKind {
    /// Operation requires main thread.
    NotMainThread,
}

impl NativeMenuError {
    fn not_main_thread() -> Self {
        Self {
            kind: NativeMenuErrorKind::NotMainThread,
            message: "macOS menu operations must be performed on the main thread".into(),
        }
    }

    /// Check if the error is due to not being on the main thread.
    pub fn is_not_main_thread(&self) -> bool {
        self.kind == NativeMenuErrorKind::NotMainThread
    }
}

impl fmt::Display for NativeMenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NativeMenuErrorKind::NotMainThread => {
                write!(f, "not on main thread: {}", self.message)
            }
        }
    }
}

impl std::error::Error for NativeMenuError {}

// ============================================================================
// NativeMenuItem
// ============================================================================

/// An `NSMenuItem` kept in step with a [`MenuItem`].
pub struct NativeMenuItem {
    item: Retained<NSMenuItem>,
    _mtm: MainThreadMarker,
}

impl NativeMenuItem {
    /// Create a native item and copy `item`'s attributes onto it.
    ///
    /// # Errors
    ///
    /// Returns [`NativeMenuError`] if not called from the main thread.
    pub fn from_menu_item(item: &MenuItem) -> Result<Self, NativeMenuError> {
        let mtm = MainThreadMarker::new().ok_or_else(NativeMenuError::not_main_thread)?;
        let native = Self {
            item: NSMenuItem::new(mtm),
            _mtm: mtm,
        };
        native.sync(item);
        Ok(native)
    }

    /// Copy `item`'s current attributes onto the native item.
    pub fn sync(&self, item: &MenuItem) {
        let key_equivalent = item.key_equivalent();
        self.item.setTitle(&NSString::from_str(item.title()));
        self.item
            .setKeyEquivalent(&NSString::from_str(&key_equivalent));
        self.item
            .setKeyEquivalentModifierMask(to_native_modifiers(item.key_equivalent_modifier_mask()));
        self.item.setState(item.state().raw());
        self.item.setTag(item_tag(item.id()));

        tracing::trace!(
            target: targets::CORE,
            item = %item.id(),
            key_equivalent = %key_equivalent.escape_unicode(),
            "synced native menu item"
        );
    }

    /// Copy the native check mark state back, e.g. after AppKit toggled it.
    pub fn pull_state(&self, item: &mut MenuItem) {
        item.set_state(ControlState::from_raw(self.item.state()));
    }

    /// Check whether this native item was created for `item`.
    pub fn is_for(&self, item: &MenuItem) -> bool {
        self.item.tag() == item_tag(item.id())
    }

    /// The underlying `NSMenuItem`.
    pub fn native(&self) -> &NSMenuItem {
        &self.item
    }
}

impl fmt::Debug for NativeMenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeMenuItem")
            .field("tag", &self.item.tag())
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert core modifier flags to `NSEventModifierFlags`.
fn to_native_modifiers(modifiers: ModifierFlags) -> NSEventModifierFlags {
    let mut flags = NSEventModifierFlags::empty();

    if modifiers.contains(ModifierFlags::SHIFT) {
        flags |= NSEventModifierFlags::Shift;
    }
    if modifiers.contains(ModifierFlags::CONTROL) {
        flags |= NSEventModifierFlags::Control;
    }
    if modifiers.contains(ModifierFlags::OPTION) {
        flags |= NSEventModifierFlags::Option;
    }
    if modifiers.contains(ModifierFlags::COMMAND) {
        flags |= NSEventModifierFlags::Command;
    }

    flags
}

fn item_tag(id: MenuItemId) -> isize {
    id.get() as isize
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_bits_match_appkit() {
        assert_eq!(
            to_native_modifiers(ModifierFlags::SHIFT).bits() as u64,
            ModifierFlags::SHIFT.bits()
        );
        assert_eq!(
            to_native_modifiers(ModifierFlags::CONTROL).bits() as u64,
            ModifierFlags::CONTROL.bits()
        );
        assert_eq!(
            to_native_modifiers(ModifierFlags::OPTION).bits() as u64,
            ModifierFlags::OPTION.bits()
        );
        assert_eq!(
            to_native_modifiers(ModifierFlags::COMMAND).bits() as u64,
            ModifierFlags::COMMAND.bits()
        );
    }

    #[test]
    fn test_combined_modifiers() {
        let flags = to_native_modifiers(ModifierFlags::COMMAND | ModifierFlags::CONTROL);
        assert_eq!(flags, NSEventModifierFlags::Command | NSEventModifierFlags::Control);
        assert!(to_native_modifiers(ModifierFlags::NONE).is_empty());
    }

    #[test]
    fn test_native_menu_error_display() {
        let err = NativeMenuError::not_main_thread();
        assert!(err.to_string().contains("main thread"));
        assert!(err.is_not_main_thread());
    }
}
