//! The configurable menu item.
//!
//! [`MenuItem`] holds the native-facing fields of a menu entry (title, key
//! equivalent, modifier mask, represented object, target, action, state and
//! view) and writes a [`MenuItemConfig`] onto them.
//!
//! # Example
//!
//! ```
//! use menu_motion_core::{ControlState, MenuItem, MenuItemConfig, ModifierFlags};
//!
//! let mut item = MenuItem::new(
//!     MenuItemConfig::new()
//!         .title("Close Window")
//!         .action("close_window:")
//!         .shortcut("cmd-control-w"),
//! )?;
//! assert_eq!(item.key_equivalent(), "w");
//! assert_eq!(
//!     item.key_equivalent_modifier_mask(),
//!     ModifierFlags::COMMAND | ModifierFlags::CONTROL
//! );
//!
//! // Updates only touch the keys they carry.
//! item.update(MenuItemConfig::new().checked(true))?;
//! assert_eq!(item.title(), "Close Window");
//! assert_eq!(item.state(), ControlState::On);
//! # Ok::<(), menu_motion_core::Error>(())
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::MenuItemConfig;
use crate::dispatch;
use crate::error::{DispatchError, Result};
use crate::handle::{AnyObject, ObjectRef, TargetRef, ViewRef};
use crate::logging::{OperationSpan, span_names, targets};
use crate::selector::Selector;
use crate::shortcut::{self, ModifierFlags, ShortcutSpec};
use crate::state::ControlState;
use crate::target::Target;

// ============================================================================
// MenuItemId
// ============================================================================

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`MenuItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuItemId(u64);

impl MenuItemId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MenuItem#{}", self.0)
    }
}

/// Where the current target came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TargetOrigin {
    #[default]
    Unset,
    /// Set through the `target` key or [`MenuItem::set_target`].
    Explicit,
    /// Taken from a target-capable represented object.
    RepresentedObject,
}

// ============================================================================
// MenuItem
// ============================================================================

/// A menu entry configured from a declarative attribute mapping.
///
/// Target, represented object and view are held weakly; the item never
/// keeps them alive.
#[derive(Debug)]
pub struct MenuItem {
    id: MenuItemId,
    title: String,
    shortcut: Option<ShortcutSpec>,
    represented_object: Option<ObjectRef>,
    target: Option<TargetRef>,
    target_origin: TargetOrigin,
    action: Option<Selector>,
    state: ControlState,
    view: Option<ViewRef>,
}

static_assertions::assert_impl_all!(MenuItem: Send, Sync);
static_assertions::assert_impl_all!(MenuItemId: Send, Sync, Copy);

impl MenuItem {
    /// Create an item and apply `config` to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shortcut`](crate::Error::Shortcut) if the shortcut
    /// does not parse.
    pub fn new(config: MenuItemConfig) -> Result<Self> {
        let mut item = Self::empty();
        item.apply(config)?;
        Ok(item)
    }

    /// Create an item with no attributes set.
    pub fn empty() -> Self {
        Self {
            id: MenuItemId::next(),
            title: String::new(),
            shortcut: None,
            represented_object: None,
            target: None,
            target_origin: TargetOrigin::Unset,
            action: None,
            state: ControlState::Off,
            view: None,
        }
    }

    /// Apply a sparse configuration. Keys not present are left alone.
    ///
    /// # Errors
    ///
    /// See [`MenuItem::apply`].
    pub fn update(&mut self, config: MenuItemConfig) -> Result<()> {
        self.apply(config)
    }

    /// Write every key present in `config` onto the item.
    ///
    /// The shortcut is parsed before any field is written, so on error the
    /// item is unchanged.
    ///
    /// When `config` carries an `object` but no `target`, and the current
    /// target was not set explicitly, the target follows the object: it
    /// becomes the object if that was created with
    /// [`ObjectRef::target`], and is cleared otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shortcut`](crate::Error::Shortcut) if the shortcut
    /// does not parse.
    pub fn apply(&mut self, config: MenuItemConfig) -> Result<()> {
        let _span = OperationSpan::new(span_names::APPLY, self.id.get());

        let shortcut = match config.shortcut.as_deref().map(shortcut::parse).transpose() {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(target: targets::SHORTCUT, item = %self.id, %err, "rejected shortcut");
                return Err(err.into());
            }
        };

        tracing::trace!(
            target: targets::ITEM,
            item = %self.id,
            keys = ?config.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            "applying configuration"
        );

        let MenuItemConfig {
            title,
            target,
            action,
            shortcut: _,
            object,
            checked,
            view,
        } = config;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(target) = target {
            self.target = Some(target);
            self.target_origin = TargetOrigin::Explicit;
        }
        if let Some(action) = action {
            self.action = Some(action);
        }
        if let Some(spec) = shortcut {
            self.shortcut = Some(spec);
        }
        if let Some(object) = object {
            if self.target_origin != TargetOrigin::Explicit {
                self.target = object.as_target().cloned();
                self.target_origin = if self.target.is_some() {
                    TargetOrigin::RepresentedObject
                } else {
                    TargetOrigin::Unset
                };
            }
            self.represented_object = Some(object);
        }
        if let Some(checked) = checked {
            self.state = ControlState::from_checked(checked);
        }
        if let Some(view) = view {
            self.view = Some(view);
        }

        Ok(())
    }

    /// The item's identity.
    pub fn id(&self) -> MenuItemId {
        self.id
    }

    // =========================================================================
    // Title and shortcut
    // =========================================================================

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the display title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The parsed shortcut, if one was applied.
    pub fn shortcut(&self) -> Option<&ShortcutSpec> {
        self.shortcut.as_ref()
    }

    /// Parse and set the shortcut.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shortcut`](crate::Error::Shortcut) and leaves the
    /// current shortcut in place if `accelerator` does not parse.
    pub fn set_shortcut(&mut self, accelerator: &str) -> Result<()> {
        self.apply(MenuItemConfig::new().shortcut(accelerator))
    }

    /// Remove the shortcut. Key equivalent and mask become empty.
    pub fn clear_shortcut(&mut self) {
        self.shortcut = None;
    }

    /// The key equivalent, or an empty string without a shortcut.
    pub fn key_equivalent(&self) -> String {
        self.shortcut
            .as_ref()
            .map(ShortcutSpec::key_equivalent)
            .unwrap_or_default()
    }

    /// The key equivalent modifier mask, zero without a shortcut.
    pub fn key_equivalent_modifier_mask(&self) -> ModifierFlags {
        self.shortcut
            .map(|spec| spec.modifiers)
            .unwrap_or(ModifierFlags::NONE)
    }

    // =========================================================================
    // Represented object and view
    // =========================================================================

    /// The represented object, if set and still alive.
    pub fn represented_object(&self) -> Option<Arc<AnyObject>> {
        self.represented_object.as_ref()?.upgrade()
    }

    /// Alias for [`MenuItem::represented_object`].
    pub fn object(&self) -> Option<Arc<AnyObject>> {
        self.represented_object()
    }

    /// The represented object handle as stored.
    pub fn object_ref(&self) -> Option<&ObjectRef> {
        self.represented_object.as_ref()
    }

    /// The custom view, if set and still alive.
    pub fn view(&self) -> Option<Arc<AnyObject>> {
        self.view.as_ref()?.upgrade()
    }

    /// The custom view handle as stored.
    pub fn view_ref(&self) -> Option<&ViewRef> {
        self.view.as_ref()
    }

    // =========================================================================
    // Target and action
    // =========================================================================

    /// The target, if set and still alive.
    pub fn target(&self) -> Option<Arc<dyn Target>> {
        self.target.as_ref()?.upgrade()
    }

    /// The target handle as stored, alive or not.
    pub fn target_ref(&self) -> Option<&TargetRef> {
        self.target.as_ref()
    }

    /// Check whether a live target is set.
    pub fn has_target(&self) -> bool {
        self.target.as_ref().is_some_and(TargetRef::is_alive)
    }

    /// Set the target explicitly.
    pub fn set_target(&mut self, target: impl Into<TargetRef>) {
        self.target = Some(target.into());
        self.target_origin = TargetOrigin::Explicit;
    }

    /// Remove the target. A later `object` may supply one again.
    pub fn clear_target(&mut self) {
        self.target = None;
        self.target_origin = TargetOrigin::Unset;
    }

    /// The action, if set.
    pub fn action(&self) -> Option<&Selector> {
        self.action.as_ref()
    }

    /// Set the action.
    pub fn set_action(&mut self, action: impl Into<Selector>) {
        self.action = Some(action.into());
    }

    /// Invoke the action on the target.
    ///
    /// Actions ending in `:` receive this item; others are called without
    /// arguments.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the target or action is missing, the
    /// target was released, or the target does not respond to the action.
    pub fn perform_action(&self) -> std::result::Result<(), DispatchError> {
        dispatch::perform_action(self)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The raw check mark state.
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Set the raw check mark state.
    pub fn set_state(&mut self, state: ControlState) {
        self.state = state;
    }

    /// Whether the item shows a check mark. `Mixed` reads as `false`.
    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// Show or hide the check mark.
    pub fn set_checked(&mut self, checked: bool) {
        self.state = ControlState::from_checked(checked);
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        Self::empty()
    }
}
