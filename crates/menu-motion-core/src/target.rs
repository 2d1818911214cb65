//! Action targets and name-based action lookup.
//!
//! A menu item's target is any type implementing [`Target`]. Most types get it
//! for free by implementing [`Responder`] and returning an [`ActionMap`] that
//! maps selectors to methods:
//!
//! ```
//! use std::sync::OnceLock;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! use menu_motion_core::{ActionMap, MenuItem, Responder};
//!
//! #[derive(Default)]
//! struct Document {
//!     saved: AtomicBool,
//! }
//!
//! impl Document {
//!     fn save(&self) {
//!         self.saved.store(true, Ordering::SeqCst);
//!     }
//!
//!     fn revert(&self, _sender: &MenuItem) {}
//! }
//!
//! impl Responder for Document {
//!     fn action_map() -> &'static ActionMap<Self> {
//!         static ACTIONS: OnceLock<ActionMap<Document>> = OnceLock::new();
//!         ACTIONS.get_or_init(|| {
//!             ActionMap::new()
//!                 .action("save", Document::save)
//!                 .action_with_sender("revert:", Document::revert)
//!         })
//!     }
//! }
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::error::DispatchError;
use crate::item::MenuItem;
use crate::selector::Selector;

/// How an action is to be called.
#[derive(Debug, Clone, Copy)]
pub enum Invocation<'a> {
    /// Call the action with no arguments.
    Plain,
    /// Call the action with the sending item as its only argument.
    WithSender(&'a MenuItem),
}

impl<'a> Invocation<'a> {
    /// Pick the calling convention from the selector's argument marker.
    pub fn for_selector(selector: &Selector, sender: &'a MenuItem) -> Self {
        if selector.takes_sender() {
            Self::WithSender(sender)
        } else {
            Self::Plain
        }
    }

    /// Whether the item is passed along.
    pub fn passes_sender(&self) -> bool {
        matches!(self, Self::WithSender(_))
    }
}

/// An object that can receive menu actions.
pub trait Target: Any + Send + Sync {
    /// Check whether the target exposes an action for `selector`.
    fn responds_to(&self, selector: &Selector) -> bool;

    /// Invoke the action named by `selector`.
    fn invoke(
        &self,
        selector: &Selector,
        invocation: Invocation<'_>,
    ) -> Result<(), DispatchError>;
}

/// A type whose actions are described by a static [`ActionMap`].
pub trait Responder: Send + Sync + Sized + 'static {
    /// The selector table for this type.
    fn action_map() -> &'static ActionMap<Self>;
}

impl<R: Responder> Target for R {
    fn responds_to(&self, selector: &Selector) -> bool {
        R::action_map().contains(selector)
    }

    fn invoke(
        &self,
        selector: &Selector,
        invocation: Invocation<'_>,
    ) -> Result<(), DispatchError> {
        R::action_map().invoke(self, selector, invocation)
    }
}

enum Handler<T> {
    Plain(fn(&T)),
    WithSender(fn(&T, &MenuItem)),
}

impl<T> Handler<T> {
    fn takes_sender(&self) -> bool {
        matches!(self, Self::WithSender(_))
    }
}

/// Selector-to-method table for a target type.
pub struct ActionMap<T> {
    handlers: HashMap<Selector, Handler<T>>,
}

impl<T> ActionMap<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register an action called without arguments.
    pub fn action(mut self, selector: impl Into<Selector>, handler: fn(&T)) -> Self {
        self.handlers.insert(selector.into(), Handler::Plain(handler));
        self
    }

    /// Register an action that receives the sending item.
    ///
    /// The selector should end in `:`; otherwise dispatch reports
    /// [`DispatchError::ArityMismatch`].
    pub fn action_with_sender(
        mut self,
        selector: impl Into<Selector>,
        handler: fn(&T, &MenuItem),
    ) -> Self {
        self.handlers
            .insert(selector.into(), Handler::WithSender(handler));
        self
    }

    /// Check whether a selector is registered.
    pub fn contains(&self, selector: &Selector) -> bool {
        self.handlers.contains_key(selector)
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered selectors, in no particular order.
    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.handlers.keys()
    }

    /// Call the handler for `selector` on `target`.
    pub fn invoke(
        &self,
        target: &T,
        selector: &Selector,
        invocation: Invocation<'_>,
    ) -> Result<(), DispatchError> {
        let handler = self
            .handlers
            .get(selector)
            .ok_or_else(|| DispatchError::UnrecognizedSelector(selector.clone()))?;

        match (handler, invocation) {
            (Handler::Plain(f), Invocation::Plain) => f(target),
            (Handler::WithSender(f), Invocation::WithSender(sender)) => f(target, sender),
            (handler, _) => {
                return Err(DispatchError::ArityMismatch {
                    selector: selector.clone(),
                    handler_takes_sender: handler.takes_sender(),
                });
            }
        }

        Ok(())
    }
}

impl<T> Default for ActionMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ActionMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut selectors: Vec<&str> = self.handlers.keys().map(Selector::as_str).collect();
        selectors.sort_unstable();
        f.debug_struct("ActionMap")
            .field("selectors", &selectors)
            .finish()
    }
}
