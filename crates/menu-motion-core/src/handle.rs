//! Non-owning references held by a menu item.
//!
//! A menu item never keeps its target, represented object or custom view
//! alive. Each is stored as a [`Weak`] pointer; once the owner drops the
//! value, the handle reads back as `None`.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::target::Target;

/// Any value that can be attached to a menu item.
pub type AnyObject = dyn Any + Send + Sync;

// ============================================================================
// TargetRef
// ============================================================================

/// A weak reference to an action target.
#[derive(Clone)]
pub struct TargetRef(Weak<dyn Target>);

impl TargetRef {
    /// Reference `target` without taking ownership.
    pub fn new<T: Target>(target: &Arc<T>) -> Self {
        let weak: Weak<T> = Arc::downgrade(target);
        Self(weak)
    }

    /// Get the target if it is still alive.
    pub fn upgrade(&self) -> Option<Arc<dyn Target>> {
        self.0.upgrade()
    }

    /// Check whether the target is still alive.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Check whether this handle refers to `target`.
    pub fn points_to<T: Target>(&self, target: &Arc<T>) -> bool {
        std::ptr::addr_eq(self.0.as_ptr(), Arc::as_ptr(target))
    }

    /// Check whether two handles refer to the same target.
    pub fn ptr_eq(&self, other: &TargetRef) -> bool {
        std::ptr::addr_eq(self.0.as_ptr(), other.0.as_ptr())
    }
}

impl<T: Target> From<&Arc<T>> for TargetRef {
    fn from(target: &Arc<T>) -> Self {
        Self::new(target)
    }
}

impl fmt::Debug for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRef")
            .field("alive", &self.is_alive())
            .finish()
    }
}

// ============================================================================
// ObjectRef
// ============================================================================

/// A weak reference to a menu item's represented object.
///
/// Objects created with [`ObjectRef::target`] can also receive actions and
/// stand in for a missing explicit target.
#[derive(Clone)]
pub struct ObjectRef {
    value: Weak<AnyObject>,
    target: Option<TargetRef>,
}

impl ObjectRef {
    /// Reference an arbitrary value.
    pub fn new<T: Any + Send + Sync>(value: &Arc<T>) -> Self {
        let weak: Weak<T> = Arc::downgrade(value);
        Self {
            value: weak,
            target: None,
        }
    }

    /// Reference a value that can also act as the item's target.
    pub fn target<T: Target>(value: &Arc<T>) -> Self {
        let weak: Weak<T> = Arc::downgrade(value);
        Self {
            value: weak,
            target: Some(TargetRef::new(value)),
        }
    }

    /// Get the object if it is still alive.
    pub fn upgrade(&self) -> Option<Arc<AnyObject>> {
        self.value.upgrade()
    }

    /// Get the object as a concrete type.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.upgrade()?.downcast::<T>().ok()
    }

    /// Check whether the object is still alive.
    pub fn is_alive(&self) -> bool {
        self.value.strong_count() > 0
    }

    /// The object's target view, if it was created with [`ObjectRef::target`].
    pub fn as_target(&self) -> Option<&TargetRef> {
        self.target.as_ref()
    }

    /// Check whether this handle refers to `value`.
    pub fn points_to<T: Any + Send + Sync>(&self, value: &Arc<T>) -> bool {
        std::ptr::addr_eq(self.value.as_ptr(), Arc::as_ptr(value))
    }
}

impl<T: Any + Send + Sync> From<&Arc<T>> for ObjectRef {
    fn from(value: &Arc<T>) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("alive", &self.is_alive())
            .field("is_target", &self.target.is_some())
            .finish()
    }
}

// ============================================================================
// ViewRef
// ============================================================================

/// A weak reference to a custom view drawn in place of the item's title.
#[derive(Clone)]
pub struct ViewRef(Weak<AnyObject>);

impl ViewRef {
    /// Reference `view` without taking ownership.
    pub fn new<T: Any + Send + Sync>(view: &Arc<T>) -> Self {
        let weak: Weak<T> = Arc::downgrade(view);
        Self(weak)
    }

    /// Get the view if it is still alive.
    pub fn upgrade(&self) -> Option<Arc<AnyObject>> {
        self.0.upgrade()
    }

    /// Get the view as a concrete type.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.upgrade()?.downcast::<T>().ok()
    }

    /// Check whether the view is still alive.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Check whether this handle refers to `view`.
    pub fn points_to<T: Any + Send + Sync>(&self, view: &Arc<T>) -> bool {
        std::ptr::addr_eq(self.0.as_ptr(), Arc::as_ptr(view))
    }
}

impl<T: Any + Send + Sync> From<&Arc<T>> for ViewRef {
    fn from(view: &Arc<T>) -> Self {
        Self::new(view)
    }
}

impl fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRef")
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{ActionMap, Responder};
    use std::sync::OnceLock;

    struct Panel;

    struct Sink;

    impl Responder for Sink {
        fn action_map() -> &'static ActionMap<Self> {
            static ACTIONS: OnceLock<ActionMap<Sink>> = OnceLock::new();
            ACTIONS.get_or_init(ActionMap::new)
        }
    }

    #[test]
    fn test_target_ref_is_weak() {
        let sink = Arc::new(Sink);
        let handle = TargetRef::new(&sink);
        assert!(handle.is_alive());
        assert!(handle.points_to(&sink));
        assert_eq!(Arc::strong_count(&sink), 1);

        drop(sink);
        assert!(!handle.is_alive());
        assert!(handle.upgrade().is_none());
    }

    #[test]
    fn test_target_ref_ptr_eq() {
        let a = Arc::new(Sink);
        let b = Arc::new(Sink);
        assert!(TargetRef::new(&a).ptr_eq(&TargetRef::from(&a)));
        assert!(!TargetRef::new(&a).ptr_eq(&TargetRef::new(&b)));
    }

    #[test]
    fn test_object_ref_downcast() {
        let value = Arc::new(String::from("payload"));
        let handle = ObjectRef::new(&value);
        assert_eq!(handle.downcast::<String>().as_deref().map(String::as_str), Some("payload"));
        assert!(handle.downcast::<u32>().is_none());
        assert!(handle.as_target().is_none());
    }

    #[test]
    fn test_object_ref_as_target() {
        let sink = Arc::new(Sink);
        let handle = ObjectRef::target(&sink);
        assert!(handle.points_to(&sink));
        assert!(handle.as_target().is_some_and(|t| t.points_to(&sink)));
    }

    #[test]
    fn test_view_ref_released() {
        let panel = Arc::new(Panel);
        let handle = ViewRef::from(&panel);
        assert!(handle.downcast::<Panel>().is_some());
        drop(panel);
        assert!(handle.upgrade().is_none());
    }
}
