//! Tracing targets and spans for Menu Motion.
//!
//! The crate emits events through the `tracing` crate and never installs a
//! subscriber. To see them, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("menu_motion_core::dispatch=trace")
//!     .init();
//! ```
//!
//! Levels used:
//! - `trace`: every action dispatch and every applied configuration
//! - `debug`: ignored configuration keys and rejected shortcut strings
//! - `warn`: dispatch failures and JSON keys that cannot carry a reference

/// Span names used when applying and dispatching.
pub mod span_names {
    /// Applying a configuration to an item.
    pub const APPLY: &str = "menu_motion::apply";
    /// Dispatching an item's action.
    pub const DISPATCH: &str = "menu_motion::dispatch";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "menu_motion_core";
    /// Configuration mapping target.
    pub const CONFIG: &str = "menu_motion_core::config";
    /// Action dispatch target.
    pub const DISPATCH: &str = "menu_motion_core::dispatch";
    /// Shortcut parsing target.
    pub const SHORTCUT: &str = "menu_motion_core::shortcut";
    /// Menu item target.
    pub const ITEM: &str = "menu_motion_core::item";
}

/// A guard that keeps a tracing span entered until dropped.
#[derive(Debug)]
pub struct OperationSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl OperationSpan {
    /// Enter a span for `operation` on the item with the given id.
    pub fn new(operation: &'static str, item: u64) -> Self {
        let span = tracing::trace_span!(target: targets::CORE, "menu_item", operation, item);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::CONFIG,
            targets::DISPATCH,
            targets::SHORTCUT,
            targets::ITEM,
        ] {
            assert!(target.starts_with(targets::CORE));
        }
    }

    #[test]
    fn test_span_without_subscriber() {
        let _span = OperationSpan::new(span_names::APPLY, 1);
    }
}
