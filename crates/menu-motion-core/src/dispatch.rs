//! Action dispatch.
//!
//! Resolves a menu item's target and action and invokes the action with the
//! calling convention its selector names: a trailing `:` passes the item,
//! anything else passes nothing.

use crate::error::DispatchError;
use crate::item::MenuItem;
use crate::logging::{OperationSpan, span_names, targets};
use crate::target::Invocation;

/// Invoke `item`'s action on its target.
///
/// Checks run in order: a target must be set, the target must still be
/// alive, an action must be set, and the target must respond to it.
///
/// # Errors
///
/// Returns the [`DispatchError`] for the first check that fails, or the
/// error reported by the target's handler table.
pub fn perform_action(item: &MenuItem) -> Result<(), DispatchError> {
    let _span = OperationSpan::new(span_names::DISPATCH, item.id().get());

    let result = dispatch(item);
    if let Err(err) = &result {
        tracing::warn!(
            target: targets::DISPATCH,
            item = %item.id(),
            action = item.action().map(|a| a.as_str()),
            %err,
            "menu action not delivered"
        );
    }
    result
}

fn dispatch(item: &MenuItem) -> Result<(), DispatchError> {
    let target = item
        .target_ref()
        .ok_or(DispatchError::NoTarget)?
        .upgrade()
        .ok_or(DispatchError::TargetReleased)?;
    let selector = item.action().ok_or(DispatchError::NoAction)?;

    if !target.responds_to(selector) {
        return Err(DispatchError::UnrecognizedSelector(selector.clone()));
    }

    let invocation = Invocation::for_selector(selector, item);
    tracing::trace!(
        target: targets::DISPATCH,
        item = %item.id(),
        %selector,
        with_sender = invocation.passes_sender(),
        "dispatching menu action"
    );
    target.invoke(selector, invocation)
}
