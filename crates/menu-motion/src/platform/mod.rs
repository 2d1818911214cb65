//! Native menu integration.
//!
//! On macOS, [`NativeMenuItem`] mirrors a [`MenuItem`](crate::MenuItem) onto
//! an AppKit `NSMenuItem`:
//!
//! ```ignore
//! use menu_motion::platform::NativeMenuItem;
//!
//! // Must be called from the main thread.
//! let native = NativeMenuItem::from_menu_item(&item)?;
//! menu.addItem(native.native());
//! ```
//!
//! Other platforms have no native layer; the core item is used directly.

#[cfg(target_os = "macos")]
mod macos_menu;

#[cfg(target_os = "macos")]
pub use macos_menu::{NativeMenuError, NativeMenuItem};
