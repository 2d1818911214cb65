//! Menu Motion - declarative configuration for native menu items.
//!
//! This is the umbrella crate. It re-exports everything from
//! `menu_motion_core` and adds the platform layer that copies a configured
//! [`MenuItem`] onto the host's native menu item.
//!
//! # Example
//!
//! ```
//! use menu_motion::{MenuItem, MenuItemConfig};
//!
//! let mut item = MenuItem::new(
//!     MenuItemConfig::new()
//!         .title("Hello World")
//!         .action("dummy_action")
//!         .shortcut("cmd+h"),
//! )?;
//! item.set_checked(true);
//! assert!(item.is_checked());
//! # Ok::<(), menu_motion::Error>(())
//! ```

pub use menu_motion_core::*;

pub mod platform;
