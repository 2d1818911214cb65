//! Core of Menu Motion: declarative configuration for native menu items.
//!
//! This crate holds the platform-independent parts:
//!
//! - [`shortcut`]: parses accelerator strings such as `"cmd+h"` or
//!   `"cmd-control-w"` into a key equivalent and a modifier mask
//! - [`state`]: the tri-state check mark and its boolean `checked` view
//! - [`config`]: the attribute mapping applied to an item
//! - [`item`]: the menu item itself, with construction and sparse updates
//! - [`dispatch`]: invokes the item's action on its target
//!
//! # Example
//!
//! ```
//! use std::sync::OnceLock;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! use menu_motion_core::{ActionMap, MenuItem, MenuItemConfig, Responder, selector};
//!
//! #[derive(Default)]
//! struct App {
//!     hidden: AtomicBool,
//! }
//!
//! impl App {
//!     fn hide(&self) {
//!         self.hidden.store(true, Ordering::SeqCst);
//!     }
//! }
//!
//! impl Responder for App {
//!     fn action_map() -> &'static ActionMap<Self> {
//!         static ACTIONS: OnceLock<ActionMap<App>> = OnceLock::new();
//!         ACTIONS.get_or_init(|| ActionMap::new().action("hide", App::hide))
//!     }
//! }
//!
//! let app = Arc::new(App::default());
//! let item = MenuItem::new(
//!     MenuItemConfig::new()
//!         .title("Hide")
//!         .target(&app)
//!         .action(selector!(hide))
//!         .shortcut("cmd+h"),
//! )?;
//!
//! item.perform_action()?;
//! assert!(app.hidden.load(Ordering::SeqCst));
//! # Ok::<(), menu_motion_core::Error>(())
//! ```

pub mod config;
pub mod dispatch;
mod error;
pub mod handle;
pub mod item;
pub mod logging;
pub mod selector;
pub mod shortcut;
pub mod state;
pub mod target;

pub use config::{ConfigKey, ConfigValue, MenuItemConfig, RECOGNIZED_KEYS};
pub use dispatch::perform_action;
pub use error::{ConfigError, DispatchError, Error, Result, ShortcutParseError};
pub use handle::{AnyObject, ObjectRef, TargetRef, ViewRef};
pub use item::{MenuItem, MenuItemId};
pub use selector::{ARGUMENT_MARKER, Selector};
pub use shortcut::{ModifierFlags, ShortcutSpec};
pub use state::ControlState;
pub use target::{ActionMap, Invocation, Responder, Target};
