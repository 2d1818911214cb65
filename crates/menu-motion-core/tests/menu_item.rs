//! Integration tests for menu item configuration and action dispatch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once, OnceLock};

use menu_motion_core::{
    ActionMap, ConfigValue, ControlState, DispatchError, Error, MenuItem, MenuItemConfig,
    MenuItemId, ModifierFlags, ObjectRef, Responder, ShortcutParseError, TargetRef, ViewRef,
    selector,
};
use parking_lot::Mutex;
use serde_json::json;

fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("menu_motion_core=trace")
            .with_test_writer()
            .try_init();
    });
}

#[derive(Default)]
struct Dummy {
    action_completed: AtomicBool,
    sender: Mutex<Option<MenuItemId>>,
}

impl Dummy {
    fn dummy_action(&self) {
        self.action_completed.store(true, Ordering::SeqCst);
    }

    fn dummy_action_with_sender(&self, sender: &MenuItem) {
        *self.sender.lock() = Some(sender.id());
    }
}

impl Responder for Dummy {
    fn action_map() -> &'static ActionMap<Self> {
        static ACTIONS: OnceLock<ActionMap<Dummy>> = OnceLock::new();
        ACTIONS.get_or_init(|| {
            ActionMap::new()
                .action(selector!(dummy_action), Dummy::dummy_action)
                .action_with_sender(
                    selector!(dummy_action_with_sender:),
                    Dummy::dummy_action_with_sender,
                )
        })
    }
}

/// Stand-in for a custom view.
struct View;

#[test]
fn test_full_configuration_sets_every_field() {
    setup();
    let dummy = Arc::new(Dummy::default());
    let view = Arc::new(View);

    let item = MenuItem::new(
        MenuItemConfig::new()
            .title("Hello World")
            .target(&dummy)
            .action("dummy_action")
            .shortcut("cmd+h")
            .object(ObjectRef::target(&dummy))
            .checked(true)
            .view(&view),
    )
    .unwrap();

    assert_eq!(item.title(), "Hello World");
    assert!(item.target_ref().is_some_and(|t| t.points_to(&dummy)));
    assert_eq!(item.action(), Some(&selector!(dummy_action)));
    assert_eq!(item.key_equivalent(), "h");
    assert_eq!(item.key_equivalent_modifier_mask(), ModifierFlags::COMMAND);
    assert!(item.object_ref().is_some_and(|o| o.points_to(&dummy)));
    assert!(item.object().is_some_and(|o| o.downcast::<Dummy>().is_ok()));
    assert_eq!(item.state(), ControlState::On);
    assert!(item.view_ref().is_some_and(|v| v.points_to(&view)));
}

#[test]
fn test_update_sets_given_fields() {
    setup();
    let dummy = Arc::new(Dummy::default());
    let view1 = Arc::new(View);
    let view2 = Arc::new(View);

    let mut item = MenuItem::new(
        MenuItemConfig::new()
            .title("Hello World")
            .shortcut("h")
            .checked(true)
            .view(&view1),
    )
    .unwrap();
    assert_eq!(item.key_equivalent(), "h");
    assert_eq!(item.key_equivalent_modifier_mask(), ModifierFlags::NONE);
    assert_eq!(item.state(), ControlState::On);
    assert!(item.view_ref().is_some_and(|v| v.points_to(&view1)));

    item.update(
        MenuItemConfig::new()
            .title("What's up?")
            .target(&dummy)
            .action("dummy_action")
            .shortcut("cmd-control-w")
            .checked(false)
            .view(&view2),
    )
    .unwrap();

    assert_eq!(item.title(), "What's up?");
    assert!(item.target_ref().is_some_and(|t| t.points_to(&dummy)));
    assert_eq!(item.action().map(|a| a.as_str()), Some("dummy_action"));
    assert_eq!(item.key_equivalent(), "w");
    assert_eq!(
        item.key_equivalent_modifier_mask(),
        ModifierFlags::COMMAND | ModifierFlags::CONTROL
    );
    assert_eq!(item.state(), ControlState::Off);
    assert!(item.view_ref().is_some_and(|v| v.points_to(&view2)));
}

#[test]
fn test_sparse_update_keeps_other_fields() {
    setup();
    let view = Arc::new(View);
    let mut item = MenuItem::new(
        MenuItemConfig::new()
            .title("Before")
            .shortcut("cmd+shift+s")
            .view(&view),
    )
    .unwrap();

    item.update(MenuItemConfig::new().title("After")).unwrap();

    assert_eq!(item.title(), "After");
    assert!(item.view_ref().is_some_and(|v| v.points_to(&view)));
    assert_eq!(item.key_equivalent(), "s");
    assert_eq!(
        item.key_equivalent_modifier_mask(),
        ModifierFlags::COMMAND | ModifierFlags::SHIFT
    );
}

#[test]
fn test_perform_action_with_string() {
    setup();
    let dummy = Arc::new(Dummy::default());
    let item = MenuItem::new(
        MenuItemConfig::new()
            .title("Hello")
            .target(&dummy)
            .action("dummy_action"),
    )
    .unwrap();

    item.perform_action().unwrap();
    assert!(dummy.action_completed.load(Ordering::SeqCst));
}

#[test]
fn test_perform_action_with_symbol() {
    setup();
    let dummy = Arc::new(Dummy::default());
    let item = MenuItem::new(
        MenuItemConfig::new()
            .title("Hello")
            .target(&dummy)
            .action(selector!(dummy_action)),
    )
    .unwrap();

    item.perform_action().unwrap();
    assert!(dummy.action_completed.load(Ordering::SeqCst));
}

#[test]
fn test_perform_action_sends_item() {
    setup();
    let dummy = Arc::new(Dummy::default());
    let item = MenuItem::new(
        MenuItemConfig::new()
            .title("Hello")
            .target(&dummy)
            .action("dummy_action_with_sender:"),
    )
    .unwrap();

    item.perform_action().unwrap();
    assert_eq!(*dummy.sender.lock(), Some(item.id()));
    assert!(!dummy.action_completed.load(Ordering::SeqCst));
}

#[test]
fn test_perform_action_errors() {
    setup();
    let item = MenuItem::new(MenuItemConfig::new().action("dummy_action")).unwrap();
    assert_eq!(item.perform_action(), Err(DispatchError::NoTarget));

    let dummy = Arc::new(Dummy::default());
    let mut item = MenuItem::new(MenuItemConfig::new().target(&dummy)).unwrap();
    assert_eq!(item.perform_action(), Err(DispatchError::NoAction));

    item.set_action("dummy_action_with_sender");
    assert_eq!(
        item.perform_action(),
        Err(DispatchError::UnrecognizedSelector(selector!(
            dummy_action_with_sender
        )))
    );

    drop(dummy);
    item.set_action(selector!(dummy_action));
    let err: Error = item.perform_action().unwrap_err().into();
    assert!(matches!(err, Error::Dispatch(DispatchError::TargetReleased)));
}

#[test]
fn test_checked_sets_state() {
    let mut item = MenuItem::empty();
    assert_eq!(item.state(), ControlState::Off);
    item.set_checked(true);
    assert_eq!(item.state(), ControlState::On);
    item.set_checked(false);
    assert_eq!(item.state(), ControlState::Off);
}

#[test]
fn test_checked_reads_state() {
    let mut item = MenuItem::empty();
    assert!(!item.is_checked());
    item.set_state(ControlState::On);
    assert!(item.is_checked());
    item.set_state(ControlState::Off);
    assert!(!item.is_checked());
}

#[test]
fn test_state_and_checked_last_write_wins() {
    let mut item = MenuItem::new(MenuItemConfig::new().checked(true)).unwrap();
    item.set_state(ControlState::Off);
    assert!(!item.is_checked());
    item.update(MenuItemConfig::new().checked(true)).unwrap();
    assert_eq!(item.state(), ControlState::On);
}

#[test]
fn test_invalid_shortcut_is_rejected() {
    setup();
    let err = MenuItem::new(MenuItemConfig::new().shortcut("cmd+shift")).unwrap_err();
    assert!(matches!(
        err,
        Error::Shortcut(ShortcutParseError::NoKey(ref s)) if s == "cmd+shift"
    ));

    let mut item = MenuItem::new(MenuItemConfig::new().shortcut("cmd+h")).unwrap();
    assert!(item.set_shortcut("").is_err());
    assert_eq!(item.key_equivalent(), "h");
}

#[test]
fn test_object_supplies_default_target() {
    setup();
    let dummy = Arc::new(Dummy::default());
    let item = MenuItem::new(
        MenuItemConfig::new()
            .object(ObjectRef::target(&dummy))
            .action(selector!(dummy_action)),
    )
    .unwrap();

    item.perform_action().unwrap();
    assert!(dummy.action_completed.load(Ordering::SeqCst));
}

#[test]
fn test_from_entries_builds_item() {
    setup();
    let dummy = Arc::new(Dummy::default());
    let view = Arc::new(View);

    let config = MenuItemConfig::from_entries([
        ("title", ConfigValue::from("Entries")),
        ("target", ConfigValue::from(TargetRef::new(&dummy))),
        ("action", ConfigValue::from(selector!(dummy_action_with_sender:))),
        ("shortcut", ConfigValue::from("opt+f5")),
        ("view", ConfigValue::from(ViewRef::new(&view))),
        ("enabled", ConfigValue::from(false)),
    ])
    .unwrap();
    let item = MenuItem::new(config).unwrap();

    assert_eq!(item.title(), "Entries");
    assert_eq!(item.key_equivalent_modifier_mask(), ModifierFlags::OPTION);
    item.perform_action().unwrap();
    assert_eq!(*dummy.sender.lock(), Some(item.id()));
}

#[test]
fn test_from_json_builds_item() {
    setup();
    let config = MenuItemConfig::from_json(&json!({
        "title": "Close Window",
        "action": "close_window:",
        "shortcut": "Cmd-Control-W",
        "checked": true,
        "tooltip": "ignored",
    }))
    .unwrap();
    let item = MenuItem::new(config).unwrap();

    assert_eq!(item.title(), "Close Window");
    assert_eq!(item.action(), Some(&selector!(close_window:)));
    assert_eq!(item.key_equivalent(), "w");
    assert_eq!(
        item.key_equivalent_modifier_mask(),
        ModifierFlags::COMMAND | ModifierFlags::CONTROL
    );
    assert!(item.is_checked());
}

#[test]
fn test_item_does_not_own_references() {
    let dummy = Arc::new(Dummy::default());
    let view = Arc::new(View);
    let item = MenuItem::new(
        MenuItemConfig::new()
            .target(&dummy)
            .object(ObjectRef::target(&dummy))
            .view(&view),
    )
    .unwrap();

    assert_eq!(Arc::strong_count(&dummy), 1);
    assert_eq!(Arc::strong_count(&view), 1);

    drop(view);
    assert!(item.view().is_none());
    assert!(item.view_ref().is_some());
}
