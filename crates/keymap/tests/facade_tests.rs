//! Integration tests for lifetime-bound registration: guards, groups and
//! declaration-tracking hooks.

mod common;

use keymap::{
    Binding, BindingDecl, BindingGroup, BindingOptions, KeyCombo, Keybind, Keybinds, Keymap,
    KeymapError, bind_many, bind_one,
};

use common::{CallLog, char_key, ctrl_key};

/// A component that owns its shortcuts for as long as it is mounted.
struct Screen {
    _bindings: BindingGroup,
}

impl Screen {
    fn mount(keymap: &Keymap, log: &CallLog) -> Result<Self, KeymapError> {
        let bindings = bind_many(
            &keymap.handle(),
            vec![
                BindingDecl::new("screen.refresh", "r", log.handler("refresh")),
                BindingDecl::new("screen.filter", "/", log.handler("filter"))
                    .options(BindingOptions::default().category("Screen")),
            ],
        )?;
        Ok(Self {
            _bindings: bindings,
        })
    }
}

#[test]
fn component_bindings_live_and_die_with_component() {
    let keymap = Keymap::new();
    let log = CallLog::new();

    let screen = Screen::mount(&keymap, &log).unwrap();
    assert!(keymap.has_binding("screen.refresh"));
    keymap.dispatch(&char_key('r'));
    assert_eq!(log.take(), vec!["refresh"]);

    drop(screen);
    assert!(keymap.is_empty());
    assert!(!keymap.dispatch(&char_key('r')).is_handled());
}

#[test]
fn bind_one_parses_text_and_accepts_combos() {
    let keymap = Keymap::new();
    let log = CallLog::new();
    let handle = keymap.handle();

    let _text = bind_one(&handle, "a", "Control+A", log.handler("a"), BindingOptions::default())
        .unwrap();
    let combo: KeyCombo = "ctrl+b".parse().unwrap();
    let _combo = bind_one(&handle, "b", combo, log.handler("b"), BindingOptions::default())
        .unwrap();

    keymap.dispatch(&ctrl_key('a'));
    keymap.dispatch(&ctrl_key('b'));
    assert_eq!(log.take(), vec!["a", "b"]);
}

#[test]
fn dispose_unregisters_immediately() {
    let keymap = Keymap::new();
    let log = CallLog::new();
    let guard = bind_one(
        &keymap.handle(),
        "a",
        "a",
        log.handler("a"),
        BindingOptions::default(),
    )
    .unwrap();
    guard.dispose();
    assert!(!keymap.has_binding("a"));
}

#[test]
fn facade_outside_keymap_fails_loudly() {
    let handle = Keymap::new().handle();
    let log = CallLog::new();

    let err = bind_one(&handle, "a", "a", log.handler("a"), BindingOptions::default())
        .unwrap_err();
    assert!(matches!(err, KeymapError::ProviderUnavailable { .. }));

    let err = bind_many(&handle, vec![BindingDecl::new("a", "a", log.handler("a"))]).unwrap_err();
    assert_eq!(
        err,
        KeymapError::ProviderUnavailable {
            operation: "bind_many"
        }
    );
}

#[test]
fn guard_outliving_keymap_drops_quietly() {
    let keymap = Keymap::new();
    let log = CallLog::new();
    let guard = bind_one(
        &keymap.handle(),
        "a",
        "a",
        log.handler("a"),
        BindingOptions::default(),
    )
    .unwrap();
    drop(keymap);
    drop(guard);
}

#[test]
fn keybind_sync_is_noop_for_identical_declaration() {
    let keymap = Keymap::new();
    let log = CallLog::new();
    let handler = log.handler("save");
    let mut hook = Keybind::new(&keymap.handle());

    assert!(hook.sync(BindingDecl::new("save", "ctrl+s", handler.clone())).unwrap());
    assert!(!hook.sync(BindingDecl::new("save", "Control+S", handler)).unwrap());
    assert_eq!(keymap.len(), 1);
}

#[test]
fn keybind_sync_replaces_on_change() {
    let keymap = Keymap::new();
    let log = CallLog::new();
    keymap.register(Binding::new("other", "o", log.handler("other")));
    let mut hook = Keybind::new(&keymap.handle());

    hook.sync(BindingDecl::new("save", "ctrl+s", log.handler("save-v1")))
        .unwrap();
    // New handler identity forces a fresh registration.
    assert!(hook
        .sync(BindingDecl::new("save", "ctrl+s", log.handler("save-v2")))
        .unwrap());
    keymap.dispatch(&ctrl_key('s'));
    assert_eq!(log.take(), vec!["save-v2"]);

    // A new id removes the old one.
    hook.sync(BindingDecl::new("write", "ctrl+w", log.handler("write")))
        .unwrap();
    assert!(!keymap.has_binding("save"));
    assert!(keymap.has_binding("write"));

    // Re-registration goes to the end of the order.
    let ids: Vec<_> = keymap.bindings().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["other", "write"]);

    drop(hook);
    assert!(!keymap.has_binding("write"));
}

#[test]
fn keybind_options_change_re_registers() {
    let keymap = Keymap::new();
    let log = CallLog::new();
    let handler = log.handler("nav");
    let mut hook = Keybind::new(&keymap.handle());

    hook.sync(BindingDecl::new("nav", "j", handler.clone())).unwrap();
    let changed = hook
        .sync(
            BindingDecl::new("nav", "j", handler)
                .options(BindingOptions::default().scope("vim")),
        )
        .unwrap();
    assert!(changed);
    assert_eq!(keymap.binding("nav").unwrap().scope.as_deref(), Some("vim"));
    assert!(!keymap.dispatch(&char_key('j')).is_handled());
}

#[test]
fn keybinds_batch_replaced_as_a_unit() {
    let keymap = Keymap::new();
    let log = CallLog::new();
    let a = log.handler("a");
    let b = log.handler("b");
    let mut hook = Keybinds::new(&keymap.handle());

    let batch = vec![
        BindingDecl::new("a", "a", a.clone()),
        BindingDecl::new("b", "b", b.clone()),
    ];
    assert!(hook.sync(batch.clone()).unwrap());
    assert!(!hook.sync(batch).unwrap());

    assert!(hook.sync(vec![BindingDecl::new("a", "a", a)]).unwrap());
    assert!(keymap.has_binding("a"));
    assert!(!keymap.has_binding("b"));

    hook.clear();
    assert!(!hook.is_bound());
    assert!(keymap.is_empty());
}

#[test]
fn keybind_sync_after_keymap_dropped_errors() {
    let keymap = Keymap::new();
    let log = CallLog::new();
    let mut hook = Keybind::new(&keymap.handle());
    drop(keymap);

    let result = hook.sync(BindingDecl::new("a", "a", log.handler("a")));
    assert!(result.is_err());
    assert!(!hook.is_bound());
}
