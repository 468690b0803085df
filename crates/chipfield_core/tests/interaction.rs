use std::sync::Once;

use chipfield_core::{
    classify, click_selection_actions, reduce, Action, BackspaceDecision, Classification, Config,
    DeviceEvent, EventTarget, InputContext, InputKind, Intent, Key, Modifiers, Snapshot,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(chipfield_logging::initialize_for_tests);
}

fn snapshot_of(values: &[&str]) -> Snapshot {
    values.iter().fold(Snapshot::new(), |snapshot, value| {
        let id = snapshot.next_id();
        reduce(
            snapshot,
            Action::AddItem {
                value: value.to_string(),
                id,
            },
        )
    })
}

fn key(key: Key) -> DeviceEvent {
    DeviceEvent::KeyDown {
        key,
        modifiers: Modifiers::NONE,
        target: EventTarget::TextInput,
    }
}

fn ctrl_a() -> DeviceEvent {
    DeviceEvent::KeyDown {
        key: Key::Char('a'),
        modifiers: Modifiers::CTRL,
        target: EventTarget::TextInput,
    }
}

fn typed(value: &str) -> InputContext {
    InputContext {
        value: value.to_string(),
        focused: true,
        ..InputContext::default()
    }
}

#[test]
fn enter_with_value_adds_it() {
    init_logging();
    let result = classify(&key(Key::Enter), &typed("x"), &Snapshot::new(), &Config::default());

    assert_eq!(
        result.intent,
        Some(Intent::AddCurrentInputValue {
            value: "x".to_string()
        })
    );
}

#[test]
fn enter_is_ignored_for_empty_input_and_non_text_hosts() {
    init_logging();
    let config = Config::default();
    let snapshot = Snapshot::new();
    assert_eq!(
        classify(&key(Key::Enter), &typed(""), &snapshot, &config),
        Classification::default()
    );

    let select = InputContext {
        kind: InputKind::SelectMultiple,
        ..typed("x")
    };
    assert_eq!(classify(&key(Key::Enter), &select, &snapshot, &config).intent, None);
}

#[test]
fn enter_respects_admission_policy() {
    init_logging();
    let config = Config {
        allow_duplicates: false,
        ..Config::default()
    }
    .with_max_items(Some(2))
    .unwrap();

    let duplicate = classify(&key(Key::Enter), &typed("a"), &snapshot_of(&["a"]), &config);
    assert_eq!(duplicate.intent, None);

    let full = classify(&key(Key::Enter), &typed("c"), &snapshot_of(&["a", "b"]), &config);
    assert_eq!(full.intent, None);
}

#[test]
fn enter_is_ignored_when_adding_disabled() {
    init_logging();
    let config = Config {
        add_items: false,
        ..Config::default()
    };
    assert_eq!(
        classify(&key(Key::Enter), &typed("x"), &Snapshot::new(), &config).intent,
        None
    );
}

#[test]
fn backspace_on_empty_input_prevents_default() {
    init_logging();
    let result = classify(
        &key(Key::Backspace),
        &typed(""),
        &snapshot_of(&["A", "B"]),
        &Config::default(),
    );

    assert_eq!(
        result,
        Classification {
            intent: Some(Intent::RemoveLastOrEditLastItem(
                BackspaceDecision::SelectLast { id: 2 }
            )),
            prevent_default: true,
        }
    );

    let nothing = classify(&key(Key::Delete), &typed(""), &Snapshot::new(), &Config::default());
    assert_eq!(nothing.intent, None);
    assert!(nothing.prevent_default);
}

#[test]
fn backspace_with_text_is_left_to_the_input() {
    init_logging();
    let result = classify(
        &key(Key::Backspace),
        &typed("abc"),
        &snapshot_of(&["A"]),
        &Config::default(),
    );
    assert_eq!(result, Classification::default());
}

#[test]
fn ctrl_a_selects_all_only_when_guards_hold() {
    init_logging();
    let snapshot = snapshot_of(&["A", "B"]);
    let config = Config::default();

    assert_eq!(
        classify(&ctrl_a(), &typed(""), &snapshot, &config).intent,
        Some(Intent::SelectAllItems)
    );

    let cmd_a = DeviceEvent::KeyDown {
        key: Key::Char('A'),
        modifiers: Modifiers {
            meta: true,
            ..Modifiers::NONE
        },
        target: EventTarget::TextInput,
    };
    assert_eq!(
        classify(&cmd_a, &typed(""), &snapshot, &config).intent,
        Some(Intent::SelectAllItems)
    );

    assert_eq!(classify(&ctrl_a(), &typed("x"), &snapshot, &config).intent, None);
    let unfocused = InputContext {
        focused: false,
        ..typed("")
    };
    assert_eq!(classify(&ctrl_a(), &unfocused, &snapshot, &config).intent, None);
    assert_eq!(
        classify(&ctrl_a(), &typed(""), &Snapshot::new(), &config).intent,
        None
    );
    let no_select_all = Config {
        select_all: false,
        ..Config::default()
    };
    assert_eq!(
        classify(&ctrl_a(), &typed(""), &snapshot, &no_select_all).intent,
        None
    );
}

#[test]
fn keys_outside_the_text_input_are_ignored() {
    init_logging();
    let event = DeviceEvent::KeyDown {
        key: Key::Enter,
        modifiers: Modifiers::NONE,
        target: EventTarget::Other,
    };
    assert_eq!(
        classify(&event, &typed("x"), &Snapshot::new(), &Config::default()),
        Classification::default()
    );
}

#[test]
fn token_click_toggles_selection() {
    init_logging();
    let snapshot = snapshot_of(&["A"]);
    let config = Config::default();
    let click = DeviceEvent::Click {
        target: EventTarget::Token(1),
    };
    assert_eq!(
        classify(&click, &typed(""), &snapshot, &config).intent,
        Some(Intent::ToggleItemSelection { id: 1 })
    );

    let stray = DeviceEvent::Click {
        target: EventTarget::UnknownToken,
    };
    assert_eq!(classify(&stray, &typed(""), &snapshot, &config).intent, None);
}

#[test]
fn focus_and_blur_toggle_panel_only_with_dropdown() {
    init_logging();
    let snapshot = Snapshot::new();
    let config = Config::default();
    let with_dropdown = InputContext {
        has_dropdown: true,
        ..typed("")
    };

    assert_eq!(
        classify(&DeviceEvent::Focus, &with_dropdown, &snapshot, &config).intent,
        Some(Intent::ToggleAuxiliaryPanel { open: true })
    );
    assert_eq!(
        classify(&DeviceEvent::Blur, &with_dropdown, &snapshot, &config).intent,
        Some(Intent::ToggleAuxiliaryPanel { open: false })
    );
    assert_eq!(
        classify(&DeviceEvent::Focus, &typed(""), &snapshot, &config).intent,
        None
    );
}

#[test]
fn click_selects_exactly_one_token() {
    init_logging();
    let snapshot = reduce(
        snapshot_of(&["A", "B", "C"]),
        Action::SetSelected {
            id: 1,
            selected: true,
        },
    );

    assert_eq!(
        click_selection_actions(&snapshot, 2),
        vec![
            Action::SetSelected {
                id: 1,
                selected: false
            },
            Action::SetSelected {
                id: 2,
                selected: true
            },
        ]
    );
}

#[test]
fn clicking_selected_token_deselects_it() {
    init_logging();
    let snapshot = reduce(
        snapshot_of(&["A", "B"]),
        Action::SetSelected {
            id: 2,
            selected: true,
        },
    );

    assert_eq!(
        click_selection_actions(&snapshot, 2),
        vec![Action::SetSelected {
            id: 2,
            selected: false
        }]
    );
}
