//! Per-event classifier turning raw device events into widget intents.
//!
//! The classifier keeps no state of its own: everything it needs is the event,
//! what the host reports about the text input, the current snapshot and the
//! configuration. Each event yields at most one [`Intent`].
use chipfield_logging::chip_debug;

use crate::{backspace_decision, check_add, Action, BackspaceDecision, Config, ItemId, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    /// Any printable character.
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Element an event was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    TextInput,
    Token(ItemId),
    /// A token element the host could not map to an item.
    UnknownToken,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    KeyDown {
        key: Key,
        modifiers: Modifiers,
        target: EventTarget,
    },
    Click {
        target: EventTarget,
    },
    Focus,
    Blur,
}

/// Kind of host element the widget enhances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    SelectMultiple,
}

/// Host-reported state of the text input at the time of an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputContext {
    pub value: String,
    pub focused: bool,
    pub kind: InputKind,
    pub has_dropdown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddCurrentInputValue { value: String },
    RemoveLastOrEditLastItem(BackspaceDecision),
    SelectAllItems,
    ToggleItemSelection { id: ItemId },
    ToggleAuxiliaryPanel { open: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub intent: Option<Intent>,
    /// The host should suppress the platform's default handling of the event.
    pub prevent_default: bool,
}

impl Classification {
    fn ignore() -> Self {
        Self::default()
    }

    fn intent(intent: Intent) -> Self {
        Self {
            intent: Some(intent),
            prevent_default: false,
        }
    }
}

pub fn classify(
    event: &DeviceEvent,
    input: &InputContext,
    snapshot: &Snapshot,
    config: &Config,
) -> Classification {
    let classification = match event {
        DeviceEvent::KeyDown {
            key,
            modifiers,
            target: EventTarget::TextInput,
        } => classify_key(*key, *modifiers, input, snapshot, config),
        DeviceEvent::KeyDown { .. } => Classification::ignore(),
        DeviceEvent::Click {
            target: EventTarget::Token(id),
        } => Classification::intent(Intent::ToggleItemSelection { id: *id }),
        DeviceEvent::Click { .. } => Classification::ignore(),
        DeviceEvent::Focus if input.has_dropdown => {
            Classification::intent(Intent::ToggleAuxiliaryPanel { open: true })
        }
        DeviceEvent::Blur if input.has_dropdown => {
            Classification::intent(Intent::ToggleAuxiliaryPanel { open: false })
        }
        DeviceEvent::Focus | DeviceEvent::Blur => Classification::ignore(),
    };
    chip_debug!("classified {:?} as {:?}", event, classification);
    classification
}

fn classify_key(
    key: Key,
    modifiers: Modifiers,
    input: &InputContext,
    snapshot: &Snapshot,
    config: &Config,
) -> Classification {
    match key {
        Key::Char('a' | 'A') if modifiers.command() => {
            let select_all = config.remove_items
                && config.select_all
                && input.value.is_empty()
                && input.focused
                && !snapshot.is_empty();
            if select_all {
                Classification::intent(Intent::SelectAllItems)
            } else {
                Classification::ignore()
            }
        }
        Key::Enter if !input.value.is_empty() => {
            let admitted = config.add_items
                && input.kind == InputKind::Text
                && check_add(snapshot, config, &input.value).is_allowed();
            if admitted {
                Classification::intent(Intent::AddCurrentInputValue {
                    value: input.value.clone(),
                })
            } else {
                Classification::ignore()
            }
        }
        Key::Backspace | Key::Delete if input.value.is_empty() && config.remove_items => {
            let decision = backspace_decision(snapshot, config, input.focused);
            Classification {
                intent: match decision {
                    BackspaceDecision::None => None,
                    decision => Some(Intent::RemoveLastOrEditLastItem(decision)),
                },
                prevent_default: true,
            }
        }
        _ => Classification::ignore(),
    }
}

/// Actions for a click on token `clicked`: it becomes the only selected token,
/// unless it was already selected, in which case every token ends deselected.
///
/// Only items whose flag actually changes produce an action.
pub fn click_selection_actions(snapshot: &Snapshot, clicked: ItemId) -> Vec<Action> {
    snapshot
        .active()
        .filter_map(|item| {
            let selected = item.id == clicked && !item.selected;
            (item.selected != selected).then_some(Action::SetSelected {
                id: item.id,
                selected,
            })
        })
        .collect()
}
