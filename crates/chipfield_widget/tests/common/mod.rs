#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Once;

use chipfield_widget::{
    Callbacks, DeviceEvent, EventSource, EventTarget, HostView, InputKind, Item, Key, Modifiers,
    Options, Widget,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(chipfield_logging::initialize_for_tests);
}

/// In-memory stand-in for a rendered input and token list.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub input: String,
    pub focused: bool,
    pub kind: InputKind,
    pub backing: String,
    pub rendered: Vec<String>,
    pub renders: usize,
    pub dropdown: Option<bool>,
    pub placeholder: Option<String>,
    pub capable: bool,
}

impl FakeHost {
    pub fn focused() -> Self {
        Self {
            focused: true,
            capable: true,
            ..Self::default()
        }
    }

    pub fn with_backing(backing: &str) -> Self {
        Self {
            backing: backing.to_string(),
            ..Self::focused()
        }
    }
}

impl HostView for FakeHost {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn input_focused(&self) -> bool {
        self.focused
    }

    fn input_kind(&self) -> InputKind {
        self.kind
    }

    fn backing_value(&self) -> String {
        self.backing.clone()
    }

    fn set_backing_value(&mut self, value: &str) {
        self.backing = value.to_string();
    }

    fn render_items(&mut self, items: &[Item]) {
        self.renders += 1;
        self.rendered = items.iter().map(|item| item.value.clone()).collect();
    }

    fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = Some(placeholder.to_string());
    }

    fn has_dropdown(&self) -> bool {
        self.dropdown.is_some()
    }

    fn set_dropdown_open(&mut self, open: bool) {
        self.dropdown = Some(open);
    }

    fn supports_required_features(&self) -> bool {
        self.capable
    }
}

/// Counts attach/detach calls so teardown can be observed.
#[derive(Debug, Default, Clone)]
pub struct FakeEvents {
    pub attached: Rc<Cell<u32>>,
    pub detached: Rc<Cell<u32>>,
}

impl EventSource for FakeEvents {
    fn attach(&mut self) {
        self.attached.set(self.attached.get() + 1);
    }

    fn detach(&mut self) {
        self.detached.set(self.detached.get() + 1);
    }
}

pub type TestWidget = Widget<FakeHost, FakeEvents>;

pub fn widget(options: Options) -> TestWidget {
    Widget::new(FakeHost::focused(), FakeEvents::default(), &options, Callbacks::new())
        .expect("valid options")
}

pub fn key(key: Key) -> DeviceEvent {
    DeviceEvent::KeyDown {
        key,
        modifiers: Modifiers::NONE,
        target: EventTarget::TextInput,
    }
}

/// Types `value` into the input and presses Enter.
pub fn type_and_enter(widget: &mut TestWidget, value: &str) -> bool {
    widget.host_mut().input = value.to_string();
    widget.handle_event(&key(Key::Enter)).handled
}

pub fn active_values(widget: &TestWidget) -> Vec<String> {
    widget
        .state()
        .active()
        .map(|item| item.value.clone())
        .collect()
}
