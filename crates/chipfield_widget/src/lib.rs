//! Chipfield widget: binds the core store to an injected host view.
mod callbacks;
mod error;
mod host;
mod options;
mod projector;
mod widget;

pub use callbacks::Callbacks;
pub use error::WidgetError;
pub use host::{EventSource, HostView};
pub use options::{Options, Toggle};
pub use widget::{EventOutcome, ItemRef, Widget};

pub use chipfield_core::{
    DeviceEvent, EventTarget, InputKind, Item, ItemId, Key, Modifiers, Snapshot,
};
