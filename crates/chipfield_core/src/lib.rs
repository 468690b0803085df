//! Chipfield core: item store, admission policy and interaction classifier.
//!
//! Nothing in this crate touches a platform. Hosts feed it device events and
//! snapshots; it answers with intents and store actions.
mod action;
mod config;
mod interaction;
mod item;
mod policy;
mod reducer;
mod store;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use interaction::{
    classify, click_selection_actions, Classification, DeviceEvent, EventTarget, InputContext,
    InputKind, Intent, Key, Modifiers,
};
pub use item::{Item, ItemId, Snapshot};
pub use policy::{backspace_decision, can_add, check_add, Admission, BackspaceDecision};
pub use reducer::reduce;
pub use store::{Store, SubscriptionId};
