//! Admission predicates consulted before the interactive add and remove paths.
use chipfield_logging::chip_debug;

use crate::{Config, ItemId, Snapshot};

/// Outcome of [`check_add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    MaxItemsReached { limit: usize },
    Duplicate,
    FilterMismatch,
}

impl Admission {
    pub fn is_allowed(self) -> bool {
        self == Admission::Allowed
    }
}

/// Decides whether a typed value may be admitted through the Enter path.
///
/// The duplicate check compares the raw typed value against stored values,
/// which may carry `prepend_value`/`append_value`. The regex runs against the
/// raw typed value as well.
pub fn check_add(snapshot: &Snapshot, config: &Config, candidate: &str) -> Admission {
    let admission = if let Some(limit) = config
        .max_items
        .filter(|limit| snapshot.active_count() >= limit.get())
    {
        Admission::MaxItemsReached {
            limit: limit.get(),
        }
    } else if !config.allow_duplicates && snapshot.active().any(|item| item.value == candidate) {
        Admission::Duplicate
    } else if config
        .regex_filter
        .as_ref()
        .is_some_and(|filter| !filter.is_match(candidate))
    {
        Admission::FilterMismatch
    } else {
        Admission::Allowed
    };

    if !admission.is_allowed() {
        chip_debug!("rejected {:?}: {:?}", candidate, admission);
    }
    admission
}

pub fn can_add(snapshot: &Snapshot, config: &Config, candidate: &str) -> bool {
    check_add(snapshot, config, candidate).is_allowed()
}

/// What a Backspace/Delete on an empty text input should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackspaceDecision {
    /// Select the last token; a following press removes it.
    SelectLast { id: ItemId },
    /// Move the last token's value back into the input and remove the token.
    EditLast { id: ItemId, value: String },
    /// Remove every selected token.
    RemoveSelected { ids: Vec<ItemId> },
    None,
}

/// Decision table for Backspace/Delete pressed while the text input is empty.
pub fn backspace_decision(
    snapshot: &Snapshot,
    config: &Config,
    input_focused: bool,
) -> BackspaceDecision {
    if !config.remove_items {
        return BackspaceDecision::None;
    }

    let last = snapshot.last_active();
    if !config.edit_items && input_focused {
        if let Some(last) = last.filter(|item| !item.selected) {
            return BackspaceDecision::SelectLast { id: last.id };
        }
    }
    if config.edit_items && !snapshot.has_selection() {
        if let Some(last) = last {
            return BackspaceDecision::EditLast {
                id: last.id,
                value: last.value.clone(),
            };
        }
    }

    let ids: Vec<ItemId> = snapshot.selected().map(|item| item.id).collect();
    if ids.is_empty() {
        BackspaceDecision::None
    } else {
        BackspaceDecision::RemoveSelected { ids }
    }
}
