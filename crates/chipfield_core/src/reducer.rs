use crate::{Action, Item, Snapshot};

/// Pure reducer: derives the next snapshot from the previous one.
///
/// Unknown ids are ignored; no action can fail.
pub fn reduce(mut snapshot: Snapshot, action: Action) -> Snapshot {
    match action {
        Action::AddItem { value, id } => {
            snapshot.push(Item::new(id, value));
        }
        Action::RemoveItem { id } => {
            if let Some(item) = snapshot.get_mut(id) {
                item.active = false;
            }
        }
        Action::SetSelected { id, selected } => {
            if let Some(item) = snapshot.get_mut(id) {
                item.selected = selected;
            }
        }
    }
    snapshot
}
