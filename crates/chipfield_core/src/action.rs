use crate::ItemId;

/// State transitions understood by the [`Store`](crate::Store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new active, unselected item.
    AddItem { value: String, id: ItemId },
    /// Logically delete the item with this id.
    RemoveItem { id: ItemId },
    /// Mark or unmark the item with this id as selected.
    SetSelected { id: ItemId, selected: bool },
}
