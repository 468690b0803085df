pub type ItemId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub value: String,
    /// False once the item has been removed. Inactive items are never revived.
    pub active: bool,
    pub selected: bool,
}

impl Item {
    pub fn new(id: ItemId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            active: true,
            selected: false,
        }
    }
}

/// Ordered sequence of every item ever added, active or not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    items: Vec<Item>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in insertion order, including removed ones.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn active(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(|item| item.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn active_values(&self) -> Vec<&str> {
        self.active().map(|item| item.value.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn last_active(&self) -> Option<&Item> {
        self.items.iter().rev().find(|item| item.active)
    }

    pub fn selected(&self) -> impl Iterator<Item = &Item> + '_ {
        self.active().filter(|item| item.selected)
    }

    pub fn has_selection(&self) -> bool {
        self.selected().next().is_some()
    }

    /// Active item with this id. Removed items are not found.
    pub fn find_active(&self, id: ItemId) -> Option<&Item> {
        self.active().find(|item| item.id == id)
    }

    /// Last active item, scanning from the end, whose value equals `value`.
    pub fn last_by_value(&self, value: &str) -> Option<&Item> {
        self.items
            .iter()
            .rev()
            .find(|item| item.active && item.value == value)
    }

    pub fn first_by_value(&self, value: &str) -> Option<&Item> {
        self.active().find(|item| item.value == value)
    }

    /// Id for the next added item: the count of all items, removed ones
    /// included, plus one.
    pub fn next_id(&self) -> ItemId {
        self.items.len() as ItemId + 1
    }

    /// Active values joined with `delimiter`, in store order.
    pub fn joined_value(&self, delimiter: &str) -> String {
        self.active_values().join(delimiter)
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}
