use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashSet;
use std::rc::Rc;

use chipfield_core::{
    classify, click_selection_actions, Action, BackspaceDecision, Config, DeviceEvent,
    InputContext, Intent, Item, ItemId, Snapshot, Store, SubscriptionId,
};
use chipfield_logging::{chip_debug, chip_diagnostic, chip_info, chip_warn};

use crate::projector::Projector;
use crate::{Callbacks, EventSource, HostView, Options, WidgetError};

/// How a caller names an item for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Id(ItemId),
    /// Resolves to the last active item with this value.
    Value(String),
}

impl From<ItemId> for ItemRef {
    fn from(id: ItemId) -> Self {
        ItemRef::Id(id)
    }
}

impl From<&str> for ItemRef {
    fn from(value: &str) -> Self {
        ItemRef::Value(value.to_string())
    }
}

impl From<String> for ItemRef {
    fn from(value: String) -> Self {
        ItemRef::Value(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The event produced an intent that was carried out.
    pub handled: bool,
    /// The host should suppress the platform default for this event.
    pub prevent_default: bool,
}

/// A tokenized input bound to a host view and an event source.
pub struct Widget<H: HostView, E: EventSource> {
    config: Config,
    disabled: bool,
    debug: bool,
    store: Rc<Store>,
    host: Rc<RefCell<H>>,
    events: E,
    on_add_item: Option<Box<dyn FnMut(ItemId, &str)>>,
    on_remove_item: Option<Box<dyn FnMut(&str)>>,
    subscription: Option<SubscriptionId>,
    dropdown_open: bool,
    destroyed: bool,
}

impl<H: HostView + 'static, E: EventSource> Widget<H, E> {
    pub fn new(
        host: H,
        mut events: E,
        options: &Options,
        callbacks: Callbacks,
    ) -> Result<Self, WidgetError> {
        let config = options.compile()?;
        let Callbacks {
            on_init,
            on_render,
            on_add_item,
            on_remove_item,
        } = callbacks;

        if !host.supports_required_features() {
            chip_warn!("host lacks required features; continuing in degraded mode");
        }

        let host = Rc::new(RefCell::new(host));
        if let Some(placeholder) = options.placeholder.as_deref() {
            host.borrow_mut().set_placeholder(placeholder);
        }

        let store = Rc::new(Store::new());
        let projector = RefCell::new(Projector::new(
            Rc::clone(&host),
            config.delimiter.clone(),
            on_render,
        ));
        let weak_store = Rc::downgrade(&store);
        let subscription = store.subscribe(move || {
            if let Some(store) = weak_store.upgrade() {
                projector.borrow_mut().project(&store.get_state());
            }
        });

        events.attach();

        let presets: Vec<String> = if options.items.is_empty() {
            let backing = host.borrow().backing_value();
            backing
                .split(config.delimiter.as_str())
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        } else {
            options.items.clone()
        };

        let mut widget = Self {
            config,
            disabled: options.disabled,
            debug: options.debug,
            store,
            host,
            events,
            on_add_item,
            on_remove_item,
            subscription: Some(subscription),
            dropdown_open: false,
            destroyed: false,
        };
        for value in &presets {
            widget.add_item(value)?;
        }
        chip_info!("widget ready with {} preset items", presets.len());

        if let Some(mut on_init) = on_init {
            on_init();
        }
        Ok(widget)
    }

    /// Adds `value` unconditionally; admission checks apply only to typed input.
    pub fn add_item(&mut self, value: &str) -> Result<ItemId, WidgetError> {
        self.ensure_live()?;
        let stored = self.config.transform_value(value);
        let id = self.store.get_state().next_id();
        if let Some(on_add_item) = self.on_add_item.as_mut() {
            on_add_item(id, value);
        }
        self.store.dispatch(Action::AddItem { value: stored, id });
        Ok(id)
    }

    pub fn remove_item(&mut self, target: Option<ItemRef>) -> Result<Item, WidgetError> {
        self.ensure_live()?;
        let Some(target) = target else {
            return Err(self.report(WidgetError::MissingArgument));
        };
        let state = self.store.get_state();
        let resolved = match &target {
            ItemRef::Id(id) => state
                .find_active(*id)
                .ok_or(WidgetError::ItemIdNotFound(*id)),
            ItemRef::Value(value) => state
                .last_by_value(value)
                .ok_or_else(|| WidgetError::ItemNotFound(value.clone())),
        };
        let item = match resolved {
            Ok(item) => item.clone(),
            Err(err) => return Err(self.report(err)),
        };

        if let Some(on_remove_item) = self.on_remove_item.as_mut() {
            on_remove_item(&item.value);
        }
        self.store.dispatch(Action::RemoveItem { id: item.id });
        Ok(item)
    }

    /// Removes the selected items among `ids`; returns how many were removed.
    /// Repeated ids count once.
    pub fn remove_all(&mut self, ids: &[ItemId]) -> usize {
        if self.destroyed {
            return 0;
        }
        let state = self.store.get_state();
        let mut seen = HashSet::new();
        let selected: Vec<ItemId> = ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .filter(|id| state.find_active(*id).is_some_and(|item| item.selected))
            .collect();

        let mut removed = 0;
        for id in selected {
            if self.remove_item(Some(ItemRef::Id(id))).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    pub fn select_item(&mut self, id: ItemId) -> Result<(), WidgetError> {
        self.set_selected(id, true)
    }

    pub fn deselect_item(&mut self, id: ItemId) -> Result<(), WidgetError> {
        self.set_selected(id, false)
    }

    /// Selects every active item among `ids`; unknown ids are skipped.
    pub fn select_all(&mut self, ids: &[ItemId]) -> usize {
        if self.destroyed {
            return 0;
        }
        let state = self.store.get_state();
        let mut seen = HashSet::new();
        let pending: Vec<ItemId> = ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .filter(|id| state.find_active(*id).is_some_and(|item| !item.selected))
            .collect();
        for id in &pending {
            self.store.dispatch(Action::SetSelected {
                id: *id,
                selected: true,
            });
        }
        pending.len()
    }

    /// First active item, in store order, whose value equals `value`.
    pub fn get_item_by_value(&self, value: &str) -> Option<Item> {
        self.store.get_state().first_by_value(value).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.store.get_state().is_empty()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn state(&self) -> Rc<Snapshot> {
        self.store.get_state()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> Ref<'_, H> {
        self.host.borrow()
    }

    pub fn host_mut(&mut self) -> RefMut<'_, H> {
        self.host.borrow_mut()
    }

    pub fn handle_event(&mut self, event: &DeviceEvent) -> EventOutcome {
        if self.destroyed || self.disabled {
            chip_debug!("ignoring {:?} on inactive widget", event);
            return EventOutcome::default();
        }

        let input = {
            let host = self.host.borrow();
            InputContext {
                value: host.input_value(),
                focused: host.input_focused(),
                kind: host.input_kind(),
                has_dropdown: host.has_dropdown(),
            }
        };
        let classification = classify(event, &input, &self.store.get_state(), &self.config);
        let handled = classification.intent.is_some();
        if let Some(intent) = classification.intent {
            self.apply(intent);
        }
        EventOutcome {
            handled,
            prevent_default: classification.prevent_default,
        }
    }

    /// Releases the event source and stops rendering. Safe to call twice.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.events.detach();
        if let Some(subscription) = self.subscription.take() {
            self.store.unsubscribe(subscription);
        }
        self.store.close();
        self.destroyed = true;
        chip_info!("widget destroyed");
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::AddCurrentInputValue { value } => match self.add_item(&value) {
                Ok(_) => self.host.borrow_mut().set_input_value(""),
                Err(err) => chip_warn!("could not add {:?}: {}", value, err),
            },
            Intent::RemoveLastOrEditLastItem(decision) => self.apply_backspace(decision),
            Intent::SelectAllItems => {
                let ids: Vec<ItemId> = self.store.get_state().active().map(|i| i.id).collect();
                self.select_all(&ids);
            }
            Intent::ToggleItemSelection { id } => {
                let actions = click_selection_actions(&self.store.get_state(), id);
                for action in actions {
                    self.store.dispatch(action);
                }
            }
            Intent::ToggleAuxiliaryPanel { open } => {
                self.dropdown_open = open;
                self.host.borrow_mut().set_dropdown_open(open);
            }
        }
    }

    fn apply_backspace(&mut self, decision: BackspaceDecision) {
        match decision {
            BackspaceDecision::SelectLast { id } => {
                self.store.dispatch(Action::SetSelected { id, selected: true });
            }
            BackspaceDecision::EditLast { id, value } => {
                match self.remove_item(Some(ItemRef::Id(id))) {
                    Ok(_) => self.host.borrow_mut().set_input_value(&value),
                    Err(err) => chip_warn!("could not edit item {}: {}", id, err),
                }
            }
            BackspaceDecision::RemoveSelected { ids } => {
                self.remove_all(&ids);
            }
            BackspaceDecision::None => {}
        }
    }

    fn set_selected(&mut self, id: ItemId, selected: bool) -> Result<(), WidgetError> {
        self.ensure_live()?;
        if self.store.get_state().find_active(id).is_none() {
            return Err(self.report(WidgetError::ItemIdNotFound(id)));
        }
        self.store.dispatch(Action::SetSelected { id, selected });
        Ok(())
    }

    fn ensure_live(&self) -> Result<(), WidgetError> {
        if self.destroyed {
            Err(self.report(WidgetError::Destroyed))
        } else {
            Ok(())
        }
    }

    fn report(&self, err: WidgetError) -> WidgetError {
        chip_diagnostic!(self.debug, "{}", err);
        err
    }
}

impl<H: HostView, E: EventSource> Drop for Widget<H, E> {
    fn drop(&mut self) {
        if !self.destroyed {
            self.events.detach();
            self.store.close();
        }
    }
}
