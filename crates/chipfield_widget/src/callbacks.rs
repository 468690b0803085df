use chipfield_core::{ItemId, Snapshot};

/// Optional lifecycle handlers. An empty slot means the hook is disabled.
#[derive(Default)]
pub struct Callbacks {
    pub on_init: Option<Box<dyn FnMut()>>,
    pub on_render: Option<Box<dyn FnMut(&Snapshot)>>,
    /// Receives the new id and the value as passed in, before transforms.
    pub on_add_item: Option<Box<dyn FnMut(ItemId, &str)>>,
    pub on_remove_item: Option<Box<dyn FnMut(&str)>>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_init(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_init = Some(Box::new(handler));
        self
    }

    pub fn on_render(mut self, handler: impl FnMut(&Snapshot) + 'static) -> Self {
        self.on_render = Some(Box::new(handler));
        self
    }

    pub fn on_add_item(mut self, handler: impl FnMut(ItemId, &str) + 'static) -> Self {
        self.on_add_item = Some(Box::new(handler));
        self
    }

    pub fn on_remove_item(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_remove_item = Some(Box::new(handler));
        self
    }
}
