use std::cell::RefCell;
use std::rc::Rc;

use chipfield_core::{Item, Snapshot};
use chipfield_logging::chip_trace;

use crate::HostView;

/// Store subscriber that renders active items and syncs the backing value.
pub(crate) struct Projector<H: HostView> {
    host: Rc<RefCell<H>>,
    delimiter: String,
    on_render: Option<Box<dyn FnMut(&Snapshot)>>,
}

impl<H: HostView> Projector<H> {
    pub(crate) fn new(
        host: Rc<RefCell<H>>,
        delimiter: String,
        on_render: Option<Box<dyn FnMut(&Snapshot)>>,
    ) -> Self {
        Self {
            host,
            delimiter,
            on_render,
        }
    }

    pub(crate) fn project(&mut self, snapshot: &Snapshot) {
        let active: Vec<Item> = snapshot.active().cloned().collect();
        let joined = snapshot.joined_value(&self.delimiter);
        chip_trace!("render {} items, value {:?}", active.len(), joined);
        {
            let mut host = self.host.borrow_mut();
            host.render_items(&active);
            host.set_backing_value(&joined);
        }
        if let Some(on_render) = self.on_render.as_mut() {
            on_render(snapshot);
        }
    }
}
