use chipfield_core::{InputKind, Item};

/// Host view handle: the rendered token list plus the enhanced input element.
///
/// Implementations keep their own id to rendered-node mapping; the widget only
/// ever hands out item ids.
pub trait HostView {
    /// Current text of the typing input.
    fn input_value(&self) -> String;
    fn set_input_value(&mut self, value: &str);
    fn input_focused(&self) -> bool;
    fn input_kind(&self) -> InputKind;

    /// Value the host element carried before the widget attached.
    fn backing_value(&self) -> String;
    fn set_backing_value(&mut self, value: &str);

    /// Re-render the visible token list from the active items.
    fn render_items(&mut self, items: &[Item]);

    fn set_placeholder(&mut self, _placeholder: &str) {}

    fn has_dropdown(&self) -> bool {
        false
    }

    fn set_dropdown_open(&mut self, _open: bool) {}

    /// False when the platform lacks features the widget relies on.
    fn supports_required_features(&self) -> bool {
        true
    }
}

/// Device event source. Events themselves are pushed into
/// [`Widget::handle_event`](crate::Widget::handle_event) by the host loop.
pub trait EventSource {
    fn attach(&mut self);
    /// Release every listener registration; no events may follow.
    fn detach(&mut self);
}
