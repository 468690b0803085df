use std::io::{self, Write};

use chipfield_logging::{chip_debug, chip_error};
use chipfield_widget::{EventSource, HostView, InputKind, Item};

/// Text-mode host: the "input" is a buffer filled from stdin lines and every
/// render prints the token list.
#[derive(Debug, Default)]
pub(crate) struct TerminalHost {
    input: String,
    backing: String,
    placeholder: Option<String>,
    dropdown_open: bool,
    last_render: String,
}

impl TerminalHost {
    pub(crate) fn new(initial_value: String) -> Self {
        Self {
            backing: initial_value,
            ..Self::default()
        }
    }

    pub(crate) fn type_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub(crate) fn backing(&self) -> &str {
        &self.backing
    }

    pub(crate) fn prompt(&self) -> String {
        match (&self.placeholder, self.input.is_empty()) {
            (Some(placeholder), true) => format!("[{placeholder}] > "),
            _ => format!("{} > ", self.input),
        }
    }
}

pub(crate) fn render_line(items: &[Item], dropdown_open: bool) -> String {
    let tokens: Vec<String> = items
        .iter()
        .map(|item| {
            if item.selected {
                format!("<{}:{}>", item.id, item.value)
            } else {
                format!("[{}:{}]", item.id, item.value)
            }
        })
        .collect();
    let panel = if dropdown_open { " (open)" } else { "" };
    format!("tokens: {}{}", tokens.join(" "), panel)
}

impl HostView for TerminalHost {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn input_focused(&self) -> bool {
        true
    }

    fn input_kind(&self) -> InputKind {
        InputKind::Text
    }

    fn backing_value(&self) -> String {
        self.backing.clone()
    }

    fn set_backing_value(&mut self, value: &str) {
        self.backing = value.to_string();
    }

    fn render_items(&mut self, items: &[Item]) {
        self.last_render = render_line(items, self.dropdown_open);
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{}", self.last_render) {
            chip_error!("failed to render tokens: {}", err);
        }
    }

    fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = Some(placeholder.to_string());
    }

    fn has_dropdown(&self) -> bool {
        true
    }

    fn set_dropdown_open(&mut self, open: bool) {
        self.dropdown_open = open;
        println!("dropdown {}", if open { "opened" } else { "closed" });
    }
}

/// Stdin is read by the main loop; attach/detach only bracket its lifetime.
#[derive(Debug, Default)]
pub(crate) struct StdinEvents {
    attached: bool,
}

impl EventSource for StdinEvents {
    fn attach(&mut self) {
        self.attached = true;
        chip_debug!("stdin event source attached");
    }

    fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            chip_debug!("stdin event source detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_tokens_are_marked() {
        let mut selected = Item::new(2, "b");
        selected.selected = true;
        let line = render_line(&[Item::new(1, "a"), selected], true);
        assert_eq!(line, "tokens: [1:a] <2:b> (open)");
    }
}
