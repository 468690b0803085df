use chipfield_widget::{DeviceEvent, EventTarget, ItemId, Key, Modifiers};

/// One line of demo input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Type text into the input, then press Enter.
    Type(String),
    Event(DeviceEvent),
    /// Call the host-facing remove operation with a value.
    Remove(String),
    /// Call the host-facing remove operation with nothing.
    RemoveNothing,
    Help,
    Quit,
    Unknown(String),
}

pub(crate) const HELP: &str = "\
text         type text and press Enter
:bs :del     press Backspace / Delete on the empty input
:all         press Ctrl+A
:click ID    click the token with this id
:focus :blur focus or blur the input
:rm VALUE    remove the last token with VALUE
:quit        exit";

pub(crate) fn parse_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Type(line.to_string());
    };
    let (name, arg) = match rest.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "bs" => Command::Event(key(Key::Backspace, Modifiers::NONE)),
        "del" => Command::Event(key(Key::Delete, Modifiers::NONE)),
        "all" => Command::Event(key(Key::Char('a'), Modifiers::CTRL)),
        "click" => match arg.parse::<ItemId>() {
            Ok(id) => Command::Event(DeviceEvent::Click {
                target: EventTarget::Token(id),
            }),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "focus" => Command::Event(DeviceEvent::Focus),
        "blur" => Command::Event(DeviceEvent::Blur),
        "rm" if arg.is_empty() => Command::RemoveNothing,
        "rm" => Command::Remove(arg.to_string()),
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

pub(crate) fn enter() -> DeviceEvent {
    key(Key::Enter, Modifiers::NONE)
}

fn key(key: Key, modifiers: Modifiers) -> DeviceEvent {
    DeviceEvent::KeyDown {
        key,
        modifiers,
        target: EventTarget::TextInput,
    }
}
