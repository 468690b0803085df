use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chipfield_logging::{chip_info, chip_warn};
use chipfield_widget::{Callbacks, ItemRef, Options, Widget};

use super::commands::{enter, parse_line, Command, HELP};
use super::logging::{self, LogDestination};
use super::options::load_options;
use super::terminal::{StdinEvents, TerminalHost};

/// Usage: `chipfield_demo [OPTIONS_FILE] [INITIAL_VALUE]`.
pub fn run_app() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => load_options(&PathBuf::from(path))?,
        None => Options::default(),
    };
    let initial_value = args.next().unwrap_or_default();

    logging::initialize(LogDestination::from_env(), options.debug);

    let callbacks = Callbacks::new()
        .on_add_item(|id, value| chip_info!("added {} as #{}", value, id))
        .on_remove_item(|value| chip_info!("removed {}", value));
    let mut widget = Widget::new(
        TerminalHost::new(initial_value),
        StdinEvents::default(),
        &options,
        callbacks,
    )
    .context("failed to build widget")?;

    println!("{HELP}");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", widget.host().prompt());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match parse_line(&line?) {
            Command::Type(text) => {
                widget.host_mut().type_text(&text);
                let outcome = widget.handle_event(&enter());
                if !outcome.handled {
                    println!("not added: {text:?}");
                    widget.host_mut().type_text("");
                }
            }
            Command::Event(event) => {
                widget.handle_event(&event);
            }
            Command::Remove(value) => {
                if let Err(err) = widget.remove_item(Some(ItemRef::Value(value))) {
                    println!("{err}");
                }
            }
            Command::RemoveNothing => {
                if let Err(err) = widget.remove_item(None) {
                    println!("{err}");
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(line) => {
                chip_warn!("unknown command {:?}", line);
                println!("unknown command; :help lists them");
            }
        }
    }

    let value = widget.host().backing().to_string();
    widget.destroy();
    println!("value: {value}");
    Ok(())
}
