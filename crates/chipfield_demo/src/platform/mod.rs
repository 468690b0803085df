mod app;
mod commands;
mod logging;
mod options;
mod terminal;

pub use app::run_app;
