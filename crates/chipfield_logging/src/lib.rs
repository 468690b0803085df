#![deny(missing_docs)]
//! Shared logging utilities for the chipfield workspace.
//!
//! Every crate logs through the `chip_*` macros below so that widget output
//! can be filtered by a single target, plus a minimal test initializer for the
//! global logger.

/// Log target used by all `chip_*` macros.
pub const TARGET: &str = "chipfield";

/// Logs a trace-level message under the chipfield target.
#[macro_export]
macro_rules! chip_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the chipfield target.
#[macro_export]
macro_rules! chip_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the chipfield target.
#[macro_export]
macro_rules! chip_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the chipfield target.
#[macro_export]
macro_rules! chip_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the chipfield target.
#[macro_export]
macro_rules! chip_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a diagnostic at warn level when `verbose` is set, otherwise at debug.
///
/// Widgets configured with `debug: true` surface their non-fatal diagnostics
/// loudly; everyone else only sees them with debug logging enabled.
#[macro_export]
macro_rules! chip_diagnostic {
    ($verbose:expr, $($arg:tt)*) => {{
        if $verbose {
            log::warn!(target: $crate::TARGET, $($arg)*);
        } else {
            log::debug!(target: $crate::TARGET, $($arg)*);
        }
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Trace in debug builds so store dispatches show up, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
