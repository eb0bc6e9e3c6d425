#![deny(missing_docs)]
//! Shared logging utilities for the meal planner workspace.
//!
//! This crate provides the `planner_*` logging macros used by the core, the
//! engine and the terminal front end, plus a minimal test initializer for the
//! global logger. Crates using the macros must also depend on `log`.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! planner_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! planner_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! planner_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! planner_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! planner_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Returns the level the test logger runs at.
///
/// Debug builds log at `Debug`, release builds at `Info`.
pub fn test_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test: it no-ops if a logger is already installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // A logger may already be set by another test in the same binary.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        test_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
