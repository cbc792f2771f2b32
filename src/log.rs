//! Diagnostics on stderr.

use std::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

use colored::Colorize;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence [info!]. Warnings are always printed.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn __info(args: fmt::Arguments<'_>) {
    if !is_quiet() {
        eprintln!("{} {}", "info:".green().bold(), args);
    }
}

#[doc(hidden)]
pub fn __warn(args: fmt::Arguments<'_>) {
    eprintln!("{} {}", "warning:".yellow().bold(), args);
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log::__info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::__warn(format_args!($($arg)*))
    };
}
