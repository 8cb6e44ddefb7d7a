//! User-facing output port.
//!
//! The store and the CLI report through a [`Notifier`] instead of writing to
//! the console directly, so tests can swap in a [`MemoryNotifier`] and
//! inspect what was emitted.

use colored::Colorize;
use std::cell::RefCell;

const SUCCESS_SYMBOL: &str = "✔";
const ERROR_SYMBOL: &str = "✖";
const WARNING_SYMBOL: &str = "⚠";
const INFO_SYMBOL: &str = "ℹ";

/// Output channel with four severities.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }

    fn info(&self, message: &str) {
        (**self).info(message)
    }
}

/// Writes symbol-prefixed, colored lines to the terminal.
///
/// Success and info go to stdout; error and warning go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{}", format!("{} {}", SUCCESS_SYMBOL, message).green());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", format!("{} {}", ERROR_SYMBOL, message).red());
    }

    fn warning(&self, message: &str) {
        eprintln!("{}", format!("{} {}", WARNING_SYMBOL, message).yellow());
    }

    fn info(&self, message: &str) {
        println!("{}", format!("{} {}", INFO_SYMBOL, message).cyan());
    }
}

/// Severity attached to a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// Records every message in memory instead of printing it.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: RefCell<Vec<(Severity, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, oldest first.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.borrow().clone()
    }

    /// Recorded messages of one severity, oldest first.
    pub fn messages_of(&self, severity: Severity) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages_of(Severity::Warning)
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }

    fn record(&self, severity: Severity, message: &str) {
        self.messages
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        self.record(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }

    fn warning(&self, message: &str) {
        self.record(Severity::Warning, message);
    }

    fn info(&self, message: &str) {
        self.record(Severity::Info, message);
    }
}
