use std::fmt;

/// Outcome class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Success => write!(f, "Success"),
            Kind::Error => write!(f, "Error"),
        }
    }
}

/// Fire-and-forget notification sink. The core hands results to its
/// caller; implementations decide how to show them (status bar in the
/// TUI, plain lines on the CLI).
pub trait Notifier {
    fn notify(&mut self, kind: Kind, title: &str, body: &str);
}

/// Notifier for the non-interactive CLI commands: successes go to
/// stdout, errors to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, kind: Kind, title: &str, body: &str) {
        match kind {
            Kind::Success => println!("✓ {body}"),
            Kind::Error => eprintln!("✗ {title}: {body}"),
        }
    }
}
