mod command;
mod system;

pub use command::CommandCopy;
pub use system::SystemClipboard;

use anyhow::Result;
use tracing::{debug, warn};

/// One way of putting text on the system clipboard.
///
/// Strategies are tried in order by [`ClipboardWriter`]; a strategy that
/// cannot run on the current platform simply reports an error and the
/// next one is attempted.
pub trait ClipboardStrategy {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Try to write `text` to the clipboard.
    fn attempt(&self, text: &str) -> Result<()>;
}

/// Writes text to the system clipboard through an ordered fallback chain.
///
/// The external copy tools come first: they keep working in sandboxed
/// sessions (gaming mode, containers) where no in-process clipboard API
/// is available. The arboard-backed strategy is only consulted after
/// they fail. `write` never returns an error; exhaustion of the chain is
/// collapsed into `false`.
pub struct ClipboardWriter {
    strategies: Vec<Box<dyn ClipboardStrategy>>,
}

impl ClipboardWriter {
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(CommandCopy::new()),
            Box::new(SystemClipboard),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ClipboardStrategy>>) -> Self {
        Self { strategies }
    }

    /// Copy `text` to the clipboard. Returns whether any strategy
    /// succeeded.
    pub fn write(&self, text: &str) -> bool {
        for strategy in &self.strategies {
            match strategy.attempt(text) {
                Ok(()) => {
                    debug!(strategy = strategy.name(), "copied text to clipboard");
                    return true;
                }
                Err(err) => {
                    debug!(strategy = strategy.name(), %err, "clipboard strategy failed");
                }
            }
        }

        warn!("all clipboard strategies failed");
        false
    }
}

impl Default for ClipboardWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeStrategy {
        succeed: bool,
        calls: Arc<AtomicUsize>,
    }

    impl ClipboardStrategy for FakeStrategy {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn attempt(&self, _text: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok(())
            } else {
                Err(anyhow!("unavailable"))
            }
        }
    }

    fn fake(succeed: bool) -> (Box<dyn ClipboardStrategy>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let strategy = FakeStrategy {
            succeed,
            calls: calls.clone(),
        };
        (Box::new(strategy), calls)
    }

    #[test]
    fn test_first_success_short_circuits() {
        let (first, first_calls) = fake(true);
        let (second, second_calls) = fake(true);
        let writer = ClipboardWriter::with_strategies(vec![first, second]);

        assert!(writer.write("text"));
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_falls_through_to_next_strategy() {
        let (first, first_calls) = fake(false);
        let (second, second_calls) = fake(true);
        let writer = ClipboardWriter::with_strategies(vec![first, second]);

        assert!(writer.write("text"));
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_exhausted_chain_is_false_not_an_error() {
        let (first, _) = fake(false);
        let (second, _) = fake(false);
        let writer = ClipboardWriter::with_strategies(vec![first, second]);

        assert!(!writer.write("text"));
    }

    #[test]
    fn test_empty_chain_reports_failure() {
        let writer = ClipboardWriter::with_strategies(Vec::new());
        assert!(!writer.write("text"));
    }
}
