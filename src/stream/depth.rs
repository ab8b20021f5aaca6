//! Group nesting counters.
//!
//! File output is indented by the stream's own depth. Terminal output from
//! every stream lands on the same console, so it is indented by a depth
//! shared through a [`TerminalDepth`] handle.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A cloneable handle to a console-wide group depth.
///
/// Streams built from clones of one handle share indentation; separate
/// handles are independent.
#[derive(Debug, Clone, Default)]
pub struct TerminalDepth(Arc<AtomicUsize>);

impl TerminalDepth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn enter(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Decrements, stopping at zero.
    pub fn leave(&self) -> usize {
        let previous = self
            .0
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |depth| {
                Some(depth.saturating_sub(1))
            })
            .unwrap_or_default();
        previous.saturating_sub(1)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The pair of depths a stream updates on `group`/`groupEnd`.
#[derive(Debug, Clone, Default)]
pub struct GroupDepths {
    local: usize,
    terminal: TerminalDepth,
}

impl GroupDepths {
    pub fn new(terminal: TerminalDepth) -> Self {
        Self { local: 0, terminal }
    }

    pub fn local(&self) -> usize {
        self.local
    }

    pub fn terminal(&self) -> usize {
        self.terminal.get()
    }

    pub fn terminal_handle(&self) -> &TerminalDepth {
        &self.terminal
    }

    pub fn enter(&mut self) {
        self.local += 1;
        self.terminal.enter();
    }

    pub fn leave(&mut self) {
        self.local = self.local.saturating_sub(1);
        self.terminal.leave();
    }

    pub fn reset(&mut self) {
        self.local = 0;
        self.terminal.reset();
    }
}
