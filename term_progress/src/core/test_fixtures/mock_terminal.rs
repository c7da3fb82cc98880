// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicUsize, Ordering}};

use crate::{IsInteractiveOutput, TTYResult};

/// A fake [`IsInteractiveOutput`] that always gives the same answer, and counts how many
/// times it was asked. Clones share the counter.
#[derive(Debug, Clone)]
pub struct MockTerminal {
    pub answer: TTYResult,
    pub check_count: Arc<AtomicUsize>,
}

impl MockTerminal {
    #[must_use]
    pub fn new(answer: TTYResult) -> Self {
        Self {
            answer,
            check_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Pretend the output is a terminal.
    #[must_use]
    pub fn interactive() -> Self { Self::new(TTYResult::IsInteractive) }

    /// Pretend the output is redirected to a file or pipe.
    #[must_use]
    pub fn not_interactive() -> Self { Self::new(TTYResult::IsNotInteractive) }

    #[must_use]
    pub fn get_check_count(&self) -> usize { self.check_count.load(Ordering::SeqCst) }
}

impl IsInteractiveOutput for MockTerminal {
    fn is_interactive_output(&self) -> TTYResult {
        self.check_count.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_terminal_answers_and_counts() {
        let it = MockTerminal::interactive();
        let clone = it.clone();
        assert_eq!(it.is_interactive_output(), TTYResult::IsInteractive);
        assert_eq!(clone.is_interactive_output(), TTYResult::IsInteractive);
        assert_eq!(it.get_check_count(), 2);

        let it = MockTerminal::not_interactive();
        assert_eq!(it.is_interactive_output(), TTYResult::IsNotInteractive);
        assert_eq!(it.get_check_count(), 1);
    }
}
