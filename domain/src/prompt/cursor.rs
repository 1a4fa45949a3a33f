//! Cyclic cursor over the loaded prompt list

use crate::prompt::entry::PromptEntry;

/// Walks the prompt list forever, wrapping back to the first entry.
#[derive(Debug, Clone, Default)]
pub struct PromptCursor {
    prompts: Vec<PromptEntry>,
    next: usize,
}

impl PromptCursor {
    pub fn new(prompts: Vec<PromptEntry>) -> Self {
        Self { prompts, next: 0 }
    }

    /// Return the next entry, or `None` when the list is empty.
    pub fn advance(&mut self) -> Option<&PromptEntry> {
        if self.prompts.is_empty() {
            return None;
        }
        if self.next >= self.prompts.len() {
            self.next = 0;
        }
        let index = self.next;
        self.next += 1;
        self.prompts.get(index)
    }

    /// Index the following `advance` will return (already wrapped)
    pub fn position(&self) -> usize {
        if self.prompts.is_empty() {
            0
        } else {
            self.next % self.prompts.len()
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ModelKind;

    fn entries(n: usize) -> Vec<PromptEntry> {
        (0..n)
            .map(|i| PromptEntry::new(format!("prompt {i}"), ModelKind::Text))
            .collect()
    }

    #[test]
    fn test_wraps_after_last_entry() {
        for n in 1..=5 {
            let mut cursor = PromptCursor::new(entries(n));
            let visited: Vec<String> = (0..=n)
                .map(|_| cursor.advance().unwrap().prompt.clone())
                .collect();
            assert_eq!(visited.first(), visited.last());
            assert_eq!(visited[0], "prompt 0");
        }
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let mut cursor = PromptCursor::default();
        assert!(cursor.advance().is_none());
        assert_eq!(cursor.position(), 0);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_position_tracks_next_index() {
        let mut cursor = PromptCursor::new(entries(2));
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        cursor.advance();
        assert_eq!(cursor.position(), 0);
    }
}
