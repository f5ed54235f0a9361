//! Completion evaluation with edge-triggered signalling.

use super::items::ItemStore;

/// Tracks whether every item has been visited and reports the false→true edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionEvaluator {
    completed: bool,
}

impl CompletionEvaluator {
    /// Returns true iff the collection is non-empty and every item is visited.
    #[must_use]
    pub fn evaluate(items: &ItemStore) -> bool {
        !items.is_empty() && items.all_visited()
    }

    /// Starts from the state persisted in `items`, so a collection that was
    /// already complete does not report the edge again.
    #[must_use]
    pub fn seeded(items: &ItemStore) -> Self {
        Self {
            completed: Self::evaluate(items),
        }
    }

    /// Re-evaluates `items`. Returns true only on the evaluation that first
    /// observes completion.
    pub fn observe(&mut self, items: &ItemStore) -> bool {
        let complete = Self::evaluate(items);
        let fired = complete && !self.completed;
        self.completed = complete;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ItemConfig;

    fn store(count: usize) -> ItemStore {
        ItemStore::from_config(&vec![ItemConfig::default(); count])
    }

    #[test]
    fn test_fires_once_after_last_item_visited() {
        // Arrange
        let mut items = store(3);
        let mut evaluator = CompletionEvaluator::default();

        // Act / Assert
        items.mark_visited(0).unwrap();
        assert!(!evaluator.observe(&items));
        items.mark_visited(1).unwrap();
        assert!(!evaluator.observe(&items));
        items.mark_visited(2).unwrap();
        assert!(evaluator.observe(&items));
        assert!(!evaluator.observe(&items));
        assert!(!evaluator.observe(&items));
    }

    #[test]
    fn test_seeded_from_completed_store_does_not_fire() {
        let mut items = store(2);
        items.mark_visited(0).unwrap();
        items.mark_visited(1).unwrap();

        let mut evaluator = CompletionEvaluator::seeded(&items);

        assert!(!evaluator.observe(&items));
    }

    #[test]
    fn test_seeded_from_partial_store_fires_on_last_visit() {
        let mut items = store(2);
        items.mark_visited(0).unwrap();
        let mut evaluator = CompletionEvaluator::seeded(&items);

        items.mark_visited(1).unwrap();

        assert!(evaluator.observe(&items));
    }

    #[test]
    fn test_empty_collection_never_completes() {
        let items = store(0);
        let mut evaluator = CompletionEvaluator::default();

        assert!(!CompletionEvaluator::evaluate(&items));
        assert!(!evaluator.observe(&items));
    }
}
