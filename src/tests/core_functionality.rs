//! Core functionality tests for the priority queue
//!
//! These tests verify the fundamental single-threaded contract:
//! extraction order, tie-breaking, peek, iteration and statistics.

#[cfg(test)]
mod tests {
    use crate::{PriorityQueue, QueueConfig, DEFAULT_CAPACITY};

    #[test]
    fn test_queue_creation() {
        let queue: PriorityQueue<String> = PriorityQueue::new(32);

        assert_eq!(queue.len().unwrap(), 0);
        assert!(queue.is_empty().unwrap());
        assert!(queue.pop().unwrap().is_none());

        let stats = queue.stats().unwrap();
        assert_eq!(stats.len, 0);
        assert_eq!(stats.capacity, 32);
        assert_eq!(stats.limit, 0);
        assert_eq!(stats.next_id, 1);
    }

    #[test]
    fn test_default_config() {
        let config = QueueConfig::default();
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
        assert!(!config.blocking);
        assert_eq!(config.limit, 0);
    }

    #[test]
    fn test_insert_returns_queued_count() {
        let queue = PriorityQueue::new(8);

        assert_eq!(queue.insert("a", 5).unwrap(), 1);
        assert_eq!(queue.insert("b", 1).unwrap(), 2);
        assert_eq!(queue.insert("c", 3).unwrap(), 3);
        assert_eq!(queue.len().unwrap(), 3);
    }

    #[test]
    fn test_pop_yields_ascending_priorities() {
        let queue = PriorityQueue::new(8);
        for (value, priority) in [("e", 40), ("a", 7), ("d", 23), ("b", 9), ("c", 12)] {
            queue.insert(value, priority).unwrap();
        }

        let mut popped = Vec::new();
        while let Some(entry) = queue.pop().unwrap() {
            popped.push(entry.into_value());
        }
        assert_eq!(popped, vec!["a", "b", "c", "d", "e"]);
        assert!(queue.is_empty().unwrap());
    }

    #[test]
    fn test_equal_priorities_break_ties_by_insertion_id() {
        // Priorities [5, 1, 3, 1]: the two priority-1 entries must pop
        // in insertion order (id 2 before id 4), then 3, then 5.
        let queue = PriorityQueue::new(8);
        queue.insert("p5", 5).unwrap();
        queue.insert("p1-first", 1).unwrap();
        queue.insert("p3", 3).unwrap();
        queue.insert("p1-second", 1).unwrap();

        let order: Vec<(u64, u64, &str)> = std::iter::from_fn(|| queue.pop().unwrap())
            .map(|entry| (entry.priority(), entry.id(), entry.into_value()))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, 2, "p1-first"),
                (1, 4, "p1-second"),
                (3, 3, "p3"),
                (5, 1, "p5"),
            ]
        );
    }

    #[test]
    fn test_peek_does_not_consume() {
        let queue = PriorityQueue::new(8);
        queue.insert("later", 9).unwrap();
        queue.insert("next", 2).unwrap();

        {
            let root = queue.peek().unwrap().unwrap();
            assert_eq!(root.priority(), 2);
            assert_eq!(root.value(), &"next");
        }

        // Still queued; peek matched the subsequent pop.
        assert_eq!(queue.len().unwrap(), 2);
        let entry = queue.pop().unwrap().unwrap();
        assert_eq!(entry.into_value(), "next");
    }

    #[test]
    fn test_peek_on_empty_queue() {
        let queue: PriorityQueue<u32> = PriorityQueue::new(4);
        assert!(queue.peek().unwrap().is_none());
    }

    #[test]
    fn test_view_iterates_storage_order() {
        let queue = PriorityQueue::new(8);
        for priority in [6, 2, 8, 4] {
            queue.insert(priority * 10, priority).unwrap();
        }

        let view = queue.view().unwrap();
        assert_eq!(view.len(), 4);
        assert!(!view.is_empty());

        // Storage order is heap-array order, not sorted order; the
        // root comes first and every priority appears exactly once.
        let priorities: Vec<u64> = view.iter().map(|entry| entry.priority()).collect();
        assert_eq!(priorities.len(), 4);
        assert_eq!(priorities[0], 2);
        for priority in [2, 4, 6, 8] {
            assert!(priorities.contains(&priority));
        }

        // Values travel with their entries.
        assert!(view.iter().all(|entry| *entry.value() == entry.priority() * 10));
    }

    #[test]
    fn test_view_supports_for_loop() {
        let queue = PriorityQueue::new(8);
        queue.insert("x", 1).unwrap();
        queue.insert("y", 2).unwrap();

        let view = queue.view().unwrap();
        let mut seen = 0;
        for entry in &view {
            assert!(entry.priority() >= 1);
            seen += 1;
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_stats_track_inserts_and_pops() {
        let queue = PriorityQueue::new(8);
        queue.insert("a", 1).unwrap();
        queue.insert("b", 2).unwrap();

        let stats = queue.stats().unwrap();
        assert_eq!(stats.len, 2);
        assert_eq!(stats.next_id, 3);

        queue.pop().unwrap();
        assert_eq!(queue.stats().unwrap().len, 1);
        // Ids are never reused by popping.
        assert_eq!(queue.stats().unwrap().next_id, 3);
    }
}
