//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use wangtile::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use wangtile::io::progress::ProgressManager;

    // Tests patterns are tracked as they start
    // Verified by not resizing the state list
    #[test]
    fn test_patterns_tracked() {
        let mut manager = ProgressManager::hidden();
        manager.initialize(3);

        manager.start_pattern(0, "pattern 0".to_string(), 10);
        manager.update_columns(0, 4);
        manager.complete_pattern(0);
        manager.start_pattern(2, "pattern 2".to_string(), 10);

        assert_eq!(manager.pattern_count(), 3);
        manager.finish();
    }

    // Tests large batches and retries do not panic
    // Verified by indexing bars directly by pattern index
    #[test]
    fn test_large_batch() {
        let count = MAX_INDIVIDUAL_PROGRESS_BARS * 3;
        let mut manager = ProgressManager::hidden();
        manager.initialize(count);

        for index in 0..count {
            manager.start_pattern(index, format!("pattern {index}"), 8);
            manager.update_columns(index, 3);
            manager.start_pattern(index, format!("pattern {index} retry"), 8);
            manager.update_columns(index, 8);
            manager.complete_pattern(index);
        }

        assert_eq!(manager.pattern_count(), count);
        manager.finish();
    }

    // Tests updates for unknown patterns are ignored
    // Verified by growing the state list on update
    #[test]
    fn test_unknown_pattern_update() {
        let mut manager = ProgressManager::hidden();
        manager.initialize(1);

        manager.update_columns(5, 2);
        manager.complete_pattern(5);

        assert_eq!(manager.pattern_count(), 0);
    }
}
