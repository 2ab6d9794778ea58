//! Minimum acceptable score sums, derived from group size.

/// Share of the group size the knowledge sum must reach, in percent.
pub const MINIMUM_KNOWLEDGE_PERCENTAGE: f64 = 50.0;

/// Share of the group size the practice sum must reach, in percent.
pub const MINIMUM_PRACTICE_PERCENTAGE: f64 = 30.0;

/// Practice threshold for a group of `total` questions (not rounded).
pub fn min_practice_count(total: usize) -> f64 {
    total as f64 * MINIMUM_PRACTICE_PERCENTAGE / 100.0
}

/// Knowledge threshold for a group of `total` questions (not rounded).
pub fn min_knowledge_count(total: usize) -> f64 {
    total as f64 * MINIMUM_KNOWLEDGE_PERCENTAGE / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group_thresholds() {
        assert_eq!(min_practice_count(0), 0.0);
        assert_eq!(min_knowledge_count(0), 0.0);
    }

    #[test]
    fn test_thresholds_are_fractional() {
        assert_eq!(min_practice_count(3), 0.9);
        assert_eq!(min_knowledge_count(3), 1.5);
        assert_eq!(min_practice_count(10), 3.0);
        assert_eq!(min_knowledge_count(7), 3.5);
    }

    #[test]
    fn test_thresholds_match_percentages() {
        for total in 0..50usize {
            let expected_practice = total as f64 * 0.30;
            let expected_knowledge = total as f64 * 0.50;
            assert!((min_practice_count(total) - expected_practice).abs() < 1e-9);
            assert_eq!(min_knowledge_count(total), expected_knowledge);
        }
    }
}
