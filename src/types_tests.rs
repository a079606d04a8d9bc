//! Tests for core types

#[cfg(test)]
mod tests {
    use super::super::types::*;

    fn pool(reds: usize, blues: usize) -> ComplexPool {
        ComplexPool::new(
            (1..=reds).map(|n| format!("{:02}", n)).collect(),
            (1..=blues).map(|n| format!("{:02}", n)).collect(),
        )
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(6, 6), 1);
        assert_eq!(binomial(7, 6), 7);
        assert_eq!(binomial(10, 6), 210);
        assert_eq!(binomial(33, 6), 1_107_568);
        assert_eq!(binomial(5, 6), 0);
    }

    #[test]
    fn test_complex_pool_combinations() {
        // C(7, 6) × 3
        assert_eq!(pool(7, 3).combinations(), 21);
        assert_eq!(pool(7, 3).cost(), 42);
        // C(10, 6) × 2
        assert_eq!(pool(10, 2).combinations(), 420);
    }

    #[test]
    fn test_complex_pool_under_six_reds_is_zero() {
        assert_eq!(pool(5, 3).combinations(), 0);
        assert_eq!(pool(5, 3).cost(), 0);
        assert_eq!(pool(0, 3).combinations(), 0);
    }

    #[test]
    fn test_complex_pool_completeness() {
        assert!(pool(7, 3).is_complete());
        assert!(!pool(7, 0).is_complete());
        assert!(!pool(0, 3).is_complete());
    }

    #[test]
    fn test_verification_record_is_empty() {
        assert!(VerificationRecord::default().is_empty());

        let record = VerificationRecord {
            total_prize: Some(0),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_verification_data_total_bets() {
        let data = VerificationData {
            rec_count: 15,
            com_count: 21,
            ..Default::default()
        };
        assert_eq!(data.total_bets(), 36);
    }

    #[test]
    fn test_push_result_constructors() {
        let ok = PushResult::ok(serde_json::json!({"code": 1000}));
        assert!(ok.success);
        assert!(ok.error.is_none());
        assert!(ok.data.is_some());

        let failed = PushResult::failed("bad token");
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("bad token"));
        assert!(failed.data.is_none());
    }
}
