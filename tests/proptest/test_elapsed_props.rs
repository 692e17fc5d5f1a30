//! Property-based tests for elapsed time decomposition

use blockclock::Elapsed;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_decomposition_reconstructs(secs in 0u64..=10_000_000_000) {
        let elapsed = Elapsed::from_secs(secs);
        prop_assert!(elapsed.minutes < 60);
        prop_assert!(elapsed.seconds < 60);
        prop_assert_eq!(elapsed.total_secs(), secs);
        prop_assert_eq!(Elapsed::from_secs(elapsed.total_secs()), elapsed);
    }

    #[test]
    fn test_monotonic(a in 0u64..=1_000_000, b in 0u64..=1_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Elapsed::from_secs(lo) <= Elapsed::from_secs(hi));
    }

    #[test]
    fn test_format_round_trips(secs in 0u64..=1_000_000) {
        let text = Elapsed::from_secs(secs).to_string();
        let parts: Vec<u64> = text.split(':').map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs);
        prop_assert!(text.len() >= 8);
    }
}
