//! ID generation utilities for taskgrid
//!
//! Provides functions for generating unique task identifiers.

use rand::Rng;

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a unique task ID
///
/// Format: `task_{timestamp_ms}_{random_hex}`
/// Example: `task_1738300800123_9f86d081884c7d65`
///
/// The 64-bit random suffix keeps ids generated within the same
/// millisecond from colliding.
pub fn generate_task_id() -> String {
    let timestamp = now_ms();
    let random: u64 = rand::rng().random();
    format!("task_{}_{:016x}", timestamp, random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_now_ms_returns_reasonable_timestamp() {
        let ts = now_ms();
        // Should be after 2020-01-01 and before 2100-01-01
        assert!(ts > 1577836800000);
        assert!(ts < 4102444800000);
    }

    #[test]
    fn test_generate_task_id_format() {
        let id = generate_task_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "task");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 16);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_task_id_uniqueness() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_task_id()));
        }
    }
}
