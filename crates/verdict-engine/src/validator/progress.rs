//! Validation progress counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters of a validation run, readable from any thread.
///
/// The engine updates these as it walks the graph; `progress_string`
/// renders a human-readable snapshot at any point, including while a run
/// is in flight.
#[derive(Debug, Default)]
pub struct ValidationProgress {
    processed_objects: AtomicU64,
    objects_to_process: AtomicU64,
    checks: AtomicU64,
    failed_rules: AtomicU64,
}

impl ValidationProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters at the start of a run.
    pub fn reset(&self) {
        self.processed_objects.store(0, Ordering::Relaxed);
        self.objects_to_process.store(0, Ordering::Relaxed);
        self.checks.store(0, Ordering::Relaxed);
        self.failed_rules.store(0, Ordering::Relaxed);
    }

    /// Record a finished traversal step and the remaining stack depth.
    pub fn object_processed(&self, queued: usize) {
        self.processed_objects.fetch_add(1, Ordering::Relaxed);
        self.objects_to_process
            .store(queued as u64, Ordering::Relaxed);
    }

    /// Record an executed check and the current distinct-failed-rule count.
    pub fn check_executed(&self, distinct_failed_rules: usize) {
        self.checks.fetch_add(1, Ordering::Relaxed);
        self.failed_rules
            .store(distinct_failed_rules as u64, Ordering::Relaxed);
    }

    /// Comma-grouped snapshot of the counters.
    pub fn progress_string(&self) -> String {
        format!(
            "processed: {}, queued: {}, checks: {}, failed rules: {}",
            with_commas(self.processed_objects.load(Ordering::Relaxed)),
            with_commas(self.objects_to_process.load(Ordering::Relaxed)),
            with_commas(self.checks.load(Ordering::Relaxed)),
            with_commas(self.failed_rules.load(Ordering::Relaxed)),
        )
    }
}

/// Group a number with commas every three digits.
fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_grouping() {
        assert_eq!(with_commas(0), "0");
        assert_eq!(with_commas(999), "999");
        assert_eq!(with_commas(1_000), "1,000");
        assert_eq!(with_commas(1_234_567), "1,234,567");
    }

    #[test]
    fn counters_round_trip() {
        let progress = ValidationProgress::new();
        progress.object_processed(3);
        progress.check_executed(1);
        progress.check_executed(2);
        assert_eq!(
            progress.progress_string(),
            "processed: 1, queued: 3, checks: 2, failed rules: 2"
        );

        progress.reset();
        assert_eq!(
            progress.progress_string(),
            "processed: 0, queued: 0, checks: 0, failed rules: 0"
        );
    }
}
