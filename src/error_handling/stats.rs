//! Scrape statistics tracking.
//!
//! This module provides thread-safe counters summarizing scrape outcomes over
//! the lifetime of the process.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

use super::types::ScrapeError;

/// Thread-safe scrape outcome counters.
///
/// Shared across request handlers with `Arc` and surfaced through the status
/// endpoint. Counters are monotonically increasing for the process lifetime.
#[derive(Default)]
pub struct ScrapeStats {
    searches: AtomicUsize,
    entries_extracted: AtomicUsize,
    empty_results: AtomicUsize,
    launch_failures: AtomicUsize,
    navigation_failures: AtomicUsize,
    selector_timeouts: AtomicUsize,
    extraction_failures: AtomicUsize,
}

/// Point-in-time snapshot of [`ScrapeStats`], serializable for the status
/// endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub searches: usize,
    pub entries_extracted: usize,
    pub empty_results: usize,
    pub launch_failures: usize,
    pub navigation_failures: usize,
    pub selector_timeouts: usize,
    pub extraction_failures: usize,
}

impl ScrapeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a search request.
    pub fn record_search(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed extraction of `count` entries.
    pub fn record_entries(&self, count: usize) {
        if count == 0 {
            self.empty_results.fetch_add(1, Ordering::Relaxed);
        } else {
            self.entries_extracted.fetch_add(count, Ordering::Relaxed);
        }
    }

    /// Record a scrape failure in the bucket matching its error kind.
    pub fn record_failure(&self, error: &ScrapeError) {
        let counter = match error {
            ScrapeError::Launch(_) => &self.launch_failures,
            ScrapeError::Navigation(_) => &self.navigation_failures,
            ScrapeError::SelectorTimeout { .. } => &self.selector_timeouts,
            ScrapeError::Extraction(_) => &self.extraction_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a consistent-enough snapshot for reporting. Individual counters
    /// are read independently; exactness across counters is not required for
    /// an informational endpoint.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            entries_extracted: self.entries_extracted.load(Ordering::Relaxed),
            empty_results: self.empty_results.load(Ordering::Relaxed),
            launch_failures: self.launch_failures.load(Ordering::Relaxed),
            navigation_failures: self.navigation_failures.load(Ordering::Relaxed),
            selector_timeouts: self.selector_timeouts.load(Ordering::Relaxed),
            extraction_failures: self.extraction_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = ScrapeStats::new();
        let snap = stats.snapshot();
        assert_eq!(snap.searches, 0);
        assert_eq!(snap.entries_extracted, 0);
        assert_eq!(snap.empty_results, 0);
        assert_eq!(snap.launch_failures, 0);
    }

    #[test]
    fn test_record_search_and_entries() {
        let stats = ScrapeStats::new();
        stats.record_search();
        stats.record_search();
        stats.record_entries(7);
        stats.record_entries(0);
        let snap = stats.snapshot();
        assert_eq!(snap.searches, 2);
        assert_eq!(snap.entries_extracted, 7);
        assert_eq!(snap.empty_results, 1);
    }

    #[test]
    fn test_record_failure_buckets() {
        let stats = ScrapeStats::new();
        stats.record_failure(&ScrapeError::Launch("boom".into()));
        stats.record_failure(&ScrapeError::Navigation("timeout".into()));
        stats.record_failure(&ScrapeError::SelectorTimeout {
            selector: "#decrypted".into(),
            timeout_secs: 15,
        });
        stats.record_failure(&ScrapeError::Extraction("no content".into()));
        let snap = stats.snapshot();
        assert_eq!(snap.launch_failures, 1);
        assert_eq!(snap.navigation_failures, 1);
        assert_eq!(snap.selector_timeouts, 1);
        assert_eq!(snap.extraction_failures, 1);
    }

    #[test]
    fn test_concurrent_increments() {
        use std::sync::Arc;

        let stats = Arc::new(ScrapeStats::new());
        let mut handles = vec![];
        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    stats.record_search();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.snapshot().searches, 800);
    }
}
