use crate::models::{ExtractionSummary, PageOutcome};
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics collected during the extraction process
#[derive(Default)]
pub struct ExtractionStats {
    pub records_found: AtomicU64,
    pub records_written: AtomicU64,
    pub skipped_untitled: AtomicU64,
    pub skipped_by_transform: AtomicU64,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_found(&self) {
        self.records_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the outcome of one page and returns the number of pages
    /// finished so far.
    pub fn record(&self, outcome: PageOutcome) -> u64 {
        let counter = match outcome {
            PageOutcome::Written => &self.records_written,
            PageOutcome::Untitled => &self.skipped_untitled,
            PageOutcome::Vetoed => &self.skipped_by_transform,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.processed()
    }

    pub fn found(&self) -> u64 {
        self.records_found.load(Ordering::Relaxed)
    }

    pub fn written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    pub fn untitled(&self) -> u64 {
        self.skipped_untitled.load(Ordering::Relaxed)
    }

    pub fn vetoed(&self) -> u64 {
        self.skipped_by_transform.load(Ordering::Relaxed)
    }

    pub fn processed(&self) -> u64 {
        self.written() + self.untitled() + self.vetoed()
    }

    pub fn summary(&self) -> ExtractionSummary {
        ExtractionSummary {
            total_records_found: self.found(),
            records_written: self.written(),
            skipped_untitled: self.untitled(),
            skipped_by_transform: self.vetoed(),
        }
    }
}
