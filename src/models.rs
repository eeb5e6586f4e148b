/// What happened to a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Written,
    /// No `<title>` element, or an empty one.
    Untitled,
    /// The transformer returned nothing to write.
    Vetoed,
}

/// Final counters of one extraction run.
///
/// `records_written + skipped_untitled + skipped_by_transform == total_records_found`
/// for every run that completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub total_records_found: u64,
    pub records_written: u64,
    pub skipped_untitled: u64,
    pub skipped_by_transform: u64,
}

impl ExtractionSummary {
    pub fn skipped(&self) -> u64 {
        self.skipped_untitled + self.skipped_by_transform
    }
}
