//! Core logging types: summary entries, status, and the [`Log`] trait.

/// One line of the run summary.
#[derive(Debug, Clone)]
pub struct SummaryEntry {
    /// What the entry is about (e.g. "android", "validation").
    pub name: String,
    /// Final status.
    pub status: EntryStatus,
    /// Optional detail message (e.g. counts or an error description).
    pub message: Option<String>,
}

/// Status of a summary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Elements were created or updated.
    Changed,
    /// Everything was already up to date.
    Unchanged,
    /// Nothing was attempted (e.g. no descriptors for the platform).
    Skipped,
    /// Changes were computed but not written.
    DryRun,
    /// The step failed.
    Failed,
}

/// Abstraction over logging backends so command logic can be driven by a
/// test double.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record an entry for the summary.
    fn record(&self, name: &str, status: EntryStatus, message: Option<&str>);
}
