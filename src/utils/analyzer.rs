// Query interface over a loaded sequence store. Front ends (the CLI, tests)
// drive the analysis through these calls; nothing here prints or blocks.

use super::aggregator::{GcResultTable, aggregate_all};
use super::errors::GcError;
use super::gc_statistics::{StatisticsSummary, summarize};
use super::sequence_store::{SequenceStore, StoredSequence};
use super::types::DEFAULT_WINDOW_SIZE;
use super::windowed_scan::{WindowedScan, scan};

/// Answers GC queries against one sequence store.
pub struct GcAnalyzer<'a> {
    store: &'a SequenceStore,
    default_window_size: usize,
}

impl<'a> GcAnalyzer<'a> {
    pub fn new(store: &'a SequenceStore) -> Self {
        GcAnalyzer {
            store,
            default_window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// Replaces the window size used when a query does not name one.
    pub fn with_default_window_size(mut self, window_size: usize) -> Self {
        self.default_window_size = window_size;
        self
    }

    pub fn default_window_size(&self) -> usize {
        self.default_window_size
    }

    pub fn lookup(&self, id: &str) -> Result<&'a StoredSequence, GcError> {
        self.store
            .get(id)
            .ok_or_else(|| GcError::NotFound(id.to_string()))
    }

    /// Windowed GC profile of sequence `id`. `None` uses the default
    /// window size.
    pub fn scan(&self, id: &str, window_size: Option<usize>) -> Result<WindowedScan, GcError> {
        let window_size = window_size.unwrap_or(self.default_window_size);
        if window_size == 0 {
            return Err(GcError::InvalidWindowSize(window_size));
        }
        let stored = self.lookup(id)?;
        if stored.is_empty() {
            return Err(GcError::EmptySequence(id.to_string()));
        }
        scan(stored.sequence(), window_size)
    }

    /// Statistics of the windowed profile of sequence `id`, `Ok(None)` when
    /// the sequence is shorter than one window.
    pub fn summarize(
        &self,
        id: &str,
        window_size: Option<usize>,
    ) -> Result<Option<StatisticsSummary>, GcError> {
        Ok(summarize(&self.scan(id, window_size)?))
    }

    pub fn aggregate_all(&self) -> GcResultTable {
        aggregate_all(self.store)
    }
}
