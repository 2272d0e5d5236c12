// Whole-sequence GC content for every sequence in a store.

use super::gc_content::gc_content;
use super::sequence_store::SequenceStore;
use itertools::Itertools;
use rayon::prelude::*;

/// Whole-sequence GC percentage of one stored sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct GcRecord {
    pub source: String,
    pub id: String,
    pub gc: f64,
}

/// GC percentages of all stored sequences, in store load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GcResultTable {
    records: Vec<GcRecord>,
}

impl GcResultTable {
    pub fn records(&self) -> &[GcRecord] {
        &self.records
    }

    /// Records sorted by descending GC. Ties keep load order.
    pub fn ranked(&self) -> Vec<&GcRecord> {
        self.records
            .iter()
            .sorted_by(|a, b| b.gc.total_cmp(&a.gc))
            .collect()
    }
}

/// Computes the GC content of every sequence in `store` over its full
/// length. Sequences are processed in parallel; the table keeps load order.
pub fn aggregate_all(store: &SequenceStore) -> GcResultTable {
    let records = store
        .ids()
        .par_iter()
        .filter_map(|id| {
            store.get(id).map(|stored| GcRecord {
                source: stored.source().to_string(),
                id: id.clone(),
                gc: gc_content(stored.sequence()),
            })
        })
        .collect();
    GcResultTable { records }
}

#[cfg(test)]
impl GcResultTable {
    pub fn get(&self, id: &str) -> Option<f64> {
        self.records.iter().find(|r| r.id == id).map(|r| r.gc)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
