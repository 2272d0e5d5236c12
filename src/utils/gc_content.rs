// GC content of a run of nucleotides. Everything else in the crate is built
// on this one primitive.

use super::nucleotides::Nuc;

/// Base counts behind a GC percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GcCounts {
    /// G and C
    pub gc: usize,
    /// A and T
    pub at: usize,
    /// ambiguity codes and gaps, excluded from the percentage
    pub other: usize,
}

impl GcCounts {
    pub fn from_slice(sequence: &[Nuc]) -> Self {
        let mut counts = GcCounts::default();
        for &nuc in sequence {
            if nuc.is_gc() {
                counts.gc += 1;
            } else if nuc.is_unambiguous() {
                counts.at += 1;
            } else {
                counts.other += 1;
            }
        }
        counts
    }

    /// Number of bases the percentage is computed over.
    pub fn counted(&self) -> usize {
        self.gc + self.at
    }

    /// GC percentage in [0, 100], 0 when no base was counted.
    pub fn percent(&self) -> f64 {
        match self.counted() {
            0 => 0.0,
            n => self.gc as f64 * 100.0 / n as f64,
        }
    }
}

/// Percentage of G and C among the A/C/G/T bases of `sequence`.
///
/// Ambiguous bases count towards neither the numerator nor the denominator.
/// An empty slice, or one holding only ambiguous bases, yields 0.
pub fn gc_content(sequence: &[Nuc]) -> f64 {
    GcCounts::from_slice(sequence).percent()
}
