// Positional GC sampling over fixed, non-overlapping windows.

use super::errors::GcError;
use super::gc_content::gc_content;
use super::nucleotides::Nuc;
use serde::Serialize;

/// GC percentage of one window, keyed by the window's start offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowSample {
    pub start: usize,
    pub gc: f64,
}

/// The samples of one (sequence, window size) scan, in ascending start
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedScan {
    window_size: usize,
    samples: Vec<WindowSample>,
}

impl WindowedScan {
    pub fn new(window_size: usize, samples: Vec<WindowSample>) -> Self {
        WindowedScan {
            window_size,
            samples,
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn samples(&self) -> &[WindowSample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// GC values in position order.
    pub fn gc_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.gc)
    }
}

/// Splits `sequence` into windows of exactly `window_size` bases, starting
/// at offset 0, and computes the GC content of each.
///
/// A trailing window shorter than `window_size` produces no sample, so a
/// window larger than the sequence gives an empty scan.
///
/// # Errors
///
/// `GcError::InvalidWindowSize` when `window_size` is 0.
pub fn scan(sequence: &[Nuc], window_size: usize) -> Result<WindowedScan, GcError> {
    if window_size == 0 {
        return Err(GcError::InvalidWindowSize(window_size));
    }
    let samples = sequence
        .chunks_exact(window_size)
        .enumerate()
        .map(|(i, window)| WindowSample {
            start: i * window_size,
            gc: gc_content(window),
        })
        .collect();
    Ok(WindowedScan::new(window_size, samples))
}
