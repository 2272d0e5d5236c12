use super::nucleotides::Nuc;

/// An immutable run of nucleotides as loaded from the archive.
pub type Sequence = Vec<Nuc>;

/// Default window length, in bases, for positional GC sampling.
pub const DEFAULT_WINDOW_SIZE: usize = 1000;
