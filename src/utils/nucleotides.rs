use super::errors::GcError;

/// Enum for DNA nucleotides. Every ambiguity code collapses to `N`.
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
pub enum Nuc {
    A,
    C,
    G,
    T,
    N,
}

impl Nuc {
    /// True for G and C.
    pub fn is_gc(self) -> bool {
        matches!(self, Nuc::G | Nuc::C)
    }

    /// True for the four unambiguous bases, the ones counted towards GC
    /// content.
    pub fn is_unambiguous(self) -> bool {
        !matches!(self, Nuc::N)
    }
}

/// Convert a base character to a nucleotide.
///
/// Case is ignored. IUPAC ambiguity codes and gap symbols are read as `N`;
/// they carry no information about GC content.
pub fn base_to_nuc(base: char) -> Result<Nuc, GcError> {
    match base {
        'A' | 'a' => Ok(Nuc::A),
        'C' | 'c' => Ok(Nuc::C),
        'G' | 'g' => Ok(Nuc::G),
        'T' | 't' => Ok(Nuc::T),
        'N' | 'n' | 'R' | 'r' | 'Y' | 'y' | 'S' | 's' | 'W' | 'w' | 'K' | 'k' | 'M' | 'm'
        | 'B' | 'b' | 'D' | 'd' | 'H' | 'h' | 'V' | 'v' | '-' | '.' => Ok(Nuc::N),
        _ => Err(GcError::InvalidBase(base)),
    }
}

#[cfg(test)]
pub fn string_to_seq(s: &str) -> Result<Vec<Nuc>, GcError> {
    s.chars().map(base_to_nuc).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_to_nuc() {
        assert_eq!(base_to_nuc('A').unwrap(), Nuc::A);
        assert_eq!(base_to_nuc('C').unwrap(), Nuc::C);
        assert_eq!(base_to_nuc('G').unwrap(), Nuc::G);
        assert_eq!(base_to_nuc('T').unwrap(), Nuc::T);
        assert_eq!(base_to_nuc('N').unwrap(), Nuc::N);
        assert_eq!(base_to_nuc('a').unwrap(), Nuc::A);
        assert_eq!(base_to_nuc('c').unwrap(), Nuc::C);
        assert_eq!(base_to_nuc('g').unwrap(), Nuc::G);
        assert_eq!(base_to_nuc('t').unwrap(), Nuc::T);
        assert_eq!(base_to_nuc('n').unwrap(), Nuc::N);
        assert_eq!(base_to_nuc('X'), Err(GcError::InvalidBase('X')));
    }

    #[test]
    fn test_ambiguity_codes() {
        for base in "RYSWKMBDHVryswkmbdhv-.".chars() {
            assert_eq!(base_to_nuc(base).unwrap(), Nuc::N, "base {}", base);
        }
        assert!(base_to_nuc('U').is_err());
        assert!(base_to_nuc('*').is_err());
    }

    #[test]
    fn test_gc_flags() {
        assert!(Nuc::G.is_gc());
        assert!(Nuc::C.is_gc());
        assert!(!Nuc::A.is_gc());
        assert!(!Nuc::N.is_gc());
        assert!(Nuc::T.is_unambiguous());
        assert!(!Nuc::N.is_unambiguous());
    }

    #[test]
    fn test_string_to_seq() {
        let seq = vec![Nuc::A, Nuc::C, Nuc::G, Nuc::T, Nuc::N];
        assert_eq!(string_to_seq("ACGTN").unwrap(), seq);
        assert_eq!(string_to_seq("acgtn").unwrap(), seq);
        assert!(string_to_seq("ACGX").is_err());
    }
}
