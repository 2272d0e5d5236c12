// This library contains tools needed to read fasta files from the archive.

use super::file_tools::read_lines;
use super::nucleotides::{Nuc, base_to_nuc};
use super::types::Sequence;
use anyhow::{Result, anyhow};
use log::{debug, warn};
use std::path::Path;

/// One record of a fasta file.
#[derive(Debug, Clone, PartialEq)]
pub struct FastaRecord {
    /// first word of the header line
    pub id: String,
    pub sequence: Sequence,
}

/// Reads a fasta file (optionally gzipped) and returns its records in file
/// order.
///
/// # Arguments
///
///   - fasta_path: the path to the fasta file
///
/// # Returns
///
///   - The records, each identified by the first whitespace-delimited
///     word of its header
///
/// Errors if the file cannot be read, if sequence data appears before the
/// first header, or if a header has no identifier. Symbols that are not
/// nucleotide codes are kept as `N`, with a warning.
pub fn read_fasta(fasta_path: &Path) -> Result<Vec<FastaRecord>> {
    debug!("Reading fasta: {}", fasta_path.display());

    let mut records: Vec<FastaRecord> = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for (line_number, line) in read_lines(fasta_path)?.enumerate() {
        let l = line?;
        let l = l.trim_end();
        if let Some(header) = l.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            let id = header.split_whitespace().next().ok_or_else(|| {
                anyhow!(
                    "{}:{}: header without identifier",
                    fasta_path.display(),
                    line_number + 1
                )
            })?;
            current = Some(FastaRecord {
                id: id.to_string(),
                sequence: Vec::new(),
            });
        } else if !l.is_empty() {
            let record = current.as_mut().ok_or_else(|| {
                anyhow!(
                    "{}:{}: sequence data before the first header",
                    fasta_path.display(),
                    line_number + 1
                )
            })?;
            let mut unknown = 0;
            for base in l.chars().filter(|c| !c.is_whitespace()) {
                record.sequence.push(base_to_nuc(base).unwrap_or_else(|_| {
                    unknown += 1;
                    Nuc::N
                }));
            }
            if unknown > 0 {
                warn!(
                    "{}:{}: {} unrecognised base(s) in {} read as N",
                    fasta_path.display(),
                    line_number + 1,
                    unknown,
                    record.id
                );
            }
        }
    }

    // Need to pick up the last one
    if let Some(record) = current {
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn test_read_fasta() -> Result<()> {
        let tmp = TempDir::new()?;
        let fasta = tmp.child("genomes.fasta");
        fasta.write_str(">seq1 Escherichia coli plasmid\nGCGC\nGC\n\n>seq2\nataT\n")?;
        let records = read_fasta(fasta.path())?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].sequence.len(), 6);
        assert_eq!(records[1].id, "seq2");
        assert_eq!(records[1].sequence, vec![Nuc::A, Nuc::T, Nuc::A, Nuc::T]);
        Ok(())
    }

    #[test]
    fn test_read_empty_record() -> Result<()> {
        let tmp = TempDir::new()?;
        let fasta = tmp.child("empty.fasta");
        fasta.write_str(">nothing\n>something\nACGT\n")?;
        let records = read_fasta(fasta.path())?;
        assert_eq!(records.len(), 2);
        assert!(records[0].sequence.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_gzipped_fasta() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.child("genomes.fasta.gz");
        let file = std::fs::File::create(path.path())?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b">gz1\nGGCC\nAATT\n")?;
        encoder.finish()?;
        let records = read_fasta(path.path())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "gz1");
        assert_eq!(records[0].sequence.len(), 8);
        Ok(())
    }

    #[test]
    fn test_read_bad_fasta() -> Result<()> {
        let tmp = TempDir::new()?;
        let headless = tmp.child("headless.fasta");
        headless.write_str("ACGT\n>seq1\nACGT\n")?;
        assert!(read_fasta(headless.path()).is_err());

        let no_id = tmp.child("no_id.fasta");
        no_id.write_str(">\nACGT\n")?;
        assert!(read_fasta(no_id.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_unknown_bases_read_as_n() -> Result<()> {
        let tmp = TempDir::new()?;
        let rna = tmp.child("rna.fasta");
        rna.write_str(">rna1\nGCAU UX*\n")?;
        let records = read_fasta(rna.path())?;
        assert_eq!(
            records[0].sequence,
            vec![Nuc::G, Nuc::C, Nuc::A, Nuc::N, Nuc::N, Nuc::N, Nuc::N]
        );
        Ok(())
    }

    #[test]
    fn test_missing_fasta() {
        let er = read_fasta(Path::new("test_data/fake.fasta"));
        assert!(er.is_err());
    }
}
