// In-memory table of the sequences loaded for one analysis session.

use super::errors::GcError;
use super::nucleotides::Nuc;
use super::types::Sequence;
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use strum_macros::{Display, EnumString};

/// What the store does when an identifier is loaded twice.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CollisionPolicy {
    /// The later record replaces the earlier one, keeping its load position.
    #[default]
    Overwrite,
    /// Loading a duplicate identifier is an error.
    Reject,
    /// Identifiers are keyed as `<source>:<id>`.
    Namespace,
}

/// A loaded sequence together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSequence {
    source: String,
    sequence: Sequence,
}

impl StoredSequence {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn sequence(&self) -> &[Nuc] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Sequences keyed by identifier, remembering the order they were loaded in.
#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    sequences: HashMap<String, StoredSequence>,
    order: Vec<String>,
    policy: CollisionPolicy,
}

impl SequenceStore {
    pub fn new(policy: CollisionPolicy) -> Self {
        SequenceStore {
            policy,
            ..Default::default()
        }
    }

    /// Adds a sequence read from `source`, applying the collision policy.
    ///
    /// Returns the key the sequence is stored under.
    pub fn insert(
        &mut self,
        id: &str,
        source: &str,
        sequence: Sequence,
    ) -> Result<String, GcError> {
        let key = match self.policy {
            CollisionPolicy::Namespace => format!("{}:{}", source, id),
            _ => id.to_string(),
        };
        let entry = StoredSequence {
            source: source.to_string(),
            sequence,
        };
        match self.sequences.get_mut(&key) {
            Some(existing) if self.policy == CollisionPolicy::Overwrite => {
                warn!(
                    "Sequence {} from {} replaces the one loaded from {}",
                    key, source, existing.source
                );
                *existing = entry;
            }
            Some(existing) => {
                return Err(GcError::DuplicateIdentifier {
                    id: key,
                    first: existing.source.clone(),
                    second: source.to_string(),
                });
            }
            None => {
                self.order.push(key.clone());
                self.sequences.insert(key.clone(), entry);
            }
        }
        Ok(key)
    }

    pub fn get(&self, id: &str) -> Option<&StoredSequence> {
        self.sequences.get(id)
    }

    /// Identifiers in load order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::nucleotides::string_to_seq;
    use anyhow::Result;
    use std::str::FromStr;

    #[test]
    fn test_load_order_kept() -> Result<()> {
        let mut store = SequenceStore::new(CollisionPolicy::Overwrite);
        store.insert("zeta", "a.fasta", string_to_seq("ACGT")?)?;
        store.insert("alpha", "a.fasta", string_to_seq("GG")?)?;
        store.insert("mid", "b.fasta", string_to_seq("T")?)?;
        assert_eq!(store.ids(), &["zeta", "alpha", "mid"]);
        assert_eq!(store.get("alpha").unwrap().len(), 2);
        assert_eq!(store.len(), 3);
        Ok(())
    }

    #[test]
    fn test_overwrite_keeps_position() -> Result<()> {
        let mut store = SequenceStore::new(CollisionPolicy::Overwrite);
        store.insert("seq1", "a.fasta", string_to_seq("AAAA")?)?;
        store.insert("seq2", "a.fasta", string_to_seq("CCCC")?)?;
        store.insert("seq1", "b.fasta", string_to_seq("GG")?)?;
        assert_eq!(store.ids(), &["seq1", "seq2"]);
        let seq1 = store.get("seq1").unwrap();
        assert_eq!(seq1.source(), "b.fasta");
        assert_eq!(seq1.sequence(), string_to_seq("GG")?.as_slice());
        Ok(())
    }

    #[test]
    fn test_reject_duplicates() -> Result<()> {
        let mut store = SequenceStore::new(CollisionPolicy::Reject);
        store.insert("seq1", "a.fasta", string_to_seq("AAAA")?)?;
        let er = store.insert("seq1", "b.fasta", string_to_seq("GG")?);
        assert_eq!(
            er,
            Err(GcError::DuplicateIdentifier {
                id: "seq1".to_string(),
                first: "a.fasta".to_string(),
                second: "b.fasta".to_string(),
            })
        );
        assert_eq!(store.get("seq1").unwrap().source(), "a.fasta");
        Ok(())
    }

    #[test]
    fn test_namespace_keys() -> Result<()> {
        let mut store = SequenceStore::new(CollisionPolicy::Namespace);
        let k1 = store.insert("seq1", "a.fasta", string_to_seq("AAAA")?)?;
        let k2 = store.insert("seq1", "b.fasta", string_to_seq("GG")?)?;
        assert_eq!(k1, "a.fasta:seq1");
        assert_eq!(k2, "b.fasta:seq1");
        assert_eq!(store.len(), 2);
        assert!(store.get("seq1").is_none());
        assert!(store.insert("seq1", "a.fasta", Vec::new()).is_err());
        Ok(())
    }

    #[test]
    fn test_policy_names() -> Result<()> {
        assert_eq!(CollisionPolicy::from_str("reject")?, CollisionPolicy::Reject);
        assert_eq!(CollisionPolicy::Namespace.to_string(), "namespace");
        assert_eq!(CollisionPolicy::default(), CollisionPolicy::Overwrite);
        Ok(())
    }
}
