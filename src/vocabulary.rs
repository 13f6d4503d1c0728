use crate::error::Result;
use crate::Trait;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The known trait names, sorted and deduplicated.
///
/// Loaded once by the caller and handed to a
/// [`Calculator`](crate::cross::Calculator); never changes afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
    traits: BTreeSet<Trait>,
}

impl Vocabulary {
    /// Builds a vocabulary, dropping empty and whitespace-only names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            traits: names
                .into_iter()
                .map(|name| Trait::new(name.as_ref()))
                .filter(|t| !t.is_blank())
                .collect(),
        }
    }

    /// Reads a JSON array of trait names. `null` entries are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let names: Vec<Option<String>> = serde_json::from_reader(reader)?;
        let total = names.len();
        let vocabulary = Self::new(names.into_iter().flatten());
        if vocabulary.len() < total {
            log::warn!(
                "Skipped {} empty or duplicate trait names",
                total - vocabulary.len()
            );
        }
        Ok(vocabulary)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn contains(&self, trait_name: &Trait) -> bool {
        self.traits.contains(trait_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.traits.iter()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}
