use crate::domain::a001_catalog_entry::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count of names per uppercased first character.
///
/// Built once from the full snapshot. Letters without names are absent
/// from the map; [`AlphabetHistogram::count`] reports them as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetHistogram {
    counts: BTreeMap<char, usize>,
}

/// One column of the alphabet summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
}

impl AlphabetHistogram {
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = BTreeMap::new();
        for name in names {
            // Multi-char uppercase forms (e.g. 'ß') keep only their first char.
            if let Some(first) = name.chars().next().and_then(|c| c.to_uppercase().next()) {
                *counts.entry(first).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        Self::from_names(entries.iter().map(|e| e.name.as_str()))
    }

    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// All 26 letters `A..=Z` in order, zeros included
    pub fn rows(&self) -> impl Iterator<Item = LetterCount> + '_ {
        ('A'..='Z').map(move |letter| LetterCount {
            letter,
            count: self.count(letter),
        })
    }

    /// Sum over every counted first character, not only `A..=Z`
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
