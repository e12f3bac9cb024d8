//! Index names, selections and results.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::IndexError;

/// One of the supported topological indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// Sum of squared degrees.
    Zagreb,
    /// Sum of pairwise distances.
    Wiener,
    /// Sum of distance times degree product over pairs.
    Gutman,
}

impl IndexKind {
    pub const ALL: [IndexKind; 3] = [IndexKind::Zagreb, IndexKind::Wiener, IndexKind::Gutman];

    pub fn name(self) -> &'static str {
        match self {
            IndexKind::Zagreb => "zagreb",
            IndexKind::Wiener => "wiener",
            IndexKind::Gutman => "gutman",
        }
    }

    /// Whether computing this index needs pairwise distances.
    pub fn needs_distances(self) -> bool {
        !matches!(self, IndexKind::Zagreb)
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for IndexKind {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zagreb" => Ok(IndexKind::Zagreb),
            "wiener" => Ok(IndexKind::Wiener),
            "gutman" => Ok(IndexKind::Gutman),
            _ => Err(IndexError::UnknownIndex(s.to_string())),
        }
    }
}

/// A non-empty set of requested indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSelection(BTreeSet<IndexKind>);

impl IndexSelection {
    /// Build a selection; fails if `kinds` is empty.
    pub fn new(kinds: impl IntoIterator<Item = IndexKind>) -> Result<Self, IndexError> {
        let set: BTreeSet<IndexKind> = kinds.into_iter().collect();
        if set.is_empty() {
            return Err(IndexError::EmptySelection);
        }
        Ok(Self(set))
    }

    /// All three indices.
    pub fn all() -> Self {
        Self(IndexKind::ALL.into_iter().collect())
    }

    pub fn contains(&self, kind: IndexKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = IndexKind> + '_ {
        self.0.iter().copied()
    }

    pub fn needs_distances(&self) -> bool {
        self.iter().any(IndexKind::needs_distances)
    }
}

/// Index values keyed by index, in `zagreb, wiener, gutman` order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndexResult(BTreeMap<IndexKind, u64>);

impl IndexResult {
    /// Every selected index set to zero (value for edgeless graphs).
    pub fn zeros(selection: &IndexSelection) -> Self {
        Self(selection.iter().map(|kind| (kind, 0)).collect())
    }

    pub fn get(&self, kind: IndexKind) -> Option<u64> {
        self.0.get(&kind).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndexKind, u64)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(IndexKind, u64)> for IndexResult {
    fn from_iter<I: IntoIterator<Item = (IndexKind, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("zagreb".parse::<IndexKind>().unwrap(), IndexKind::Zagreb);
        assert_eq!(" Wiener ".parse::<IndexKind>().unwrap(), IndexKind::Wiener);
        assert_eq!("GUTMAN".parse::<IndexKind>().unwrap(), IndexKind::Gutman);
        assert_eq!(
            "randic".parse::<IndexKind>().unwrap_err(),
            IndexError::UnknownIndex("randic".into())
        );
    }

    #[test]
    fn display_round_trips() {
        for kind in IndexKind::ALL {
            assert_eq!(kind.to_string().parse::<IndexKind>().unwrap(), kind);
        }
    }

    #[test]
    fn empty_selection_rejected() {
        assert_eq!(IndexSelection::new(Vec::new()).unwrap_err(), IndexError::EmptySelection);
    }

    #[test]
    fn selection_dedups_and_orders() {
        let sel = IndexSelection::new([IndexKind::Gutman, IndexKind::Zagreb, IndexKind::Gutman])
            .unwrap();
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![IndexKind::Zagreb, IndexKind::Gutman]);
        assert!(sel.needs_distances());
        assert!(!IndexSelection::new([IndexKind::Zagreb]).unwrap().needs_distances());
    }

    #[test]
    fn zeros_cover_selection() {
        let result = IndexResult::zeros(&IndexSelection::all());
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|(_, v)| v == 0));
        assert_eq!(result.get(IndexKind::Wiener), Some(0));
    }
}
