// Dataset loading: pre-extracted cliques per time slice, read from JSON.
//
// Clique extraction from raw relational data happens upstream. This module
// only reads its output:
//
//   {"slices": [{"time": 0, "cliques": [[1, 2, 3], [2, 4]]}, ...]}
//
// and builds the per-slice lists plus the entity -> time -> cliques index.

pub mod index;
pub mod models;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use index::TemporalIndex;
use models::{Clique, NodeId, TimeSlice};

#[derive(Debug, Deserialize)]
struct DatasetFile {
    slices: Vec<SliceRecord>,
}

#[derive(Debug, Deserialize)]
struct SliceRecord {
    time: TimeSlice,
    cliques: Vec<Clique<NodeId>>,
}

/// A loaded dataset: cliques grouped by time slice, with the derived index.
#[derive(Debug, Clone)]
pub struct Dataset {
    slices: BTreeMap<TimeSlice, Vec<Clique<NodeId>>>,
    index: TemporalIndex<NodeId>,
}

impl Dataset {
    /// Read and parse a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset at {}", path.display()))?;
        let dataset = Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse dataset at {}", path.display()))?;

        info!(
            path = %path.display(),
            slices = dataset.slices.len(),
            cliques = dataset.clique_count(),
            entities = dataset.index.entity_count(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse a dataset from a JSON string. Repeated `time` entries are merged.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(raw)?;

        let mut slices: BTreeMap<TimeSlice, Vec<Clique<NodeId>>> = BTreeMap::new();
        for record in file.slices {
            slices.entry(record.time).or_default().extend(record.cliques);
        }

        let index = TemporalIndex::from_slices(
            slices
                .iter()
                .map(|(time, cliques)| (*time, cliques.as_slice())),
        );

        Ok(Self { slices, index })
    }

    pub fn index(&self) -> &TemporalIndex<NodeId> {
        &self.index
    }

    /// Cliques recorded at one slice; empty if the slice is absent.
    pub fn slice(&self, time: TimeSlice) -> &[Clique<NodeId>] {
        self.slices.get(&time).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every clique across all slices, in slice order.
    pub fn all_cliques(&self) -> Vec<Clique<NodeId>> {
        self.slices.values().flatten().cloned().collect()
    }

    pub fn time_slices(&self) -> BTreeSet<TimeSlice> {
        self.slices.keys().copied().collect()
    }

    pub fn clique_count(&self) -> usize {
        self.slices.values().map(Vec::len).sum()
    }

    pub fn entity_count(&self) -> usize {
        self.index.entity_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "slices": [
            {"time": 0, "cliques": [[1, 2, 3], [2, 4]]},
            {"time": 2, "cliques": [["a", 1]]},
            {"time": 0, "cliques": [[5, 6]]}
        ]
    }"#;

    #[test]
    fn merges_repeated_slices() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.slice(0).len(), 3);
        assert_eq!(dataset.clique_count(), 4);
        assert_eq!(dataset.time_slices(), BTreeSet::from([0, 2]));
    }

    #[test]
    fn builds_index_from_slices() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        let index = dataset.index();
        assert_eq!(index.cliques_at(&NodeId::Int(2), 0).len(), 2);
        assert_eq!(index.cliques_at(&NodeId::from("a"), 2).len(), 1);
        assert_eq!(index.cliques_at(&NodeId::Int(1), 2).len(), 1);
        assert_eq!(dataset.entity_count(), 7);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Dataset::from_json_str(r#"{"slices": [{"time": -1}]}"#).is_err());
        assert!(Dataset::from_json_str("not json").is_err());
    }

    #[test]
    fn missing_slice_is_empty() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert!(dataset.slice(7).is_empty());
    }
}
