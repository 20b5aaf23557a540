// Similarity scoring between clique collections.
//
// Four definitions with different sensitivity to exact matches:
// - jaccard: exact canonical matches over the union
// - min-overlap: exact canonical matches over the smaller collection
// - delta: graded best-match overlap (partial credit for near misses)
// - entity-jaccard: Jaccard over the entities the collections touch
//
// Every score lies in [0.0, 1.0].

pub mod delta;
pub mod jaccard;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::dataset::models::{Clique, Entity};
pub use delta::delta_similarity;
pub use jaccard::{canonical_set, entity_set_jaccard, jaccard_similarity, minimum_overlap_similarity};

/// Selectable similarity definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMetric {
    Jaccard,
    MinOverlap,
    Delta,
    /// Jaccard over the union of each collection's members.
    EntityJaccard,
}

impl SimilarityMetric {
    pub const ALL: [SimilarityMetric; 4] = [
        SimilarityMetric::Jaccard,
        SimilarityMetric::MinOverlap,
        SimilarityMetric::Delta,
        SimilarityMetric::EntityJaccard,
    ];

    pub fn score<E: Entity>(&self, e_u: &[Clique<E>], e_v: &[Clique<E>]) -> f64 {
        match self {
            SimilarityMetric::Jaccard => jaccard_similarity(e_u, e_v),
            SimilarityMetric::MinOverlap => minimum_overlap_similarity(e_u, e_v),
            SimilarityMetric::Delta => delta_similarity(e_u, e_v),
            SimilarityMetric::EntityJaccard => {
                entity_set_jaccard(&member_union(e_u), &member_union(e_v))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMetric::Jaccard => "jaccard",
            SimilarityMetric::MinOverlap => "min-overlap",
            SimilarityMetric::Delta => "delta",
            SimilarityMetric::EntityJaccard => "entity-jaccard",
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SimilarityMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "jaccard" => Ok(SimilarityMetric::Jaccard),
            "min-overlap" | "minimum-overlap" => Ok(SimilarityMetric::MinOverlap),
            "delta" => Ok(SimilarityMetric::Delta),
            "entity-jaccard" => Ok(SimilarityMetric::EntityJaccard),
            other => Err(format!(
                "unknown similarity metric '{other}' (expected jaccard, min-overlap, delta, or entity-jaccard)"
            )),
        }
    }
}

/// Every entity appearing in any clique of the collection.
pub fn member_union<E: Entity>(cliques: &[Clique<E>]) -> HashSet<E> {
    cliques.iter().flat_map(|c| c.iter().cloned()).collect()
}

/// All four scores for one pair of collections.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityReport {
    pub left_size: usize,
    pub right_size: usize,
    pub jaccard: f64,
    pub min_overlap: f64,
    pub delta: f64,
    pub entity_jaccard: f64,
}

impl SimilarityReport {
    pub fn compute<E: Entity>(e_u: &[Clique<E>], e_v: &[Clique<E>]) -> Self {
        Self {
            left_size: e_u.len(),
            right_size: e_v.len(),
            jaccard: SimilarityMetric::Jaccard.score(e_u, e_v),
            min_overlap: SimilarityMetric::MinOverlap.score(e_u, e_v),
            delta: SimilarityMetric::Delta.score(e_u, e_v),
            entity_jaccard: SimilarityMetric::EntityJaccard.score(e_u, e_v),
        }
    }

    /// The score for one metric.
    pub fn get(&self, metric: SimilarityMetric) -> f64 {
        match metric {
            SimilarityMetric::Jaccard => self.jaccard,
            SimilarityMetric::MinOverlap => self.min_overlap,
            SimilarityMetric::Delta => self.delta,
            SimilarityMetric::EntityJaccard => self.entity_jaccard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_names_round_trip() {
        for metric in SimilarityMetric::ALL {
            assert_eq!(metric.as_str().parse::<SimilarityMetric>().unwrap(), metric);
        }
        assert_eq!(
            "MIN_OVERLAP".parse::<SimilarityMetric>().unwrap(),
            SimilarityMetric::MinOverlap
        );
        assert!("cosine".parse::<SimilarityMetric>().is_err());
    }

    #[test]
    fn entity_jaccard_uses_member_union() {
        let u = vec![Clique::from(vec![1, 2]), Clique::from(vec![3])];
        let v = vec![Clique::from(vec![3, 4])];
        // {1,2,3} vs {3,4}: 1 / 4
        assert!((SimilarityMetric::EntityJaccard.score(&u, &v) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn report_matches_individual_metrics() {
        let u = vec![Clique::from(vec![1, 2, 3]), Clique::from(vec![4, 5])];
        let v = vec![Clique::from(vec![3, 2, 1])];
        let report = SimilarityReport::compute(&u, &v);
        for metric in SimilarityMetric::ALL {
            assert_eq!(report.get(metric), metric.score(&u, &v));
        }
        assert_eq!(report.left_size, 2);
        assert_eq!(report.min_overlap, 1.0);
    }
}
