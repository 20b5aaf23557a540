// Slice-to-slice similarity timeline for one reference set.
//
// Steps:
// 1. Collect the time slices at which any member of U has recorded cliques
// 2. Extract U's relevant cliques at each slice under the chosen policy
// 3. Score each consecutive pair of slices with the chosen metric
//
// A drop in the series marks a slice where the cliques around U changed.

use std::collections::BTreeSet;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use crate::dataset::index::TemporalIndex;
use crate::dataset::models::{Entity, TimeSlice};
use crate::similarity::SimilarityMetric;
use crate::temporal::{self, RelevancePolicy};

/// Similarity between U's relevant cliques at two consecutive slices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineStep {
    pub from: TimeSlice,
    pub to: TimeSlice,
    pub from_cliques: usize,
    pub to_cliques: usize,
    pub similarity: f64,
}

/// Score consecutive slices. Returns an empty series when U touches fewer
/// than two slices.
pub fn slice_similarity_timeline<E: Entity>(
    index: &TemporalIndex<E>,
    reference: &BTreeSet<E>,
    policy: &RelevancePolicy,
    metric: SimilarityMetric,
) -> Vec<TimelineStep> {
    let slices: Vec<TimeSlice> = index.time_slices_for(reference).into_iter().collect();
    if slices.len() < 2 {
        debug!(slices = slices.len(), "Not enough slices for a timeline");
        return Vec::new();
    }

    info!(
        slices = slices.len(),
        policy = policy.name(),
        metric = metric.as_str(),
        "Building similarity timeline"
    );

    let pb = ProgressBar::new((slices.len() - 1) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Slices [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut steps = Vec::with_capacity(slices.len() - 1);
    let mut previous = temporal::extract(index, reference, slices[0], policy);

    for pair in slices.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let current = temporal::extract(index, reference, to, policy);

        steps.push(TimelineStep {
            from,
            to,
            from_cliques: previous.len(),
            to_cliques: current.len(),
            similarity: metric.score(&previous, &current),
        });

        previous = current;
        pb.inc(1);
    }
    pb.finish_and_clear();

    steps
}
