// Temporal extraction: the cliques at one time slice relevant to a
// reference set U.
//
// Traversal is driven by U: for each member (in sorted order) we look up the
// cliques recorded for it at slice t and keep those the policy admits. A
// clique reachable from several members of U is emitted once per member, so
// the raw result is a multiset. `extract_distinct` gives the deduplicated
// view.

pub mod policy;

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::dataset::index::TemporalIndex;
use crate::dataset::models::{Clique, Entity, TimeSlice};
pub use policy::RelevancePolicy;

/// Collect every clique at `time` that `policy` deems relevant to `reference`.
pub fn extract<E: Entity>(
    index: &TemporalIndex<E>,
    reference: &BTreeSet<E>,
    time: TimeSlice,
    policy: &RelevancePolicy,
) -> Vec<Clique<E>> {
    let mut relevant = Vec::new();
    let mut examined = 0usize;

    for entity in reference {
        for clique in index.cliques_at(entity, time) {
            examined += 1;
            let overlap = overlap_with(clique, reference);
            if policy.admits(overlap, reference.len(), clique.len()) {
                relevant.push(clique.clone());
            }
        }
    }

    debug!(
        time,
        policy = policy.name(),
        reference = reference.len(),
        examined,
        admitted = relevant.len(),
        "Extracted relevant cliques"
    );
    relevant
}

/// Cliques sharing at least one member with `reference`.
pub fn extract_unrestricted<E: Entity>(
    index: &TemporalIndex<E>,
    reference: &BTreeSet<E>,
    time: TimeSlice,
) -> Vec<Clique<E>> {
    extract(index, reference, time, &RelevancePolicy::Unrestricted)
}

/// Cliques covering at least an `alpha` fraction of `reference`.
pub fn extract_fractured<E: Entity>(
    index: &TemporalIndex<E>,
    reference: &BTreeSet<E>,
    time: TimeSlice,
    alpha: f64,
) -> Vec<Clique<E>> {
    extract(index, reference, time, &RelevancePolicy::Fractured { alpha })
}

/// Cliques with at least a `beta` fraction of their own members in `reference`.
pub fn extract_core<E: Entity>(
    index: &TemporalIndex<E>,
    reference: &BTreeSet<E>,
    time: TimeSlice,
    beta: f64,
) -> Vec<Clique<E>> {
    extract(index, reference, time, &RelevancePolicy::Core { beta })
}

/// Like [`extract`], but each canonical clique appears at most once.
pub fn extract_distinct<E: Entity>(
    index: &TemporalIndex<E>,
    reference: &BTreeSet<E>,
    time: TimeSlice,
    policy: &RelevancePolicy,
) -> Vec<Clique<E>> {
    distinct_cliques(&extract(index, reference, time, policy))
}

/// Drop repeated cliques (same canonical form), keeping first occurrences.
pub fn distinct_cliques<E: Entity>(cliques: &[Clique<E>]) -> Vec<Clique<E>> {
    let mut seen = HashSet::new();
    cliques
        .iter()
        .filter(|clique| seen.insert(clique.canonical()))
        .cloned()
        .collect()
}

/// Number of distinct clique members that belong to `reference`.
fn overlap_with<E: Entity>(clique: &Clique<E>, reference: &BTreeSet<E>) -> usize {
    clique
        .entity_set()
        .iter()
        .filter(|member| reference.contains(*member))
        .count()
}
