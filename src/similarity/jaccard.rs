// Exact-match similarity between clique collections, plus plain set Jaccard.
//
// Clique collections are compared as sets of canonical (sorted) cliques, so
// reordered duplicates collapse. Only the minimum-overlap denominator looks
// at raw collection lengths.

use std::collections::HashSet;
use std::hash::Hash;

use crate::dataset::models::{Clique, Entity};

/// Canonical forms of every clique in the collection, duplicates collapsed.
pub fn canonical_set<E: Entity>(cliques: &[Clique<E>]) -> HashSet<Vec<E>> {
    cliques.iter().map(Clique::canonical).collect()
}

/// `|canon(U) ∩ canon(V)| / |canon(U) ∪ canon(V)|`, or 0.0 if either side
/// is empty.
pub fn jaccard_similarity<E: Entity>(e_u: &[Clique<E>], e_v: &[Clique<E>]) -> f64 {
    if e_u.is_empty() || e_v.is_empty() {
        return 0.0;
    }
    let a = canonical_set(e_u);
    let b = canonical_set(e_v);
    let shared = a.intersection(&b).count();
    let union = a.union(&b).count();
    shared as f64 / union as f64
}

/// `|canon(U) ∩ canon(V)| / min(|U|, |V|)` with raw collection lengths in the
/// denominator, or 0.0 if either side is empty.
///
/// Measures how much of the smaller collection is contained in the larger.
pub fn minimum_overlap_similarity<E: Entity>(e_u: &[Clique<E>], e_v: &[Clique<E>]) -> f64 {
    if e_u.is_empty() || e_v.is_empty() {
        return 0.0;
    }
    let a = canonical_set(e_u);
    let b = canonical_set(e_v);
    let shared = a.intersection(&b).count();
    shared as f64 / e_u.len().min(e_v.len()) as f64
}

/// Jaccard index of two arbitrary sets; 0.0 when both are empty.
pub fn entity_set_jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    if union == 0 {
        0.0
    } else {
        shared as f64 / union as f64
    }
}
