// Delta similarity: graded best-match overlap between clique collections.
//
// Every clique on each side is paired with its best-overlapping clique on the
// other side (by entity-set Jaccard), and the best scores are averaged over
// all cliques of both sides:
//
//   (sum_u max_v J(u, v) + sum_v max_u J(v, u)) / (|U| + |V|)
//
// This is a symmetric Chamfer-style measure: near-misses earn partial credit
// where the exact-match metrics give none. Cost is O(|U| * |V|).

use std::collections::HashSet;

use crate::dataset::models::{Clique, Entity};

use super::jaccard::entity_set_jaccard;

/// Best-match average similarity. Both empty → 1.0, exactly one empty → 0.0.
pub fn delta_similarity<E: Entity>(e_u: &[Clique<E>], e_v: &[Clique<E>]) -> f64 {
    match (e_u.is_empty(), e_v.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let sets_u: Vec<HashSet<E>> = e_u.iter().map(Clique::entity_set).collect();
    let sets_v: Vec<HashSet<E>> = e_v.iter().map(Clique::entity_set).collect();

    let sum_u = best_match_sum(&sets_u, &sets_v);
    let sum_v = best_match_sum(&sets_v, &sets_u);

    (sum_u + sum_v) / (e_u.len() + e_v.len()) as f64
}

/// Sum over `from` of each set's best Jaccard against any set in `against`.
fn best_match_sum<E: Entity>(from: &[HashSet<E>], against: &[HashSet<E>]) -> f64 {
    from.iter()
        .map(|a| {
            against
                .iter()
                .map(|b| entity_set_jaccard(a, b))
                .fold(0.0, f64::max)
        })
        .sum()
}
