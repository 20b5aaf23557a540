// Frequency analysis: how often entities and entity combinations recur.
//
// Counting is per occurrence: an entity listed twice in one clique counts
// twice. Combinations are canonicalized by sorting so (a, b) and (b, a) are
// the same key.

pub mod combinations;
pub mod table;

use anyhow::Result;
use tracing::debug;

use crate::dataset::models::{Clique, Entity};
use combinations::Combinations;
pub use table::FrequencyTable;
use table::Tally;

/// Count every entity occurrence across `cliques`, highest count first.
pub fn entity_frequencies<E: Entity>(cliques: &[Clique<E>]) -> FrequencyTable<E> {
    let mut tally = Tally::new();
    for clique in cliques {
        for entity in clique.iter() {
            tally.add(entity.clone());
        }
    }
    tally.finish()
}

/// Count every size-`k` combination of members across `cliques`.
///
/// Combinations are drawn over member positions (no repetition) and sorted
/// before counting. Cliques with fewer than `k` members contribute nothing.
/// `k == 0` is rejected.
pub fn combination_frequencies<E: Entity>(
    cliques: &[Clique<E>],
    k: usize,
) -> Result<FrequencyTable<Vec<E>>> {
    anyhow::ensure!(k > 0, "combination size must be at least 1 (got {k})");

    let mut tally = Tally::new();
    let mut skipped = 0usize;
    for clique in cliques {
        if clique.len() < k {
            skipped += 1;
            continue;
        }
        for positions in Combinations::new(clique.len(), k) {
            let mut combo: Vec<E> = positions
                .iter()
                .map(|&i| clique.members()[i].clone())
                .collect();
            combo.sort();
            tally.add(combo);
        }
    }

    let table = tally.finish();
    debug!(
        k,
        cliques = cliques.len(),
        skipped,
        distinct = table.len(),
        "Counted combinations"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliques(raw: &[&[i32]]) -> Vec<Clique<i32>> {
        raw.iter().map(|c| Clique::from(c.to_vec())).collect()
    }

    #[test]
    fn entity_counts_are_per_occurrence() {
        let table = entity_frequencies(&cliques(&[&[1, 1, 2], &[1]]));
        assert_eq!(table.get(&1), Some(3));
        assert_eq!(table.get(&2), Some(1));
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn empty_input_gives_empty_tables() {
        assert!(entity_frequencies::<i32>(&[]).is_empty());
        assert!(combination_frequencies::<i32>(&[], 2).unwrap().is_empty());
    }

    #[test]
    fn zero_k_is_rejected() {
        let err = combination_frequencies(&cliques(&[&[1, 2]]), 0).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn short_cliques_are_skipped() {
        let table = combination_frequencies(&cliques(&[&[1, 2], &[3, 2, 1]]), 3).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&vec![1, 2, 3]), Some(1));
    }

    #[test]
    fn reversed_pairs_share_a_key() {
        let table = combination_frequencies(&cliques(&[&[2, 1], &[1, 2]]), 2).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&vec![1, 2]), Some(2));
    }
}
