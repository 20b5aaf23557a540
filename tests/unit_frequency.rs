// Unit tests for frequency analysis.
//
// Tests entity_frequencies and combination_frequencies against small
// hand-computed clique batches: per-occurrence counting, descending order,
// canonical combination keys, and the k == 0 rejection.

use std::collections::HashSet;

use cliquescope::frequency::{combination_frequencies, entity_frequencies};
use cliquescope::{Clique, NodeId};

fn cliques(raw: &[&[i64]]) -> Vec<Clique<i64>> {
    raw.iter().map(|c| Clique::from(c.to_vec())).collect()
}

// ============================================================
// entity_frequencies
// ============================================================

#[test]
fn entity_frequencies_reference_scenario() {
    let table = entity_frequencies(&cliques(&[&[1, 2, 3], &[2, 3, 4], &[1, 2]]));

    assert_eq!(table.len(), 4);
    let entries = table.as_slice();

    // Highest count first, lowest last
    assert_eq!(entries[0], (2, 3));
    assert_eq!(entries[3], (4, 1));

    // 1 and 3 tie at 2; assert the tied group, not its internal order
    let tied: HashSet<i64> = entries[1..3].iter().map(|(k, _)| *k).collect();
    assert_eq!(tied, HashSet::from([1, 3]));
    assert!(entries[1..3].iter().all(|(_, c)| *c == 2));
}

#[test]
fn entity_frequencies_total_equals_occurrences() {
    let batch = cliques(&[&[5, 6, 7, 8], &[5], &[], &[6, 6, 9]]);
    let occurrences: usize = batch.iter().map(Clique::len).sum();
    assert_eq!(entity_frequencies(&batch).total(), occurrences);
}

#[test]
fn entity_frequencies_counts_are_non_increasing() {
    let table = entity_frequencies(&cliques(&[&[1, 2], &[2, 3], &[3, 4], &[3, 1], &[3]]));
    let counts: Vec<usize> = table.iter().map(|(_, c)| c).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]), "{counts:?}");
}

#[test]
fn entity_frequencies_empty_batch() {
    let table = entity_frequencies::<i64>(&[]);
    assert!(table.is_empty());
    assert_eq!(table.total(), 0);
}

#[test]
fn entity_frequencies_with_string_ids() {
    let batch = vec![
        Clique::from(vec![NodeId::from("alice"), NodeId::from("bob")]),
        Clique::from(vec![NodeId::from("bob"), NodeId::Int(7)]),
    ];
    let table = entity_frequencies(&batch);
    assert_eq!(table.get(&NodeId::from("bob")), Some(2));
    assert_eq!(table.get(&NodeId::Int(7)), Some(1));
}

// ============================================================
// combination_frequencies
// ============================================================

#[test]
fn combination_frequencies_reference_scenario() {
    let table = combination_frequencies(&cliques(&[&[1, 2, 3]]), 2).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(&vec![1, 2]), Some(1));
    assert_eq!(table.get(&vec![1, 3]), Some(1));
    assert_eq!(table.get(&vec![2, 3]), Some(1));
}

#[test]
fn combination_keys_are_sorted_and_sized() {
    let batch = cliques(&[&[9, 4, 1, 7], &[7, 1], &[4, 9, 3]]);
    for k in 1..=4 {
        let table = combination_frequencies(&batch, k).unwrap();
        for (key, _) in table.iter() {
            assert_eq!(key.len(), k);
            assert!(key.windows(2).all(|w| w[0] <= w[1]), "unsorted key {key:?}");
        }
    }
}

#[test]
fn combination_frequencies_merges_reordered_pairs() {
    let table = combination_frequencies(&cliques(&[&[3, 1], &[1, 3, 5]]), 2).unwrap();
    assert_eq!(table.get(&vec![1, 3]), Some(2));
    assert!(table.get(&vec![3, 1]).is_none());
    assert_eq!(table.as_slice()[0], (vec![1, 3], 2));
}

#[test]
fn combination_frequencies_k_one_matches_entity_frequencies() {
    let batch = cliques(&[&[1, 2, 3], &[2, 3, 4], &[1, 2]]);
    let combos = combination_frequencies(&batch, 1).unwrap();
    let entities = entity_frequencies(&batch);
    for (entity, count) in entities.iter() {
        assert_eq!(combos.get(&vec![*entity]), Some(count));
    }
}

#[test]
fn combination_frequencies_k_above_every_clique() {
    let table = combination_frequencies(&cliques(&[&[1, 2], &[3]]), 5).unwrap();
    assert!(table.is_empty());
}

#[test]
fn combination_frequencies_rejects_zero() {
    assert!(combination_frequencies(&cliques(&[&[1, 2, 3]]), 0).is_err());
    assert!(combination_frequencies::<i64>(&[], 0).is_err());
}
