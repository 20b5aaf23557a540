// Temporal clique index: entity -> time slice -> cliques containing it.
//
// The analysis modules only read this structure. It is filled in once by the
// dataset loader (or by a caller with its own ingestion stage).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::models::{Clique, Entity, TimeSlice};

/// "All cliques recorded at time t that contain entity e", for every e and t.
#[derive(Debug, Clone)]
pub struct TemporalIndex<E> {
    by_entity: HashMap<E, BTreeMap<TimeSlice, Vec<Clique<E>>>>,
}

impl<E> Default for TemporalIndex<E> {
    fn default() -> Self {
        Self {
            by_entity: HashMap::new(),
        }
    }
}

impl<E: Entity> TemporalIndex<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a clique under one entity at one time slice.
    ///
    /// No check is made that the entity is actually a member of the clique;
    /// callers with their own ingestion stage decide what "contains" means.
    pub fn insert(&mut self, entity: E, time: TimeSlice, clique: Clique<E>) {
        self.by_entity
            .entry(entity)
            .or_default()
            .entry(time)
            .or_default()
            .push(clique);
    }

    /// Build an index from per-slice clique lists.
    ///
    /// Each clique is filed once under every distinct member, so a clique
    /// listing an entity twice is still recorded once for that entity.
    pub fn from_slices<'a, I>(slices: I) -> Self
    where
        E: 'a,
        I: IntoIterator<Item = (TimeSlice, &'a [Clique<E>])>,
    {
        let mut index = Self::new();
        for (time, cliques) in slices {
            for clique in cliques {
                let mut seen = HashSet::new();
                for member in clique.iter() {
                    if seen.insert(member) {
                        index.insert(member.clone(), time, clique.clone());
                    }
                }
            }
        }
        index
    }

    /// Cliques recorded for `entity` at `time`; empty when either is absent.
    pub fn cliques_at(&self, entity: &E, time: TimeSlice) -> &[Clique<E>] {
        self.by_entity
            .get(entity)
            .and_then(|slices| slices.get(&time))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn entity_count(&self) -> usize {
        self.by_entity.len()
    }

    /// Every time slice at which any entity has recorded cliques.
    pub fn time_slices(&self) -> BTreeSet<TimeSlice> {
        self.by_entity
            .values()
            .flat_map(|slices| slices.keys().copied())
            .collect()
    }

    /// Time slices at which at least one of `entities` has recorded cliques.
    pub fn time_slices_for<'a>(&self, entities: impl IntoIterator<Item = &'a E>) -> BTreeSet<TimeSlice>
    where
        E: 'a,
    {
        entities
            .into_iter()
            .filter_map(|e| self.by_entity.get(e))
            .flat_map(|slices| slices.keys().copied())
            .collect()
    }
}
