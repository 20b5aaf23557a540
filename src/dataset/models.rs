// Data models: entities, cliques, and time slices.
//
// These are the types that flow through every analysis module. They carry no
// behavior beyond construction and read access, so the frequency, temporal,
// and similarity modules can share them without depending on each other.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Ordinal index of a temporal snapshot.
pub type TimeSlice = u32;

/// Anything usable as a clique member: hashable, totally ordered, cloneable.
///
/// The total order is only used to canonicalize cliques and combinations.
pub trait Entity: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Entity for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// An immutable group of co-occurring entities.
///
/// Member order is kept as given, and duplicates are not rejected. Cloning
/// shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<E>", into = "Vec<E>")]
#[serde(bound(
    serialize = "E: Clone + Serialize",
    deserialize = "E: Deserialize<'de>"
))]
pub struct Clique<E> {
    members: Arc<[E]>,
}

impl<E> Clique<E> {
    pub fn new(members: impl Into<Arc<[E]>>) -> Self {
        Self {
            members: members.into(),
        }
    }

    /// Members in their original order.
    pub fn members(&self) -> &[E] {
        &self.members
    }

    /// Raw member count, duplicates included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.members.iter()
    }
}

impl<E: Entity> Clique<E> {
    /// Sorted tuple form used for set-membership comparisons.
    ///
    /// Duplicate members survive, so `(a, a, b)` and `(a, b)` stay distinct.
    pub fn canonical(&self) -> Vec<E> {
        let mut sorted = self.members.to_vec();
        sorted.sort();
        sorted
    }

    /// Distinct members as a set (duplicates collapse).
    pub fn entity_set(&self) -> HashSet<E> {
        self.members.iter().cloned().collect()
    }

    pub fn contains(&self, entity: &E) -> bool {
        self.members.contains(entity)
    }
}

impl<E> From<Vec<E>> for Clique<E> {
    fn from(members: Vec<E>) -> Self {
        Self::new(members)
    }
}

impl<E: Clone> From<Clique<E>> for Vec<E> {
    fn from(clique: Clique<E>) -> Self {
        clique.members.to_vec()
    }
}

impl<E> FromIterator<E> for Clique<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, E> IntoIterator for &'a Clique<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Display> fmt::Display for Clique<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, "]")
    }
}

/// Node identifier as it appears in dataset files: an integer or a name.
///
/// Integers order before names, so mixed datasets still canonicalize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Name(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{n}"),
            NodeId::Name(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for NodeId {
    type Err = String;

    /// Anything that parses as an integer is an `Int`; everything else is a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("node id cannot be empty".to_string());
        }
        Ok(match s.parse::<i64>() {
            Ok(n) => NodeId::Int(n),
            Err(_) => NodeId::Name(s.to_string()),
        })
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Name(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_sorts_and_keeps_duplicates() {
        let clique = Clique::from(vec![3, 1, 3, 2]);
        assert_eq!(clique.canonical(), vec![1, 2, 3, 3]);
        assert_eq!(clique.members(), &[3, 1, 3, 2]);
    }

    #[test]
    fn entity_set_collapses_duplicates() {
        let clique = Clique::from(vec!["a", "a", "b"]);
        assert_eq!(clique.len(), 3);
        assert_eq!(clique.entity_set().len(), 2);
    }

    #[test]
    fn clique_deserializes_from_plain_array() {
        let clique: Clique<i64> = serde_json::from_str("[4, 2, 9]").unwrap();
        assert_eq!(clique.members(), &[4, 2, 9]);
        assert_eq!(serde_json::to_string(&clique).unwrap(), "[4,2,9]");
    }

    #[test]
    fn node_id_parses_ints_and_names() {
        assert_eq!("42".parse::<NodeId>().unwrap(), NodeId::Int(42));
        assert_eq!(
            "alice".parse::<NodeId>().unwrap(),
            NodeId::Name("alice".to_string())
        );
        assert!("  ".parse::<NodeId>().is_err());
    }

    #[test]
    fn node_id_untagged_json() {
        let ids: Vec<NodeId> = serde_json::from_str(r#"[1, "bob", -3]"#).unwrap();
        assert_eq!(
            ids,
            vec![NodeId::Int(1), NodeId::from("bob"), NodeId::Int(-3)]
        );
    }

    #[test]
    fn display_joins_members() {
        let clique = Clique::from(vec![NodeId::Int(1), NodeId::from("x")]);
        assert_eq!(clique.to_string(), "[1, x]");
    }
}
