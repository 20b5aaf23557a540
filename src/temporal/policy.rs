// Relevance policies: when does a recorded clique count as relevant to U?
//
// All three compare the number of distinct clique members that belong to U
// (the overlap) against a threshold:
//
//   Unrestricted   overlap >= 1
//   Fractured(a)   overlap >= a * |U|
//   Core(b)        overlap >= b * |C|     (|C| = raw clique length)
//
// Thresholds are not range-checked. Out-of-range values simply admit
// everything or nothing.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelevancePolicy {
    /// Any shared entity qualifies.
    Unrestricted,
    /// The clique must cover an `alpha` fraction of the reference set.
    Fractured { alpha: f64 },
    /// The reference set must cover a `beta` fraction of the clique.
    Core { beta: f64 },
}

impl RelevancePolicy {
    /// Whether a clique of raw length `clique_len`, sharing `overlap`
    /// distinct members with a reference set of size `reference_len`,
    /// is admitted.
    pub fn admits(&self, overlap: usize, reference_len: usize, clique_len: usize) -> bool {
        match *self {
            RelevancePolicy::Unrestricted => overlap >= 1,
            RelevancePolicy::Fractured { alpha } => overlap as f64 >= alpha * reference_len as f64,
            RelevancePolicy::Core { beta } => overlap as f64 >= beta * clique_len as f64,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RelevancePolicy::Unrestricted => "unrestricted",
            RelevancePolicy::Fractured { .. } => "fractured",
            RelevancePolicy::Core { .. } => "core",
        }
    }

    /// Attach a threshold to a parsed policy kind.
    ///
    /// The threshold is ignored for `unrestricted`.
    pub fn from_kind(kind: PolicyKind, threshold: f64) -> Self {
        match kind {
            PolicyKind::Unrestricted => RelevancePolicy::Unrestricted,
            PolicyKind::Fractured => RelevancePolicy::Fractured { alpha: threshold },
            PolicyKind::Core => RelevancePolicy::Core { beta: threshold },
        }
    }
}

impl fmt::Display for RelevancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelevancePolicy::Unrestricted => write!(f, "unrestricted"),
            RelevancePolicy::Fractured { alpha } => write!(f, "fractured (alpha={alpha})"),
            RelevancePolicy::Core { beta } => write!(f, "core (beta={beta})"),
        }
    }
}

/// Policy name without its threshold, as typed on the command line.
///
/// Accepts the aliases `any`, `alpha` and `beta`, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Unrestricted,
    Fractured,
    Core,
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unrestricted" | "any" => Ok(PolicyKind::Unrestricted),
            "fractured" | "alpha" => Ok(PolicyKind::Fractured),
            "core" | "beta" => Ok(PolicyKind::Core),
            other => Err(format!(
                "unknown relevance policy '{other}' (expected unrestricted, fractured, or core)"
            )),
        }
    }
}
