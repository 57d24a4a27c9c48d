//! The wildcard constraint lattice.
//!
//! Represented as an exhaustive tagged enumeration over the four possible
//! demands a single path can place on the board's two wildcards. This keeps
//! the first/second symmetry explicit and makes every merge a total pattern
//! match, rather than a map keyed by position strings that would lose that
//! symmetry and admit invalid states.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::GameError;

/// The wildcard demand of a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathConstraintSet {
    /// The path uses no wildcard.
    Unconstrained,
    /// The path uses only the first wildcard, which must represent this letter.
    FirstDecided(char),
    /// The path uses only the second wildcard, which must represent this letter.
    SecondDecided(char),
    /// The path uses both wildcards, as (first, second) respectively.
    BothDecided(char, char),
}

impl PathConstraintSet {
    /// Pairwise merge. Commutative and
    /// associative when successful.
    pub fn merge(self, other: PathConstraintSet) -> Result<PathConstraintSet, GameError> {
        use PathConstraintSet::*;

        let conflict = || {
            Err(GameError::ConstraintConflict(
                "wildcard assignments are incompatible".to_string(),
            ))
        };

        match (self, other) {
            (Unconstrained, x) | (x, Unconstrained) => Ok(x),

            (FirstDecided(a1), FirstDecided(x)) => {
                if a1 == x {
                    Ok(FirstDecided(a1))
                } else {
                    conflict()
                }
            }
            (FirstDecided(a1), SecondDecided(y)) | (SecondDecided(y), FirstDecided(a1)) => {
                Ok(BothDecided(a1, y))
            }
            (FirstDecided(a1), BothDecided(x, y)) | (BothDecided(x, y), FirstDecided(a1)) => {
                if a1 == x {
                    Ok(BothDecided(x, y))
                } else {
                    conflict()
                }
            }

            (SecondDecided(a2), SecondDecided(y)) => {
                if a2 == y {
                    Ok(SecondDecided(a2))
                } else {
                    conflict()
                }
            }
            (SecondDecided(a2), BothDecided(x, y)) | (BothDecided(x, y), SecondDecided(a2)) => {
                if a2 == y {
                    Ok(BothDecided(x, y))
                } else {
                    conflict()
                }
            }

            (BothDecided(a1, a2), BothDecided(x, y)) => {
                if (a1, a2) == (x, y) {
                    Ok(BothDecided(a1, a2))
                } else {
                    conflict()
                }
            }
        }
    }

    pub fn uses_first_wildcard(&self) -> bool {
        matches!(self, PathConstraintSet::FirstDecided(_) | PathConstraintSet::BothDecided(_, _))
    }

    pub fn uses_second_wildcard(&self) -> bool {
        matches!(self, PathConstraintSet::SecondDecided(_) | PathConstraintSet::BothDecided(_, _))
    }
}

/// The disjunction of `PathConstraintSet`s under which a word is achievable;
/// duplicates removed, order not meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerConstraintSet(Vec<PathConstraintSet>);

impl AnswerConstraintSet {
    /// Builds a deduplicated set from an iterator of path constraints.
    /// Returns `None` if the iterator is empty.
    pub fn from_path_constraints<I: IntoIterator<Item = PathConstraintSet>>(iter: I) -> Option<Self> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for c in iter {
            if seen.insert(c) {
                out.push(c);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(Self(out))
        }
    }

    pub fn unconstrained() -> Self {
        Self(vec![PathConstraintSet::Unconstrained])
    }

    pub fn as_slice(&self) -> &[PathConstraintSet] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: PathConstraintSet) -> bool {
        self.0.contains(&c)
    }

    /// All successful pairwise merges between every element of `self` and
    /// every element of `other`, deduplicated. Empty iff the two sets are
    /// jointly infeasible.
    pub fn intersect(&self, other: &AnswerConstraintSet) -> Option<AnswerConstraintSet> {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();
        for &a in &self.0 {
            for &b in &other.0 {
                if let Ok(m) = a.merge(b) {
                    if seen.insert(m) {
                        merged.push(m);
                    }
                }
            }
        }
        if merged.is_empty() {
            None
        } else {
            Some(AnswerConstraintSet(merged))
        }
    }
}

/// Folds `intersect` left-to-right over a non-empty list of constraint
/// sets. An empty list is infeasible.
pub fn merge_all<'a, I>(sets: I) -> Result<AnswerConstraintSet, GameError>
where
    I: IntoIterator<Item = &'a AnswerConstraintSet>,
{
    let mut iter = sets.into_iter();
    let first = iter.next().ok_or(GameError::AnswerGroupInfeasible)?.clone();
    iter.try_fold(first, |acc, next| {
        acc.intersect(next).ok_or(GameError::AnswerGroupInfeasible)
    })
}
