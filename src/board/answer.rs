//! A word together with every path that spells it on a given board
//! (an `AnswerConstraintSet` per word).

use super::constraints::AnswerConstraintSet;
use super::path::PathMatch;
use super::{Board, Position};

#[derive(Debug, Clone)]
pub struct Answer {
    pub word: String,
    pub paths: Vec<PathMatch>,
}

impl Answer {
    pub fn find(board: &Board, word: &str) -> Self {
        Self {
            word: word.to_string(),
            paths: board.enumerate_paths(word),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The disjunction of wildcard demands across every path this word can
    /// take, or `None` if the word has no path at all.
    pub fn constraint_set(&self) -> Option<AnswerConstraintSet> {
        AnswerConstraintSet::from_path_constraints(self.paths.iter().map(|p| p.constraint()))
    }

    /// Best score among paths compatible with `constraint`.
    /// Returns `None` if no path is compatible.
    pub fn best_score_under(&self, constraint: super::constraints::PathConstraintSet) -> Option<u32> {
        self.paths
            .iter()
            .filter(|p| p.constraint().merge(constraint).is_ok())
            .map(|p| p.score())
            .max()
    }

    /// The path preferred for UI highlighting among those compatible with
    /// `constraint`: fewest wildcards, then fewest diagonals,
    /// then latest diagonal move, then enumeration order.
    pub fn preferred_path_under(&self, constraint: super::constraints::PathConstraintSet) -> Option<&PathMatch> {
        self.paths
            .iter()
            .enumerate()
            .filter(|(_, p)| p.constraint().merge(constraint).is_ok())
            .min_by(|(ia, a), (ib, b)| {
                a.wildcard_count()
                    .cmp(&b.wildcard_count())
                    .then(a.diagonal_move_count().cmp(&b.diagonal_move_count()))
                    .then(last_diagonal_preference(a).cmp(&last_diagonal_preference(b)))
                    .then(ia.cmp(ib))
            })
            .map(|(_, p)| p)
    }

    pub fn positions_of_preferred(&self, constraint: super::constraints::PathConstraintSet) -> Option<Vec<Position>> {
        self.preferred_path_under(constraint).map(|p| p.positions().to_vec())
    }
}

/// Later diagonal moves are preferred, so invert the index for a min-by
/// comparison (no diagonal move at all sorts last -- a path is only
/// considered here after the diagonal-count tie, so "no diagonal" only
/// matters when comparing two already-zero-diagonal paths, which are equal).
fn last_diagonal_preference(p: &PathMatch) -> std::cmp::Reverse<usize> {
    std::cmp::Reverse(p.last_diagonal_index().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn answer_with_no_paths_has_no_constraint_set() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let answer = Answer::find(&board, "zzzzz");
        assert!(answer.is_empty());
        assert!(answer.constraint_set().is_none());
    }

    #[test]
    fn answer_with_paths_has_a_constraint_set() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let answer = Answer::find(&board, "silo");
        assert!(!answer.is_empty());
        assert!(answer.constraint_set().is_some());
    }
}
