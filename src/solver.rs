//! Answer-Group Solver: given an ordered list of words, finds
//! every globally optimal wildcard assignment and the per-word scores it
//! implies, or reports that the group cannot be simultaneously satisfied.

use std::collections::HashMap;

use crate::board::answer::Answer;
use crate::board::constraints::{self, AnswerConstraintSet, PathConstraintSet};
use crate::board::{Board, Position};
use crate::error::GameError;

/// Per-word outcome of solving an answer group.
#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    pub word: String,
    pub score: u32,
    pub path: Vec<Position>,
}

/// The globally optimal solution for a group of words: the maximum
/// achievable total and every constraint assignment that attains it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSolution {
    pub total_score: u32,
    pub optimal_constraints: AnswerConstraintSet,
    pub by_word: HashMap<String, WordScore>,
}

/// A table of per-word scores, mirroring the shape callers pull results
/// from after a solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    pub map: HashMap<String, u32>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<HashMap<String, u32>> for ScoreSheet {
    fn from(map: HashMap<String, u32>) -> Self {
        Self { map }
    }
}

/// Runs the Answer-Group Solver procedure over a set of
/// already-enumerated [`Answer`]s (each with at least one path). Words with
/// no path are the caller's responsibility to exclude beforehand; this
/// function assumes every `Answer` given to it is individually satisfiable.
pub fn solve(answers: &[Answer]) -> Result<GroupSolution, GameError> {
    if answers.is_empty() {
        return Ok(GroupSolution {
            total_score: 0,
            optimal_constraints: AnswerConstraintSet::unconstrained(),
            by_word: HashMap::new(),
        });
    }

    let per_word_constraints: Vec<AnswerConstraintSet> = answers
        .iter()
        .map(|a| a.constraint_set().expect("caller guarantees every answer has at least one path"))
        .collect();

    let merged = constraints::merge_all(per_word_constraints.iter())?;

    let mut max_total = 0u32;
    let mut best_candidates: Vec<PathConstraintSet> = Vec::new();

    for &candidate in merged.as_slice() {
        let total: u32 = answers
            .iter()
            .map(|a| a.best_score_under(candidate).unwrap_or(0))
            .sum();

        match total.cmp(&max_total) {
            std::cmp::Ordering::Greater => {
                max_total = total;
                best_candidates = vec![candidate];
            }
            std::cmp::Ordering::Equal => best_candidates.push(candidate),
            std::cmp::Ordering::Less => {}
        }
    }

    // Discard candidates that demand a wildcard no
    // actually-chosen optimal path traverses.
    let filtered: Vec<PathConstraintSet> = best_candidates
        .into_iter()
        .filter(|&candidate| wildcard_demand_is_realized(answers, candidate))
        .collect();

    let optimal_constraints =
        AnswerConstraintSet::from_path_constraints(filtered).ok_or(GameError::AnswerGroupInfeasible)?;

    // Any one optimal constraint set determines the same total and the
    // same per-word best scores/paths; pick the first for the by-word map.
    let representative = optimal_constraints.as_slice()[0];
    let mut by_word = HashMap::new();
    for answer in answers {
        // `score` is the per-word best under the representative assignment,
        // the same quantity `total_score` above sums over every word -- the
        // reported `path` is instead the display-preferred (fewest
        // wildcards) path among this word's paths, which may not be the
        // max-scoring one.
        let score = answer
            .best_score_under(representative)
            .expect("representative constraint is satisfiable by construction");
        let preferred = answer
            .preferred_path_under(representative)
            .expect("representative constraint is satisfiable by construction");
        by_word.insert(
            answer.word.clone(),
            WordScore {
                word: answer.word.clone(),
                score,
                path: preferred.positions().to_vec(),
            },
        );
    }

    Ok(GroupSolution {
        total_score: max_total,
        optimal_constraints,
        by_word,
    })
}

/// Convenience wrapper used by callers that just want a board + word list
/// scored without managing `Answer` construction themselves.
pub fn score_words(board: &Board, words: &[String]) -> Result<ScoreSheet, GameError> {
    if words.is_empty() {
        return Ok(ScoreSheet::new());
    }

    let mut answers = Vec::with_capacity(words.len());
    for word in words {
        let answer = Answer::find(board, word);
        if answer.is_empty() {
            return Err(GameError::NoPathOnBoard(word.clone()));
        }
        answers.push(answer);
    }

    let solution = solve(&answers)?;
    let map = solution
        .by_word
        .into_iter()
        .map(|(word, ws)| (word, ws.score))
        .collect();
    Ok(ScoreSheet::from(map))
}

fn wildcard_demand_is_realized(answers: &[Answer], candidate: PathConstraintSet) -> bool {
    let needs_first = candidate.uses_first_wildcard();
    let needs_second = candidate.uses_second_wildcard();
    if !needs_first && !needs_second {
        return true;
    }

    let mut first_used = false;
    let mut second_used = false;

    for answer in answers {
        let best = match answer.best_score_under(candidate) {
            Some(b) => b,
            None => continue,
        };
        for path in &answer.paths {
            if path.constraint().merge(candidate).is_ok() && path.score() == best {
                match path.constraint() {
                    PathConstraintSet::FirstDecided(_) => first_used = true,
                    PathConstraintSet::SecondDecided(_) => second_used = true,
                    PathConstraintSet::BothDecided(_, _) => {
                        first_used = true;
                        second_used = true;
                    }
                    PathConstraintSet::Unconstrained => {}
                }
            }
        }
    }

    (!needs_first || first_used) && (!needs_second || second_used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn empty_group_scores_to_zero() {
        let solution = solve(&[]).unwrap();
        assert_eq!(solution.total_score, 0);
        assert!(solution.by_word.is_empty());
    }

    #[test]
    fn scenario_silo_seed_sed_sold_does() {
        // silo/seed/sed/sold/does on a board with wildcards at (1,1) and (2,2)
        let board = Board::from_letters("hissc*lole*dseeo");
        let words = ["silo", "seed", "sed", "sold", "does"];
        let answers: Vec<Answer> = words.iter().map(|w| Answer::find(&board, w)).collect();
        for a in &answers {
            assert!(!a.is_empty(), "'{}' should have at least one path", a.word);
        }

        let solution = solve(&answers).unwrap();
        assert_eq!(solution.by_word.len(), 5);

        let expected_sum: u32 = solution.by_word.values().map(|w| w.score).sum();
        assert_eq!(solution.total_score, expected_sum);
        assert!(!solution.optimal_constraints.is_empty());
    }

    #[test]
    fn scenario_day_year_sev_data_final_constraints() {
        // day/year/sev/data on a board with wildcards at (1,1) and (2,2)
        let board = Board::from_letters("eadux*ysta*tnhrv");
        let words = ["day", "year", "sev", "data"];
        let answers: Vec<Answer> = words.iter().map(|w| Answer::find(&board, w)).collect();
        for a in &answers {
            assert!(!a.is_empty(), "'{}' should have at least one path", a.word);
        }

        let solution = solve(&answers).unwrap();

        use crate::board::constraints::PathConstraintSet::BothDecided;
        let expected = [BothDecided('t', 'e'), BothDecided('a', 'e')];
        assert_eq!(solution.optimal_constraints.len(), expected.len());
        for e in expected {
            assert!(solution.optimal_constraints.contains(e), "missing {:?}", e);
        }
    }

    #[test]
    fn conflicting_wildcard_demands_are_infeasible() {
        // "ba" and "ca" each have exactly one path, both through the first
        // wildcard, decided to different letters -- jointly unsatisfiable.
        let board = Board::from_letters("pqrsa*uvwx*yzefg");
        let ba = Answer::find(&board, "ba");
        let ca = Answer::find(&board, "ca");
        assert!(!ba.is_empty());
        assert!(!ca.is_empty());

        let err = solve(&[ba, ca]).unwrap_err();
        assert_eq!(err, GameError::AnswerGroupInfeasible);
    }
}
