//! Validation Pipeline: a stateful forward pass over an
//! ordered list of submitted words, checking each one against the
//! dictionary, length bounds, duplicates, the board, and the wildcard
//! assignments locked in by every word accepted so far.
//!
//! A rejected word never aborts the pass -- every later word is still
//! checked against the board and the dictionary, though its constraint
//! check is necessarily against the same cumulative state as before (the
//! rejected word contributed nothing to it).

use std::collections::HashSet;

use crate::board::answer::Answer;
use crate::board::constraints::{AnswerConstraintSet, PathConstraintSet};
use crate::board::{Board, Position};
use crate::dictionary::Dictionary;
use crate::error::GameError;

pub const MIN_WORD_LEN: usize = 2;
pub const MAX_WORD_LEN: usize = 16;

/// The per-word result of running one word through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct WordOutcome {
    pub word: String,
    pub error: Option<GameError>,
    pub score: Option<u32>,
    pub path: Option<Vec<Position>>,
    /// The wildcard constraint set in force after this word, whether or
    /// not the word itself was accepted (unchanged on rejection).
    pub cumulative_constraints: AnswerConstraintSet,
}

impl WordOutcome {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs every word through the pipeline in order, threading the
/// cumulative wildcard state from one word to the next.
pub fn validate_sequence(board: &Board, dictionary: &dyn Dictionary, words: &[String]) -> Vec<WordOutcome> {
    let mut seen = HashSet::new();
    let mut cumulative = AnswerConstraintSet::unconstrained();
    let mut outcomes = Vec::with_capacity(words.len());

    for word in words {
        let lower = word.to_lowercase();

        if let Err(e) = check_length(&lower) {
            outcomes.push(reject(word, e, cumulative.clone()));
            continue;
        }

        if seen.contains(&lower) {
            outcomes.push(reject(word, GameError::DuplicateWord(lower), cumulative.clone()));
            continue;
        }

        if !dictionary.contains(&lower) {
            outcomes.push(reject(word, GameError::WordNotInDictionary(lower), cumulative.clone()));
            continue;
        }

        let answer = Answer::find(board, &lower);
        if answer.is_empty() {
            outcomes.push(reject(word, GameError::NoPathOnBoard(lower), cumulative.clone()));
            continue;
        }

        let word_constraints = answer
            .constraint_set()
            .expect("non-empty answer always yields a constraint set");

        match cumulative.intersect(&word_constraints) {
            None => {
                outcomes.push(reject(word, GameError::ConstraintConflict(lower), cumulative.clone()));
            }
            Some(next_cumulative) => {
                let representative = next_cumulative.as_slice()[0];
                let preferred = answer
                    .preferred_path_under(representative)
                    .expect("representative constraint was derived from this answer's own paths");
                let score = preferred.score();
                let path = preferred.positions().to_vec();

                seen.insert(lower);
                cumulative = next_cumulative;
                outcomes.push(WordOutcome {
                    word: word.clone(),
                    error: None,
                    score: Some(score),
                    path: Some(path),
                    cumulative_constraints: cumulative.clone(),
                });
            }
        }
    }

    outcomes
}

fn reject(word: &str, error: GameError, cumulative: AnswerConstraintSet) -> WordOutcome {
    WordOutcome {
        word: word.to_string(),
        error: Some(error),
        score: None,
        path: None,
        cumulative_constraints: cumulative,
    }
}

fn check_length(word: &str) -> Result<(), GameError> {
    if word.chars().count() < MIN_WORD_LEN {
        Err(GameError::WordTooShort(word.to_string()))
    } else if word.chars().count() > MAX_WORD_LEN {
        Err(GameError::WordTooLong(word.to_string()))
    } else {
        Ok(())
    }
}

/// Whether the constraint a single outcome records is still
/// [`PathConstraintSet::Unconstrained`] for at least one candidate -- used
/// by callers deciding whether a wildcard's notation is still free.
pub fn still_unconstrained(outcome: &WordOutcome) -> bool {
    outcome.cumulative_constraints.contains(PathConstraintSet::Unconstrained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Trie;

    fn dict() -> Trie {
        Trie::from_words(["silo", "seed", "sed", "sold", "does", "day", "year", "sev", "data", "zzzzz"])
    }

    #[test]
    fn rejects_unknown_word_without_aborting_later_words() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let d = dict();
        let words = vec!["xyz".to_string(), "silo".to_string()];
        let outcomes = validate_sequence(&board, &d, &words);

        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].is_valid());
        assert!(outcomes[1].is_valid(), "a rejected word must not block later ones");
    }

    #[test]
    fn duplicate_word_is_rejected_on_second_occurrence() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let d = dict();
        let words = vec!["silo".to_string(), "silo".to_string()];
        let outcomes = validate_sequence(&board, &d, &words);

        assert!(outcomes[0].is_valid());
        assert!(!outcomes[1].is_valid());
        assert_eq!(outcomes[1].error, Some(GameError::DuplicateWord("silo".to_string())));
    }

    #[test]
    fn a_word_rejected_for_its_own_reason_does_not_count_as_accepted_for_later_duplicate_checks() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let d = dict();
        // "zzzzz" has no path on this board; its first occurrence must be
        // rejected as NoPathOnBoard, not silently treated as "seen" so that
        // the second occurrence is mis-reported as a duplicate.
        let words = vec!["zzzzz".to_string(), "zzzzz".to_string()];
        let outcomes = validate_sequence(&board, &d, &words);

        assert_eq!(outcomes[0].error, Some(GameError::NoPathOnBoard("zzzzz".to_string())));
        assert_eq!(outcomes[1].error, Some(GameError::NoPathOnBoard("zzzzz".to_string())));
    }

    #[test]
    fn word_with_no_path_is_rejected() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let d = dict();
        let words = vec!["zzzzz".to_string()];
        let outcomes = validate_sequence(&board, &d, &words);
        assert_eq!(outcomes[0].error, Some(GameError::NoPathOnBoard("zzzzz".to_string())));
    }

    #[test]
    fn conflicting_wildcard_demand_is_rejected_but_does_not_reset_state() {
        let board = Board::from_letters("pqrsa*uvwx*yzefg");
        let d = Trie::from_words(["ba", "ca"]);
        let words = vec!["ba".to_string(), "ca".to_string()];
        let outcomes = validate_sequence(&board, &d, &words);

        assert!(outcomes[0].is_valid());
        assert!(!outcomes[1].is_valid());
        assert_eq!(outcomes[1].error, Some(GameError::ConstraintConflict("ca".to_string())));
        // "ca" being rejected must leave the cumulative state exactly as
        // "ba" left it.
        assert_eq!(outcomes[1].cumulative_constraints, outcomes[0].cumulative_constraints);
    }

    #[test]
    fn re_running_a_prefix_yields_the_same_per_word_validity() {
        let board = Board::from_letters("eadux*ysta*tnhrv");
        let d = dict();
        let words = vec!["day".to_string(), "year".to_string(), "sev".to_string(), "data".to_string()];

        let full = validate_sequence(&board, &d, &words);
        for i in 1..=words.len() {
            let prefix = &words[..i];
            let partial = validate_sequence(&board, &d, prefix);
            for (a, b) in full.iter().take(i).zip(partial.iter()) {
                assert_eq!(a.is_valid(), b.is_valid());
            }
        }
    }

    #[test]
    fn too_short_and_too_long_words_are_rejected() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let d = dict();
        let long_word = "a".repeat(MAX_WORD_LEN + 1);
        let words = vec!["s".to_string(), long_word.clone()];
        let outcomes = validate_sequence(&board, &d, &words);

        assert_eq!(outcomes[0].error, Some(GameError::WordTooShort("s".to_string())));
        assert_eq!(outcomes[1].error, Some(GameError::WordTooLong(long_word)));
    }
}
