//! `GameEngine`: the facade gluing the board, dictionary, solver and
//! validation pipeline together for a caller that just wants "give me a
//! board and a word list, tell me what's valid and what it's worth".

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::board::answer::Answer;
use crate::board::constraints::AnswerConstraintSet;
use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::solver::{self, GroupSolution};
use crate::validation::{self, WordOutcome, MAX_WORD_LEN, MIN_WORD_LEN};

#[derive(Clone)]
pub struct GameEngine {
    dictionary: Arc<dyn Dictionary>,
}

impl GameEngine {
    pub fn new(dictionary: Arc<dyn Dictionary>) -> Self {
        Self { dictionary }
    }

    pub fn is_valid_word_in_dictionary(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// All paths a single word can take on `board`.
    pub fn find_word_paths(&self, board: &Board, word: &str) -> Answer {
        Answer::find(board, word)
    }

    /// Dictionary-checked, board-checked lookup for one word.
    pub fn validate_answer(&self, board: &Board, word: &str) -> Result<Answer, GameError> {
        if !self.dictionary.contains(word) {
            return Err(GameError::WordNotInDictionary(word.to_string()));
        }
        let answer = self.find_word_paths(board, word);
        if answer.is_empty() {
            return Err(GameError::NoPathOnBoard(word.to_string()));
        }
        Ok(answer)
    }

    /// Runs the full stateful Validation Pipeline over an ordered word list.
    pub fn validate_answer_group(&self, board: &Board, words: &[String]) -> Vec<WordOutcome> {
        validation::validate_sequence(board, self.dictionary.as_ref(), words)
    }

    /// Runs the Answer-Group Solver over a word list, treating every word
    /// as already dictionary-checked.
    pub fn score_answer_group(&self, board: &Board, words: &[String]) -> Result<GroupSolution, GameError> {
        let mut answers = Vec::with_capacity(words.len());
        for word in words {
            answers.push(self.validate_answer(board, word)?);
        }
        solver::solve(&answers)
    }

    /// Every word in the dictionary that can be spelled on `board`, found
    /// by walking the board outward from every cell while a wildcard
    /// branches over all 26 letters, pruned against the dictionary's
    /// prefix index so dead branches stop immediately rather than
    /// running to `MAX_WORD_LEN`.
    pub fn find_all_valid_words(&self, board: &Board) -> HashSet<String> {
        let mut found = HashSet::new();
        for start in board.positions() {
            self.walk(board, start, 0u16, String::new(), &mut found);
        }
        debug!(count = found.len(), "completed full-board word search");
        found
    }

    fn walk(&self, board: &Board, pos: crate::board::Position, visited: u16, current: String, found: &mut HashSet<String>) {
        let bit = 1u16 << (pos.row * 4 + pos.col);
        if visited & bit != 0 || current.len() >= MAX_WORD_LEN {
            return;
        }
        let visited = visited | bit;
        let tile = board.get(pos);

        let candidates: Vec<char> = match tile {
            crate::board::Tile::Wildcard => ('a'..='z').collect(),
            crate::board::Tile::Lettered { letter, .. } => vec![letter],
        };

        for letter in candidates {
            let mut word = current.clone();
            word.push(letter);

            if !self.dictionary.has_prefix(&word) {
                continue;
            }
            if word.chars().count() >= MIN_WORD_LEN && self.dictionary.contains(&word) {
                found.insert(word.clone());
            }
            for next in board.neighbors(pos) {
                self.walk(board, next, visited, word.clone(), found);
            }
        }
    }

    /// Every word `find_all_valid_words` turns up, solved together as one
    /// group -- the best possible total a player who found everything
    /// could reach, and the constraint set that achieves it.
    pub fn solve_full_board(&self, board: &Board) -> Result<GroupSolution, GameError> {
        let words: Vec<String> = self.find_all_valid_words(board).into_iter().collect();
        if words.is_empty() {
            return Ok(GroupSolution {
                total_score: 0,
                optimal_constraints: AnswerConstraintSet::unconstrained(),
                by_word: Default::default(),
            });
        }
        let answers: Vec<Answer> = words.iter().map(|w| Answer::find(board, w)).collect();
        solver::solve(&answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Trie;

    fn engine() -> GameEngine {
        GameEngine::new(Arc::new(Trie::from_words([
            "silo", "seed", "sed", "sold", "does", "day", "year", "sev", "data", "so", "sots",
        ])))
    }

    #[test]
    fn validate_answer_rejects_words_outside_the_dictionary() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let e = engine();
        let err = e.validate_answer(&board, "zzzzz").unwrap_err();
        assert_eq!(err, GameError::WordNotInDictionary("zzzzz".to_string()));
    }

    #[test]
    fn find_all_valid_words_only_returns_dictionary_words_with_a_path() {
        let board = Board::from_letters("hissc*lole*dseeo");
        let e = engine();
        let found = e.find_all_valid_words(&board);
        assert!(found.contains("silo"));
        for word in &found {
            assert!(e.dictionary.contains(word));
        }
    }

    #[test]
    fn solve_full_board_totals_match_the_per_word_scores() {
        let board = Board::from_letters("eadux*ysta*tnhrv");
        let e = engine();
        let solution = e.solve_full_board(&board).unwrap();
        let summed: u32 = solution.by_word.values().map(|w| w.score).sum();
        assert_eq!(solution.total_score, summed);
    }
}
