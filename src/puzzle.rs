//! The day's published puzzle record, its storage contract, and the
//! Quality-Controlled Puzzle Builder that turns a date into a
//! board worth playing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rand::SeedableRng;
use tracing::{info, warn};

use crate::board::generator::{seed_for, BoardGenerator};
use crate::board::Board;
use crate::config::GeneratorConfig;
use crate::dictionary::Dictionary;
use crate::engine::GameEngine;
use crate::error::GameError;
use crate::solver::GroupSolution;

/// Everything persisted for one day's puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleRecord {
    pub date: String,
    pub sequence_number: u64,
    pub board: Board,
    pub threshold_score: u32,
    pub optimal_solution: GroupSolution,
    pub valid_words: HashSet<String>,
}

/// The persistence contract the engine needs from whatever storage layer
/// a caller wires in -- an in-memory map for tests, a real database
/// outside this crate's scope.
pub trait PuzzleStore: Send + Sync {
    fn get_puzzle_by_date(&self, date: &str) -> Option<PuzzleRecord>;
    fn get_puzzle_by_sequence(&self, sequence_number: u64) -> Option<PuzzleRecord>;
    fn insert_puzzle(&self, record: PuzzleRecord) -> Result<(), GameError>;
    fn get_valid_words(&self, date: &str) -> Option<HashSet<String>>;
}

/// A `PuzzleStore` backed by an in-process map, useful for tests and for
/// any caller that doesn't need cross-process persistence.
#[derive(Default)]
pub struct MemoryPuzzleStore {
    by_date: std::sync::Mutex<HashMap<String, PuzzleRecord>>,
    by_sequence: std::sync::Mutex<HashMap<u64, String>>,
}

impl MemoryPuzzleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PuzzleStore for MemoryPuzzleStore {
    fn get_puzzle_by_date(&self, date: &str) -> Option<PuzzleRecord> {
        self.by_date.lock().unwrap().get(date).cloned()
    }

    fn get_puzzle_by_sequence(&self, sequence_number: u64) -> Option<PuzzleRecord> {
        let date = self.by_sequence.lock().unwrap().get(&sequence_number)?.clone();
        self.get_puzzle_by_date(&date)
    }

    fn insert_puzzle(&self, record: PuzzleRecord) -> Result<(), GameError> {
        self.by_sequence
            .lock()
            .unwrap()
            .insert(record.sequence_number, record.date.clone());
        self.by_date.lock().unwrap().insert(record.date.clone(), record);
        Ok(())
    }

    fn get_valid_words(&self, date: &str) -> Option<HashSet<String>> {
        self.get_puzzle_by_date(date).map(|r| r.valid_words)
    }
}

/// Generates a board for `date` whose full-board solve clears a quality
/// threshold, relaxing the threshold after each exhausted attempt batch.
/// Deterministic: the same `(date, sequence_number, config)`
/// always walks the same sequence of candidate boards.
pub fn build_puzzle(
    date: &str,
    sequence_number: u64,
    dictionary: Arc<dyn Dictionary>,
    config: &GeneratorConfig,
) -> Result<PuzzleRecord, GameError> {
    let engine = GameEngine::new(dictionary);
    let generator = BoardGenerator::new(config.alpha);

    let mut threshold = config.initial_threshold;
    let mut attempt = 0u32;

    loop {
        for _ in 0..config.attempts_per_threshold {
            let seed = seed_for(date, attempt);
            let mut rng = rand::rngs::StdRng::from_seed(seed);
            let board = generator.generate(&mut rng);
            attempt += 1;

            let valid_words: HashSet<String> = engine.find_all_valid_words(&board);
            let top_five_sum = top_n_individual_score_sum(&engine, &board, &valid_words, 5);

            if top_five_sum < threshold {
                warn!(
                    date,
                    attempt, threshold, top_five_sum, "board quality insufficient, trying another seed"
                );
                continue;
            }

            let optimal_solution = engine.solve_full_board(&board)?;
            info!(
                date,
                attempt,
                threshold,
                top_five_sum,
                word_count = valid_words.len(),
                "accepted board for puzzle"
            );

            return Ok(PuzzleRecord {
                date: date.to_string(),
                sequence_number,
                board,
                threshold_score: threshold,
                optimal_solution,
                valid_words,
            });
        }

        if threshold <= config.minimum_threshold {
            break;
        }
        threshold = threshold.saturating_sub(config.threshold_step).max(config.minimum_threshold);
        info!(date, threshold, "relaxing quality threshold and retrying");
    }

    Err(GameError::BoardGenerationExhausted)
}

/// Sum of the best single-path score (ignoring cross-word wildcard
/// constraints) of the `n` highest-scoring words -- the quick quality
/// signal used to accept or reject a candidate board before running the
/// full joint solve.
fn top_n_individual_score_sum(engine: &GameEngine, board: &Board, words: &HashSet<String>, n: usize) -> u32 {
    let mut scores: Vec<u32> = words
        .iter()
        .map(|w| {
            engine
                .find_word_paths(board, w)
                .paths
                .iter()
                .map(|p| p.score())
                .max()
                .unwrap_or(0)
        })
        .collect();
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores.into_iter().take(n).sum()
}
