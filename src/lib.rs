pub mod board;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod letters;
pub mod notation;
pub mod puzzle;
pub mod solver;
pub mod validation;

pub use board::{Board, Position, Tile};
pub use dictionary::{Dictionary, Trie};
pub use engine::GameEngine;
pub use error::GameError;
pub use puzzle::{MemoryPuzzleStore, PuzzleRecord, PuzzleStore};

/// Loads a `.env` file if present, then installs a `tracing` subscriber
/// driven by `RUST_LOG`. Callers that embed this crate in a batch job or
/// service are expected to call this once at process start.
pub fn init_process() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
