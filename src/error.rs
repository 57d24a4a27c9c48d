use thiserror::Error;

/// Every error the engine can surface, per-word and for the group/generation
/// paths. Play-time errors never abort a submission: the validation pipeline
/// records one of these per rejected word and keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("word '{0}' is shorter than the minimum length of 2")]
    WordTooShort(String),

    #[error("word '{0}' is longer than the maximum length of 16")]
    WordTooLong(String),

    #[error("word '{0}' is not in the dictionary")]
    WordNotInDictionary(String),

    #[error("word '{0}' was already submitted earlier in this group")]
    DuplicateWord(String),

    #[error("word '{0}' has no path on this board")]
    NoPathOnBoard(String),

    #[error("word '{0}' cannot coexist with the wildcard assignments already locked in by earlier answers")]
    ConstraintConflict(String),

    #[error("no combination of wildcard assignments satisfies every word in this group")]
    AnswerGroupInfeasible,

    #[error("board generation exhausted its attempt budget without reaching the minimum threshold")]
    BoardGenerationExhausted,

    #[error("dictionary unavailable: {0}")]
    DictionaryUnavailable(String),

    #[error("persistence failure: {0}")]
    PersistenceFailure(String),
}
