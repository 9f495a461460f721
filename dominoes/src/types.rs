use thiserror::Error;

/// A domino piece. Either end may face the open end of a chain.
pub type Domino = (u8, u8);

pub type ChainResult<T> = Result<T, ChainError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("too many pieces to search: {pieces} (limit {limit})")]
    TooManyPieces { pieces: usize, limit: usize },
    #[error("invalid solver config: {0}")]
    InvalidConfig(String),
}
