use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of range")]
    OutOfRange,
    #[error("Board needs at least one row and one column")]
    InvalidSize,
    #[error("Too many mines, at least one cell must be safe")]
    TooManyMines,
    #[error("Board state does not match its declared size and counts")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
