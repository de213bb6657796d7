use crate::history::Checkpoint;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Index {index} is out of bounds for a document of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Cannot undo past the initial snapshot")]
    NothingToUndo,
    #[error("{0} is no longer reachable, its snapshot has been undone")]
    StaleCheckpoint(Checkpoint),
    #[error("No checkpoint named `{0}`")]
    UnknownCheckpoint(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
