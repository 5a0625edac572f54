use thiserror::Error;

/// Input-validation failures. None of these are transient; retrying the
/// same call cannot succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid target range: low {low} must be below high {high}")]
    InvalidRange { low: i32, high: i32 },

    #[error("invalid big tile count {0}: must be between 0 and 4")]
    InvalidCount(isize),

    #[error("invalid tile {0}: must be 1-10 or one of 25, 50, 75, 100")]
    InvalidTile(i64),

    #[error("invalid hand: {0}")]
    InvalidHand(String),

    #[error("invalid big tile choice {0:?}")]
    InvalidChoice(String),
}

pub type Result<T> = std::result::Result<T, Error>;
