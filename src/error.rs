use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid search range [{min}, {max}]: need finite bounds with min < max")]
    InvalidRange { min: f64, max: f64 },

    #[error("Target {target} lies outside [{min}, {max}]")]
    TargetOutOfRange { target: i64, min: f64, max: f64 },

    #[error("Opening guess {position} lies outside [{min}, {max}]")]
    OpeningOutOfRange { position: f64, min: f64, max: f64 },

    #[error("Target {target} not found within {max_guesses} guesses")]
    NoConvergence { target: i64, max_guesses: usize },

    #[error("Cost table is empty")]
    EmptyTable,

    #[error("Sample count must be positive")]
    NoSamples,
}

pub type Result<T> = std::result::Result<T, Error>;
