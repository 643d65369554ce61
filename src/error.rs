//! Error types for the Athlete Search CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AthleteError>;

#[derive(Error, Debug)]
pub enum AthleteError {
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: invalid birthday {value:?}, expected \"Month Day, Year\": {source}")]
    InvalidBirthday {
        row: usize,
        value: String,
        source: chrono::ParseError,
    },

    #[error("row {row}: invalid experience {value:?}: {source}")]
    InvalidExperience {
        row: usize,
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("row {row}: expected {expected} fields, found {found}")]
    BadRowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot compute a birthday bound {years} years in the past")]
    AgeOutOfRange { years: u32 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
