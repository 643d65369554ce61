//! Command implementations for the Athlete Search CLI

pub mod common;
pub mod load_csv;
pub mod search;

use crate::{DB_URI_ENV_VAR, DEFAULT_DB_URI};

/// Resolve the MongoDB connection string, preferring the
/// `ATHLETE_SEARCH_DB_URI` environment variable over the default local
/// address.
pub fn resolve_db_uri() -> String {
    std::env::var(DB_URI_ENV_VAR).unwrap_or_else(|_| DEFAULT_DB_URI.to_string())
}
