//! Athlete Search CLI Library
//!
//! A small Rust library for loading athlete records from CSV into MongoDB
//! and searching them by name, skill, championship, or age range.
//!
//! ## Features
//!
//! - **CSV Ingestion**: Stream a headerless athlete CSV straight into the store
//! - **Name Search**: Case-sensitive substring match via a regex filter
//! - **Skill Search**: Expands category names to every skill they contain
//! - **Championship Search**: Exact match against the championships list
//! - **Age Search**: Exclusive birthday range computed from integer bounds
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use athlete_search::{commands::resolve_db_uri, AthleteStore};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = AthleteStore::connect(&resolve_db_uri()).await?;
//! for athlete in store.find_by_skill("skiing").await? {
//!     println!("{}", athlete.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a non-default MongoDB instance:
//! ```bash
//! export ATHLETE_SEARCH_DB_URI=mongodb://db.internal:27017
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod filters;
pub mod ingest;
pub mod storage;

// Re-export commonly used types
pub use error::{AthleteError, Result};
pub use storage::{Athlete, AthleteStore, SportsCategory};

pub const DB_URI_ENV_VAR: &str = "ATHLETE_SEARCH_DB_URI";

/// Connection string used when `ATHLETE_SEARCH_DB_URI` is not set.
pub const DEFAULT_DB_URI: &str = "mongodb://localhost:27017";
