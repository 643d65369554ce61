//! Storage layer for the Athlete Search CLI
//!
//! This module provides a clean abstraction over the MongoDB database,
//! organized into logical components:
//! - `models`: Data structures
//! - `store`: Database connection and collection handles
//! - `queries`: Insert and search operations

pub mod models;
pub mod queries;
pub mod store;


// Re-export the main types and store struct for easy access
pub use models::*;
pub use store::AthleteStore;
