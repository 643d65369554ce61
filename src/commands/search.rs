//! Handlers for the four search verbs.
//!
//! Each handler opens the store, runs one query, and prints the result
//! set in the order the database returned it.

use super::{common::print_results, resolve_db_uri};
use crate::{AthleteStore, Result};

/// Handle the name search command.
pub async fn handle_name(term: &str, as_json: bool) -> Result<()> {
    let store = AthleteStore::connect(&resolve_db_uri()).await?;
    let results = store.find_by_name(term).await?;
    print_results(&results, as_json)
}

/// Handle the skill search command.
pub async fn handle_skill(term: &str, as_json: bool) -> Result<()> {
    let store = AthleteStore::connect(&resolve_db_uri()).await?;
    let results = store.find_by_skill(term).await?;
    print_results(&results, as_json)
}

/// Handle the championship search command.
pub async fn handle_championship(title: &str, as_json: bool) -> Result<()> {
    let store = AthleteStore::connect(&resolve_db_uri()).await?;
    let results = store.find_by_championship(title).await?;
    print_results(&results, as_json)
}

/// Handle the age range search command.
pub async fn handle_age(min_years: u32, max_years: u32, as_json: bool) -> Result<()> {
    let store = AthleteStore::connect(&resolve_db_uri()).await?;
    let results = store.find_by_age_range(min_years, max_years).await?;
    print_results(&results, as_json)
}
