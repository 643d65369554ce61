//! Handler for the loadCSV command.

use std::path::Path;

use super::resolve_db_uri;
use crate::{ingest, AthleteStore, Result};

/// Load every row of `file` into the athlete collection.
///
/// Aborts on the first malformed row; rows inserted before the failure
/// remain in the database.
pub async fn handle_load_csv(file: &Path, verbose: bool) -> Result<()> {
    let uri = resolve_db_uri();
    if verbose {
        println!("Connecting to {}...", uri);
    }
    let store = AthleteStore::connect(&uri).await?;

    let count = ingest::load_csv(file, &store).await?;
    println!("✓ Loaded {} athletes", count);
    Ok(())
}
