//! Shared output helpers for the search commands.

use serde::Serialize;

use crate::ingest::BIRTHDAY_FORMAT;
use crate::storage::Athlete;
use crate::Result;

/// Flattened athlete record for command output.
///
/// The birthday is rendered back into the same `Month Day, Year` form
/// the CSV uses, rather than the raw stored datetime.
#[derive(Debug, Serialize)]
pub struct AthleteRow {
    pub name: String,
    pub birthday: String,
    pub exp: i32,
    pub skills: Vec<String>,
    pub championships: Vec<String>,
}

impl From<&Athlete> for AthleteRow {
    fn from(athlete: &Athlete) -> Self {
        Self {
            name: athlete.name.clone(),
            birthday: athlete.birthday.format(BIRTHDAY_FORMAT).to_string(),
            exp: athlete.exp,
            skills: athlete.skills.clone(),
            championships: athlete.championships.clone(),
        }
    }
}

/// Print a result set, one name per line, or `No results` when empty.
///
/// With `as_json` the full records are printed as a JSON array instead
/// (an empty array for zero matches).
pub fn print_results(results: &[Athlete], as_json: bool) -> Result<()> {
    if as_json {
        let rows: Vec<AthleteRow> = results.iter().map(AthleteRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results");
        return Ok(());
    }
    for athlete in results {
        println!("{}", athlete.name);
    }
    Ok(())
}
