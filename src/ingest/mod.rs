//! CSV ingestion: row parsing and loading into the store.
//!
//! Rows are streamed and inserted one at a time. A malformed row aborts
//! the whole run; anything inserted before it stays in the database.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use csv::{ReaderBuilder, StringRecord};

use crate::error::{AthleteError, Result};
use crate::storage::{Athlete, AthleteStore};

/// Fixed textual format for athlete birthdays, e.g. `January 02, 2006`.
pub const BIRTHDAY_FORMAT: &str = "%B %d, %Y";

/// Columns per row: name, birthday, experience, skills, championships.
pub const RECORD_FIELDS: usize = 5;


/// Read `file` as headerless CSV and insert one athlete per row.
///
/// Echoes each athlete's name as it is loaded and returns the number of
/// rows inserted.
pub async fn load_csv(file: &Path, store: &AthleteStore) -> Result<usize> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_path(file)?;

    let mut count = 0;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let athlete = athlete_from_record(&record, row)?;
        println!("{}", athlete.name);
        store.insert_athlete(&athlete).await?;
        count += 1;
    }
    Ok(count)
}

/// Build an [`Athlete`] from one CSV record.
///
/// `row` is the zero-based record index, used only for error reporting.
pub fn athlete_from_record(record: &StringRecord, row: usize) -> Result<Athlete> {
    if record.len() != RECORD_FIELDS {
        return Err(AthleteError::BadRowShape {
            row,
            expected: RECORD_FIELDS,
            found: record.len(),
        });
    }

    let birthday = parse_birthday(&record[1], row)?;
    let exp = record[2]
        .parse()
        .map_err(|source| AthleteError::InvalidExperience {
            row,
            value: record[2].to_string(),
            source,
        })?;

    Ok(Athlete {
        id: None,
        name: record[0].to_string(),
        birthday,
        exp,
        skills: split_tags(&record[3]),
        championships: split_tags(&record[4]),
    })
}

/// Parse a birthday in the fixed `Month Day, Year` format to midnight UTC.
pub fn parse_birthday(text: &str, row: usize) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).map_err(|source| {
        AthleteError::InvalidBirthday {
            row,
            value: text.to_string(),
            source,
        }
    })?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Split a `", "`-delimited tag list.
///
/// An empty input yields a single empty-string entry; no trimming
/// beyond the delimiter is applied.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(", ").map(str::to_string).collect()
}
