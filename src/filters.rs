//! BSON filter builders for athlete queries.
//!
//! Each search verb maps to exactly one filter document built here. The
//! builders are pure functions so the query shapes can be checked
//! without a live database.

use chrono::{DateTime, Months, Utc};
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};

use crate::error::{AthleteError, Result};
use crate::storage::SportsCategory;

#[cfg(test)]
mod tests;

/// Case-sensitive substring match on the name field.
///
/// TODO: create a text index and switch to `$text` so the match can be
/// made case-insensitive.
pub fn name_filter(term: &str) -> Document {
    doc! { "name": { "$regex": format!(".*{}.*", term) } }
}

/// Exact match against any element of the championships list.
pub fn championship_filter(title: &str) -> Document {
    doc! { "championships": title }
}

/// Exact match against any element of the skills list.
pub fn skill_filter(skill: &str) -> Document {
    doc! { "skills": skill }
}

/// Match athletes having at least one skill from `sports`.
pub fn skills_any_filter(sports: &[String]) -> Document {
    doc! { "skills": { "$in": sports.to_vec() } }
}

/// Two-tier skill filter: widen to the category's sports when the
/// search term named a category, exact skill match otherwise.
pub fn resolve_skill_filter(term: &str, category: Option<&SportsCategory>) -> Document {
    match category {
        Some(category) => skills_any_filter(&category.sports),
        None => skill_filter(term),
    }
}

/// Birthday range selecting ages strictly inside `(min_years, max_years)`.
///
/// The bounds are `now - max_years` and `now - min_years`. Both are
/// exclusive; an athlete born exactly on a bound is not matched.
pub fn age_range_filter(
    min_years: u32,
    max_years: u32,
    now: DateTime<Utc>,
) -> Result<Document> {
    let born_after = subtract_years(now, max_years)?;
    let born_before = subtract_years(now, min_years)?;
    Ok(doc! {
        "birthday": {
            "$gt": BsonDateTime::from_chrono(born_after),
            "$lt": BsonDateTime::from_chrono(born_before),
        }
    })
}

fn subtract_years(now: DateTime<Utc>, years: u32) -> Result<DateTime<Utc>> {
    now.checked_sub_months(Months::new(years.saturating_mul(12)))
        .ok_or(AthleteError::AgeOutOfRange { years })
}
