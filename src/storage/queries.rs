//! Insert and search operations

use anyhow::Result;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};

use super::models::Athlete;
use super::store::AthleteStore;
use crate::filters;

impl AthleteStore {
    /// Insert a single athlete record.
    pub async fn insert_athlete(&self, athlete: &Athlete) -> Result<()> {
        self.athletes().insert_one(athlete).await?;
        Ok(())
    }

    /// Athletes whose name contains `term` (case-sensitive).
    pub async fn find_by_name(&self, term: &str) -> Result<Vec<Athlete>> {
        self.find_athletes(filters::name_filter(term)).await
    }

    /// Athletes whose championships list contains exactly `title`.
    pub async fn find_by_championship(&self, title: &str) -> Result<Vec<Athlete>> {
        self.find_athletes(filters::championship_filter(title)).await
    }

    /// Athletes whose age lies strictly between `min_years` and `max_years`.
    pub async fn find_by_age_range(&self, min_years: u32, max_years: u32) -> Result<Vec<Athlete>> {
        let filter = filters::age_range_filter(min_years, max_years, Utc::now())?;
        self.find_athletes(filter).await
    }

    /// Athletes matching `term` as a skill, widened to a whole category
    /// when `term` names one.
    pub async fn find_by_skill(&self, term: &str) -> Result<Vec<Athlete>> {
        let category = self.categories().find_one(doc! { "name": term }).await?;
        let filter = filters::resolve_skill_filter(term, category.as_ref());
        self.find_athletes(filter).await
    }

    /// Run `filter` against the athlete collection. Results keep the
    /// order the database returned them in; no sort is applied.
    async fn find_athletes(&self, filter: Document) -> Result<Vec<Athlete>> {
        let cursor = self.athletes().find(filter).await?;
        Ok(cursor.try_collect().await?)
    }
}
