//! Database connection and collection management

use anyhow::Result;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

use super::models::{Athlete, SportsCategory};

pub const DB_NAME: &str = "athletesearch";
pub const ATHLETE_COLLECTION: &str = "athlete";
pub const CATEGORY_COLLECTION: &str = "category";

/// Handle to the athlete database.
///
/// Opened once per process and passed explicitly to every operation.
pub struct AthleteStore {
    db: Database,
}

impl AthleteStore {
    /// Connect to the MongoDB instance at `uri` and select the athlete
    /// database.
    ///
    /// The driver connects lazily, so a ping is issued here to make an
    /// unreachable server fail at startup instead of at the first query.
    pub async fn connect(uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(DB_NAME);
        db.run_command(doc! { "ping": 1 }).await?;
        Ok(Self { db })
    }

    pub(crate) fn athletes(&self) -> Collection<Athlete> {
        self.db.collection(ATHLETE_COLLECTION)
    }

    pub(crate) fn categories(&self) -> Collection<SportsCategory> {
        self.db.collection(CATEGORY_COLLECTION)
    }
}
