//! Data models for the storage layer

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Athlete record stored in the athlete collection.
///
/// The birthday is persisted as a BSON datetime so the age search can
/// apply range predicates to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub birthday: DateTime<Utc>,
    pub exp: i32,
    pub skills: Vec<String>,
    pub championships: Vec<String>,
}

/// Named grouping of skills, used to widen a skill search to every
/// skill in the group. Seeded externally and never written by this tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportsCategory {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub sports: Vec<String>,
}
