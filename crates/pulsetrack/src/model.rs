//! Core record types for pulsetrack.
//!
//! This module defines the data model shared with the remote API: tracked
//! individuals, pulse-oximetry readings, and per-individual alert ranges.
//! Field names serialize to the wire names used by the remote schema.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender of a tracked individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
    /// Other or unspecified (the form default).
    #[default]
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown gender: {s}")),
        }
    }
}

/// A paginated collection returned by the remote API.
///
/// The continuation token, when present, can be passed back to fetch the
/// next page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// Continuation token for the next page, if any.
    #[serde(rename = "nextToken")]
    pub next_token: Option<String>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_token: None,
        }
    }
}

/// A tracked person record.
///
/// The identifier is generated client-side before the first create call and
/// stays stable across updates. `owner` and the timestamps are assigned by
/// the backend and are never client-editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    /// Client-generated identifier, immutable once assigned.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Gender.
    pub gender: Gender,
    /// Date of birth (calendar date, no time component).
    pub dob: NaiveDate,
    /// Readings recorded against this individual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oximeter: Option<Connection<Oximeter>>,
    /// Alert thresholds recorded against this individual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse_oximetry_range: Option<Connection<PulseOximetryRange>>,
    /// When the record was created (backend-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated (backend-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Identity of the creating user (backend-assigned, set exactly once).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Individual {
    /// Full display name, "First Last".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The readings recorded against this individual, in storage order.
    #[must_use]
    pub fn readings(&self) -> &[Oximeter] {
        self.oximeter.as_ref().map_or(&[], |c| c.items.as_slice())
    }
}

/// A single SpO2/heart-rate measurement tied to an individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Oximeter {
    /// Backend-assigned identifier.
    pub id: String,
    /// Identifier of the owning individual.
    #[serde(rename = "individualID")]
    pub individual_id: Uuid,
    /// Blood oxygen saturation percentage.
    pub spo2: f64,
    /// Heart rate in beats per minute.
    pub heart_rate: u32,
    /// When the reading was recorded (backend-assigned).
    pub created_at: DateTime<Utc>,
    /// When the reading was last updated (backend-assigned).
    pub updated_at: DateTime<Utc>,
    /// Identity of the creating user (backend-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Per-individual alerting thresholds for pulse-oximetry readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseOximetryRange {
    /// Backend-assigned identifier.
    pub id: String,
    /// Identifier of the owning individual.
    #[serde(rename = "individualID")]
    pub individual_id: Uuid,
    /// Minimum acceptable SpO2 percentage.
    pub min_spo2: f64,
    /// Minimum acceptable heart rate.
    pub min_heart_rate: u32,
    /// Maximum acceptable heart rate.
    pub max_heart_rate: u32,
    /// When the record was created (backend-assigned).
    pub created_at: DateTime<Utc>,
    /// When the record was last updated (backend-assigned).
    pub updated_at: DateTime<Utc>,
    /// Identity of the creating user (backend-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}
