//! Trip point records as delivered by the trip API.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates;

/// Errors raised while reading point data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointDataError {
    #[error("unrecognized timestamp {value:?}")]
    Timestamp { value: String },
}

/// A single scheduled segment of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPoint {
    pub id: String,
    /// Price in whole euros
    pub base_price: u32,
    #[serde(with = "timestamp")]
    pub date_from: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub date_to: NaiveDateTime,
    /// Destination id, resolved against the catalog
    pub destination: String,
    #[serde(default)]
    pub is_favorite: bool,
    /// Type tag (`taxi`, `flight`, ...) selecting the icon
    #[serde(rename = "type")]
    pub point_type: String,
    /// Selected offer ids
    #[serde(default)]
    pub offers: Vec<String>,
}

impl TripPoint {
    #[must_use]
    pub fn has_offer(&self, offer_id: &str) -> bool {
        self.offers.iter().any(|id| id == offer_id)
    }

    #[must_use]
    pub fn duration(&self) -> String {
        dates::point_duration(&self.date_from, &self.date_to)
    }

    /// Copy of this point with the favorite flag flipped.
    #[must_use]
    pub fn with_favorite_toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(WIRE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        crate::dates::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
