//! Points, destinations and offers as one loadable bundle.
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::destination::Destination;
use crate::offer::{Offer, OfferGroup};
use crate::point::TripPoint;
use crate::templates::{point_list_with_items, point_template};
use crate::view_model::PointViewModel;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("point {point_id} references unknown destination {destination_id}")]
    UnknownDestination {
        point_id: String,
        destination_id: String,
    },
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripCatalog {
    #[serde(default)]
    pub points: Vec<TripPoint>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub offers: Vec<OfferGroup>,
}

/// Data problems found by [`TripCatalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    UnknownDestination {
        point_id: String,
        destination_id: String,
    },
    UnknownOffer {
        point_id: String,
        point_type: String,
        offer_id: String,
    },
    EndsBeforeStart {
        point_id: String,
    },
    DuplicatePointId {
        point_id: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDestination {
                point_id,
                destination_id,
            } => write!(f, "point {point_id}: unknown destination {destination_id}"),
            Self::UnknownOffer {
                point_id,
                point_type,
                offer_id,
            } => write!(
                f,
                "point {point_id}: offer {offer_id} is not offered for type {point_type}"
            ),
            Self::EndsBeforeStart { point_id } => {
                write!(f, "point {point_id}: ends before it starts")
            }
            Self::DuplicatePointId { point_id } => write!(f, "duplicate point id {point_id}"),
        }
    }
}

impl TripCatalog {
    /// Parse a catalog from the JSON bundle shape `{points, destinations, offers}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a timestamp cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn destination_by_id(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|dest| dest.id == id)
    }

    /// Offer catalog for a point type; empty when the type has no group.
    #[must_use]
    pub fn offers_by_type(&self, point_type: &str) -> &[Offer] {
        self.offers
            .iter()
            .find(|group| group.point_type == point_type)
            .map(|group| group.offers.as_slice())
            .unwrap_or_default()
    }

    /// View model for a point, resolving its destination and offers.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownDestination`] if the destination id is not in the catalog.
    pub fn view_model(&self, point: &TripPoint) -> Result<PointViewModel, CatalogError> {
        let destination = self.destination_by_id(&point.destination).ok_or_else(|| {
            CatalogError::UnknownDestination {
                point_id: point.id.clone(),
                destination_id: point.destination.clone(),
            }
        })?;
        Ok(PointViewModel::build(
            point,
            destination,
            self.offers_by_type(&point.point_type),
        ))
    }

    #[must_use]
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for point in &self.points {
            if !seen.insert(point.id.as_str()) {
                issues.push(CatalogIssue::DuplicatePointId {
                    point_id: point.id.clone(),
                });
            }
            if self.destination_by_id(&point.destination).is_none() {
                issues.push(CatalogIssue::UnknownDestination {
                    point_id: point.id.clone(),
                    destination_id: point.destination.clone(),
                });
            }
            let available = self.offers_by_type(&point.point_type);
            for offer_id in &point.offers {
                if !available.iter().any(|offer| offer.id == *offer_id) {
                    issues.push(CatalogIssue::UnknownOffer {
                        point_id: point.id.clone(),
                        point_type: point.point_type.clone(),
                        offer_id: offer_id.clone(),
                    });
                }
            }
            if point.date_to < point.date_from {
                issues.push(CatalogIssue::EndsBeforeStart {
                    point_id: point.id.clone(),
                });
            }
        }

        issues
    }
}

/// Render every point of the catalog inside the list shell.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownDestination`] for the first point whose destination is missing,
/// or [`CatalogError::Template`] if an item fails to render.
pub fn render_trip_events(catalog: &TripCatalog) -> Result<String, CatalogError> {
    log::debug!("rendering {} trip points", catalog.points.len());
    let items = catalog
        .points
        .iter()
        .map(|point| -> Result<String, CatalogError> {
            if catalog.offers_by_type(&point.point_type).is_empty() && !point.offers.is_empty() {
                log::warn!(
                    "point {} selects offers but type {} has no offer group",
                    point.id,
                    point.point_type
                );
            }
            let vm = catalog.view_model(point)?;
            Ok(point_template(&vm)?)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(point_list_with_items(items))
}
