//! Trip data bundled into the web build.

use waypoint_core::{CatalogError, DataLoader, TripCatalog};

const BUNDLED_TRIP: &str = include_str!("../static/data/trip.json");

/// Loads the trip catalog shipped with the static assets.
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Bundled trip data is invalid: {0}")]
    Catalog(#[from] CatalogError),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<TripCatalog, Self::Error> {
        let catalog = TripCatalog::from_json(BUNDLED_TRIP)?;
        log::debug!(
            "loaded {} points, {} destinations",
            catalog.points.len(),
            catalog.destinations.len()
        );
        Ok(catalog)
    }
}
