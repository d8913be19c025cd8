//! Waypoint Core
//!
//! Platform-agnostic trip point model and list/item markup for the trip planner.
//! Nothing in this crate touches the DOM; the web crate mounts what is rendered here.

pub mod catalog;
pub mod dates;
pub mod destination;
pub mod offer;
pub mod point;
pub mod templates;
pub mod view_model;

pub use catalog::{CatalogError, CatalogIssue, TripCatalog, render_trip_events};
pub use dates::{
    format_datetime_attr, format_short_date, format_time, parse_timestamp, point_duration,
};
pub use destination::{Destination, Picture};
pub use offer::{Offer, OfferGroup, selected_offers};
pub use point::{PointDataError, TripPoint};
pub use templates::{point_list_template, point_list_with_items, point_offers_template, point_template};
pub use view_model::{OfferLine, PointViewModel};

/// Trait for abstracting where trip data comes from.
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load points, destinations and the offer catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or parsed.
    fn load_catalog(&self) -> Result<TripCatalog, Self::Error>;
}
