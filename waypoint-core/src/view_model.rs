use crate::dates::{format_datetime_attr, format_short_date, format_time, point_duration};
use crate::destination::Destination;
use crate::offer::{Offer, selected_offers};
use crate::point::TripPoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferLine {
    pub title: String,
    pub price: u32,
}

/// Display-ready strings for one trip point.
///
/// Values are raw text; escaping happens where markup is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointViewModel {
    pub point_type: String,
    pub destination_name: String,
    pub icon_src: String,
    pub from_attr: String,
    pub to_attr: String,
    pub short_date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub base_price: u32,
    pub is_favorite: bool,
    pub offers: Vec<OfferLine>,
}

impl PointViewModel {
    /// Resolve every display value for `point`; `catalog` is the full offer list for its type.
    #[must_use]
    pub fn build(point: &TripPoint, destination: &Destination, catalog: &[Offer]) -> Self {
        let offers = selected_offers(catalog, &point.offers)
            .into_iter()
            .map(|offer| OfferLine {
                title: offer.title.clone(),
                price: offer.price,
            })
            .collect();

        Self {
            point_type: point.point_type.clone(),
            destination_name: destination.name.clone(),
            icon_src: icon_src(&point.point_type),
            from_attr: format_datetime_attr(&point.date_from),
            to_attr: format_datetime_attr(&point.date_to),
            short_date: format_short_date(&point.date_from),
            start_time: format_time(&point.date_from),
            end_time: format_time(&point.date_to),
            duration: point_duration(&point.date_from, &point.date_to),
            base_price: point.base_price,
            is_favorite: point.is_favorite,
            offers,
        }
    }

    /// Heading text, e.g. `taxi Paris`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.point_type, self.destination_name)
    }

    #[must_use]
    pub fn has_offers(&self) -> bool {
        !self.offers.is_empty()
    }
}

/// Relative icon path for a point type.
#[must_use]
pub fn icon_src(point_type: &str) -> String {
    format!("img/icons/{point_type}.png")
}
