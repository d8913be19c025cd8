//! Markup for the trip events list and its items.
//!
//! Class names here are the contract with the stylesheet and with the
//! click wiring in the web crate.

use askama::Template;

use crate::view_model::{OfferLine, PointViewModel};

pub const LIST_CLASS: &str = "trip-events__list";
pub const ITEM_CLASS: &str = "trip-events__item";
pub const FAVORITE_BUTTON_CLASS: &str = "event__favorite-btn";
pub const FAVORITE_ACTIVE_CLASS: &str = "event__favorite-btn--active";
pub const ROLLUP_BUTTON_CLASS: &str = "event__rollup-btn";

pub const FAVORITE_BUTTON_SELECTOR: &str = ".event__favorite-btn";
pub const ROLLUP_BUTTON_SELECTOR: &str = ".event__rollup-btn";

/// Star outline used by the favorite button.
pub const FAVORITE_ICON_PATH: &str = "M14 21l-8.22899 4.3262 1.57159-9.1631L.685209 9.67376 9.8855 8.33688 14 0l4.1145 8.33688 9.2003 1.33688-6.6574 6.48934 1.5716 9.1631L14 21z";

/// Empty list shell that items are mounted into.
#[must_use]
pub fn point_list_template() -> String {
    format!(r#"<ul class="{LIST_CLASS}"></ul>"#)
}

/// List shell with pre-rendered items inside.
#[must_use]
pub fn point_list_with_items<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = format!(r#"<ul class="{LIST_CLASS}">"#);
    for item in items {
        out.push_str(item.as_ref());
    }
    out.push_str("</ul>");
    out
}

#[derive(Template)]
#[template(path = "offers.html")]
struct OffersTemplate<'a> {
    offers: &'a [OfferLine],
}

#[derive(Template)]
#[template(path = "point_item.html")]
struct PointItemTemplate<'a> {
    vm: &'a PointViewModel,
    offers: String,
    favorite_icon_path: &'static str,
}

/// Selected-offers region of an item, or an empty string when there are no lines.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn point_offers_template(offers: &[OfferLine]) -> askama::Result<String> {
    OffersTemplate { offers }.render()
}

/// One trip point rendered as a list item. Text from trip data is HTML-escaped.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn point_template(vm: &PointViewModel) -> askama::Result<String> {
    PointItemTemplate {
        vm,
        offers: point_offers_template(&vm.offers)?,
        favorite_icon_path: FAVORITE_ICON_PATH,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_timestamp;
    use crate::destination::Destination;
    use crate::offer::Offer;
    use crate::point::TripPoint;

    fn offer(id: &str, title: &str, price: u32) -> Offer {
        Offer {
            id: id.to_string(),
            title: title.to_string(),
            price,
        }
    }

    fn point(point_type: &str, offers: &[&str], is_favorite: bool) -> TripPoint {
        TripPoint {
            id: "p1".to_string(),
            base_price: 20,
            date_from: parse_timestamp("2024-01-01T10:00").unwrap(),
            date_to: parse_timestamp("2024-01-01T12:30").unwrap(),
            destination: "d1".to_string(),
            is_favorite,
            point_type: point_type.to_string(),
            offers: offers.iter().map(ToString::to_string).collect(),
        }
    }

    fn render(point: &TripPoint, name: &str, catalog: &[Offer]) -> String {
        point_template(&PointViewModel::build(
            point,
            &Destination::named("d1", name),
            catalog,
        ))
        .unwrap()
    }

    #[test]
    fn list_shell_is_well_formed() {
        assert_eq!(point_list_template(), r#"<ul class="trip-events__list"></ul>"#);
        assert_eq!(
            point_list_with_items(["<li>a</li>", "<li>b</li>"]),
            r#"<ul class="trip-events__list"><li>a</li><li>b</li></ul>"#
        );
        assert_eq!(
            point_list_with_items(Vec::<String>::new()),
            point_list_template()
        );
    }

    #[test]
    fn offers_region_is_empty_without_lines() {
        assert_eq!(point_offers_template(&[]).unwrap(), "");
    }

    #[test]
    fn offers_region_lists_each_line() {
        let lines = [
            OfferLine {
                title: "Extra luggage".to_string(),
                price: 10,
            },
            OfferLine {
                title: "Meal".to_string(),
                price: 15,
            },
        ];
        let html = point_offers_template(&lines).unwrap();
        assert!(html.starts_with(r#"<ul class="event__selected-offers">"#), "{html}");
        assert!(html.ends_with("</ul>"));
        assert_eq!(html.matches(r#"<li class="event__offer">"#).count(), 2);
        assert!(html.contains(r#"<span class="event__offer-price">15</span>"#));
    }

    #[test]
    fn item_lists_matching_offers_in_catalog_order() {
        let catalog = vec![
            offer("o1", "Extra luggage", 10),
            offer("o2", "Comfort", 40),
            offer("o3", "Meal", 15),
        ];
        let html = render(&point("taxi", &["o3", "o1", "o9"], false), "Paris", &catalog);
        assert_eq!(html.matches(r#"<li class="event__offer">"#).count(), 2);
        let luggage = html.find("Extra luggage").unwrap();
        let meal = html.find("Meal").unwrap();
        assert!(luggage < meal, "catalog order expected: {html}");
        assert!(!html.contains("Comfort"));
    }

    #[test]
    fn renders_reference_taxi_point() {
        let catalog = vec![offer("o1", "Extra luggage", 10)];
        let html = render(&point("taxi", &["o1"], false), "Paris", &catalog);

        assert!(html.starts_with(r#"<li class="trip-events__item">"#), "{html}");
        assert!(html.contains(r#"<h3 class="event__title">taxi Paris</h3>"#), "{html}");
        assert!(html.contains(r#"<p class="event__duration">02H 30M</p>"#));
        assert!(html.contains(r#"<time class="event__date" datetime="2024-01-01T10:00">Jan 01</time>"#));
        assert!(html.contains(r#"datetime="2024-01-01T12:30">12:30</time>"#));
        assert!(html.contains(r#"<span class="event__price-value">20</span>"#));
        assert!(html.contains(
            r#"<span class="event__offer-title">Extra luggage</span>&plus;&euro;&nbsp;<span class="event__offer-price">10</span>"#
        ));
        assert!(html.contains(r#"src="img/icons/taxi.png""#));
        assert!(html.contains(ROLLUP_BUTTON_CLASS));
        assert!(!html.contains(FAVORITE_ACTIVE_CLASS));
    }

    #[test]
    fn favorite_flag_drives_active_class() {
        let favorite = render(&point("bus", &[], true), "Rome", &[]);
        assert!(favorite.contains(r#"class="event__favorite-btn event__favorite-btn--active""#));

        let plain = render(&point("bus", &[], false), "Rome", &[]);
        assert!(plain.contains(r#"class="event__favorite-btn""#));
        assert!(!plain.contains(FAVORITE_ACTIVE_CLASS));
    }

    #[test]
    fn offers_heading_stays_but_list_is_omitted() {
        let html = render(&point("bus", &["o9"], false), "Rome", &[offer("o1", "x", 1)]);
        assert!(html.contains("Offers:"));
        assert!(!html.contains("event__selected-offers"));
    }

    #[test]
    fn untrusted_text_is_escaped() {
        let catalog = vec![offer("o1", "<b>Bold</b> & more", 10)];
        let html = render(
            &point("<img src=x onerror=alert(1)>", &["o1"], false),
            "Fish & <Chips>",
            &catalog,
        );
        assert!(html.contains("Fish &amp; &lt;Chips&gt;"), "{html}");
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&lt;b&gt;Bold"));
        assert!(!html.contains("<Chips>"));
        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("<b>Bold"));
    }

    #[test]
    fn quotes_cannot_break_out_of_icon_src() {
        let html = render(&point("taxi\" onload=\"x", &[], false), "Paris", &[]);
        assert!(!html.contains(r#"taxi" onload="x"#), "{html}");
        assert!(html.contains(r#"src="img/icons/taxi&quot; onload=&quot;x.png""#));
    }
}
