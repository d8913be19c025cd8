//! Paid add-ons and the per-type offer catalog.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    /// Price in whole euros
    pub price: u32,
}

/// All offers available for one point type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferGroup {
    #[serde(rename = "type")]
    pub point_type: String,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

/// Offers from `catalog` whose id appears in `selected_ids`.
///
/// Order follows the catalog, not the selection. Unknown ids are ignored.
#[must_use]
pub fn selected_offers<'a>(catalog: &'a [Offer], selected_ids: &[String]) -> Vec<&'a Offer> {
    catalog
        .iter()
        .filter(|offer| selected_ids.iter().any(|id| *id == offer.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str, title: &str, price: u32) -> Offer {
        Offer {
            id: id.to_string(),
            title: title.to_string(),
            price,
        }
    }

    #[test]
    fn keeps_catalog_order() {
        let catalog = vec![
            offer("o1", "Extra luggage", 10),
            offer("o2", "Comfort class", 40),
            offer("o3", "Meal", 15),
        ];
        let ids = vec!["o3".to_string(), "o1".to_string()];
        let titles: Vec<&str> = selected_offers(&catalog, &ids)
            .iter()
            .map(|o| o.title.as_str())
            .collect();
        assert_eq!(titles, ["Extra luggage", "Meal"]);
    }

    #[test]
    fn unknown_or_empty_selection_yields_nothing() {
        let catalog = vec![offer("o1", "Extra luggage", 10)];
        assert!(selected_offers(&catalog, &[]).is_empty());
        assert!(selected_offers(&catalog, &["missing".to_string()]).is_empty());
        assert!(selected_offers(&[], &["o1".to_string()]).is_empty());
    }

    #[test]
    fn group_reads_type_key() {
        let group: OfferGroup = serde_json::from_str(
            r#"{"type":"taxi","offers":[{"id":"o1","title":"Upgrade","price":30}]}"#,
        )
        .unwrap();
        assert_eq!(group.point_type, "taxi");
        assert_eq!(group.offers, vec![offer("o1", "Upgrade", 30)]);
    }
}
