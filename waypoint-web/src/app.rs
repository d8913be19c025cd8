use std::collections::HashMap;
use std::rc::Rc;

use waypoint_core::{DataLoader, Destination, Offer, TripCatalog, TripPoint};
use yew::prelude::*;

use crate::components::{ListEmpty, TripEventsList, TripPointItem};
use crate::data::WebDataLoader;
use crate::dom;

/// Points shared with the list items, keyed lookups built once per catalog.
#[derive(Clone, Default)]
pub struct BoardState {
    pub points: Vec<Rc<TripPoint>>,
    destinations: HashMap<String, Rc<Destination>>,
    offers: HashMap<String, Rc<[Offer]>>,
    no_offers: Rc<[Offer]>,
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }
}

impl BoardState {
    #[must_use]
    pub fn from_catalog(catalog: TripCatalog) -> Self {
        let TripCatalog {
            points,
            destinations,
            offers,
        } = catalog;
        Self {
            points: points.into_iter().map(Rc::new).collect(),
            destinations: destinations
                .into_iter()
                .map(|dest| (dest.id.clone(), Rc::new(dest)))
                .collect(),
            offers: offers
                .into_iter()
                .map(|group| (group.point_type, Rc::from(group.offers)))
                .collect(),
            no_offers: Rc::from(Vec::new()),
        }
    }

    #[must_use]
    pub fn destination(&self, point: &TripPoint) -> Option<Rc<Destination>> {
        self.destinations.get(&point.destination).cloned()
    }

    #[must_use]
    pub fn offers_for(&self, point: &TripPoint) -> Rc<[Offer]> {
        self.offers
            .get(&point.point_type)
            .cloned()
            .unwrap_or_else(|| self.no_offers.clone())
    }

    /// New state with one point's favorite flag flipped; other points keep their `Rc`.
    #[must_use]
    fn toggle_favorite(&self, point_id: &str) -> Self {
        let points = self
            .points
            .iter()
            .map(|point| {
                if point.id == point_id {
                    Rc::new(point.with_favorite_toggled())
                } else {
                    point.clone()
                }
            })
            .collect();
        Self {
            points,
            ..self.clone()
        }
    }
}

pub enum BoardAction {
    ToggleFavorite(String),
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BoardAction::ToggleFavorite(point_id) => Rc::new(self.toggle_favorite(&point_id)),
        }
    }
}

fn load_board() -> BoardState {
    match WebDataLoader.load_catalog() {
        Ok(catalog) => BoardState::from_catalog(catalog),
        Err(err) => {
            dom::console_error(&format!("Failed to load trip data: {err}"));
            BoardState::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let board = use_reducer(load_board);

    if board.points.is_empty() {
        return html! { <ListEmpty /> };
    }

    let items = board.points.iter().filter_map(|point| {
        let Some(destination) = board.destination(point) else {
            log::warn!(
                "skipping point {} with unknown destination {}",
                point.id,
                point.destination
            );
            return None;
        };

        let on_favorite_click = {
            let dispatcher = board.dispatcher();
            let id = point.id.clone();
            Callback::from(move |()| dispatcher.dispatch(BoardAction::ToggleFavorite(id.clone())))
        };
        let on_edit_click = {
            let id = point.id.clone();
            Callback::from(move |()| log::info!("edit requested for point {id}"))
        };

        Some(html! {
            <TripPointItem
                key={point.id.clone()}
                point={point.clone()}
                destination={destination}
                offers={board.offers_for(point)}
                on_edit_click={on_edit_click}
                on_favorite_click={on_favorite_click}
            />
        })
    });

    html! {
        <section class="trip-events">
            <TripEventsList>
                { for items }
            </TripEventsList>
        </section>
    }
}
