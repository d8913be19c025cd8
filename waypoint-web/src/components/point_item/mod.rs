
use std::rc::Rc;

use waypoint_core::templates::{
    FAVORITE_ACTIVE_CLASS, FAVORITE_BUTTON_CLASS, FAVORITE_ICON_PATH, ITEM_CLASS,
    ROLLUP_BUTTON_CLASS,
};
use waypoint_core::{Destination, Offer, OfferLine, PointViewModel, TripPoint};
use yew::prelude::*;

use crate::interactions::{ClickHandlers, edit_click_handler, favorite_click_handler};
use crate::paths::asset_path;

#[derive(Properties, Clone)]
pub struct TripPointItemProps {
    pub point: Rc<TripPoint>,
    pub destination: Rc<Destination>,
    pub offers: Rc<[Offer]>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_edit_click: Callback<()>,
    pub on_favorite_click: Callback<()>,
}

impl PartialEq for TripPointItemProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.point, &other.point)
            && Rc::ptr_eq(&self.destination, &other.destination)
            && Rc::ptr_eq(&self.offers, &other.offers)
            && self.disabled == other.disabled
    }
}

fn offer_item(line: &OfferLine) -> Html {
    html! {
        <li class="event__offer">
            <span class="event__offer-title">{ line.title.clone() }</span>
            { "+€\u{a0}" }
            <span class="event__offer-price">{ line.price.to_string() }</span>
        </li>
    }
}

#[function_component(TripPointItem)]
pub fn trip_point_item(props: &TripPointItemProps) -> Html {
    let vm = PointViewModel::build(&props.point, &props.destination, &props.offers);

    let handlers = Rc::new(ClickHandlers::new(
        props.on_edit_click.clone(),
        props.on_favorite_click.clone(),
        props.disabled,
    ));
    let on_edit = edit_click_handler(handlers.clone());
    let on_favorite = favorite_click_handler(handlers);

    let favorite_class = classes!(
        FAVORITE_BUTTON_CLASS,
        vm.is_favorite.then_some(FAVORITE_ACTIVE_CLASS)
    );

    html! {
        <li class={ITEM_CLASS}>
            <div class="event">
                <time class="event__date" datetime={vm.from_attr.clone()}>{ vm.short_date.clone() }</time>
                <div class="event__type">
                    <img class="event__type-icon" width="42" height="42" src={asset_path(&vm.icon_src)} alt="Event type icon" />
                </div>
                <h3 class="event__title">{ vm.title() }</h3>
                <div class="event__schedule">
                    <p class="event__time">
                        <time class="event__start-time" datetime={vm.from_attr.clone()}>{ vm.start_time.clone() }</time>
                        { " — " }
                        <time class="event__end-time" datetime={vm.to_attr.clone()}>{ vm.end_time.clone() }</time>
                    </p>
                    <p class="event__duration">{ vm.duration.clone() }</p>
                </div>
                <p class="event__price">
                    { "€\u{a0}" }<span class="event__price-value">{ vm.base_price.to_string() }</span>
                </p>
                <h4 class="visually-hidden">{ "Offers:" }</h4>
                if vm.has_offers() {
                    <ul class="event__selected-offers">
                        { for vm.offers.iter().map(offer_item) }
                    </ul>
                }
                <button class={favorite_class} type="button" onclick={on_favorite}>
                    <span class="visually-hidden">{ "Add to favorite" }</span>
                    <svg class="event__favorite-icon" width="28" height="28" viewBox="0 0 28 28">
                        <path d={FAVORITE_ICON_PATH} />
                    </svg>
                </button>
                <button class={ROLLUP_BUTTON_CLASS} type="button" onclick={on_edit}>
                    <span class="visually-hidden">{ "Open event" }</span>
                </button>
            </div>
        </li>
    }
}
