use waypoint_core::templates::LIST_CLASS;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TripEventsList)]
pub fn trip_events_list(p: &Props) -> Html {
    html! {
        <ul class={LIST_CLASS}>
            { for p.children.iter() }
        </ul>
    }
}
