use yew::prelude::*;

pub const EMPTY_LIST_MESSAGE: &str = "Click New Event to create your first point";

#[function_component(ListEmpty)]
pub fn list_empty() -> Html {
    html! {
        <p class="trip-events__msg">{ EMPTY_LIST_MESSAGE }</p>
    }
}
