use futures::executor::block_on;
use waypoint_web::app::App;
use waypoint_web::components::list_empty::EMPTY_LIST_MESSAGE;
use waypoint_web::components::{ListEmpty, TripEventsList};
use yew::LocalServerRenderer;
use yew::html::ChildrenRenderer;

#[test]
fn empty_list_shell_is_well_formed() {
    let props = waypoint_web::components::trip_events_list::Props {
        children: ChildrenRenderer::default(),
    };
    let html = block_on(
        LocalServerRenderer::<TripEventsList>::with_props(props)
            .hydratable(false)
            .render(),
    );
    assert!(
        html.contains(r#"<ul class="trip-events__list"></ul>"#),
        "Empty list should render a closed shell, got: {html}"
    );
}

#[test]
fn list_empty_renders_prompt() {
    let html = block_on(LocalServerRenderer::<ListEmpty>::new().render());
    assert!(html.contains("trip-events__msg"));
    assert!(html.contains(EMPTY_LIST_MESSAGE));
}

#[test]
fn app_renders_bundled_points() {
    let html = block_on(LocalServerRenderer::<App>::new().hydratable(false).render());

    assert_eq!(
        html.matches(r#"<li class="trip-events__item">"#).count(),
        4,
        "every bundled point should render: {html}"
    );
    assert_eq!(html.matches("event__favorite-btn--active").count(), 1);
    assert!(html.contains("taxi Amsterdam"));
    assert!(html.contains("flight Chamonix"));
    assert!(html.contains("02D 01H 40M"));
    assert!(!html.contains(EMPTY_LIST_MESSAGE));
}
