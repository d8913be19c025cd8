pub mod list_empty;
pub mod point_item;
pub mod trip_events_list;

pub use list_empty::ListEmpty;
pub use point_item::{TripPointItem, TripPointItemProps};
pub use trip_events_list::TripEventsList;
