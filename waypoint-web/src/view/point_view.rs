use std::cell::RefCell;
use std::rc::Rc;

use waypoint_core::templates::{FAVORITE_BUTTON_SELECTOR, ROLLUP_BUTTON_SELECTOR};
use waypoint_core::{Destination, Offer, PointViewModel, TripPoint, point_template};
use yew::Callback;

use super::{DomElementFactory, ElementCache, ElementFactory, View, ViewError};
use crate::interactions::ClickHandlers;

pub struct PointViewProps {
    pub point: Rc<TripPoint>,
    pub destination: Rc<Destination>,
    /// Full offer catalog for the point's type
    pub offers: Rc<[Offer]>,
    pub on_edit_click: Callback<()>,
    pub on_favorite_click: Callback<()>,
    /// Set while a sibling form is saving or resetting
    pub disabled: bool,
}

/// One trip point as a list item node with edit and favorite controls wired up.
///
/// Listeners are attached when the node is created and detached together
/// with it in [`View::remove_element`] or on drop.
pub struct PointView<F: ElementFactory = DomElementFactory> {
    point: Rc<TripPoint>,
    destination: Rc<Destination>,
    offers: Rc<[Offer]>,
    handlers: Rc<ClickHandlers>,
    cache: ElementCache<F>,
    listeners: RefCell<Vec<F::Listener>>,
}

impl PointView<DomElementFactory> {
    #[must_use]
    pub fn in_document(props: PointViewProps) -> Self {
        Self::new(props, DomElementFactory)
    }
}

impl<F: ElementFactory> PointView<F> {
    pub fn new(props: PointViewProps, factory: F) -> Self {
        let PointViewProps {
            point,
            destination,
            offers,
            on_edit_click,
            on_favorite_click,
            disabled,
        } = props;
        Self {
            point,
            destination,
            offers,
            handlers: Rc::new(ClickHandlers::new(
                on_edit_click,
                on_favorite_click,
                disabled,
            )),
            cache: ElementCache::new(factory),
            listeners: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn point(&self) -> &TripPoint {
        &self.point
    }

    #[must_use]
    pub fn view_model(&self) -> PointViewModel {
        PointViewModel::build(&self.point, &self.destination, &self.offers)
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.handlers.set_disabled(disabled);
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.handlers.is_disabled()
    }

    fn bind_listeners(&self, factory: &F, node: &F::Node) -> Result<(), ViewError> {
        let edit = {
            let handlers = self.handlers.clone();
            factory.on_click(
                node,
                ROLLUP_BUTTON_SELECTOR,
                Rc::new(move || handlers.edit_click()),
            )?
        };
        let favorite = {
            let handlers = self.handlers.clone();
            factory.on_click(
                node,
                FAVORITE_BUTTON_SELECTOR,
                Rc::new(move || handlers.favorite_click()),
            )?
        };
        let mut listeners = self.listeners.borrow_mut();
        listeners.clear();
        listeners.push(edit);
        listeners.push(favorite);
        Ok(())
    }
}

impl<F: ElementFactory> View for PointView<F> {
    type Node = F::Node;

    fn template(&self) -> Result<String, ViewError> {
        point_template(&self.view_model()).map_err(|err| ViewError::Template(err.to_string()))
    }

    fn element(&self) -> Result<F::Node, ViewError> {
        self.cache.get_or_try_init(|factory| {
            let node = factory.create_element(&self.template()?)?;
            self.bind_listeners(factory, &node)?;
            log::debug!("mounted point {}", self.point.id);
            Ok(node)
        })
    }

    fn remove_element(&self) {
        self.listeners.borrow_mut().clear();
        let _ = self.cache.clear();
    }
}
