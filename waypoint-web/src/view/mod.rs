//! Imperative views: markup rendered once, mounted as a node, cached until removed.

mod dom_factory;
mod point_list_view;
mod point_view;

use std::cell::RefCell;
use std::rc::Rc;

pub use dom_factory::{ClickListener, DomElementFactory};
pub use point_list_view::PointListView;
pub use point_view::{PointView, PointViewProps};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("document unavailable")]
    NoDocument,
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("template produced no element")]
    EmptyTemplate,
    #[error("no control matches {selector}")]
    MissingControl { selector: String },
    #[error("template error: {0}")]
    Template(String),
}

/// Turns markup into live nodes and attaches click listeners to them.
pub trait ElementFactory {
    type Node: Clone;
    /// Keeps a listener attached until dropped.
    type Listener;

    /// Build a node from an HTML fragment with a single root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot create or parse the element.
    fn create_element(&self, markup: &str) -> Result<Self::Node, ViewError>;

    /// Attach `handler` to clicks on the first descendant of `node` matching `selector`.
    /// The default browser action is prevented before `handler` runs.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingControl`] if nothing matches `selector`.
    fn on_click(
        &self,
        node: &Self::Node,
        selector: &str,
        handler: Rc<dyn Fn()>,
    ) -> Result<Self::Listener, ViewError>;
}

/// Common surface of the list and item views.
pub trait View {
    type Node;

    /// Markup the node is built from.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Template`] if the markup cannot be rendered.
    fn template(&self) -> Result<String, ViewError>;

    /// The cached node, created on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the node has to be created and creation fails.
    fn element(&self) -> Result<Self::Node, ViewError>;

    /// Forget the cached node; the next [`View::element`] call builds a new one.
    fn remove_element(&self);
}

/// Lazily created, cached node owned by a single view.
pub struct ElementCache<F: ElementFactory> {
    factory: F,
    element: RefCell<Option<F::Node>>,
}

impl<F: ElementFactory> ElementCache<F> {
    pub const fn new(factory: F) -> Self {
        Self {
            factory,
            element: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.element.borrow().is_some()
    }

    /// Return the cached node or build it with `init`.
    ///
    /// # Errors
    ///
    /// Propagates the error from `init`; nothing is cached in that case.
    pub fn get_or_try_init(
        &self,
        init: impl FnOnce(&F) -> Result<F::Node, ViewError>,
    ) -> Result<F::Node, ViewError> {
        if let Some(node) = self.element.borrow().as_ref() {
            return Ok(node.clone());
        }
        let node = init(&self.factory)?;
        *self.element.borrow_mut() = Some(node.clone());
        Ok(node)
    }

    pub fn clear(&self) -> Option<F::Node> {
        self.element.borrow_mut().take()
    }
}
