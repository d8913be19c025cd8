use waypoint_core::point_list_template;

use super::{DomElementFactory, ElementCache, ElementFactory, View, ViewError};

/// Empty `trip-events__list` shell that point views are mounted into.
pub struct PointListView<F: ElementFactory = DomElementFactory> {
    cache: ElementCache<F>,
}

impl PointListView<DomElementFactory> {
    #[must_use]
    pub const fn in_document() -> Self {
        Self::new(DomElementFactory)
    }
}

impl<F: ElementFactory> PointListView<F> {
    pub const fn new(factory: F) -> Self {
        Self {
            cache: ElementCache::new(factory),
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.cache.is_cached()
    }
}

impl<F: ElementFactory> View for PointListView<F> {
    type Node = F::Node;

    fn template(&self) -> Result<String, ViewError> {
        Ok(point_list_template())
    }

    fn element(&self) -> Result<F::Node, ViewError> {
        self.cache
            .get_or_try_init(|factory| factory.create_element(&self.template()?))
    }

    fn remove_element(&self) {
        let _ = self.cache.clear();
    }
}
