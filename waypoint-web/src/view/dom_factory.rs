use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

use super::{ElementFactory, ViewError};
use crate::dom;

fn dom_error(value: &wasm_bindgen::JsValue) -> ViewError {
    ViewError::Dom(dom::js_error_message(value))
}

/// [`ElementFactory`] backed by the browser document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomElementFactory;

impl ElementFactory for DomElementFactory {
    type Node = Element;
    type Listener = ClickListener;

    fn create_element(&self, markup: &str) -> Result<Element, ViewError> {
        let document = dom::document().ok_or(ViewError::NoDocument)?;
        let container = document.create_element("div").map_err(|e| dom_error(&e))?;
        container.set_inner_html(markup.trim());
        container
            .first_element_child()
            .ok_or(ViewError::EmptyTemplate)
    }

    fn on_click(
        &self,
        node: &Element,
        selector: &str,
        handler: Rc<dyn Fn()>,
    ) -> Result<ClickListener, ViewError> {
        let target = node
            .query_selector(selector)
            .map_err(|e| dom_error(&e))?
            .ok_or_else(|| ViewError::MissingControl {
                selector: selector.to_string(),
            })?;

        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            handler();
        });
        target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;

        Ok(ClickListener { target, closure })
    }
}

/// A click listener attached to a DOM element; detached on drop.
pub struct ClickListener {
    target: Element,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref())
        {
            dom::console_error(&format!(
                "Failed to detach click listener: {}",
                dom::js_error_message(&err)
            ));
        }
    }
}
