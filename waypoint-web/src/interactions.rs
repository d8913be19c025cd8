//! Click behavior shared by the DOM point view and the Yew point item.
use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Edit and favorite callbacks plus the flag that suppresses edits.
///
/// The owning presenter sets `disabled` while a sibling form is saving or
/// resetting; the edit request is dropped for as long as it stays set.
pub struct ClickHandlers {
    on_edit_click: Callback<()>,
    on_favorite_click: Callback<()>,
    disabled: Cell<bool>,
}

impl ClickHandlers {
    #[must_use]
    pub fn new(on_edit_click: Callback<()>, on_favorite_click: Callback<()>, disabled: bool) -> Self {
        Self {
            on_edit_click,
            on_favorite_click,
            disabled: Cell::new(disabled),
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Emit the edit request unless disabled.
    pub fn edit_click(&self) {
        if self.disabled.get() {
            log::debug!("edit click ignored while a form is busy");
            return;
        }
        self.on_edit_click.emit(());
    }

    pub fn favorite_click(&self) {
        self.on_favorite_click.emit(());
    }
}

pub fn edit_click_handler(handlers: Rc<ClickHandlers>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        handlers.edit_click();
    })
}

pub fn favorite_click_handler(handlers: Rc<ClickHandlers>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        handlers.favorite_click();
    })
}
