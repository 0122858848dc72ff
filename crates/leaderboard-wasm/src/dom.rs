//! Element lookup and event listener ownership

use crate::config::PageConfig;
use leaderboard_core::Category;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// The fixed elements the page renders into
pub struct Dom {
    pub document: Document,
    pub container: Element,
    pub classic_button: Element,
    pub platformer_button: Element,
    pub modal: HtmlElement,
    pub modal_content: Element,
    pub modal_title: Element,
    pub modal_list: Element,
    pub close_button: Element,
}

impl Dom {
    /// Look up every element named in the config
    pub fn find(config: &PageConfig) -> Result<Dom, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let modal = by_id(&document, &config.modal_id)?.dyn_into::<HtmlElement>()?;

        Ok(Dom {
            container: by_id(&document, &config.container_id)?,
            classic_button: by_id(&document, config.button_id(Category::Classic))?,
            platformer_button: by_id(&document, config.button_id(Category::Platformer))?,
            modal,
            modal_content: by_id(&document, &config.modal_content_id)?,
            modal_title: by_id(&document, &config.modal_title_id)?,
            modal_list: by_id(&document, &config.modal_list_id)?,
            close_button: by_id(&document, &config.close_button_id)?,
            document,
        })
    }

    pub fn button(&self, category: Category) -> &Element {
        match category {
            Category::Classic => &self.classic_button,
            Category::Platformer => &self.platformer_button,
        }
    }

    /// Create an element with a class attribute
    pub fn create(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        if !class.is_empty() {
            element.set_class_name(class);
        }
        Ok(element)
    }

    /// Create an element holding plain text
    pub fn create_text(&self, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
        let element = self.create(tag, class)?;
        element.set_text_content(Some(text));
        Ok(element)
    }

    /// Create a text element and append it to `parent`
    pub fn append_text(
        &self,
        parent: &Element,
        tag: &str,
        class: &str,
        text: &str,
    ) -> Result<Element, JsValue> {
        let element = self.create_text(tag, class, text)?;
        parent.append_child(&element)?;
        Ok(element)
    }
}

fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))
}

/// An event listener that is removed again when dropped
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Listener, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
