//! WebAssembly front-end for the level leaderboard
//!
//! Fetches the level document once, renders ranked level cards for the
//! selected category, and shows a completions table in a modal when a card
//! is selected. All state lives in `leaderboard_core::Leaderboard`; this crate
//! only turns DOM events into core events and draws the resulting views.

use leaderboard_core::{
    load_from_response, Category, CategoryData, ClickTarget, Leaderboard, LoadError, ModalEvent,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, KeyboardEvent, Node};

mod config;
mod dom;
mod fetch;
mod log;
mod render;


pub use config::PageConfig;

use dom::{Dom, Listener};
use render::VIDEO_LINK_SELECTOR;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Create a page and start loading its data.
///
/// Keep the returned handle alive for as long as the page is shown.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<LeaderboardPage, JsValue> {
    let page = LeaderboardPage::new(config)?;
    let inner = Rc::clone(&page.inner);
    wasm_bindgen_futures::spawn_local(async move {
        inner.load().await;
    });
    Ok(page)
}

/// The leaderboard page controller
#[wasm_bindgen]
pub struct LeaderboardPage {
    inner: Rc<Page>,
}

#[wasm_bindgen]
impl LeaderboardPage {
    /// Attach to the page elements named in `config` and show the loading state
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LeaderboardPage, JsValue> {
        let config = PageConfig::from_js(config)?;
        let inner = Page::attach(config)?;
        Ok(LeaderboardPage { inner })
    }

    /// Fetch the level document. Resolves once the list has been redrawn.
    #[wasm_bindgen]
    pub fn load(&self) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);
        wasm_bindgen_futures::future_to_promise(async move {
            inner.load().await;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Switch to the category with the given key
    #[wasm_bindgen]
    pub fn select_category(&self, key: &str) -> bool {
        match key.parse::<Category>() {
            Ok(category) => {
                self.inner.select_category(category);
                true
            }
            Err(err) => {
                log::warn(&err.to_string());
                false
            }
        }
    }

    /// Key of the active category
    #[wasm_bindgen]
    pub fn active_category(&self) -> String {
        self.inner.state.borrow().active_category().key().to_string()
    }

    /// Check if the completions modal is shown
    #[wasm_bindgen]
    pub fn is_modal_open(&self) -> bool {
        self.inner.state.borrow().modal().is_shown()
    }

    /// Close the completions modal
    #[wasm_bindgen]
    pub fn close_modal(&self) {
        self.inner.modal_event(ModalEvent::CloseControl);
    }
}

/// Page internals shared with the event handlers
struct Page {
    this: Weak<Page>,
    config: PageConfig,
    dom: Dom,
    state: RefCell<Leaderboard>,
    /// Handlers for the page lifetime: controls, modal, keyboard
    listeners: RefCell<Vec<Listener>>,
    /// Handlers of the currently rendered cards
    card_listeners: RefCell<Vec<Listener>>,
}

impl Page {
    fn attach(config: PageConfig) -> Result<Rc<Page>, JsValue> {
        let dom = Dom::find(&config)?;
        let state = Leaderboard::new(config.default_category);

        let page = Rc::new_cyclic(|this| Page {
            this: this.clone(),
            config,
            dom,
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            card_listeners: RefCell::new(Vec::new()),
        });

        page.wire_events()?;
        page.render();
        Ok(page)
    }

    fn wire_events(&self) -> Result<(), JsValue> {
        let mut listeners = Vec::new();

        for category in Category::ALL {
            let page = self.this.clone();
            listeners.push(Listener::new(
                self.dom.button(category),
                "click",
                move |_event: Event| with_page(&page, |p| p.select_category(category)),
            )?);
        }

        let page = self.this.clone();
        listeners.push(Listener::new(
            &self.dom.close_button,
            "click",
            move |event: Event| {
                event.stop_propagation();
                with_page(&page, |p| p.modal_event(ModalEvent::CloseControl));
            },
        )?);

        let page = self.this.clone();
        listeners.push(Listener::new(&self.dom.modal, "click", move |event: Event| {
            with_page(&page, |p| {
                let event = if p.is_inside_content(&event) {
                    ModalEvent::ContentArea
                } else {
                    ModalEvent::Backdrop
                };
                p.modal_event(event);
            });
        })?);

        let page = self.this.clone();
        listeners.push(Listener::new(
            &self.dom.document,
            "keydown",
            move |event: Event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
                    return;
                };
                with_page(&page, |p| p.handle_key(&key));
            },
        )?);

        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    async fn load(&self) {
        let url = self.config.data_url.clone();
        let result = fetch::fetch_text(&url).await.and_then(|fetched| {
            load_from_response(fetched.status, &fetched.body, self.config.shape)
        });
        self.finish_load(result);
    }

    fn finish_load(&self, result: Result<CategoryData, LoadError>) {
        match &result {
            Ok(data) => log::info(&format!(
                "Loaded {} levels ({} classic, {} platformer)",
                data.total_levels(),
                data.classic.len(),
                data.platformer.len()
            )),
            Err(err) => log::error(&format!("Error fetching levels: {}", err)),
        }

        if self.state.borrow_mut().finish_load(result) {
            self.render();
        }
    }

    fn select_category(&self, category: Category) {
        self.state.borrow_mut().select_category(category);
        self.render();
    }

    fn modal_event(&self, event: ModalEvent) {
        if self.state.borrow_mut().modal_event(event) {
            self.render_modal();
        }
    }

    fn handle_key(&self, key: &str) {
        if self.state.borrow_mut().handle_key(key) {
            self.render_modal();
        }
    }

    fn card_click(&self, target: ClickTarget) {
        if self.state.borrow_mut().click(target) {
            self.render_modal();
        }
    }

    fn is_inside_content(&self, event: &Event) -> bool {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        self.dom.modal_content.contains(target.as_ref())
    }

    /// Redraw controls, list, and modal from the current state
    fn render(&self) {
        if let Err(err) = self.try_render() {
            log::error(&format!("Render failed: {:?}", err));
        }
    }

    fn try_render(&self) -> Result<(), JsValue> {
        let view = {
            let state = self.state.borrow();
            render::render_controls(&self.dom, state.switch())?;
            state.list_view()
        };

        let cards = render::render_list(&self.dom, &view)?;
        let listeners = cards
            .iter()
            .map(|(index, element)| self.card_listener(*index, element))
            .collect::<Result<Vec<_>, _>>()?;
        // Old cards are already detached; dropping their listeners is enough
        *self.card_listeners.borrow_mut() = listeners;

        self.try_render_modal()
    }

    fn render_modal(&self) {
        if let Err(err) = self.try_render_modal() {
            log::error(&format!("Render failed: {:?}", err));
        }
    }

    fn try_render_modal(&self) -> Result<(), JsValue> {
        let view = self.state.borrow().modal_view();
        render::render_modal(&self.dom, view.as_ref())
    }

    fn card_listener(&self, index: usize, card: &Element) -> Result<Listener, JsValue> {
        let page = self.this.clone();
        Listener::new(card, "click", move |event: Event| {
            let on_video = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(VIDEO_LINK_SELECTOR).ok().flatten())
                .is_some();
            let target = if on_video {
                ClickTarget::VideoLink(index)
            } else {
                ClickTarget::Card(index)
            };
            with_page(&page, |p| p.card_click(target));
        })
    }
}

fn with_page(page: &Weak<Page>, f: impl FnOnce(&Page)) {
    if let Some(page) = page.upgrade() {
        f(&page);
    }
}
