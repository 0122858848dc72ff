//! DOM rendering of the leaderboard views
//!
//! Record text is only ever written through `textContent` and attributes,
//! never parsed as markup.

use crate::dom::Dom;
use leaderboard_core::{CardView, CategorySwitch, CompletionsBody, ListView, ModalView};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Selector matching the gameplay link inside a card
pub const VIDEO_LINK_SELECTOR: &str = "a.video-btn";

/// Class on the active category control
pub const ACTIVE_CLASS: &str = "active";

const VIDEO_LINK_TEXT: &str = "\u{25B6} Watch Gameplay";

/// Replace the list container contents.
///
/// Returns each rendered card with its index so the caller can attach handlers.
pub fn render_list(dom: &Dom, view: &ListView) -> Result<Vec<(usize, Element)>, JsValue> {
    let container = &dom.container;
    container.set_text_content(None);

    let mut rendered = Vec::new();
    match view {
        ListView::Loading { message } => {
            dom.append_text(container, "p", "loading", message)?;
        }
        ListView::Empty { message } => {
            dom.append_text(container, "p", "empty-message", message)?;
        }
        ListView::Error { message, detail } => {
            let block = dom.create("div", "error")?;
            dom.append_text(&block, "p", "", message)?;
            dom.append_text(&block, "small", "", detail)?;
            container.append_child(&block)?;
        }
        ListView::Cards(cards) => {
            for card in cards {
                let element = render_card(dom, card)?;
                container.append_child(&element)?;
                rendered.push((card.index, element));
            }
        }
    }
    Ok(rendered)
}

/// Build the article for one level
pub fn render_card(dom: &Dom, card: &CardView) -> Result<Element, JsValue> {
    let article = dom.create("article", "level-card")?;
    article.set_attribute("data-rank", &card.rank.to_string())?;

    let badge = dom.create_text("div", &card.rank_badge_classes(), &card.rank_label())?;
    article.append_child(&badge)?;

    let wrapper = dom.create("div", "card-content-wrapper")?;

    let thumbnail = dom.create("img", "card-thumbnail")?;
    thumbnail.set_attribute("src", &card.thumbnail)?;
    thumbnail.set_attribute("alt", &card.thumbnail_alt())?;
    thumbnail.set_attribute("loading", "lazy")?;
    wrapper.append_child(&thumbnail)?;

    let details = dom.create("div", "card-details")?;

    let header = dom.create("div", "level-header")?;
    let heading = dom.create("div", "")?;
    dom.append_text(&heading, "h2", "level-title", &card.name)?;
    dom.append_text(&heading, "span", "level-creator", &card.byline())?;
    header.append_child(&heading)?;
    dom.append_text(
        &header,
        "span",
        &card.difficulty_tag_classes(),
        &card.difficulty,
    )?;
    details.append_child(&header)?;

    dom.append_text(&details, "p", "level-description", &card.description)?;

    let link = dom.create_text("a", "video-btn", VIDEO_LINK_TEXT)?;
    link.set_attribute("href", &card.video)?;
    link.set_attribute("target", "_blank")?;
    link.set_attribute("rel", "noopener noreferrer")?;
    details.append_child(&link)?;

    wrapper.append_child(&details)?;
    article.append_child(&wrapper)?;
    Ok(article)
}

/// Mark exactly the active category control
pub fn render_controls(dom: &Dom, switch: &CategorySwitch) -> Result<(), JsValue> {
    for (category, active) in switch.controls() {
        let button = dom.button(category);
        button.class_list().toggle_with_force(ACTIVE_CLASS, active)?;
        button.set_attribute("aria-pressed", if active { "true" } else { "false" })?;
    }
    Ok(())
}

/// Show the modal with its contents, or hide it
pub fn render_modal(dom: &Dom, view: Option<&ModalView>) -> Result<(), JsValue> {
    let style = dom.modal.style();

    let Some(view) = view else {
        style.set_property("display", "none")?;
        dom.modal.set_attribute("aria-hidden", "true")?;
        return Ok(());
    };

    dom.modal_title.set_text_content(Some(&view.title));
    dom.modal_list.set_text_content(None);

    match &view.body {
        CompletionsBody::Empty { message } => {
            dom.append_text(&dom.modal_list, "p", "no-completions", message)?;
        }
        CompletionsBody::Table(rows) => {
            let table = dom.create("table", "completions-table")?;

            let head = dom.create("thead", "")?;
            let head_row = dom.create("tr", "")?;
            for label in view.headers() {
                dom.append_text(&head_row, "th", "", label)?;
            }
            head.append_child(&head_row)?;
            table.append_child(&head)?;

            let body = dom.create("tbody", "")?;
            for row in rows {
                let tr = dom.create("tr", "")?;
                let position = row.position.to_string();
                dom.append_text(&tr, "td", "completion-rank", &position)?;
                dom.append_text(&tr, "td", "completion-player", &row.player)?;
                dom.append_text(&tr, "td", "completion-score", &row.score)?;
                body.append_child(&tr)?;
            }
            table.append_child(&body)?;

            dom.modal_list.append_child(&table)?;
        }
    }

    style.set_property("display", "flex")?;
    dom.modal.set_attribute("aria-hidden", "false")?;
    Ok(())
}
