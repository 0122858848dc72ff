//! Page configuration passed in from JavaScript

use leaderboard_core::{Category, DocumentShape};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Where the data comes from and which elements make up the page.
///
/// Every field is optional on the JavaScript side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Relative URL of the level document
    pub data_url: String,
    pub shape: DocumentShape,
    pub default_category: Category,
    pub container_id: String,
    pub classic_button_id: String,
    pub platformer_button_id: String,
    pub modal_id: String,
    pub modal_content_id: String,
    pub modal_title_id: String,
    pub modal_list_id: String,
    pub close_button_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            data_url: "levels.json".to_string(),
            shape: DocumentShape::Categorized,
            default_category: Category::Classic,
            container_id: "level-container".to_string(),
            classic_button_id: "btn-classic".to_string(),
            platformer_button_id: "btn-platformer".to_string(),
            modal_id: "completion-modal".to_string(),
            modal_content_id: "modal-content".to_string(),
            modal_title_id: "modal-title".to_string(),
            modal_list_id: "modal-list".to_string(),
            close_button_id: "modal-close".to_string(),
        }
    }
}

impl PageConfig {
    /// Read a config object, treating `undefined` and `null` as all defaults
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    /// Element id of the control for a category
    pub fn button_id(&self, category: Category) -> &str {
        match category {
            Category::Classic => &self.classic_button_id,
            Category::Platformer => &self.platformer_button_id,
        }
    }
}
