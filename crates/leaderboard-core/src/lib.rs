//! Core logic for the level leaderboard
//!
//! Everything here is independent of the browser: the level document model,
//! loading, score formatting, card and modal view models, and the page state
//! machine. The `leaderboard-wasm` crate draws these views into the DOM.

pub mod card;
pub mod completions;
pub mod error;
pub mod format;
pub mod loader;
pub mod model;
pub mod page;


pub use card::{difficulty_class, rank_class, CardView};
pub use completions::{sort_completions, CompletionRow, CompletionsBody, ModalView};
pub use error::{FormatError, LoadError, UnknownCategory};
pub use format::{format_percent, format_score, format_time};
pub use loader::{load_from_response, parse_document, DocumentShape};
pub use model::{Category, CategoryData, CompletionRecord, LevelRecord, Score, ScoreMode};
pub use page::{CategorySwitch, ClickTarget, Leaderboard, ListView, ModalEvent, ModalState};
