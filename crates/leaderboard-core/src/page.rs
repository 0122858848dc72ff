//! Page state: category selection, load status, and the completions modal

use crate::card::{cards, CardView};
use crate::completions::ModalView;
use crate::error::LoadError;
use crate::model::{Category, CategoryData};

/// Shown while the level document is being fetched
pub const LOADING_MESSAGE: &str = "Loading levels...";

/// Heading of the error block when the document cannot be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load level data.";

/// Shown for a category without levels
pub const EMPTY_CATEGORY_MESSAGE: &str = "No records in this category yet.";

/// Tracks which category control is active. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySwitch {
    active: Category,
}

impl CategorySwitch {
    pub fn new(active: Category) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active == category
    }

    /// Select a category, returning whether the selection changed
    pub fn select(&mut self, category: Category) -> bool {
        let changed = self.active != category;
        self.active = category;
        changed
    }

    /// Every control with its active flag
    pub fn controls(&self) -> [(Category, bool); 2] {
        Category::ALL.map(|c| (c, self.is_active(c)))
    }
}

impl Default for CategorySwitch {
    fn default() -> Self {
        Self::new(Category::default())
    }
}

/// Visibility of the completions modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    /// Showing the level at this index of the active category
    Shown { level_index: usize },
}

/// Input to the modal state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// A level card was selected
    Open(usize),
    CloseControl,
    /// Pointer activation on the dimmed area around the content
    Backdrop,
    /// Pointer activation inside the modal content
    ContentArea,
    Escape,
}

impl ModalState {
    pub fn is_shown(&self) -> bool {
        matches!(self, ModalState::Shown { .. })
    }

    pub fn transition(self, event: ModalEvent) -> ModalState {
        match (self, event) {
            (_, ModalEvent::Open(level_index)) => ModalState::Shown { level_index },
            (ModalState::Shown { .. }, ModalEvent::CloseControl)
            | (ModalState::Shown { .. }, ModalEvent::Backdrop)
            | (ModalState::Shown { .. }, ModalEvent::Escape) => ModalState::Hidden,
            (state, ModalEvent::ContentArea) => state,
            (ModalState::Hidden, _) => ModalState::Hidden,
        }
    }
}

/// Where a pointer activation on a level card landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Card(usize),
    /// The gameplay video link, which never opens the modal
    VideoLink(usize),
}

impl ClickTarget {
    pub fn modal_event(self) -> Option<ModalEvent> {
        match self {
            ClickTarget::Card(index) => Some(ModalEvent::Open(index)),
            ClickTarget::VideoLink(_) => None,
        }
    }
}

/// What the list container should show
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading { message: &'static str },
    Cards(Vec<CardView>),
    Empty { message: &'static str },
    Error { message: &'static str, detail: String },
}

/// Outcome of the single document fetch
#[derive(Debug, Clone, PartialEq, Default)]
enum LoadStatus {
    #[default]
    Pending,
    Loaded(CategoryData),
    Failed(LoadError),
}

/// State behind the leaderboard page
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    switch: CategorySwitch,
    status: LoadStatus,
    modal: ModalState,
}

impl Leaderboard {
    pub fn new(default_category: Category) -> Self {
        Self {
            switch: CategorySwitch::new(default_category),
            status: LoadStatus::Pending,
            modal: ModalState::Hidden,
        }
    }

    /// Record the fetch result. Only the first result is kept.
    pub fn finish_load(&mut self, result: Result<CategoryData, LoadError>) -> bool {
        if !matches!(self.status, LoadStatus::Pending) {
            return false;
        }
        self.status = match result {
            Ok(data) => LoadStatus::Loaded(data),
            Err(err) => LoadStatus::Failed(err),
        };
        true
    }

    pub fn data(&self) -> Option<&CategoryData> {
        match &self.status {
            LoadStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn switch(&self) -> &CategorySwitch {
        &self.switch
    }

    pub fn active_category(&self) -> Category {
        self.switch.active()
    }

    /// Switch category. Any open modal refers to the old list, so it closes.
    pub fn select_category(&mut self, category: Category) -> bool {
        self.modal = ModalState::Hidden;
        self.switch.select(category)
    }

    pub fn list_view(&self) -> ListView {
        match &self.status {
            LoadStatus::Pending => ListView::Loading {
                message: LOADING_MESSAGE,
            },
            LoadStatus::Failed(err) => ListView::Error {
                message: LOAD_FAILED_MESSAGE,
                detail: err.to_string(),
            },
            LoadStatus::Loaded(data) => {
                let levels = data.levels(self.active_category());
                if levels.is_empty() {
                    ListView::Empty {
                        message: EMPTY_CATEGORY_MESSAGE,
                    }
                } else {
                    ListView::Cards(cards(levels))
                }
            }
        }
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Feed a modal event. Opening requires a loaded level at that index.
    pub fn modal_event(&mut self, event: ModalEvent) -> bool {
        if let ModalEvent::Open(index) = event {
            let exists = self
                .data()
                .and_then(|d| d.level(self.active_category(), index))
                .is_some();
            if !exists {
                return false;
            }
        }

        let next = self.modal.transition(event);
        let changed = next != self.modal;
        self.modal = next;
        changed
    }

    /// Handle a pointer activation on a level card
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target.modal_event() {
            Some(event) => self.modal_event(event),
            None => false,
        }
    }

    /// Handle a key press, returning whether state changed
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "Escape" | "Esc" => self.modal_event(ModalEvent::Escape),
            _ => false,
        }
    }

    /// Contents of the modal while it is shown
    pub fn modal_view(&self) -> Option<ModalView> {
        let ModalState::Shown { level_index } = self.modal else {
            return None;
        };
        let category = self.active_category();
        self.data()?
            .level(category, level_index)
            .map(|level| ModalView::new(level, category))
    }
}
