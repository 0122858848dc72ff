//! Level card view model

use crate::model::LevelRecord;

/// Prefix shared by every difficulty badge class
pub const DIFFICULTY_CLASS_PREFIX: &str = "diff-";

/// Text on the badge when a level has no difficulty label
pub const UNKNOWN_DIFFICULTY: &str = "Unknown";

/// 1-based rank of the level at `index`
pub fn rank_for_index(index: usize) -> usize {
    index + 1
}

/// Podium class for the top three ranks
pub fn rank_class(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("top-1"),
        2 => Some("top-2"),
        3 => Some("top-3"),
        _ => None,
    }
}

/// CSS class for a difficulty label.
///
/// "Extreme Demon" becomes `diff-extreme-demon`. Every run of whitespace
/// becomes a single hyphen, and a blank label becomes `diff-unknown`.
pub fn difficulty_class(label: &str) -> String {
    let mut class = String::from(DIFFICULTY_CLASS_PREFIX);

    if label.trim().is_empty() {
        class.push_str("unknown");
        return class;
    }

    let mut in_whitespace = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                class.push('-');
            }
            in_whitespace = true;
        } else {
            class.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    class
}

/// Everything needed to draw one level card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Position in the category list
    pub index: usize,
    pub rank: usize,
    pub rank_class: Option<&'static str>,
    pub name: String,
    pub creator: String,
    pub difficulty: String,
    pub difficulty_class: String,
    pub description: String,
    pub thumbnail: String,
    pub video: String,
}

impl CardView {
    pub fn new(index: usize, level: &LevelRecord) -> Self {
        let rank = rank_for_index(index);
        let difficulty = if level.difficulty.trim().is_empty() {
            UNKNOWN_DIFFICULTY.to_string()
        } else {
            level.difficulty.clone()
        };

        Self {
            index,
            rank,
            rank_class: rank_class(rank),
            name: level.name.clone(),
            creator: level.creator.clone(),
            difficulty,
            difficulty_class: difficulty_class(&level.difficulty),
            description: level.description.clone(),
            thumbnail: level.thumbnail.clone(),
            video: level.video.clone(),
        }
    }

    /// Badge text, e.g. "#1"
    pub fn rank_label(&self) -> String {
        format!("#{}", self.rank)
    }

    /// Class attribute of the rank badge
    pub fn rank_badge_classes(&self) -> String {
        match self.rank_class {
            Some(class) => format!("rank-badge {}", class),
            None => "rank-badge".to_string(),
        }
    }

    /// Class attribute of the difficulty badge
    pub fn difficulty_tag_classes(&self) -> String {
        format!("difficulty-tag {}", self.difficulty_class)
    }

    pub fn byline(&self) -> String {
        format!("by {}", self.creator)
    }

    pub fn thumbnail_alt(&self) -> String {
        format!("{} Thumbnail", self.name)
    }
}

/// Cards for a ranked list of levels
pub fn cards(levels: &[LevelRecord]) -> Vec<CardView> {
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| CardView::new(index, level))
        .collect()
}
