//! Level records as they appear in the leaderboard document

use crate::error::{FormatError, UnknownCategory};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Leaderboard partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Classic,
    Platformer,
}

impl Category {
    /// Every category, in control order
    pub const ALL: [Category; 2] = [Category::Classic, Category::Platformer];

    /// Key used in the document and the page controls
    pub fn key(self) -> &'static str {
        match self {
            Category::Classic => "classic",
            Category::Platformer => "platformer",
        }
    }

    /// How completion scores are interpreted in this category
    pub fn score_mode(self) -> ScoreMode {
        match self {
            Category::Classic => ScoreMode::Percent,
            Category::Platformer => ScoreMode::Time,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Category::Classic),
            "platformer" => Ok(Category::Platformer),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Meaning of a completion score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMode {
    /// Completion percentage, higher is better
    Percent,
    /// Elapsed seconds, lower is better
    Time,
}

impl ScoreMode {
    pub fn higher_is_better(self) -> bool {
        matches!(self, ScoreMode::Percent)
    }

    /// Column header for the score in the completions table
    pub fn column_label(self) -> &'static str {
        match self {
            ScoreMode::Percent => "Progress",
            ScoreMode::Time => "Time",
        }
    }
}

/// Raw score value from the document.
///
/// Kept as JSON so a malformed score only affects its own table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(Value);

impl Score {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Numeric value of the score. Numeric strings are accepted.
    pub fn as_f64(&self) -> Result<f64, FormatError> {
        let value = match &self.0 {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| FormatError::NotNumeric(n.to_string()))?,
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| FormatError::NotNumeric(s.clone()))?,
            other => return Err(FormatError::NotNumeric(other.to_string())),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FormatError::NotFinite)
        }
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Score {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Read an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One player's result on a level
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub player: String,
    pub score: Score,
}

impl CompletionRecord {
    pub fn new(player: &str, score: impl Into<Score>) -> Self {
        Self {
            player: player.to_string(),
            score: score.into(),
        }
    }
}

/// A ranked level. Rank comes from its position in the category list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video: String,
    #[serde(deserialize_with = "null_as_default")]
    pub completions: Vec<CompletionRecord>,
}

/// Levels of both categories, each in rank order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub classic: Vec<LevelRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platformer: Vec<LevelRecord>,
}

impl CategoryData {
    /// Data from a single flat list, which is treated as the classic board
    pub fn from_flat(levels: Vec<LevelRecord>) -> Self {
        Self {
            classic: levels,
            platformer: Vec::new(),
        }
    }

    pub fn levels(&self, category: Category) -> &[LevelRecord] {
        match category {
            Category::Classic => &self.classic,
            Category::Platformer => &self.platformer,
        }
    }

    pub fn level(&self, category: Category, index: usize) -> Option<&LevelRecord> {
        self.levels(category).get(index)
    }

    pub fn total_levels(&self) -> usize {
        self.classic.len() + self.platformer.len()
    }
}
