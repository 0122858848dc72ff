//! Ranking and display of a level's completions

use crate::format::format_score;
use crate::model::{Category, CompletionRecord, LevelRecord, ScoreMode};
use std::cmp::Ordering;

/// Shown instead of an empty completions table
pub const NO_COMPLETIONS_MESSAGE: &str = "No completions yet.";

/// Completions ordered best first for the given mode.
///
/// The sort is stable, so equal scores keep their document order.
/// Scores that are not numeric go last.
pub fn sort_completions(
    completions: &[CompletionRecord],
    mode: ScoreMode,
) -> Vec<&CompletionRecord> {
    let mut keyed: Vec<(Option<f64>, &CompletionRecord)> = completions
        .iter()
        .map(|c| (c.score.as_f64().ok(), c))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_scores(*a, *b, mode));
    keyed.into_iter().map(|(_, c)| c).collect()
}

fn compare_scores(a: Option<f64>, b: Option<f64>, mode: ScoreMode) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if mode.higher_is_better() => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// One row of the completions table
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRow {
    pub position: usize,
    pub player: String,
    pub score: String,
}

/// Body of the completions modal
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionsBody {
    Table(Vec<CompletionRow>),
    Empty { message: &'static str },
}

/// Contents of the completions modal for one level
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub title: String,
    pub mode: ScoreMode,
    pub body: CompletionsBody,
}

impl ModalView {
    pub fn new(level: &LevelRecord, category: Category) -> Self {
        let mode = category.score_mode();
        let body = if level.completions.is_empty() {
            CompletionsBody::Empty {
                message: NO_COMPLETIONS_MESSAGE,
            }
        } else {
            let rows = sort_completions(&level.completions, mode)
                .into_iter()
                .enumerate()
                .map(|(i, c)| CompletionRow {
                    position: i + 1,
                    player: c.player.clone(),
                    score: format_score(&c.score, mode),
                })
                .collect();
            CompletionsBody::Table(rows)
        };

        Self {
            title: level.name.clone(),
            mode,
            body,
        }
    }

    /// Table header cells
    pub fn headers(&self) -> [&'static str; 3] {
        ["#", "Player", self.mode.column_label()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::INVALID_TIME;

    fn scores(sorted: &[&CompletionRecord]) -> Vec<f64> {
        sorted.iter().map(|c| c.score.as_f64().unwrap()).collect()
    }

    fn sample() -> Vec<CompletionRecord> {
        vec![
            CompletionRecord::new("Alpha", 40.0),
            CompletionRecord::new("Bravo", 90.0),
            CompletionRecord::new("Charlie", 10.0),
        ]
    }

    #[test]
    fn test_classic_sorts_descending() {
        let completions = sample();
        let sorted = sort_completions(&completions, ScoreMode::Percent);
        assert_eq!(scores(&sorted), vec![90.0, 40.0, 10.0]);
    }

    #[test]
    fn test_platformer_sorts_ascending() {
        let completions = sample();
        let sorted = sort_completions(&completions, ScoreMode::Time);
        assert_eq!(scores(&sorted), vec![10.0, 40.0, 90.0]);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let completions = vec![
            CompletionRecord::new("First", 100.0),
            CompletionRecord::new("Second", 100.0),
            CompletionRecord::new("Third", 100.0),
        ];
        let sorted = sort_completions(&completions, ScoreMode::Percent);
        let players: Vec<&str> = sorted.iter().map(|c| c.player.as_str()).collect();
        assert_eq!(players, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_invalid_scores_sort_last() {
        let completions = vec![
            CompletionRecord::new("Broken", "n/a"),
            CompletionRecord::new("Slow", 120.0),
            CompletionRecord::new("Fast", 60.0),
        ];

        let sorted = sort_completions(&completions, ScoreMode::Time);
        let players: Vec<&str> = sorted.iter().map(|c| c.player.as_str()).collect();
        assert_eq!(players, vec!["Fast", "Slow", "Broken"]);

        let sorted = sort_completions(&completions, ScoreMode::Percent);
        let players: Vec<&str> = sorted.iter().map(|c| c.player.as_str()).collect();
        assert_eq!(players, vec!["Slow", "Fast", "Broken"]);
    }

    #[test]
    fn test_modal_view_rows() {
        let level = LevelRecord {
            name: "Ascension".to_string(),
            completions: vec![
                CompletionRecord::new("Slow", 3661.001),
                CompletionRecord::new("Fast", 65.5),
                CompletionRecord::new("Broken", "later"),
            ],
            ..Default::default()
        };

        let view = ModalView::new(&level, Category::Platformer);
        assert_eq!(view.title, "Ascension");
        assert_eq!(view.headers(), ["#", "Player", "Time"]);
        assert_eq!(
            view.body,
            CompletionsBody::Table(vec![
                CompletionRow {
                    position: 1,
                    player: "Fast".to_string(),
                    score: "01:05.500".to_string(),
                },
                CompletionRow {
                    position: 2,
                    player: "Slow".to_string(),
                    score: "01:01:01.001".to_string(),
                },
                CompletionRow {
                    position: 3,
                    player: "Broken".to_string(),
                    score: INVALID_TIME.to_string(),
                },
            ])
        );
    }

    #[test]
    fn test_modal_view_classic_percent() {
        let level = LevelRecord {
            name: "Tidal Wave".to_string(),
            completions: vec![
                CompletionRecord::new("Partial", 87.0),
                CompletionRecord::new("Victor", 100.0),
            ],
            ..Default::default()
        };

        let view = ModalView::new(&level, Category::Classic);
        let CompletionsBody::Table(rows) = view.body else {
            panic!("expected a table");
        };
        assert_eq!(rows[0].player, "Victor");
        assert_eq!(rows[0].score, "100%");
        assert_eq!(rows[1].score, "87%");
    }

    #[test]
    fn test_modal_view_without_completions() {
        let level = LevelRecord {
            name: "Unbeaten".to_string(),
            ..Default::default()
        };
        let view = ModalView::new(&level, Category::Classic);
        assert_eq!(
            view.body,
            CompletionsBody::Empty {
                message: NO_COMPLETIONS_MESSAGE
            }
        );
    }
}
