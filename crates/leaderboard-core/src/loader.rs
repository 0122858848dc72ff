//! Turning the fetched level document into category data

use crate::error::LoadError;
use crate::model::{CategoryData, LevelRecord};
use serde::{Deserialize, Serialize};

/// Expected layout of the level document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentShape {
    /// `{"classic": [...], "platformer": [...]}`
    #[default]
    Categorized,
    /// A single ranked array, shown as the classic board
    Flat,
}

/// Parse a document body of the given shape
pub fn parse_document(body: &str, shape: DocumentShape) -> Result<CategoryData, LoadError> {
    let data = match shape {
        DocumentShape::Categorized => serde_json::from_str::<CategoryData>(body)?,
        DocumentShape::Flat => {
            CategoryData::from_flat(serde_json::from_str::<Vec<LevelRecord>>(body)?)
        }
    };
    Ok(data)
}

/// Whether an HTTP status counts as success
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Resolve a completed HTTP exchange into category data
pub fn load_from_response(
    status: u16,
    body: &str,
    shape: DocumentShape,
) -> Result<CategoryData, LoadError> {
    if !is_success(status) {
        return Err(LoadError::Status { status });
    }
    parse_document(body, shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::difficulty_class;
    use crate::model::Category;

    const CATEGORIZED: &str = r#"{
        "classic": [
            {"name": "Tidal Wave", "creator": "OniLink", "difficulty": "Extreme Demon",
             "completions": [{"player": "Zoink", "score": 100}]},
            {"name": "Acheron", "creator": "ryamu", "difficulty": "Extreme Demon"}
        ],
        "platformer": [
            {"name": "Ascension", "creator": "Kiba", "difficulty": "Hard Demon",
             "completions": [{"player": "Doggie", "score": 412.75}]}
        ]
    }"#;

    #[test]
    fn test_parse_categorized() {
        let data = parse_document(CATEGORIZED, DocumentShape::Categorized).unwrap();
        let classic = data.levels(Category::Classic);
        assert_eq!(classic.len(), 2);
        assert_eq!(classic[0].name, "Tidal Wave");
        assert_eq!(classic[1].name, "Acheron");
        assert!(classic[1].completions.is_empty());
        assert_eq!(data.levels(Category::Platformer)[0].completions.len(), 1);
    }

    #[test]
    fn test_parse_flat() {
        let body = r#"[{"name": "First"}, {"name": "Second"}]"#;
        let data = parse_document(body, DocumentShape::Flat).unwrap();
        assert_eq!(data.levels(Category::Classic).len(), 2);
        assert!(data.levels(Category::Platformer).is_empty());
    }

    #[test]
    fn test_shape_mismatch_is_parse_error() {
        let flat = r#"[{"name": "First"}]"#;
        assert!(matches!(
            parse_document(flat, DocumentShape::Categorized),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            parse_document(CATEGORIZED, DocumentShape::Flat),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_total_failure() {
        let truncated = &CATEGORIZED[..CATEGORIZED.len() / 2];
        assert!(matches!(
            parse_document(truncated, DocumentShape::Categorized),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_null_difficulty_loads() {
        let body = r#"{"classic": [{"name": "A", "difficulty": null}], "platformer": []}"#;
        let data = parse_document(body, DocumentShape::Categorized).unwrap();
        let level = &data.levels(Category::Classic)[0];
        assert_eq!(level.name, "A");
        assert_eq!(difficulty_class(&level.difficulty), "diff-unknown");
    }

    #[test]
    fn test_null_completions_loads() {
        let body = r#"{"classic": [], "platformer": [{"name": "B", "completions": null}]}"#;
        let data = parse_document(body, DocumentShape::Categorized).unwrap();
        assert!(data.levels(Category::Platformer)[0].completions.is_empty());
    }

    #[test]
    fn test_null_category_loads_empty() {
        let body = r#"{"classic": null, "platformer": [{"name": "C"}]}"#;
        let data = parse_document(body, DocumentShape::Categorized).unwrap();
        assert!(data.levels(Category::Classic).is_empty());
        assert_eq!(data.levels(Category::Platformer).len(), 1);
    }

    #[test]
    fn test_non_success_status() {
        let err = load_from_response(404, "Not Found", DocumentShape::Categorized).unwrap_err();
        assert_eq!(err, LoadError::Status { status: 404 });
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_success_status_parses_body() {
        let data = load_from_response(200, CATEGORIZED, DocumentShape::Categorized).unwrap();
        assert_eq!(data.total_levels(), 3);
    }
}
