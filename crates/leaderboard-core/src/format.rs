//! Score formatting for the completions table

use crate::error::FormatError;
use crate::model::{Score, ScoreMode};

/// Shown in place of a time that cannot be formatted
pub const INVALID_TIME: &str = "Invalid time";

/// Shown in place of a percentage that cannot be formatted
pub const INVALID_SCORE: &str = "Invalid score";

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Format seconds as MM:SS.mmm, or HH:MM:SS.mmm from one hour up
pub fn format_time(seconds: f64) -> Result<String, FormatError> {
    if !seconds.is_finite() {
        return Err(FormatError::NotFinite);
    }
    if seconds < 0.0 {
        return Err(FormatError::Negative(seconds));
    }

    // Round once so 3661.001 does not come out as .000
    let total_ms = (seconds * 1000.0).round();
    if total_ms >= u64::MAX as f64 {
        return Err(FormatError::OutOfRange(seconds));
    }
    let total_ms = total_ms as u64;
    let hours = total_ms / MS_PER_HOUR;
    let mins = (total_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let secs = (total_ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = total_ms % MS_PER_SECOND;

    if hours > 0 {
        Ok(format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis))
    } else {
        Ok(format!("{:02}:{:02}.{:03}", mins, secs, millis))
    }
}

/// Format a completion percentage with the source precision
pub fn format_percent(percent: f64) -> Result<String, FormatError> {
    if !percent.is_finite() {
        return Err(FormatError::NotFinite);
    }
    Ok(format!("{}%", percent))
}

/// Format a score for display, falling back to a placeholder
pub fn format_score(score: &Score, mode: ScoreMode) -> String {
    let formatted = score.as_f64().and_then(|value| match mode {
        ScoreMode::Percent => format_percent(value),
        ScoreMode::Time => format_time(value),
    });

    formatted.unwrap_or_else(|_| match mode {
        ScoreMode::Percent => INVALID_SCORE.to_string(),
        ScoreMode::Time => INVALID_TIME.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_minutes() {
        assert_eq!(format_time(0.0).unwrap(), "00:00.000");
        assert_eq!(format_time(65.5).unwrap(), "01:05.500");
        assert_eq!(format_time(9.05).unwrap(), "00:09.050");
        assert_eq!(format_time(3599.999).unwrap(), "59:59.999");
    }

    #[test]
    fn test_format_time_hours() {
        assert_eq!(format_time(3661.001).unwrap(), "01:01:01.001");
        assert_eq!(format_time(3600.0).unwrap(), "01:00:00.000");
        assert_eq!(format_time(36000.25).unwrap(), "10:00:00.250");
    }

    #[test]
    fn test_format_time_rounds_up_into_next_unit() {
        assert_eq!(format_time(59.9996).unwrap(), "01:00.000");
    }

    #[test]
    fn test_format_time_rejects_bad_input() {
        assert_eq!(format_time(-1.0), Err(FormatError::Negative(-1.0)));
        assert_eq!(format_time(f64::NAN), Err(FormatError::NotFinite));
        assert_eq!(format_time(f64::INFINITY), Err(FormatError::NotFinite));
        assert_eq!(format_time(1e20), Err(FormatError::OutOfRange(1e20)));
        assert_eq!(format_score(&Score::from(1e20), ScoreMode::Time), INVALID_TIME);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(87.0).unwrap(), "87%");
        assert_eq!(format_percent(100.0).unwrap(), "100%");
        assert_eq!(format_percent(42.5).unwrap(), "42.5%");
    }

    #[test]
    fn test_format_score_by_mode() {
        assert_eq!(format_score(&Score::from(87_i64), ScoreMode::Percent), "87%");
        assert_eq!(format_score(&Score::from(65.5), ScoreMode::Time), "01:05.500");
        assert_eq!(format_score(&Score::from("65.5"), ScoreMode::Time), "01:05.500");
    }

    #[test]
    fn test_format_score_placeholder() {
        assert_eq!(format_score(&Score::from("soon"), ScoreMode::Time), INVALID_TIME);
        assert_eq!(format_score(&Score::default(), ScoreMode::Time), INVALID_TIME);
        assert_eq!(format_score(&Score::from(-3.0), ScoreMode::Time), INVALID_TIME);
        assert_eq!(format_score(&Score::from("soon"), ScoreMode::Percent), INVALID_SCORE);
    }
}
