pub mod boxscore;
pub mod broadcasts;
pub mod config;
pub mod schedule;
pub mod scores;

use anyhow::{Context, Result};
use gameday_api::GameDate;

/// Parse optional date string to GameDate, defaulting to today
///
/// Accepts dates in YYYY-MM-DD format. If no date is provided, returns today's date.
/// Returns an error if the date string is malformed.
pub fn parse_game_date(date: Option<String>) -> Result<GameDate> {
    if let Some(date_str) = date {
        GameDate::parse(&date_str)
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))
    } else {
        Ok(GameDate::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_date() {
        let date = parse_game_date(Some("2024-09-01".to_string())).unwrap();
        assert_eq!(date.to_string(), "2024-09-01");
    }

    #[test]
    fn none_defaults_to_today() {
        let date = parse_game_date(None).unwrap();
        assert_eq!(date, GameDate::today());
    }

    #[test]
    fn rejects_malformed_date() {
        let err = parse_game_date(Some("09/01/2024".to_string())).unwrap_err();
        assert!(err.to_string().contains("Invalid date format"));
    }
}
