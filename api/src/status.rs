//! Game status classification.
//!
//! Each upstream speaks its own status vocabulary: MLB StatsAPI uses short
//! status codes plus a free-text detailed state, ESPN uses status-type
//! names. `classify` folds both into the three states the rest of the
//! system cares about. Unknown input means Scheduled, never a panic.

use crate::League;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Scheduled,
    Live,
    Final,
}

/// MLB abstract/coded game states that mean the game is underway.
/// I = in progress, IR/IT/IH = delays and resumptions, IP/IS/IW/ID =
/// suspension variants still counted as live, MA = manager challenge,
/// PO = pitching change.
const MLB_LIVE_CODES: [&str; 10] = ["I", "IR", "IT", "IH", "IP", "IS", "IW", "ID", "MA", "PO"];

/// F = final, FT = final tied, FR = final rain, FG = forfeit, O = game over,
/// C = completed early.
const MLB_FINAL_CODES: [&str; 6] = ["F", "FT", "FR", "FG", "O", "C"];

impl GameStatus {
    /// Classify a raw upstream status string for the given league.
    ///
    /// For MLB pass either the status code ("I", "F") or the detailed state
    /// ("In Progress", "Final"); codes are checked first, then substrings.
    /// For NFL pass the ESPN status-type name ("STATUS_FINAL").
    pub fn classify(raw: &str, league: League) -> GameStatus {
        match league {
            League::Mlb => Self::classify_mlb(raw),
            League::Nfl => Self::classify_nfl(raw),
        }
    }

    fn classify_mlb(raw: &str) -> GameStatus {
        if MLB_LIVE_CODES.contains(&raw) {
            return GameStatus::Live;
        }
        if MLB_FINAL_CODES.contains(&raw) {
            return GameStatus::Final;
        }
        let upper = raw.to_uppercase();
        if upper.contains("LIVE") || upper.contains("INNING") {
            GameStatus::Live
        } else if upper.contains("FINAL") || upper.contains("GAME OVER") {
            GameStatus::Final
        } else {
            GameStatus::Scheduled
        }
    }

    fn classify_nfl(raw: &str) -> GameStatus {
        let lower = raw.to_lowercase();
        // "final" wins over "progress": ESPN has used names carrying both.
        if lower.contains("final") {
            GameStatus::Final
        } else if lower.contains("progress") || lower.contains("live") {
            GameStatus::Live
        } else {
            GameStatus::Scheduled
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, GameStatus::Live)
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameStatus::Final)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Live => "live",
            GameStatus::Final => "final",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mlb_live_codes() {
        for code in ["I", "IR", "IT", "IH", "IP", "IS", "IW", "ID", "MA", "PO"] {
            assert_eq!(
                GameStatus::classify(code, League::Mlb),
                GameStatus::Live,
                "code {code}"
            );
        }
    }

    #[test]
    fn mlb_final_codes() {
        for code in ["F", "FT", "FR", "FG", "O", "C"] {
            assert_eq!(
                GameStatus::classify(code, League::Mlb),
                GameStatus::Final,
                "code {code}"
            );
        }
    }

    #[test]
    fn mlb_detailed_state_substrings() {
        assert_eq!(
            GameStatus::classify("In Progress - Top 3rd Inning", League::Mlb),
            GameStatus::Live
        );
        assert_eq!(
            GameStatus::classify("Live", League::Mlb),
            GameStatus::Live
        );
        assert_eq!(
            GameStatus::classify("Final: Tied", League::Mlb),
            GameStatus::Final
        );
        assert_eq!(
            GameStatus::classify("Game Over", League::Mlb),
            GameStatus::Final
        );
    }

    #[test]
    fn mlb_unknown_is_scheduled() {
        assert_eq!(
            GameStatus::classify("Warmup", League::Mlb),
            GameStatus::Scheduled
        );
        assert_eq!(GameStatus::classify("S", League::Mlb), GameStatus::Scheduled);
        assert_eq!(GameStatus::classify("", League::Mlb), GameStatus::Scheduled);
    }

    #[test]
    fn nfl_status_names() {
        assert_eq!(
            GameStatus::classify("STATUS_FINAL", League::Nfl),
            GameStatus::Final
        );
        assert_eq!(
            GameStatus::classify("STATUS_IN_PROGRESS", League::Nfl),
            GameStatus::Live
        );
        assert_eq!(
            GameStatus::classify("STATUS_SCHEDULED", League::Nfl),
            GameStatus::Scheduled
        );
        assert_eq!(
            GameStatus::classify("STATUS_HALFTIME", League::Nfl),
            GameStatus::Scheduled
        );
    }

    #[test]
    fn nfl_final_wins_over_progress() {
        assert_eq!(
            GameStatus::classify("final_in_progress", League::Nfl),
            GameStatus::Final
        );
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(GameStatus::Live.to_string(), "live");
        assert_eq!(GameStatus::Final.to_string(), "final");
        assert_eq!(GameStatus::Scheduled.to_string(), "scheduled");
    }
}
