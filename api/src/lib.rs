pub mod broadcast;
pub mod client;
pub mod espn;
pub mod mlb;
pub mod status;
pub mod teams;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use broadcast::{Broadcast, BroadcastKind};
pub use client::{ApiError, ApiResult, Client};
pub use status::GameStatus;

// ---------------------------------------------------------------------------
// League registry
// ---------------------------------------------------------------------------

/// Supported leagues. Adding a league means adding a variant here; every
/// `match` over `League` is exhaustive, so the compiler points at every
/// dispatch site that needs a new arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Mlb,
    Nfl,
}

impl League {
    pub const ALL: [League; 2] = [League::Mlb, League::Nfl];

    pub fn id(&self) -> &'static str {
        match self {
            League::Mlb => "mlb",
            League::Nfl => "nfl",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            League::Mlb => "Major League Baseball",
            League::Nfl => "National Football League",
        }
    }

    /// Base URL of the league's upstream API.
    pub fn api_base(&self) -> &'static str {
        match self {
            League::Mlb => "https://statsapi.mlb.com/api/v1",
            League::Nfl => "https://site.api.espn.com/apis/site/v2/sports/football/nfl",
        }
    }

    /// Directory prefix for team logo assets.
    pub fn logo_path(&self) -> &'static str {
        match self {
            League::Mlb => "/logos/mlb",
            League::Nfl => "/logos/nfl",
        }
    }

    /// Logo shown when a team has no entry in the identity tables.
    pub fn default_logo(&self) -> &'static str {
        match self {
            League::Mlb => "/logos/mlb/MLB.png",
            League::Nfl => "/logos/nfl/NFL.png",
        }
    }

    /// (primary, secondary) theme colors as hex strings.
    pub fn theme_colors(&self) -> (&'static str, &'static str) {
        match self {
            League::Mlb => ("#041E42", "#C41E3A"),
            League::Nfl => ("#013369", "#D50A0A"),
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for League {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mlb" => Ok(League::Mlb),
            "nfl" => Ok(League::Nfl),
            other => Err(format!("unknown league: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// A calendar date as understood by the schedule endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    pub fn today() -> Self {
        GameDate(chrono::Local::now().date_naive())
    }

    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(GameDate)
    }

    /// Format used by MLB StatsAPI query strings (YYYY-MM-DD).
    pub fn as_mlb_param(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Format used by ESPN scoreboard query strings (YYYYMMDD).
    pub fn as_espn_param(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    pub fn add_days(&self, days: i64) -> Self {
        GameDate(self.0 + chrono::Duration::days(days))
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ---------------------------------------------------------------------------
// Shared game model — clean domain types, independent of either wire format
// ---------------------------------------------------------------------------

/// The canonical per-contest record. Both normalizers produce this shape;
/// fields that only one sport populates stay `None` for the other
/// (absence, never zero).
#[derive(Debug, Clone, Default)]
pub struct Game {
    pub id: String,
    pub league: Option<League>,
    /// Canonical display names as returned by the upstream API — the join
    /// key into the team identity tables.
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: GameStatus,
    /// League-specific progress label: "Bot 7th" for MLB, "Q3" for NFL.
    pub progress: Option<String>,
    /// Display clock, NFL only.
    pub clock: Option<String>,
    /// ISO-8601 start timestamp as the upstream sent it.
    pub start_time: String,
    pub venue: Option<String>,
    pub home_record: Option<String>,
    pub away_record: Option<String>,
    pub weather: Option<String>,
    pub temperature: Option<String>,
    pub wind: Option<String>,
    pub attendance: Option<u32>,
    pub probable_pitchers: Option<ProbablePitchers>,
    pub line_score: Option<LineScore>,
    pub box_score: Option<BoxScore>,
    pub live: Option<LiveState>,
    pub last_play: Option<String>,
}

impl Game {
    pub fn has_started(&self) -> bool {
        matches!(self.status, GameStatus::Live | GameStatus::Final)
    }
}

/// Probable starting pitchers, MLB only. Strings carry an appended
/// "(W-L, ERA ERA)" summary when season stats were present upstream.
#[derive(Debug, Clone, Default)]
pub struct ProbablePitchers {
    pub home: Option<String>,
    pub away: Option<String>,
}

/// Period-by-period scoring. MLB fills `innings` and the runs/hits/errors
/// totals; NFL fills `quarters` and the points totals.
#[derive(Debug, Clone, Default)]
pub struct LineScore {
    pub innings: Vec<LinePeriod>,
    pub quarters: Vec<LinePeriod>,
    pub totals: LineTotals,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinePeriod {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineTotals {
    pub runs: HomeAway,
    pub hits: HomeAway,
    pub errors: HomeAway,
    pub points: HomeAway,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HomeAway {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct BoxScore {
    pub home: TeamStats,
    pub away: TeamStats,
}

/// Team-level aggregate for one game. The batting and pitching tables are
/// empty for NFL teams, which instead carry the `nfl_stats` block.
#[derive(Debug, Clone, Default)]
pub struct TeamStats {
    pub team_name: String,
    pub batting_order: Vec<BatterLine>,
    pub pitchers: Vec<PitcherLine>,
    pub totals: TeamTotals,
    pub nfl_stats: Option<NflTeamStats>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TeamTotals {
    pub runs: u32,
    pub hits: u32,
    pub errors: u32,
    pub left_on_base: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BatterLine {
    pub id: String,
    pub name: String,
    pub position: String,
    pub batting_order: Option<u32>,
    pub at_bats: u32,
    pub runs: u32,
    pub hits: u32,
    pub rbi: u32,
    pub base_on_balls: u32,
    pub strike_outs: u32,
    pub avg: String,
    pub ops: String,
    pub plate_appearances: u32,
}

#[derive(Debug, Clone, Default)]
pub struct PitcherLine {
    pub id: String,
    pub name: String,
    pub innings_pitched: String,
    pub hits: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub base_on_balls: u32,
    pub strike_outs: u32,
    pub home_runs: u32,
    pub era: String,
    pub pitches: u32,
    pub strikes: u32,
    pub is_current_pitcher: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NflTeamStats {
    pub total_yards: u32,
    pub passing_yards: u32,
    pub rushing_yards: u32,
    pub turnovers: u32,
    pub penalty_yards: u32,
    pub time_of_possession: String,
}

/// Recent play history plus the live counters relevant to the sport.
#[derive(Debug, Clone, Default)]
pub struct LiveState {
    pub plays: Vec<PlayByPlay>,
    pub current_play: Option<String>,
    /// "Top" / "Bottom", MLB only.
    pub inning_state: Option<String>,
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    pub outs: Option<u8>,
    /// Text of the active drive, NFL only.
    pub current_drive: Option<String>,
}

/// One discrete event. A union of the baseball and football vocabularies;
/// only the fields of the originating sport are populated.
#[derive(Debug, Clone, Default)]
pub struct PlayByPlay {
    pub inning: Option<u32>,
    pub half_inning: Option<String>,
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    pub outs: Option<u8>,
    pub quarter: Option<u32>,
    pub clock: Option<String>,
    pub down: Option<u32>,
    pub distance: Option<u32>,
    pub yard_line: Option<String>,
    pub description: String,
    pub result: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_round_trips_through_id() {
        for league in League::ALL {
            assert_eq!(league.id().parse::<League>().unwrap(), league);
        }
    }

    #[test]
    fn league_parse_is_case_insensitive() {
        assert_eq!("MLB".parse::<League>().unwrap(), League::Mlb);
        assert_eq!("Nfl".parse::<League>().unwrap(), League::Nfl);
        assert!("xfl".parse::<League>().is_err());
    }

    #[test]
    fn league_deserializes_from_lowercase_string() {
        let league: League = serde_json::from_str("\"nfl\"").unwrap();
        assert_eq!(league, League::Nfl);
    }

    #[test]
    fn game_date_params() {
        let date = GameDate::parse("2024-09-01").unwrap();
        assert_eq!(date.as_mlb_param(), "2024-09-01");
        assert_eq!(date.as_espn_param(), "20240901");
        assert_eq!(date.to_string(), "2024-09-01");
    }

    #[test]
    fn game_date_add_days_crosses_month() {
        let date = GameDate::parse("2024-08-31").unwrap();
        assert_eq!(date.add_days(1).to_string(), "2024-09-01");
        assert_eq!(date.add_days(-1).to_string(), "2024-08-30");
    }

    #[test]
    fn default_game_has_no_scores() {
        let game = Game::default();
        assert!(game.home_score.is_none());
        assert!(game.away_score.is_none());
        assert_eq!(game.status, GameStatus::Scheduled);
        assert!(!game.has_started());
    }
}
