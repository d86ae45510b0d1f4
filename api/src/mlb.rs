//! MLB StatsAPI wire types and their mapping into the shared game model.
//!
//! Two payloads matter: the schedule (one row per game, light) and the
//! live feed (linescore + boxscore + play-by-play, heavy). Everything on
//! the wire is optional; mapping fills in what exists and leaves the rest
//! absent rather than inventing zeros.

use crate::status::GameStatus;
use crate::{
    BatterLine, BoxScore, Game, HomeAway, League, LinePeriod, LineScore, LineTotals, LiveState,
    PitcherLine, PlayByPlay, ProbablePitchers, TeamStats, TeamTotals,
};
use serde::Deserialize;
use std::collections::BTreeMap;

// -- schedule ---------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGame {
    #[serde(rename = "gamePk")]
    pub game_pk: i64,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub status: MlbStatus,
    #[serde(default)]
    pub teams: Option<ScheduleTeams>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub broadcasts: Vec<MlbBroadcast>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlbStatus {
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub detailed_state: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleTeams {
    #[serde(default)]
    pub home: ScheduleSide,
    #[serde(default)]
    pub away: ScheduleSide,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSide {
    #[serde(default)]
    pub team: TeamRef,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub league_record: Option<TeamRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlbBroadcast {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub call_sign: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub is_national: Option<bool>,
}

// -- live feed --------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    #[serde(default)]
    pub game_data: Option<GameData>,
    #[serde(default)]
    pub live_data: Option<LiveData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    #[serde(default)]
    pub game: Option<GamePk>,
    #[serde(default)]
    pub status: MlbStatus,
    #[serde(default)]
    pub teams: Option<FeedTeams>,
    #[serde(default)]
    pub datetime: Option<FeedDatetime>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub probable_pitchers: Option<ProbablePitcherRefs>,
    #[serde(default)]
    pub game_info: Option<GameInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GamePk {
    #[serde(default)]
    pub pk: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedTeams {
    #[serde(default)]
    pub home: FeedTeam,
    #[serde(default)]
    pub away: FeedTeam,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedTeam {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub record: Option<TeamRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDatetime {
    #[serde(default)]
    pub date_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Weather {
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub temp: Option<String>,
    #[serde(default)]
    pub wind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbablePitcherRefs {
    #[serde(default)]
    pub home: Option<PitcherRef>,
    #[serde(default)]
    pub away: Option<PitcherRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitcherRef {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub stats: Vec<PitcherSeasonStats>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PitcherSeasonStats {
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub era: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameInfo {
    #[serde(default)]
    pub attendance: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LiveData {
    #[serde(default)]
    pub linescore: Option<Linescore>,
    #[serde(default)]
    pub boxscore: Option<Boxscore>,
    #[serde(default)]
    pub plays: Option<Plays>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    #[serde(default)]
    pub current_inning: Option<u32>,
    #[serde(default)]
    pub inning_state: Option<String>,
    #[serde(default)]
    pub is_top_inning: Option<bool>,
    #[serde(default)]
    pub balls: Option<u8>,
    #[serde(default)]
    pub strikes: Option<u8>,
    #[serde(default)]
    pub outs: Option<u8>,
    #[serde(default)]
    pub innings: Vec<LinescoreInning>,
    #[serde(default)]
    pub teams: Option<LinescoreTeams>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinescoreInning {
    #[serde(default)]
    pub home: InningSide,
    #[serde(default)]
    pub away: InningSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct InningSide {
    #[serde(default)]
    pub runs: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinescoreTeams {
    #[serde(default)]
    pub home: LinescoreTotals,
    #[serde(default)]
    pub away: LinescoreTotals,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinescoreTotals {
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub errors: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Boxscore {
    #[serde(default)]
    pub teams: Option<BoxscoreTeams>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoxscoreTeams {
    #[serde(default)]
    pub home: BoxscoreTeam,
    #[serde(default)]
    pub away: BoxscoreTeam,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxscoreTeam {
    // BTreeMap keeps player iteration deterministic; upstream keys are
    // "ID{player_id}".
    #[serde(default)]
    pub players: BTreeMap<String, BoxPlayer>,
    #[serde(default)]
    pub team_stats: Option<BoxTeamStats>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlayer {
    #[serde(default)]
    pub person: Option<Person>,
    #[serde(default)]
    pub position: Option<Position>,
    /// Lineup slot as the upstream sends it: "100" is the leadoff hitter,
    /// "101" a substitute in that slot.
    #[serde(default)]
    pub batting_order: Option<String>,
    #[serde(default)]
    pub stats: Option<PlayerStats>,
    #[serde(default)]
    pub season_stats: Option<PlayerStats>,
    #[serde(default)]
    pub game_status: Option<PlayerGameStatus>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub batting: Option<BattingStats>,
    #[serde(default)]
    pub pitching: Option<PitchingStats>,
    #[serde(default)]
    pub fielding: Option<FieldingStats>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingStats {
    #[serde(default)]
    pub at_bats: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub rbi: Option<u32>,
    #[serde(default)]
    pub base_on_balls: Option<u32>,
    #[serde(default)]
    pub strike_outs: Option<u32>,
    #[serde(default)]
    pub plate_appearances: Option<u32>,
    #[serde(default)]
    pub left_on_base: Option<u32>,
    #[serde(default)]
    pub avg: Option<String>,
    #[serde(default)]
    pub ops: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStats {
    #[serde(default)]
    pub innings_pitched: Option<String>,
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub earned_runs: Option<u32>,
    #[serde(default)]
    pub base_on_balls: Option<u32>,
    #[serde(default)]
    pub strike_outs: Option<u32>,
    #[serde(default)]
    pub home_runs: Option<u32>,
    #[serde(default)]
    pub number_of_pitches: Option<u32>,
    #[serde(default)]
    pub strikes: Option<u32>,
    #[serde(default)]
    pub era: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FieldingStats {
    #[serde(default)]
    pub errors: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameStatus {
    #[serde(default)]
    pub is_current_pitcher: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plays {
    #[serde(default)]
    pub all_plays: Vec<Play>,
    #[serde(default)]
    pub current_play: Option<Play>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Play {
    #[serde(default)]
    pub result: Option<PlayResult>,
    #[serde(default)]
    pub about: Option<PlayAbout>,
    #[serde(default)]
    pub count: Option<PlayCount>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResult {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayAbout {
    #[serde(default)]
    pub inning: Option<u32>,
    #[serde(default)]
    pub half_inning: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayCount {
    #[serde(default)]
    pub balls: Option<u8>,
    #[serde(default)]
    pub strikes: Option<u8>,
    #[serde(default)]
    pub outs: Option<u8>,
}

// -- mapping ----------------------------------------------------------------

/// "1" → "1st", "2" → "2nd", "11" → "11th". Teens always take "th".
pub fn ordinal(n: u32) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}

fn record_string(record: &Option<TeamRecord>) -> Option<String> {
    record
        .as_ref()
        .map(|r| format!("{}-{}", r.wins, r.losses))
}

fn classify(status: &MlbStatus) -> GameStatus {
    if let Some(code) = &status.status_code {
        let classified = GameStatus::classify(code, League::Mlb);
        if classified != GameStatus::Scheduled {
            return classified;
        }
    }
    match &status.detailed_state {
        Some(state) => GameStatus::classify(state, League::Mlb),
        None => GameStatus::Scheduled,
    }
}

/// One schedule row into a skeleton `Game` (no detail payloads).
pub fn map_schedule_game(wire: &ScheduleGame) -> Game {
    let status = classify(&wire.status);
    let (home, away) = match &wire.teams {
        Some(teams) => (&teams.home, &teams.away),
        None => {
            return Game {
                id: wire.game_pk.to_string(),
                league: Some(League::Mlb),
                status,
                start_time: wire.game_date.clone().unwrap_or_default(),
                ..Game::default()
            }
        }
    };

    // detailedState like "In Progress - Top 3rd Inning" doubles as a
    // progress label on the schedule payload.
    let progress = wire
        .status
        .detailed_state
        .as_ref()
        .filter(|state| state.contains("Inning"))
        .cloned();

    Game {
        id: wire.game_pk.to_string(),
        league: Some(League::Mlb),
        home_team: home.team.name.clone(),
        away_team: away.team.name.clone(),
        home_score: home.score,
        away_score: away.score,
        status,
        progress,
        start_time: wire.game_date.clone().unwrap_or_default(),
        venue: wire.venue.as_ref().and_then(|v| v.name.clone()),
        home_record: record_string(&home.league_record),
        away_record: record_string(&away.league_record),
        ..Game::default()
    }
}

/// The full live feed into a detailed `Game`. Returns `None` when the feed
/// carries no game data (upstream has no record of this id).
pub fn map_feed(id: &str, wire: &FeedResponse) -> Option<Game> {
    let data = wire.game_data.as_ref()?;
    let live = wire.live_data.as_ref();
    let linescore = live.and_then(|l| l.linescore.as_ref());

    let status = classify(&data.status);
    let (home, away) = match &data.teams {
        Some(teams) => (&teams.home, &teams.away),
        None => return None,
    };

    let totals = linescore.and_then(|l| l.teams.as_ref());
    let home_score = totals.and_then(|t| t.home.runs);
    let away_score = totals.and_then(|t| t.away.runs);

    let progress = match (linescore.and_then(|l| l.current_inning), status) {
        (Some(inning), GameStatus::Live) => {
            let half = if linescore.and_then(|l| l.is_top_inning).unwrap_or(false) {
                "Top"
            } else {
                "Bot"
            };
            Some(format!("{half} {}", ordinal(inning)))
        }
        _ => None,
    };

    let line_score = linescore.map(|l| LineScore {
        innings: l
            .innings
            .iter()
            .map(|inning| LinePeriod {
                home: inning.home.runs,
                away: inning.away.runs,
            })
            .collect(),
        quarters: Vec::new(),
        totals: LineTotals {
            runs: HomeAway {
                home: home_score,
                away: away_score,
            },
            hits: HomeAway {
                home: totals.and_then(|t| t.home.hits),
                away: totals.and_then(|t| t.away.hits),
            },
            errors: HomeAway {
                home: totals.and_then(|t| t.home.errors),
                away: totals.and_then(|t| t.away.errors),
            },
            points: HomeAway::default(),
        },
    });

    let box_score = live
        .and_then(|l| l.boxscore.as_ref())
        .and_then(|b| b.teams.as_ref())
        .map(|teams| BoxScore {
            home: map_team_stats(&teams.home, &home.name),
            away: map_team_stats(&teams.away, &away.name),
        });

    let plays = live.and_then(|l| l.plays.as_ref());
    let current_play = plays
        .and_then(|p| p.current_play.as_ref())
        .and_then(|p| p.result.as_ref())
        .and_then(|r| r.description.clone());

    let live_state = live.map(|l| LiveState {
        plays: plays.map(|p| map_plays(&p.all_plays)).unwrap_or_default(),
        current_play: current_play.clone(),
        inning_state: linescore.and_then(|ls| ls.inning_state.clone()),
        balls: linescore.and_then(|ls| ls.balls),
        strikes: linescore.and_then(|ls| ls.strikes),
        outs: linescore.and_then(|ls| ls.outs),
        current_drive: None,
    });

    Some(Game {
        id: data
            .game
            .as_ref()
            .map(|g| g.pk.to_string())
            .unwrap_or_else(|| id.to_string()),
        league: Some(League::Mlb),
        home_team: home.name.clone(),
        away_team: away.name.clone(),
        home_score,
        away_score,
        status,
        progress,
        clock: None,
        start_time: data
            .datetime
            .as_ref()
            .and_then(|d| d.date_time.clone())
            .unwrap_or_default(),
        venue: data.venue.as_ref().and_then(|v| v.name.clone()),
        home_record: record_string(&home.record),
        away_record: record_string(&away.record),
        weather: data.weather.as_ref().and_then(|w| w.condition.clone()),
        temperature: data
            .weather
            .as_ref()
            .and_then(|w| w.temp.as_ref())
            .map(|t| format!("{t}\u{b0}F")),
        wind: data.weather.as_ref().and_then(|w| w.wind.clone()),
        attendance: data.game_info.as_ref().and_then(|i| i.attendance),
        probable_pitchers: map_probable_pitchers(&data.probable_pitchers),
        line_score,
        box_score,
        live: live_state,
        last_play: current_play,
    })
}

fn map_probable_pitchers(refs: &Option<ProbablePitcherRefs>) -> Option<ProbablePitchers> {
    let refs = refs.as_ref()?;
    let mapped = ProbablePitchers {
        home: refs.home.as_ref().map(format_probable),
        away: refs.away.as_ref().map(format_probable),
    };
    if mapped.home.is_none() && mapped.away.is_none() {
        None
    } else {
        Some(mapped)
    }
}

/// "Name (W-L, ERA ERA)"; the stat suffix only when season stats exist.
fn format_probable(pitcher: &PitcherRef) -> String {
    match pitcher.stats.first() {
        Some(stats) => format!(
            "{} ({}-{}, {} ERA)",
            pitcher.full_name,
            stats.wins.unwrap_or(0),
            stats.losses.unwrap_or(0),
            stats.era.as_deref().unwrap_or("0.00"),
        ),
        None => pitcher.full_name.clone(),
    }
}

fn innings_pitched_value(pitching: &PitchingStats) -> f64 {
    pitching
        .innings_pitched
        .as_deref()
        .and_then(|ip| ip.parse::<f64>().ok())
        .unwrap_or(0.0)
}

pub fn map_team_stats(wire: &BoxscoreTeam, team_name: &str) -> TeamStats {
    let mut batters: Vec<BatterLine> = Vec::new();
    let mut pitchers: Vec<PitcherLine> = Vec::new();

    for player in wire.players.values() {
        let stats = match &player.stats {
            Some(stats) => stats,
            None => continue,
        };
        let season = player.season_stats.as_ref();

        if let Some(batting) = &stats.batting {
            let slot = player
                .batting_order
                .as_deref()
                .and_then(|s| s.parse::<u32>().ok());
            // Lineup members only: a slot, or an actual plate appearance.
            if slot.is_some() || batting.plate_appearances.unwrap_or(0) > 0 {
                let season_batting = season.and_then(|s| s.batting.as_ref());
                batters.push(BatterLine {
                    id: player
                        .person
                        .as_ref()
                        .and_then(|p| p.id)
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                    name: player
                        .person
                        .as_ref()
                        .map(|p| p.full_name.clone())
                        .unwrap_or_default(),
                    position: player
                        .position
                        .as_ref()
                        .and_then(|p| p.abbreviation.clone())
                        .unwrap_or_default(),
                    batting_order: slot,
                    at_bats: batting.at_bats.unwrap_or(0),
                    runs: batting.runs.unwrap_or(0),
                    hits: batting.hits.unwrap_or(0),
                    rbi: batting.rbi.unwrap_or(0),
                    base_on_balls: batting.base_on_balls.unwrap_or(0),
                    strike_outs: batting.strike_outs.unwrap_or(0),
                    avg: season_batting
                        .and_then(|b| b.avg.clone())
                        .unwrap_or_else(|| ".000".to_string()),
                    ops: season_batting
                        .and_then(|b| b.ops.clone())
                        .unwrap_or_else(|| ".000".to_string()),
                    plate_appearances: batting.plate_appearances.unwrap_or(0),
                });
            }
        }

        if let Some(pitching) = &stats.pitching {
            // Listed pitchers who never threw stay out of the table.
            if innings_pitched_value(pitching) > 0.0
                || pitching.number_of_pitches.unwrap_or(0) > 0
            {
                pitchers.push(PitcherLine {
                    id: player
                        .person
                        .as_ref()
                        .and_then(|p| p.id)
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                    name: player
                        .person
                        .as_ref()
                        .map(|p| p.full_name.clone())
                        .unwrap_or_default(),
                    innings_pitched: pitching
                        .innings_pitched
                        .clone()
                        .unwrap_or_else(|| "0.0".to_string()),
                    hits: pitching.hits.unwrap_or(0),
                    runs: pitching.runs.unwrap_or(0),
                    earned_runs: pitching.earned_runs.unwrap_or(0),
                    base_on_balls: pitching.base_on_balls.unwrap_or(0),
                    strike_outs: pitching.strike_outs.unwrap_or(0),
                    home_runs: pitching.home_runs.unwrap_or(0),
                    era: season
                        .and_then(|s| s.pitching.as_ref())
                        .and_then(|p| p.era.clone())
                        .unwrap_or_else(|| "0.00".to_string()),
                    pitches: pitching.number_of_pitches.unwrap_or(0),
                    strikes: pitching.strikes.unwrap_or(0),
                    is_current_pitcher: player
                        .game_status
                        .as_ref()
                        .and_then(|g| g.is_current_pitcher)
                        .unwrap_or(false),
                });
            }
        }
    }

    // Slotted players lead, in lineup order; slotless keep fetch order at
    // the end.
    batters.sort_by_key(|b| b.batting_order.unwrap_or(u32::MAX));

    let team_stats = wire.team_stats.as_ref();
    let team_batting = team_stats.and_then(|s| s.batting.as_ref());

    TeamStats {
        team_name: team_name.to_string(),
        batting_order: batters,
        pitchers,
        totals: TeamTotals {
            runs: team_batting.and_then(|b| b.runs).unwrap_or(0),
            hits: team_batting.and_then(|b| b.hits).unwrap_or(0),
            errors: team_stats
                .and_then(|s| s.fielding.as_ref())
                .and_then(|f| f.errors)
                .unwrap_or(0),
            left_on_base: team_batting.and_then(|b| b.left_on_base).unwrap_or(0),
        },
        nfl_stats: None,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BoxTeamStats {
    #[serde(default)]
    pub batting: Option<BattingStats>,
    #[serde(default)]
    pub fielding: Option<FieldingStats>,
}

/// Most recent ten plays, oldest first.
pub fn map_plays(plays: &[Play]) -> Vec<PlayByPlay> {
    let start = plays.len().saturating_sub(10);
    plays[start..]
        .iter()
        .map(|play| PlayByPlay {
            inning: play.about.as_ref().and_then(|a| a.inning),
            half_inning: play.about.as_ref().and_then(|a| a.half_inning.clone()),
            balls: play.count.as_ref().and_then(|c| c.balls),
            strikes: play.count.as_ref().and_then(|c| c.strikes),
            outs: play.count.as_ref().and_then(|c| c.outs),
            description: play
                .result
                .as_ref()
                .and_then(|r| r.description.clone())
                .unwrap_or_default(),
            result: play.result.as_ref().and_then(|r| r.kind.clone()),
            ..PlayByPlay::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(111), "111th");
    }

    #[test]
    fn schedule_game_without_scores_stays_none() {
        let wire: ScheduleGame = serde_json::from_value(serde_json::json!({
            "gamePk": 745804,
            "gameDate": "2024-09-01T17:05:00Z",
            "status": { "statusCode": "S", "detailedState": "Scheduled" },
            "teams": {
                "home": { "team": { "name": "Boston Red Sox" } },
                "away": { "team": { "name": "New York Yankees" } }
            }
        }))
        .unwrap();
        let game = map_schedule_game(&wire);
        assert_eq!(game.id, "745804");
        assert_eq!(game.status, GameStatus::Scheduled);
        assert!(game.home_score.is_none());
        assert!(game.away_score.is_none());
        assert!(game.progress.is_none());
    }

    #[test]
    fn schedule_game_final_with_scores_and_records() {
        let wire: ScheduleGame = serde_json::from_value(serde_json::json!({
            "gamePk": 745805,
            "gameDate": "2024-09-01T17:05:00Z",
            "status": { "statusCode": "F", "detailedState": "Final" },
            "teams": {
                "home": {
                    "team": { "name": "Boston Red Sox" },
                    "score": 7,
                    "leagueRecord": { "wins": 70, "losses": 66 }
                },
                "away": {
                    "team": { "name": "New York Yankees" },
                    "score": 4,
                    "leagueRecord": { "wins": 79, "losses": 57 }
                }
            },
            "venue": { "name": "Fenway Park" }
        }))
        .unwrap();
        let game = map_schedule_game(&wire);
        assert_eq!(game.status, GameStatus::Final);
        assert_eq!(game.home_score, Some(7));
        assert_eq!(game.away_score, Some(4));
        assert_eq!(game.home_record.as_deref(), Some("70-66"));
        assert_eq!(game.away_record.as_deref(), Some("79-57"));
        assert_eq!(game.venue.as_deref(), Some("Fenway Park"));
    }

    #[test]
    fn feed_without_game_data_is_none() {
        let wire = FeedResponse::default();
        assert!(map_feed("1", &wire).is_none());
    }

    #[test]
    fn live_feed_builds_progress_label() {
        let wire: FeedResponse = serde_json::from_value(serde_json::json!({
            "gameData": {
                "game": { "pk": 745806 },
                "status": { "statusCode": "I", "detailedState": "In Progress" },
                "teams": {
                    "home": { "name": "Chicago Cubs" },
                    "away": { "name": "Milwaukee Brewers" }
                }
            },
            "liveData": {
                "linescore": {
                    "currentInning": 11,
                    "isTopInning": true,
                    "balls": 2, "strikes": 1, "outs": 2,
                    "innings": [],
                    "teams": {
                        "home": { "runs": 3, "hits": 8, "errors": 0 },
                        "away": { "runs": 3, "hits": 7, "errors": 1 }
                    }
                }
            }
        }))
        .unwrap();
        let game = map_feed("745806", &wire).unwrap();
        assert_eq!(game.status, GameStatus::Live);
        assert_eq!(game.progress.as_deref(), Some("Top 11th"));
        assert_eq!(game.home_score, Some(3));
        let live = game.live.unwrap();
        assert_eq!(live.balls, Some(2));
        assert_eq!(live.outs, Some(2));
    }

    #[test]
    fn final_feed_has_no_progress_label() {
        let wire: FeedResponse = serde_json::from_value(serde_json::json!({
            "gameData": {
                "status": { "statusCode": "F" },
                "teams": {
                    "home": { "name": "Chicago Cubs" },
                    "away": { "name": "Milwaukee Brewers" }
                }
            },
            "liveData": {
                "linescore": { "currentInning": 9, "isTopInning": false }
            }
        }))
        .unwrap();
        let game = map_feed("1", &wire).unwrap();
        assert_eq!(game.status, GameStatus::Final);
        assert!(game.progress.is_none());
    }

    #[test]
    fn pitcher_without_work_is_filtered() {
        let wire: BoxscoreTeam = serde_json::from_value(serde_json::json!({
            "players": {
                "ID100": {
                    "person": { "id": 100, "fullName": "Ace Starter" },
                    "stats": { "pitching": { "inningsPitched": "6.1", "numberOfPitches": 88 } },
                    "seasonStats": { "pitching": { "era": "2.95" } }
                },
                "ID101": {
                    "person": { "id": 101, "fullName": "Unused Reliever" },
                    "stats": { "pitching": { "inningsPitched": "0.0", "numberOfPitches": 0 } }
                }
            }
        }))
        .unwrap();
        let stats = map_team_stats(&wire, "Boston Red Sox");
        assert_eq!(stats.pitchers.len(), 1);
        assert_eq!(stats.pitchers[0].name, "Ace Starter");
        assert_eq!(stats.pitchers[0].era, "2.95");
    }

    #[test]
    fn batting_order_sorts_by_lineup_slot() {
        let wire: BoxscoreTeam = serde_json::from_value(serde_json::json!({
            "players": {
                "ID200": {
                    "person": { "id": 200, "fullName": "Three Hitter" },
                    "battingOrder": "300",
                    "stats": { "batting": { "atBats": 4, "hits": 2, "plateAppearances": 4 } }
                },
                "ID201": {
                    "person": { "id": 201, "fullName": "Leadoff" },
                    "battingOrder": "100",
                    "stats": { "batting": { "atBats": 5, "hits": 1, "plateAppearances": 5 } }
                },
                "ID202": {
                    "person": { "id": 202, "fullName": "Pinch Hitter" },
                    "stats": { "batting": { "atBats": 1, "hits": 0, "plateAppearances": 1 } }
                },
                "ID203": {
                    "person": { "id": 203, "fullName": "Bench Bat" },
                    "stats": { "batting": { "atBats": 0, "plateAppearances": 0 } }
                }
            },
            "teamStats": {
                "batting": { "runs": 5, "hits": 11, "leftOnBase": 7 },
                "fielding": { "errors": 1 }
            }
        }))
        .unwrap();
        let stats = map_team_stats(&wire, "Chicago Cubs");
        let names: Vec<&str> = stats.batting_order.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Leadoff", "Three Hitter", "Pinch Hitter"]);
        assert_eq!(stats.totals.runs, 5);
        assert_eq!(stats.totals.left_on_base, 7);
        assert_eq!(stats.totals.errors, 1);
    }

    #[test]
    fn plays_window_keeps_last_ten() {
        let plays: Vec<Play> = (0..15)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "result": { "description": format!("play {i}"), "type": "atBat" },
                    "about": { "inning": 1, "halfInning": "top" },
                    "count": { "balls": 0, "strikes": 0, "outs": 0 }
                }))
                .unwrap()
            })
            .collect();
        let mapped = map_plays(&plays);
        assert_eq!(mapped.len(), 10);
        assert_eq!(mapped[0].description, "play 5");
        assert_eq!(mapped[9].description, "play 14");
    }

    #[test]
    fn probable_pitcher_stats_suffix_is_optional() {
        let with_stats = PitcherRef {
            full_name: "Ace Starter".into(),
            stats: vec![PitcherSeasonStats {
                wins: Some(12),
                losses: Some(4),
                era: Some("2.95".into()),
            }],
        };
        let without_stats = PitcherRef {
            full_name: "Debut Kid".into(),
            stats: vec![],
        };
        assert_eq!(format_probable(&with_stats), "Ace Starter (12-4, 2.95 ERA)");
        assert_eq!(format_probable(&without_stats), "Debut Kid");
    }
}
