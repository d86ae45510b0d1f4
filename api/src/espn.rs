//! ESPN site-API wire types for the NFL and their mapping into the shared
//! game model.
//!
//! The scoreboard lists events with competitor pairs; the summary endpoint
//! adds the boxscore statistics array and the drive log. ESPN sends scores
//! as strings and marks sides with a "homeAway" discriminator instead of
//! fixed home/away fields.

use crate::status::GameStatus;
use crate::{
    BoxScore, Game, HomeAway, League, LinePeriod, LineScore, LineTotals, LiveState, NflTeamStats,
    PlayByPlay, TeamStats, TeamTotals,
};
use serde::Deserialize;

// -- scoreboard -------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub venue: Option<EspnVenue>,
    #[serde(default)]
    pub broadcasts: Vec<EspnBroadcast>,
    #[serde(default)]
    pub attendance: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    #[serde(default)]
    pub home_away: String,
    #[serde(default)]
    pub team: Option<EspnTeam>,
    /// Score as a wire string, e.g. "24". Absent before kickoff.
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub records: Vec<EspnRecord>,
    #[serde(default)]
    pub linescores: Vec<EspnLinescore>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnTeam {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EspnRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EspnLinescore {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(rename = "displayValue", default)]
    pub display_value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatus {
    #[serde(rename = "type", default)]
    pub kind: Option<StatusType>,
    #[serde(default)]
    pub period: Option<u32>,
    #[serde(default)]
    pub display_clock: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "shortDetail", default)]
    pub short_detail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnVenue {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnBroadcast {
    #[serde(default)]
    pub market: Option<EspnMarket>,
    #[serde(default)]
    pub media: Option<EspnMedia>,
    #[serde(rename = "type", default)]
    pub kind: Option<EspnBroadcastType>,
    #[serde(default)]
    pub lang: Option<String>,
    // Scoreboard events also carry a flat variant with `names`.
    #[serde(default)]
    pub names: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EspnMarket {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnMedia {
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub call_letters: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnBroadcastType {
    #[serde(default)]
    pub short_name: Option<String>,
}

// -- summary ----------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[serde(default)]
    pub header: Option<SummaryHeader>,
    #[serde(default)]
    pub boxscore: Option<SummaryBoxscore>,
    #[serde(default)]
    pub drives: Option<Drives>,
    #[serde(default)]
    pub game_info: Option<SummaryGameInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryHeader {
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

impl SummaryHeader {
    fn competition(&self) -> Option<&Competition> {
        self.competition.as_ref().or_else(|| self.competitions.first())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryBoxscore {
    #[serde(default)]
    pub teams: Vec<BoxscoreSide>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxscoreSide {
    #[serde(default)]
    pub home_away: String,
    #[serde(default)]
    pub team: Option<EspnTeam>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub statistics: Vec<NamedStat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedStat {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Drives {
    #[serde(default)]
    pub previous: Vec<Drive>,
    #[serde(default)]
    pub current: Option<Drive>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drive {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub team: Option<EspnTeam>,
    #[serde(default)]
    pub plays: Vec<DrivePlay>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrivePlay {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub stat_yardage: Option<i32>,
    #[serde(default)]
    pub period: Option<PlayPeriod>,
    #[serde(default)]
    pub clock: Option<PlayClock>,
    #[serde(default)]
    pub start: Option<PlayStart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayPeriod {
    #[serde(default)]
    pub number: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayClock {
    #[serde(default)]
    pub display_value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayStart {
    #[serde(default)]
    pub down: Option<u32>,
    #[serde(default)]
    pub distance: Option<u32>,
    #[serde(default)]
    pub possession_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryGameInfo {
    #[serde(default)]
    pub venue: Option<EspnVenue>,
    #[serde(default)]
    pub attendance: Option<u32>,
    #[serde(default)]
    pub weather: Option<EspnWeather>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EspnWeather {
    #[serde(default)]
    pub temperature: Option<i32>,
    #[serde(default)]
    pub wind: Option<String>,
}

// -- mapping ----------------------------------------------------------------

fn find_side<'a>(competitors: &'a [Competitor], side: &str) -> Option<&'a Competitor> {
    competitors.iter().find(|c| c.home_away == side)
}

fn parse_score(competitor: Option<&Competitor>) -> Option<u32> {
    competitor
        .and_then(|c| c.score.as_deref())
        .and_then(|s| s.parse().ok())
}

fn team_name(competitor: Option<&Competitor>) -> String {
    competitor
        .and_then(|c| c.team.as_ref())
        .map(|t| t.display_name.clone())
        .unwrap_or_else(|| "TBD".to_string())
}

fn overall_record(competitor: Option<&Competitor>) -> Option<String> {
    competitor?
        .records
        .iter()
        .find(|r| r.name == "overall")
        .and_then(|r| r.summary.clone())
}

fn classify(status: Option<&EventStatus>) -> GameStatus {
    status
        .and_then(|s| s.kind.as_ref())
        .and_then(|k| k.name.as_deref())
        .map(|name| GameStatus::classify(name, League::Nfl))
        .unwrap_or_default()
}

/// "Q{n}" while the game is in a period; clock only while live.
fn progress_and_clock(status: Option<&EventStatus>, game_status: GameStatus) -> (Option<String>, Option<String>) {
    let progress = status
        .and_then(|s| s.period)
        .filter(|p| *p > 0)
        .map(|p| format!("Q{p}"));
    let clock = if game_status.is_live() {
        status.and_then(|s| s.display_clock.clone())
    } else {
        None
    };
    (progress, clock)
}

/// One scoreboard event into a skeleton `Game`.
pub fn map_event(wire: &Event) -> Game {
    let competition = wire.competitions.first();
    let competitors: &[Competitor] = competition.map(|c| c.competitors.as_slice()).unwrap_or(&[]);
    let home = find_side(competitors, "home");
    let away = find_side(competitors, "away");

    let status = classify(competition.and_then(|c| c.status.as_ref()));
    let (progress, clock) = progress_and_clock(competition.and_then(|c| c.status.as_ref()), status);

    Game {
        id: wire.id.clone(),
        league: Some(League::Nfl),
        home_team: team_name(home),
        away_team: team_name(away),
        home_score: parse_score(home),
        away_score: parse_score(away),
        status,
        progress,
        clock,
        start_time: wire
            .date
            .clone()
            .or_else(|| competition.and_then(|c| c.date.clone()))
            .unwrap_or_default(),
        venue: competition
            .and_then(|c| c.venue.as_ref())
            .and_then(|v| v.full_name.clone()),
        home_record: overall_record(home),
        away_record: overall_record(away),
        ..Game::default()
    }
}

/// The summary payload into a detailed `Game`. `None` when the header is
/// missing, which is how ESPN answers for an unknown event id.
pub fn map_summary(id: &str, wire: &SummaryResponse) -> Option<Game> {
    let competition = wire.header.as_ref().and_then(|h| h.competition())?;
    let home = find_side(&competition.competitors, "home");
    let away = find_side(&competition.competitors, "away");

    let status = classify(competition.status.as_ref());
    let (progress, clock) = progress_and_clock(competition.status.as_ref(), status);

    let home_score = parse_score(home);
    let away_score = parse_score(away);

    let line_score = map_line_score(home, away, home_score, away_score);
    let box_score = wire.boxscore.as_ref().and_then(map_nfl_box_score);
    let live = wire.drives.as_ref().and_then(map_drives);
    let last_play = live.as_ref().and_then(|l| l.current_play.clone());

    // Venue resolves header first, then game info.
    let venue = competition
        .venue
        .as_ref()
        .and_then(|v| v.full_name.clone())
        .or_else(|| {
            wire.game_info
                .as_ref()
                .and_then(|g| g.venue.as_ref())
                .and_then(|v| v.full_name.clone())
        });

    let weather = wire.game_info.as_ref().and_then(|g| g.weather.as_ref());

    Some(Game {
        id: id.to_string(),
        league: Some(League::Nfl),
        home_team: team_name(home),
        away_team: team_name(away),
        home_score,
        away_score,
        status,
        progress,
        clock,
        start_time: competition.date.clone().unwrap_or_default(),
        venue,
        home_record: overall_record(home),
        away_record: overall_record(away),
        weather: weather
            .and_then(|w| w.temperature)
            .map(|t| format!("{t}\u{b0}F")),
        temperature: weather
            .and_then(|w| w.temperature)
            .map(|t| format!("{t}\u{b0}F")),
        wind: weather.and_then(|w| w.wind.clone()),
        attendance: competition
            .attendance
            .or_else(|| wire.game_info.as_ref().and_then(|g| g.attendance)),
        probable_pitchers: None,
        line_score: Some(line_score),
        box_score,
        live,
        last_play,
    })
}

/// Quarter-by-quarter points. Always at least four quarters; a quarter a
/// side has not played yet reads as zero, matching the scoreboard widget.
fn map_line_score(
    home: Option<&Competitor>,
    away: Option<&Competitor>,
    home_score: Option<u32>,
    away_score: Option<u32>,
) -> LineScore {
    let home_lines = home.map(|c| c.linescores.as_slice()).unwrap_or(&[]);
    let away_lines = away.map(|c| c.linescores.as_slice()).unwrap_or(&[]);
    let count = home_lines.len().max(away_lines.len()).max(4);

    let period_value = |lines: &[EspnLinescore], i: usize| -> Option<u32> {
        lines.get(i).map(|l| {
            l.display_value
                .as_deref()
                .and_then(|v| v.parse().ok())
                .or_else(|| l.value.map(|v| v as u32))
                .unwrap_or(0)
        })
    };

    let quarters = (0..count)
        .map(|i| LinePeriod {
            home: Some(period_value(home_lines, i).unwrap_or(0)),
            away: Some(period_value(away_lines, i).unwrap_or(0)),
        })
        .collect();

    LineScore {
        innings: Vec::new(),
        quarters,
        totals: LineTotals {
            points: HomeAway {
                home: home_score,
                away: away_score,
            },
            ..LineTotals::default()
        },
    }
}

fn map_nfl_box_score(wire: &SummaryBoxscore) -> Option<BoxScore> {
    let home = wire.teams.iter().find(|t| t.home_away == "home")?;
    let away = wire.teams.iter().find(|t| t.home_away == "away")?;
    Some(BoxScore {
        home: map_nfl_team_stats(home),
        away: map_nfl_team_stats(away),
    })
}

fn stat_number(stats: &[NamedStat], name: &str) -> u32 {
    stats
        .iter()
        .find(|s| s.name == name)
        .and_then(|s| s.display_value.as_deref())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn stat_text(stats: &[NamedStat], name: &str, fallback: &str) -> String {
    stats
        .iter()
        .find(|s| s.name == name)
        .and_then(|s| s.display_value.clone())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn map_nfl_team_stats(wire: &BoxscoreSide) -> TeamStats {
    let stats = &wire.statistics;
    let total_yards = stat_number(stats, "totalYards");
    let turnovers = stat_number(stats, "turnovers");
    let penalty_yards = stat_number(stats, "penaltyYards");
    let points = wire
        .score
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    TeamStats {
        team_name: wire
            .team
            .as_ref()
            .map(|t| t.display_name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        batting_order: Vec::new(),
        pitchers: Vec::new(),
        // The shared totals reuse the baseball slots: points for runs,
        // total yards for hits, turnovers for errors, penalty yards for
        // left on base.
        totals: TeamTotals {
            runs: points,
            hits: total_yards,
            errors: turnovers,
            left_on_base: penalty_yards,
        },
        nfl_stats: Some(NflTeamStats {
            total_yards,
            passing_yards: stat_number(stats, "netPassingYards"),
            rushing_yards: stat_number(stats, "rushingYards"),
            turnovers,
            penalty_yards,
            time_of_possession: stat_text(stats, "possessionTime", "00:00"),
        }),
    }
}

/// Flattens previous drives plus the active one into a most-recent-last
/// play window.
fn map_drives(wire: &Drives) -> Option<LiveState> {
    if wire.previous.is_empty() && wire.current.is_none() {
        return None;
    }

    let mut plays: Vec<PlayByPlay> = Vec::new();
    let all = wire.previous.iter().chain(wire.current.iter());
    for drive in all {
        let team = drive
            .team
            .as_ref()
            .map(|t| t.display_name.clone());
        for play in &drive.plays {
            plays.push(PlayByPlay {
                quarter: play.period.as_ref().and_then(|p| p.number),
                clock: play.clock.as_ref().and_then(|c| c.display_value.clone()),
                down: play.start.as_ref().and_then(|s| s.down),
                distance: play.start.as_ref().and_then(|s| s.distance),
                yard_line: play.start.as_ref().and_then(|s| s.possession_text.clone()),
                half_inning: team.clone(),
                description: play
                    .text
                    .clone()
                    .unwrap_or_else(|| "No description".to_string()),
                result: play.stat_yardage.map(|y| format!("{y} yards")),
                ..PlayByPlay::default()
            });
        }
    }

    let current_play = wire
        .current
        .as_ref()
        .and_then(|d| d.plays.last())
        .or_else(|| wire.previous.last().and_then(|d| d.plays.last()))
        .and_then(|p| p.text.clone());

    let current_drive = wire
        .current
        .as_ref()
        .and_then(|d| d.description.clone());

    let start = plays.len().saturating_sub(10);
    Some(LiveState {
        plays: plays.split_off(start),
        current_play,
        inning_state: None,
        balls: None,
        strikes: None,
        outs: None,
        current_drive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(json: serde_json::Value) -> Event {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn scoreboard_event_maps_sides_by_discriminator() {
        let wire = event(serde_json::json!({
            "id": "401547401",
            "date": "2024-09-08T17:00Z",
            "competitions": [{
                "competitors": [
                    {
                        "homeAway": "away",
                        "team": { "displayName": "Dallas Cowboys" },
                        "score": "17",
                        "records": [{ "name": "overall", "summary": "1-0" }]
                    },
                    {
                        "homeAway": "home",
                        "team": { "displayName": "New York Giants" },
                        "score": "24",
                        "records": [{ "name": "overall", "summary": "0-1" }]
                    }
                ],
                "status": { "type": { "name": "STATUS_FINAL" }, "period": 4 },
                "venue": { "fullName": "MetLife Stadium" }
            }]
        }));
        let game = map_event(&wire);
        assert_eq!(game.home_team, "New York Giants");
        assert_eq!(game.away_team, "Dallas Cowboys");
        assert_eq!(game.home_score, Some(24));
        assert_eq!(game.away_score, Some(17));
        assert_eq!(game.status, GameStatus::Final);
        assert_eq!(game.progress.as_deref(), Some("Q4"));
        assert!(game.clock.is_none());
        assert_eq!(game.home_record.as_deref(), Some("0-1"));
        assert_eq!(game.venue.as_deref(), Some("MetLife Stadium"));
    }

    #[test]
    fn scheduled_event_has_no_scores() {
        let wire = event(serde_json::json!({
            "id": "401547402",
            "date": "2024-09-08T20:25Z",
            "competitions": [{
                "competitors": [
                    { "homeAway": "home", "team": { "displayName": "Denver Broncos" } },
                    { "homeAway": "away", "team": { "displayName": "Las Vegas Raiders" } }
                ],
                "status": { "type": { "name": "STATUS_SCHEDULED" }, "period": 0 }
            }]
        }));
        let game = map_event(&wire);
        assert_eq!(game.status, GameStatus::Scheduled);
        assert!(game.home_score.is_none());
        assert!(game.away_score.is_none());
        assert!(game.progress.is_none());
    }

    #[test]
    fn live_event_carries_clock() {
        let wire = event(serde_json::json!({
            "id": "1",
            "competitions": [{
                "competitors": [
                    { "homeAway": "home", "team": { "displayName": "Buffalo Bills" }, "score": "14" },
                    { "homeAway": "away", "team": { "displayName": "Miami Dolphins" }, "score": "10" }
                ],
                "status": {
                    "type": { "name": "STATUS_IN_PROGRESS" },
                    "period": 3,
                    "displayClock": "8:42"
                }
            }]
        }));
        let game = map_event(&wire);
        assert_eq!(game.status, GameStatus::Live);
        assert_eq!(game.progress.as_deref(), Some("Q3"));
        assert_eq!(game.clock.as_deref(), Some("8:42"));
    }

    #[test]
    fn summary_without_header_is_none() {
        let wire = SummaryResponse::default();
        assert!(map_summary("1", &wire).is_none());
    }

    #[test]
    fn line_score_pads_to_four_quarters() {
        let home: Competitor = serde_json::from_value(serde_json::json!({
            "homeAway": "home",
            "score": "10",
            "linescores": [ { "value": 3.0 }, { "value": 7.0 } ]
        }))
        .unwrap();
        let away: Competitor = serde_json::from_value(serde_json::json!({
            "homeAway": "away",
            "score": "0",
            "linescores": [ { "value": 0.0 } ]
        }))
        .unwrap();
        let line = map_line_score(Some(&home), Some(&away), Some(10), Some(0));
        assert_eq!(line.quarters.len(), 4);
        assert_eq!(line.quarters[0].home, Some(3));
        assert_eq!(line.quarters[1].home, Some(7));
        assert_eq!(line.quarters[2].home, Some(0));
        assert_eq!(line.quarters[0].away, Some(0));
        assert_eq!(line.totals.points.home, Some(10));
        assert!(line.innings.is_empty());
    }

    #[test]
    fn team_stats_scan_defaults_missing_to_zero() {
        let side: BoxscoreSide = serde_json::from_value(serde_json::json!({
            "homeAway": "home",
            "team": { "displayName": "Green Bay Packers" },
            "score": "27",
            "statistics": [
                { "name": "totalYards", "displayValue": "398" },
                { "name": "rushingYards", "displayValue": "142" },
                { "name": "possessionTime", "displayValue": "31:18" }
            ]
        }))
        .unwrap();
        let stats = map_nfl_team_stats(&side);
        let nfl = stats.nfl_stats.unwrap();
        assert_eq!(nfl.total_yards, 398);
        assert_eq!(nfl.rushing_yards, 142);
        assert_eq!(nfl.passing_yards, 0);
        assert_eq!(nfl.turnovers, 0);
        assert_eq!(nfl.time_of_possession, "31:18");
        assert_eq!(stats.totals.runs, 27);
        assert_eq!(stats.totals.hits, 398);
        assert!(stats.batting_order.is_empty());
        assert!(stats.pitchers.is_empty());
    }

    #[test]
    fn drives_flatten_most_recent_last() {
        let drives: Drives = serde_json::from_value(serde_json::json!({
            "previous": [
                {
                    "team": { "displayName": "Buffalo Bills" },
                    "plays": (0..8).map(|i| serde_json::json!({ "text": format!("old {i}") })).collect::<Vec<_>>()
                }
            ],
            "current": {
                "description": "5 plays, 42 yards",
                "team": { "displayName": "Miami Dolphins" },
                "plays": (0..5).map(|i| serde_json::json!({ "text": format!("new {i}") })).collect::<Vec<_>>()
            }
        }))
        .unwrap();
        let live = map_drives(&drives).unwrap();
        assert_eq!(live.plays.len(), 10);
        assert_eq!(live.plays[0].description, "old 3");
        assert_eq!(live.plays[9].description, "new 4");
        assert_eq!(live.current_play.as_deref(), Some("new 4"));
        assert_eq!(live.current_drive.as_deref(), Some("5 plays, 42 yards"));
    }

    #[test]
    fn empty_drives_is_none() {
        assert!(map_drives(&Drives::default()).is_none());
    }
}
