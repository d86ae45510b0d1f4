/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app with fake data for debugging
///
/// The fixtures cover both leagues with games in all three states.
use gameday_api::{
    BatterLine, BoxScore, Broadcast, BroadcastKind, Game, GameDate, GameStatus, HomeAway, League,
    LinePeriod, LineScore, LineTotals, LiveState, NflTeamStats, PitcherLine, PlayByPlay,
    ProbablePitchers, TeamStats, TeamTotals,
};
use std::collections::HashMap;

/// Create mock games for a league, one per state
pub fn create_mock_games(league: League, date: GameDate) -> Vec<Game> {
    match league {
        League::Mlb => vec![
            create_mock_game(
                "745801",
                league,
                "New York Yankees",
                "Boston Red Sox",
                GameStatus::Scheduled,
                date,
            ),
            create_mock_game(
                "745802",
                league,
                "Los Angeles Dodgers",
                "San Diego Padres",
                GameStatus::Live,
                date,
            ),
            create_mock_game(
                "745803",
                league,
                "Chicago Cubs",
                "St. Louis Cardinals",
                GameStatus::Final,
                date,
            ),
        ],
        League::Nfl => vec![
            create_mock_game(
                "401671001",
                league,
                "Green Bay Packers",
                "Chicago Bears",
                GameStatus::Scheduled,
                date,
            ),
            create_mock_game(
                "401671002",
                league,
                "Kansas City Chiefs",
                "Buffalo Bills",
                GameStatus::Live,
                date,
            ),
            create_mock_game(
                "401671003",
                league,
                "Dallas Cowboys",
                "Philadelphia Eagles",
                GameStatus::Final,
                date,
            ),
        ],
    }
}

/// Helper to create a mock schedule-level game
fn create_mock_game(
    id: &str,
    league: League,
    away_team: &str,
    home_team: &str,
    status: GameStatus,
    date: GameDate,
) -> Game {
    let started = status != GameStatus::Scheduled;
    Game {
        id: id.to_string(),
        league: Some(league),
        away_team: away_team.to_string(),
        home_team: home_team.to_string(),
        away_score: started.then_some(2),
        home_score: started.then_some(3),
        status,
        progress: match (status, league) {
            (GameStatus::Live, League::Mlb) => Some("Bot 5th".to_string()),
            (GameStatus::Live, League::Nfl) => Some("Q2".to_string()),
            _ => None,
        },
        clock: match (status, league) {
            (GameStatus::Live, League::Nfl) => Some("3:12".to_string()),
            _ => None,
        },
        start_time: format!("{}T17:05:00+00:00", date),
        venue: Some("Fixture Park".to_string()),
        away_record: Some("79-57".to_string()),
        home_record: Some("70-66".to_string()),
        ..Game::default()
    }
}

/// Create mock full game detail, keyed by the fixture game ids
pub fn create_mock_game_detail(league: League, game_id: &str) -> Option<Game> {
    let date = GameDate::today();
    let mut game = create_mock_games(league, date)
        .into_iter()
        .find(|g| g.id == game_id)?;
    if game.status == GameStatus::Scheduled {
        game.probable_pitchers = (league == League::Mlb).then(|| ProbablePitchers {
            away: Some("Ace Starter (12-4, 2.95 ERA)".to_string()),
            home: Some("Crafty Lefty (9-8, 3.78 ERA)".to_string()),
        });
        return Some(game);
    }

    game.line_score = Some(create_mock_line_score(league));
    game.box_score = Some(BoxScore {
        away: create_mock_team_stats(&game.away_team, league),
        home: create_mock_team_stats(&game.home_team, league),
    });
    if game.status == GameStatus::Live {
        game.live = Some(create_mock_live_state(league));
        game.last_play = Some(match league {
            League::Mlb => "Single to center field.".to_string(),
            League::Nfl => "Pass complete for 12 yards.".to_string(),
        });
    }
    game.attendance = Some(36412);
    game.weather = Some("Partly Cloudy".to_string());
    game.temperature = Some("72\u{b0}F".to_string());
    game.wind = Some("8 mph, Out To CF".to_string());
    Some(game)
}

fn create_mock_line_score(league: League) -> LineScore {
    match league {
        League::Mlb => LineScore {
            innings: (0..5)
                .map(|i| LinePeriod {
                    away: Some(u32::from(i == 1)),
                    home: Some(u32::from(i == 2 || i == 4)),
                })
                .collect(),
            totals: LineTotals {
                runs: HomeAway {
                    home: Some(3),
                    away: Some(2),
                },
                hits: HomeAway {
                    home: Some(7),
                    away: Some(5),
                },
                errors: HomeAway {
                    home: Some(0),
                    away: Some(1),
                },
                ..LineTotals::default()
            },
            ..LineScore::default()
        },
        League::Nfl => LineScore {
            quarters: vec![
                LinePeriod {
                    away: Some(0),
                    home: Some(7),
                },
                LinePeriod {
                    away: Some(3),
                    home: Some(0),
                },
                LinePeriod {
                    away: Some(7),
                    home: Some(7),
                },
                LinePeriod {
                    away: Some(7),
                    home: Some(3),
                },
            ],
            totals: LineTotals {
                points: HomeAway {
                    home: Some(17),
                    away: Some(17),
                },
                ..LineTotals::default()
            },
            ..LineScore::default()
        },
    }
}

fn create_mock_team_stats(team_name: &str, league: League) -> TeamStats {
    match league {
        League::Mlb => TeamStats {
            team_name: team_name.to_string(),
            batting_order: vec![
                BatterLine {
                    id: "660271".to_string(),
                    name: "Leadoff Hitter".to_string(),
                    position: "CF".to_string(),
                    batting_order: Some(100),
                    at_bats: 4,
                    runs: 1,
                    hits: 2,
                    rbi: 0,
                    base_on_balls: 0,
                    strike_outs: 1,
                    avg: ".302".to_string(),
                    ops: ".850".to_string(),
                    plate_appearances: 4,
                },
                BatterLine {
                    id: "660272".to_string(),
                    name: "Cleanup Hitter".to_string(),
                    position: "1B".to_string(),
                    batting_order: Some(400),
                    at_bats: 3,
                    runs: 1,
                    hits: 1,
                    rbi: 2,
                    base_on_balls: 1,
                    strike_outs: 0,
                    avg: ".281".to_string(),
                    ops: ".912".to_string(),
                    plate_appearances: 4,
                },
            ],
            pitchers: vec![PitcherLine {
                id: "660300".to_string(),
                name: "Ace Starter".to_string(),
                innings_pitched: "5.0".to_string(),
                hits: 5,
                runs: 2,
                earned_runs: 2,
                base_on_balls: 1,
                strike_outs: 6,
                home_runs: 1,
                era: "2.95".to_string(),
                pitches: 82,
                strikes: 55,
                is_current_pitcher: true,
            }],
            totals: TeamTotals {
                runs: 3,
                hits: 7,
                errors: 0,
                left_on_base: 5,
            },
            nfl_stats: None,
        },
        League::Nfl => TeamStats {
            team_name: team_name.to_string(),
            totals: TeamTotals {
                runs: 17,
                hits: 398,
                errors: 1,
                left_on_base: 45,
            },
            nfl_stats: Some(NflTeamStats {
                total_yards: 398,
                passing_yards: 256,
                rushing_yards: 142,
                turnovers: 1,
                penalty_yards: 45,
                time_of_possession: "31:18".to_string(),
            }),
            ..TeamStats::default()
        },
    }
}

fn create_mock_live_state(league: League) -> LiveState {
    match league {
        League::Mlb => LiveState {
            plays: vec![
                PlayByPlay {
                    inning: Some(5),
                    half_inning: Some("bottom".to_string()),
                    description: "Groundout to shortstop.".to_string(),
                    ..PlayByPlay::default()
                },
                PlayByPlay {
                    inning: Some(5),
                    half_inning: Some("bottom".to_string()),
                    description: "Single to center field.".to_string(),
                    ..PlayByPlay::default()
                },
            ],
            current_play: Some("Single to center field.".to_string()),
            inning_state: Some("Bottom".to_string()),
            balls: Some(2),
            strikes: Some(1),
            outs: Some(1),
            current_drive: None,
        },
        League::Nfl => LiveState {
            plays: vec![PlayByPlay {
                quarter: Some(2),
                clock: Some("3:12".to_string()),
                down: Some(2),
                distance: Some(7),
                half_inning: Some("Kansas City Chiefs".to_string()),
                description: "Pass complete for 12 yards.".to_string(),
                ..PlayByPlay::default()
            }],
            current_play: Some("Pass complete for 12 yards.".to_string()),
            current_drive: Some("7 plays, 58 yards, 3:44".to_string()),
            ..LiveState::default()
        },
    }
}

/// Create mock broadcast listings keyed by game id
pub fn create_mock_broadcasts(league: League, date: GameDate) -> HashMap<String, Vec<Broadcast>> {
    create_mock_games(league, date)
        .into_iter()
        .map(|game| {
            let listings = vec![
                Broadcast {
                    name: "FOX".to_string(),
                    call_sign: Some("FOX".to_string()),
                    kind: BroadcastKind::Tv,
                    language: Some("en".to_string()),
                    national: true,
                    market: Some("national".to_string()),
                },
                Broadcast {
                    name: "Home Radio".to_string(),
                    call_sign: Some("WFXT".to_string()),
                    kind: BroadcastKind::Am,
                    language: Some("en".to_string()),
                    national: false,
                    market: Some("home".to_string()),
                },
            ];
            (game.id, listings)
        })
        .collect()
}
