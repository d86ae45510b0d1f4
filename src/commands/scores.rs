use crate::commands::parse_game_date;
use crate::config::Config;
use crate::data_provider::SportsDataProvider;
use crate::formatting::{build_score_table, format_header, format_start_time, BoxChars, ScoreRow};
use anyhow::Result;
use gameday_api::{teams, Game, GameStatus, League, LineScore};

pub async fn run(
    client: &dyn SportsDataProvider,
    config: &Config,
    league: League,
    date: Option<String>,
) -> Result<()> {
    let game_date = parse_game_date(date)?;
    let chars = BoxChars::from_display(&config.display);

    let games = client.list_games(league, game_date).await;

    let title = format!(
        "{} SCORES - {}",
        league.id().to_uppercase(),
        game_date
    );
    println!("\n{}", format_header(&title, true, &chars));

    if games.is_empty() {
        println!("No games scheduled for this date.\n");
        return Ok(());
    }

    for (i, game) in games.iter().enumerate() {
        if i > 0 {
            println!();
        }
        // The schedule row alone has no period breakdown; fetch detail for
        // games that have started.
        let detail = if game.has_started() {
            client.game_detail(league, &game.id).await
        } else {
            None
        };
        display_game(detail.as_ref().unwrap_or(game), config, &chars);
    }

    println!();
    Ok(())
}

fn display_game(game: &Game, config: &Config, chars: &BoxChars) {
    let league = game.league.unwrap_or(League::Mlb);
    let away = teams::abbreviate(&game.away_team, league);
    let home = teams::abbreviate(&game.home_team, league);

    println!("{}", status_line(game, config));

    if game.has_started() {
        let (labels, away_periods, home_periods) =
            period_columns(game.line_score.as_ref(), league);
        println!(
            "{}",
            build_score_table(
                &labels,
                &ScoreRow {
                    abbrev: away,
                    periods: away_periods,
                    total: game.away_score,
                },
                &ScoreRow {
                    abbrev: home,
                    periods: home_periods,
                    total: game.home_score,
                },
                chars,
            )
        );
        if let Some(last_play) = &game.last_play {
            println!("  {last_play}");
        }
    } else {
        println!("  {} @ {}", game.away_team, game.home_team);
        if let Some(venue) = &game.venue {
            println!("  {venue}");
        }
    }
}

fn status_line(game: &Game, config: &Config) -> String {
    match game.status {
        GameStatus::Final => "Final".to_string(),
        GameStatus::Live => {
            let progress = game.progress.as_deref().unwrap_or("In Progress");
            match &game.clock {
                Some(clock) => format!("{progress} - {clock}"),
                None => progress.to_string(),
            }
        }
        GameStatus::Scheduled => format_start_time(&game.start_time, &config.time_format),
    }
}

/// Period columns for the score table: inning runs for MLB, quarter points
/// for NFL. A started game with no line score yet shows the regulation
/// count of dashes.
fn period_columns(
    line_score: Option<&LineScore>,
    league: League,
) -> (Vec<String>, Vec<Option<u32>>, Vec<Option<u32>>) {
    let regulation = match league {
        League::Mlb => 9,
        League::Nfl => 4,
    };
    let periods = match line_score {
        Some(line) => match league {
            League::Mlb => &line.innings,
            League::Nfl => &line.quarters,
        },
        None => return (labels(regulation), vec![None; regulation], vec![None; regulation]),
    };
    let count = periods.len().max(regulation);
    let mut away = vec![None; count];
    let mut home = vec![None; count];
    for (i, period) in periods.iter().enumerate() {
        away[i] = period.away;
        home[i] = period.home;
    }
    (labels(count), away, home)
}

fn labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| i.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameday_api::LinePeriod;

    fn line(periods: Vec<(Option<u32>, Option<u32>)>, quarters: bool) -> LineScore {
        let mapped: Vec<LinePeriod> = periods
            .into_iter()
            .map(|(away, home)| LinePeriod { home, away })
            .collect();
        if quarters {
            LineScore {
                quarters: mapped,
                ..LineScore::default()
            }
        } else {
            LineScore {
                innings: mapped,
                ..LineScore::default()
            }
        }
    }

    #[test]
    fn mlb_pads_to_nine_innings() {
        let line = line(vec![(Some(1), Some(0)), (Some(0), Some(2))], false);
        let (labels, away, home) = period_columns(Some(&line), League::Mlb);
        assert_eq!(labels.len(), 9);
        assert_eq!(away[0], Some(1));
        assert_eq!(home[1], Some(2));
        assert_eq!(away[8], None);
    }

    #[test]
    fn extra_innings_extend_the_table() {
        let innings = (0..11).map(|_| (Some(0), Some(0))).collect();
        let line = line(innings, false);
        let (labels, away, _) = period_columns(Some(&line), League::Mlb);
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[10], "11");
        assert_eq!(away.len(), 11);
    }

    #[test]
    fn nfl_uses_quarters() {
        let line = line(vec![(Some(7), Some(0)); 4], true);
        let (labels, away, _) = period_columns(Some(&line), League::Nfl);
        assert_eq!(labels.len(), 4);
        assert_eq!(away[3], Some(7));
    }

    #[test]
    fn no_line_score_gives_dashes() {
        let (labels, away, home) = period_columns(None, League::Nfl);
        assert_eq!(labels.len(), 4);
        assert!(away.iter().all(Option::is_none));
        assert!(home.iter().all(Option::is_none));
    }

    #[test]
    fn live_status_line_includes_clock() {
        let game = Game {
            status: GameStatus::Live,
            progress: Some("Q3".to_string()),
            clock: Some("8:42".to_string()),
            ..Game::default()
        };
        assert_eq!(status_line(&game, &Config::default()), "Q3 - 8:42");
    }

    #[test]
    fn final_status_line() {
        let game = Game {
            status: GameStatus::Final,
            ..Game::default()
        };
        assert_eq!(status_line(&game, &Config::default()), "Final");
    }
}
