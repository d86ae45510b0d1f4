use crate::commands::parse_game_date;
use crate::config::Config;
use crate::data_provider::SportsDataProvider;
use crate::formatting::{format_header, format_start_time, BoxChars};
use anyhow::Result;
use gameday_api::{Game, League};

pub fn format_schedule(games: &[Game], config: &Config, league: League, date: &str) -> String {
    let chars = BoxChars::from_display(&config.display);
    let mut output = String::new();

    let title = format!("{} SCHEDULE - {}", league.id().to_uppercase(), date);
    output.push('\n');
    output.push_str(&format_header(&title, true, &chars));

    if games.is_empty() {
        output.push_str("No games scheduled for this date.\n");
        return output;
    }

    for game in games {
        output.push_str(&format_entry(game, config));
    }
    output
}

fn format_entry(game: &Game, config: &Config) -> String {
    let mut out = String::new();
    let time = format_start_time(&game.start_time, &config.time_format);
    out.push_str(&format!("{:>8}  {}\n", time, matchup_line(game)));

    if let Some(venue) = &game.venue {
        out.push_str(&format!("{:>8}  {}\n", "", venue));
    }
    if let Some(pitchers) = &game.probable_pitchers {
        if let Some(away) = &pitchers.away {
            out.push_str(&format!("{:>8}  {}\n", "", away));
        }
        if let Some(home) = &pitchers.home {
            out.push_str(&format!("{:>8}  {}\n", "", home));
        }
    }
    out
}

fn matchup_line(game: &Game) -> String {
    let away = match &game.away_record {
        Some(record) => format!("{} ({record})", game.away_team),
        None => game.away_team.clone(),
    };
    let home = match &game.home_record {
        Some(record) => format!("{} ({record})", game.home_team),
        None => game.home_team.clone(),
    };
    format!("{away} @ {home}")
}

pub async fn run(
    client: &dyn SportsDataProvider,
    config: &Config,
    league: League,
    date: Option<String>,
) -> Result<()> {
    let game_date = parse_game_date(date)?;
    let games = client.list_games(league, game_date).await;
    print!(
        "{}",
        format_schedule(&games, config, league, &game_date.to_string())
    );
    println!();
    Ok(())
}
