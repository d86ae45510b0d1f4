use crate::commands::parse_game_date;
use crate::config::Config;
use crate::data_provider::SportsDataProvider;
use crate::formatting::{format_header, BoxChars};
use anyhow::Result;
use gameday_api::{teams, Broadcast, Game, League};

pub async fn run(
    client: &dyn SportsDataProvider,
    config: &Config,
    league: League,
    date: Option<String>,
) -> Result<()> {
    let game_date = parse_game_date(date)?;
    let chars = BoxChars::from_display(&config.display);

    // Fetch the schedule alongside the listings so each entry can be
    // titled with the matchup instead of a bare game id.
    let games = client.list_games(league, game_date).await;
    let broadcasts = client.list_broadcasts(league, game_date).await;

    let title = format!(
        "{} BROADCASTS - {}",
        league.id().to_uppercase(),
        game_date
    );
    println!("\n{}", format_header(&title, true, &chars));

    if games.is_empty() {
        println!("No games scheduled for this date.\n");
        return Ok(());
    }

    for game in &games {
        let listings = broadcasts.get(&game.id).map(Vec::as_slice).unwrap_or(&[]);
        print!("{}", format_game_broadcasts(game, listings, league));
    }

    println!();
    Ok(())
}

pub fn format_game_broadcasts(game: &Game, listings: &[Broadcast], league: League) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} @ {}\n",
        teams::abbreviate(&game.away_team, league),
        teams::abbreviate(&game.home_team, league)
    ));

    if listings.is_empty() {
        output.push_str("  No broadcast information available.\n");
        return output;
    }

    let (tv, radio): (Vec<&Broadcast>, Vec<&Broadcast>) =
        listings.iter().partition(|b| !b.kind.is_radio());

    if !tv.is_empty() {
        output.push_str("  TV:\n");
        for broadcast in tv {
            output.push_str(&format!("    {}\n", describe(broadcast)));
        }
    }
    if !radio.is_empty() {
        output.push_str("  Radio:\n");
        for broadcast in radio {
            output.push_str(&format!("    {}\n", describe(broadcast)));
        }
    }
    output
}

fn describe(broadcast: &Broadcast) -> String {
    let scope = if broadcast.national { "National" } else { "Local" };
    match &broadcast.call_sign {
        Some(call_sign) if call_sign != &broadcast.name => {
            format!("{} ({}) - {}", broadcast.name, call_sign, scope)
        }
        _ => format!("{} - {}", broadcast.name, scope),
    }
}
