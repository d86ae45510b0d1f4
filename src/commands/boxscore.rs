use crate::config::Config;
use crate::data_provider::SportsDataProvider;
use crate::formatting::{format_header, BoxChars};
use anyhow::{bail, Result};
use gameday_api::{Game, League, LiveState, TeamStats};

pub async fn run(
    client: &dyn SportsDataProvider,
    config: &Config,
    league: League,
    game_id: &str,
) -> Result<()> {
    let game = match client.game_detail(league, game_id).await {
        Some(game) => game,
        None => bail!("No game found with id {game_id}"),
    };

    print!("{}", format_boxscore(&game, config));
    Ok(())
}

pub fn format_boxscore(game: &Game, config: &Config) -> String {
    let chars = BoxChars::from_display(&config.display);
    let mut output = String::new();

    let title = format!("{} @ {}", game.away_team, game.home_team);
    output.push('\n');
    output.push_str(&format_header(&title, true, &chars));

    if let (Some(away), Some(home)) = (game.away_score, game.home_score) {
        output.push_str(&format!("Score: {away} - {home}\n"));
    }
    if let Some(venue) = &game.venue {
        output.push_str(&format!("Venue: {venue}\n"));
    }
    if let Some(weather) = &game.weather {
        match &game.wind {
            Some(wind) => output.push_str(&format!("Weather: {weather}, wind {wind}\n")),
            None => output.push_str(&format!("Weather: {weather}\n")),
        }
    }
    if let Some(attendance) = game.attendance {
        output.push_str(&format!("Attendance: {attendance}\n"));
    }

    if let Some(box_score) = &game.box_score {
        format_team(&mut output, &box_score.away, &chars);
        format_team(&mut output, &box_score.home, &chars);
    }

    if let Some(live) = &game.live {
        format_live(&mut output, live, &chars);
    }

    output
}

fn format_team(output: &mut String, team: &TeamStats, chars: &BoxChars) {
    match &team.nfl_stats {
        Some(nfl) => {
            output.push_str(&format!("\n{}", format_header(&team.team_name, false, chars)));
            output.push_str(&format!("{:<20} {:>6}\n", "Total Yards", nfl.total_yards));
            output.push_str(&format!("{:<20} {:>6}\n", "Passing Yards", nfl.passing_yards));
            output.push_str(&format!("{:<20} {:>6}\n", "Rushing Yards", nfl.rushing_yards));
            output.push_str(&format!("{:<20} {:>6}\n", "Turnovers", nfl.turnovers));
            output.push_str(&format!("{:<20} {:>6}\n", "Penalty Yards", nfl.penalty_yards));
            output.push_str(&format!(
                "{:<20} {:>6}\n",
                "Possession", nfl.time_of_possession
            ));
        }
        None => {
            format_batting(output, team, chars);
            format_pitching(output, team, chars);
        }
    }
}

fn format_batting(output: &mut String, team: &TeamStats, chars: &BoxChars) {
    if team.batting_order.is_empty() {
        return;
    }
    let header = format!("{} - Batting", team.team_name);
    output.push_str(&format!("\n{}", format_header(&header, false, chars)));
    output.push_str(&format!(
        "{:<22} {:<4} {:>3} {:>3} {:>3} {:>4} {:>3} {:>3} {:>6} {:>6}\n",
        "Name", "Pos", "AB", "R", "H", "RBI", "BB", "SO", "AVG", "OPS"
    ));
    for batter in &team.batting_order {
        output.push_str(&format!(
            "{:<22} {:<4} {:>3} {:>3} {:>3} {:>4} {:>3} {:>3} {:>6} {:>6}\n",
            batter.name,
            batter.position,
            batter.at_bats,
            batter.runs,
            batter.hits,
            batter.rbi,
            batter.base_on_balls,
            batter.strike_outs,
            batter.avg,
            batter.ops
        ));
    }
    output.push_str(&format!(
        "Totals: {} R, {} H, {} E, {} LOB\n",
        team.totals.runs, team.totals.hits, team.totals.errors, team.totals.left_on_base
    ));
}

fn format_pitching(output: &mut String, team: &TeamStats, chars: &BoxChars) {
    if team.pitchers.is_empty() {
        return;
    }
    let header = format!("{} - Pitching", team.team_name);
    output.push_str(&format!("\n{}", format_header(&header, false, chars)));
    output.push_str(&format!(
        "{:<22} {:>5} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>6} {:>4}\n",
        "Name", "IP", "H", "R", "ER", "BB", "SO", "HR", "ERA", "P"
    ));
    for pitcher in &team.pitchers {
        let marker = if pitcher.is_current_pitcher { "*" } else { "" };
        output.push_str(&format!(
            "{:<22} {:>5} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>6} {:>4}\n",
            format!("{}{}", pitcher.name, marker),
            pitcher.innings_pitched,
            pitcher.hits,
            pitcher.runs,
            pitcher.earned_runs,
            pitcher.base_on_balls,
            pitcher.strike_outs,
            pitcher.home_runs,
            pitcher.era,
            pitcher.pitches
        ));
    }
}

fn format_live(output: &mut String, live: &LiveState, chars: &BoxChars) {
    if live.plays.is_empty() && live.current_play.is_none() {
        return;
    }
    output.push_str(&format!("\n{}", format_header("Recent Plays", false, chars)));

    if let (Some(balls), Some(strikes), Some(outs)) = (live.balls, live.strikes, live.outs) {
        output.push_str(&format!("Count: {balls}-{strikes}, {outs} out\n"));
    }
    if let Some(drive) = &live.current_drive {
        output.push_str(&format!("Current drive: {drive}\n"));
    }

    for play in &live.plays {
        let prefix = match (play.inning, &play.half_inning) {
            (Some(inning), Some(half)) => format!("[{half} {inning}] "),
            (None, Some(team)) => format!("[{team}] "),
            _ => String::new(),
        };
        output.push_str(&format!("  {prefix}{}\n", play.description));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameday_api::{BatterLine, NflTeamStats, PitcherLine, PlayByPlay};

    #[test]
    fn nfl_team_renders_stat_rows() {
        let team = TeamStats {
            team_name: "Green Bay Packers".to_string(),
            nfl_stats: Some(NflTeamStats {
                total_yards: 398,
                passing_yards: 256,
                rushing_yards: 142,
                turnovers: 1,
                penalty_yards: 45,
                time_of_possession: "31:18".to_string(),
            }),
            ..TeamStats::default()
        };
        let mut out = String::new();
        format_team(&mut out, &team, &BoxChars::ascii());
        assert!(out.contains("Total Yards"));
        assert!(out.contains("398"));
        assert!(out.contains("31:18"));
        assert!(!out.contains("Batting"));
    }

    #[test]
    fn mlb_team_renders_batting_and_pitching() {
        let team = TeamStats {
            team_name: "Boston Red Sox".to_string(),
            batting_order: vec![BatterLine {
                name: "Leadoff".to_string(),
                position: "CF".to_string(),
                at_bats: 4,
                hits: 2,
                avg: ".302".to_string(),
                ops: ".850".to_string(),
                ..BatterLine::default()
            }],
            pitchers: vec![PitcherLine {
                name: "Ace Starter".to_string(),
                innings_pitched: "6.1".to_string(),
                strike_outs: 8,
                era: "2.95".to_string(),
                is_current_pitcher: true,
                ..PitcherLine::default()
            }],
            ..TeamStats::default()
        };
        let mut out = String::new();
        format_team(&mut out, &team, &BoxChars::ascii());
        assert!(out.contains("Boston Red Sox - Batting"));
        assert!(out.contains("Leadoff"));
        assert!(out.contains("Boston Red Sox - Pitching"));
        assert!(out.contains("Ace Starter*"));
    }

    #[test]
    fn live_section_shows_count_and_plays() {
        let live = LiveState {
            plays: vec![PlayByPlay {
                inning: Some(5),
                half_inning: Some("bottom".to_string()),
                description: "Single to left.".to_string(),
                ..PlayByPlay::default()
            }],
            balls: Some(2),
            strikes: Some(1),
            outs: Some(2),
            ..LiveState::default()
        };
        let mut out = String::new();
        format_live(&mut out, &live, &BoxChars::ascii());
        assert!(out.contains("Count: 2-1, 2 out"));
        assert!(out.contains("[bottom 5] Single to left."));
    }

    #[test]
    fn empty_live_section_is_skipped() {
        let mut out = String::new();
        format_live(&mut out, &LiveState::default(), &BoxChars::ascii());
        assert!(out.is_empty());
    }
}
