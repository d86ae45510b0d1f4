/// Mock sports data client for development and testing
use crate::data_provider::SportsDataProvider;
use crate::fixtures;
use async_trait::async_trait;
use gameday_api::{Broadcast, Game, GameDate, League};
use std::collections::HashMap;
use tracing::info;

/// Mock client that returns fixture data instead of making real API calls
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SportsDataProvider for MockClient {
    async fn list_games(&self, league: League, date: GameDate) -> Vec<Game> {
        info!("MockClient: Returning mock {} games for {}", league, date);
        fixtures::create_mock_games(league, date)
    }

    async fn game_detail(&self, league: League, game_id: &str) -> Option<Game> {
        info!("MockClient: Returning mock detail for game {}", game_id);
        fixtures::create_mock_game_detail(league, game_id)
    }

    async fn list_broadcasts(
        &self,
        league: League,
        date: GameDate,
    ) -> HashMap<String, Vec<Broadcast>> {
        info!(
            "MockClient: Returning mock {} broadcasts for {}",
            league, date
        );
        fixtures::create_mock_broadcasts(league, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameday_api::GameStatus;

    #[tokio::test]
    async fn mock_games_match_fixture_states() {
        let client = MockClient::new();
        let date = GameDate::parse("2024-09-01").unwrap();
        let games = client.list_games(League::Mlb, date).await;
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].status, GameStatus::Scheduled);
    }

    #[tokio::test]
    async fn mock_detail_round_trips_fixture_ids() {
        let client = MockClient::new();
        let detail = client.game_detail(League::Nfl, "401671002").await;
        assert!(detail.is_some());
        assert!(client.game_detail(League::Nfl, "0").await.is_none());
    }
}
