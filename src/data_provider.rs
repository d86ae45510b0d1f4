/// Trait for providing sports data, abstracting over the real API client
/// and mock implementations
use async_trait::async_trait;
use gameday_api::{Broadcast, Game, GameDate, League};
use std::collections::HashMap;

/// Trait for sports data providers, implemented by both the real Client
/// and MockClient. The operations are infallible by type: providers
/// degrade to empty results instead of surfacing errors.
#[async_trait]
pub trait SportsDataProvider: Send + Sync {
    /// Get all games in a league on a specific date
    async fn list_games(&self, league: League, date: GameDate) -> Vec<Game>;

    /// Get full detail for one game (line score, box score, plays)
    async fn game_detail(&self, league: League, game_id: &str) -> Option<Game>;

    /// Get broadcast listings keyed by game id
    async fn list_broadcasts(
        &self,
        league: League,
        date: GameDate,
    ) -> HashMap<String, Vec<Broadcast>>;
}

/// Implement the trait for the real gameday_api::Client
#[async_trait]
impl SportsDataProvider for gameday_api::Client {
    async fn list_games(&self, league: League, date: GameDate) -> Vec<Game> {
        self.list_games(league, date).await
    }

    async fn game_detail(&self, league: League, game_id: &str) -> Option<Game> {
        self.game_detail(league, game_id).await
    }

    async fn list_broadcasts(
        &self,
        league: League,
        date: GameDate,
    ) -> HashMap<String, Vec<Broadcast>> {
        self.list_broadcasts(league, date).await
    }
}
