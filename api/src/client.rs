//! HTTP client over both upstream APIs.
//!
//! Internal fetches return `ApiResult` and propagate with `?`; the public
//! operations are the degradation boundary. They never fail: a transport
//! error, a bad payload, or an unknown id becomes an empty list, `None`,
//! or an empty map, logged at warn and otherwise invisible to callers.

use crate::broadcast::{self, Broadcast};
use crate::{espn, mlb, Game, GameDate, League};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Sports data client over the MLB StatsAPI and ESPN site API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    timeout: Duration,
    mlb_base: String,
    espn_base: String,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("gameday/0.2 (terminal scores viewer)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            mlb_base: League::Mlb.api_base().to_string(),
            espn_base: League::Nfl.api_base().to_string(),
        }
    }
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client pointed at alternate base URLs. Used by tests against a
    /// local mock server.
    pub fn with_bases(mlb_base: impl Into<String>, espn_base: impl Into<String>) -> Self {
        Self {
            mlb_base: mlb_base.into(),
            espn_base: espn_base.into(),
            ..Self::default()
        }
    }

    /// All games on a date. An off day and a failed fetch both come back
    /// empty; the difference shows up only in the logs.
    pub async fn list_games(&self, league: League, date: GameDate) -> Vec<Game> {
        let result = match league {
            League::Mlb => self.fetch_mlb_schedule(date, false).await.map(|schedule| {
                schedule
                    .dates
                    .iter()
                    .flat_map(|d| d.games.iter())
                    .map(mlb::map_schedule_game)
                    .collect()
            }),
            League::Nfl => self.fetch_nfl_scoreboard(date).await.map(|scoreboard| {
                scoreboard.events.iter().map(espn::map_event).collect()
            }),
        };
        match result {
            Ok(games) => games,
            Err(e) => {
                tracing::warn!(%league, %date, error = %e, "schedule fetch degraded to empty");
                Vec::new()
            }
        }
    }

    /// Full detail for one game, `None` when the upstream has no record
    /// of the id or the fetch fails.
    pub async fn game_detail(&self, league: League, id: &str) -> Option<Game> {
        let result = match league {
            League::Mlb => self
                .fetch_mlb_feed(id)
                .await
                .map(|feed| mlb::map_feed(id, &feed)),
            League::Nfl => self
                .fetch_nfl_summary(id)
                .await
                .map(|summary| espn::map_summary(id, &summary)),
        };
        match result {
            Ok(game) => game,
            Err(e) => {
                tracing::warn!(%league, id, error = %e, "detail fetch degraded to none");
                None
            }
        }
    }

    /// Broadcast listings for every game on a date, keyed by game id.
    pub async fn list_broadcasts(
        &self,
        league: League,
        date: GameDate,
    ) -> HashMap<String, Vec<Broadcast>> {
        let result = match league {
            League::Mlb => self
                .fetch_mlb_schedule(date, true)
                .await
                .map(|schedule| broadcast::group_mlb(&schedule)),
            League::Nfl => self
                .fetch_nfl_scoreboard(date)
                .await
                .map(|scoreboard| broadcast::group_espn(&scoreboard)),
        };
        match result {
            Ok(grouped) => grouped,
            Err(e) => {
                tracing::warn!(%league, %date, error = %e, "broadcast fetch degraded to empty");
                HashMap::new()
            }
        }
    }

    async fn fetch_mlb_schedule(
        &self,
        date: GameDate,
        with_broadcasts: bool,
    ) -> ApiResult<mlb::ScheduleResponse> {
        let hydrate = if with_broadcasts {
            "&hydrate=broadcasts(all)"
        } else {
            ""
        };
        let url = format!(
            "{}/schedule?sportId=1&date={}{hydrate}",
            self.mlb_base,
            date.as_mlb_param()
        );
        self.get(&url).await
    }

    async fn fetch_mlb_feed(&self, id: &str) -> ApiResult<mlb::FeedResponse> {
        // The live feed lives under v1.1 while everything else is v1.
        let url = match self.mlb_base.strip_suffix("/v1") {
            Some(root) => format!("{root}/v1.1/game/{id}/feed/live"),
            None => format!("{}/game/{id}/feed/live", self.mlb_base),
        };
        self.get(&url).await
    }

    async fn fetch_nfl_scoreboard(&self, date: GameDate) -> ApiResult<espn::ScoreboardResponse> {
        let url = format!(
            "{}/scoreboard?dates={}",
            self.espn_base,
            date.as_espn_param()
        );
        self.get(&url).await
    }

    async fn fetch_nfl_summary(&self, id: &str) -> ApiResult<espn::SummaryResponse> {
        let url = format!("{}/summary?event={id}", self.espn_base);
        self.get(&url).await
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                // 4xx means "nothing here" upstream; an empty default maps
                // to an empty result rather than an error.
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}
