//! Broadcast listings normalized across both upstreams.
//!
//! MLB schedules hydrated with `broadcasts(all)` carry typed rows (TV, AM,
//! FM) with an explicit national flag; ESPN events carry media/market
//! objects where a "National" market type stands in for that flag. Both
//! collapse into one `Broadcast` record grouped per game id.

use crate::espn::{self, EspnBroadcast};
use crate::mlb::{MlbBroadcast, ScheduleResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastKind {
    Tv,
    Am,
    Fm,
}

impl BroadcastKind {
    /// Upstream type strings are "TV", "AM", "FM" on MLB rows and short
    /// names like "TV" or "Radio" on ESPN rows. Anything unrecognized is
    /// treated as television.
    pub fn from_raw(raw: &str) -> BroadcastKind {
        let upper = raw.to_uppercase();
        if upper == "AM" {
            BroadcastKind::Am
        } else if upper == "FM" {
            BroadcastKind::Fm
        } else if upper.contains("RADIO") {
            BroadcastKind::Am
        } else {
            BroadcastKind::Tv
        }
    }

    pub fn is_radio(&self) -> bool {
        matches!(self, BroadcastKind::Am | BroadcastKind::Fm)
    }
}

impl fmt::Display for BroadcastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BroadcastKind::Tv => "TV",
            BroadcastKind::Am => "AM",
            BroadcastKind::Fm => "FM",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast {
    pub name: String,
    pub call_sign: Option<String>,
    pub kind: BroadcastKind,
    pub language: Option<String>,
    pub national: bool,
    pub market: Option<String>,
}

pub fn map_mlb_broadcast(wire: &MlbBroadcast) -> Option<Broadcast> {
    let name = wire.name.clone()?;
    Some(Broadcast {
        name,
        call_sign: wire.call_sign.clone(),
        kind: wire
            .kind
            .as_deref()
            .map(BroadcastKind::from_raw)
            .unwrap_or(BroadcastKind::Tv),
        language: wire.language.clone(),
        national: wire.is_national.unwrap_or(false),
        market: None,
    })
}

pub fn map_espn_broadcast(wire: &EspnBroadcast) -> Option<Broadcast> {
    let market = wire
        .market
        .as_ref()
        .and_then(|m| m.kind.clone());
    let name = wire
        .media
        .as_ref()
        .and_then(|m| m.short_name.clone())
        .or_else(|| wire.names.first().cloned())?;
    let call_sign = wire
        .media
        .as_ref()
        .and_then(|m| m.call_letters.clone())
        .or_else(|| Some(name.clone()));
    Some(Broadcast {
        name,
        call_sign,
        kind: wire
            .kind
            .as_ref()
            .and_then(|k| k.short_name.as_deref())
            .map(BroadcastKind::from_raw)
            .unwrap_or(BroadcastKind::Tv),
        language: wire.lang.clone(),
        national: market.as_deref() == Some("National"),
        market,
    })
}

/// Drops repeats of the same `(name, call sign)` pair, keeping the first.
pub fn dedup(broadcasts: Vec<Broadcast>) -> Vec<Broadcast> {
    let mut seen: Vec<(String, Option<String>)> = Vec::new();
    broadcasts
        .into_iter()
        .filter(|b| {
            let key = (b.name.clone(), b.call_sign.clone());
            if seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        })
        .collect()
}

/// Per-game broadcast lists from an MLB schedule hydrated with broadcasts.
/// Every game gets an entry, possibly empty.
pub fn group_mlb(schedule: &ScheduleResponse) -> HashMap<String, Vec<Broadcast>> {
    let mut grouped = HashMap::new();
    for date in &schedule.dates {
        for game in &date.games {
            let broadcasts = dedup(
                game.broadcasts
                    .iter()
                    .filter_map(map_mlb_broadcast)
                    .collect(),
            );
            grouped.insert(game.game_pk.to_string(), broadcasts);
        }
    }
    grouped
}

/// Per-game broadcast lists from an ESPN scoreboard.
pub fn group_espn(scoreboard: &espn::ScoreboardResponse) -> HashMap<String, Vec<Broadcast>> {
    let mut grouped = HashMap::new();
    for event in &scoreboard.events {
        let broadcasts = event
            .competitions
            .first()
            .map(|c| {
                dedup(
                    c.broadcasts
                        .iter()
                        .filter_map(map_espn_broadcast)
                        .collect(),
                )
            })
            .unwrap_or_default();
        grouped.insert(event.id.clone(), broadcasts);
    }
    grouped
}
