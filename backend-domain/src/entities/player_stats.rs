// Player statistics entities
// Derived on every query, never persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub kills: u64,
    pub deaths: u64,
    pub kd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub identity: PlayerIdentity,
    pub stats: Stats,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerStatsQuery {
    pub server_id: Option<String>,
}

/// Response body kept field-compatible with existing stats consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsResponse {
    pub name: String,
    pub uid: String,
    pub kills: u64,
    pub deaths: u64,
    pub kd: f64,
}

impl From<PlayerStats> for PlayerStatsResponse {
    fn from(value: PlayerStats) -> Self {
        Self {
            name: value.identity.name,
            uid: value.identity.id,
            kills: value.stats.kills,
            deaths: value.stats.deaths,
            kd: value.stats.kd,
        }
    }
}
