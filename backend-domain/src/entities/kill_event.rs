// Kill event entity
// One record per kill as reported by a game server. Immutable once stored.

use serde::{Deserialize, Serialize};

use crate::value_objects::ServerScope;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Either side of a kill: the attacker or the victim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub id: String,
    pub current_weapon: String,
    pub weapon_loadout: [String; 3],
    pub offhand_loadout: [String; 2],
    pub titan: String,
    pub position: Position,
}

#[cfg(any(test, feature = "test-support"))]
impl Combatant {
    pub fn identity(&self) -> crate::entities::PlayerIdentity {
        crate::entities::PlayerIdentity {
            name: self.name.clone(),
            id: self.id.clone(),
        }
    }

    /// Exact, case-sensitive match of a lookup key against name or id.
    pub fn answers_to(&self, lookup_key: &str) -> bool {
        self.name == lookup_key || self.id == lookup_key
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KillEvent {
    pub match_id: String,
    pub server_id: String,
    pub server_name: String,
    pub game_mode: String,
    pub game_time: f64,
    pub map: String,
    pub attacker: Combatant,
    pub victim: Combatant,
    pub cause_of_death: String,
    pub distance: f64,
}

impl KillEvent {
    pub fn server_scope(&self) -> ServerScope {
        ServerScope::from_parts(&self.server_id, &self.server_name)
    }
}

/// Flat wire shape sent by game servers. Every field is optional and falls
/// back to an empty string or 0.0.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct KillEventPayload {
    pub match_id: String,
    pub server_id: String,
    pub server_name: String,
    pub game_mode: String,
    pub game_time: f64,
    pub map: String,

    pub attacker_name: String,
    pub attacker_id: String,
    pub attacker_current_weapon: String,
    pub attacker_weapon_1: String,
    pub attacker_weapon_2: String,
    pub attacker_weapon_3: String,
    pub attacker_offhand_weapon_1: String,
    pub attacker_offhand_weapon_2: String,
    pub attacker_titan: String,
    pub attacker_x: f64,
    pub attacker_y: f64,
    pub attacker_z: f64,

    pub victim_name: String,
    pub victim_id: String,
    pub victim_current_weapon: String,
    pub victim_weapon_1: String,
    pub victim_weapon_2: String,
    pub victim_weapon_3: String,
    pub victim_offhand_weapon_1: String,
    pub victim_offhand_weapon_2: String,
    pub victim_titan: String,
    pub victim_x: f64,
    pub victim_y: f64,
    pub victim_z: f64,

    pub cause_of_death: String,
    pub distance: f64,
}

impl From<KillEventPayload> for KillEvent {
    fn from(p: KillEventPayload) -> Self {
        Self {
            match_id: p.match_id,
            server_id: p.server_id,
            server_name: p.server_name,
            game_mode: p.game_mode,
            game_time: p.game_time,
            map: p.map,
            attacker: Combatant {
                name: p.attacker_name,
                id: p.attacker_id,
                current_weapon: p.attacker_current_weapon,
                weapon_loadout: [p.attacker_weapon_1, p.attacker_weapon_2, p.attacker_weapon_3],
                offhand_loadout: [p.attacker_offhand_weapon_1, p.attacker_offhand_weapon_2],
                titan: p.attacker_titan,
                position: Position {
                    x: p.attacker_x,
                    y: p.attacker_y,
                    z: p.attacker_z,
                },
            },
            victim: Combatant {
                name: p.victim_name,
                id: p.victim_id,
                current_weapon: p.victim_current_weapon,
                weapon_loadout: [p.victim_weapon_1, p.victim_weapon_2, p.victim_weapon_3],
                offhand_loadout: [p.victim_offhand_weapon_1, p.victim_offhand_weapon_2],
                titan: p.victim_titan,
                position: Position {
                    x: p.victim_x,
                    y: p.victim_y,
                    z: p.victim_z,
                },
            },
            cause_of_death: p.cause_of_death,
            distance: p.distance,
        }
    }
}
