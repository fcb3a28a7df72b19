// SQLite schema and statements for the kill ledger.

pub const CREATE_TOKENS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tokens (
    token TEXT PRIMARY KEY,
    owner TEXT NOT NULL DEFAULT ''
)
"#;

pub const CREATE_KILL_DATA_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS kill_data (
    timestamp                 TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    match_id                  TEXT NOT NULL DEFAULT '',
    server_id                 TEXT NOT NULL DEFAULT '',
    server_name               TEXT NOT NULL DEFAULT '',
    server_scope              TEXT NOT NULL DEFAULT '',
    game_mode                 TEXT NOT NULL DEFAULT '',
    game_time                 REAL NOT NULL DEFAULT 0,
    map                       TEXT NOT NULL DEFAULT '',
    attacker_name             TEXT NOT NULL DEFAULT '',
    attacker_id               TEXT NOT NULL DEFAULT '',
    attacker_current_weapon   TEXT NOT NULL DEFAULT '',
    attacker_weapon_1         TEXT NOT NULL DEFAULT '',
    attacker_weapon_2         TEXT NOT NULL DEFAULT '',
    attacker_weapon_3         TEXT NOT NULL DEFAULT '',
    attacker_offhand_weapon_1 TEXT NOT NULL DEFAULT '',
    attacker_offhand_weapon_2 TEXT NOT NULL DEFAULT '',
    attacker_titan            TEXT NOT NULL DEFAULT '',
    attacker_x                REAL NOT NULL DEFAULT 0,
    attacker_y                REAL NOT NULL DEFAULT 0,
    attacker_z                REAL NOT NULL DEFAULT 0,
    victim_name               TEXT NOT NULL DEFAULT '',
    victim_id                 TEXT NOT NULL DEFAULT '',
    victim_current_weapon     TEXT NOT NULL DEFAULT '',
    victim_weapon_1           TEXT NOT NULL DEFAULT '',
    victim_weapon_2           TEXT NOT NULL DEFAULT '',
    victim_weapon_3           TEXT NOT NULL DEFAULT '',
    victim_offhand_weapon_1   TEXT NOT NULL DEFAULT '',
    victim_offhand_weapon_2   TEXT NOT NULL DEFAULT '',
    victim_titan              TEXT NOT NULL DEFAULT '',
    victim_x                  REAL NOT NULL DEFAULT 0,
    victim_y                  REAL NOT NULL DEFAULT 0,
    victim_z                  REAL NOT NULL DEFAULT 0,
    cause_of_death            TEXT NOT NULL DEFAULT '',
    distance                  REAL NOT NULL DEFAULT 0
)
"#;

pub const CREATE_KILL_DATA_INDEXES: [&str; 6] = [
    "CREATE INDEX IF NOT EXISTS kill_data_timestamp_idx     ON kill_data (timestamp)",
    "CREATE INDEX IF NOT EXISTS kill_data_server_scope_idx  ON kill_data (server_scope)",
    "CREATE INDEX IF NOT EXISTS kill_data_attacker_name_idx ON kill_data (attacker_name)",
    "CREATE INDEX IF NOT EXISTS kill_data_attacker_id_idx   ON kill_data (attacker_id)",
    "CREATE INDEX IF NOT EXISTS kill_data_victim_name_idx   ON kill_data (victim_name)",
    "CREATE INDEX IF NOT EXISTS kill_data_victim_id_idx     ON kill_data (victim_id)",
];

pub const CREATE_MATCH_ID_UNIQUE_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS kill_data_match_id_uidx ON kill_data (match_id)";

pub const DROP_MATCH_ID_UNIQUE_INDEX: &str = "DROP INDEX IF EXISTS kill_data_match_id_uidx";

pub const INSERT_KILL_EVENT: &str = r#"
INSERT INTO kill_data (
    match_id, server_id, server_name, server_scope, game_mode, game_time, map,
    attacker_name, attacker_id, attacker_current_weapon,
    attacker_weapon_1, attacker_weapon_2, attacker_weapon_3,
    attacker_offhand_weapon_1, attacker_offhand_weapon_2, attacker_titan,
    attacker_x, attacker_y, attacker_z,
    victim_name, victim_id, victim_current_weapon,
    victim_weapon_1, victim_weapon_2, victim_weapon_3,
    victim_offhand_weapon_1, victim_offhand_weapon_2, victim_titan,
    victim_x, victim_y, victim_z,
    cause_of_death, distance
) VALUES (
    ?1, ?2, ?3, ?4, ?5, ?6, ?7,
    ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19,
    ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30, ?31,
    ?32, ?33
)
"#;

// ?1 = server scope (NULL for all servers), ?2 = lookup key.

pub const SELECT_ATTACKER_CANDIDATE: &str = r#"
SELECT attacker_name, attacker_id FROM kill_data
WHERE (?1 IS NULL OR server_scope = ?1)
  AND (attacker_name = ?2 OR attacker_id = ?2)
ORDER BY rowid
LIMIT 1
"#;

pub const SELECT_VICTIM_CANDIDATE: &str = r#"
SELECT victim_name, victim_id FROM kill_data
WHERE (?1 IS NULL OR server_scope = ?1)
  AND (victim_name = ?2 OR victim_id = ?2)
ORDER BY rowid
LIMIT 1
"#;

pub const COUNT_KILLS: &str = r#"
SELECT COUNT(1) FROM kill_data
WHERE (?1 IS NULL OR server_scope = ?1)
  AND (attacker_name = ?2 OR attacker_id = ?2)
  AND victim_name <> ?2 AND victim_id <> ?2
"#;

pub const COUNT_DEATHS: &str = r#"
SELECT COUNT(1) FROM kill_data
WHERE (?1 IS NULL OR server_scope = ?1)
  AND (victim_name = ?2 OR victim_id = ?2)
"#;

pub const SELECT_TOKEN: &str = "SELECT 1 FROM tokens WHERE token = ?1";

pub const INSERT_TOKEN: &str = "INSERT INTO tokens (token, owner) VALUES (?1, ?2)";
