// Statistics rules shared by every ledger backend:
// identity resolution, the KD floor, and the not-found gate.

use crate::entities::{PlayerIdentity, PlayerStats, Stats};

/// Kills over deaths, with deaths floored at one.
pub fn kd_ratio(kills: u64, deaths: u64) -> f64 {
    kills as f64 / deaths.max(1) as f64
}

impl Stats {
    pub fn new(kills: u64, deaths: u64) -> Self {
        Self {
            kills,
            deaths,
            kd: kd_ratio(kills, deaths),
        }
    }
}

/// Merges the identity found on the attacker side with the one found on the
/// victim side. When both exist and disagree (a reused name, a renamed id)
/// the attacker-derived pair wins; the conflict is not reported.
pub fn merge_identity_candidates(
    attacker: Option<PlayerIdentity>,
    victim: Option<PlayerIdentity>,
) -> Option<PlayerIdentity> {
    attacker.or(victim)
}

/// Final assembly of a stats lookup. Without a resolved identity the result is
/// "not found", whatever the counters say.
pub fn assemble_player_stats(
    attacker: Option<PlayerIdentity>,
    victim: Option<PlayerIdentity>,
    kills: u64,
    deaths: u64,
) -> Option<PlayerStats> {
    merge_identity_candidates(attacker, victim).map(|identity| PlayerStats {
        identity,
        stats: Stats::new(kills, deaths),
    })
}

/// Reference evaluator: answers a stats lookup over events held in memory, in
/// insertion order. Storage backends are tested against it.
#[cfg(any(test, feature = "test-support"))]
pub fn tally_events<'a, I>(events: I, lookup_key: &str, server_scope: Option<&str>) -> Option<PlayerStats>
where
    I: IntoIterator<Item = &'a crate::entities::KillEvent>,
{
    let mut attacker_candidate = None;
    let mut victim_candidate = None;
    let mut kills = 0u64;
    let mut deaths = 0u64;

    let scoped = events.into_iter().filter(|event| match server_scope {
        Some(scope) => event.server_scope().as_str() == scope,
        None => true,
    });

    for event in scoped {
        let as_attacker = event.attacker.answers_to(lookup_key);
        let as_victim = event.victim.answers_to(lookup_key);

        if as_attacker && attacker_candidate.is_none() {
            attacker_candidate = Some(event.attacker.identity());
        }
        if as_victim && victim_candidate.is_none() {
            victim_candidate = Some(event.victim.identity());
        }
        if as_attacker && !as_victim {
            kills += 1;
        }
        if as_victim {
            deaths += 1;
        }
    }

    assemble_player_stats(attacker_candidate, victim_candidate, kills, deaths)
}
