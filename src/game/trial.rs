//! Trial combat resolution
//!
//! Advances the shared unit list one discrete tick at a time: cooldown decay,
//! advance to the front line, nearest-target ranged attacks, and deferred
//! death cleanup. Deterministic given unit order and state; no randomness.

use crate::catalog::Catalog;
use crate::core::{CardTemplate, GodName, Team, Unit};
use crate::game::layout::board_slot_position;
use serde::{Deserialize, Serialize};

/// Units stop advancing and start attacking within one row of this line
pub const CENTER_LINE: i32 = 12;

/// Where the avatar takes the field
pub const AVATAR_SPAWN: (i32, i32) = (18, 18);

/// Hit-point multiplier for units of the chosen god
const DEVOTION_BONUS: f64 = 1.5;

/// Hit-point multiplier for units of the negative affinity
const DISFAVOR_PENALTY: f64 = 0.75;

/// Outcome of a concluded Trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialOutcome {
    Victory,
    Defeat,
}

/// The per-tick combat resolver
///
/// Takes ownership of the tick's working list, mutates it in place, and
/// returns the filtered survivor list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialEngine;

impl TrialEngine {
    pub fn new() -> Self {
        TrialEngine
    }

    /// Advance every unit one tick and return the survivors
    ///
    /// Units act in list order against the current state of the list, so a
    /// unit processed late in the tick sees the damage and movement already
    /// dealt this tick. Deaths are deferred to the end of the tick: a unit
    /// killed mid-tick still counts as a valid target for units processed
    /// after its killer. This one-pass ordering is intentional.
    pub fn tick(&self, mut units: Vec<Unit>) -> Vec<Unit> {
        for i in 0..units.len() {
            // 1. Cooldown decay
            if units[i].ranged_cooldown > 0 {
                units[i].ranged_cooldown -= 1;
            }

            // 2. Advance toward the center line; a moving unit cannot attack
            if !Self::at_front(&units[i]) {
                units[i].y += match units[i].team {
                    Team::Player => -1,
                    Team::Enemy => 1,
                };
                continue;
            }

            // 3. Attack the nearest opposing unit if ready
            if units[i].ranged_cooldown == 0 {
                if let Some(target) = Self::find_target(i, &units) {
                    let strength = units[i].ranged_strength;
                    units[target].take_damage(strength);
                    units[i].ranged_cooldown = units[i].ranged_speed;
                }
            }
        }

        // 4. Cleanup
        units.retain(Unit::is_alive);
        units
    }

    /// Front check is per-unit, not a shared boundary
    fn at_front(unit: &Unit) -> bool {
        match unit.team {
            Team::Player => unit.y <= CENTER_LINE + 1,
            Team::Enemy => unit.y >= CENTER_LINE - 1,
        }
    }

    /// Nearest opposing unit along the advance axis; first seen wins ties
    fn find_target(attacker: usize, units: &[Unit]) -> Option<usize> {
        let team = units[attacker].team;
        let y = units[attacker].y;

        let mut best: Option<usize> = None;
        let mut best_distance = i32::MAX;
        for (i, candidate) in units.iter().enumerate() {
            if candidate.team == team {
                continue;
            }
            let distance = (y - candidate.y).abs();
            if distance < best_distance {
                best_distance = distance;
                best = Some(i);
            }
        }
        best
    }
}

/// The fixed opposition fielded against every Trial
fn enemy_spawns() -> Vec<Unit> {
    vec![Unit::new(20, 2, 'W', 5, Team::Enemy, 1, 6, GodName::Beroan)]
}

/// Instantiate the unit list for a new Trial
///
/// One unit for the chosen god's avatar, one per occupied board slot, plus
/// the fixed enemy spawns. Affinity scaling is applied once here and never
/// re-applied mid-trial.
pub fn spawn_trial_units(
    catalog: &Catalog,
    chosen: GodName,
    board: &[Option<CardTemplate>],
) -> Vec<Unit> {
    let mut units = Vec::new();

    if let Some(god) = catalog.god(chosen) {
        let (x, y) = AVATAR_SPAWN;
        units.push(Unit::from_template(x, y, Team::Player, &god.avatar));
    }

    for (slot, card) in board.iter().enumerate() {
        if let Some(card) = card {
            let (x, y) = board_slot_position(slot);
            units.push(Unit::from_template(x, y, Team::Player, card));
        }
    }

    units.extend(enemy_spawns());

    apply_affinities(&mut units, chosen);
    units
}

/// Scale player units by their standing with the chosen god
fn apply_affinities(units: &mut [Unit], chosen: GodName) {
    let affinity = chosen.affinity();
    for unit in units.iter_mut().filter(|u| u.team == Team::Player) {
        if unit.god == chosen {
            unit.hp = scale(unit.hp, DEVOTION_BONUS);
        }
        if unit.god == affinity.positive {
            unit.ranged_strength = scale(unit.ranged_strength, DEVOTION_BONUS);
        }
        if unit.god == affinity.negative {
            unit.hp = scale(unit.hp, DISFAVOR_PENALTY);
        }
    }
}

fn scale(value: i32, factor: f64) -> i32 {
    (value as f64 * factor).round() as i32
}
