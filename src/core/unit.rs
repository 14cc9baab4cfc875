//! Combat units

use crate::core::{CardTemplate, GodName};
use serde::{Deserialize, Serialize};

/// Which side a unit fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Player => Team::Enemy,
            Team::Enemy => Team::Player,
        }
    }
}

/// A mutable combat participant
///
/// Units exist only while a Trial runs. The resolver mutates position,
/// cooldown, and hit points every tick; a unit whose hp drops to zero or
/// below is filtered out at the end of the tick and never observed by the
/// next one. `y` is the advance axis toward the center line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub hp: i32,
    pub team: Team,

    /// Which god this unit belongs to (drives affinity scaling at spawn)
    pub god: GodName,

    pub ranged_strength: i32,
    pub ranged_speed: u32,

    /// Ticks until the next attack; 0 means ready
    pub ranged_cooldown: u32,
}

impl Unit {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: i32,
        y: i32,
        glyph: char,
        hp: i32,
        team: Team,
        ranged_strength: i32,
        ranged_speed: u32,
        god: GodName,
    ) -> Self {
        Unit {
            x,
            y,
            glyph,
            hp,
            team,
            god,
            ranged_strength,
            ranged_speed,
            ranged_cooldown: 0,
        }
    }

    /// Stamp a unit from a card template at the given position
    pub fn from_template(x: i32, y: i32, team: Team, template: &CardTemplate) -> Self {
        Unit::new(
            x,
            y,
            template.glyph,
            template.hp,
            team,
            template.ranged_strength,
            template.ranged_speed,
            template.god,
        )
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
