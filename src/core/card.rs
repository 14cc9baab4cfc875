//! Card templates

use crate::core::GodName;
use serde::{Deserialize, Serialize};

/// An immutable card template
///
/// Templates are catalog data: they are never mutated during play. Drafting
/// a card into the hand or onto the board copies the template by value, and
/// a fielded unit is stamped from it when a Trial starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Which god this card belongs to
    pub god: GodName,

    /// Display name (e.g., "Lightning")
    pub name: String,

    /// Single display glyph
    pub glyph: char,

    /// Hit points of the unit this card fields
    pub hp: i32,

    /// Damage dealt per ranged attack
    pub ranged_strength: i32,

    /// Ticks between ranged attacks
    pub ranged_speed: u32,
}

impl CardTemplate {
    pub fn new(
        god: GodName,
        name: impl Into<String>,
        glyph: char,
        hp: i32,
        ranged_strength: i32,
        ranged_speed: u32,
    ) -> Self {
        CardTemplate {
            god,
            name: name.into(),
            glyph,
            hp,
            ranged_strength,
            ranged_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_creation() {
        let card = CardTemplate::new(GodName::Mesin, "Lightning", 'L', 1, 1, 3);

        assert_eq!(card.god, GodName::Mesin);
        assert_eq!(card.name, "Lightning");
        assert_eq!(card.glyph, 'L');
        assert_eq!(card.hp, 1);
        assert_eq!(card.ranged_strength, 1);
        assert_eq!(card.ranged_speed, 3);
    }
}
