//! Read-only render payload
//!
//! The presentation layer consumes these views and nothing else. A snapshot
//! is an owned copy: mutating it cannot reach back into the match, and the
//! controller re-emits a fresh one after every action or tick.

use crate::core::{CardTemplate, GodName, Team, Unit};
use crate::game::trial::TrialOutcome;
use crate::game::Phase;
use serde::Serialize;

/// A unit as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitView {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub team: Team,
    pub hp: i32,
}

impl From<&Unit> for UnitView {
    fn from(unit: &Unit) -> Self {
        UnitView {
            x: unit.x,
            y: unit.y,
            glyph: unit.glyph,
            team: unit.team,
            hp: unit.hp,
        }
    }
}

/// The chosen god as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GodView {
    pub name: GodName,
    pub theme: String,
    pub avatar: CardTemplate,
}

/// Owned view of the full match state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub chosen_god: Option<GodView>,
    pub aether: u32,
    pub round: u32,
    pub units: Vec<UnitView>,
    pub hand: Vec<CardTemplate>,
    pub prayer_offer: Vec<CardTemplate>,
    /// Offer indices currently toggled, in insertion order
    pub selected_prayer: Vec<usize>,
    pub board: Vec<Option<CardTemplate>>,
    pub selected_hand: Option<usize>,
    /// Aether cost of the current prayer selection
    pub prayer_cost: u32,
    pub outcome: Option<TrialOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GodName;

    #[test]
    fn test_unit_view_from_unit() {
        let unit = Unit::new(18, 18, 'Φ', 3, Team::Player, 1, 5, GodName::Mesin);
        let view = UnitView::from(&unit);

        assert_eq!(view.x, 18);
        assert_eq!(view.y, 18);
        assert_eq!(view.glyph, 'Φ');
        assert_eq!(view.team, Team::Player);
        assert_eq!(view.hp, 3);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let snapshot = Snapshot {
            phase: Phase::Prayer,
            chosen_god: None,
            aether: 10,
            round: 1,
            units: Vec::new(),
            hand: Vec::new(),
            prayer_offer: Vec::new(),
            selected_prayer: vec![2, 0],
            board: vec![None; 6],
            selected_hand: None,
            prayer_cost: 4,
            outcome: None,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"Prayer\""));
        assert!(json.contains("\"prayer_cost\":4"));
    }
}
