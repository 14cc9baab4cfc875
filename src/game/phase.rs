//! Match phases

use crate::game::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phases of a match
///
/// Exactly one phase is active at a time. The loop after the first round is
/// Prayer -> Casting -> Trial -> Judgement -> Prayer; GodSelection is entered
/// only once, at the start of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    GodSelection,
    Prayer,
    Casting,
    Trial,
    Judgement,
}

impl Phase {
    /// Whether an action is meaningful in this phase
    ///
    /// Anything not listed here is silently absorbed by the controller:
    /// no error, no state change. The Trial phase accepts no input at all;
    /// it is advanced by the driver.
    pub fn accepts(&self, action: &Action) -> bool {
        matches!(
            (self, action),
            (Phase::GodSelection, Action::SelectGod(_))
                | (Phase::Prayer, Action::SelectCard(_))
                | (Phase::Prayer, Action::ConfirmPrayer)
                | (Phase::Casting, Action::SelectHandCard(_))
                | (Phase::Casting, Action::SelectBoardSlot(_))
                | (Phase::Casting, Action::SacrificeCard)
                | (Phase::Casting, Action::StartTrial)
                | (Phase::Judgement, Action::Continue)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::GodSelection => "God Selection",
            Phase::Prayer => "Prayer",
            Phase::Casting => "Casting",
            Phase::Trial => "Trial",
            Phase::Judgement => "Judgement",
        };
        write!(f, "{name}")
    }
}
