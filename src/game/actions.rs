//! Named input actions
//!
//! The closed set of actions the input layer can feed into the controller.
//! `Game::apply` validates each action against the current phase and ignores
//! invalid combinations; no action ever raises an error.

use crate::core::GodName;
use serde::{Deserialize, Serialize};

/// A discrete action from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Choose a god for the whole match (GodSelection)
    SelectGod(GodName),

    /// Toggle an offer card in or out of the selection (Prayer)
    SelectCard(usize),

    /// Pay for the current selection and move it into hand (Prayer)
    ConfirmPrayer,

    /// Select a hand card; re-selecting the same index deselects (Casting)
    SelectHandCard(usize),

    /// Place the selected hand card into an empty board slot (Casting)
    SelectBoardSlot(usize),

    /// Remove the selected hand card for one Aether (Casting)
    SacrificeCard,

    /// Field the board and begin combat (Casting)
    StartTrial,

    /// Acknowledge the outcome and begin the next round (Judgement)
    Continue,
}
