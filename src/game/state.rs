//! Match state and the phase controller
//!
//! `Game` owns everything a match needs: the phase machine, the Aether
//! economy, the prayer shoe and offer, hand and board, and the live unit
//! list while a Trial runs. All mutation enters through [`Game::apply`]
//! (named actions) or [`Game::advance_trial`] (driver ticks); an action
//! that is invalid for the current phase or state is silently absorbed.

use crate::catalog::Catalog;
use crate::core::{CardTemplate, GodName, Team, Unit};
use crate::game::logger::GameLogger;
use crate::game::snapshot::{GodView, Snapshot, UnitView};
use crate::game::trial::{spawn_trial_units, TrialEngine, TrialOutcome};
use crate::game::{Action, Phase};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use smallvec::SmallVec;

/// Cards offered each Prayer phase
pub const PRAYER_OFFER_SIZE: usize = 7;

/// Casting board capacity
pub const BOARD_SLOTS: usize = 6;

/// Aether granted at match start and again each round
pub const ROUND_AETHER: u32 = 10;

/// Copies of the catalog concatenated into one prayer shoe
const SHOE_COPIES: usize = 4;

/// Escalating cost of each successive drafted card: the first card in a
/// selection costs 1, the second 3, and so on. Total cost of a selection is
/// the sum of the first `selection_count` entries.
const PRAYER_COSTS: [u32; PRAYER_OFFER_SIZE] = [1, 3, 5, 8, 13, 21, 34];

/// Complete match state
pub struct Game {
    phase: Phase,
    chosen_god: Option<GodName>,
    aether: u32,
    round: u32,

    /// Shuffled multiset the prayer offers are drawn from
    prayer_deck: Vec<CardTemplate>,
    prayer_offer: Vec<CardTemplate>,
    /// Offer indices toggled by the player, in insertion order
    selected_prayer: SmallVec<[usize; PRAYER_OFFER_SIZE]>,

    hand: Vec<CardTemplate>,
    board: [Option<CardTemplate>; BOARD_SLOTS],
    selected_hand: Option<usize>,

    units: Vec<Unit>,
    outcome: Option<TrialOutcome>,

    engine: TrialEngine,
    catalog: Catalog,
    rng: ChaCha12Rng,

    /// Centralized logger for game events
    pub logger: GameLogger,
}

impl Game {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a match with a specific shoe-shuffling seed
    ///
    /// Two games with the same seed and action sequence evolve identically.
    pub fn with_seed(seed: u64) -> Self {
        Game {
            phase: Phase::GodSelection,
            chosen_god: None,
            aether: 0,
            round: 1,
            prayer_deck: Vec::new(),
            prayer_offer: Vec::new(),
            selected_prayer: SmallVec::new(),
            hand: Vec::new(),
            board: std::array::from_fn(|_| None),
            selected_hand: None,
            units: Vec::new(),
            outcome: None,
            engine: TrialEngine::new(),
            catalog: Catalog::standard(),
            rng: ChaCha12Rng::seed_from_u64(seed),
            logger: GameLogger::new(),
        }
    }

    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn chosen_god(&self) -> Option<GodName> {
        self.chosen_god
    }

    pub fn aether(&self) -> u32 {
        self.aether
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn hand(&self) -> &[CardTemplate] {
        &self.hand
    }

    pub fn board(&self) -> &[Option<CardTemplate>] {
        &self.board
    }

    pub fn prayer_offer(&self) -> &[CardTemplate] {
        &self.prayer_offer
    }

    pub fn selected_prayer(&self) -> &[usize] {
        &self.selected_prayer
    }

    pub fn selected_hand(&self) -> Option<usize> {
        self.selected_hand
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn outcome(&self) -> Option<TrialOutcome> {
        self.outcome
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Aether cost of the current prayer selection
    pub fn prayer_cost(&self) -> u32 {
        PRAYER_COSTS.iter().take(self.selected_prayer.len()).sum()
    }

    /// Apply a named action from the input layer
    ///
    /// Actions that do not fit the current phase, or that reference state
    /// that does not exist (an empty slot, an out-of-range index), leave the
    /// match unchanged. Nothing here errors.
    pub fn apply(&mut self, action: Action) {
        if !self.phase.accepts(&action) {
            return;
        }
        match action {
            Action::SelectGod(name) => self.select_god(name),
            Action::SelectCard(index) => self.toggle_prayer_card(index),
            Action::ConfirmPrayer => self.confirm_prayer(),
            Action::SelectHandCard(index) => self.select_hand_card(index),
            Action::SelectBoardSlot(slot) => self.place_on_board(slot),
            Action::SacrificeCard => self.sacrifice_selected(),
            Action::StartTrial => self.start_trial(),
            Action::Continue => self.next_round(),
        }
    }

    /// Read-only view of the match for the presentation layer
    ///
    /// Rebuilt after every `apply` or trial tick; the caller owns the copy
    /// and cannot reach back into the match through it.
    pub fn snapshot(&self) -> Snapshot {
        let chosen_god = self
            .chosen_god
            .and_then(|name| self.catalog.god(name))
            .map(|god| GodView {
                name: god.name,
                theme: god.theme.clone(),
                avatar: god.avatar.clone(),
            });

        Snapshot {
            phase: self.phase,
            chosen_god,
            aether: self.aether,
            round: self.round,
            units: self.units.iter().map(UnitView::from).collect(),
            hand: self.hand.clone(),
            prayer_offer: self.prayer_offer.clone(),
            selected_prayer: self.selected_prayer.to_vec(),
            board: self.board.to_vec(),
            selected_hand: self.selected_hand,
            prayer_cost: self.prayer_cost(),
            outcome: self.outcome,
        }
    }

    fn select_god(&mut self, name: GodName) {
        if self.catalog.god(name).is_none() {
            return;
        }
        self.chosen_god = Some(name);
        self.aether = ROUND_AETHER;
        self.logger
            .normal(&format!("{name} chosen; {} Aether granted", self.aether));
        self.enter_prayer();
    }

    /// Draw a fresh offer and move to Prayer
    fn enter_prayer(&mut self) {
        self.selected_prayer.clear();
        self.prayer_offer.clear();
        if self.prayer_deck.len() < PRAYER_OFFER_SIZE {
            self.rebuild_shoe();
        }
        for _ in 0..PRAYER_OFFER_SIZE {
            if let Some(card) = self.prayer_deck.pop() {
                self.prayer_offer.push(card);
            }
        }
        self.phase = Phase::Prayer;
    }

    fn rebuild_shoe(&mut self) {
        self.prayer_deck.clear();
        for _ in 0..SHOE_COPIES {
            self.prayer_deck.extend(self.catalog.cards().iter().cloned());
        }
        self.prayer_deck.shuffle(&mut self.rng);
    }

    fn toggle_prayer_card(&mut self, index: usize) {
        if index >= self.prayer_offer.len() {
            return;
        }
        if let Some(pos) = self.selected_prayer.iter().position(|&i| i == index) {
            self.selected_prayer.remove(pos);
        } else {
            self.selected_prayer.push(index);
        }
    }

    /// Pay for the selection and move it to hand, in ascending offer order
    fn confirm_prayer(&mut self) {
        let cost = self.prayer_cost();
        if self.aether < cost {
            return;
        }
        self.aether -= cost;

        let mut picks: Vec<usize> = self.selected_prayer.iter().copied().collect();
        picks.sort_unstable();
        let drafted = picks.len();
        for (removed, index) in picks.into_iter().enumerate() {
            let card = self.prayer_offer.remove(index - removed);
            self.hand.push(card);
        }
        self.logger.normal(&format!(
            "Drafted {drafted} cards for {cost} Aether ({} remain)",
            self.aether
        ));

        self.selected_prayer.clear();
        self.prayer_offer.clear();
        self.phase = Phase::Casting;
    }

    fn select_hand_card(&mut self, index: usize) {
        if index >= self.hand.len() {
            return;
        }
        self.selected_hand = if self.selected_hand == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Transfer the selected hand card into an empty board slot
    fn place_on_board(&mut self, slot: usize) {
        if slot >= BOARD_SLOTS || self.board[slot].is_some() {
            return;
        }
        let Some(index) = self.selected_hand else {
            return;
        };
        if index >= self.hand.len() {
            return;
        }
        let card = self.hand.remove(index);
        self.board[slot] = Some(card);
        self.selected_hand = None;
    }

    fn sacrifice_selected(&mut self) {
        let Some(index) = self.selected_hand else {
            return;
        };
        if index >= self.hand.len() {
            return;
        }
        let card = self.hand.remove(index);
        self.aether += 1;
        self.selected_hand = None;
        self.logger
            .normal(&format!("{} sacrificed for 1 Aether", card.name));
    }

    /// Field the avatar, the board, and the fixed opposition
    fn start_trial(&mut self) {
        let Some(chosen) = self.chosen_god else {
            return;
        };
        self.units = spawn_trial_units(&self.catalog, chosen, &self.board);
        self.board = std::array::from_fn(|_| None);
        self.hand.clear();
        self.selected_hand = None;
        self.outcome = None;
        self.phase = Phase::Trial;
        self.logger.normal(&format!(
            "The Trial begins: {} units take the field",
            self.units.len()
        ));
    }

    /// Run one resolver tick and check for a concluded Trial
    ///
    /// Invoked by the driver at a fixed cadence; a no-op outside the Trial
    /// phase. The player-empty check runs before the enemy-empty check, so a
    /// tick that eliminates both sides concludes in defeat.
    pub fn advance_trial(&mut self) {
        if self.phase != Phase::Trial {
            return;
        }
        self.units = self.engine.tick(std::mem::take(&mut self.units));
        self.logger
            .verbose(&format!("tick: {} units remain", self.units.len()));

        let players_alive = self.units.iter().any(|u| u.team == Team::Player);
        let enemies_alive = self.units.iter().any(|u| u.team == Team::Enemy);
        if !players_alive {
            self.conclude_trial(TrialOutcome::Defeat);
        } else if !enemies_alive {
            self.conclude_trial(TrialOutcome::Victory);
        }
    }

    fn conclude_trial(&mut self, outcome: TrialOutcome) {
        self.outcome = Some(outcome);
        self.phase = Phase::Judgement;
        self.logger.minimal(&format!("Judgement: {outcome:?}"));
    }

    /// Reset per-round state, keeping the chosen god and leftover Aether
    fn next_round(&mut self) {
        self.round += 1;
        self.aether += ROUND_AETHER;
        self.outcome = None;
        self.units.clear();
        self.logger
            .normal(&format!("Round {} begins with {} Aether", self.round, self.aether));
        self.enter_prayer();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
