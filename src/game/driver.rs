//! Fixed-interval Trial driver
//!
//! An explicit scheduler owned by the caller, never a free-running global
//! timer. Started on entering the Trial phase; the loop ends exactly once,
//! on the tick that concludes the trial.

use crate::game::state::Game;
use crate::game::trial::TrialOutcome;
use crate::game::Phase;
use crate::{GameError, Result};
use std::time::Duration;
use tokio::time;

/// Default tick period
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Runaway guard for trials that never conclude
const DEFAULT_MAX_TICKS: u32 = 10_000;

/// Drives the combat resolver at a fixed cadence while a Trial runs
#[derive(Debug, Clone)]
pub struct TrialDriver {
    period: Duration,
    max_ticks: u32,
}

impl TrialDriver {
    pub fn new() -> Self {
        TrialDriver {
            period: DEFAULT_TICK_PERIOD,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Tick at the fixed period until the Trial concludes
    ///
    /// The observer runs after every tick with the freshly mutated state;
    /// presentation layers render the snapshot from there.
    pub async fn run_with<F>(&self, game: &mut Game, mut observe: F) -> Result<TrialOutcome>
    where
        F: FnMut(&Game),
    {
        if game.phase() != Phase::Trial {
            return Err(GameError::NotInTrial);
        }

        let mut interval = time::interval(self.period);
        for _ in 0..self.max_ticks {
            interval.tick().await;
            game.advance_trial();
            observe(&*game);
            if let Some(outcome) = game.outcome() {
                return Ok(outcome);
            }
        }
        Err(GameError::TrialStalled(self.max_ticks))
    }

    /// Tick at the fixed period until the Trial concludes, unobserved
    pub async fn run(&self, game: &mut Game) -> Result<TrialOutcome> {
        self.run_with(game, |_| {}).await
    }

    /// Drive ticks back-to-back without waiting (tests and headless runs)
    pub fn run_to_completion(&self, game: &mut Game) -> Result<TrialOutcome> {
        if game.phase() != Phase::Trial {
            return Err(GameError::NotInTrial);
        }

        for _ in 0..self.max_ticks {
            game.advance_trial();
            if let Some(outcome) = game.outcome() {
                return Ok(outcome);
            }
        }
        Err(GameError::TrialStalled(self.max_ticks))
    }
}

impl Default for TrialDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GodName;
    use crate::game::Action;

    fn game_in_trial() -> Game {
        let mut game = Game::with_seed(0);
        game.apply(Action::SelectGod(GodName::Mesin));
        game.apply(Action::ConfirmPrayer);
        game.apply(Action::StartTrial);
        game
    }

    #[test]
    fn test_run_to_completion_reaches_judgement() {
        let mut game = game_in_trial();

        let outcome = TrialDriver::new().run_to_completion(&mut game).unwrap();

        assert_eq!(outcome, TrialOutcome::Victory);
        assert_eq!(game.phase(), Phase::Judgement);
    }

    #[test]
    fn test_driver_refuses_outside_trial() {
        let mut game = Game::with_seed(0);

        let result = TrialDriver::new().run_to_completion(&mut game);

        assert!(matches!(result, Err(GameError::NotInTrial)));
    }

    #[test]
    fn test_driver_stops_after_max_ticks() {
        let mut game = game_in_trial();

        let result = TrialDriver::new()
            .with_max_ticks(1)
            .run_to_completion(&mut game);

        assert!(matches!(result, Err(GameError::TrialStalled(1))));
        // Still mid-trial; the caller decides what to do with a stall
        assert_eq!(game.phase(), Phase::Trial);
    }

    #[tokio::test]
    async fn test_async_run_observes_every_tick() {
        let mut game = game_in_trial();
        let mut observed = 0u32;

        let outcome = TrialDriver::new()
            .with_period(Duration::from_millis(1))
            .run_with(&mut game, |g| {
                observed += 1;
                assert!(g.phase() == Phase::Trial || g.outcome().is_some());
            })
            .await
            .unwrap();

        assert_eq!(outcome, TrialOutcome::Victory);
        assert!(observed > 1);
    }
}
