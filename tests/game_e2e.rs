//! End-to-end match flow tests
//!
//! Drives full matches through the public action interface and checks the
//! economy, phase transitions, and same-seed determinism.

use godtrial::core::GodName;
use godtrial::game::{Action, Game, Phase, TrialDriver, TrialOutcome};
use similar_asserts::assert_eq;

fn scripted_match(seed: u64) -> Game {
    let mut game = Game::with_seed(seed);
    game.apply(Action::SelectGod(GodName::Mesin));
    game.apply(Action::SelectCard(0));
    game.apply(Action::SelectCard(1));
    game.apply(Action::ConfirmPrayer);
    game.apply(Action::SelectHandCard(0));
    game.apply(Action::SelectBoardSlot(0));
    game.apply(Action::SelectHandCard(0));
    game.apply(Action::SelectBoardSlot(1));
    game.apply(Action::StartTrial);
    game
}

#[test]
fn drafting_two_offers_costs_four_and_fills_the_hand_in_order() {
    let mut game = Game::with_seed(11);
    game.apply(Action::SelectGod(GodName::Beroan));
    assert_eq!(game.aether(), 10);

    let offer = game.prayer_offer().to_vec();
    game.apply(Action::SelectCard(5));
    game.apply(Action::SelectCard(2));
    assert_eq!(game.prayer_cost(), 4);

    game.apply(Action::ConfirmPrayer);

    assert_eq!(game.aether(), 6);
    assert_eq!(game.phase(), Phase::Casting);
    assert_eq!(game.hand(), &[offer[2].clone(), offer[5].clone()]);
}

#[test]
fn occupied_slot_rejects_a_second_placement() {
    let mut game = Game::with_seed(11);
    game.apply(Action::SelectGod(GodName::Beroan));
    game.apply(Action::SelectCard(0));
    game.apply(Action::SelectCard(1));
    game.apply(Action::ConfirmPrayer);

    let first = game.hand()[0].clone();
    let second = game.hand()[1].clone();

    game.apply(Action::SelectHandCard(0));
    game.apply(Action::SelectBoardSlot(0));
    game.apply(Action::SelectHandCard(0));
    game.apply(Action::SelectBoardSlot(0));

    assert_eq!(game.board()[0], Some(first));
    assert_eq!(game.hand(), &[second]);
}

#[test]
fn sacrifice_trades_one_card_for_one_aether() {
    let mut game = Game::with_seed(11);
    game.apply(Action::SelectGod(GodName::Tecton));
    game.apply(Action::SelectCard(3));
    game.apply(Action::ConfirmPrayer);
    assert_eq!(game.aether(), 9);
    assert_eq!(game.hand().len(), 1);

    game.apply(Action::SelectHandCard(0));
    game.apply(Action::SacrificeCard);

    assert_eq!(game.aether(), 10);
    assert!(game.hand().is_empty());
    assert!(game.board().iter().all(Option::is_none));
}

#[test]
fn full_match_reaches_judgement_and_loops_back_to_prayer() {
    let mut game = scripted_match(42);

    let outcome = TrialDriver::new().run_to_completion(&mut game).unwrap();

    assert_eq!(outcome, TrialOutcome::Victory);
    assert_eq!(game.phase(), Phase::Judgement);
    assert_eq!(game.outcome(), Some(TrialOutcome::Victory));

    let leftover = game.aether();
    game.apply(Action::Continue);

    assert_eq!(game.phase(), Phase::Prayer);
    assert_eq!(game.round(), 2);
    assert_eq!(game.aether(), leftover + 10);
    assert_eq!(game.chosen_god(), Some(GodName::Mesin));
    assert_eq!(game.prayer_offer().len(), 7);
}

#[test]
fn victory_requires_a_surviving_player_unit() {
    let mut game = scripted_match(42);
    TrialDriver::new().run_to_completion(&mut game).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.outcome, Some(TrialOutcome::Victory));
    assert!(!snapshot.units.is_empty());
    assert!(snapshot
        .units
        .iter()
        .all(|u| u.team == godtrial::core::Team::Player));
}

#[test]
fn same_seed_and_script_produce_identical_snapshots() {
    let run = |seed| {
        let mut game = scripted_match(seed);
        TrialDriver::new().run_to_completion(&mut game).unwrap();
        serde_json::to_string_pretty(&game.snapshot()).unwrap()
    };

    assert_eq!(run(7), run(7));
    assert_eq!(run(123), run(123));
}

#[test]
fn different_seeds_still_draw_a_full_offer() {
    for seed in [0, 1, 99] {
        let mut game = Game::with_seed(seed);
        game.apply(Action::SelectGod(GodName::Gul));
        assert_eq!(game.prayer_offer().len(), 7);
    }
}

#[test]
fn trial_phase_ignores_all_player_actions() {
    let mut game = scripted_match(42);
    let before = game.snapshot();

    game.apply(Action::ConfirmPrayer);
    game.apply(Action::SelectBoardSlot(0));
    game.apply(Action::Continue);

    assert_eq!(game.snapshot(), before);
}
