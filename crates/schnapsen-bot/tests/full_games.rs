use rand::SeedableRng;
use rand::rngs::StdRng;
use schnapsen_bot::{Baseline, BotKind, RdeepBot, RdeepParams};
use schnapsen_core::{GamePlayEngine, bot_ref};
use std::rc::Rc;

#[test]
fn every_kind_finishes_games_against_every_other() {
    let engine = GamePlayEngine::new();
    let params = RdeepParams::new(2, 2, Baseline::Random).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    for (index, first) in BotKind::ALL.iter().enumerate() {
        for second in BotKind::ALL.iter() {
            let a = first.build(params, index as u64).unwrap();
            let b = second.build(params, 100 + index as u64).unwrap();
            let result = engine
                .play_game(Rc::clone(&a), Rc::clone(&b), &mut rng)
                .unwrap();
            assert!((1..=3).contains(&result.game_points));
            assert!(Rc::ptr_eq(&result.winner, &a) || Rc::ptr_eq(&result.winner, &b));
        }
    }
}

#[test]
fn rdeep_can_play_itself_with_every_baseline() {
    let engine = GamePlayEngine::new();
    for (seed, baseline) in [Baseline::Random, Baseline::Bully, Baseline::Second]
        .into_iter()
        .enumerate()
    {
        let params = RdeepParams::new(2, 3, baseline).unwrap();
        let a = bot_ref(RdeepBot::new(params, seed as u64).unwrap());
        let b = bot_ref(RdeepBot::new(params, seed as u64 + 50).unwrap());
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let result = engine.play_game(a, b, &mut rng).unwrap();
        assert!(result.score.direct_points > 0);
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let engine = GamePlayEngine::new();
    let params = RdeepParams::new(3, 4, Baseline::Random).unwrap();
    let run = || {
        let a = BotKind::Rdeep.build(params, 7).unwrap();
        let b = BotKind::Bully.build(params, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let result = engine.play_game(Rc::clone(&a), b, &mut rng).unwrap();
        (Rc::ptr_eq(&result.winner, &a), result.game_points, result.score)
    };
    assert_eq!(run(), run());
}
