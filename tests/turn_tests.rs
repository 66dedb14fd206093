use flotilla::{
    Fleet, Game, GameError, NullOracle, Phase, ShipPlacement, ShotOutcome, Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn placement(name: &str, cells: Vec<(usize, usize)>) -> ShipPlacement {
    ShipPlacement {
        name: name.to_string(),
        cells,
    }
}

fn standard_placements() -> Vec<ShipPlacement> {
    vec![
        placement("Carrier", (0..5).map(|c| (0, c)).collect()),
        placement("Battleship", (0..4).map(|c| (2, c)).collect()),
        placement("Cruiser", (0..3).map(|c| (4, c)).collect()),
        placement("Submarine", (0..3).map(|c| (6, c)).collect()),
        placement("Destroyer", (0..2).map(|c| (8, c)).collect()),
    ]
}

/// Game seeded so the computer's fleet can be predicted by replaying the
/// same RNG.
fn seeded_game(seed: u64) -> (Game, Fleet) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let (expected, _) = Fleet::random(&mut rng.clone());
    let game = Game::new(&mut rng);
    (game, expected)
}

fn miss_cell(expected: &Fleet) -> (usize, usize) {
    for r in 0..10 {
        for c in 0..10 {
            if expected.ships().iter().all(|s| !s.occupies(r, c)) {
                return (r, c);
            }
        }
    }
    unreachable!("a 10x10 board always has open water");
}

#[test]
fn test_new_game_starts_in_placement() {
    let (game, _) = seeded_game(1);
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.turn(), Side::Human);
    assert!(game.winner().is_none());
    assert!(game.history().is_empty());
}

#[test]
fn test_shot_before_placement_rejected() {
    let (mut game, _) = seeded_game(1);
    assert!(matches!(
        game.human_shot(0, 0),
        Err(GameError::Precondition(_))
    ));
    assert_eq!(game.phase(), Phase::Placement);
}

#[test]
fn test_invalid_placement_does_not_advance_phase() {
    let (mut game, _) = seeded_game(1);
    let mut bad = standard_placements();
    bad.retain(|p| p.name != "Cruiser");
    assert!(game.place_fleet(&bad).is_err());
    assert_eq!(game.phase(), Phase::Placement);
    // a valid resubmission still goes through
    game.place_fleet(&standard_placements()).unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.turn(), Side::Human);
}

#[test]
fn test_placement_accepted_only_once() {
    let (mut game, _) = seeded_game(1);
    game.place_fleet(&standard_placements()).unwrap();
    assert!(matches!(
        game.place_fleet(&standard_placements()),
        Err(GameError::Precondition(_))
    ));
}

#[test]
fn test_hit_keeps_turn_and_miss_passes_it() {
    let (mut game, expected) = seeded_game(3);
    game.place_fleet(&standard_placements()).unwrap();

    let &(hr, hc) = &expected.ships()[0].cells()[0];
    let outcome = game.human_shot(hr, hc).unwrap();
    assert!(outcome.is_hit());
    assert_eq!(game.turn(), Side::Human);

    let (mr, mc) = miss_cell(&expected);
    assert_eq!(game.human_shot(mr, mc).unwrap(), ShotOutcome::Miss);
    assert_eq!(game.turn(), Side::Computer);
}

#[test]
fn test_shot_on_computer_turn_rejected() {
    let (mut game, expected) = seeded_game(3);
    game.place_fleet(&standard_placements()).unwrap();
    let (mr, mc) = miss_cell(&expected);
    game.human_shot(mr, mc).unwrap();
    assert_eq!(game.turn(), Side::Computer);
    assert!(matches!(
        game.human_shot(0, 0),
        Err(GameError::Precondition(_))
    ));
}

#[tokio::test]
async fn test_computer_turn_on_human_turn_rejected() {
    let (mut game, _) = seeded_game(3);
    game.place_fleet(&standard_placements()).unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    let err = game
        .run_computer_turn(&NullOracle, &mut rng, None)
        .await
        .unwrap_err();
    assert!(matches!(err, GameError::Precondition(_)));
}

#[tokio::test]
async fn test_computer_turn_runs_until_miss_or_win() {
    let (mut game, expected) = seeded_game(5);
    game.place_fleet(&standard_placements()).unwrap();
    let (mr, mc) = miss_cell(&expected);
    game.human_shot(mr, mc).unwrap();

    let mut rng = SmallRng::seed_from_u64(99);
    game.run_computer_turn(&NullOracle, &mut rng, None)
        .await
        .unwrap();

    assert!(!game.history().is_empty());
    // every shot but the last must have been a hit, or the game ended
    for rec in &game.history()[..game.history().len() - 1] {
        assert!(rec.outcome.is_hit());
    }
    match game.phase() {
        Phase::Playing => {
            assert_eq!(game.turn(), Side::Human);
            let last = game.history().last().unwrap();
            assert_eq!(last.outcome, ShotOutcome::Miss);
        }
        Phase::Finished => assert_eq!(game.winner(), Some(Side::Computer)),
        Phase::Placement => panic!("cannot fall back to placement"),
    }
}

#[test]
fn test_finished_game_rejects_shots() {
    let (mut game, expected) = seeded_game(7);
    game.place_fleet(&standard_placements()).unwrap();
    let cells: Vec<(usize, usize)> = expected
        .ships()
        .iter()
        .flat_map(|s| s.cells().to_vec())
        .collect();
    for (r, c) in cells {
        game.human_shot(r, c).unwrap();
    }
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.winner(), Some(Side::Human));
    assert!(matches!(
        game.human_shot(9, 9),
        Err(GameError::Precondition(_))
    ));
}

#[test]
fn test_repeat_shot_leaves_game_untouched() {
    let (mut game, expected) = seeded_game(11);
    game.place_fleet(&standard_placements()).unwrap();
    let &(hr, hc) = &expected.ships()[0].cells()[0];
    game.human_shot(hr, hc).unwrap();
    let message_before = game.message().to_string();
    let tracking_before = game.human_tracking().clone();

    assert_eq!(game.human_shot(hr, hc).unwrap(), ShotOutcome::Repeat);
    assert_eq!(game.message(), message_before);
    assert_eq!(game.human_tracking(), &tracking_before);
    assert_eq!(game.turn(), Side::Human);
}
