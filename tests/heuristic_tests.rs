use flotilla::{
    adjacent_candidates, detect_lines, line_extensions, open_hits, select_target, unshot_cells,
    Cell, Grid, CENTER_MAX, CENTER_MIN,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_open_hits_excludes_sunk() {
    let mut grid = Grid::new();
    grid.set(2, 2, Cell::Hit).unwrap();
    grid.set(3, 3, Cell::Sunk).unwrap();
    grid.set(4, 4, Cell::Miss).unwrap();
    assert_eq!(open_hits(&grid), vec![(2, 2)]);
}

#[test]
fn test_detect_horizontal_line() {
    let hits = vec![(5, 4), (5, 5), (5, 6)];
    let lines = detect_lines(&hits);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].horizontal);
    assert_eq!((lines[0].fixed, lines[0].lo, lines[0].hi), (5, 4, 6));
}

#[test]
fn test_detect_vertical_line() {
    let hits = vec![(2, 7), (3, 7)];
    let lines = detect_lines(&hits);
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].horizontal);
    assert_eq!((lines[0].fixed, lines[0].lo, lines[0].hi), (7, 2, 3));
}

#[test]
fn test_isolated_hits_form_no_line() {
    let hits = vec![(1, 1), (1, 3), (4, 1)];
    assert!(detect_lines(&hits).is_empty());
}

#[test]
fn test_line_extensions_skip_shot_cells() {
    let mut grid = Grid::new();
    grid.set(5, 4, Cell::Hit).unwrap();
    grid.set(5, 5, Cell::Hit).unwrap();
    grid.set(5, 3, Cell::Miss).unwrap();
    let lines = detect_lines(&open_hits(&grid));
    let ext = line_extensions(&grid, &lines);
    assert_eq!(ext, vec![(5, 6)]);
}

#[test]
fn test_target_mode_picks_orthogonal_neighbour() {
    let mut grid = Grid::new();
    grid.set(5, 5, Cell::Hit).unwrap();
    let neighbours = [(4, 5), (6, 5), (5, 4), (5, 6)];
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pick = select_target(&mut rng, &grid, 2).unwrap();
        assert!(neighbours.contains(&pick), "diagonal or distant pick {:?}", pick);
    }
}

#[test]
fn test_target_mode_prefers_line_extension() {
    let mut grid = Grid::new();
    grid.set(5, 4, Cell::Hit).unwrap();
    grid.set(5, 5, Cell::Hit).unwrap();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pick = select_target(&mut rng, &grid, 2).unwrap();
        assert!(
            pick == (5, 3) || pick == (5, 6),
            "expected a line extension, got {:?}",
            pick
        );
    }
}

#[test]
fn test_corner_hit_has_two_candidates() {
    let mut grid = Grid::new();
    grid.set(0, 0, Cell::Hit).unwrap();
    let candidates = adjacent_candidates(&grid, &open_hits(&grid));
    assert_eq!(candidates.len(), 2);
    assert!(candidates.contains(&(1, 0)));
    assert!(candidates.contains(&(0, 1)));
}

#[test]
fn test_hunt_mode_uses_central_parity() {
    let grid = Grid::new();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (r, c) = select_target(&mut rng, &grid, 2).unwrap();
        assert_eq!((r + c) % 2, 0, "hunt shot off the parity pattern");
        assert!((CENTER_MIN..=CENTER_MAX).contains(&r));
        assert!((CENTER_MIN..=CENTER_MAX).contains(&c));
    }
}

#[test]
fn test_exhausted_neighbours_fall_back_to_hunt() {
    let mut grid = Grid::new();
    grid.set(0, 0, Cell::Hit).unwrap();
    grid.set(0, 1, Cell::Miss).unwrap();
    grid.set(1, 0, Cell::Miss).unwrap();
    let mut rng = SmallRng::seed_from_u64(17);
    let pick = select_target(&mut rng, &grid, 2).unwrap();
    assert_eq!(grid.get(pick.0, pick.1).unwrap(), Cell::Empty);
}

#[test]
fn test_never_returns_a_shot_cell() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut grid = Grid::new();
    for n in 0..100 {
        let (r, c) = select_target(&mut rng, &grid, 2)
            .unwrap_or_else(|| panic!("board exhausted after {} shots", n));
        assert_eq!(grid.get(r, c).unwrap(), Cell::Empty);
        // alternate marks so both hunt and target paths are exercised
        let mark = if n % 3 == 0 { Cell::Hit } else { Cell::Miss };
        grid.set(r, c, mark).unwrap();
    }
    assert!(unshot_cells(&grid).is_empty());
    assert!(select_target(&mut rng, &grid, 2).is_none());
}
