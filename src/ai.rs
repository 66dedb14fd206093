//! Fallback targeting for the computer: finish wounded ships first, then
//! hunt on a parity pattern sized to the smallest surviving ship.

use crate::config::{BOARD_SIZE, CENTER_MAX, CENTER_MIN};
use crate::grid::{Cell, Grid};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

/// A detected run of two or more adjacent hits along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    pub horizontal: bool,
    /// The shared row (horizontal) or column (vertical).
    pub fixed: usize,
    pub lo: usize,
    pub hi: usize,
}

/// Cells marked `Hit` that are not part of a sunk ship yet.
pub fn open_hits(tracking: &Grid) -> Vec<(usize, usize)> {
    let mut hits = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if matches!(tracking.get(row, col), Ok(Cell::Hit)) {
                hits.push((row, col));
            }
        }
    }
    hits
}

/// Cells not shot at yet.
pub fn unshot_cells(tracking: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if matches!(tracking.get(row, col), Ok(Cell::Empty)) {
                cells.push((row, col));
            }
        }
    }
    cells
}

fn runs(values: &[usize]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < values.len() {
        let mut j = i;
        while j + 1 < values.len() && values[j + 1] == values[j] + 1 {
            j += 1;
        }
        if j > i {
            out.push((values[i], values[j]));
        }
        i = j + 1;
    }
    out
}

/// Find maximal colinear runs among the open hits, both axes.
pub fn detect_lines(hits: &[(usize, usize)]) -> Vec<Line> {
    let mut lines = Vec::new();
    for fixed in 0..BOARD_SIZE {
        let mut cols: Vec<usize> = hits
            .iter()
            .filter(|&&(r, _)| r == fixed)
            .map(|&(_, c)| c)
            .collect();
        cols.sort_unstable();
        for (lo, hi) in runs(&cols) {
            lines.push(Line {
                horizontal: true,
                fixed,
                lo,
                hi,
            });
        }
        let mut rows: Vec<usize> = hits
            .iter()
            .filter(|&&(_, c)| c == fixed)
            .map(|&(r, _)| r)
            .collect();
        rows.sort_unstable();
        for (lo, hi) in runs(&rows) {
            lines.push(Line {
                horizontal: false,
                fixed,
                lo,
                hi,
            });
        }
    }
    lines
}

/// Unshot cells extending a detected line beyond either end.
pub fn line_extensions(tracking: &Grid, lines: &[Line]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for line in lines {
        let ends = if line.horizontal {
            [(line.fixed, line.lo.wrapping_sub(1)), (line.fixed, line.hi + 1)]
        } else {
            [(line.lo.wrapping_sub(1), line.fixed), (line.hi + 1, line.fixed)]
        };
        for (r, c) in ends {
            if matches!(tracking.get(r, c), Ok(Cell::Empty)) && !out.contains(&(r, c)) {
                out.push((r, c));
            }
        }
    }
    out
}

/// Unshot orthogonal neighbours of the open hits. Never diagonal.
pub fn adjacent_candidates(tracking: &Grid, hits: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for &(row, col) in hits {
        let neighbours = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in neighbours {
            if matches!(tracking.get(r, c), Ok(Cell::Empty)) && !out.contains(&(r, c)) {
                out.push((r, c));
            }
        }
    }
    out
}

fn central(v: usize) -> bool {
    (CENTER_MIN..=CENTER_MAX).contains(&v)
}

/// Pick the next shot given the tracking grid and the smallest enemy ship
/// length still afloat. Decision order: extend a detected hit line, then any
/// neighbour of an open hit, then a central parity cell, then any parity
/// cell, then any unshot cell. Never returns a cell already shot; `None`
/// only when the whole board has been shot. Ties break uniformly through
/// `rng`, so a seeded generator reproduces the game.
pub fn select_target<R: Rng + ?Sized>(
    rng: &mut R,
    tracking: &Grid,
    smallest_afloat: usize,
) -> Option<(usize, usize)> {
    let hits = open_hits(tracking);
    if !hits.is_empty() {
        let lines = detect_lines(&hits);
        let extensions = line_extensions(tracking, &lines);
        if let Some(&pick) = extensions.choose(rng) {
            log::debug!("targeting: extending hit line at {:?}", pick);
            return Some(pick);
        }
        let neighbours = adjacent_candidates(tracking, &hits);
        if let Some(&pick) = neighbours.choose(rng) {
            log::debug!("targeting: probing around hit at {:?}", pick);
            return Some(pick);
        }
        // every neighbour already shot, resume the hunt
    }

    let unshot = unshot_cells(tracking);
    if smallest_afloat >= 2 {
        let parity: Vec<(usize, usize)> = unshot
            .iter()
            .copied()
            .filter(|&(r, c)| (r + c) % 2 == 0)
            .collect();
        let centre: Vec<(usize, usize)> = parity
            .iter()
            .copied()
            .filter(|&(r, c)| central(r) && central(c))
            .collect();
        if let Some(&pick) = centre.choose(rng) {
            return Some(pick);
        }
        if let Some(&pick) = parity.choose(rng) {
            return Some(pick);
        }
    }
    unshot.choose(rng).copied()
}
