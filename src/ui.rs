//! Terminal rendering and coordinate parsing for the demo binary.

use crate::config::BOARD_SIZE;
use crate::grid::{Cell, Grid};
use crate::view::ShipStatus;

/// Print a board with column letters and row numbers.
pub fn print_grid(title: &str, grid: &Grid) {
    println!("\n  {}", title);
    print!("     ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("  {:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let cell = grid.get(r, c).unwrap_or(Cell::Empty);
            print!(" {}", cell.symbol());
        }
        println!();
    }
}

pub fn print_legend(reveal: bool) {
    if reveal {
        println!("  Legend: S=Ship  X=Hit  o=Miss  #=Sunk  .=Water");
    } else {
        println!("  Legend: X=Hit  o=Miss  #=Sunk  .=Unknown");
    }
}

pub fn print_fleet(title: &str, fleet: &[ShipStatus]) {
    println!("  {}", title);
    for ship in fleet {
        let status = if ship.sunk { "SUNK" } else { "afloat" };
        println!("    {} ({}): {}", ship.name, ship.length, status);
    }
}

/// Parse a coordinate like `B7` into zero-based (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., B7)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row_str));
    }
    Ok((row - 1, col))
}

/// Render zero-based (row, col) back into `B7` form.
pub fn coord_label(row: usize, col: usize) -> String {
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}
