use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Central region favoured by the hunt heuristic, inclusive on both ends.
pub const CENTER_MIN: usize = 2;
pub const CENTER_MAX: usize = 7;

/// Look up a catalog entry by name.
pub fn ship_type(name: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|s| s.name() == name)
}
