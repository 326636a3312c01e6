use crate::ship::ShipId;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Length of the longest fleet member (the Carrier).
pub const MAX_SHIP_LEN: usize = 5;

/// The fleet in the order ships are placed during setup.
pub const FLEET: [ShipId; NUM_SHIPS] = [
    ShipId::Destroyer,
    ShipId::Submarine,
    ShipId::Cruiser,
    ShipId::Battleship,
    ShipId::Carrier,
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;
