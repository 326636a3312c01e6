//! Fleet identities and placed-ship geometry.

use core::fmt;

use crate::common::GameError;
use crate::config::MAX_SHIP_LEN;
use crate::grid::Coord;

/// Direction a ship run extends in: horizontal runs grow along the row
/// (column increases), vertical runs grow down the column (row increases).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The cell `dist` squares from `origin` along this orientation.
    pub fn offset(self, origin: Coord, dist: usize) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(origin.row, origin.col.saturating_add(dist)),
            Orientation::Vertical => Coord::new(origin.row.saturating_add(dist), origin.col),
        }
    }
}

/// Identity of a fleet member. The fleet is closed: each side fields exactly
/// one of each of these five ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipId {
    Destroyer,
    Submarine,
    Cruiser,
    Battleship,
    Carrier,
}

impl ShipId {
    pub const fn name(self) -> &'static str {
        match self {
            ShipId::Destroyer => "Destroyer",
            ShipId::Submarine => "Submarine",
            ShipId::Cruiser => "Cruiser",
            ShipId::Battleship => "Battleship",
            ShipId::Carrier => "Carrier",
        }
    }

    pub const fn length(self) -> usize {
        match self {
            ShipId::Destroyer => 2,
            ShipId::Submarine => 3,
            ShipId::Cruiser => 3,
            ShipId::Battleship => 4,
            ShipId::Carrier => 5,
        }
    }

    /// Stable registry index, `0..NUM_SHIPS`.
    pub const fn index(self) -> usize {
        match self {
            ShipId::Destroyer => 0,
            ShipId::Submarine => 1,
            ShipId::Cruiser => 2,
            ShipId::Battleship => 3,
            ShipId::Carrier => 4,
        }
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship placed on a board: its identity plus the ordered run of cells it
/// occupies, origin first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    cells: [Coord; MAX_SHIP_LEN],
}

impl Ship {
    /// Compute the run of cells covered by `id` starting at `origin`.
    /// Fails if any part of the run leaves the board.
    pub fn new(id: ShipId, origin: Coord, orientation: Orientation) -> Result<Self, GameError> {
        if !origin.in_bounds() {
            return Err(GameError::InvalidPlacement);
        }
        let mut cells = [origin; MAX_SHIP_LEN];
        for (dist, slot) in cells.iter_mut().enumerate().take(id.length()) {
            let coord = orientation.offset(origin, dist);
            if !coord.in_bounds() {
                return Err(GameError::InvalidPlacement);
            }
            *slot = coord;
        }
        Ok(Ship { id, cells })
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    /// The occupied cells in placement order, origin first.
    pub fn cells(&self) -> &[Coord] {
        &self.cells[..self.id.length()]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }
}
