//! Owner-board state: the cell grid plus the fleet registry, with placement
//! rules and attack resolution.

use log::debug;
use rand::Rng;

use crate::common::{AttackOutcome, GameError};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::grid::{Cell, Coord, Grid};
use crate::ship::{Orientation, Ship, ShipId};

/// Attempts per ship before random placement gives up. The full fleet covers
/// 17 of 100 cells, so fair sampling never comes close to this.
const PLACEMENT_RETRY_CAP: usize = 1_000;

/// One side's ground-truth board.
///
/// The grid and the registry describe the same ships two ways: every `Ship`
/// or `Hit` cell on the grid belongs to exactly one registry entry, and every
/// registry entry's run is marked on the grid. Placement is the only writer
/// of `Ship` cells and keeps the two in step.
pub struct Board {
    grid: Grid,
    fleet: [Option<Ship>; NUM_SHIPS],
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            fleet: [None; NUM_SHIPS],
        }
    }

    /// The underlying cell grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The registry entry for `id`, if that ship has been placed.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet[id.index()].as_ref()
    }

    /// Iterator over the placed ships in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.fleet.iter().flatten()
    }

    /// Placement predicate: true iff a `length`-cell run starting at `origin`
    /// stays on the board and covers only empty water. Pure; never mutates.
    pub fn validate_placement(
        &self,
        origin: Coord,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        for dist in 0..length {
            let coord = orientation.offset(origin, dist);
            match self.grid.get(coord) {
                Ok(Cell::Empty) => {}
                _ => return false,
            }
        }
        true
    }

    /// Place `id` with its origin at `origin`. Validates first and fails
    /// without touching state, so an invalid run can never mark cells.
    pub fn place(
        &mut self,
        id: ShipId,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.fleet[id.index()].is_some() {
            return Err(GameError::InvalidPlacement);
        }
        if !self.validate_placement(origin, id.length(), orientation) {
            return Err(GameError::InvalidPlacement);
        }
        let ship = Ship::new(id, origin, orientation)?;
        for &coord in ship.cells() {
            self.grid.set(coord, Cell::Ship)?;
        }
        self.fleet[id.index()] = Some(ship);
        Ok(())
    }

    /// Sample a valid placement for `id`: uniformly random orientation and
    /// uniformly random origin over the whole board, re-drawn until the run
    /// validates.
    ///
    /// Panics once `PLACEMENT_RETRY_CAP` draws all fail; that many misses is
    /// impossible against at most 17 occupied cells, so reaching the cap
    /// means the board is corrupt.
    pub fn random_placement<R: Rng>(&self, rng: &mut R, id: ShipId) -> (Coord, Orientation) {
        for _ in 0..PLACEMENT_RETRY_CAP {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if self.validate_placement(origin, id.length(), orientation) {
                return (origin, orientation);
            }
        }
        panic!(
            "no valid placement for {} after {} random draws",
            id.name(),
            PLACEMENT_RETRY_CAP
        );
    }

    /// Place the entire fleet at random, in fleet order.
    pub fn place_fleet_random<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for id in FLEET {
            let (origin, orientation) = self.random_placement(rng, id);
            self.place(id, origin, orientation)?;
            debug!(
                "placed {} at ({}, {}) {:?}",
                id.name(),
                origin.row,
                origin.col,
                orientation
            );
        }
        Ok(())
    }

    /// Resolve an attack against this board, mirroring every mark into the
    /// attacker's `view` at the same coordinates.
    ///
    /// A ship cell sinks the whole owning ship: every cell of its run turns
    /// `Hit` on both grids and the outcome names the ship. Open water turns
    /// that one cell `Miss` on both grids.
    ///
    /// Callers reject repeat attacks before resolving (the engine checks the
    /// attacker's view); a previously attacked cell still reports
    /// `AlreadyAttacked` here as a backstop.
    pub fn receive_attack(
        &mut self,
        view: &mut Grid,
        target: Coord,
    ) -> Result<AttackOutcome, GameError> {
        match self.grid.get(target)? {
            Cell::Ship => {
                let ship = self
                    .fleet
                    .iter()
                    .flatten()
                    .find(|ship| ship.contains(target))
                    .copied();
                match ship {
                    Some(ship) => {
                        for &coord in ship.cells() {
                            self.grid.set(coord, Cell::Hit)?;
                            view.set(coord, Cell::Hit)?;
                        }
                        Ok(AttackOutcome::Sunk(ship.id()))
                    }
                    // Placement writes the registry entry and the grid cells
                    // in the same call, so a ship cell always has an owner.
                    None => unreachable!("ship cell at {:?} has no fleet entry", target),
                }
            }
            Cell::Empty => {
                self.grid.set(target, Cell::Miss)?;
                view.set(target, Cell::Miss)?;
                Ok(AttackOutcome::Miss)
            }
            Cell::Hit | Cell::Miss => Err(GameError::AlreadyAttacked),
        }
    }

    /// True when no intact ship cell remains anywhere on the grid.
    pub fn all_ships_sunk(&self) -> bool {
        self.grid.count(Cell::Ship) == 0
    }

    /// Registry formulation of [`Board::all_ships_sunk`] for a single ship:
    /// every cell of its run is `Hit`. An unplaced ship is not sunk. The two
    /// formulations always agree; the test suite checks the equivalence.
    pub fn is_ship_sunk(&self, id: ShipId) -> bool {
        match self.ship(id) {
            Some(ship) => ship
                .cells()
                .iter()
                .all(|&coord| self.grid.get(coord) == Ok(Cell::Hit)),
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{:?}", self.grid)?;
        for ship in self.ships() {
            writeln!(f, "  {}: {:?}", ship.id().name(), ship.cells())?;
        }
        writeln!(f, "}}")
    }
}
