//! Fixed-size cell grids backing owner boards and attack views.
//!
//! A `Grid` is a plain `BOARD_SIZE`×`BOARD_SIZE` array of [`Cell`] values,
//! `Copy` and allocation-free. Owner boards use all four cell states; attack
//! views only ever hold `Empty`, `Hit`, and `Miss`.

use core::fmt;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// State of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, never attacked.
    Empty,
    /// An intact ship segment (owner boards only).
    Ship,
    /// A ship segment that has been destroyed.
    Hit,
    /// An attacked square that held no ship.
    Miss,
}

impl Cell {
    /// Glyph used by the console renderer.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// Zero-indexed board coordinate. Row 0 is presented as `A`, column 0 as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// A `BOARD_SIZE`×`BOARD_SIZE` grid of cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create a grid of open water.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell state at `coord`.
    pub fn get(&self, coord: Coord) -> Result<Cell, GameError> {
        self.check_bounds(coord)?;
        Ok(self.cells[coord.row][coord.col])
    }

    /// Overwrite the cell state at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GameError> {
        self.check_bounds(coord)?;
        self.cells[coord.row][coord.col] = cell;
        Ok(())
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Iterator over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Coord::new(row, col), cell))
        })
    }

    #[inline]
    fn check_bounds(&self, coord: Coord) -> Result<(), GameError> {
        if coord.in_bounds() {
            Ok(())
        } else {
            Err(GameError::OutOfBounds)
        }
    }
}

impl Default for Grid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
