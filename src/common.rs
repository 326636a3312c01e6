//! Shared engine types: attack outcomes and the error taxonomy.

use crate::ship::ShipId;

/// Result of resolving an attack.
///
/// There is no plain "hit": landing on any ship cell destroys the whole ship
/// in the same resolution, so every non-miss reports the sunk ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The attack landed on a ship; the entire ship is now sunk.
    Sunk(ShipId),
    /// The attack landed on open water.
    Miss,
}

/// Errors reported to the presentation layer. Every failed operation leaves
/// engine state untouched, so the caller can re-prompt and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Placement run leaves the board or covers a non-empty cell.
    InvalidPlacement,
    /// Coordinate outside the board.
    OutOfBounds,
    /// The attacking side already targeted this coordinate.
    AlreadyAttacked,
    /// Operation does not belong to the current phase or turn.
    InvalidPhase,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidPlacement => {
                write!(f, "Ship placement is out of bounds or overlaps another ship")
            }
            GameError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::AlreadyAttacked => write!(f, "This position was already attacked"),
            GameError::InvalidPhase => write!(f, "Action is not allowed in the current phase"),
        }
    }
}
