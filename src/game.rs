//! Game engine: both boards, the phase machine, and turn resolution.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::{AttackOutcome, GameError};
use crate::config::{BOARD_SIZE, FLEET};
use crate::grid::{Cell, Coord, Grid};
use crate::ship::{Orientation, ShipId};

/// Draws per computer turn before target selection gives up. While the game
/// is in progress at least one cell is unattacked, so the cap is only
/// reachable through a broken phase machine.
const TARGET_RETRY_CAP: usize = 10_000;

/// One of the two combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Computer => "computer",
        }
    }
}

/// Where the game stands. Attacks are only legal in `InProgress`; placement
/// is only legal in `Setup`. `Finished` is terminal and names the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Setup,
    InProgress,
    Finished(Side),
}

/// Winner given both ground-truth boards, or `None` while both fleets still
/// float. The computer's board is checked first, so if both fleets were ever
/// down at once the player would take the win.
pub fn winner_between(player: &Board, computer: &Board) -> Option<Side> {
    if computer.all_ships_sunk() {
        Some(Side::Player)
    } else if player.all_ships_sunk() {
        Some(Side::Computer)
    } else {
        None
    }
}

/// A complete single game against the computer.
///
/// The engine owns four grids: each side's ground-truth [`Board`] and each
/// side's attack view of the other's waters. Views only ever hold `Empty`,
/// `Hit`, and `Miss`; intact ships never leak into them.
///
/// A finished engine stays finished. Starting over means building a new
/// engine value.
pub struct GameEngine {
    player_board: Board,
    computer_board: Board,
    player_view: Grid,
    computer_view: Grid,
    phase: Phase,
    turn: Side,
    rng: SmallRng,
}

impl GameEngine {
    /// Start a new game in the setup phase. The computer's fleet is placed
    /// immediately; the player's board starts empty.
    pub fn new(mut rng: SmallRng) -> Self {
        let mut computer_board = Board::new();
        computer_board
            .place_fleet_random(&mut rng)
            .expect("empty board admits the standard fleet");
        GameEngine {
            player_board: Board::new(),
            computer_board,
            player_view: Grid::new(),
            computer_view: Grid::new(),
            phase: Phase::Setup,
            turn: Side::Player,
            rng,
        }
    }

    /// New game from a fixed seed. Equal seeds give equal computer
    /// placements and equal computer shot sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose move it is. Only meaningful while the game is in progress.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The winner once the game has finished.
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    /// The player's own board, ships and all.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// What the player knows of the computer's waters.
    pub fn player_view(&self) -> &Grid {
        &self.player_view
    }

    /// The computer's ground-truth board. The honest rendering of the
    /// computer's waters is [`GameEngine::player_view`]; this accessor is for
    /// inspection and tests.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// What the computer knows of the player's waters.
    pub fn computer_view(&self) -> &Grid {
        &self.computer_view
    }

    /// The next ship the player has to place, in fleet order, or `None` once
    /// the fleet is complete.
    pub fn next_ship(&self) -> Option<ShipId> {
        FLEET
            .iter()
            .copied()
            .find(|&id| self.player_board.ship(id).is_none())
    }

    /// Whether a run for `id` starting at `origin` would be a legal player
    /// placement right now. Purely a board check; phase and fleet order are
    /// enforced by [`GameEngine::place_player_ship`].
    pub fn validate_placement(&self, id: ShipId, origin: Coord, orientation: Orientation) -> bool {
        self.player_board
            .validate_placement(origin, id.length(), orientation)
    }

    /// Place the next ship of the player's fleet. Once the last ship lands
    /// the game moves to `InProgress` with the player to move.
    pub fn place_player_ship(
        &mut self,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::InvalidPhase);
        }
        let id = match self.next_ship() {
            Some(id) => id,
            None => unreachable!("setup phase with every ship placed"),
        };
        self.player_board.place(id, origin, orientation)?;
        self.finish_setup_if_complete();
        Ok(id)
    }

    /// Place whatever remains of the player's fleet at random, then move to
    /// `InProgress`. Usable at any point during setup.
    pub fn place_player_fleet_random(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::InvalidPhase);
        }
        while let Some(id) = self.next_ship() {
            let (origin, orientation) = self.player_board.random_placement(&mut self.rng, id);
            self.player_board.place(id, origin, orientation)?;
        }
        self.finish_setup_if_complete();
        Ok(())
    }

    /// Resolve the player's attack on the computer's waters.
    ///
    /// Fails with `InvalidPhase` out of turn, `OutOfBounds` off the board,
    /// and `AlreadyAttacked` on a repeat target; a failed attack changes
    /// nothing and the player keeps the turn.
    pub fn attack(&mut self, target: Coord) -> Result<AttackOutcome, GameError> {
        self.ensure_turn(Side::Player)?;
        match self.player_view.get(target)? {
            Cell::Empty => {}
            _ => return Err(GameError::AlreadyAttacked),
        }
        let outcome = self
            .computer_board
            .receive_attack(&mut self.player_view, target)?;
        debug!(
            "player attacks ({}, {}): {:?}",
            target.row, target.col, outcome
        );
        self.conclude_turn();
        Ok(outcome)
    }

    /// Resolve the computer's turn: a uniformly random draw over the cells
    /// it has not attacked yet. Returns the chosen target with the outcome.
    pub fn computer_attack(&mut self) -> Result<(Coord, AttackOutcome), GameError> {
        self.ensure_turn(Side::Computer)?;
        let target = self.random_target();
        let outcome = self
            .player_board
            .receive_attack(&mut self.computer_view, target)?;
        debug!(
            "computer attacks ({}, {}): {:?}",
            target.row, target.col, outcome
        );
        self.conclude_turn();
        Ok((target, outcome))
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.phase != Phase::InProgress || self.turn != side {
            return Err(GameError::InvalidPhase);
        }
        Ok(())
    }

    fn finish_setup_if_complete(&mut self) {
        if self.next_ship().is_none() {
            self.phase = Phase::InProgress;
            self.turn = Side::Player;
            info!("setup complete, player to move");
        }
    }

    fn random_target(&mut self) -> Coord {
        for _ in 0..TARGET_RETRY_CAP {
            let coord = Coord::new(
                self.rng.random_range(0..BOARD_SIZE),
                self.rng.random_range(0..BOARD_SIZE),
            );
            if self.computer_view.get(coord) == Ok(Cell::Empty) {
                return coord;
            }
        }
        panic!("no fresh target after {} random draws", TARGET_RETRY_CAP);
    }

    fn conclude_turn(&mut self) {
        if let Some(side) = winner_between(&self.player_board, &self.computer_board) {
            self.phase = Phase::Finished(side);
            info!("game over, {} wins", side.name());
        } else {
            self.turn = self.turn.opponent();
        }
    }
}
