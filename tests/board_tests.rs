use broadside::{
    AttackOutcome, Board, Cell, Coord, GameError, Grid, Orientation, ShipId, BOARD_SIZE, FLEET,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_validate_placement_bounds_exhaustive() {
    let board = Board::new();
    for id in FLEET {
        let len = id.length();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let origin = Coord::new(row, col);
                // on an empty board the run is valid exactly when it fits
                assert_eq!(
                    board.validate_placement(origin, len, Orientation::Horizontal),
                    col + len <= BOARD_SIZE
                );
                assert_eq!(
                    board.validate_placement(origin, len, Orientation::Vertical),
                    row + len <= BOARD_SIZE
                );
            }
        }
    }
}

#[test]
fn test_place_rejects_overlap() -> Result<(), GameError> {
    let mut board = Board::new();
    board.place(ShipId::Destroyer, Coord::new(0, 0), Orientation::Horizontal)?;

    // the vertical run would share (0, 1) with the destroyer
    let err = board
        .place(ShipId::Submarine, Coord::new(0, 1), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, GameError::InvalidPlacement);

    // the failed placement marked nothing and registered nothing
    assert_eq!(board.grid().count(Cell::Ship), ShipId::Destroyer.length());
    assert!(board.ship(ShipId::Submarine).is_none());
    Ok(())
}

#[test]
fn test_place_rejects_duplicate_ship() -> Result<(), GameError> {
    let mut board = Board::new();
    board.place(ShipId::Cruiser, Coord::new(4, 4), Orientation::Horizontal)?;
    let err = board
        .place(ShipId::Cruiser, Coord::new(7, 0), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::InvalidPlacement);
    Ok(())
}

#[test]
fn test_place_rejects_overhang() {
    let mut board = Board::new();
    // the carrier is five long, J8 leaves room for three
    let err = board
        .place(ShipId::Carrier, Coord::new(9, 7), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::InvalidPlacement);
    assert_eq!(board.grid().count(Cell::Ship), 0);
}

#[test]
fn test_attack_sinks_whole_ship() -> Result<(), GameError> {
    let mut board = Board::new();
    let mut view = Grid::new();
    board.place(ShipId::Destroyer, Coord::new(0, 0), Orientation::Horizontal)?;

    // one shot on A1 takes the whole destroyer down
    let outcome = board.receive_attack(&mut view, Coord::new(0, 0))?;
    assert_eq!(outcome, AttackOutcome::Sunk(ShipId::Destroyer));

    for col in 0..ShipId::Destroyer.length() {
        assert_eq!(board.grid().get(Coord::new(0, col))?, Cell::Hit);
        assert_eq!(view.get(Coord::new(0, col))?, Cell::Hit);
    }
    assert!(board.is_ship_sunk(ShipId::Destroyer));

    // the other destroyer cell was resolved by the same attack
    let err = board
        .receive_attack(&mut view, Coord::new(0, 1))
        .unwrap_err();
    assert_eq!(err, GameError::AlreadyAttacked);
    Ok(())
}

#[test]
fn test_miss_marks_single_cell() -> Result<(), GameError> {
    let mut board = Board::new();
    let mut view = Grid::new();
    board.place(ShipId::Destroyer, Coord::new(0, 0), Orientation::Horizontal)?;

    let outcome = board.receive_attack(&mut view, Coord::new(5, 5))?;
    assert_eq!(outcome, AttackOutcome::Miss);
    assert_eq!(board.grid().count(Cell::Miss), 1);
    assert_eq!(view.count(Cell::Miss), 1);
    assert_eq!(board.grid().count(Cell::Ship), ShipId::Destroyer.length());

    let err = board
        .receive_attack(&mut view, Coord::new(5, 5))
        .unwrap_err();
    assert_eq!(err, GameError::AlreadyAttacked);
    Ok(())
}

#[test]
fn test_attack_on_empty_board_misses() -> Result<(), GameError> {
    let mut board = Board::new();
    let mut view = Grid::new();
    let outcome = board.receive_attack(&mut view, Coord::new(3, 7))?;
    assert_eq!(outcome, AttackOutcome::Miss);

    // exactly one cell changed on each grid
    assert_eq!(board.grid().count(Cell::Empty), BOARD_SIZE * BOARD_SIZE - 1);
    assert_eq!(board.grid().get(Coord::new(3, 7))?, Cell::Miss);
    assert_eq!(view.count(Cell::Empty), BOARD_SIZE * BOARD_SIZE - 1);
    Ok(())
}

#[test]
fn test_attack_out_of_bounds() {
    let mut board = Board::new();
    let mut view = Grid::new();
    let err = board
        .receive_attack(&mut view, Coord::new(0, BOARD_SIZE))
        .unwrap_err();
    assert_eq!(err, GameError::OutOfBounds);
}

#[test]
fn test_random_fleet_disjoint() -> Result<(), GameError> {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet_random(&mut rng)?;

    // full cell count means no two runs overlapped
    assert_eq!(board.grid().count(Cell::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(board.ships().count(), FLEET.len());
    Ok(())
}

#[test]
fn test_random_placement_reproducible() {
    let board = Board::new();
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    for id in FLEET {
        assert_eq!(
            board.random_placement(&mut rng1, id),
            board.random_placement(&mut rng2, id)
        );
    }
}

#[test]
fn test_all_ships_sunk() -> Result<(), GameError> {
    // an empty board has nothing afloat
    assert!(Board::new().all_ships_sunk());

    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(9);
    board.place_fleet_random(&mut rng)?;
    assert!(!board.all_ships_sunk());

    // one attack per ship sweeps the whole fleet
    let mut view = Grid::new();
    let targets: Vec<Coord> = board.ships().map(|ship| ship.cells()[0]).collect();
    for target in targets {
        board.receive_attack(&mut view, target)?;
    }
    assert!(board.all_ships_sunk());
    for id in FLEET {
        assert!(board.is_ship_sunk(id));
    }
    Ok(())
}

#[test]
fn test_unplaced_ship_not_sunk() {
    let board = Board::new();
    assert!(!board.is_ship_sunk(ShipId::Carrier));
}
