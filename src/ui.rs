#![cfg(feature = "std")]

//! Console front end: coordinate parsing, grid rendering, and the
//! interactive setup and turn loops.

use std::io::{self, Write};

use crate::common::{AttackOutcome, GameError};
use crate::config::BOARD_SIZE;
use crate::game::GameEngine;
use crate::grid::{Cell, Coord, Grid};
use crate::ship::Orientation;

/// Parse a coordinate like `A1` or `j10`: row letter first, column number
/// second. Only strings naming a real board cell parse.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let row_ch = chars.next()?.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return None;
    }
    let row = (row_ch as u8 - b'A') as usize;
    let col: usize = chars.as_str().trim().parse().ok()?;
    if col == 0 {
        return None;
    }
    let coord = Coord::new(row, col - 1);
    if coord.in_bounds() {
        Some(coord)
    } else {
        None
    }
}

/// Inverse of [`parse_coord`] for on-board coordinates.
pub fn format_coord(coord: Coord) -> String {
    format!("{}{}", (b'A' + coord.row as u8) as char, coord.col + 1)
}

/// Parse a placement direction: `H` or `V`, any case.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_uppercase().as_str() {
        "H" => Some(Orientation::Horizontal),
        "V" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Render a grid as the ten-row console block, column numbers across the top
/// and row letters down the side. With `show_ships` off, intact ship cells
/// render as open water, which is how a board looks to its attacker.
pub fn render_grid(grid: &Grid, show_ships: bool) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for col in 1..=BOARD_SIZE {
        out.push_str(&format!("{:2}", col));
    }
    out.push('\n');
    for row in 0..BOARD_SIZE {
        out.push((b'A' + row as u8) as char);
        out.push(' ');
        for col in 0..BOARD_SIZE {
            let cell = grid.get(Coord::new(row, col)).unwrap_or(Cell::Empty);
            let glyph = match cell {
                Cell::Ship if !show_ships => Cell::Empty.glyph(),
                other => other.glyph(),
            };
            out.push(' ');
            out.push(glyph);
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Print the player's own fleet board.
pub fn print_player_board(engine: &GameEngine) {
    println!("\nYour board:");
    print!("{}", render_grid(engine.player_board().grid(), true));
}

/// Print `msg`, flush, and read one line from stdin. Returns the trimmed
/// line, or `None` once stdin is closed.
pub fn prompt(msg: &str) -> io::Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interactive fleet placement, one ship at a time in fleet order. An empty
/// direction places everything still missing at random. Returns `false` if
/// stdin closed before the fleet was complete.
pub fn run_setup(engine: &mut GameEngine) -> io::Result<bool> {
    println!("Place your ships!");
    println!("(press Enter at a direction prompt to place the remaining ships randomly)");
    print!("{}", render_grid(engine.player_board().grid(), true));
    while let Some(id) = engine.next_ship() {
        println!("\nPlacing {} (length {})", id.name(), id.length());
        let direction = match prompt("Direction (H for horizontal, V for vertical): ")? {
            Some(line) => line,
            None => return Ok(false),
        };
        if direction.is_empty() {
            match engine.place_player_fleet_random() {
                Ok(()) => {
                    println!("Remaining ships placed randomly.");
                    print!("{}", render_grid(engine.player_board().grid(), true));
                    break;
                }
                Err(err) => println!("Error: {}", err),
            }
            continue;
        }
        let orientation = match parse_orientation(&direction) {
            Some(orientation) => orientation,
            None => {
                println!("Please enter H or V");
                continue;
            }
        };
        let origin = match prompt("Enter starting coordinate (e.g., A1): ")? {
            Some(line) => match parse_coord(&line) {
                Some(coord) => coord,
                None => {
                    println!("Invalid coordinate");
                    continue;
                }
            },
            None => return Ok(false),
        };
        match engine.place_player_ship(origin, orientation) {
            Ok(placed) => {
                println!("{} placed successfully!", placed.name());
                print!("{}", render_grid(engine.player_board().grid(), true));
            }
            Err(_) => println!("Cannot place ship there. Try again."),
        }
    }
    Ok(true)
}

/// Prompt for the player's attack until one resolves. Returns the outcome,
/// or `None` once stdin is closed.
pub fn run_player_turn(engine: &mut GameEngine) -> io::Result<Option<AttackOutcome>> {
    println!("\n--- Your Turn ---");
    println!("Your attack board:");
    print!("{}", render_grid(engine.player_view(), false));
    loop {
        let line = match prompt("Enter attack coordinate (e.g., A1): ")? {
            Some(line) => line,
            None => return Ok(None),
        };
        let target = match parse_coord(&line) {
            Some(coord) => coord,
            None => {
                println!("Invalid coordinate");
                continue;
            }
        };
        match engine.attack(target) {
            Ok(outcome) => {
                match outcome {
                    AttackOutcome::Sunk(id) => {
                        println!("HIT AND SUNK! You destroyed the computer's {}!", id.name())
                    }
                    AttackOutcome::Miss => println!("Miss!"),
                }
                return Ok(Some(outcome));
            }
            Err(GameError::AlreadyAttacked) => println!("You already attacked this position!"),
            Err(err) => println!("{}", err),
        }
    }
}

/// Resolve and announce the computer's turn.
pub fn run_computer_turn(engine: &mut GameEngine) -> Result<(), GameError> {
    println!("\n--- Computer's Turn ---");
    let (target, outcome) = engine.computer_attack()?;
    match outcome {
        AttackOutcome::Sunk(id) => println!(
            "Computer attacks {} - HIT AND SUNK! Computer destroyed your {}!",
            format_coord(target),
            id.name()
        ),
        AttackOutcome::Miss => println!("Computer attacks {} - Miss!", format_coord(target)),
    }
    Ok(())
}
