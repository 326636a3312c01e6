#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{Cell, Coord, GameEngine, Grid, Phase, Side};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Uniform draw over the cells this view has not attacked yet.
#[cfg(feature = "std")]
fn random_untried(view: &Grid, rng: &mut SmallRng) -> Coord {
    let open: Vec<Coord> = view
        .iter()
        .filter(|&(_, cell)| cell == Cell::Empty)
        .map(|(coord, _)| coord)
        .collect();
    open[rng.random_range(0..open.len())]
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // seed1 drives the engine (computer placement and shots), seed2 the
    // stand-in player.
    let mut engine = GameEngine::from_seed(seed1);
    let mut player_rng = SmallRng::seed_from_u64(seed2);
    engine
        .place_player_fleet_random()
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut player_shots: usize = 0;
    let mut computer_shots: usize = 0;
    let winner = loop {
        if let Phase::Finished(side) = engine.phase() {
            break side;
        }
        match engine.turn() {
            Side::Player => {
                let target = random_untried(engine.player_view(), &mut player_rng);
                engine.attack(target).map_err(|e| anyhow::anyhow!(e))?;
                player_shots += 1;
            }
            Side::Computer => {
                engine.computer_attack().map_err(|e| anyhow::anyhow!(e))?;
                computer_shots += 1;
            }
        }
    };

    let result = json!({
        "player": {"shots": player_shots},
        "computer": {"shots": computer_shots},
        "winner": winner.name(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
