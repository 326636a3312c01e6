#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, ui, GameEngine, Side};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = 0,
        help = "Pause before each computer move, in milliseconds"
    )]
    delay_ms: u64,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("Welcome to Battleship!");
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    loop {
        let rng = match cli.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };
        let mut engine = GameEngine::new(rng);

        if !ui::run_setup(&mut engine)? {
            return Ok(());
        }
        println!("Computer is placing ships...");
        println!("Computer ships placed!");

        println!("\n{}", "=".repeat(50));
        println!("BATTLE BEGINS!");
        println!("{}", "=".repeat(50));

        let winner = loop {
            if ui::run_player_turn(&mut engine)?.is_none() {
                return Ok(());
            }
            if let Some(side) = engine.winner() {
                break side;
            }

            if cli.delay_ms > 0 {
                std::thread::sleep(std::time::Duration::from_millis(cli.delay_ms));
            }
            ui::run_computer_turn(&mut engine).map_err(|e| anyhow::anyhow!(e))?;
            if let Some(side) = engine.winner() {
                break side;
            }

            ui::print_player_board(&engine);
            if ui::prompt("Press Enter to continue...")?.is_none() {
                return Ok(());
            }
        };

        match winner {
            Side::Player => {
                println!("\n🎉 CONGRATULATIONS! You won! All computer ships destroyed! 🎉")
            }
            Side::Computer => {
                println!("\n💥 Game Over! Computer won! All your ships destroyed! 💥")
            }
        }

        match ui::prompt("Play again? (y/n): ")? {
            Some(ans) if ans.eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}
