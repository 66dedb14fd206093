use clap::{Parser, Subcommand};
use flotilla::{
    coord_label, init_logging, parse_coord, print_fleet, print_grid, print_legend, select_target,
    Cell, Fleet, GameSession, GameView, NullOracle, Phase, Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Delay in milliseconds before each computer shot")]
        pace_ms: Option<u64>,
    },
    /// Watch a full game play itself, both sides driven by the heuristic.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn session_for(seed: Option<u64>) -> GameSession {
    match seed {
        Some(s) => GameSession::with_seed(Box::new(NullOracle), s),
        None => GameSession::new(Box::new(NullOracle)),
    }
}

fn side_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed, pace_ms } => play(seed, pace_ms).await,
        Commands::Demo { seed } => demo(seed).await,
    }
}

async fn play(seed: Option<u64>, pace_ms: Option<u64>) -> anyhow::Result<()> {
    let session = session_for(seed);
    let session = match pace_ms {
        Some(ms) => session.with_pacing(Duration::from_millis(ms)),
        None => session,
    };
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let view = session.start_new_game().await;
    println!("{}", view.message);

    // Ships are deployed automatically; the submission still runs through
    // full placement validation.
    let mut rng = side_rng(seed);
    let (fleet, _) = Fleet::random(&mut rng);
    let mut view = session.submit_fleet_placement(&fleet.placements()).await?;
    println!("{}", view.message);

    let stdin = io::stdin();
    loop {
        print_grid("Your waters", &view.human_board);
        print_legend(true);
        print_grid("Enemy waters", &view.human_tracking);
        print_legend(false);
        print_fleet("Enemy fleet", &view.computer_fleet);

        print!("\nYour shot (e.g. B7, or 'quit'): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            break;
        }
        let (row, col) = match parse_coord(input) {
            Ok(coord) => coord,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        if !matches!(view.human_tracking.get(row, col), Ok(Cell::Empty)) {
            println!("You already fired at {}", coord_label(row, col));
            continue;
        }
        view = match session.submit_shot(row, col).await {
            Ok(v) => v,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        println!("{}", view.message);

        while view.phase == Phase::Playing && view.turn == Side::Computer {
            view = session.run_computer_turn().await?;
            println!("{}", view.message);
        }
        if view.phase == Phase::Finished {
            break;
        }
    }

    finish(&view);
    Ok(())
}

async fn demo(seed: Option<u64>) -> anyhow::Result<()> {
    let session = session_for(seed);
    session.start_new_game().await;

    let mut rng = side_rng(seed);
    let (fleet, _) = Fleet::random(&mut rng);
    let mut view = session.submit_fleet_placement(&fleet.placements()).await?;

    let mut shots = 0usize;
    while view.phase == Phase::Playing {
        match view.turn {
            Side::Human => {
                let smallest = view
                    .computer_fleet
                    .iter()
                    .filter(|s| !s.sunk)
                    .map(|s| s.length)
                    .min()
                    .unwrap_or(1);
                let (row, col) = match select_target(&mut rng, &view.human_tracking, smallest) {
                    Some(coord) => coord,
                    None => break,
                };
                view = session.submit_shot(row, col).await?;
                println!("{}", view.message);
            }
            Side::Computer => {
                view = session.run_computer_turn().await?;
                println!("{}", view.message);
            }
        }
        shots += 1;
        if shots > 400 {
            anyhow::bail!("demo game did not terminate");
        }
    }

    finish(&view);
    Ok(())
}

fn finish(view: &GameView) {
    print_grid("Your waters", &view.human_board);
    print_grid("Enemy waters", &view.human_tracking);
    match view.winner {
        Some(Side::Human) => println!("\nVICTORY - {}", view.message),
        Some(Side::Computer) => println!("\nDEFEAT - {}", view.message),
        None => println!("\nGame abandoned"),
    }
}
