#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship_rules::{
    init_logging, Fleet, Game, Position, Rules, Ship, ShotOutcome, BOARD_SIZE, FLEET_SIZE,
    MIN_SPACING,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Place a fleet, fire a fixed list of shots and print a JSON report.
    Replay {
        #[arg(long = "ship", help = "Ship as category:bearing:row,col (e.g. galleon:n:0,0)")]
        ships: Vec<String>,
        #[arg(
            long = "shot",
            allow_hyphen_values = true,
            help = "Shot as row,col, fired in the order given"
        )]
        shots: Vec<Position>,
        #[arg(long, default_value_t = BOARD_SIZE)]
        board_size: u8,
        #[arg(long, default_value_t = FLEET_SIZE)]
        max_fleet: usize,
        #[arg(long, default_value_t = MIN_SPACING)]
        min_spacing: u32,
    },
    /// Print the cells a ship would occupy.
    Footprint {
        #[arg(help = "Ship as category:bearing:row,col")]
        ship: String,
    },
}

#[cfg(feature = "std")]
fn replay(ships: &[String], shots: &[Position], rules: Rules) -> serde_json::Value {
    let mut fleet = Fleet::with_rules(rules);
    let mut rejected = Vec::new();
    for descriptor in ships {
        match descriptor.parse::<Ship>() {
            Ok(ship) => {
                if !fleet.try_add(ship) {
                    rejected.push(json!({"ship": descriptor, "reason": "placement"}));
                }
            }
            Err(e) => rejected.push(json!({"ship": descriptor, "reason": e.to_string()})),
        }
    }

    let mut game = Game::new(fleet);
    let fired: Vec<_> = shots
        .iter()
        .map(|&pos| {
            let outcome = game.shoot(pos);
            let sunk = match outcome {
                ShotOutcome::Sunk(i) => game.fleet().ships().get(i).map(|s| s.to_string()),
                _ => None,
            };
            json!({"at": pos, "outcome": outcome, "sunk": sunk})
        })
        .collect();

    json!({
        "rules": rules,
        "fleet": game.fleet().ships(),
        "rejected": rejected,
        "shots": fired,
        "stats": game.stats(),
    })
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging().context("failed to install logger")?;
    let cli = Cli::parse();

    let report = match cli.command {
        Commands::Replay {
            ships,
            shots,
            board_size,
            max_fleet,
            min_spacing,
        } => replay(
            &ships,
            &shots,
            Rules::new(board_size, max_fleet, min_spacing),
        ),
        Commands::Footprint { ship } => {
            let ship: Ship = ship
                .parse()
                .with_context(|| format!("cannot build ship from '{}'", ship))?;
            json!({"ship": ship.to_string(), "positions": ship.positions()})
        }
    };

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
