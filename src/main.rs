//! trick-sim CLI - deals a deck and plays out a trick-taking game.
//!
//! The transcript goes to stdout; logs go to stderr.

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trick_sim::core::{GameConfig, DEFAULT_PLAYERS};
use trick_sim::games::trick::TrickGame;

#[derive(Parser)]
#[command(name = "trick-sim")]
#[command(about = "Simulate a trick-taking card game")]
struct Args {
    /// Player names in turn order, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PLAYERS.map(String::from))]
    players: Vec<String>,

    /// Game seed (for deterministic games); random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// One line per event
    Text,
    /// Game summary as JSON
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig::new().with_players(args.players).with_seed(seed);
    info!(seed, players = config.player_count(), "starting game");

    let mut game = TrickGame::new(&config)?;
    let summary = game.play()?;

    match args.format {
        OutputFormat::Text => {
            for event in game.take_events() {
                println!("{event}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}
