//! CLI frontend for the Decida Aí duel game.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "decida",
    about = "Decida Aí — duelos \"o que você prefere?\" no terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play {
        /// Starting duel category
        #[arg(short, long, default_value = "Aleatório")]
        category: String,

        /// RNG seed for rare-duel rolls and leaderboard bots
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Starting energy
        #[arg(short, long, default_value = "5")]
        energy: i32,

        /// Seconds until the flash (double XP) event switches on
        #[arg(long, default_value = "30")]
        flash_delay: u64,

        /// Serve canned duels instead of calling the generative API
        #[arg(long)]
        offline: bool,

        /// Gemini API key (defaults to $GEMINI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Fetch and print a single duel
    Duel {
        /// Duel category
        #[arg(short, long, default_value = "Aleatório")]
        category: String,

        /// Serve a canned duel instead of calling the generative API
        #[arg(long)]
        offline: bool,

        /// Gemini API key (defaults to $GEMINI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Print a simulated leaderboard slice around a given XP score
    Leaderboard {
        /// XP score to estimate the rank from
        #[arg(short, long, default_value = "0")]
        xp: u64,

        /// Current streak shown on the user's row
        #[arg(long, default_value = "0")]
        streak: u32,

        /// RNG seed for the synthesized competitors
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Print the daily mission board
    Missions,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            category,
            seed,
            energy,
            flash_delay,
            offline,
            api_key,
        } => commands::play::run(
            &category,
            seed,
            energy,
            flash_delay,
            offline,
            api_key.as_deref(),
        ),
        Commands::Duel {
            category,
            offline,
            api_key,
        } => commands::duel::run(&category, offline, api_key.as_deref()),
        Commands::Leaderboard { xp, streak, seed } => commands::leaderboard::run(xp, streak, seed),
        Commands::Missions => commands::missions::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
