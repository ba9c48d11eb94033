//! Word Scramble - CLI
//!
//! Runs the puzzle server or one of the terminal clients.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    client::{
        ClientConfig, HttpGameApi,
        config::{DEFAULT_ROUND_SECONDS, DEFAULT_SERVER},
    },
    commands::{run_serve, run_simple},
    scramble::ScramblerType,
    server::{
        ServerConfig,
        config::{DEFAULT_BIND, DEFAULT_WORDLIST},
    },
    wordlists::WordSource,
};

/// Default log filter for the server
const SERVER_LOG_FILTER: &str = "word_scramble=info,tower_http=info";

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Word scramble game: puzzle server and terminal clients",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    client: ClientArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP puzzle server
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "WORD_SCRAMBLE_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,

        /// Wordlist: 'builtin' (embedded list) or path to a CSV file with a Word column
        #[arg(
            short = 'w',
            long,
            env = "WORD_SCRAMBLE_WORDLIST",
            default_value = DEFAULT_WORDLIST
        )]
        wordlist: String,

        /// Scrambler: shuffle (default) or random-sort
        #[arg(long, env = "WORD_SCRAMBLE_SCRAMBLER", default_value = "shuffle")]
        scrambler: String,

        /// Fixed RNG seed for reproducible puzzles
        #[arg(long, env = "WORD_SCRAMBLE_SEED")]
        seed: Option<u64>,
    },

    /// Interactive TUI client (default)
    Play,

    /// Simple line-based client (no TUI)
    Simple,
}

#[derive(Args)]
struct ClientArgs {
    /// Game server base URL
    #[arg(
        short,
        long,
        global = true,
        env = "WORD_SCRAMBLE_SERVER",
        default_value = DEFAULT_SERVER
    )]
    server: String,

    /// Length of a round in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_ROUND_SECONDS)]
    round_seconds: u32,

    /// Ignore server responses to requests from an earlier round
    #[arg(long, global = true)]
    discard_stale: bool,

    /// Write TUI logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

impl ClientArgs {
    fn config(&self) -> ClientConfig {
        ClientConfig {
            server: self.server.clone(),
            round_seconds: self.round_seconds.max(1),
            discard_stale_responses: self.discard_stale,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file before clap reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Serve {
            bind,
            wordlist,
            scrambler,
            seed,
        } => {
            init_server_logging();
            let config = ServerConfig {
                bind,
                wordlist: WordSource::from_arg(&wordlist),
                scrambler: ScramblerType::from_name(&scrambler),
                seed,
            };
            run_serve(config).await
        }
        Commands::Play => {
            if let Some(path) = &cli.client.log_file {
                init_file_logging(path)?;
            }
            run_play_command(cli.client.config())
        }
        Commands::Simple => {
            init_client_logging();
            let config = cli.client.config();
            let api = HttpGameApi::new(config.server.clone());
            run_simple(&api, config).await
        }
    }
}

fn run_play_command(config: ClientConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let api = HttpGameApi::new(config.server.clone());
    let app = App::new(config);
    run_tui(app, api)
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_server_logging() {
    tracing_subscriber::registry()
        .with(env_filter(SERVER_LOG_FILTER))
        .with(fmt::layer())
        .init();
}

/// Warnings only, so log lines do not bury the game output
fn init_client_logging() {
    tracing_subscriber::registry()
        .with(env_filter("word_scramble=warn"))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter("word_scramble=info"))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
    Ok(())
}
