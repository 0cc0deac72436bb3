//! mtga-log - Follow the MTG Arena client log and print decoded events.

use std::path::PathBuf;

use clap::{Parser as ClapParser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mtga_log::config::{Config, ConfigLoader};
use mtga_log::display;
use mtga_log::event::EventKind;
use mtga_log::tail::StartPosition;
use mtga_log::{watch, Parser};

#[derive(ClapParser)]
#[command(
    name = "mtga-log",
    about = "Follow the MTG Arena client log and print decoded events",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file to use instead of the default search paths.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tail the log and print every decoded event.
    Watch {
        /// Log file (defaults to the client's log location).
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Replay the log from the beginning.
        #[arg(long)]
        from_start: bool,
        /// Stop at end of file instead of waiting for more.
        #[arg(long)]
        no_follow: bool,
        /// Poll interval in milliseconds.
        #[arg(long)]
        poll_ms: Option<u64>,
        /// Print payloads without truncation.
        #[arg(long)]
        raw: bool,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Config {
    let loader = path.map_or_else(ConfigLoader::new, ConfigLoader::with_path);
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            display::print_error(&e.to_string());
            std::process::exit(2);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config);

    match cli.command {
        Commands::Watch {
            file,
            from_start,
            no_follow,
            poll_ms,
            raw,
        } => {
            if file.is_some() {
                config.tail.path = file;
            }
            if from_start {
                config.tail.start = StartPosition::Beginning;
            }
            if no_follow {
                config.tail.follow = false;
            }
            if let Some(ms) = poll_ms {
                config.tail.poll_interval_ms = ms;
            }

            let Some(path) = config.tail.resolve_path() else {
                display::print_error("No log file given and no default location on this platform");
                std::process::exit(2);
            };

            let mut parser = Parser::with_config(config.parser.clone());
            for &kind in EventKind::ALL {
                parser
                    .registry_mut()
                    .on(kind, move |event| display::print_event(event, raw));
            }

            let cancel = CancellationToken::new();
            let ctrl_c = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("Interrupted, stopping");
                    ctrl_c.cancel();
                }
            });

            tracing::info!(
                path = %path.display(),
                start = ?config.tail.start,
                follow = config.tail.follow,
                "Starting mtga-log"
            );
            match watch(path, config.tail.options(), &mut parser, cancel).await {
                Ok(summary) => display::print_summary(&summary),
                Err(e) => {
                    display::print_error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }
    }
}
