use automata_view::api::{Protocol, build_backend};
use automata_view::core::config::{self, CliOverrides, ResolvedConfig};
use automata_view::core::controller::{Applied, ViewController};
use automata_view::core::state::ViewState;
use automata_view::{Mode, tui};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "automata-view", about = "Terminal client for a Turing Machine / NFA simulation server")]
struct Args {
    /// Automaton to start in
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Simulation server base URL
    #[arg(short, long)]
    server: Option<String>,

    /// Request shape the server speaks
    #[arg(short, long, value_enum)]
    protocol: Option<Protocol>,

    /// Submit this input once, print the answer and exit
    #[arg(short, long)]
    input: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to automata-view.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("automata-view.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}, using defaults");
        log::warn!("Config load failed: {}", e);
        Default::default()
    });
    let cli = CliOverrides {
        mode: args.mode,
        base_url: args.server,
        protocol: args.protocol,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Automata View starting: server={}, protocol={:?}, mode={:?}",
        resolved.base_url,
        resolved.protocol,
        resolved.mode
    );

    match args.input {
        Some(input) => run_once(&resolved, input).await,
        None => tui::run(resolved),
    }
}

/// One submission without a terminal UI. Exits non-zero on failure.
async fn run_once(config: &ResolvedConfig, input: String) -> std::io::Result<()> {
    let backend = build_backend(config).map_err(std::io::Error::other)?;
    let mut controller = ViewController::new(backend, config.mode, config.ordering);
    let mut view = ViewState::new(config.mode);
    view.input = input;

    match controller.submit(&mut view).await {
        Applied::Rendered => {
            println!("{}", view.result);
            Ok(())
        }
        _ => {
            eprintln!(
                "Error: {}",
                view.failure.as_deref().unwrap_or("request failed")
            );
            std::process::exit(1);
        }
    }
}
