//! # Tare Kiosk
//!
//! Interactive console kiosk for the Tare smart scale.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Kiosk                                  │
//! │                                                                 │
//! │  stdin ──► ConsoleCommand ──► SessionState ──► SessionController│
//! │                                                   │             │
//! │                     Camera ── Detector ── Scale ──┤             │
//! │                        (simulated hardware)       │             │
//! │                                                   ▼             │
//! │                                            tare-catalog         │
//! │                                              (SQLite)           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The simulated detector replays a staged script, so successive
//! `capture` commands walk through the interesting cases: a multi-item
//! burst, a different assortment, and an empty scale.

mod config;
mod console;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tare_catalog::CatalogStore;
use tare_core::Detection;
use tare_session::{
    ScriptedDetector, SessionController, SessionState, SimulatedCamera, SimulatedScale,
};

use crate::config::KioskConfig;
use crate::console::ConsoleCommand;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Tare kiosk...");

    // Load configuration
    let config = KioskConfig::load()?;
    info!(
        db_path = %config.db_path.display(),
        confidence_threshold = config.confidence_threshold,
        burst_frames = config.burst_frames,
        detector_model = %config.detector_model,
        "Configuration loaded"
    );

    // Open the catalog (migrations run on startup)
    let store = CatalogStore::new(config.catalog_config()).await?;
    store.health_check().await?;

    let products = store.resolver().product_count().await?;
    info!(products, "Catalog ready");
    if products == 0 {
        warn!("Catalog is empty; run `cargo run -p tare-catalog --bin seed` first");
        println!("Note: the catalog is empty. Seed it to see products resolve.");
    }

    // Wire simulated hardware to the session controller
    let controller = SessionController::new(
        Box::new(SimulatedCamera::new()),
        Box::new(demo_detector()),
        Box::new(SimulatedScale::new(
            config.weight_min_kg,
            config.weight_max_kg,
        )),
        store.resolver(),
        config.session_config(),
    );
    let state = SessionState::new(controller);
    info!("Session controller ready");

    println!("Tare smart scale kiosk. Type 'help' for commands.");

    run_console(&state).await?;

    store.close().await;
    info!("Kiosk shutdown complete");
    Ok(())
}

/// Reads commands from stdin until quit, EOF, or a shutdown signal.
async fn run_console(state: &SessionState) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        print!("tare> ");
        let _ = std::io::stdout().flush();

        tokio::select! {
            maybe_line = lines.next_line() => {
                match maybe_line? {
                    Some(line) => {
                        match ConsoleCommand::parse(&line) {
                            Ok(ConsoleCommand::Quit) => break,
                            Ok(command) => handle_command(state, command).await,
                            Err(message) => println!("{message}"),
                        }
                    }
                    // EOF: scripted input ran out
                    None => break,
                }
            }
            _ = &mut shutdown => break,
        }
    }

    Ok(())
}

async fn handle_command(state: &SessionState, command: ConsoleCommand) {
    match command {
        ConsoleCommand::Capture => match state.trigger_burst().await {
            Ok(outcome) => println!("{}", console::render_outcome(&outcome)),
            Err(err) => println!("{err}"),
        },
        ConsoleCommand::List => {
            println!("{}", console::render_snapshot(&state.snapshot().await));
        }
        ConsoleCommand::Select(index) => match state.select(index).await {
            Ok(record) => println!("Selected {}", record.name),
            Err(err) => println!("{err}"),
        },
        ConsoleCommand::Receipt => match state.receipt().await {
            Ok(line) => println!("{}", console::render_receipt(&line)),
            Err(err) => println!("{err}"),
        },
        ConsoleCommand::Weight => {
            let snapshot = state.snapshot().await;
            match snapshot.weight_kg {
                Some(weight_kg) => println!("Assigned weight: {weight_kg:.3} kg"),
                None => println!("No weight assigned. Run 'capture' first."),
            }
        }
        ConsoleCommand::Help => println!("{}", console::HELP),
        // Quit never reaches here; the loop handles it.
        ConsoleCommand::Quit => {}
    }
}

/// Staged detections for the development kiosk.
///
/// Five frames per burst walk through: a busy scale, a different
/// assortment, then an empty scale, cycling afterwards. Low-confidence
/// entries are there to be filtered out.
fn demo_detector() -> ScriptedDetector {
    ScriptedDetector::new(vec![
        // Burst 1: apples and a banana, one noisy frame
        vec![
            Detection::new("apple", 0.93),
            Detection::new("banana", 0.41),
        ],
        vec![Detection::new("apple", 0.88)],
        vec![Detection::new("banana", 0.77)],
        vec![],
        vec![Detection::new("tomato", 0.82)],
        // Burst 2: citrus and roots
        vec![Detection::new("orange", 0.91)],
        vec![
            Detection::new("orange", 0.64),
            Detection::new("lemon", 0.58),
        ],
        vec![],
        vec![Detection::new("carrot", 0.71)],
        vec![Detection::new("potato", 0.55)],
        // Burst 3: empty scale
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
    ])
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tare=trace` - Show trace for tare crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tare=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
