//! Climate panel demo host.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  LoopbackBus      FaultLog         LogHost       LogEventSink│
//! │  (VehicleBus)     (Diagnostics)    (Video+Nav)   (EventSink) │
//! │  MemoryConfigStore (Config)                                  │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │          ClimateController (pure logic)                │  │
//! │  │  Help · Model · Navigation · Derived flags             │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Replays a list of commands through the core and prints the final panel
//! snapshot as JSON.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use climate_core::adapters::bus::LoopbackBus;
use climate_core::adapters::config_store::MemoryConfigStore;
use climate_core::adapters::host::LogHost;
use climate_core::adapters::log_sink::LogEventSink;
use climate_core::app::commands::ClimateCommand;
use climate_core::app::ports::ConfigPort;
use climate_core::app::service::ClimateController;
use climate_core::diagnostics::FaultLog;
use climate_core::help::HelpModeFlag;
use climate_core::model;
use climate_core::queue::{COMMAND_QUEUE_DEPTH, CommandQueue};

/// Drive the climate panel core from the command line.
#[derive(Parser)]
#[command(name = "climate-panel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Panel configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with help mode active
    #[arg(long)]
    help_mode: bool,

    /// Take the loopback bus offline (live backend only)
    #[arg(long)]
    offline: bool,

    /// Milliseconds of panel time between commands
    #[arg(long, default_value_t = 500)]
    step_ms: u32,

    /// Commands to replay, e.g. `toggle-dual-mode` or `inc-contour:driver:5`
    commands: Vec<ClimateCommand>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // ── Configuration ─────────────────────────────────────────
    let store = MemoryConfigStore::new();
    if let Some(path) = &cli.config {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        store
            .import_json(&json)
            .map_err(climate_core::Error::from)
            .with_context(|| format!("importing {}", path.display()))?;
    }
    let config = store.load().map_err(climate_core::Error::from)?;
    info!("Config: {:?}", config);

    // ── Adapters ──────────────────────────────────────────────
    let bus = LoopbackBus::new();
    let link = bus.link();
    link.set_offline(cli.offline);
    let faults = Arc::new(Mutex::new(FaultLog::new()));
    let model = model::from_config(&config, bus, Arc::clone(&faults));

    let help = HelpModeFlag::new(cli.help_mode);
    let mut host = LogHost::new();
    let mut sink = LogEventSink::new();

    // ── Core ──────────────────────────────────────────────────
    let mut controller = ClimateController::new(model, help.view(), &config);
    controller.start(&mut sink);

    let queue = CommandQueue::new();
    let dropped = cli.commands.iter().filter(|cmd| !queue.push(**cmd)).count();
    if dropped > 0 {
        warn!("{} command(s) dropped: queue holds {}", dropped, COMMAND_QUEUE_DEPTH);
    }
    while let Some(cmd) = queue.pop() {
        controller.handle_command(cmd, &mut host, &mut sink);
        controller.tick(cli.step_ms, &mut sink);
    }

    let metrics = {
        let log = faults.lock().unwrap_or_else(PoisonError::into_inner);
        controller.metrics(&log)
    };
    info!("Metrics: {:?}", metrics);
    info!(
        "Host: state={} last_video={} bus_frames={}",
        host.current_state().unwrap_or("-"),
        host.last_topic().unwrap_or("-"),
        link.accepted()
    );

    let snapshot = serde_json::to_string_pretty(&controller.snapshot())?;
    println!("{snapshot}");
    Ok(())
}
