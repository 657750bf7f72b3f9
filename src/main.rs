//! RaidScope - session radar overlay host
//!
//! Main entry point. Startup is strictly sequential:
//!
//! 1. Install the console tracing subscriber
//! 2. Acquire the process-wide singleton lock (fatal if denied)
//! 3. Load the four persisted resources, substituting defaults on failure
//! 4. Create the diagnostic log sink if the loaded config enables it
//! 5. Apply the console visibility policy (visible iff logging)
//! 6. Hand control to the overlay host until it returns
//!
//! Any fatal condition is shown in a blocking error dialog and the process
//! exits nonzero. A missing or corrupt resource file is never fatal.
//!
//! No command-line flags or environment variables are consumed here
//! (`RUST_LOG` only adjusts the console tracing filter).

use anyhow::Result;
use raidscope::bootstrap::UiHost;
use raidscope::platform::NativeConsole;
use raidscope::{
    APP_NAME, AppContext, Bootstrap, DATA_DIR, INSTANCE_TOKEN, Logger, NamedInstanceLock,
    ResourceRegistry, VERSION, logging,
};
use std::io::BufRead;

/// Stand-in for the external overlay window.
///
/// The real UI host (radar window plus the memory-access subsystem) links in
/// separately; this host publishes the loaded state and holds the process
/// open until the operator closes stdin.
struct SessionHost;

impl UiHost for SessionHost {
    fn run(&mut self, ctx: &AppContext, logger: &Logger) -> Result<()> {
        tracing::info!(
            "Session host up: {} loot filters, {} watchlist entries, {} factions",
            ctx.loot_filters.filters.len(),
            ctx.watchlist.entries.len(),
            ctx.factions.factions.len(),
        );
        logger.log("session host started");

        let stdin = std::io::stdin();
        let mut line = String::new();
        while stdin.lock().read_line(&mut line)? != 0 {
            line.clear();
        }

        logger.log("session host stopped");
        Ok(())
    }
}

fn run() -> Result<()> {
    logging::init_tracing()?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let registry = ResourceRegistry::new(DATA_DIR)?;
    let mut bootstrap = Bootstrap::new(registry);
    let mut lock = NamedInstanceLock::new(INSTANCE_TOKEN);
    let console = NativeConsole;
    let mut host = SessionHost;

    bootstrap.run(&mut lock, &console, &mut host)?;

    tracing::info!("Overlay host returned, shutting down");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        tracing::error!("Fatal startup error: {:#}", err);
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(APP_NAME)
            .set_description(format!("{err:#}"))
            .show();
        std::process::exit(1);
    }
}
