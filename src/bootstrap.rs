//! Startup orchestration.
//!
//! Sequences the process-wide singleton lock, the resource loads, the
//! diagnostic sink and the console visibility policy, then hands control to
//! the external UI host until it returns. The sequence is deliberately
//! explicit and ordered; nothing here relies on ambient initialization order.
//!
//! Phase machine:
//!
//! ```text
//! Unstarted -> LockAcquired -> ResourcesLoaded -> Running (terminal on host return)
//!      \              \                \
//!       +--------------+----------------+--> Failed (fatal, dialog + exit)
//! ```
//!
//! A denied lock is fatal before any resource loader runs; individual
//! resource-load failures are absorbed by the registry and never reach this
//! module as errors.

use crate::config::ResourceRegistry;
use crate::instance::InstanceLock;
use crate::logging::{LOG_FILE, Logger};
use crate::models::AppContext;
use crate::platform::ConsoleWindow;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Startup phases, in the order they are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unstarted,
    LockAcquired,
    ResourcesLoaded,
    Running,
    Failed,
}

/// Fatal startup conditions. Recoverable ones (a missing or corrupt resource
/// file) never surface here - the registry replaces them with defaults.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Another process already holds the singleton lock.
    #[error("The application is already running.")]
    AlreadyRunning,

    /// Anything else that went wrong before the host returned.
    #[error("Startup failed: {0:#}")]
    Startup(#[from] anyhow::Error),
}

/// Seam to the external UI host.
///
/// The host owns the window, the memory-access subsystem and all of its
/// worker threads; the bootstrap only transfers control and blocks until the
/// host returns. Worker threads are expected to call [`Logger::log`]
/// concurrently, which is safe by construction.
pub trait UiHost {
    fn run(&mut self, ctx: &AppContext, logger: &Logger) -> anyhow::Result<()>;
}

/// Startup orchestrator.
///
/// Constructed once at process start; [`run`](Self::run) drives the phase
/// machine exactly once. The loaded [`AppContext`] is observable afterwards
/// through [`context`](Self::context).
pub struct Bootstrap {
    registry: ResourceRegistry,
    log_path: Utf8PathBuf,
    phase: Phase,
    context: Option<AppContext>,
}

impl Bootstrap {
    pub fn new(registry: ResourceRegistry) -> Self {
        Self {
            registry,
            log_path: Utf8PathBuf::from(LOG_FILE),
            phase: Phase::Unstarted,
            context: None,
        }
    }

    /// Override the log sink location (tests and portable installs).
    pub fn with_log_path<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.log_path = path.as_ref().to_path_buf();
        self
    }

    /// Current phase of the startup sequence.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The process-wide context, available once resources are loaded.
    pub fn context(&self) -> Option<&AppContext> {
        self.context.as_ref()
    }

    /// Run the full startup sequence and block inside the UI host.
    ///
    /// Returns when the host returns (normal shutdown) or with the fatal
    /// condition that stopped startup. Any error leaves the phase at
    /// [`Phase::Failed`]; the caller is expected to surface it to the user
    /// and terminate.
    pub fn run(
        &mut self,
        lock: &mut dyn InstanceLock,
        console: &dyn ConsoleWindow,
        host: &mut dyn UiHost,
    ) -> Result<(), BootstrapError> {
        let result = self.startup(lock, console, host);
        if result.is_err() {
            self.phase = Phase::Failed;
        }
        result
    }

    fn startup(
        &mut self,
        lock: &mut dyn InstanceLock,
        console: &dyn ConsoleWindow,
        host: &mut dyn UiHost,
    ) -> Result<(), BootstrapError> {
        // Single attempt, no retry. On denial nothing else may run - not even
        // a resource loader.
        if !lock.try_acquire()? {
            return Err(BootstrapError::AlreadyRunning);
        }
        self.phase = Phase::LockAcquired;
        tracing::info!("Singleton lock acquired");

        // The four loads are independent and any-failure-tolerant; the
        // registry guarantees every slot ends up populated.
        let ctx = self.registry.load_all();
        self.phase = Phase::ResourcesLoaded;
        tracing::info!(
            "Resources loaded: {} loot filters, {} watchlist entries, {} factions, logging={}",
            ctx.loot_filters.filters.len(),
            ctx.watchlist.entries.len(),
            ctx.factions.factions.len(),
            ctx.logging_enabled(),
        );

        let logger = Logger::from_config(&ctx.config, &self.log_path)?;
        console.set_visible(ctx.logging_enabled());
        logger.log("startup complete, entering UI host");

        let ctx = self.context.insert(ctx);
        self.phase = Phase::Running;
        host.run(ctx, &logger)?;

        logger.log("UI host returned, shutting down");
        Ok(())
    }
}
