//! Single-instance enforcement.
//!
//! A named OS-wide exclusive primitive detects a second running copy of the
//! application. The lock is acquired once, held for the entire process
//! lifetime and released only by process termination (including a crash) -
//! nothing in this module ever releases it programmatically.

use anyhow::{Context, Result};
use single_instance::SingleInstance;

/// Fixed token naming the process-wide lock. Shared by every build of the
/// application; changing it would allow two versions to run side by side.
pub const INSTANCE_TOKEN: &str = "9A19103F-16F7-4668-BE54-9A1E7A4F7556";

/// Capability seam for the process-wide singleton lock.
///
/// The bootstrap only needs one answer: did this process obtain exclusive
/// ownership? Tests substitute a mock that reports a held lock.
#[cfg_attr(test, mockall::automock)]
pub trait InstanceLock {
    /// Attempt to acquire the lock. Single attempt, no retry, no timeout.
    ///
    /// Returns `Ok(true)` when this process now owns the lock, `Ok(false)`
    /// when another process already holds it, and `Err` only when the OS
    /// primitive itself could not be created.
    fn try_acquire(&mut self) -> Result<bool>;
}

/// Production lock over the OS-level named primitive.
///
/// The acquired handle is stored for the lifetime of this value; keeping the
/// `NamedInstanceLock` alive for the whole process is what keeps the lock
/// held.
pub struct NamedInstanceLock {
    token: String,
    handle: Option<SingleInstance>,
}

impl NamedInstanceLock {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            handle: None,
        }
    }
}

impl InstanceLock for NamedInstanceLock {
    fn try_acquire(&mut self) -> Result<bool> {
        let instance = SingleInstance::new(&self.token)
            .with_context(|| format!("Failed to create instance lock '{}'", self.token))?;
        let acquired = instance.is_single();
        // Keep the handle alive either way; dropping it would free the name
        // for the next launcher even though startup already failed.
        self.handle = Some(instance);
        Ok(acquired)
    }
}
