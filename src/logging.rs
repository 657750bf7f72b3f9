use crate::models::AppConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Fixed relative path of the diagnostic log file.
pub const LOG_FILE: &str = "log.txt";

/// Setup the console tracing subscriber.
///
/// This is the ambient diagnostic channel; the persisted sink is [`Logger`].
/// `RUST_LOG` overrides the default `info` filter.
///
/// # Errors
/// Fails if a global subscriber is already installed (only happens when
/// called twice, e.g. across tests).
pub fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}

/// Conditional append-only diagnostic sink.
///
/// Disabled form holds no file handle and [`log`](Self::log) is a complete
/// no-op - the sink file is never created. Enabled form opens the file once
/// in append mode and serializes every write through one `Mutex`, held only
/// for the duration of a single write+flush, so concurrent callers from the
/// overlay's worker threads always produce whole lines. Every write is
/// flushed immediately; expected volume is low and durability wins over
/// throughput.
#[derive(Debug)]
pub struct Logger {
    sink: Option<Mutex<File>>,
    path: Utf8PathBuf,
}

impl Logger {
    /// A logger that discards everything and never touches the filesystem.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            path: Utf8PathBuf::from(LOG_FILE),
        }
    }

    /// Open (or create) the sink at `path` in append mode.
    pub fn enabled<P: AsRef<Utf8Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path))?;

        Ok(Self {
            sink: Some(Mutex::new(file)),
            path,
        })
    }

    /// Build a logger according to the loaded configuration.
    ///
    /// The sink at `path` is only created when `config.logging` is set.
    pub fn from_config<P: AsRef<Utf8Path>>(config: &AppConfig, path: P) -> Result<Self> {
        if config.logging {
            Self::enabled(path)
        } else {
            Ok(Self::disabled())
        }
    }

    /// Whether the sink exists and lines are being persisted.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Append one timestamp-prefixed line to the sink.
    ///
    /// No-op when logging is disabled. When enabled the message is also
    /// mirrored to the tracing debug channel. Write failures are reported as
    /// warnings and otherwise swallowed; a failing sink must not take the
    /// overlay down mid-session.
    pub fn log(&self, msg: &str) {
        let Some(sink) = &self.sink else {
            return;
        };

        tracing::debug!("{}", msg);

        let line = format!("{}: {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"), msg);
        let mut file = match sink.lock() {
            Ok(file) => file,
            // A poisoned lock means a writer panicked mid-line; keep logging.
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            tracing::warn!("Log sink write failed ({}): {}", self.path, err);
        }
    }

    /// Path of the sink file, whether or not it exists.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_disabled_logger_creates_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(LOG_FILE);

        let logger = Logger::disabled();
        logger.log("this goes nowhere");

        assert!(!logger.is_enabled());
        assert!(!path.exists());
    }

    #[test]
    fn test_from_config_respects_logging_flag() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().join(LOG_FILE)).unwrap();

        let config = AppConfig::default();
        let logger = Logger::from_config(&config, &path).unwrap();
        assert!(!logger.is_enabled());
        assert!(!path.as_std_path().exists());

        let logging_on = AppConfig {
            logging: true,
            ..AppConfig::default()
        };
        let logger = Logger::from_config(&logging_on, &path).unwrap();
        assert!(logger.is_enabled());
        assert!(path.as_std_path().exists());
    }

    #[test]
    fn test_enabled_logger_appends_timestamped_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().join(LOG_FILE)).unwrap();

        let logger = Logger::enabled(&path).unwrap();
        logger.log("first");
        logger.log("second");

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": first"));
        assert!(lines[1].ends_with(": second"));
    }

    #[test]
    fn test_enabled_logger_appends_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().join(LOG_FILE)).unwrap();

        Logger::enabled(&path).unwrap().log("session one");
        Logger::enabled(&path).unwrap().log("session two");

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_concurrent_writers_produce_whole_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().join(LOG_FILE)).unwrap();
        let logger = Arc::new(Logger::enabled(&path).unwrap());

        let threads = 8;
        let per_thread = 25;
        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for i in 0..per_thread {
                        logger.log(&format!("thread-{} message-{}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), threads * per_thread);
        // Every line is complete: timestamp prefix and exactly one message.
        for line in lines {
            assert_eq!(line.matches("thread-").count(), 1, "interleaved: {line}");
            assert!(line.contains(": thread-"));
        }
    }
}
