//! Output directories and the run log, passed explicitly to the gate runner.

use std::{
    fmt,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf}
};

use parking_lot::Mutex;

use crate::error::Result;

/// Log file name inside the log directory.
pub const LOG_FILE: &str = "running_logs.log";

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Error => f.write_str("ERROR")
        }
    }
}

/// # Overview
///
/// Line-oriented, timestamped, append-mode log.
///
/// Lines look like `[2024-01-31 12:00:00: INFO: runner]: message`.
/// Writes are serialized so concurrent gate runs produce whole lines.
pub struct LogSink {
    out: Mutex<Box<dyn Write + Send>>
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink").field("out", &"...").finish()
    }
}

impl LogSink {
    /// # Overview
    ///
    /// Opens `path` for appending, creating it and its parent directory.
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(file))
    }

    /// Logs into an arbitrary writer.
    pub fn from_writer<W: Write + Send + 'static>(out: W) -> Self {
        Self {
            out: Mutex::new(Box::new(out))
        }
    }

    /// Discards everything.
    pub fn discard() -> Self {
        Self::from_writer(io::sink())
    }

    /// # Overview
    ///
    /// Writes one line per line of `message`, each with the same prefix.
    pub fn log(&self, level: Level, target: &str, message: impl fmt::Display) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let message = message.to_string();
        let mut out = self.out.lock();
        for line in message.lines() {
            writeln!(out, "[{timestamp}: {level}: {target}]: {line}")?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn info(&self, target: &str, message: impl fmt::Display) -> Result<()> {
        self.log(Level::Info, target, message)
    }

    pub fn error(&self, target: &str, message: impl fmt::Display) -> Result<()> {
        self.log(Level::Error, target, message)
    }
}

/// # Overview
///
/// Everything a gate run writes to: the log sink plus the model and plot
/// directories. Directories are created on demand by the writers.
#[derive(Debug)]
pub struct TrainingContext {
    pub log:       LogSink,
    pub model_dir: PathBuf,
    pub plot_dir:  PathBuf
}

impl TrainingContext {
    /// # Overview
    ///
    /// Standard layout under `root`: `logs/running_logs.log`, `model/` and
    /// `plots/`.
    pub fn in_dir(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        Ok(Self {
            log:       LogSink::file(root.join("logs").join(LOG_FILE))?,
            model_dir: root.join("model"),
            plot_dir:  root.join("plots")
        })
    }

    /// Context with explicit parts.
    pub fn new(log: LogSink, model_dir: impl Into<PathBuf>, plot_dir: impl Into<PathBuf>) -> Self {
        Self {
            log,
            model_dir: model_dir.into(),
            plot_dir: plot_dir.into()
        }
    }
}
