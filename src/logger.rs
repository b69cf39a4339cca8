/*!
A leveled logger writing to a file or to standard output.

The logger is an explicit handle: components that need it receive a `&Logger`. It also
implements [`log::Log`], so an application can [`install`](Logger::install) it as the backend of
the `log` facade, which is what this crate uses for its own diagnostics.

Levels are ordered `Error < Warning < Info < Debug`. A logger created with level `L` writes
messages of level `L` and of every more severe level. Messages look like

```text
---WARNING---
- file: src/search.rs
- function: bpqueue::search
- line: 42
- message: skipping point
```

except for info messages, which only carry the message line.

# Example
```
use bpqueue::{log_warning, Level, Logger};

# fn main() -> Result<(), bpqueue::LoggerError> {
# let dir = tempfile::tempdir().unwrap();
# let path = dir.path().join("knn.log");
let logger = Logger::create(Some(path.as_path()), Level::Warning)?;

log_warning!(logger, "{} points skipped", 3)?;
logger.print_info("not written")?;
# Ok(())
# }
```
*/

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

impl Level {
    fn header(self: Self) -> &'static str {
        match self {
            Level::Error => "---ERROR---",
            Level::Warning => "---WARNING---",
            Level::Info => "---INFO---",
            Level::Debug => "---DEBUG---",
        }
    }

    fn to_level_filter(self: Self) -> log::LevelFilter {
        match self {
            Level::Error => log::LevelFilter::Error,
            Level::Warning => log::LevelFilter::Warn,
            Level::Info => log::LevelFilter::Info,
            Level::Debug => log::LevelFilter::Trace,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Cannot open log file {path:?}: {source}")]
    CannotOpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log message: {0}")]
    WriteFail(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Where and how much to log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
    /// Log file, truncated when the logger is created. Standard output if `None`.
    pub output: Option<PathBuf>,
}

enum Output {
    Stdout(io::Stdout),
    File(BufWriter<File>),
}

impl Write for Output {
    fn write(self: &mut Self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(out) => out.write(buf),
            Output::File(out) => out.write(buf),
        }
    }

    fn flush(self: &mut Self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::File(out) => out.flush(),
        }
    }
}

pub struct Logger {
    level: Level,
    output: Mutex<Output>,
}

impl Logger {
    /// Creates a logger writing to the file at `path`, or to standard output if `path` is `None`.
    pub fn create(path: Option<&Path>, level: Level) -> Result<Self> {
        let output = match path {
            Some(path) => {
                let file = File::create(path).map_err(|source| LoggerError::CannotOpenFile {
                    path: path.to_path_buf(),
                    source,
                })?;
                Output::File(BufWriter::new(file))
            }
            None => Output::Stdout(io::stdout()),
        };

        Ok(Self {
            level,
            output: Mutex::new(output),
        })
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Self::create(config.output.as_deref(), config.level)
    }

    pub fn level(self: &Self) -> Level {
        self.level
    }

    /// Returns `true` if messages of `level` are written by this logger.
    pub fn enabled_for(self: &Self, level: Level) -> bool {
        level <= self.level
    }

    pub fn print_error(self: &Self, msg: &str, file: &str, function: &str, line: u32) -> Result<()> {
        self.print(Level::Error, msg, file, function, line)
    }

    pub fn print_warning(
        self: &Self,
        msg: &str,
        file: &str,
        function: &str,
        line: u32,
    ) -> Result<()> {
        self.print(Level::Warning, msg, file, function, line)
    }

    pub fn print_info(self: &Self, msg: &str) -> Result<()> {
        if !self.enabled_for(Level::Info) {
            return Ok(());
        }

        self.write_line(format_args!("{}\n- message: {}", Level::Info.header(), msg))
    }

    pub fn print_debug(self: &Self, msg: &str, file: &str, function: &str, line: u32) -> Result<()> {
        self.print(Level::Debug, msg, file, function, line)
    }

    /// Writes `msg` followed by a newline, regardless of the level.
    pub fn print_msg(self: &Self, msg: &str) -> Result<()> {
        self.write_line(format_args!("{}", msg))
    }

    /// Writes a message with its call site if `level` is enabled.
    pub fn print(
        self: &Self,
        level: Level,
        msg: &str,
        file: &str,
        function: &str,
        line: u32,
    ) -> Result<()> {
        if !self.enabled_for(level) {
            return Ok(());
        }

        self.write_line(format_args!(
            "{}\n- file: {}\n- function: {}\n- line: {}\n- message: {}",
            level.header(),
            file,
            function,
            line,
            msg
        ))
    }

    pub fn flush(self: &Self) -> Result<()> {
        self.output.lock().flush()?;
        Ok(())
    }

    /// Makes this logger the backend of the `log` facade.
    pub fn install(self: Self) -> std::result::Result<(), log::SetLoggerError> {
        let max_level = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);

        Ok(())
    }

    fn write_line(self: &Self, args: fmt::Arguments<'_>) -> Result<()> {
        let mut output = self.output.lock();
        output.write_fmt(args)?;
        output.write_all(b"\n")?;

        Ok(())
    }
}

impl Drop for Logger {
    fn drop(self: &mut Self) {
        let _ = self.output.get_mut().flush();
    }
}

impl log::Log for Logger {
    fn enabled(self: &Self, metadata: &log::Metadata<'_>) -> bool {
        self.enabled_for(metadata.level().into())
    }

    fn log(self: &Self, record: &log::Record<'_>) {
        if !self.enabled_for(record.level().into()) {
            return;
        }

        let msg = record.args().to_string();
        let level = Level::from(record.level());

        // the facade has no way to report write failures
        let _ = if level == Level::Info {
            self.print_info(&msg)
        } else {
            self.print(
                level,
                &msg,
                record.file().unwrap_or_else(|| record.target()),
                record.module_path().unwrap_or_else(|| record.target()),
                record.line().unwrap_or(0),
            )
        };
    }

    fn flush(self: &Self) {
        let _ = Logger::flush(self);
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_with_location {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.print(
            $level,
            &format!($($arg)+),
            file!(),
            module_path!(),
            line!(),
        )
    };
}

/// Writes an error message through a [`Logger`](crate::Logger), recording the call site.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_with_location!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_with_location!($logger, $crate::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.print_info(&format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_with_location!($logger, $crate::Level::Debug, $($arg)+)
    };
}
