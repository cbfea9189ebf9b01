use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Writes timestamped log lines to a file, to the console, or both.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Creates a new `Logger` backed by `{name}.log` inside `log_dir`.
    ///
    /// # Parameters
    /// - `log_dir`: Path to an existing directory where the log file is created.
    /// - `name`: Base name of the log file. Characters that are awkward in file
    ///   names (`:`, `/`, spaces) are replaced with `_`.
    ///
    /// # Returns
    /// A new `Logger` whose file has been truncated.
    pub fn new(log_dir: &Path, name: &str) -> Result<Self, LoggerError> {
        if !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(
                "Provided path is not a directory.".into(),
            ));
        }

        let sanitized_name = name.replace([':', '/', ' '], "_");
        let log_file = log_dir.join(format!("{}.log", sanitized_name));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)
            .map_err(LoggerError::from)?;

        Ok(Logger {
            log_file: Some(log_file),
        })
    }

    /// Creates a `Logger` without a backing file. Messages only reach the
    /// console when the caller asks for it.
    pub fn console() -> Self {
        Logger { log_file: None }
    }

    /// Path of the backing log file, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    // Generic method for writing log messages
    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = match &level {
            LogLevel::Info(_) => format!("[INFO] [{}]: {}\n", timestamp, message),
            LogLevel::Warn => format!("[WARN] [{}]: {}\n", timestamp, message),
            LogLevel::Error => format!("[ERROR] [{}]: {}\n", timestamp, message),
        };

        if to_console {
            let colored_message = match &level {
                LogLevel::Info(color) => format!("{}{}\x1b[0m", color.to_ansi_code(), log_message),
                LogLevel::Warn => format!("\x1b[93m{}\x1b[0m", log_message), // Bright Yellow
                LogLevel::Error => format!("\x1b[91m{}\x1b[0m", log_message), // Bright Red
            };
            print!("{}", colored_message);
            io::stdout().flush().map_err(LoggerError::from)?;
        }

        if let Some(log_file) = &self.log_file {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(LoggerError::from)?;
            file.write_all(log_message.as_bytes())
                .map_err(LoggerError::from)?;
            file.flush().map_err(LoggerError::from)?;
        }

        Ok(())
    }

    /// Logs an informational message.
    ///
    /// # Parameters
    /// - `message`: The informational message to log.
    /// - `color`: The color to use for the console output.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}
