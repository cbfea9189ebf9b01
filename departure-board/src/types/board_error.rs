use std::fmt;

use logger::LoggerError;

/// Represents errors raised by the parsing and validation helpers of the board.
///
/// The board operations themselves never fail: absent fields are rendered,
/// not rejected.
#[derive(Debug)]
pub enum BoardError {
    InvalidFlightStatus(String), // Unknown status label
    InvalidAirline(String),      // Unknown carrier name
    InvalidDateFormat(String),   // Departure text that doesn't match the expected format
    InvalidTime(u32, u32),       // Hour/minute pair outside a day
    InvalidFareInput(String),    // Negative bags or distance, or no travelers
    Logger(LoggerError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidFlightStatus(status) => {
                write!(f, "Invalid flight status: {}", status)
            }
            BoardError::InvalidAirline(name) => write!(f, "Unknown airline: {}", name),
            BoardError::InvalidDateFormat(date_str) => {
                write!(f, "Invalid date format: {}", date_str)
            }
            BoardError::InvalidTime(hour, minute) => {
                write!(f, "Invalid time of day: {:02}:{:02}", hour, minute)
            }
            BoardError::InvalidFareInput(msg) => write!(f, "Invalid fare input: {}", msg),
            BoardError::Logger(e) => write!(f, "Logger error: {}", e),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoggerError> for BoardError {
    fn from(err: LoggerError) -> Self {
        BoardError::Logger(err)
    }
}
