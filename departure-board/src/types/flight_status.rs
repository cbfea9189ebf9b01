use std::{fmt, str::FromStr};

use super::board_error::BoardError;

/// Represents the lifecycle states a departing flight can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    EnRoute,
    ReRoute,
    Scheduled,
    Canceled,
    Delayed,
    OnTime,
    Boarding,
}

impl FlightStatus {
    /// Every status, in declaration order.
    pub const ALL: [FlightStatus; 7] = [
        FlightStatus::EnRoute,
        FlightStatus::ReRoute,
        FlightStatus::Scheduled,
        FlightStatus::Canceled,
        FlightStatus::Delayed,
        FlightStatus::OnTime,
        FlightStatus::Boarding,
    ];

    /// Converts the `FlightStatus` variant to its display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::EnRoute => "En-Route",
            FlightStatus::ReRoute => "Re-Route",
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Canceled => "Canceled",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::OnTime => "On-Time",
            FlightStatus::Boarding => "Boarding",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlightStatus {
    type Err = BoardError;

    /// Accepts the display label in any case, with or without its separator
    /// ("On-Time", "on time", "ontime").
    fn from_str(status: &str) -> Result<Self, Self::Err> {
        let normalized: String = status
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "enroute" => Ok(FlightStatus::EnRoute),
            "reroute" => Ok(FlightStatus::ReRoute),
            "scheduled" => Ok(FlightStatus::Scheduled),
            "canceled" | "cancelled" => Ok(FlightStatus::Canceled),
            "delayed" => Ok(FlightStatus::Delayed),
            "ontime" => Ok(FlightStatus::OnTime),
            "boarding" => Ok(FlightStatus::Boarding),
            _ => Err(BoardError::InvalidFlightStatus(status.to_string())),
        }
    }
}
