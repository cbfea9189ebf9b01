use chrono::{Local, NaiveDateTime};

use super::{
    airline::Airline, airport::Airport, board_error::BoardError, flight_status::FlightStatus,
};

const DEPARTURE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Represents one departure shown on a `DepartureBoard`.
///
/// The optional fields are independent of each other and of `flight_status`:
/// a canceled flight may still have a departure time, and a scheduled one may
/// not have a terminal yet. Nothing here cross-validates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub airport: Airport,
    /// `None` when the departure time is unknown (e.g. the flight was canceled).
    pub departure: Option<NaiveDateTime>,
    /// `None` until a flight number is assigned.
    pub flight_number: Option<String>,
    pub airline: Airline,
    /// `None` until a terminal is assigned.
    pub terminal: Option<String>,
    pub flight_status: FlightStatus,
}

impl Flight {
    /// Creates a flight with no departure time, flight number or terminal.
    pub fn new(airport: Airport, airline: Airline, flight_status: FlightStatus) -> Self {
        Flight {
            airport,
            departure: None,
            flight_number: None,
            airline,
            terminal: None,
            flight_status,
        }
    }

    pub fn with_departure(mut self, departure: NaiveDateTime) -> Self {
        self.departure = Some(departure);
        self
    }

    pub fn with_flight_number(mut self, flight_number: &str) -> Self {
        self.flight_number = Some(flight_number.to_string());
        self
    }

    pub fn with_terminal(mut self, terminal: &str) -> Self {
        self.terminal = Some(terminal.to_string());
        self
    }
}

/// Parses a departure time written as `DD-MM-YYYY HH:MM:SS`.
pub fn parse_departure(datetime_str: &str) -> Result<NaiveDateTime, BoardError> {
    NaiveDateTime::parse_from_str(datetime_str.trim(), DEPARTURE_FORMAT)
        .map_err(|_| BoardError::InvalidDateFormat(datetime_str.to_string()))
}

/// Builds a departure time for today, in local time, at `hour:minute`.
pub fn departure_today_at(hour: u32, minute: u32) -> Result<NaiveDateTime, BoardError> {
    Local::now()
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .ok_or(BoardError::InvalidTime(hour, minute))
}
