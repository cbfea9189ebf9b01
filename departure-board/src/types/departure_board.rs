use super::{flight::Flight, flight_status::FlightStatus};
use crate::sink::DisplaySink;

/// Placeholder shown when a flight has a terminal but no departure time.
pub const TBD: &str = "TBD";

/// Holds the departures of a single airport, in the order they were added.
///
/// `flight_status` is a board-wide summary set by whoever owns the board; it
/// is not derived from the flights.
#[derive(Debug, Clone)]
pub struct DepartureBoard {
    departure_flights: Vec<Flight>,
    current_airport: String,
    flight_status: FlightStatus,
}

impl DepartureBoard {
    /// Creates an empty board
    pub fn new(flight_status: FlightStatus, current_airport: &str) -> Self {
        DepartureBoard {
            departure_flights: Vec::new(),
            current_airport: current_airport.to_string(),
            flight_status,
        }
    }

    /// Adds a flight at the end of the board.
    pub fn append(&mut self, flight: Flight) {
        self.departure_flights.push(flight);
    }

    /// Flights in insertion order.
    pub fn flights(&self) -> &[Flight] {
        &self.departure_flights
    }

    pub fn len(&self) -> usize {
        self.departure_flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departure_flights.is_empty()
    }

    pub fn current_airport(&self) -> &str {
        &self.current_airport
    }

    pub fn flight_status(&self) -> FlightStatus {
        self.flight_status
    }

    /// Sends one alert line per flight to `sink`, in board order.
    pub fn passenger_alert(&self, sink: &mut impl DisplaySink) {
        for departure_flight in &self.departure_flights {
            sink.emit(&Self::alert_for(departure_flight));
        }
    }

    /// Builds the passenger alert for a single flight.
    ///
    /// A flight with a terminal but no departure time is always "TBD", before
    /// its status is even looked at. The scheduled message keeps the literal
    /// "(time)" placeholder.
    pub fn alert_for(flight: &Flight) -> String {
        if flight.terminal.is_some() && flight.departure.is_none() {
            return TBD.to_string();
        }

        match flight.flight_status {
            FlightStatus::Canceled => format!(
                "We're sorry your flight to {:?} was canceled, here is a $500 voucher",
                flight.airport
            ),
            FlightStatus::Scheduled => format!(
                "Your flight to {:?} is scheduled to depart at (time) from terminal: {:?}",
                flight.airport, flight.terminal
            ),
            FlightStatus::Boarding => format!(
                "Your flight is boarding, please head to terminal: {:?} immediately. The doors are closing soon.",
                flight.terminal
            ),
            FlightStatus::EnRoute
            | FlightStatus::ReRoute
            | FlightStatus::Delayed
            | FlightStatus::OnTime => {
                "if you still need help finding your flight status please contact customer support"
                    .to_string()
            }
        }
    }
}
