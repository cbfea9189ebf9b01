use pure_rust_locales::Locale;

use crate::locale::{current_locale, short_time};
use crate::sink::DisplaySink;
use crate::types::{departure_board::DepartureBoard, flight::Flight};

/// Renders a flight with its optional fields as-is (`Some(..)` / `None`).
pub fn raw_departure_line(flight: &Flight) -> String {
    format!(
        "Current Departures, Departure: {:?}, Flight: {:?}, Airline: {}, Terminal: {:?},  Flight Status: {}",
        flight.departure,
        flight.flight_number,
        flight.airline.as_str(),
        flight.terminal,
        flight.flight_status.as_str()
    )
}

/// Renders a flight with its departure as a short time of day in the system
/// locale.
///
/// Returns `None` when the flight has no departure time. Only the departure is
/// unwrapped; flight number and terminal keep their `Some(..)` / `None` form.
pub fn unwrapped_departure_line(flight: &Flight) -> Option<String> {
    unwrapped_departure_line_with_locale(flight, current_locale())
}

/// Same as `unwrapped_departure_line`, with an explicit locale.
pub fn unwrapped_departure_line_with_locale(flight: &Flight, locale: Locale) -> Option<String> {
    let departure = flight.departure?;

    Some(format!(
        "Current Unwrapped Departures, Departure: {}, Flight: {:?}, Airline: {}, Terminal: {:?},  Flight Status: {}",
        short_time(&departure, locale),
        flight.flight_number,
        flight.airline.as_str(),
        flight.terminal,
        flight.flight_status.as_str()
    ))
}

/// Emits one raw line per flight on the board, in board order.
pub fn print_departures(departure_board: &DepartureBoard, sink: &mut impl DisplaySink) {
    for flight in departure_board.flights() {
        sink.emit(&raw_departure_line(flight));
    }
}

/// Emits one unwrapped line per flight that has a departure time; flights
/// without one are skipped.
pub fn print_departures_unwrapped(departure_board: &DepartureBoard, sink: &mut impl DisplaySink) {
    print_departures_unwrapped_with_locale(departure_board, current_locale(), sink);
}

pub fn print_departures_unwrapped_with_locale(
    departure_board: &DepartureBoard,
    locale: Locale,
    sink: &mut impl DisplaySink,
) {
    for line in departure_board
        .flights()
        .iter()
        .filter_map(|flight| unwrapped_departure_line_with_locale(flight, locale))
    {
        sink.emit(&line);
    }
}
