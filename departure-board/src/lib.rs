//! Departures board of a single airport: the flight data model, passenger
//! alerts, display formatting and a standalone airfare calculator.

pub mod display;
pub mod fare;
pub mod locale;
pub mod sink;
pub mod types;

pub use display::{
    print_departures, print_departures_unwrapped, print_departures_unwrapped_with_locale,
    raw_departure_line, unwrapped_departure_line, unwrapped_departure_line_with_locale,
};
pub use locale::{current_locale, parse_locale};
pub use pure_rust_locales::Locale;
pub use fare::{calculate_airfare, format_usd, FareSchedule};
pub use sink::{DisplaySink, StdoutSink};
pub use types::{
    airline::Airline,
    airport::Airport,
    board_error::BoardError,
    departure_board::DepartureBoard,
    flight::{departure_today_at, parse_departure, Flight},
    flight_status::FlightStatus,
};
