use chrono::NaiveDate;
use departure_board::{
    calculate_airfare, parse_departure, print_departures, print_departures_unwrapped,
    print_departures_unwrapped_with_locale, Airline, Airport, DepartureBoard, Flight,
    FlightStatus, Locale,
};
use logger::Logger;

const SUPPORT: &str =
    "if you still need help finding your flight status please contact customer support";

fn departure(hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 5, 30)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

// Builds the board from the original exercise: one flight en route, one
// canceled with no departure time and one still waiting for a terminal.
fn sample_board() -> DepartureBoard {
    let mut board = DepartureBoard::new(FlightStatus::OnTime, "Los Angeles (LAX)");
    board.append(
        Flight::new(
            Airport::new("Los Angeles (LAX)", "3:00 PM"),
            Airline::AmericanAirlines,
            FlightStatus::EnRoute,
        )
        .with_departure(departure(13, 26))
        .with_flight_number("AA3")
        .with_terminal("8"),
    );
    board.append(
        Flight::new(
            Airport::new("Fort Lauderdale (FLL)", "Un-Available"),
            Airline::JetBlueAirways,
            FlightStatus::Canceled,
        )
        .with_flight_number("B62201")
        .with_terminal("5"),
    );
    board.append(
        Flight::new(
            Airport::new("Seoul (ICN)", "3:41 AM"),
            Airline::KoreaAir,
            FlightStatus::EnRoute,
        )
        .with_departure(departure(9, 5))
        .with_flight_number("KE82"),
    );
    board
}

#[test]
fn test_sample_board_raw_departures() {
    let board = sample_board();
    let mut lines: Vec<String> = Vec::new();
    print_departures(&board, &mut lines);

    assert_eq!(
        lines,
        vec![
            "Current Departures, Departure: Some(2019-05-30T13:26:00), Flight: Some(\"AA3\"), Airline: American Airlines, Terminal: Some(\"8\"),  Flight Status: En-Route",
            "Current Departures, Departure: None, Flight: Some(\"B62201\"), Airline: JetBlue Airways, Terminal: Some(\"5\"),  Flight Status: Canceled",
            "Current Departures, Departure: Some(2019-05-30T09:05:00), Flight: Some(\"KE82\"), Airline: Korea Air, Terminal: None,  Flight Status: En-Route",
        ]
    );
}

#[test]
fn test_sample_board_unwrapped_departures() {
    let board = sample_board();
    let mut lines: Vec<String> = Vec::new();
    print_departures_unwrapped_with_locale(&board, Locale::en_US, &mut lines);

    assert_eq!(
        lines,
        vec![
            "Current Unwrapped Departures, Departure: 1:26 PM, Flight: Some(\"AA3\"), Airline: American Airlines, Terminal: Some(\"8\"),  Flight Status: En-Route",
            "Current Unwrapped Departures, Departure: 9:05 AM, Flight: Some(\"KE82\"), Airline: Korea Air, Terminal: None,  Flight Status: En-Route",
        ]
    );
}

#[test]
fn test_sample_board_passenger_alert() {
    let board = sample_board();
    let mut lines: Vec<String> = Vec::new();
    board.passenger_alert(&mut lines);

    // The canceled flight still has terminal 5, so it reads "TBD" instead of
    // the voucher message.
    assert_eq!(lines, vec![SUPPORT, "TBD", SUPPORT]);
}

#[test]
fn test_sample_board_unwrapped_departures_in_german() {
    let board = sample_board();
    let mut lines: Vec<String> = Vec::new();
    print_departures_unwrapped_with_locale(&board, Locale::de_DE, &mut lines);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Current Unwrapped Departures, Departure: 13:26, "));
    assert!(lines[1].starts_with("Current Unwrapped Departures, Departure: 09:05, "));
}

#[test]
fn test_unwrapped_never_prints_more_lines_than_flights() {
    let mut board = sample_board();
    for status in FlightStatus::ALL {
        board.append(Flight::new(
            Airport::new("Boston (BOS)", "Un-Available"),
            Airline::DeltaAirLines,
            status,
        ));
    }

    let mut raw: Vec<String> = Vec::new();
    let mut unwrapped: Vec<String> = Vec::new();
    print_departures(&board, &mut raw);
    print_departures_unwrapped(&board, &mut unwrapped);

    let with_departure = board
        .flights()
        .iter()
        .filter(|f| f.departure.is_some())
        .count();
    assert_eq!(raw.len(), board.len());
    assert_eq!(unwrapped.len(), with_departure);
    assert!(unwrapped.len() <= raw.len());
}

#[test]
fn test_canceled_without_terminal_gets_voucher() {
    let mut board = DepartureBoard::new(FlightStatus::Delayed, "New York (JFK)");
    board.append(
        Flight::new(
            Airport::new("Rochester (ROC)", "Un-Available"),
            Airline::DeltaAirLines,
            FlightStatus::Canceled,
        )
        .with_flight_number("DL6966"),
    );

    let mut lines: Vec<String> = Vec::new();
    board.passenger_alert(&mut lines);
    assert_eq!(
        lines,
        vec!["We're sorry your flight to Airport { destination: \"Rochester (ROC)\", arrival: \"Un-Available\" } was canceled, here is a $500 voucher"]
    );
}

#[test]
fn test_empty_board_displays_nothing() {
    let board = DepartureBoard::new(FlightStatus::OnTime, "New York (JFK)");
    let mut lines: Vec<String> = Vec::new();

    print_departures(&board, &mut lines);
    print_departures_unwrapped(&board, &mut lines);
    board.passenger_alert(&mut lines);

    assert!(lines.is_empty());
}

#[test]
fn test_airfare_is_independent_of_the_board() {
    let logger = Logger::console();
    assert!((calculate_airfare(&logger, 2, 2000, 3) - 1150.0).abs() < 1e-9);
    assert!((calculate_airfare(&logger, 0, 0, 1) - 300.0).abs() < 1e-9);
}

#[test]
fn test_board_from_text_fields() {
    let mut board = DepartureBoard::new(FlightStatus::OnTime, "New York (JFK)");
    board.append(
        Flight::new(
            Airport::new("Rochester (ROC)", "4:10 PM"),
            "Delta Air Lines".parse::<Airline>().unwrap(),
            "Scheduled".parse::<FlightStatus>().unwrap(),
        )
        .with_departure(parse_departure("30-05-2019 13:26:00").unwrap())
        .with_flight_number("DL6966"),
    );

    let mut lines: Vec<String> = Vec::new();
    print_departures(&board, &mut lines);
    board.passenger_alert(&mut lines);

    assert_eq!(
        lines,
        vec![
            "Current Departures, Departure: Some(2019-05-30T13:26:00), Flight: Some(\"DL6966\"), Airline: Delta Air Lines, Terminal: None,  Flight Status: Scheduled",
            "Your flight to Airport { destination: \"Rochester (ROC)\", arrival: \"4:10 PM\" } is scheduled to depart at (time) from terminal: None",
        ]
    );
    assert!("KLM".parse::<Airline>().is_err());
}
