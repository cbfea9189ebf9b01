use chrono::Local;
use departure_board::{
    calculate_airfare, departure_today_at, format_usd, parse_departure, print_departures,
    print_departures_unwrapped, Airline, Airport, BoardError, DepartureBoard, DisplaySink,
    FareSchedule, Flight, FlightStatus, StdoutSink,
};
use logger::{Color, Logger};

fn sample_board() -> Result<DepartureBoard, BoardError> {
    let now = Local::now().naive_local();

    let aa3 = Flight::new(
        Airport::new("Los Angeles (LAX)", "3:00 PM"),
        Airline::AmericanAirlines,
        FlightStatus::EnRoute,
    )
    .with_departure(now)
    .with_flight_number("AA3")
    .with_terminal("8");

    // Canceled, so no departure time.
    let b62201 = Flight::new(
        Airport::new("Fort Lauderdale (FLL)", "Un-Available"),
        Airline::JetBlueAirways,
        FlightStatus::Canceled,
    )
    .with_flight_number("B62201")
    .with_terminal("5");

    // Terminal not assigned yet.
    let ke82 = Flight::new(
        Airport::new("Seoul (ICN)", "3:41 AM"),
        Airline::KoreaAir,
        FlightStatus::EnRoute,
    )
    .with_departure(now)
    .with_flight_number("KE82");

    let ek202 = Flight::new(
        Airport::new("Dubai (DXB)", "7:35 PM"),
        Airline::Emirates,
        FlightStatus::Boarding,
    )
    .with_departure(departure_today_at(13, 26)?)
    .with_flight_number("EK202")
    .with_terminal("4");

    // Rows as they would come from a departures feed.
    let feed = [
        (
            "Rochester (ROC)",
            "4:10 PM",
            "Delta Air Lines",
            "DL6966",
            "Scheduled",
            "30-05-2019 13:26:00",
        ),
        (
            "Boston (BOS)",
            "Un-Available",
            "jetblue airways",
            "B6586",
            "delayed",
            "30-05-2019 17:09:20",
        ),
    ];

    let mut board = DepartureBoard::new(FlightStatus::OnTime, "New York (JFK)");
    board.append(aa3);
    board.append(b62201);
    board.append(ke82);
    board.append(ek202);

    for (destination, arrival, airline, number, status, departure) in feed {
        board.append(
            Flight::new(
                Airport::new(destination, arrival),
                airline.parse::<Airline>()?,
                status.parse::<FlightStatus>()?,
            )
            .with_departure(parse_departure(departure)?)
            .with_flight_number(number),
        );
    }

    Ok(board)
}

fn main() -> Result<(), BoardError> {
    let logger = Logger::console();
    let board = sample_board()?;
    let mut sink = StdoutSink;

    logger.info(
        &format!(
            "Departures from {} ({} flights)",
            board.current_airport(),
            board.len()
        ),
        Color::Green,
        true,
    )?;

    for flight in board.flights().iter().filter(|f| f.terminal.is_none()) {
        logger.warn(
            &format!(
                "Flight {:?} to {} has no terminal assigned",
                flight.flight_number, flight.airport.destination
            ),
            true,
        )?;
    }

    print_departures(&board, &mut sink);
    sink.emit("");
    print_departures_unwrapped(&board, &mut sink);
    sink.emit("");
    board.passenger_alert(&mut sink);
    sink.emit("");

    for (checked_bags, distance, travelers) in [(2, 2000, 3), (0, 0, 1), (4, 50000, 3)] {
        let airfare = calculate_airfare(&logger, checked_bags, distance, travelers);
        sink.emit(&format!("Total airfare: {}", format_usd(airfare)));
    }

    match FareSchedule::default().try_calculate(&logger, 1, 800, 0) {
        Ok(airfare) => sink.emit(&format!("Total airfare: {}", format_usd(airfare))),
        Err(e) => logger.error(&e.to_string(), true)?,
    }

    Ok(())
}
