pub mod airline;

pub mod airport;

pub mod board_error;

pub mod departure_board;

pub mod flight;

pub mod flight_status;
