use std::{fmt, str::FromStr};

use super::board_error::BoardError;

/// Carriers that can operate a flight on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Airline {
    JetBlueAirways,
    Emirates,
    KoreaAir,
    DeltaAirLines,
    AmericanAirlines,
}

impl Airline {
    pub const ALL: [Airline; 5] = [
        Airline::JetBlueAirways,
        Airline::Emirates,
        Airline::KoreaAir,
        Airline::DeltaAirLines,
        Airline::AmericanAirlines,
    ];

    /// Full carrier name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Airline::JetBlueAirways => "JetBlue Airways",
            Airline::Emirates => "Emirates",
            Airline::KoreaAir => "Korea Air",
            Airline::DeltaAirLines => "Delta Air Lines",
            Airline::AmericanAirlines => "American Airlines",
        }
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Airline {
    type Err = BoardError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .split_whitespace()
            .collect::<String>()
            .to_lowercase();

        Airline::ALL
            .into_iter()
            .find(|airline| airline.as_str().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| BoardError::InvalidAirline(name.to_string()))
    }
}
