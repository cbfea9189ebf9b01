/// Represents the destination of a departing flight and its expected arrival.
///
/// `arrival` is free text on purpose: boards show either a time ("3:00 PM")
/// or a status ("Un-Available") in that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub destination: String,
    pub arrival: String,
}

impl Airport {
    pub fn new(destination: &str, arrival: &str) -> Self {
        Airport {
            destination: destination.to_string(),
            arrival: arrival.to_string(),
        }
    }
}
