use logger::{Color, Logger};

use crate::types::board_error::BoardError;

/// Prices used to compute an airfare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareSchedule {
    /// Price of each checked bag.
    pub bag_cost: f64,
    /// Price of each mile flown.
    pub cost_per_mile: f64,
    /// Ticket price charged per traveler.
    pub ticket_cost: f64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        FareSchedule {
            bag_cost: 25.0,
            cost_per_mile: 0.10,
            ticket_cost: 300.0,
        }
    }
}

impl FareSchedule {
    /// Computes `bag_cost * checked_bags + cost_per_mile * distance + ticket_cost * travelers`.
    ///
    /// No input is rejected; zero or negative values just flow through the
    /// formula. The parameters are logged before the total is returned.
    pub fn calculate(&self, logger: &Logger, checked_bags: i64, distance: i64, travelers: i64) -> f64 {
        let bags = self.bag_cost * checked_bags as f64;
        let mile_costs = self.cost_per_mile * distance as f64;
        let ticket_costs = self.ticket_cost * travelers as f64;

        let message = format!(
            "{} bags, {} miles, travelers = {}",
            checked_bags, distance, travelers
        );
        if let Err(e) = logger.info(&message, Color::Cyan, true) {
            eprintln!("Failed to log airfare parameters: {}", e);
        }

        bags + mile_costs + ticket_costs
    }

    /// Same as `calculate`, but rejects negative bags or distance and fewer
    /// than one traveler.
    pub fn try_calculate(
        &self,
        logger: &Logger,
        checked_bags: i64,
        distance: i64,
        travelers: i64,
    ) -> Result<f64, BoardError> {
        if checked_bags < 0 {
            return Err(BoardError::InvalidFareInput(format!(
                "checked bags can't be negative ({})",
                checked_bags
            )));
        }
        if distance < 0 {
            return Err(BoardError::InvalidFareInput(format!(
                "distance can't be negative ({})",
                distance
            )));
        }
        if travelers < 1 {
            return Err(BoardError::InvalidFareInput(format!(
                "at least one traveler is required ({})",
                travelers
            )));
        }

        Ok(self.calculate(logger, checked_bags, distance, travelers))
    }
}

/// Computes an airfare with the default `FareSchedule`.
pub fn calculate_airfare(logger: &Logger, checked_bags: i64, distance: i64, travelers: i64) -> f64 {
    FareSchedule::default().calculate(logger, checked_bags, distance, travelers)
}

/// Formats an amount as US dollars, e.g. `$1,150.00`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
