// Settings module
// Business-hours window rendered when no event falls outside it

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default business-hours window for the week view.
///
/// The resolved hour range always covers `[day_start_hour, day_end_hour]`
/// and is widened when events start or end outside it. Hosts may load this
/// from their own configuration layer; `Default` gives the stock 07–17
/// school-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursConfig {
    pub day_start_hour: u32,
    pub day_end_hour: u32,
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 7,
            day_end_hour: 17,
        }
    }
}

impl HoursConfig {
    /// Validate the window: within a day, end after start.
    pub fn validate(&self) -> Result<(), HoursConfigError> {
        if self.day_start_hour > 23 || self.day_end_hour > 23 {
            return Err(HoursConfigError::HourOutOfRange);
        }
        if self.day_end_hour <= self.day_start_hour {
            return Err(HoursConfigError::EmptyWindow);
        }
        Ok(())
    }
}

/// Validation errors for the business-hours window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HoursConfigError {
    #[error("business hours must lie within 0..=23")]
    HourOutOfRange,
    #[error("business hours window must end after it starts")]
    EmptyWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_school_day() {
        let config = HoursConfig::default();
        assert_eq!(config.day_start_hour, 7);
        assert_eq!(config.day_end_hour, 17);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_window() {
        let config = HoursConfig {
            day_start_hour: 17,
            day_end_hour: 7,
        };
        assert_eq!(config.validate(), Err(HoursConfigError::EmptyWindow));
    }

    #[test]
    fn test_rejects_out_of_range_hour() {
        let config = HoursConfig {
            day_start_hour: 7,
            day_end_hour: 24,
        };
        assert_eq!(config.validate(), Err(HoursConfigError::HourOutOfRange));
    }
}
