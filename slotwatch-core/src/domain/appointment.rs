//! Appointment domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An appointment slot discovered during one check
///
/// Carries both the parsed calendar date used for threshold comparison and
/// the provider's raw display string used in user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub date: NaiveDate,
    pub display: String,
}

impl Appointment {
    pub fn new(date: NaiveDate, display: impl Into<String>) -> Self {
        Self {
            date,
            display: display.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_keeps_raw_display() {
        let appointment =
            Appointment::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(), "2024-05-10");
        assert_eq!(appointment.display, "2024-05-10");
        assert_eq!(appointment.date.to_string(), "2024-05-10");
    }
}
