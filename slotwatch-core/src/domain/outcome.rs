//! Check outcome classification
//!
//! One poll attempt ends in exactly one of three outcomes: the provider
//! offered no appointments at all, the earliest offered appointment is not
//! earlier than the alert threshold, or it is earlier and an alert is due.

use chrono::NaiveDate;

use crate::domain::appointment::Appointment;

/// Outcome of comparing the earliest discovered appointment to the threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The provider returned no appointments
    NoAppointments,
    /// An appointment exists but is not earlier than the threshold
    NotEarlier(Appointment),
    /// An appointment strictly earlier than the threshold was found
    Earlier(Appointment),
}

impl CheckOutcome {
    /// Classifies the earliest discovered appointment against the threshold
    ///
    /// The comparison is exclusive: only a date strictly before
    /// `alert_before` qualifies for an alert.
    pub fn classify(earliest: Option<Appointment>, alert_before: NaiveDate) -> Self {
        match earliest {
            None => CheckOutcome::NoAppointments,
            Some(appointment) if appointment.date < alert_before => {
                CheckOutcome::Earlier(appointment)
            }
            Some(appointment) => CheckOutcome::NotEarlier(appointment),
        }
    }
}

/// Builds the user-facing alert text for an early appointment
pub fn alert_text(appointment: &Appointment) -> String {
    format!("Earlier appointment available on: {}", appointment.display)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn appointment(y: i32, m: u32, d: u32) -> Appointment {
        let date = date(y, m, d);
        Appointment::new(date, date.to_string())
    }

    #[test]
    fn test_empty_set_is_no_appointments() {
        let outcome = CheckOutcome::classify(None, date(2024, 6, 1));
        assert_eq!(outcome, CheckOutcome::NoAppointments);
    }

    #[test]
    fn test_strictly_earlier_triggers_alert() {
        let outcome = CheckOutcome::classify(Some(appointment(2024, 5, 10)), date(2024, 6, 1));
        assert_eq!(outcome, CheckOutcome::Earlier(appointment(2024, 5, 10)));
    }

    #[test]
    fn test_later_date_is_not_earlier() {
        let outcome = CheckOutcome::classify(Some(appointment(2024, 7, 15)), date(2024, 6, 1));
        assert_eq!(outcome, CheckOutcome::NotEarlier(appointment(2024, 7, 15)));
    }

    #[test]
    fn test_threshold_date_itself_does_not_alert() {
        // Exclusive comparison: D == T must not alert
        let outcome = CheckOutcome::classify(Some(appointment(2024, 6, 1)), date(2024, 6, 1));
        assert_eq!(outcome, CheckOutcome::NotEarlier(appointment(2024, 6, 1)));
    }

    #[test]
    fn test_day_before_threshold_alerts() {
        let outcome = CheckOutcome::classify(Some(appointment(2024, 5, 31)), date(2024, 6, 1));
        assert_eq!(outcome, CheckOutcome::Earlier(appointment(2024, 5, 31)));
    }

    #[test]
    fn test_alert_text_contains_display_date() {
        let text = alert_text(&appointment(2024, 5, 10));
        assert!(text.contains("2024-05-10"));
    }
}
