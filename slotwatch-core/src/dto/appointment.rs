//! Appointment-day DTOs
//!
//! The provider's appointments-by-day endpoint returns a JSON array of day
//! records ordered by date ascending, e.g.
//! `[{"date":"2024-05-10","business_day":true}, ...]`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::appointment::Appointment;

/// One available day as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentDay {
    /// ISO date string, e.g. "2024-05-10"
    pub date: String,

    /// Whether the day is a business day; absent in some responses
    #[serde(default)]
    pub business_day: Option<bool>,
}

/// Error converting a provider day record into a domain appointment
#[derive(Debug, Error)]
#[error("invalid appointment date '{value}'")]
pub struct InvalidAppointmentDate {
    pub value: String,
    #[source]
    source: chrono::ParseError,
}

impl AppointmentDay {
    /// Converts the wire record into a domain appointment
    ///
    /// The raw date string is preserved as the appointment's display value.
    pub fn to_appointment(&self) -> Result<Appointment, InvalidAppointmentDate> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|source| {
            InvalidAppointmentDate {
                value: self.date.clone(),
                source,
            }
        })?;

        Ok(Appointment::new(date, self.date.clone()))
    }
}

/// Picks the earliest appointment from an ascending provider response
pub fn earliest(days: &[AppointmentDay]) -> Result<Option<Appointment>, InvalidAppointmentDate> {
    days.first().map(AppointmentDay::to_appointment).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_provider_payload() {
        let days: Vec<AppointmentDay> = serde_json::from_str(
            r#"[{"date":"2024-05-10","business_day":true},{"date":"2024-05-11","business_day":true}]"#,
        )
        .unwrap();

        let appointment = earliest(&days).unwrap().unwrap();
        assert_eq!(appointment.display, "2024-05-10");
    }

    #[test]
    fn test_empty_payload_has_no_earliest() {
        assert_eq!(earliest(&[]).unwrap(), None);
    }

    #[test]
    fn test_missing_business_day_is_tolerated() {
        let days: Vec<AppointmentDay> =
            serde_json::from_str(r#"[{"date":"2024-05-10"}]"#).unwrap();
        assert!(days[0].business_day.is_none());
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let day = AppointmentDay {
            date: "May 10, 2024".to_string(),
            business_day: None,
        };
        let err = day.to_appointment().unwrap_err();
        assert_eq!(err.value, "May 10, 2024");
    }
}
