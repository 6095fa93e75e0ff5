//! Availability checker
//!
//! Drives one browser session through the scheduling site: sign in, then
//! retrieve the earliest offered appointment either from the provider's
//! JSON endpoint (direct API) or by walking the rescheduling UI to the
//! date-picker. All page interaction goes through the injected
//! [`BrowserSession`] capability.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use slotwatch_core::domain::appointment::Appointment;
use slotwatch_core::dto::appointment::{self, AppointmentDay, InvalidAppointmentDate};

use crate::automation::{AutomationError, BrowserSession};
use crate::config::{CheckMode, Config};

// Sign-in page selectors
pub(crate) const EMAIL_INPUT: &str = "#user_email";
pub(crate) const PASSWORD_INPUT: &str = "#user_password";
pub(crate) const POLICY_CHECKBOX: &str = "#policy_confirmed";
pub(crate) const SIGN_IN_SUBMIT: &str = "input[type=submit]";

// Rescheduling UI selectors
pub(crate) const CONTINUE_LINK: &str = "a.button.primary.small";
pub(crate) const RESCHEDULE_ACCORDION: &str = "li.accordion-item a.accordion-title";
pub(crate) const RESCHEDULE_SUBMIT: &str = "input[name=commit]";
pub(crate) const DATE_INPUT: &str = "#appointments_consulate_appointment_date";
pub(crate) const PICKER_NEXT: &str = "a.ui-datepicker-next";
pub(crate) const PICKER_OPEN_DAY: &str = "td[data-handler=selectDay] a";

/// Errors raised while checking availability
#[derive(Debug, Error)]
pub enum CheckError {
    /// The date-picker never offered a selectable day within the horizon.
    /// Reported distinctly from generic failure.
    #[error("no appointment slots reachable within {months} months")]
    NoSlotsWithinHorizon { months: u32 },

    /// The provider's JSON payload did not have the expected shape
    #[error("unexpected appointment payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A date the provider reported could not be parsed
    #[error(transparent)]
    InvalidDate(#[from] InvalidAppointmentDate),

    /// A browser interaction failed
    #[error(transparent)]
    Automation(#[from] AutomationError),
}

/// Checks availability for one configured location
pub struct Checker {
    base_url: String,
    username: String,
    password: String,
    schedule_id: String,
    facility_id: &'static str,
    mode: CheckMode,
    max_month_advances: u32,
    settle_delay: Duration,
}

impl Checker {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            schedule_id: config.schedule_id.clone(),
            facility_id: config.location.facility_id(),
            mode: config.check_mode,
            max_month_advances: config.max_month_advances,
            settle_delay: config.settle_delay(),
        }
    }

    /// Signs in to the scheduling site
    ///
    /// Fills in credentials, accepts the policy checkbox, and submits.
    pub async fn sign_in(&self, session: &dyn BrowserSession) -> Result<(), AutomationError> {
        let url = format!("{}/users/sign_in", self.base_url);
        session.goto(&url).await?;

        session.fill(EMAIL_INPUT, &self.username).await?;
        session.fill(PASSWORD_INPUT, &self.password).await?;
        session.set_checked(POLICY_CHECKBOX).await?;
        self.settle().await;

        session.click(SIGN_IN_SUBMIT).await?;
        self.settle().await;

        Ok(())
    }

    /// Retrieves the earliest offered appointment, if any
    pub async fn earliest_appointment(
        &self,
        session: &dyn BrowserSession,
    ) -> Result<Option<Appointment>, CheckError> {
        match self.mode {
            CheckMode::Api => self.earliest_via_api(session).await,
            CheckMode::Ui => self.earliest_via_ui(session).await,
        }
    }

    /// Direct-API variant: the appointments-by-day endpoint returns day
    /// records ordered ascending, so the first element is the earliest.
    async fn earliest_via_api(
        &self,
        session: &dyn BrowserSession,
    ) -> Result<Option<Appointment>, CheckError> {
        let url = format!(
            "{}/schedule/{}/appointment/days/{}.json?appointments",
            self.base_url, self.schedule_id, self.facility_id
        );

        let payload = session.fetch_json(&url).await?;
        let days: Vec<AppointmentDay> = serde_json::from_value(payload)?;

        debug!("Provider returned {} available day(s)", days.len());

        Ok(appointment::earliest(&days)?)
    }

    /// UI-navigation variant: click through to the date-picker and advance
    /// months until a selectable day appears, bounded by the configured
    /// horizon.
    async fn earliest_via_ui(
        &self,
        session: &dyn BrowserSession,
    ) -> Result<Option<Appointment>, CheckError> {
        let url = format!("{}/schedule/{}/appointment", self.base_url, self.schedule_id);
        session.goto(&url).await?;
        self.settle().await;

        session.click(CONTINUE_LINK).await?;
        self.settle().await;

        session.click(RESCHEDULE_ACCORDION).await?;
        self.settle().await;

        session.click(RESCHEDULE_SUBMIT).await?;
        self.settle().await;

        session.click(DATE_INPUT).await?;
        self.settle().await;

        let mut advanced = 0;
        while !session.exists(PICKER_OPEN_DAY).await? {
            if advanced >= self.max_month_advances {
                return Err(CheckError::NoSlotsWithinHorizon {
                    months: self.max_month_advances,
                });
            }
            session.click(PICKER_NEXT).await?;
            advanced += 1;
            self.settle().await;
        }

        debug!("Selectable day found after advancing {} month(s)", advanced);

        // The first selectable day in the earliest non-empty month
        session.click(PICKER_OPEN_DAY).await?;
        self.settle().await;

        let raw = session
            .value(DATE_INPUT)
            .await?
            .ok_or(AutomationError::ElementNotFound {
                selector: DATE_INPUT.to_string(),
            })?;

        let day = AppointmentDay {
            date: raw,
            business_day: None,
        };

        Ok(Some(day.to_appointment()?))
    }

    async fn settle(&self) {
        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }
    }
}
