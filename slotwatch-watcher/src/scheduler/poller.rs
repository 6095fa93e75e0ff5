//! Availability poller
//!
//! Drives the unbounded check cycle: open a fresh browser session, run one
//! availability check under a timeout, close the session, and wait out the
//! configured interval. Every failure is absorbed at the attempt boundary;
//! nothing that happens during an attempt can stop the loop.

use std::sync::Arc;

use chrono::Local;
use colored::Colorize;
use tokio::time;
use tracing::{debug, error, info, warn};

use slotwatch_core::domain::outcome::{CheckOutcome, alert_text};

use crate::automation::{BrowserDriver, BrowserSession};
use crate::config::Config;
use crate::service::{CheckError, Checker, Notifier};

/// Poller that perpetually checks for earlier appointments
pub struct Poller {
    config: Config,
    driver: Arc<dyn BrowserDriver>,
    checker: Checker,
    notifier: Notifier,
}

impl Poller {
    /// Creates a new poller
    pub fn new(config: Config, driver: Arc<dyn BrowserDriver>, notifier: Notifier) -> Self {
        let checker = Checker::new(&config);
        Self {
            config,
            driver,
            checker,
            notifier,
        }
    }

    /// Starts the polling loop
    ///
    /// Runs until the process is terminated. The delay is measured from the
    /// end of each attempt, so effective cadence is attempt duration plus
    /// the configured interval.
    pub async fn run(&self) -> anyhow::Result<()> {
        info!(
            "Starting availability poller (interval: {:?})",
            self.config.poll_interval()
        );

        loop {
            self.run_once().await;

            let next = Local::now() + self.config.poll_interval();
            println!(
                "{}",
                format!("Next check at: {}", next.format("%Y-%m-%d %H:%M:%S")).dimmed()
            );

            time::sleep(self.config.poll_interval()).await;
        }
    }

    /// Performs a single poll attempt
    ///
    /// The session is closed exactly once regardless of how the attempt
    /// ends; errors and timeouts are logged and swallowed so the next
    /// attempt can run.
    pub async fn run_once(&self) {
        println!("{}", "Opening browser session...".dimmed());

        let session = match self.driver.open().await {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to open browser session: {}", e);
                println!("{}", "Could not open a browser session, will retry.".red());
                return;
            }
        };

        let result = time::timeout(
            self.config.attempt_timeout(),
            self.attempt(session.as_ref()),
        )
        .await;

        println!("{}", "Closing browser session...".dimmed());
        if let Err(e) = session.close().await {
            warn!("Failed to close browser session: {}", e);
        }

        match result {
            Err(_) => {
                warn!(
                    "Attempt exceeded the {:?} timeout",
                    self.config.attempt_timeout()
                );
                println!("{}", "Check timed out, will retry.".red());
            }
            Ok(Err(e @ CheckError::NoSlotsWithinHorizon { .. })) => {
                warn!("{}", e);
                println!("{}", "No appointment slots reachable!".red());
            }
            Ok(Err(e)) => {
                error!("Check failed: {}", e);
                println!("{}", "Error occurred, will retry.".red());
            }
            Ok(Ok(())) => {}
        }
    }

    /// One full check inside an open session
    async fn attempt(&self, session: &dyn BrowserSession) -> Result<(), CheckError> {
        if let Err(e) = self.checker.sign_in(session).await {
            // The session may still be authenticated even when submission
            // did not observably navigate; keep going.
            warn!("Sign-in did not complete cleanly: {}", e);
        } else {
            println!("{}", "Signed in!".green());
        }

        println!(
            "{}",
            format!("Checking at: {}", Local::now().format("%Y-%m-%d %H:%M:%S")).yellow()
        );

        let earliest = self.checker.earliest_appointment(session).await?;

        match CheckOutcome::classify(earliest, self.config.alert_before) {
            CheckOutcome::NoAppointments => {
                println!("{}", "No appointments!".red());
            }
            CheckOutcome::NotEarlier(appointment) => {
                debug!("Earliest offered: {}", appointment.display);
                println!("{}", "No early appointments!".red());
            }
            CheckOutcome::Earlier(appointment) => {
                let text = alert_text(&appointment);
                info!("Early appointment found: {}", appointment.display);
                println!("{}", text.green());
                self.notifier.broadcast(&text).await;
            }
        }

        Ok(())
    }
}
