//! Slotwatch Watcher
//!
//! A daemon that polls a visa-appointment scheduling website for slots
//! earlier than a configured threshold and alerts Telegram chats when one
//! turns up.
//!
//! Architecture:
//! - Configuration: Loaded once from a JSON file at startup
//! - Automation: Browser capability behind traits (WebDriver in production)
//! - Services: Availability checking and alert fan-out
//! - Scheduler: The perpetual poll loop with per-attempt fault isolation
//!
//! Every poll attempt opens a fresh browser session, signs in, reads the
//! earliest offered appointment, compares it to the alert threshold, and
//! closes the session again.

mod automation;
mod config;
mod scheduler;
mod service;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::automation::webdriver::WebDriverBrowser;
use crate::config::Config;
use crate::scheduler::Poller;
use crate::service::{Notifier, TelegramAlertSender};
use slotwatch_telegram::TelegramClient;

#[derive(Parser)]
#[command(name = "slotwatch")]
#[command(about = "Watches a visa scheduling site for earlier appointments", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, env = "SLOTWATCH_CONFIG", default_value = "slotwatch.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slotwatch_watcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    println!("{}", "VISA Appointment Watch".yellow().bold());

    // Load configuration
    let config = Config::from_file(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    info!(
        "Loaded configuration: location={} (facility {}), mode={:?}, interval={:?}",
        config.location,
        config.location.facility_id(),
        config.check_mode,
        config.poll_interval()
    );

    // Wire up the browser capability and the alert path
    let driver = Arc::new(WebDriverBrowser::new(config.webdriver_url.clone()));
    let telegram = TelegramClient::new(config.bot_token.clone());
    let sender = Arc::new(TelegramAlertSender::new(telegram));
    let notifier = Notifier::new(sender, config.chat_ids.clone());

    let poller = Poller::new(config, driver, notifier);

    info!("Watcher initialized successfully");
    poller.run().await
}
