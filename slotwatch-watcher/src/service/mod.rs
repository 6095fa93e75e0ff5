//! Service layer
//!
//! Services contain the watcher's business logic: checking the scheduling
//! site for the earliest appointment and broadcasting alerts. The checker
//! runs against the injected browser capability and the notifier against an
//! alert-sender trait, so both are testable without a browser or network.

pub(crate) mod checker;
mod notify;

// Re-export traits
pub use notify::AlertSender;

// Re-export implementations
pub use checker::{CheckError, Checker};
pub use notify::{Notifier, TelegramAlertSender};
