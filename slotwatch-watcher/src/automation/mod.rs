//! Browser automation capability
//!
//! The scheduling website is only reachable through a driven browser, so the
//! watcher talks to it through these traits rather than a concrete driver.
//! Production uses the WebDriver-backed implementation in [`webdriver`];
//! tests script a fake session and never touch a browser or the network.
//!
//! One session corresponds to one browser instance plus one page, scoped to
//! a single poll attempt. Sessions are never reused across attempts.

pub mod webdriver;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the browser automation layer
#[derive(Debug, Error)]
pub enum AutomationError {
    /// Opening a browser session failed
    #[error("failed to open browser session: {0}")]
    Session(String),

    /// Navigation did not complete
    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    /// An expected element was not present on the page
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    /// Any other browser command failure
    #[error("browser command failed: {0}")]
    Command(String),
}

/// Opens browser sessions
///
/// Implementations must hand out a fresh session per call; cookies and
/// navigation history never leak between sessions.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Opens a new browser session with a single blank page
    async fn open(&self) -> Result<Box<dyn BrowserSession>, AutomationError>;
}

/// One browser instance plus one navigable page
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Navigates the page to the given URL
    async fn goto(&self, url: &str) -> Result<(), AutomationError>;

    /// Types text into the element matching the CSS selector
    async fn fill(&self, selector: &str, text: &str) -> Result<(), AutomationError>;

    /// Clicks the element matching the CSS selector
    async fn click(&self, selector: &str) -> Result<(), AutomationError>;

    /// Marks the checkbox matching the CSS selector as checked
    async fn set_checked(&self, selector: &str) -> Result<(), AutomationError>;

    /// Whether any element matches the CSS selector
    async fn exists(&self, selector: &str) -> Result<bool, AutomationError>;

    /// Reads the `value` property of the element matching the CSS selector
    async fn value(&self, selector: &str) -> Result<Option<String>, AutomationError>;

    /// Navigates to a URL that serves JSON and decodes the response body
    ///
    /// Runs inside the session so the request carries the signed-in cookies.
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, AutomationError>;

    /// Closes the browser session
    async fn close(&self) -> Result<(), AutomationError>;
}
