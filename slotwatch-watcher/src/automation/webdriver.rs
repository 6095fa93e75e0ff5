//! WebDriver-backed browser automation
//!
//! Implements the automation traits over a remote WebDriver endpoint
//! (chromedriver/geckodriver). Each session is a fresh WebDriver session,
//! so no state carries over between poll attempts.

use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};
use tracing::debug;

use super::{AutomationError, BrowserDriver, BrowserSession};

/// Browser driver connecting to a WebDriver endpoint
pub struct WebDriverBrowser {
    webdriver_url: String,
}

impl WebDriverBrowser {
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
        }
    }
}

#[async_trait]
impl BrowserDriver for WebDriverBrowser {
    async fn open(&self) -> Result<Box<dyn BrowserSession>, AutomationError> {
        debug!("Opening WebDriver session against {}", self.webdriver_url);

        let client = ClientBuilder::native()
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| AutomationError::Session(e.to_string()))?;

        Ok(Box::new(WebDriverSession { client }))
    }
}

/// One live WebDriver session
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    async fn find(&self, selector: &str) -> Result<fantoccini::elements::Element, AutomationError> {
        match self.client.find(Locator::Css(selector)).await {
            Ok(element) => Ok(element),
            Err(e) if e.is_no_such_element() => Err(AutomationError::ElementNotFound {
                selector: selector.to_string(),
            }),
            Err(e) => Err(AutomationError::Command(e.to_string())),
        }
    }
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn goto(&self, url: &str) -> Result<(), AutomationError> {
        self.client
            .goto(url)
            .await
            .map_err(|e| AutomationError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<(), AutomationError> {
        let element = self.find(selector).await?;
        element
            .send_keys(text)
            .await
            .map_err(|e| AutomationError::Command(e.to_string()))
    }

    async fn click(&self, selector: &str) -> Result<(), AutomationError> {
        let element = self.find(selector).await?;
        element
            .click()
            .await
            .map(|_| ())
            .map_err(|e| AutomationError::Command(e.to_string()))
    }

    async fn set_checked(&self, selector: &str) -> Result<(), AutomationError> {
        // Scripted rather than clicked; a click would toggle an
        // already-checked box off.
        self.client
            .execute(
                "document.querySelector(arguments[0]).checked = true;",
                vec![serde_json::json!(selector)],
            )
            .await
            .map(|_| ())
            .map_err(|e| AutomationError::Command(e.to_string()))
    }

    async fn exists(&self, selector: &str) -> Result<bool, AutomationError> {
        match self.client.find(Locator::Css(selector)).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_no_such_element() => Ok(false),
            Err(e) => Err(AutomationError::Command(e.to_string())),
        }
    }

    async fn value(&self, selector: &str) -> Result<Option<String>, AutomationError> {
        let element = self.find(selector).await?;
        element
            .prop("value")
            .await
            .map_err(|e| AutomationError::Command(e.to_string()))
    }

    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, AutomationError> {
        self.goto(url).await?;

        // The browser renders a JSON response as the body's text content
        let body = self.find("body").await?;
        let text = body
            .text()
            .await
            .map_err(|e| AutomationError::Command(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| {
            AutomationError::Command(format!("response at {} is not valid JSON: {}", url, e))
        })
    }

    async fn close(&self) -> Result<(), AutomationError> {
        // Client is a cloneable handle; closing any clone ends the session
        self.client
            .clone()
            .close()
            .await
            .map_err(|e| AutomationError::Command(e.to_string()))
    }
}
