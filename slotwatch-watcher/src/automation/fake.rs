//! Scripted fakes for the automation traits
//!
//! Used by checker and poller tests to drive full poll attempts without a
//! browser. Sessions record every interaction so tests can assert on the
//! exact sequence, and the driver hands out pre-scripted sessions in order.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{AutomationError, BrowserDriver, BrowserSession};
use crate::service::checker::PICKER_NEXT;

/// A scripted browser session
#[derive(Default)]
pub struct FakeSession {
    /// Payload served by fetch_json; None simulates a scraping failure
    pub json_payload: Option<Value>,
    /// Delay before fetch_json responds, for timeout tests
    pub fetch_delay: Option<Duration>,
    /// Number of next-month clicks after which a selectable day appears;
    /// None means no day ever appears
    pub selectable_after: Option<u32>,
    /// Values readable via value(), keyed by selector
    pub values: HashMap<String, String>,

    pub gotos: Mutex<Vec<String>>,
    pub fills: Mutex<Vec<(String, String)>>,
    pub clicks: Mutex<Vec<String>>,
    pub checked: Mutex<Vec<String>>,
    pub closed: AtomicUsize,
    pub next_clicks: AtomicU32,
}

impl FakeSession {
    pub fn with_json(payload: Value) -> Self {
        Self {
            json_payload: Some(payload),
            ..Self::default()
        }
    }

    pub fn clicks_on(&self, selector: &str) -> usize {
        self.clicks
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.as_str() == selector)
            .count()
    }
}

#[async_trait]
impl BrowserSession for Arc<FakeSession> {
    async fn goto(&self, url: &str) -> Result<(), AutomationError> {
        self.gotos.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<(), AutomationError> {
        self.fills
            .lock()
            .unwrap()
            .push((selector.to_string(), text.to_string()));
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), AutomationError> {
        self.clicks.lock().unwrap().push(selector.to_string());
        if selector == PICKER_NEXT {
            self.next_clicks.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn set_checked(&self, selector: &str) -> Result<(), AutomationError> {
        self.checked.lock().unwrap().push(selector.to_string());
        Ok(())
    }

    async fn exists(&self, _selector: &str) -> Result<bool, AutomationError> {
        match self.selectable_after {
            Some(after) => Ok(self.next_clicks.load(Ordering::SeqCst) >= after),
            None => Ok(false),
        }
    }

    async fn value(&self, selector: &str) -> Result<Option<String>, AutomationError> {
        Ok(self.values.get(selector).cloned())
    }

    async fn fetch_json(&self, _url: &str) -> Result<Value, AutomationError> {
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }
        self.json_payload
            .clone()
            .ok_or_else(|| AutomationError::Command("scripted fetch failure".to_string()))
    }

    async fn close(&self) -> Result<(), AutomationError> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Driver handing out scripted sessions in order
pub struct FakeDriver {
    sessions: Mutex<Vec<Arc<FakeSession>>>,
    pub opened: AtomicUsize,
    pub fail_open: bool,
}

impl FakeDriver {
    pub fn new(sessions: Vec<Arc<FakeSession>>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
            opened: AtomicUsize::new(0),
            fail_open: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
            opened: AtomicUsize::new(0),
            fail_open: true,
        }
    }
}

#[async_trait]
impl BrowserDriver for FakeDriver {
    async fn open(&self) -> Result<Box<dyn BrowserSession>, AutomationError> {
        if self.fail_open {
            return Err(AutomationError::Session("scripted open failure".to_string()));
        }

        let session = {
            let mut sessions = self.sessions.lock().unwrap();
            assert!(!sessions.is_empty(), "FakeDriver ran out of scripted sessions");
            sessions.remove(0)
        };

        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(session))
    }
}
