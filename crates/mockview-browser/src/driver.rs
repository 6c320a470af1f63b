//! Page-driving seam between scenario logic and the real browser

use async_trait::async_trait;
use mockview_core::Result;
use std::path::Path;
use std::time::Duration;

use crate::screenshot::save_full_page;
use crate::session::BrowserSession;

/// The page operations a verification scenario needs.
///
/// [`BrowserSession`] is the production implementation; scenario execution
/// tests use a scripted driver so they run without a browser.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to an absolute URL and wait for the load to settle
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Block until an element containing the text appears, or time out
    async fn wait_for_text(&self, text: &str, timeout: Duration) -> Result<()>;

    /// Click the first element containing the text
    async fn click_text(&self, text: &str) -> Result<()>;

    /// Write a full-page screenshot to the given path
    async fn save_screenshot(&self, path: &Path) -> Result<()>;
}

#[async_trait]
impl PageDriver for BrowserSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        BrowserSession::navigate(self, url).await
    }

    async fn wait_for_text(&self, text: &str, timeout: Duration) -> Result<()> {
        BrowserSession::wait_for_text(self, text, Some(timeout)).await
    }

    async fn click_text(&self, text: &str) -> Result<()> {
        BrowserSession::click_text(self, text).await
    }

    async fn save_screenshot(&self, path: &Path) -> Result<()> {
        save_full_page(self, path).await
    }
}
