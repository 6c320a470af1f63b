//! Browser lifecycle management using Chrome DevTools Protocol

use headless_chrome::{Browser, LaunchOptions, Tab};
use mockview_core::{Result, VerifyConfig, VerifyError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 720,
            timeout_seconds: 30,
        }
    }
}

impl From<&VerifyConfig> for BrowserConfig {
    fn from(config: &VerifyConfig) -> Self {
        Self {
            headless: config.headless,
            window_width: config.window_width,
            window_height: config.window_height,
            timeout_seconds: config.nav_timeout_secs,
        }
    }
}

/// Active browser session with an exclusively owned tab.
///
/// The browser process, its isolation context, and the tab are all released
/// when the session is dropped, whichever way the run ended.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a new browser instance with default configuration
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| VerifyError::Browser(format!("Failed to launch browser: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| VerifyError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| VerifyError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to a URL and wait for the navigation to complete
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| VerifyError::Browser(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| VerifyError::Browser(format!("Navigation timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Wait for an element containing the given text to appear
    ///
    /// # Arguments
    /// * `text` - Visible text to look for anywhere in the page
    /// * `timeout` - Optional timeout duration (uses config default if None)
    pub async fn wait_for_text(&self, text: &str, timeout: Option<Duration>) -> Result<()> {
        let timeout_duration =
            timeout.unwrap_or_else(|| Duration::from_secs(self.config.timeout_seconds));
        let xpath = text_xpath(text);

        debug!("Waiting for text: {:?} (timeout: {:?})", text, timeout_duration);

        self.tab
            .wait_for_xpath_with_custom_timeout(&xpath, timeout_duration)
            .map_err(|_e| VerifyError::ElementNotFound {
                selector: format!("text={}", text),
            })?;

        debug!("Text found: {:?}", text);
        Ok(())
    }

    /// Click the first element containing the given text
    pub async fn click_text(&self, text: &str) -> Result<()> {
        let xpath = text_xpath(text);

        debug!("Clicking element with text: {:?}", text);

        let element = self
            .tab
            .wait_for_xpath_with_custom_timeout(&xpath, Duration::from_secs(5))
            .map_err(|_e| VerifyError::ElementNotFound {
                selector: format!("text={}", text),
            })?;

        element
            .click()
            .map_err(|e| VerifyError::Browser(format!("Failed to click {:?}: {}", text, e)))?;

        Ok(())
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| VerifyError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser is dropped here and the process cleaned up
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}

/// XPath locating any element whose text contains `text`.
///
/// XPath has no string escaping, so text containing a single quote is
/// assembled with `concat()`.
pub(crate) fn text_xpath(text: &str) -> String {
    if text.contains('\'') {
        let parts: Vec<String> = text
            .split('\'')
            .map(|part| format!("'{}'", part))
            .collect();
        format!(
            "//*[contains(text(), concat({}))]",
            parts.join(r#", "'", "#)
        )
    } else {
        format!("//*[contains(text(), '{}')]", text)
    }
}
