//! Screenshot capture using Chrome DevTools Protocol

use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use mockview_core::{Result, VerifyError};
use std::path::Path;
use tracing::{debug, info};

use crate::session::BrowserSession;

/// Capture a full-page PNG and write it to `path`.
///
/// Parent directories are created as needed; an existing file at `path`
/// is overwritten, so repeated runs stay idempotent.
pub async fn save_full_page(session: &BrowserSession, path: &Path) -> Result<()> {
    debug!("Capturing full page screenshot");

    let data = capture_full_page(session).await?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, &data).await?;

    info!("Screenshot saved: {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Capture a full-page PNG and return the raw bytes
pub async fn capture_full_page(session: &BrowserSession) -> Result<Vec<u8>> {
    let tab = session.tab();

    let data = tab
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
        .map_err(|e| VerifyError::ScreenshotFailed(format!("CDP capture failed: {}", e)))?;

    Ok(data)
}
