//! localStorage seeding for simulated authentication
//!
//! The target application decides whether a user is logged in by reading
//! `token` and `user` from localStorage, so writing those two keys before
//! the first scenario navigation is enough to get past its auth gate.

use mockview_core::{Result, SeededState};
use tracing::{debug, info};

use crate::session::BrowserSession;

/// Build the JavaScript snippet that writes the seeded state.
///
/// Keys and values are embedded through `serde_json::to_string` so they
/// are always valid JS string literals, whatever they contain.
pub fn seed_script(state: &SeededState) -> Result<String> {
    let mut script = String::from("(() => {\n");
    for (key, value) in state.storage_pairs()? {
        script.push_str(&format!(
            "  localStorage.setItem({}, {});\n",
            serde_json::to_string(&key)?,
            serde_json::to_string(&value)?,
        ));
    }
    script.push_str("})()");
    Ok(script)
}

/// Write the seeded state into the page's localStorage.
///
/// The page must already be on the target origin (localStorage is
/// origin-scoped), so callers navigate to the application root first.
pub async fn seed_local_storage(session: &BrowserSession, state: &SeededState) -> Result<()> {
    info!("Seeding localStorage for user {}", state.user.name);

    let script = seed_script(state)?;
    session.evaluate_script(&script).await?;

    debug!("localStorage seeded");
    Ok(())
}

/// Read a localStorage value back, for post-seed verification
pub async fn read_local_storage(session: &BrowserSession, key: &str) -> Result<Option<String>> {
    let script = format!("localStorage.getItem({})", serde_json::to_string(key)?);
    let value = session.evaluate_script(&script).await?;
    Ok(value.as_str().map(str::to_string))
}
