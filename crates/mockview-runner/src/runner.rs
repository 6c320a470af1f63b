//! Verification run orchestration
//!
//! One browser session per run. Mocks and seeded state are installed once
//! up front; scenarios then execute sequentially and independently. A
//! scenario failure is recorded and the run moves on — only session
//! setup/teardown errors abort the run.

use chrono::{DateTime, Utc};
use mockview_browser::{
    install_mocks, read_local_storage, seed_local_storage, BrowserConfig, BrowserSession,
    PageDriver,
};
use mockview_core::{Result, Scenario, ScenarioOutcome, ScenarioStep, VerifyConfig, VerifyError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::fixtures;

/// Summary of one verification run, written to `report.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.failed()).count()
    }
}

/// Drives a full verification run against the configured application
pub struct VerificationRunner {
    config: VerifyConfig,
}

impl VerificationRunner {
    pub fn new(config: VerifyConfig) -> Self {
        Self { config }
    }

    /// Execute the built-in scenarios and collect their outcomes.
    ///
    /// Errors returned here are session setup/teardown failures; scenario
    /// failures are captured inside the report instead.
    pub async fn run(&self) -> Result<RunReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!("Starting verification run {}", run_id);

        let registry = Arc::new(fixtures::mock_registry()?);
        let scenarios = fixtures::builtin_scenarios(&self.config.output_dir);

        let session = BrowserSession::launch_with_config(BrowserConfig::from(&self.config)).await?;

        // Mocks must be live before any navigation that depends on them
        install_mocks(&session, Arc::clone(&registry)).await?;

        // localStorage is origin-scoped: land on the app root first,
        // then seed the auth token and user profile
        session.navigate(&self.config.page_url("/")).await?;
        let state = fixtures::seed_state();
        seed_local_storage(&session, &state).await?;

        let token = read_local_storage(&session, "token").await?;
        if token.as_deref() != Some(fixtures::TOKEN) {
            return Err(VerifyError::Other(format!(
                "localStorage seeding failed: token = {:?}",
                token
            )));
        }
        debug!("Seeded state verified");

        let mut outcomes = Vec::with_capacity(scenarios.len());
        for scenario in &scenarios {
            outcomes.push(execute_scenario(&session, &self.config, scenario).await);
        }

        session.close().await?;

        let report = RunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            outcomes,
        };
        self.write_report(&report).await?;

        info!(
            "Run {} finished: {}/{} scenario(s) passed",
            run_id,
            report.outcomes.len() - report.failed_count(),
            report.outcomes.len()
        );
        Ok(report)
    }

    async fn write_report(&self, report: &RunReport) -> Result<()> {
        let path = self.config.output_dir.join("report.json");
        tokio::fs::create_dir_all(&self.config.output_dir).await?;
        tokio::fs::write(&path, serde_json::to_vec_pretty(report)?).await?;
        debug!("Run report written to {}", path.display());
        Ok(())
    }
}

/// Execute one scenario, never letting its failure escape.
///
/// Success writes the scenario's screenshot; any step failure is logged,
/// captured as the error screenshot, and folded into the outcome so the
/// caller can continue with the next scenario.
pub async fn execute_scenario(
    driver: &dyn PageDriver,
    config: &VerifyConfig,
    scenario: &Scenario,
) -> ScenarioOutcome {
    info!("Running scenario: {}", scenario.name);
    let start = Instant::now();

    match drive_scenario(driver, config, scenario).await {
        Ok(()) => {
            info!("Scenario {} passed", scenario.name);
            ScenarioOutcome {
                scenario: scenario.name.clone(),
                passed: true,
                error: None,
                screenshot: scenario.screenshot.clone(),
                duration_ms: start.elapsed().as_millis() as u64,
            }
        }
        Err(err) => {
            warn!("Scenario {} failed: {}", scenario.name, err);
            if let Err(shot_err) = driver.save_screenshot(&scenario.error_screenshot).await {
                warn!(
                    "Could not capture error screenshot for {}: {}",
                    scenario.name, shot_err
                );
            }
            ScenarioOutcome {
                scenario: scenario.name.clone(),
                passed: false,
                error: Some(err.to_string()),
                screenshot: scenario.error_screenshot.clone(),
                duration_ms: start.elapsed().as_millis() as u64,
            }
        }
    }
}

async fn drive_scenario(
    driver: &dyn PageDriver,
    config: &VerifyConfig,
    scenario: &Scenario,
) -> Result<()> {
    driver.navigate(&config.page_url(&scenario.path)).await?;

    for step in &scenario.steps {
        match step {
            ScenarioStep::WaitForText { text, timeout } => {
                driver.wait_for_text(text, *timeout).await?;
            }
            ScenarioStep::ClickText { text } => {
                driver.click_text(text).await?;
            }
        }
    }

    driver.save_screenshot(&scenario.screenshot).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Scripted driver: waits fail for configured texts, screenshots are
    /// written as placeholder files so output assertions work on disk.
    struct FakeDriver {
        fail_waits: Vec<String>,
        log: Mutex<Vec<String>>,
    }

    impl FakeDriver {
        fn passing() -> Self {
            Self {
                fail_waits: Vec::new(),
                log: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(text: &str) -> Self {
            Self {
                fail_waits: vec![text.to_string()],
                log: Mutex::new(Vec::new()),
            }
        }

        fn log(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }

        fn record(&self, entry: String) {
            self.log.lock().unwrap().push(entry);
        }
    }

    #[async_trait]
    impl PageDriver for FakeDriver {
        async fn navigate(&self, url: &str) -> Result<()> {
            self.record(format!("navigate {}", url));
            Ok(())
        }

        async fn wait_for_text(&self, text: &str, _timeout: Duration) -> Result<()> {
            self.record(format!("wait {}", text));
            if self.fail_waits.iter().any(|t| t == text) {
                return Err(VerifyError::ElementNotFound {
                    selector: format!("text={}", text),
                });
            }
            Ok(())
        }

        async fn click_text(&self, text: &str) -> Result<()> {
            self.record(format!("click {}", text));
            Ok(())
        }

        async fn save_screenshot(&self, path: &Path) -> Result<()> {
            self.record(format!("screenshot {}", path.display()));
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, b"png")?;
            Ok(())
        }
    }

    fn test_config(output_dir: &Path) -> VerifyConfig {
        VerifyConfig {
            output_dir: output_dir.to_path_buf(),
            ..VerifyConfig::default()
        }
    }

    #[tokio::test]
    async fn test_chat_scenario_success_writes_only_success_screenshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let driver = FakeDriver::passing();
        let scenario = fixtures::chat_scenario(dir.path());

        let outcome = execute_scenario(&driver, &config, &scenario).await;

        assert!(outcome.passed());
        assert!(outcome.error.is_none());
        assert!(dir.path().join("ai_chat.png").exists());
        assert!(!dir.path().join("error_ai_chat.png").exists());
    }

    #[tokio::test]
    async fn test_direct_messages_clicks_before_secondary_wait() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let driver = FakeDriver::passing();
        let scenario = fixtures::direct_messages_scenario(dir.path());

        let outcome = execute_scenario(&driver, &config, &scenario).await;

        assert!(outcome.passed());
        assert!(dir.path().join("direct_messages.png").exists());
        assert!(!dir.path().join("error_dm.png").exists());

        let log = driver.log();
        assert_eq!(
            log,
            vec![
                "navigate http://localhost:5173/direct-messages".to_string(),
                "wait Dr. Smith".to_string(),
                "click Dr. Smith".to_string(),
                "wait Hello user".to_string(),
                format!("screenshot {}", dir.path().join("direct_messages.png").display()),
            ]
        );
    }

    #[tokio::test]
    async fn test_wait_timeout_writes_error_screenshot_instead() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let driver = FakeDriver::failing_on("Mock Session");
        let scenario = fixtures::chat_scenario(dir.path());

        let outcome = execute_scenario(&driver, &config, &scenario).await;

        assert!(outcome.failed());
        assert!(outcome.error.as_deref().unwrap().contains("Mock Session"));
        assert!(dir.path().join("error_ai_chat.png").exists());
        assert!(!dir.path().join("ai_chat.png").exists());
    }

    #[tokio::test]
    async fn test_first_failure_does_not_stop_second_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let driver = FakeDriver::failing_on("Mock Session");

        let mut outcomes = Vec::new();
        for scenario in fixtures::builtin_scenarios(dir.path()) {
            outcomes.push(execute_scenario(&driver, &config, &scenario).await);
        }

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].failed());
        assert!(outcomes[1].passed());
        assert!(dir.path().join("error_ai_chat.png").exists());
        assert!(dir.path().join("direct_messages.png").exists());
    }

    #[tokio::test]
    async fn test_repeated_runs_overwrite_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let driver = FakeDriver::passing();
        let scenario = fixtures::chat_scenario(dir.path());

        let first = execute_scenario(&driver, &config, &scenario).await;
        let second = execute_scenario(&driver, &config, &scenario).await;

        assert!(first.passed() && second.passed());
        let contents = std::fs::read(dir.path().join("ai_chat.png")).unwrap();
        assert_eq!(contents, b"png");
    }

    #[test]
    fn test_report_predicates() {
        let passed = ScenarioOutcome {
            scenario: "ai-chat".to_string(),
            passed: true,
            error: None,
            screenshot: "verification/ai_chat.png".into(),
            duration_ms: 1200,
        };
        let failed = ScenarioOutcome {
            scenario: "direct-messages".to_string(),
            passed: false,
            error: Some("Element not found: text=Dr. Smith".to_string()),
            screenshot: "verification/error_dm.png".into(),
            duration_ms: 15_000,
        };

        let report = RunReport {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            outcomes: vec![passed, failed],
        };

        assert!(!report.all_passed());
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_report_serializes_round_trip() {
        let report = RunReport {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            outcomes: Vec::new(),
        };

        let json = serde_json::to_string(&report).unwrap();
        let decoded: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.run_id, report.run_id);
        assert!(decoded.all_passed());
    }
}
