//! Verification scenarios and their outcomes

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One step of a scenario, executed in order after navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioStep {
    /// Block until an element containing the text appears, or time out
    WaitForText { text: String, timeout: Duration },
    /// Click the first element containing the text
    ClickText { text: String },
}

/// One independent page-verification workflow.
///
/// Scenarios run sequentially; a failure in one never prevents the next
/// from running.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short identifier used in logs and the run report
    pub name: String,
    /// Path on the target origin, e.g. `/ai-chat`
    pub path: String,
    /// Ordered steps executed after navigating to `path`
    pub steps: Vec<ScenarioStep>,
    /// Screenshot written on success
    pub screenshot: PathBuf,
    /// Screenshot written when any step fails
    pub error_screenshot: PathBuf,
}

impl Scenario {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            steps: Vec::new(),
            screenshot: PathBuf::new(),
            error_screenshot: PathBuf::new(),
        }
    }

    pub fn wait_for_text(mut self, text: impl Into<String>, timeout: Duration) -> Self {
        self.steps.push(ScenarioStep::WaitForText {
            text: text.into(),
            timeout,
        });
        self
    }

    pub fn click_text(mut self, text: impl Into<String>) -> Self {
        self.steps.push(ScenarioStep::ClickText { text: text.into() });
        self
    }

    pub fn screenshots(mut self, success: PathBuf, error: PathBuf) -> Self {
        self.screenshot = success;
        self.error_screenshot = error;
        self
    }
}

/// Result of executing one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub scenario: String,
    /// Whether every step succeeded
    pub passed: bool,
    /// Error text for failed scenarios
    pub error: Option<String>,
    /// Path of the screenshot that was written (success or error variant)
    pub screenshot: PathBuf,
    /// Wall-clock duration of the scenario
    pub duration_ms: u64,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn failed(&self) -> bool {
        !self.passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_step_order() {
        let scenario = Scenario::new("dm", "/direct-messages")
            .wait_for_text("Dr. Smith", Duration::from_secs(15))
            .click_text("Dr. Smith")
            .wait_for_text("Hello user", Duration::from_secs(5));

        assert_eq!(scenario.steps.len(), 3);
        assert!(matches!(
            &scenario.steps[0],
            ScenarioStep::WaitForText { text, timeout }
                if text == "Dr. Smith" && *timeout == Duration::from_secs(15)
        ));
        assert!(matches!(
            &scenario.steps[1],
            ScenarioStep::ClickText { text } if text == "Dr. Smith"
        ));
        assert!(matches!(
            &scenario.steps[2],
            ScenarioStep::WaitForText { text, timeout }
                if text == "Hello user" && *timeout == Duration::from_secs(5)
        ));
    }

    #[test]
    fn test_outcome_predicates() {
        let outcome = ScenarioOutcome {
            scenario: "ai-chat".to_string(),
            passed: false,
            error: Some("Element not found".to_string()),
            screenshot: PathBuf::from("verification/error_ai_chat.png"),
            duration_ms: 15_000,
        };

        assert!(outcome.failed());
        assert!(!outcome.passed());
    }
}
