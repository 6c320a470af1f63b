//! Mock rules: canned HTTP responses keyed by URL glob patterns

use crate::error::{Result, VerifyError};
use glob::Pattern;
use tracing::{debug, trace};

/// A registered substitution of a canned response for a real network call.
///
/// The pattern is a glob matched against the full request URL, so rules are
/// typically written as `**/api/...` to be origin-independent. Rules stay
/// active for the lifetime of the browser session.
#[derive(Debug, Clone)]
pub struct MockRule {
    /// Glob pattern matched against outgoing request URLs
    pub pattern: String,
    /// HTTP status code of the canned response
    pub status: u32,
    /// Content-Type header value
    pub content_type: String,
    /// Literal response body
    pub body: String,
    /// Compiled pattern
    matcher: Pattern,
}

impl MockRule {
    /// Create a rule with an explicit status and content type
    pub fn new(
        pattern: impl Into<String>,
        status: u32,
        content_type: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let matcher = Pattern::new(&pattern).map_err(|e| VerifyError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern,
            status,
            content_type: content_type.into(),
            body: body.into(),
            matcher,
        })
    }

    /// Shorthand for a 200 `application/json` rule
    pub fn json(pattern: impl Into<String>, body: impl Into<String>) -> Result<Self> {
        Self::new(pattern, 200, "application/json", body)
    }

    /// Check whether a request URL matches this rule's pattern
    pub fn matches(&self, url: &str) -> bool {
        self.matcher.matches(url)
    }
}

/// Ordered collection of mock rules for one browser session.
///
/// Lookup returns the first matching rule. The built-in rule sets use
/// non-overlapping patterns, so registration order carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    rules: Vec<MockRule>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule; active until the session ends
    pub fn register(&mut self, rule: MockRule) {
        debug!("Registering mock rule: {}", rule.pattern);
        self.rules.push(rule);
    }

    /// Find the canned response for a request URL, if any rule matches
    pub fn response_for(&self, url: &str) -> Option<&MockRule> {
        let hit = self.rules.iter().find(|rule| rule.matches(url));
        trace!("Mock lookup for {}: {}", url, hit.is_some());
        hit
    }

    pub fn rules(&self) -> &[MockRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
