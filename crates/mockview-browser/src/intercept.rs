//! Network request interception and mock fulfillment
//!
//! Uses the CDP Fetch domain to pause every outgoing request from the tab.
//! Requests matching a registered mock rule are answered with the rule's
//! canned response and never reach the network; everything else continues
//! unmodified.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use headless_chrome::browser::tab::{RequestInterceptor, RequestPausedDecision};
use headless_chrome::browser::transport::{SessionId, Transport};
use headless_chrome::protocol::cdp::Fetch::{events::RequestPausedEvent, FulfillRequest, HeaderEntry};
use mockview_core::{MockRegistry, MockRule, Result, VerifyError};
use std::sync::Arc;
use tracing::{debug, info, trace};

use crate::session::BrowserSession;

/// Build the CDP fulfillment for a paused request matched by a rule.
///
/// CDP requires the response body base64-encoded.
pub fn fulfillment(rule: &MockRule, request_id: String) -> FulfillRequest {
    FulfillRequest {
        request_id,
        response_code: rule.status,
        response_headers: Some(vec![HeaderEntry {
            name: "Content-Type".to_string(),
            value: rule.content_type.clone(),
        }]),
        binary_response_headers: None,
        body: Some(BASE64.encode(rule.body.as_bytes())),
        response_phrase: None,
    }
}

/// Install the registry's mock rules on the session's tab.
///
/// Must run before any navigation that depends on the mocks. The rules
/// stay active for the lifetime of the tab.
pub async fn install_mocks(session: &BrowserSession, registry: Arc<MockRegistry>) -> Result<()> {
    info!("Installing {} mock rule(s)", registry.rules().len());

    let tab = session.tab();

    tab.enable_fetch(None, None)
        .map_err(|e| VerifyError::Browser(format!("Failed to enable fetch domain: {}", e)))?;

    let interceptor: Arc<dyn RequestInterceptor + Send + Sync> = Arc::new(
        move |_transport: Arc<Transport>, _session_id: SessionId, event: RequestPausedEvent| {
            let url = &event.params.request.url;
            match registry.response_for(url) {
                Some(rule) => {
                    debug!("Mocking {} -> {} ({})", url, rule.pattern, rule.status);
                    RequestPausedDecision::Fulfill(fulfillment(
                        rule,
                        event.params.request_id.clone(),
                    ))
                }
                None => {
                    trace!("Passing through {}", url);
                    RequestPausedDecision::Continue(None)
                }
            }
        },
    );

    tab.enable_request_interception(interceptor)
        .map_err(|e| VerifyError::Browser(format!("Failed to enable interception: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_fulfillment_carries_rule_response() {
        let rule = MockRule::json("**/api/auth/me", r#"{"user":{"_id":"u1"}}"#).unwrap();
        let fulfill = fulfillment(&rule, "interception-1".to_string());

        assert_eq!(fulfill.request_id, "interception-1");
        assert_eq!(fulfill.response_code, 200);

        let headers = fulfill.response_headers.unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].name, "Content-Type");
        assert_eq!(headers[0].value, "application/json");
    }

    #[test]
    fn test_fulfillment_body_is_base64_of_fixture() {
        let body = r#"[{"_id":"1","title":"Mock Session"}]"#;
        let rule = MockRule::json("**/api/ai/sessions", body).unwrap();
        let fulfill = fulfillment(&rule, "interception-2".to_string());

        let decoded = BASE64.decode(fulfill.body.unwrap()).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), body);
    }

    #[test]
    fn test_fulfillment_preserves_non_200_status() {
        let rule = MockRule::new("**/api/posts", 404, "application/json", "{}").unwrap();
        let fulfill = fulfillment(&rule, "interception-3".to_string());
        assert_eq!(fulfill.response_code, 404);
    }
}
