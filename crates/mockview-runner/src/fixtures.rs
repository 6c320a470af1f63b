//! Canned backend responses, seeded user state, and built-in scenarios
//!
//! The fixture bodies mirror the target application's real API shapes;
//! field names like `_id` and `verificationStatus` are its wire format.

use mockview_core::{MockRegistry, MockRule, Result, Scenario, SeededState, UserProfile};
use std::path::Path;
use std::time::Duration;

/// Token value the application treats as a valid session
pub const TOKEN: &str = "fake-token";

/// Timeout for the first expected content of a scenario
const FIRST_CONTENT_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for content loaded by an in-page interaction
const SECONDARY_CONTENT_TIMEOUT: Duration = Duration::from_secs(5);

/// The logged-in user the scenarios impersonate
pub fn seed_state() -> SeededState {
    SeededState {
        token: TOKEN.to_string(),
        user: UserProfile {
            id: "u1".to_string(),
            name: "Test User".to_string(),
            role: "user".to_string(),
            verification_status: "approved".to_string(),
        },
    }
}

/// `GET /api/ai/sessions`: one saved AI chat session
pub fn ai_sessions_body() -> String {
    serde_json::json!([{
        "_id": "1",
        "title": "Mock Session",
        "messages": [
            {
                "role": "user",
                "content": "Hello",
                "timestamp": "2023-01-01T12:00:00Z"
            },
            {
                "role": "model",
                "content": "Hi there!",
                "timestamp": "2023-01-01T12:01:00Z"
            }
        ],
        "updatedAt": "2023-01-01T12:01:00Z"
    }])
    .to_string()
}

/// `GET /api/auth/me`: the seeded user, in case the app re-checks auth
pub fn auth_me_body() -> String {
    serde_json::json!({
        "user": {
            "_id": "u1",
            "name": "Test User",
            "role": "user",
            "verificationStatus": "approved"
        }
    })
    .to_string()
}

/// `GET /api/messages/conversations`: one unread conversation
pub fn conversations_body() -> String {
    serde_json::json!([{
        "id": "2",
        "name": "Dr. Smith",
        "lastMessage": "Hello",
        "timestamp": "2023-01-01T12:00:00Z",
        "unread": 1
    }])
    .to_string()
}

/// `GET /api/messages/{id}`: the messages of one conversation
pub fn messages_body(conversation_id: &str) -> String {
    serde_json::json!([{
        "_id": "m1",
        "sender": conversation_id,
        "recipient": "me",
        "text": "Hello user",
        "createdAt": "2023-01-01T12:00:00Z"
    }])
    .to_string()
}

/// All mock rules for one verification run.
///
/// Registered together before the first dependent navigation; patterns are
/// non-overlapping so lookup order never matters.
pub fn mock_registry() -> Result<MockRegistry> {
    let mut registry = MockRegistry::new();
    registry.register(MockRule::json("**/api/ai/sessions", ai_sessions_body())?);
    registry.register(MockRule::json("**/api/auth/me", auth_me_body())?);
    registry.register(MockRule::json(
        "**/api/messages/conversations",
        conversations_body(),
    )?);
    registry.register(MockRule::json("**/api/messages/2", messages_body("2"))?);
    Ok(registry)
}

/// AI chat view: the saved session title must render
pub fn chat_scenario(output_dir: &Path) -> Scenario {
    Scenario::new("ai-chat", "/ai-chat")
        .wait_for_text("Mock Session", FIRST_CONTENT_TIMEOUT)
        .screenshots(
            output_dir.join("ai_chat.png"),
            output_dir.join("error_ai_chat.png"),
        )
}

/// Direct messages view: the conversation list must render, and opening
/// the conversation must load its messages.
///
/// Only this scenario has a click step; the chat scenario is intentionally
/// left as a single wait.
pub fn direct_messages_scenario(output_dir: &Path) -> Scenario {
    Scenario::new("direct-messages", "/direct-messages")
        .wait_for_text("Dr. Smith", FIRST_CONTENT_TIMEOUT)
        .click_text("Dr. Smith")
        .wait_for_text("Hello user", SECONDARY_CONTENT_TIMEOUT)
        .screenshots(
            output_dir.join("direct_messages.png"),
            output_dir.join("error_dm.png"),
        )
}

/// The two built-in scenarios, in execution order
pub fn builtin_scenarios(output_dir: &Path) -> Vec<Scenario> {
    vec![chat_scenario(output_dir), direct_messages_scenario(output_dir)]
}
