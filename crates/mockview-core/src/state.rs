//! Seeded client state: localStorage data simulating a logged-in user

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// User profile in the shape the target application persists it.
///
/// Field names follow the application's wire format (`_id`,
/// `verificationStatus`), not Rust conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(rename = "verificationStatus")]
    pub verification_status: String,
}

/// Key-value data written into the browser's localStorage before the first
/// scenario navigation, so the application believes a user is logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededState {
    /// Authentication token, stored under the `token` key
    pub token: String,
    /// User profile, stored JSON-encoded under the `user` key
    pub user: UserProfile,
}

impl SeededState {
    /// The (key, value) pairs to write into localStorage.
    ///
    /// The token is stored verbatim; the user profile is JSON-encoded
    /// because the application reads it back with `JSON.parse`.
    pub fn storage_pairs(&self) -> Result<Vec<(String, String)>> {
        Ok(vec![
            ("token".to_string(), self.token.clone()),
            ("user".to_string(), serde_json::to_string(&self.user)?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> SeededState {
        SeededState {
            token: "fake-token".to_string(),
            user: UserProfile {
                id: "u1".to_string(),
                name: "Test User".to_string(),
                role: "user".to_string(),
                verification_status: "approved".to_string(),
            },
        }
    }

    #[test]
    fn test_storage_pairs_keys_and_token() {
        let pairs = sample_state().storage_pairs().unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("token".to_string(), "fake-token".to_string()));
        assert_eq!(pairs[1].0, "user");
    }

    #[test]
    fn test_user_value_uses_wire_field_names() {
        let pairs = sample_state().storage_pairs().unwrap();
        let user: serde_json::Value = serde_json::from_str(&pairs[1].1).unwrap();

        assert_eq!(user["_id"], "u1");
        assert_eq!(user["name"], "Test User");
        assert_eq!(user["role"], "user");
        assert_eq!(user["verificationStatus"], "approved");
    }

    #[test]
    fn test_user_value_round_trips() {
        let state = sample_state();
        let pairs = state.storage_pairs().unwrap();
        let decoded: UserProfile = serde_json::from_str(&pairs[1].1).unwrap();
        assert_eq!(decoded, state.user);
    }
}
