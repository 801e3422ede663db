//! User and organization account models

use serde::{Deserialize, Serialize};

/// User or organization returned by `GET /users/{name}` or `GET /orgs/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Numeric account ID
    pub id: u64,

    /// Login name
    pub login: String,

    /// Account type as reported by GitHub ("User" or "Organization")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

/// How a listing target was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Organization,
    User,
}

impl AccountKind {
    /// Human-readable label used in progress messages
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Organization => "organization",
            AccountKind::User => "user",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserializes_type_field() {
        let account: Account =
            serde_json::from_str(r#"{"id": 1, "login": "octocat", "type": "User"}"#).unwrap();

        assert_eq!(account.login, "octocat");
        assert_eq!(account.account_type.as_deref(), Some("User"));
    }

    #[test]
    fn test_account_type_is_optional() {
        let account: Account = serde_json::from_str(r#"{"id": 9, "login": "github"}"#).unwrap();
        assert!(account.account_type.is_none());
    }
}
