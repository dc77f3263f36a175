//! Credentials for the GitHub REST API.

use std::fmt;

/// Supplies the bearer token attached to every API request.
///
/// The token is read once, when [`crate::GithubClient`] is constructed, and
/// installed as a default header on the underlying HTTP client.
pub trait TokenProvider: Send + Sync {
    /// Returns the bearer token.
    fn bearer_token(&self) -> &str;
}

/// A token fixed for the lifetime of the process, e.g. read from the
/// environment at startup.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wraps `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn bearer_token(&self) -> &str {
        &self.0
    }
}

// The token must never reach logs.
impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_token() {
        let token = StaticToken::new("ghp_secret");
        assert_eq!(token.bearer_token(), "ghp_secret");
        assert!(!format!("{token:?}").contains("ghp_secret"));
    }
}
