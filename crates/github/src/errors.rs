//! GitHub adapter errors.
//!
//! [`GithubError`] covers client construction. Failures while fetching a page
//! are reported as [`board::SourceError`], produced by [`classify_failure`]
//! for non-success responses.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

use board::SourceError;

/// Errors raised while building a [`crate::GithubClient`].
#[derive(Debug, Error)]
pub enum GithubError {
    /// The token contains characters that cannot appear in an HTTP header.
    #[error("API token is not a valid HTTP header value")]
    InvalidToken,

    /// The API base URL could not be used.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL, as given.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be initialised (e.g. TLS backend failure).
    #[error("failed to build HTTP client: {message}")]
    Client {
        /// Description of the failure.
        message: String,
    },
}

/// Maps a non-success response to a [`SourceError`].
///
/// GitHub signals an exhausted rate limit with `403` or `429` and
/// `x-ratelimit-remaining: 0`; a bare `429` is treated the same way.
pub fn classify_failure(status: StatusCode, headers: &HeaderMap, body: &str) -> SourceError {
    let message = api_message(status, body);

    let limit_exhausted = headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|remaining| remaining.trim() == "0");

    match status {
        StatusCode::UNAUTHORIZED => SourceError::Authentication { message },
        StatusCode::TOO_MANY_REQUESTS => SourceError::RateLimited { message },
        StatusCode::FORBIDDEN if limit_exhausted => SourceError::RateLimited { message },
        _ => SourceError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// GitHub errors are JSON objects with a `message` field; fall back to the raw
/// body, then to the status reason.
fn api_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn unauthorized_is_an_authentication_failure() {
        let err = classify_failure(
            StatusCode::UNAUTHORIZED,
            &HeaderMap::new(),
            r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com/rest"}"#,
        );
        assert_eq!(
            err,
            SourceError::Authentication {
                message: "Bad credentials".to_string()
            }
        );
    }

    #[test]
    fn forbidden_with_exhausted_quota_is_rate_limited() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            &headers,
            r#"{"message":"API rate limit exceeded for user ID 1."}"#,
        );
        assert!(matches!(err, SourceError::RateLimited { .. }));
    }

    #[test]
    fn forbidden_with_quota_left_is_an_api_error() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4999"));
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            &headers,
            r#"{"message":"Resource not accessible by integration"}"#,
        );
        assert_eq!(
            err,
            SourceError::Api {
                status: 403,
                message: "Resource not accessible by integration".to_string()
            }
        );
    }

    #[test]
    fn non_json_bodies_fall_back_to_text_then_reason() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, &HeaderMap::new(), "upstream down\n");
        assert_eq!(
            err,
            SourceError::Api {
                status: 502,
                message: "upstream down".to_string()
            }
        );

        let err = classify_failure(StatusCode::NOT_FOUND, &HeaderMap::new(), "");
        assert_eq!(
            err,
            SourceError::Api {
                status: 404,
                message: "Not Found".to_string()
            }
        );
    }
}
