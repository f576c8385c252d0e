//! Tri-state results handed to presentation layers

use crate::core::error::TeahouseError;
use serde::Serialize;

/// Success flag, human-readable message and optional payload.
///
/// Front-ends that do not want to match on [`TeahouseError`] can convert
/// any service result with [`Outcome::from_result`].
///
/// ```rust,ignore
/// let outcome = Outcome::from_result(auth.register("Wang", "13512345678").await, "registered");
/// if !outcome.success {
///     show_error(&outcome.message);
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    pub message: String,
    /// Error code for programmatic handling, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// Successful outcome carrying a payload
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: None,
            data: Some(data),
        }
    }

    /// Failed outcome built from an error
    pub fn failed(error: &TeahouseError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            code: Some(error.error_code()),
            data: None,
        }
    }

    /// Convert a service result, using `message` on success
    pub fn from_result(result: Result<T, TeahouseError>, message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self::ok(data, message),
            Err(error) => Self::failed(&error),
        }
    }

    /// Take the payload
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RuleError;
    use uuid::Uuid;

    #[test]
    fn test_success_outcome() {
        let outcome = Outcome::from_result(Ok::<_, TeahouseError>(7), "done");
        assert!(outcome.success);
        assert_eq!(outcome.message, "done");
        assert_eq!(outcome.code, None);
        assert_eq!(outcome.into_data(), Some(7));
    }

    #[test]
    fn test_failure_outcome_carries_code() {
        let err: TeahouseError = RuleError::EmptyCart {
            user_id: Uuid::nil(),
        }
        .into();
        let outcome: Outcome<()> = Outcome::from_result(Err(err), "unused");

        assert!(!outcome.success);
        assert_eq!(outcome.code, Some("EMPTY_CART"));
        assert!(outcome.message.contains("empty"));
        assert!(outcome.data.is_none());

        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("data").is_none());
    }
}
