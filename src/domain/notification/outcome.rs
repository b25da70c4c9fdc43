//! DeliveryOutcome - classification of a single delivery attempt.

use std::fmt;

/// Result of one POST to the registration backend.
///
/// Used for logging only. Outcomes are never retried and never reported
/// back to the event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The backend answered with a 2xx status.
    Success { status: u16 },

    /// The backend answered with any non-2xx status.
    Rejected { status: u16, body: String },

    /// No HTTP response was received (refused, timed out, DNS, TLS, ...).
    TransportFailure { cause: String },
}

impl DeliveryOutcome {
    /// Classifies an HTTP status code and response body.
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        if (200..300).contains(&status) {
            DeliveryOutcome::Success { status }
        } else {
            DeliveryOutcome::Rejected {
                status,
                body: body.into(),
            }
        }
    }

    pub fn transport_failure(cause: impl fmt::Display) -> Self {
        DeliveryOutcome::TransportFailure {
            cause: cause.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Success { .. })
    }

    /// Status code, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            DeliveryOutcome::Success { status } | DeliveryOutcome::Rejected { status, .. } => {
                Some(*status)
            }
            DeliveryOutcome::TransportFailure { .. } => None,
        }
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryOutcome::Success { status } => write!(f, "delivered ({})", status),
            DeliveryOutcome::Rejected { status, .. } => write!(f, "rejected ({})", status),
            DeliveryOutcome::TransportFailure { cause } => write!(f, "transport failure: {}", cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_2xx_as_success() {
        assert_eq!(
            DeliveryOutcome::from_response(200, ""),
            DeliveryOutcome::Success { status: 200 }
        );
        assert!(DeliveryOutcome::from_response(201, "").is_success());
        assert!(DeliveryOutcome::from_response(299, "").is_success());
    }

    #[test]
    fn classifies_everything_else_as_rejected() {
        let outcome = DeliveryOutcome::from_response(400, "bad payload");
        assert_eq!(
            outcome,
            DeliveryOutcome::Rejected {
                status: 400,
                body: "bad payload".to_string()
            }
        );
        assert!(!DeliveryOutcome::from_response(199, "").is_success());
        assert!(!DeliveryOutcome::from_response(300, "").is_success());
        assert!(!DeliveryOutcome::from_response(503, "").is_success());
    }

    #[test]
    fn transport_failure_has_no_status() {
        let outcome = DeliveryOutcome::transport_failure("connection refused");
        assert_eq!(outcome.status(), None);
        assert_eq!(outcome.to_string(), "transport failure: connection refused");
    }
}
