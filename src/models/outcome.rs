use serde::{Deserialize, Serialize};

/// Raw response of POST /submit. The three server revisions disagree on
/// the exact shape: some send {"message"}, some {"error"}, some a
/// {"success": bool, "message"} pair. All fields are therefore optional.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Tagged outcome every caller branches on instead of probing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { message: String },
    Rejected { reason: String },
}

impl SubmitOutcome {
    /// Collapses the drifting response shape into one tag.
    ///
    /// Rules, in order: an explicit `success: false` rejects, an `error`
    /// field rejects, an explicit `success: true` accepts, a `message`
    /// accepts. A response with none of the recognized fields is treated
    /// as a failure for display purposes.
    pub fn classify(response: SubmitResponse) -> Self {
        if response.success == Some(false) {
            let reason = response
                .message
                .or(response.error)
                .unwrap_or_else(|| "Request was rejected by the server".to_string());
            return SubmitOutcome::Rejected { reason };
        }

        if let Some(error) = response.error {
            return SubmitOutcome::Rejected { reason: error };
        }

        if response.success == Some(true) {
            let message = response
                .message
                .unwrap_or_else(|| "Request completed successfully".to_string());
            return SubmitOutcome::Accepted { message };
        }

        match response.message {
            Some(message) => SubmitOutcome::Accepted { message },
            None => SubmitOutcome::Rejected {
                reason: "Server returned an unexpected response".to_string(),
            },
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(message: Option<&str>, error: Option<&str>, success: Option<bool>) -> SubmitResponse {
        SubmitResponse {
            message: message.map(str::to_string),
            error: error.map(str::to_string),
            success,
        }
    }

    #[test]
    fn test_message_only_is_accepted() {
        let outcome = SubmitOutcome::classify(response(Some("Ride created successfully"), None, None));
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                message: "Ride created successfully".to_string()
            }
        );
    }

    #[test]
    fn test_explicit_success_flag_is_accepted() {
        let outcome = SubmitOutcome::classify(response(Some("Ride booked successfully!"), None, Some(true)));
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_success_true_without_message_is_accepted() {
        let outcome = SubmitOutcome::classify(response(None, None, Some(true)));
        assert!(
            outcome.is_accepted(),
            "explicit success flag must indicate success, got {:?}",
            outcome
        );
    }

    #[test]
    fn test_success_false_rejects_even_with_message() {
        let outcome =
            SubmitOutcome::classify(response(Some("Please correct the following errors"), None, Some(false)));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                reason: "Please correct the following errors".to_string()
            }
        );
    }

    #[test]
    fn test_error_field_rejects() {
        let outcome = SubmitOutcome::classify(response(None, Some("Ride not found"), None));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                reason: "Ride not found".to_string()
            }
        );
    }

    #[test]
    fn test_empty_object_rejects() {
        let outcome = SubmitOutcome::classify(SubmitResponse::default());
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn test_unknown_fields_are_ignored_on_parse() {
        let parsed: SubmitResponse =
            serde_json::from_str(r#"{"message": "ok", "booking_id": 7}"#).unwrap();
        assert!(SubmitOutcome::classify(parsed).is_accepted());
    }
}
