use serde::{Deserialize, Serialize};

/// Fallback text shown when the backend answers with nothing usable
pub const NO_RESPONSE: &str = "No response";

/// Question sent to the tutor backend (`POST /ask`)
///
/// All three fields are free text; empty strings are valid and sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub level: String,
    pub subject: String,
    pub question: String,
}

impl AskRequest {
    #[must_use]
    pub fn new(
        level: impl Into<String>,
        subject: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            subject: subject.into(),
            question: question.into(),
        }
    }
}

/// Answer returned by the tutor backend
///
/// The backend contract is loose: `answer` may be missing, empty, or the
/// body may carry extra fields. Anything unexpected is tolerated and
/// resolved to [`NO_RESPONSE`] by [`AskResponse::answer_or_default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl AskResponse {
    /// The answer text, or [`NO_RESPONSE`] when missing or empty
    #[must_use]
    pub fn answer_or_default(&self) -> &str {
        match self.answer.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_RESPONSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_serializes_to_flat_json() {
        let request = AskRequest::new("Class 10", "Math", "What is a prime?");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "level": "Class 10",
                "subject": "Math",
                "question": "What is a prime?"
            })
        );
    }

    #[test]
    fn ask_request_allows_empty_fields() {
        let request = AskRequest::default();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"level":"","subject":"","question":""}"#);
    }

    #[test]
    fn answer_is_returned_when_present() {
        let response: AskResponse = serde_json::from_str(r#"{"answer":"42"}"#).unwrap();
        assert_eq!(response.answer_or_default(), "42");
    }

    #[test]
    fn missing_answer_falls_back() {
        let response: AskResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.answer_or_default(), NO_RESPONSE);
    }

    #[test]
    fn empty_answer_falls_back() {
        let response: AskResponse = serde_json::from_str(r#"{"answer":""}"#).unwrap();
        assert_eq!(response.answer_or_default(), NO_RESPONSE);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let response: AskResponse =
            serde_json::from_str(r#"{"status":"ok","answer":"fine"}"#).unwrap();
        assert_eq!(response.answer_or_default(), "fine");
    }
}
