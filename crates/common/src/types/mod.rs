use serde::Serialize;

/// JSON error payload returned by API routes: `{"error": "..."}`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_single_field() {
        let body = ErrorBody::new("Failed to fetch pets");
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(json, r#"{"error":"Failed to fetch pets"}"#);
    }
}
