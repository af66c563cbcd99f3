use thiserror::Error;

/// The only failure kind of the catalog: a remote fetch did not produce a
/// usable payload. Transport errors, non-2xx statuses and malformed JSON
/// differ only in their message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::new(format!("Request failed: {}", err))
    }

    pub fn status(code: u16) -> Self {
        Self::new(format!("HTTP error: {}", code))
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to parse response: {}", err))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FetchError::status(404).to_string(), "HTTP error: 404");
        assert_eq!(
            FetchError::transport("connection reset").message(),
            "Request failed: connection reset"
        );
        assert_eq!(
            FetchError::decode("missing field `results`").to_string(),
            "Failed to parse response: missing field `results`"
        );
    }
}
