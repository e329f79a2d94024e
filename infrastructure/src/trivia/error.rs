//! Error types for the trivia adapter

use kingdom_application::QuestionSourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Trivia API returned HTTP {0}")]
    Status(u16),

    #[error("Could not decode trivia payload: {0}")]
    Decode(String),

    #[error("Trivia API response code {code}: {meaning}")]
    ResponseCode { code: u8, meaning: &'static str },
}

impl TriviaError {
    /// The API has fewer matching questions than requested
    pub fn is_no_results(&self) -> bool {
        matches!(self, TriviaError::ResponseCode { code: 1, .. })
    }

    /// Whether retrying the same request later may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            TriviaError::Http(e) => !e.is_builder(),
            TriviaError::Status(status) => matches!(status, 408 | 429 | 500..=599),
            TriviaError::Decode(_) => true,
            TriviaError::ResponseCode { code, .. } => matches!(code, 3..=5),
        }
    }
}

impl From<TriviaError> for QuestionSourceError {
    fn from(error: TriviaError) -> Self {
        match error {
            TriviaError::ResponseCode { .. } => {
                QuestionSourceError::InvalidRequest(error.to_string())
            }
            TriviaError::Decode(_) => QuestionSourceError::InvalidPayload(error.to_string()),
            TriviaError::Http(_) | TriviaError::Status(_) => {
                QuestionSourceError::Unavailable(error.to_string())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TriviaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(TriviaError::Status(503).is_transient());
        assert!(TriviaError::Status(429).is_transient());
        assert!(!TriviaError::Status(404).is_transient());
        assert!(TriviaError::Decode("eof".into()).is_transient());
        assert!(
            TriviaError::ResponseCode {
                code: 5,
                meaning: "Rate Limit"
            }
            .is_transient()
        );
        assert!(
            !TriviaError::ResponseCode {
                code: 2,
                meaning: "Invalid Parameter"
            }
            .is_transient()
        );
    }

    #[test]
    fn test_no_results_detection() {
        let no_results = TriviaError::ResponseCode {
            code: 1,
            meaning: "No Results",
        };
        assert!(no_results.is_no_results());
        assert!(!no_results.is_transient());
        assert!(!TriviaError::Status(404).is_no_results());
    }

    #[test]
    fn test_into_question_source_error() {
        let error: QuestionSourceError = TriviaError::ResponseCode {
            code: 1,
            meaning: "No Results",
        }
        .into();
        assert!(matches!(error, QuestionSourceError::InvalidRequest(_)));

        let error: QuestionSourceError = TriviaError::Status(404).into();
        assert_eq!(
            error,
            QuestionSourceError::Unavailable("Trivia API returned HTTP 404".into())
        );
    }
}
