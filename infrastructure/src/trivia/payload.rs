//! Open Trivia Database wire format

use super::error::{Result, TriviaError};
use super::sanitize::decode_entities;
use kingdom_domain::{Difficulty, DomainError, Question};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// Top-level API response
#[derive(Debug, Clone, Deserialize)]
pub struct TriviaResponse {
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// One question as delivered by the API, still entity-encoded
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuestion {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl RawQuestion {
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }

    /// Decode every field and shuffle the correct answer in with the
    /// incorrect ones
    pub fn into_question<R: Rng + ?Sized>(
        self,
        rng: &mut R,
    ) -> std::result::Result<Question, DomainError> {
        let difficulty = self.difficulty().ok_or_else(|| {
            DomainError::invalid_input(format!("unknown difficulty '{}'", self.difficulty))
        })?;

        let correct_answer = decode_entities(&self.correct_answer);
        let mut choices: Vec<String> = self
            .incorrect_answers
            .iter()
            .map(|a| decode_entities(a))
            .collect();
        choices.push(correct_answer.clone());
        choices.shuffle(rng);

        Question::new(
            decode_entities(&self.question),
            choices,
            correct_answer,
            decode_entities(&self.category),
            difficulty,
        )
    }
}

fn response_code_meaning(code: u8) -> &'static str {
    match code {
        0 => "Success",
        1 => "No Results",
        2 => "Invalid Parameter",
        3 => "Token Not Found",
        4 => "Token Empty",
        5 => "Rate Limit",
        _ => "Unknown",
    }
}

/// Decode a response body and check its response code
pub fn parse_response(body: &str) -> Result<Vec<RawQuestion>> {
    let response: TriviaResponse =
        serde_json::from_str(body).map_err(|e| TriviaError::Decode(e.to_string()))?;

    if response.response_code != 0 {
        return Err(TriviaError::ResponseCode {
            code: response.response_code,
            meaning: response_code_meaning(response.response_code),
        });
    }

    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BODY: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "multiple",
                "difficulty": "medium",
                "category": "Entertainment: Film",
                "question": "Who directed &quot;Jaws&quot;?",
                "correct_answer": "Steven Spielberg",
                "incorrect_answers": ["George Lucas", "James Cameron", "Ridley Scott"]
            },
            {
                "type": "boolean",
                "difficulty": "easy",
                "category": "General Knowledge",
                "question": "The sky is blue.",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            }
        ]
    }"#;

    #[test]
    fn test_parse_response_success() {
        let results = parse_response(BODY).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].kind, "multiple");
        assert_eq!(results[0].difficulty(), Some(Difficulty::Medium));
    }

    #[test]
    fn test_parse_response_error_code() {
        let err = parse_response(r#"{"response_code": 5, "results": []}"#).unwrap_err();
        assert!(matches!(err, TriviaError::ResponseCode { code: 5, .. }));
        assert!(err.is_transient());
    }

    #[test]
    fn test_parse_response_missing_results_with_error_code() {
        let err = parse_response(r#"{"response_code": 2}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Trivia API response code 2: Invalid Parameter"
        );
    }

    #[test]
    fn test_parse_response_garbage() {
        assert!(matches!(
            parse_response("<html>busy</html>"),
            Err(TriviaError::Decode(_))
        ));
    }

    #[test]
    fn test_into_question_decodes_and_keeps_all_choices() {
        let raw = parse_response(BODY).unwrap().remove(0);
        let mut rng = StdRng::seed_from_u64(7);
        let question = raw.into_question(&mut rng).unwrap();

        assert_eq!(question.text(), "Who directed \"Jaws\"?");
        assert_eq!(question.difficulty(), Difficulty::Medium);
        assert_eq!(question.correct_answer(), "Steven Spielberg");

        let mut choices = question.choices().to_vec();
        choices.sort();
        assert_eq!(
            choices,
            vec![
                "George Lucas",
                "James Cameron",
                "Ridley Scott",
                "Steven Spielberg"
            ]
        );
    }

    #[test]
    fn test_into_question_rejects_unknown_difficulty() {
        let mut raw = parse_response(BODY).unwrap().remove(1);
        raw.difficulty = "legendary".into();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(raw.into_question(&mut rng).is_err());
    }
}
