//! HTTP client for the Open Trivia Database

use super::bank::QuestionBank;
use super::error::{Result, TriviaError};
use super::payload::{RawQuestion, parse_response};
use async_trait::async_trait;
use kingdom_application::{QuestionSource, QuestionSourceError};
use kingdom_domain::{Difficulty, Question};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("culture-kingdom/", env!("CARGO_PKG_VERSION"));

/// Connection and batching settings for [`OpenTdbQuestionSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaSettings {
    pub api_url: String,
    /// Questions per request (the API allows 1-50)
    pub amount: u8,
    pub category: Option<u32>,
    pub request_timeout: Duration,
    pub retry_delay: Duration,
    pub bank_capacity: usize,
}

impl Default for TriviaSettings {
    fn default() -> Self {
        Self {
            api_url: "https://opentdb.com/api.php".to_string(),
            amount: 10,
            category: None,
            request_timeout: Duration::from_secs(10),
            retry_delay: Duration::from_millis(1500),
            bank_capacity: 30,
        }
    }
}

/// Parameters of one batch request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BatchQuery {
    amount: u8,
    /// `None` asks for any difficulty and lets the bank sort the batch
    difficulty: Option<Difficulty>,
}

impl BatchQuery {
    fn new(amount: u8, difficulty: Difficulty) -> Self {
        Self {
            amount: amount.max(1),
            difficulty: Some(difficulty),
        }
    }

    /// Next query to try after the API answered "No Results"
    ///
    /// Halves the batch down to one question, then drops the difficulty
    /// filter and starts again from the configured size.
    fn narrowed(self, full_amount: u8) -> Option<Self> {
        if self.amount > 1 {
            Some(Self {
                amount: (self.amount / 2).max(1),
                ..self
            })
        } else if self.difficulty.is_some() {
            Some(Self {
                amount: full_amount.max(1),
                difficulty: None,
            })
        } else {
            None
        }
    }
}

/// [`QuestionSource`] backed by an OpenTDB-compatible API
///
/// Transient failures (network errors, rate limiting, 5xx responses,
/// unreadable bodies, batches without a usable question) are logged and
/// retried after `retry_delay` until a question of the requested difficulty
/// is available. A "No Results" answer means the category holds fewer
/// questions than asked for, so the request is narrowed instead. Only
/// permanent failures, or "No Results" for the narrowest request, are
/// returned.
pub struct OpenTdbQuestionSource {
    client: reqwest::Client,
    settings: TriviaSettings,
    bank: QuestionBank,
}

impl OpenTdbQuestionSource {
    pub fn new(settings: TriviaSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            bank: QuestionBank::new(settings.bank_capacity),
            settings,
        })
    }

    pub fn settings(&self) -> &TriviaSettings {
        &self.settings
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    fn query_params(&self, query: BatchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("amount", query.amount.to_string()),
            ("type", "multiple".to_string()),
        ];
        if let Some(difficulty) = query.difficulty {
            params.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(category) = self.settings.category {
            params.push(("category", category.to_string()));
        }
        params
    }

    async fn fetch_batch(&self, query: BatchQuery) -> Result<Vec<RawQuestion>> {
        match query.difficulty {
            Some(difficulty) => debug!("Requesting {} {} question(s)", query.amount, difficulty),
            None => debug!("Requesting {} question(s) of any difficulty", query.amount),
        }

        let response = self
            .client
            .get(&self.settings.api_url)
            .query(&self.query_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriviaError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body)
    }

    /// Convert and bank a batch; returns how many questions were kept
    fn stock(&self, batch: Vec<RawQuestion>) -> usize {
        let mut rng = rand::thread_rng();
        let questions: Vec<Question> = batch
            .into_iter()
            .filter_map(|raw| match raw.into_question(&mut rng) {
                Ok(question) => Some(question),
                Err(e) => {
                    debug!("Skipping malformed question: {}", e);
                    None
                }
            })
            .collect();
        self.bank.stock(questions)
    }
}

#[async_trait]
impl QuestionSource for OpenTdbQuestionSource {
    async fn fetch(
        &self,
        difficulty: Difficulty,
    ) -> std::result::Result<Question, QuestionSourceError> {
        let mut attempt = 0u32;
        let mut query = BatchQuery::new(self.settings.amount, difficulty);
        loop {
            if let Some(question) = self.bank.take(difficulty) {
                return Ok(question);
            }

            attempt += 1;
            match self.fetch_batch(query).await {
                Ok(batch) => {
                    let kept = self.stock(batch);
                    debug!("Banked {} question(s) on attempt {}", kept, attempt);
                    if self.bank.len(difficulty) > 0 {
                        continue;
                    }
                    warn!("No {} question in batch, retrying", difficulty);
                }
                Err(e) if e.is_no_results() => match query.narrowed(self.settings.amount) {
                    Some(next) => {
                        debug!("No results for {:?}, trying {:?}", query, next);
                        query = next;
                        continue;
                    }
                    None => return Err(e.into()),
                },
                Err(e) if e.is_transient() => {
                    warn!("Trivia fetch attempt {} failed: {}", attempt, e);
                }
                Err(e) => return Err(e.into()),
            }

            tokio::time::sleep(self.settings.retry_delay).await;
        }
    }
}
