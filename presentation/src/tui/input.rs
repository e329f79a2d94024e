//! TUI InputSource: input requests via oneshot channels
//!
//! Instead of reading stdin, sends an [`InputRequest`] to the UI loop and
//! waits for the key handler to send back the player's decision.

use super::event::{InputPrompt, InputRequest, TuiEvent};
use async_trait::async_trait;
use kingdom_application::{InputError, InputSource};
use kingdom_domain::{GameEvent, Question};
use tokio::sync::{mpsc, oneshot};

pub struct TuiInputSource {
    event_tx: mpsc::UnboundedSender<TuiEvent>,
}

impl TuiInputSource {
    pub fn new(event_tx: mpsc::UnboundedSender<TuiEvent>) -> Self {
        Self { event_tx }
    }

    async fn request(&self, prompt: InputPrompt) -> Result<GameEvent, InputError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.event_tx
            .send(TuiEvent::InputRequested(InputRequest {
                prompt,
                response_tx,
            }))
            .map_err(|_| InputError::Closed)?;
        response_rx.await.map_err(|_| InputError::Closed)
    }
}

#[async_trait]
impl InputSource for TuiInputSource {
    async fn choose_difficulty(&self, player: &str, round: u32) -> Result<GameEvent, InputError> {
        self.request(InputPrompt::Difficulty {
            player: player.to_string(),
            round,
        })
        .await
    }

    async fn choose_answer(
        &self,
        player: &str,
        question: &Question,
    ) -> Result<GameEvent, InputError> {
        self.request(InputPrompt::Answer {
            player: player.to_string(),
            question: question.clone(),
        })
        .await
    }
}
