//! TUI event types
//!
//! Everything the game task tells the UI loop travels over one channel,
//! so presenter notifications and input requests are applied in the order
//! the game produced them.

use kingdom_application::GameOutcome;
use kingdom_domain::{
    CancelTarget, Difficulty, GameEvent, Question, RoundLimit, Standings, TurnResult,
};
use tokio::sync::oneshot;

/// What the game is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPrompt {
    Difficulty { player: String, round: u32 },
    Answer { player: String, question: Question },
}

/// A pending input request; the UI answers it through `response_tx`
pub struct InputRequest {
    pub prompt: InputPrompt,
    pub response_tx: oneshot::Sender<GameEvent>,
}

/// Events emitted by the game task for the UI loop
pub enum TuiEvent {
    GameStarted {
        players: Vec<String>,
        limit: RoundLimit,
    },
    RoundStarted {
        round: u32,
        limit: RoundLimit,
    },
    FetchingQuestion {
        player: String,
        difficulty: Difficulty,
    },
    QuestionReady {
        player: String,
        question: Question,
    },
    TurnScored(TurnResult),
    FinalRanking(Standings),
    GameAborted(CancelTarget),
    InputRequested(InputRequest),
    /// The game task returned; errors are already rendered to text
    GameFinished(Result<GameOutcome, String>),
}
