//! Game presentation port
//!
//! Defines the callbacks a front end receives while a game is played.

use kingdom_domain::{CancelTarget, Difficulty, Question, RoundLimit, Standings, TurnResult};

/// Sink for game progress
///
/// Implementations live in the presentation layer (console output, TUI
/// state updates). The game never depends on how these are rendered.
pub trait GamePresenter: Send + Sync {
    /// Called once before the first round
    fn on_game_started(&self, _players: &[String], _limit: RoundLimit) {}

    /// Called when a round begins
    fn on_round_started(&self, round: u32, limit: RoundLimit);

    /// Called while a question is being retrieved
    fn on_fetching_question(&self, _player: &str, _difficulty: Difficulty) {}

    /// Called when the question for the current turn has arrived
    fn on_question_ready(&self, _player: &str, _question: &Question) {}

    /// Called when retrieving a question failed or timed out
    ///
    /// The game ends with an error right after this call, so any "fetching"
    /// indicator should be cleared here.
    fn on_fetch_failed(&self, _player: &str, _reason: &str) {}

    /// Called after every answered turn
    fn on_turn_result(&self, result: &TurnResult);

    /// Called once when all rounds are complete
    fn on_final_ranking(&self, standings: &Standings);

    /// Called when the game was cancelled before completion
    fn on_game_aborted(&self, _target: CancelTarget) {}
}

/// No-op presenter for when nothing needs to be displayed
pub struct NoPresenter;

impl GamePresenter for NoPresenter {
    fn on_round_started(&self, _round: u32, _limit: RoundLimit) {}
    fn on_turn_result(&self, _result: &TurnResult) {}
    fn on_final_ranking(&self, _standings: &Standings) {}
}
