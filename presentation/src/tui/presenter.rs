//! TUI GamePresenter: forwards game progress to the UI loop

use super::event::TuiEvent;
use kingdom_application::GamePresenter;
use kingdom_domain::{CancelTarget, Difficulty, Question, RoundLimit, Standings, TurnResult};
use tokio::sync::mpsc;

/// Translates presenter callbacks into [`TuiEvent`]s
///
/// Send failures mean the UI loop has already exited; they are ignored.
pub struct TuiPresenter {
    event_tx: mpsc::UnboundedSender<TuiEvent>,
}

impl TuiPresenter {
    pub fn new(event_tx: mpsc::UnboundedSender<TuiEvent>) -> Self {
        Self { event_tx }
    }

    fn emit(&self, event: TuiEvent) {
        let _ = self.event_tx.send(event);
    }
}

impl GamePresenter for TuiPresenter {
    fn on_game_started(&self, players: &[String], limit: RoundLimit) {
        self.emit(TuiEvent::GameStarted {
            players: players.to_vec(),
            limit,
        });
    }

    fn on_round_started(&self, round: u32, limit: RoundLimit) {
        self.emit(TuiEvent::RoundStarted { round, limit });
    }

    fn on_fetching_question(&self, player: &str, difficulty: Difficulty) {
        self.emit(TuiEvent::FetchingQuestion {
            player: player.to_string(),
            difficulty,
        });
    }

    fn on_question_ready(&self, player: &str, question: &Question) {
        self.emit(TuiEvent::QuestionReady {
            player: player.to_string(),
            question: question.clone(),
        });
    }

    fn on_turn_result(&self, result: &TurnResult) {
        self.emit(TuiEvent::TurnScored(result.clone()));
    }

    fn on_final_ranking(&self, standings: &Standings) {
        self.emit(TuiEvent::FinalRanking(standings.clone()));
    }

    fn on_game_aborted(&self, target: CancelTarget) {
        self.emit(TuiEvent::GameAborted(target));
    }
}
