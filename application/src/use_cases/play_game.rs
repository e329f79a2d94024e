//! Play Game use case
//!
//! Drives one game session: asks players for difficulties and answers,
//! fetches questions, and feeds everything through the
//! [`RoundController`] state machine until the game completes or is
//! cancelled.

use crate::config::SessionConfig;
use crate::ports::game_recorder::{GameRecord, GameRecorder, NoGameRecorder};
use crate::ports::input_source::{InputError, InputSource};
use crate::ports::presenter::GamePresenter;
use crate::ports::question_source::{QuestionSource, QuestionSourceError};
use kingdom_domain::{
    CancelTarget, Difficulty, DomainError, GameEvent, Phase, Question, RoundAdvance,
    RoundController, RoundLimit, Standings, Transition,
};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that end a game session abnormally
#[derive(Error, Debug)]
pub enum PlayGameError {
    #[error("Game error: {0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    QuestionSource(#[from] QuestionSourceError),

    #[error("No question arrived within {0:?}")]
    QuestionTimeout(Duration),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Input for the PlayGame use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayGameInput {
    pub players: Vec<String>,
    pub rounds: RoundLimit,
}

impl PlayGameInput {
    pub fn new(players: Vec<String>, rounds: RoundLimit) -> Self {
        Self { players, rounds }
    }

    /// One player, rounds until cancelled
    pub fn unlimited_solo(player: impl Into<String>) -> Self {
        Self {
            players: vec![player.into()],
            rounds: RoundLimit::Unlimited,
        }
    }
}

/// How a game session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Completed(Standings),
    Aborted(CancelTarget),
}

impl GameOutcome {
    /// Whether the player asked to leave the program
    pub fn exits_process(&self) -> bool {
        matches!(self, GameOutcome::Aborted(target) if target.exits_process())
    }
}

/// Use case for playing one game
pub struct PlayGameUseCase<Q: QuestionSource + 'static> {
    source: Arc<Q>,
    config: SessionConfig,
    recorder: Arc<dyn GameRecorder>,
    cancellation: CancellationToken,
}

impl<Q: QuestionSource + 'static> PlayGameUseCase<Q> {
    /// Create a use case with no timeout, no recorder and a fresh token
    pub fn new(source: Arc<Q>) -> Self {
        Self {
            source,
            config: SessionConfig::default(),
            recorder: Arc::new(NoGameRecorder),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Write a transcript of every game to `recorder`
    pub fn with_recorder(mut self, recorder: Arc<dyn GameRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Treat cancellation of `token` as a quit request
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Play one game to completion or cancellation
    ///
    /// Input errors, question source failures and fetch timeouts end the
    /// game with an error; a cancel event or the cancellation token ends it
    /// with [`GameOutcome::Aborted`].
    pub async fn execute(
        &self,
        input: PlayGameInput,
        inputs: &dyn InputSource,
        presenter: &dyn GamePresenter,
    ) -> Result<GameOutcome, PlayGameError> {
        let mut controller = RoundController::new(&input.players, input.rounds)?;
        let players: Vec<String> = controller
            .scoreboard()
            .players()
            .map(str::to_string)
            .collect();

        info!(
            "Starting game with {} player(s), {}",
            players.len(),
            input.rounds
        );
        presenter.on_game_started(&players, input.rounds);
        self.recorder.record(GameRecord::new(
            "game_started",
            json!({ "players": players, "rounds": input.rounds }),
        ));

        loop {
            let round = match controller.begin_round()? {
                RoundAdvance::Started { round } => round,
                RoundAdvance::GameComplete => break,
            };

            debug!("Round {} started", round);
            presenter.on_round_started(round, input.rounds);
            self.recorder
                .record(GameRecord::new("round_started", json!({ "round": round })));

            while controller.phase() == Phase::SelectingDifficulty {
                if let Some(target) = self.play_turn(&mut controller, round, inputs, presenter).await? {
                    info!("Game cancelled ({}) in round {}", target, round);
                    presenter.on_game_aborted(target);
                    self.recorder.record(GameRecord::new(
                        "game_aborted",
                        json!({
                            "target": target,
                            "completed_rounds": controller.completed_rounds(),
                            "scores": controller.scoreboard().snapshot(),
                        }),
                    ));
                    return Ok(GameOutcome::Aborted(target));
                }
            }
        }

        let standings = controller.standings()?;
        info!("Game complete: {}", standings.winners.message());
        presenter.on_final_ranking(&standings);
        self.recorder.record(GameRecord::new(
            "game_completed",
            json!({ "standings": standings }),
        ));
        Ok(GameOutcome::Completed(standings))
    }

    /// Play the current player's turn. Returns the cancel target if the
    /// game was cancelled during the turn.
    async fn play_turn(
        &self,
        controller: &mut RoundController,
        round: u32,
        inputs: &dyn InputSource,
        presenter: &dyn GamePresenter,
    ) -> Result<Option<CancelTarget>, PlayGameError> {
        let player = controller.current_player().unwrap_or_default().to_string();

        let event = self
            .await_input(inputs.choose_difficulty(&player, round))
            .await?;
        let difficulty = match controller.apply(event)? {
            Transition::QuestionNeeded { difficulty, .. } => difficulty,
            Transition::Aborted(target) => return Ok(Some(target)),
            Transition::TurnScored(_) => {
                return Err(DomainError::InvalidTransition {
                    phase: Phase::SelectingDifficulty.to_string(),
                    action: "score a turn".to_string(),
                }
                .into());
            }
        };

        debug!("{} chose {}", player, difficulty);
        presenter.on_fetching_question(&player, difficulty);

        let fetched = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => None,
            result = self.fetch_question(difficulty) => Some(result),
        };
        let question = match fetched {
            Some(Ok(question)) => question,
            Some(Err(e)) => {
                presenter.on_fetch_failed(&player, &e.to_string());
                return Err(e);
            }
            None => {
                controller.apply(GameEvent::Cancel(CancelTarget::Quit))?;
                return Ok(Some(CancelTarget::Quit));
            }
        };

        controller.provide_question(question.clone())?;
        presenter.on_question_ready(&player, &question);

        loop {
            let event = self
                .await_input(inputs.choose_answer(&player, &question))
                .await?;
            match controller.apply(event) {
                Ok(Transition::TurnScored(result)) => {
                    debug!(
                        "{} answered {} ({} point(s))",
                        result.player,
                        if result.correct { "correctly" } else { "incorrectly" },
                        result.points_awarded
                    );
                    presenter.on_turn_result(&result);
                    self.recorder
                        .record(GameRecord::new("turn_scored", json!(result)));
                    return Ok(None);
                }
                Ok(Transition::Aborted(target)) => return Ok(Some(target)),
                Ok(Transition::QuestionNeeded { .. }) => {
                    return Err(DomainError::InvalidTransition {
                        phase: Phase::AwaitingAnswer.to_string(),
                        action: "request another question".to_string(),
                    }
                    .into());
                }
                Err(DomainError::InvalidInput(message)) => {
                    warn!("Rejected answer from {}: {}", player, message);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Wait for player input, turning a cancelled token into a quit event
    async fn await_input<F>(&self, input: F) -> Result<GameEvent, PlayGameError>
    where
        F: Future<Output = Result<GameEvent, InputError>>,
    {
        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Ok(GameEvent::Cancel(CancelTarget::Quit)),
            event = input => Ok(event?),
        }
    }

    async fn fetch_question(&self, difficulty: Difficulty) -> Result<Question, PlayGameError> {
        let question = match self.config.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.source.fetch(difficulty))
                .await
                .map_err(|_| PlayGameError::QuestionTimeout(limit))??,
            None => self.source.fetch(difficulty).await?,
        };
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::input_source::ScriptedInput;
    use crate::ports::presenter::NoPresenter;
    use async_trait::async_trait;
    use kingdom_domain::{ChoiceIndex, TurnResult, Winners};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Always returns "Which is even?" with the answer at index 1
    struct FixedSource {
        fetches: AtomicUsize,
    }

    impl FixedSource {
        fn new() -> Self {
            Self {
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuestionSource for FixedSource {
        async fn fetch(&self, difficulty: Difficulty) -> Result<Question, QuestionSourceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(Question::new(
                "Which is even?",
                vec!["3".into(), "4".into(), "5".into()],
                "4",
                "Math",
                difficulty,
            )
            .unwrap())
        }
    }

    struct NeverSource;

    #[async_trait]
    impl QuestionSource for NeverSource {
        async fn fetch(&self, _difficulty: Difficulty) -> Result<Question, QuestionSourceError> {
            std::future::pending().await
        }
    }

    struct FailingSource;

    #[async_trait]
    impl QuestionSource for FailingSource {
        async fn fetch(&self, _difficulty: Difficulty) -> Result<Question, QuestionSourceError> {
            Err(QuestionSourceError::InvalidRequest("no such category".into()))
        }
    }

    #[derive(Default)]
    struct CollectingPresenter {
        rounds: Mutex<Vec<u32>>,
        results: Mutex<Vec<TurnResult>>,
        ranking: Mutex<Option<Standings>>,
        aborted: Mutex<Option<CancelTarget>>,
        fetch_failures: Mutex<Vec<String>>,
    }

    impl GamePresenter for CollectingPresenter {
        fn on_round_started(&self, round: u32, _limit: RoundLimit) {
            self.rounds.lock().unwrap().push(round);
        }
        fn on_turn_result(&self, result: &TurnResult) {
            self.results.lock().unwrap().push(result.clone());
        }
        fn on_final_ranking(&self, standings: &Standings) {
            *self.ranking.lock().unwrap() = Some(standings.clone());
        }
        fn on_game_aborted(&self, target: CancelTarget) {
            *self.aborted.lock().unwrap() = Some(target);
        }
        fn on_fetch_failed(&self, player: &str, _reason: &str) {
            self.fetch_failures.lock().unwrap().push(player.to_string());
        }
    }

    #[derive(Default)]
    struct MemoryRecorder {
        types: Mutex<Vec<&'static str>>,
    }

    impl GameRecorder for MemoryRecorder {
        fn record(&self, record: GameRecord) {
            self.types.lock().unwrap().push(record.record_type);
        }
    }

    fn pick(d: Difficulty) -> GameEvent {
        GameEvent::DifficultyChosen(d)
    }

    fn answer(i: usize) -> GameEvent {
        GameEvent::ChoiceSelected(ChoiceIndex::new(i))
    }

    fn players(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_full_game_produces_standings() {
        let source = Arc::new(FixedSource::new());
        let recorder = Arc::new(MemoryRecorder::default());
        let use_case = PlayGameUseCase::new(Arc::clone(&source)).with_recorder(recorder.clone());
        let presenter = CollectingPresenter::default();

        // A: hard right, B: easy wrong, A: easy right, B: hard right
        let inputs = ScriptedInput::new([
            pick(Difficulty::Hard),
            answer(1),
            pick(Difficulty::Easy),
            answer(0),
            pick(Difficulty::Easy),
            answer(1),
            pick(Difficulty::Hard),
            answer(1),
        ]);

        let outcome = use_case
            .execute(
                PlayGameInput::new(players(&["A", "B"]), RoundLimit::Fixed(2)),
                &inputs,
                &presenter,
            )
            .await
            .unwrap();

        let GameOutcome::Completed(standings) = outcome else {
            panic!("expected a completed game");
        };
        assert_eq!(standings.entries[0].players, vec!["A"]);
        assert_eq!(standings.entries[0].score, 4);
        assert_eq!(standings.entries[1].score, 3);
        assert_eq!(standings.winners, Winners::Sole("A".into()));

        assert_eq!(source.fetches.load(Ordering::SeqCst), 4);
        assert_eq!(*presenter.rounds.lock().unwrap(), vec![1, 2]);
        let order: Vec<String> = presenter
            .results
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.player.clone())
            .collect();
        assert_eq!(order, vec!["A", "B", "A", "B"]);
        assert!(presenter.ranking.lock().unwrap().is_some());
        assert_eq!(inputs.remaining(), 0);

        let types = recorder.types.lock().unwrap();
        assert_eq!(types.first(), Some(&"game_started"));
        assert_eq!(types.last(), Some(&"game_completed"));
        assert_eq!(types.iter().filter(|t| **t == "turn_scored").count(), 4);
    }

    #[tokio::test]
    async fn test_cancel_during_difficulty_returns_to_menu() {
        let use_case = PlayGameUseCase::new(Arc::new(FixedSource::new()));
        let presenter = CollectingPresenter::default();
        let inputs = ScriptedInput::new([
            pick(Difficulty::Medium),
            answer(1),
            GameEvent::Cancel(CancelTarget::Menu),
        ]);

        let outcome = use_case
            .execute(
                PlayGameInput::unlimited_solo("Solo"),
                &inputs,
                &presenter,
            )
            .await
            .unwrap();

        assert_eq!(outcome, GameOutcome::Aborted(CancelTarget::Menu));
        assert!(!outcome.exits_process());
        assert_eq!(*presenter.aborted.lock().unwrap(), Some(CancelTarget::Menu));
        assert!(presenter.ranking.lock().unwrap().is_none());
        assert_eq!(presenter.results.lock().unwrap()[0].total_score, 2);
    }

    #[tokio::test]
    async fn test_unlimited_keeps_going_until_cancelled() {
        let use_case = PlayGameUseCase::new(Arc::new(FixedSource::new()));
        let presenter = CollectingPresenter::default();
        let mut script = Vec::new();
        for _ in 0..10 {
            script.push(pick(Difficulty::Easy));
            script.push(answer(1));
        }
        script.push(pick(Difficulty::Easy));
        script.push(GameEvent::Cancel(CancelTarget::Quit));
        let inputs = ScriptedInput::new(script);

        let outcome = use_case
            .execute(PlayGameInput::unlimited_solo("Solo"), &inputs, &presenter)
            .await
            .unwrap();

        assert!(outcome.exits_process());
        assert_eq!(presenter.rounds.lock().unwrap().len(), 11);
        assert_eq!(presenter.results.lock().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_out_of_range_answer_is_asked_again() {
        let use_case = PlayGameUseCase::new(Arc::new(FixedSource::new()));
        let inputs = ScriptedInput::new([pick(Difficulty::Easy), answer(9), answer(1)]);

        let outcome = use_case
            .execute(
                PlayGameInput::new(players(&["A"]), RoundLimit::Fixed(1)),
                &inputs,
                &NoPresenter,
            )
            .await
            .unwrap();

        let GameOutcome::Completed(standings) = outcome else {
            panic!("expected a completed game");
        };
        assert_eq!(standings.entries[0].score, 1);
    }

    #[tokio::test]
    async fn test_cancellation_token_interrupts_pending_fetch() {
        let token = CancellationToken::new();
        let use_case = PlayGameUseCase::new(Arc::new(NeverSource)).with_cancellation(token.clone());
        let inputs = ScriptedInput::new([pick(Difficulty::Hard)]);

        let cancel = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let outcome = use_case
            .execute(
                PlayGameInput::new(players(&["A"]), RoundLimit::Fixed(1)),
                &inputs,
                &NoPresenter,
            )
            .await
            .unwrap();
        cancel.await.unwrap();

        assert_eq!(outcome, GameOutcome::Aborted(CancelTarget::Quit));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let use_case = PlayGameUseCase::new(Arc::new(NeverSource)).with_config(SessionConfig {
            fetch_timeout: Some(Duration::from_millis(10)),
        });
        let inputs = ScriptedInput::new([pick(Difficulty::Easy)]);

        let presenter = CollectingPresenter::default();

        let result = use_case
            .execute(
                PlayGameInput::new(players(&["A"]), RoundLimit::Fixed(1)),
                &inputs,
                &presenter,
            )
            .await;

        assert!(matches!(result, Err(PlayGameError::QuestionTimeout(_))));
        assert_eq!(*presenter.fetch_failures.lock().unwrap(), vec!["A".to_string()]);
    }

    #[tokio::test]
    async fn test_permanent_source_error_surfaces() {
        let use_case = PlayGameUseCase::new(Arc::new(FailingSource));
        let inputs = ScriptedInput::new([pick(Difficulty::Easy)]);
        let presenter = CollectingPresenter::default();

        let result = use_case
            .execute(
                PlayGameInput::new(players(&["A"]), RoundLimit::Fixed(1)),
                &inputs,
                &presenter,
            )
            .await;

        assert!(matches!(
            result,
            Err(PlayGameError::QuestionSource(QuestionSourceError::InvalidRequest(_)))
        ));
        assert_eq!(presenter.fetch_failures.lock().unwrap().len(), 1);
        assert!(presenter.aborted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_players_rejected_before_any_input() {
        let use_case = PlayGameUseCase::new(Arc::new(FixedSource::new()));
        let inputs = ScriptedInput::new([]);

        let result = use_case
            .execute(
                PlayGameInput::new(players(&["A", "A"]), RoundLimit::Fixed(1)),
                &inputs,
                &NoPresenter,
            )
            .await;

        assert!(matches!(
            result,
            Err(PlayGameError::Domain(DomainError::DuplicatePlayer(_)))
        ));
    }

    #[tokio::test]
    async fn test_closed_input_is_an_error() {
        let use_case = PlayGameUseCase::new(Arc::new(FixedSource::new()));
        let inputs = ScriptedInput::new([]);

        let result = use_case
            .execute(
                PlayGameInput::new(players(&["A"]), RoundLimit::Fixed(1)),
                &inputs,
                &NoPresenter,
            )
            .await;

        assert!(matches!(result, Err(PlayGameError::Input(InputError::Closed))));
    }
}
