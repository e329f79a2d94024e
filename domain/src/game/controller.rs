//! RoundController state machine
//!
//! The controller owns the [`ScoreBoard`] for one game and walks it through
//! rounds and turns. It never performs I/O: callers feed it player events
//! and questions, and react to the [`Transition`] it returns.
//!
//! ```text
//! NotStarted -> SelectingDifficulty -> AwaitingAnswer -> (Scoring)
//!                    ^                                      |
//!                    +------------- next player ------------+
//!                                                           |
//!                             RoundComplete <- last player -+
//!                                   |
//!                     GameComplete or next round
//! ```

use super::event::{CancelTarget, GameEvent};
use super::round_limit::RoundLimit;
use crate::core::difficulty::Difficulty;
use crate::core::error::DomainError;
use crate::core::question::{ChoiceIndex, Question};
use crate::ranking::{RankingEngine, Standings};
use crate::scoring::ScoreBoard;
use serde::{Deserialize, Serialize};

/// Where the controller currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    SelectingDifficulty,
    AwaitingAnswer,
    /// Transient: only observable while an answer is being applied
    Scoring,
    RoundComplete,
    GameComplete,
    Aborted(CancelTarget),
}

impl Phase {
    /// Whether no further event can change the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameComplete | Phase::Aborted(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::SelectingDifficulty => "selecting difficulty",
            Phase::AwaitingAnswer => "awaiting answer",
            Phase::Scoring => "scoring",
            Phase::RoundComplete => "round complete",
            Phase::GameComplete => "game complete",
            Phase::Aborted(_) => "aborted",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one answered turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub round: u32,
    pub player: String,
    pub difficulty: Difficulty,
    pub selected: ChoiceIndex,
    pub selected_answer: String,
    pub correct: bool,
    pub correct_answer: String,
    pub points_awarded: u32,
    pub total_score: u32,
}

/// What the caller must do after [`RoundController::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Fetch a question of `difficulty` and pass it to
    /// [`RoundController::provide_question`]
    QuestionNeeded {
        player: String,
        difficulty: Difficulty,
    },
    TurnScored(TurnResult),
    Aborted(CancelTarget),
}

/// Result of [`RoundController::begin_round`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAdvance {
    Started { round: u32 },
    GameComplete,
}

/// Drives rounds and turns for one game
///
/// Every round, each player in input order selects a difficulty, receives a
/// question and answers it. In [`RoundLimit::Unlimited`] mode the round
/// target grows by one after every completed round, so the game only ends
/// through a [`GameEvent::Cancel`].
#[derive(Debug, Clone)]
pub struct RoundController {
    board: ScoreBoard,
    limit: RoundLimit,
    target_rounds: u32,
    completed_rounds: u32,
    turns_played: u32,
    phase: Phase,
    turn: usize,
    difficulty: Option<Difficulty>,
    question: Option<Question>,
}

impl RoundController {
    /// Create a controller in [`Phase::NotStarted`]
    ///
    /// Fails for `RoundLimit::Fixed(0)` and for any player list the
    /// [`ScoreBoard`] rejects.
    pub fn new<I, S>(players: I, limit: RoundLimit) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if limit == RoundLimit::Fixed(0) {
            return Err(DomainError::invalid_input(
                "number of rounds must be positive",
            ));
        }
        let board = ScoreBoard::new(players)?;

        Ok(Self {
            board,
            limit,
            target_rounds: limit.initial_target(),
            completed_rounds: 0,
            turns_played: 0,
            phase: Phase::NotStarted,
            turn: 0,
            difficulty: None,
            question: None,
        })
    }

    /// Start the next round, or finish the game when the target is reached
    pub fn begin_round(&mut self) -> Result<RoundAdvance, DomainError> {
        if !matches!(self.phase, Phase::NotStarted | Phase::RoundComplete) {
            return Err(self.invalid("begin a round"));
        }

        if self.completed_rounds >= self.target_rounds {
            self.phase = Phase::GameComplete;
            return Ok(RoundAdvance::GameComplete);
        }

        self.turn = 0;
        self.phase = Phase::SelectingDifficulty;
        Ok(RoundAdvance::Started {
            round: self.current_round(),
        })
    }

    /// Feed one player event into the state machine
    ///
    /// `Cancel` is accepted in every non-terminal phase and moves to
    /// [`Phase::Aborted`]. An out-of-range choice is
    /// [`DomainError::InvalidInput`] and leaves the phase unchanged so the
    /// player can be asked again; any other event that does not fit the
    /// current phase is [`DomainError::InvalidTransition`].
    pub fn apply(&mut self, event: GameEvent) -> Result<Transition, DomainError> {
        match (self.phase, event) {
            (phase, GameEvent::Cancel(target)) if !phase.is_terminal() => {
                self.phase = Phase::Aborted(target);
                self.difficulty = None;
                self.question = None;
                Ok(Transition::Aborted(target))
            }
            (Phase::SelectingDifficulty, GameEvent::DifficultyChosen(difficulty)) => {
                self.difficulty = Some(difficulty);
                self.question = None;
                self.phase = Phase::AwaitingAnswer;
                Ok(Transition::QuestionNeeded {
                    player: self.current_player_name().to_string(),
                    difficulty,
                })
            }
            (Phase::AwaitingAnswer, GameEvent::ChoiceSelected(index)) => self.score(index),
            (_, event) => Err(self.invalid(event.action())),
        }
    }

    /// Attach the question for the pending turn
    pub fn provide_question(&mut self, question: Question) -> Result<(), DomainError> {
        if self.phase != Phase::AwaitingAnswer || self.question.is_some() {
            return Err(self.invalid("receive a question"));
        }
        let Some(expected) = self.difficulty else {
            return Err(self.invalid("receive a question"));
        };
        if question.difficulty() != expected {
            return Err(DomainError::invalid_input(format!(
                "expected a {expected} question, got {}",
                question.difficulty()
            )));
        }
        self.question = Some(question);
        Ok(())
    }

    fn score(&mut self, index: ChoiceIndex) -> Result<Transition, DomainError> {
        let Some(question) = self.question.as_ref() else {
            return Err(self.invalid("select an answer before the question arrived"));
        };
        let Some(selected_answer) = question.choice(index).map(str::to_string) else {
            return Err(DomainError::invalid_input(format!(
                "choice {} is out of range",
                index.number()
            )));
        };

        self.phase = Phase::Scoring;

        let difficulty = question.difficulty();
        let correct = question.is_correct(index);
        let correct_answer = question.correct_answer().to_string();
        let player = self.current_player_name().to_string();

        let (points_awarded, total_score) = if correct {
            let points = difficulty.points();
            (points, self.board.award(&player, points)?)
        } else {
            (0, self.board.score(&player).unwrap_or_default())
        };

        let result = TurnResult {
            round: self.current_round(),
            player,
            difficulty,
            selected: index,
            selected_answer,
            correct,
            correct_answer,
            points_awarded,
            total_score,
        };

        self.turns_played += 1;
        self.difficulty = None;
        self.question = None;
        self.turn += 1;

        if self.turn >= self.board.len() {
            self.completed_rounds += 1;
            if self.limit.is_unlimited() {
                self.target_rounds = self.completed_rounds + 1;
            }
            self.phase = Phase::RoundComplete;
        } else {
            self.phase = Phase::SelectingDifficulty;
        }

        Ok(Transition::TurnScored(result))
    }

    /// Final ranking; only available once the game is complete
    pub fn standings(&self) -> Result<Standings, DomainError> {
        if self.phase != Phase::GameComplete {
            return Err(DomainError::GameNotComplete);
        }
        RankingEngine::rank(&self.board.snapshot())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.board
    }

    /// Round limit the game was created with
    pub fn limit(&self) -> RoundLimit {
        self.limit
    }

    /// Player whose turn it is (or was last, once the round is over)
    pub fn current_player(&self) -> Option<&str> {
        match self.phase {
            Phase::SelectingDifficulty | Phase::AwaitingAnswer | Phase::Scoring => {
                self.board.player_at(self.turn)
            }
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn chosen_difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// 1-based number of the round in progress (or the next one)
    pub fn current_round(&self) -> u32 {
        self.completed_rounds + 1
    }

    /// Rounds the game currently aims for
    ///
    /// Fixed games keep their limit; unlimited games move the target one past
    /// the completed rounds after every round.
    pub fn target_rounds(&self) -> u32 {
        self.target_rounds
    }

    /// Rounds in which every player has taken a turn
    pub fn completed_rounds(&self) -> u32 {
        self.completed_rounds
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    fn current_player_name(&self) -> &str {
        self.board.player_at(self.turn).unwrap_or_default()
    }

    fn invalid(&self, action: &str) -> DomainError {
        DomainError::InvalidTransition {
            phase: self.phase.to_string(),
            action: action.to_string(),
        }
    }
}
