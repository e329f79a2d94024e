//! TUI state: everything the widgets render
//!
//! Mutated only on the UI loop, by [`TuiState::apply`] for game events
//! and by the key handler for player input.

use super::event::{InputPrompt, TuiEvent};
use kingdom_application::{GameOutcome, PlayGameInput};
use kingdom_domain::{CancelTarget, Difficulty, Question, RoundLimit, Standings, TurnResult};
use std::time::{Duration, Instant};

/// Most players the setup form accepts
pub const MAX_PLAYERS: usize = 8;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Setup,
    Playing,
    Ranking,
}

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewGame,
    UnlimitedSolo,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::NewGame, MenuItem::UnlimitedSolo, MenuItem::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::NewGame => "New Game",
            MenuItem::UnlimitedSolo => "Unlimited Solo Game",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Field with keyboard focus in the setup form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Name(usize),
    Rounds,
}

/// Player setup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    pub solo: bool,
    pub names: Vec<String>,
    pub rounds: String,
    pub focus: SetupField,
    pub error: Option<String>,
}

impl SetupForm {
    pub fn new(default_rounds: u32) -> Self {
        Self {
            solo: false,
            names: vec![String::new()],
            rounds: default_rounds.to_string(),
            focus: SetupField::Name(0),
            error: None,
        }
    }

    /// One name, no round count
    pub fn solo() -> Self {
        Self {
            solo: true,
            names: vec![String::new()],
            rounds: String::new(),
            focus: SetupField::Name(0),
            error: None,
        }
    }

    fn fields(&self) -> Vec<SetupField> {
        let mut fields: Vec<SetupField> = (0..self.names.len()).map(SetupField::Name).collect();
        if !self.solo {
            fields.push(SetupField::Rounds);
        }
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        if let Some(i) = fields.iter().position(|f| *f == self.focus) {
            self.focus = fields[(i + 1) % fields.len()];
        }
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        if let Some(i) = fields.iter().position(|f| *f == self.focus) {
            self.focus = fields[(i + fields.len() - 1) % fields.len()];
        }
    }

    pub fn add_player(&mut self) {
        if self.solo || self.names.len() >= MAX_PLAYERS {
            return;
        }
        self.names.push(String::new());
        self.focus = SetupField::Name(self.names.len() - 1);
    }

    /// Remove the focused player (never the last one)
    pub fn remove_player(&mut self) {
        if let SetupField::Name(i) = self.focus
            && self.names.len() > 1
        {
            self.names.remove(i);
            self.focus = SetupField::Name(i.min(self.names.len() - 1));
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.error = None;
        match self.focus {
            SetupField::Name(i) => {
                if let Some(name) = self.names.get_mut(i) {
                    name.push(c);
                }
            }
            SetupField::Rounds if c.is_ascii_digit() && self.rounds.len() < 4 => {
                self.rounds.push(c)
            }
            SetupField::Rounds => {}
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        match self.focus {
            SetupField::Name(i) => {
                if let Some(name) = self.names.get_mut(i) {
                    name.pop();
                }
            }
            SetupField::Rounds => {
                self.rounds.pop();
            }
        }
    }

    /// Validate the form: blank names become "Player N", repeats and
    /// non-positive round counts are refused
    pub fn build(&self) -> Result<PlayGameInput, String> {
        let mut players: Vec<String> = Vec::with_capacity(self.names.len());
        for (i, raw) in self.names.iter().enumerate() {
            let name = match raw.trim() {
                "" => format!("Player {}", i + 1),
                trimmed => trimmed.to_string(),
            };
            if players.contains(&name) {
                return Err(format!("{name} is entered twice"));
            }
            players.push(name);
        }

        if self.solo {
            let limit = RoundLimit::Unlimited;
            return Ok(PlayGameInput::new(players, limit));
        }

        let rounds = self
            .rounds
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| "Rounds must be a number above zero".to_string())?;
        Ok(PlayGameInput::new(players, RoundLimit::Fixed(rounds)))
    }
}

/// Progress of the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Between turns, or waiting for the game task
    Idle,
    ChoosingDifficulty { selected: usize },
    Fetching { difficulty: Difficulty },
    Answering { question: Question, selected: usize },
}

/// Live view of the game in progress
#[derive(Debug, Clone)]
pub struct GameView {
    pub players: Vec<String>,
    pub scores: Vec<u32>,
    pub limit: RoundLimit,
    pub round: u32,
    pub current_player: Option<String>,
    pub stage: Stage,
    pub last_results: Vec<TurnResult>,
}

impl GameView {
    const HISTORY: usize = 6;

    pub fn new(players: Vec<String>, limit: RoundLimit) -> Self {
        let scores = vec![0; players.len()];
        Self {
            players,
            scores,
            limit,
            round: 0,
            current_player: None,
            stage: Stage::Idle,
            last_results: Vec::new(),
        }
    }

    fn record(&mut self, result: &TurnResult) {
        if let Some(i) = self.players.iter().position(|p| p == &result.player) {
            self.scores[i] = result.total_score;
        }
        self.last_results.push(result.clone());
        if self.last_results.len() > Self::HISTORY {
            self.last_results.remove(0);
        }
    }

    pub fn round_label(&self) -> String {
        match self.limit {
            RoundLimit::Fixed(total) => format!("Round {} of {}", self.round, total),
            RoundLimit::Unlimited => format!("Round {} (unlimited)", self.round),
        }
    }
}

/// Turn result shown on top of the game screen for a short while
#[derive(Debug, Clone)]
pub struct ResultBanner {
    pub result: TurnResult,
    pub shown_at: Instant,
}

/// Main TUI state
pub struct TuiState {
    pub screen: Screen,
    pub menu_selected: usize,
    pub setup: SetupForm,
    pub game: Option<GameView>,
    pub standings: Option<Standings>,
    pub banner: Option<ResultBanner>,
    pub flash_message: Option<(String, Instant)>,
    pub default_rounds: u32,
    pub game_running: bool,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(default_rounds: u32) -> Self {
        Self {
            screen: Screen::Menu,
            menu_selected: 0,
            setup: SetupForm::new(default_rounds),
            game: None,
            standings: None,
            banner: None,
            flash_message: None,
            default_rounds,
            game_running: false,
            should_quit: false,
        }
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_selected % MenuItem::ALL.len()]
    }

    pub fn open_setup(&mut self, solo: bool) {
        self.setup = if solo {
            SetupForm::solo()
        } else {
            SetupForm::new(self.default_rounds)
        };
        self.screen = Screen::Setup;
    }

    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.game = None;
        self.banner = None;
    }

    /// Apply a game event; input requests are handled through [`Self::prompt_input`]
    pub fn apply(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::GameStarted { players, limit } => {
                self.game = Some(GameView::new(players, limit));
                self.standings = None;
                self.banner = None;
                self.screen = Screen::Playing;
            }
            TuiEvent::RoundStarted { round, limit } => {
                if let Some(game) = self.game.as_mut() {
                    game.round = round;
                    game.limit = limit;
                }
            }
            TuiEvent::FetchingQuestion { player, difficulty } => {
                if let Some(game) = self.game.as_mut() {
                    game.current_player = Some(player);
                    game.stage = Stage::Fetching { difficulty };
                }
            }
            TuiEvent::QuestionReady { player, question } => {
                if let Some(game) = self.game.as_mut() {
                    game.current_player = Some(player);
                    game.stage = Stage::Answering {
                        question,
                        selected: 0,
                    };
                }
            }
            TuiEvent::TurnScored(result) => {
                if let Some(game) = self.game.as_mut() {
                    game.record(&result);
                    game.stage = Stage::Idle;
                }
                self.banner = Some(ResultBanner {
                    result,
                    shown_at: Instant::now(),
                });
            }
            TuiEvent::FinalRanking(standings) => {
                self.standings = Some(standings);
                // the last turn's result stays up until dismissed or expired
                if self.banner.is_none() {
                    self.screen = Screen::Ranking;
                }
            }
            TuiEvent::GameAborted(CancelTarget::Menu) => {
                self.back_to_menu();
                self.set_flash("Game abandoned");
            }
            TuiEvent::GameAborted(CancelTarget::Quit) => self.should_quit = true,
            TuiEvent::InputRequested(request) => self.prompt_input(&request.prompt),
            TuiEvent::GameFinished(result) => self.finish_game(result),
        }
    }

    /// Switch the turn stage to match what the game is asking for
    pub fn prompt_input(&mut self, prompt: &InputPrompt) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        match prompt {
            InputPrompt::Difficulty { player, round } => {
                game.current_player = Some(player.clone());
                game.round = *round;
                game.stage = Stage::ChoosingDifficulty { selected: 0 };
            }
            InputPrompt::Answer { player, question } => {
                game.current_player = Some(player.clone());
                let already_showing = matches!(
                    &game.stage,
                    Stage::Answering { question: q, .. } if q == question
                );
                if !already_showing {
                    game.stage = Stage::Answering {
                        question: question.clone(),
                        selected: 0,
                    };
                }
            }
        }
    }

    fn finish_game(&mut self, result: Result<GameOutcome, String>) {
        self.game_running = false;
        match result {
            Ok(GameOutcome::Completed(_)) => {}
            Ok(GameOutcome::Aborted(CancelTarget::Quit)) => self.should_quit = true,
            Ok(GameOutcome::Aborted(CancelTarget::Menu)) => {
                if self.screen == Screen::Playing {
                    self.back_to_menu();
                }
            }
            Err(message) => {
                self.back_to_menu();
                self.set_flash(message);
            }
        }
    }

    /// Mark the current turn as answered so repeated keys do nothing
    pub fn input_sent(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.stage = Stage::Idle;
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
        self.show_pending_ranking();
    }

    pub fn expire_banner(&mut self, max_age: Duration) {
        if let Some(banner) = &self.banner
            && banner.shown_at.elapsed() >= max_age
        {
            self.dismiss_banner();
        }
    }

    fn show_pending_ranking(&mut self) {
        if self.screen == Screen::Playing && self.standings.is_some() {
            self.screen = Screen::Ranking;
        }
    }

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(3)
    }
}
