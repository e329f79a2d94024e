//! TUI application: main loop with the actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                game task (tokio::spawn)
//!   ├─ crossterm EventStream             └─ PlayGameUseCase::execute()
//!   ├─ event_rx (TuiEvent)  <────────────────── TuiPresenter / TuiInputSource
//!   └─ tick_interval
//!        └── oneshot reply ─────────────────>── pending input request
//! ```

use super::event::TuiEvent;
use super::input::TuiInputSource;
use super::keys::{KeyAction, KeyHandler};
use super::presenter::TuiPresenter;
use super::state::{Screen, TuiState};
use super::widgets::{
    MainLayout,
    game::{ScoreboardWidget, TurnWidget},
    header::HeaderWidget,
    menu::MenuWidget,
    ranking::RankingWidget,
    result::ResultWidget,
    setup::SetupWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use kingdom_application::{PlayGameInput, PlayGameUseCase, QuestionSource};
use kingdom_domain::{CancelTarget, GameEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Timing and defaults for the full-screen UI
#[derive(Debug, Clone)]
pub struct TuiSettings {
    /// How long a turn result stays on screen unless a key dismisses it
    pub result_display: Duration,
    pub tick_rate: Duration,
    pub default_rounds: u32,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            result_display: Duration::from_millis(3000),
            tick_rate: Duration::from_millis(250),
            default_rounds: 3,
        }
    }
}

/// Main TUI application
pub struct TuiApp<Q: QuestionSource + 'static> {
    use_case: Arc<PlayGameUseCase<Q>>,
    settings: TuiSettings,
    cancellation: CancellationToken,

    // -- Actor channel --
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,

    // -- Pending input reply --
    pending_reply: Option<oneshot::Sender<GameEvent>>,
    /// Cancel requested while no input was pending (e.g. during a fetch)
    queued_cancel: Option<CancelTarget>,

    game_task: Option<JoinHandle<()>>,
}

impl<Q: QuestionSource + 'static> TuiApp<Q> {
    pub fn new(use_case: PlayGameUseCase<Q>, settings: TuiSettings) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            use_case: Arc::new(use_case),
            settings,
            cancellation: CancellationToken::new(),
            event_tx,
            event_rx,
            pending_reply: None,
            queued_cancel: None,
            game_task: None,
        }
    }

    /// Token the use case also watches; cancelling it quits a running game
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new(self.settings.default_rounds);
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.settings.tick_rate);

        loop {
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // Game progress and input requests, in emission order
                Some(event) = self.event_rx.recv() => {
                    self.apply_event(&mut state, event);
                }

                // Ctrl+C from outside the key handler
                _ = self.cancellation.cancelled(), if !state.game_running => {
                    state.should_quit = true;
                }

                _ = tick.tick() => {
                    state.expire_banner(self.settings.result_display);
                    state.expire_flash(Duration::from_secs(5));
                }
            }
        }

        self.shutdown().await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        let Event::Key(key) = event else {
            // resize is picked up by the next draw
            return;
        };

        match KeyHandler::handle(state, key) {
            KeyAction::None => {}
            KeyAction::Quit => state.should_quit = true,
            KeyAction::StartGame(input) => self.start_game(state, input),
            KeyAction::Reply(event) => self.reply(state, event),
            KeyAction::CancelGame(target) => self.cancel_game(state, target),
        }
    }

    fn apply_event(&mut self, state: &mut TuiState, event: TuiEvent) {
        match event {
            TuiEvent::InputRequested(request) => {
                if let Some(target) = self.queued_cancel.take() {
                    let _ = request.response_tx.send(GameEvent::Cancel(target));
                    return;
                }
                state.prompt_input(&request.prompt);
                self.pending_reply = Some(request.response_tx);
            }
            TuiEvent::GameFinished(result) => {
                self.pending_reply = None;
                self.queued_cancel = None;
                self.game_task = None;
                if let Err(message) = &result {
                    warn!("Game ended with an error: {}", message);
                }
                state.apply(TuiEvent::GameFinished(result));
            }
            other => state.apply(other),
        }
    }

    fn start_game(&mut self, state: &mut TuiState, input: PlayGameInput) {
        if state.game_running {
            return;
        }
        info!("Starting game for {} player(s)", input.players.len());
        state.game_running = true;

        let use_case = Arc::clone(&self.use_case);
        let event_tx = self.event_tx.clone();
        self.game_task = Some(tokio::spawn(async move {
            let inputs = TuiInputSource::new(event_tx.clone());
            let presenter = TuiPresenter::new(event_tx.clone());
            let result = use_case
                .execute(input, &inputs, &presenter)
                .await
                .map_err(|e| e.to_string());
            let _ = event_tx.send(TuiEvent::GameFinished(result));
        }));
    }

    fn reply(&mut self, state: &mut TuiState, event: GameEvent) {
        match self.pending_reply.take() {
            Some(tx) => {
                if tx.send(event).is_err() {
                    debug!("Game task dropped the input request");
                }
            }
            None => state.set_flash("Not waiting for input"),
        }
    }

    fn cancel_game(&mut self, state: &mut TuiState, target: CancelTarget) {
        if !state.game_running {
            match target {
                CancelTarget::Quit => state.should_quit = true,
                CancelTarget::Menu => state.back_to_menu(),
            }
            return;
        }

        if let Some(tx) = self.pending_reply.take() {
            let _ = tx.send(GameEvent::Cancel(target));
            state.input_sent();
            return;
        }

        match target {
            CancelTarget::Quit => self.cancellation.cancel(),
            CancelTarget::Menu => {
                self.queued_cancel = Some(CancelTarget::Menu);
                state.set_flash("Leaving after the current question loads");
            }
        }
    }

    /// Stop a running game and wait briefly for it to unwind
    async fn shutdown(&mut self) {
        if let Some(tx) = self.pending_reply.take() {
            let _ = tx.send(GameEvent::Cancel(CancelTarget::Quit));
        }
        self.cancellation.cancel();
        if let Some(handle) = self.game_task.take()
            && tokio::time::timeout(Duration::from_secs(2), handle)
                .await
                .is_err()
        {
            warn!("Game task did not stop in time");
        }
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(state), layout.header);

    match state.screen {
        Screen::Menu => frame.render_widget(MenuWidget::new(state), layout.body),
        Screen::Setup => frame.render_widget(SetupWidget::new(&state.setup), layout.body),
        Screen::Playing => {
            if let Some(game) = &state.game {
                let (scores, turn) = MainLayout::split_game(layout.body);
                frame.render_widget(ScoreboardWidget::new(game), scores);
                frame.render_widget(TurnWidget::new(game), turn);
            }
        }
        Screen::Ranking => {
            if let Some(standings) = &state.standings {
                frame.render_widget(RankingWidget::new(standings), layout.body);
            }
        }
    }

    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    // Result overlay
    if let Some(banner) = &state.banner
        && state.screen == Screen::Playing
    {
        let area = MainLayout::centered_overlay(50, 40, layout.body);
        frame.render_widget(ResultWidget::new(&banner.result), area);
    }
}
