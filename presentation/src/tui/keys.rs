//! Key handling per screen
//!
//! Keys edit [`TuiState`] directly where the change is purely visual
//! (menu highlight, form text). Anything the game task or the app loop
//! must act on is returned as a [`KeyAction`].

use super::state::{MenuItem, Screen, Stage, TuiState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kingdom_application::PlayGameInput;
use kingdom_domain::{CancelTarget, ChoiceIndex, Difficulty, GameEvent};

/// What the app loop must do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    StartGame(PlayGameInput),
    /// Answer the pending input request
    Reply(GameEvent),
    CancelGame(CancelTarget),
}

/// Key event handler - maps key events to actions based on the current screen
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(state: &mut TuiState, key: KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return if state.game_running {
                KeyAction::CancelGame(CancelTarget::Quit)
            } else {
                KeyAction::Quit
            };
        }

        match state.screen {
            Screen::Menu => Self::handle_menu(state, key),
            Screen::Setup => Self::handle_setup(state, key),
            Screen::Playing => Self::handle_playing(state, key),
            Screen::Ranking => Self::handle_ranking(state, key),
        }
    }

    fn handle_menu(state: &mut TuiState, key: KeyEvent) -> KeyAction {
        let count = MenuItem::ALL.len();
        let item = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.menu_selected = (state.menu_selected + count - 1) % count;
                return KeyAction::None;
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                state.menu_selected = (state.menu_selected + 1) % count;
                return KeyAction::None;
            }
            KeyCode::Enter => state.selected_menu_item(),
            KeyCode::Char('1') => MenuItem::NewGame,
            KeyCode::Char('2') => MenuItem::UnlimitedSolo,
            KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Esc => MenuItem::Exit,
            _ => return KeyAction::None,
        };

        match item {
            MenuItem::NewGame => state.open_setup(false),
            MenuItem::UnlimitedSolo => state.open_setup(true),
            MenuItem::Exit => return KeyAction::Quit,
        }
        KeyAction::None
    }

    fn handle_setup(state: &mut TuiState, key: KeyEvent) -> KeyAction {
        let form = &mut state.setup;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => state.screen = Screen::Menu,
            KeyCode::Enter => match form.build() {
                Ok(input) => return KeyAction::StartGame(input),
                Err(message) => form.error = Some(message),
            },
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Char('n') if ctrl => form.add_player(),
            KeyCode::Char('d') if ctrl => form.remove_player(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !ctrl => form.push_char(c),
            _ => {}
        }
        KeyAction::None
    }

    fn handle_playing(state: &mut TuiState, key: KeyEvent) -> KeyAction {
        if state.banner.is_some() {
            state.dismiss_banner();
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => {
                return KeyAction::CancelGame(CancelTarget::Menu);
            }
            KeyCode::Char('q') => return KeyAction::CancelGame(CancelTarget::Quit),
            _ => {}
        }

        let Some(game) = state.game.as_mut() else {
            return KeyAction::None;
        };

        let reply = match &mut game.stage {
            Stage::ChoosingDifficulty { selected } => {
                Self::pick_difficulty(selected, key.code).map(GameEvent::DifficultyChosen)
            }
            Stage::Answering { question, selected } => {
                Self::pick_choice(selected, question.choices().len(), key.code)
                    .map(GameEvent::ChoiceSelected)
            }
            Stage::Idle | Stage::Fetching { .. } => None,
        };

        match reply {
            Some(event) => {
                state.input_sent();
                KeyAction::Reply(event)
            }
            None => KeyAction::None,
        }
    }

    fn pick_difficulty(selected: &mut usize, code: KeyCode) -> Option<Difficulty> {
        let count = Difficulty::ALL.len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                *selected = (*selected + count - 1) % count;
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                *selected = (*selected + 1) % count;
                None
            }
            KeyCode::Enter => Difficulty::ALL.get(*selected).copied(),
            KeyCode::Char('e') => Some(Difficulty::Easy),
            KeyCode::Char('m') => Some(Difficulty::Medium),
            KeyCode::Char('h') => Some(Difficulty::Hard),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| Difficulty::from_menu_choice(d as usize)),
            _ => None,
        }
    }

    fn pick_choice(selected: &mut usize, count: usize, code: KeyCode) -> Option<ChoiceIndex> {
        if count == 0 {
            return None;
        }
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                *selected = (*selected + count - 1) % count;
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                *selected = (*selected + 1) % count;
                None
            }
            KeyCode::Enter => Some(ChoiceIndex::new(*selected)),
            KeyCode::Char(c) => c
                .to_digit(10)
                .map(|d| d as usize)
                .filter(|d| (1..=count).contains(d))
                .and_then(ChoiceIndex::from_one_based),
            _ => None,
        }
    }

    fn handle_ranking(state: &mut TuiState, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                state.back_to_menu();
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::{InputPrompt, TuiEvent};
    use kingdom_domain::{Question, RoundLimit, TurnResult};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn question() -> Question {
        Question::new(
            "Which is a prime?",
            vec!["4".into(), "6".into(), "7".into(), "9".into()],
            "7",
            "Math",
            Difficulty::Medium,
        )
        .unwrap()
    }

    fn playing() -> TuiState {
        let mut state = TuiState::default();
        state.apply(TuiEvent::GameStarted {
            players: vec!["Ada".into()],
            limit: RoundLimit::Fixed(1),
        });
        state.game_running = true;
        state
    }

    #[test]
    fn test_menu_navigation_and_selection() {
        let mut state = TuiState::default();
        assert_eq!(KeyHandler::handle(&mut state, key(KeyCode::Up)), KeyAction::None);
        assert_eq!(state.selected_menu_item(), MenuItem::Exit);
        assert_eq!(KeyHandler::handle(&mut state, key(KeyCode::Enter)), KeyAction::Quit);

        let mut state = TuiState::default();
        KeyHandler::handle(&mut state, key(KeyCode::Char('2')));
        assert_eq!(state.screen, Screen::Setup);
        assert!(state.setup.solo);
    }

    #[test]
    fn test_setup_typing_and_start() {
        let mut state = TuiState::default();
        KeyHandler::handle(&mut state, key(KeyCode::Enter));
        for c in "Ada".chars() {
            KeyHandler::handle(&mut state, key(KeyCode::Char(c)));
        }
        KeyHandler::handle(&mut state, ctrl('n'));
        for c in "Alan".chars() {
            KeyHandler::handle(&mut state, key(KeyCode::Char(c)));
        }

        match KeyHandler::handle(&mut state, key(KeyCode::Enter)) {
            KeyAction::StartGame(input) => {
                assert_eq!(input.players, vec!["Ada", "Alan"]);
                assert_eq!(input.rounds, RoundLimit::Fixed(3));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_setup_error_and_escape() {
        let mut state = TuiState::default();
        state.open_setup(false);
        KeyHandler::handle(&mut state, key(KeyCode::Tab));
        KeyHandler::handle(&mut state, key(KeyCode::Backspace));
        assert_eq!(KeyHandler::handle(&mut state, key(KeyCode::Enter)), KeyAction::None);
        assert!(state.setup.error.is_some());

        KeyHandler::handle(&mut state, key(KeyCode::Esc));
        assert_eq!(state.screen, Screen::Menu);
    }

    #[test]
    fn test_difficulty_keys() {
        let mut state = playing();
        state.prompt_input(&InputPrompt::Difficulty {
            player: "Ada".into(),
            round: 1,
        });
        KeyHandler::handle(&mut state, key(KeyCode::Down));
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Enter)),
            KeyAction::Reply(GameEvent::DifficultyChosen(Difficulty::Medium))
        );
        // answered: further keys do nothing until the next prompt
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Char('3'))),
            KeyAction::None
        );

        state.prompt_input(&InputPrompt::Difficulty {
            player: "Ada".into(),
            round: 2,
        });
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Char('h'))),
            KeyAction::Reply(GameEvent::DifficultyChosen(Difficulty::Hard))
        );
    }

    #[test]
    fn test_answer_keys() {
        let mut state = playing();
        state.prompt_input(&InputPrompt::Answer {
            player: "Ada".into(),
            question: question(),
        });
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Char('9'))),
            KeyAction::None
        );
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Char('3'))),
            KeyAction::Reply(GameEvent::ChoiceSelected(ChoiceIndex::new(2)))
        );

        state.prompt_input(&InputPrompt::Answer {
            player: "Ada".into(),
            question: question(),
        });
        KeyHandler::handle(&mut state, key(KeyCode::Up));
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Enter)),
            KeyAction::Reply(GameEvent::ChoiceSelected(ChoiceIndex::new(3)))
        );
    }

    #[test]
    fn test_cancel_keys_while_playing() {
        let mut state = playing();
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Esc)),
            KeyAction::CancelGame(CancelTarget::Menu)
        );
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Char('q'))),
            KeyAction::CancelGame(CancelTarget::Quit)
        );
        assert_eq!(
            KeyHandler::handle(&mut state, ctrl('c')),
            KeyAction::CancelGame(CancelTarget::Quit)
        );
        assert_eq!(
            KeyHandler::handle(&mut TuiState::default(), ctrl('c')),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_banner_swallows_first_key() {
        let mut state = playing();
        state.apply(TuiEvent::TurnScored(TurnResult {
            round: 1,
            player: "Ada".into(),
            difficulty: Difficulty::Easy,
            selected: ChoiceIndex::new(0),
            selected_answer: "4".into(),
            correct: false,
            correct_answer: "7".into(),
            points_awarded: 0,
            total_score: 0,
        }));
        assert_eq!(KeyHandler::handle(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert!(state.banner.is_none());
        assert_eq!(
            KeyHandler::handle(&mut state, key(KeyCode::Esc)),
            KeyAction::CancelGame(CancelTarget::Menu)
        );
    }

    #[test]
    fn test_ranking_returns_to_menu() {
        let mut state = playing();
        state.screen = Screen::Ranking;
        KeyHandler::handle(&mut state, key(KeyCode::Enter));
        assert_eq!(state.screen, Screen::Menu);
    }
}
