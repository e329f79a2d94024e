//! Console game loop: main menu, setup and play

use super::input::ConsoleInput;
use super::presenter::ConsolePresenter;
use super::prompt::LinePrompt;
use super::setup::{MenuChoice, SetupOutcome, read_menu_choice, read_names, read_positive};
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use kingdom_application::{
    GameOutcome, PlayGameError, PlayGameInput, PlayGameUseCase, QuestionSource,
};
use kingdom_domain::{CancelTarget, OutputFormat, RoundLimit};
use tracing::{info, warn};

/// Settings for the console front end
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Players given on the command line; non-empty skips the menu
    pub players: Vec<String>,
    pub rounds: u32,
    pub unlimited: bool,
    pub format: OutputFormat,
    pub quiet: bool,
    pub max_invalid_difficulty_attempts: u32,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            rounds: 3,
            unlimited: false,
            format: OutputFormat::Text,
            quiet: false,
            max_invalid_difficulty_attempts: 3,
        }
    }
}

/// Line-based trivia game
pub struct ConsoleGame<Q: QuestionSource + 'static> {
    use_case: PlayGameUseCase<Q>,
    options: ConsoleOptions,
    prompt: LinePrompt,
}

impl<Q: QuestionSource + 'static> ConsoleGame<Q> {
    pub fn new(use_case: PlayGameUseCase<Q>, options: ConsoleOptions) -> Self {
        Self {
            use_case,
            options,
            prompt: LinePrompt::stdin(),
        }
    }

    /// Read input from somewhere other than stdin
    pub fn with_prompt(mut self, prompt: LinePrompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// Run until the player exits
    ///
    /// With players preset, one game is played and the function returns.
    /// Otherwise the main menu loops until Exit or a quit command.
    pub async fn run(&self) -> Result<(), PlayGameError> {
        if !self.options.quiet {
            Self::print_welcome();
        }

        if !self.options.players.is_empty() {
            let limit = if self.options.unlimited {
                RoundLimit::Unlimited
            } else {
                RoundLimit::fixed(self.options.rounds)?
            };
            let input = PlayGameInput::new(self.options.players.clone(), limit);
            self.play(input).await?;
            return Ok(());
        }

        if self.options.unlimited {
            if let SetupOutcome::Ready(input) = self.setup_solo().await? {
                self.play(input).await?;
            }
            return Ok(());
        }

        loop {
            let setup = match read_menu_choice(&self.prompt).await? {
                MenuChoice::NewGame => self.setup_new_game().await?,
                MenuChoice::UnlimitedSolo => self.setup_solo().await?,
                MenuChoice::Exit => break,
            };
            let input = match setup {
                SetupOutcome::Ready(input) => input,
                SetupOutcome::Cancelled(CancelTarget::Quit) => break,
                SetupOutcome::Cancelled(CancelTarget::Menu) => continue,
            };

            match self.play(input).await {
                Ok(outcome) if outcome.exits_process() => break,
                Ok(_) => {}
                Err(e @ (PlayGameError::QuestionSource(_) | PlayGameError::QuestionTimeout(_))) => {
                    warn!("Game ended early: {}", e);
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    println!("Returning to the main menu.");
                }
                Err(e) => return Err(e),
            }
        }

        info!("Console session finished");
        Ok(())
    }

    async fn play(&self, input: PlayGameInput) -> Result<GameOutcome, PlayGameError> {
        let inputs = ConsoleInput::new(
            self.prompt.clone(),
            self.options.max_invalid_difficulty_attempts,
        );
        let presenter = ConsolePresenter::new(self.options.format, self.options.quiet);
        self.use_case.execute(input, &inputs, &presenter).await
    }

    async fn setup_new_game(&self) -> Result<SetupOutcome<PlayGameInput>, PlayGameError> {
        let count = match read_positive(&self.prompt, "How many players?", None).await? {
            SetupOutcome::Ready(n) => n,
            SetupOutcome::Cancelled(target) => return Ok(SetupOutcome::Cancelled(target)),
        };
        let players = match read_names(&self.prompt, count).await? {
            SetupOutcome::Ready(names) => names,
            SetupOutcome::Cancelled(target) => return Ok(SetupOutcome::Cancelled(target)),
        };
        let label = format!("How many rounds? [{}]", self.options.rounds);
        let rounds = match read_positive(&self.prompt, &label, Some(self.options.rounds)).await? {
            SetupOutcome::Ready(n) => n,
            SetupOutcome::Cancelled(target) => return Ok(SetupOutcome::Cancelled(target)),
        };
        Ok(SetupOutcome::Ready(PlayGameInput::new(
            players,
            RoundLimit::fixed(rounds)?,
        )))
    }

    async fn setup_solo(&self) -> Result<SetupOutcome<PlayGameInput>, PlayGameError> {
        Ok(match read_names(&self.prompt, 1).await? {
            SetupOutcome::Ready(mut names) => match names.pop() {
                Some(name) => SetupOutcome::Ready(PlayGameInput::unlimited_solo(name)),
                None => SetupOutcome::Cancelled(CancelTarget::Menu),
            },
            SetupOutcome::Cancelled(target) => SetupOutcome::Cancelled(target),
        })
    }

    fn print_welcome() {
        println!();
        println!("{}", ConsoleFormatter::header("Welcome to Culture Kingdom"));
        println!("Each round, every player picks a difficulty and answers one question.");
        println!(
            "Easy is worth {} point, medium {} and hard {}.",
            "1".green(),
            "2".yellow(),
            "3".red()
        );
        println!(
            "Type {} to abandon a game or {} to leave at any prompt ({} and {} while naming players).",
            "menu".cyan(),
            "quit".cyan(),
            "/menu".cyan(),
            "/quit".cyan()
        );
    }
}
