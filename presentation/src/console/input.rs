//! Console implementation of the InputSource port

use super::prompt::{LinePrompt, Reply};
use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use colored::Colorize;
use kingdom_application::{InputError, InputSource};
use kingdom_domain::{ChoiceIndex, Difficulty, GameEvent, Question};

/// Parse a 1-based choice number against the number of choices
pub fn parse_choice(text: &str, count: usize) -> Option<ChoiceIndex> {
    let number: usize = text.trim().parse().ok()?;
    if (1..=count).contains(&number) {
        ChoiceIndex::from_one_based(number)
    } else {
        None
    }
}

/// Reads difficulties and answers from the terminal
pub struct ConsoleInput {
    prompt: LinePrompt,
    max_invalid_attempts: u32,
}

impl ConsoleInput {
    /// `max_invalid_attempts` invalid difficulty entries in a row fall back
    /// to easy; zero means keep asking.
    pub fn new(prompt: LinePrompt, max_invalid_attempts: u32) -> Self {
        Self {
            prompt,
            max_invalid_attempts,
        }
    }

    fn print_difficulty_menu() {
        println!();
        for difficulty in Difficulty::ALL {
            let unit = if difficulty.points() == 1 { "point" } else { "points" };
            println!(
                "  {}. {} ({} {})",
                difficulty.menu_number().to_string().cyan(),
                ConsoleFormatter::difficulty_label(difficulty),
                difficulty.points(),
                unit
            );
        }
    }
}

#[async_trait]
impl InputSource for ConsoleInput {
    async fn choose_difficulty(&self, player: &str, round: u32) -> Result<GameEvent, InputError> {
        Self::print_difficulty_menu();
        let label = format!("Round {round} - {player}, choose a difficulty (1-3):");

        let mut invalid = 0;
        loop {
            match self.prompt.ask(&label).await? {
                Reply::Cancel(target) => return Ok(GameEvent::Cancel(target)),
                Reply::Text(text) => match text.parse::<Difficulty>() {
                    Ok(difficulty) => return Ok(GameEvent::DifficultyChosen(difficulty)),
                    Err(_) => {
                        invalid += 1;
                        if self.max_invalid_attempts > 0 && invalid >= self.max_invalid_attempts {
                            println!(
                                "{}",
                                "Too many invalid choices. Defaulting to Easy.".yellow()
                            );
                            return Ok(GameEvent::DifficultyChosen(Difficulty::Easy));
                        }
                        println!("{}", "Please enter 1, 2 or 3 (or menu / quit).".yellow());
                    }
                },
            }
        }
    }

    async fn choose_answer(
        &self,
        _player: &str,
        question: &Question,
    ) -> Result<GameEvent, InputError> {
        let count = question.choices().len();
        let label = format!("Your answer (1-{count}):");

        loop {
            match self.prompt.ask(&label).await? {
                Reply::Cancel(target) => return Ok(GameEvent::Cancel(target)),
                Reply::Text(text) => match parse_choice(&text, count) {
                    Some(index) => return Ok(GameEvent::ChoiceSelected(index)),
                    None => println!(
                        "{}",
                        format!("Please enter a number between 1 and {count}.").yellow()
                    ),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_domain::CancelTarget;
    use std::io::Cursor;

    fn input(lines: &str, max_invalid: u32) -> ConsoleInput {
        ConsoleInput::new(
            LinePrompt::from_reader(Cursor::new(lines.as_bytes().to_vec())),
            max_invalid,
        )
    }

    fn question() -> Question {
        Question::new(
            "Largest planet?",
            vec!["Mars".into(), "Jupiter".into(), "Venus".into()],
            "Jupiter",
            "Science",
            Difficulty::Easy,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_choice_bounds() {
        assert_eq!(parse_choice("1", 4), Some(ChoiceIndex::new(0)));
        assert_eq!(parse_choice(" 4 ", 4), Some(ChoiceIndex::new(3)));
        assert_eq!(parse_choice("0", 4), None);
        assert_eq!(parse_choice("5", 4), None);
        assert_eq!(parse_choice("two", 4), None);
    }

    #[tokio::test]
    async fn test_difficulty_by_number_and_name() {
        let console = input("x\n2\nhard\n", 3);
        assert_eq!(
            console.choose_difficulty("Ada", 1).await,
            Ok(GameEvent::DifficultyChosen(Difficulty::Medium))
        );
        assert_eq!(
            console.choose_difficulty("Ada", 2).await,
            Ok(GameEvent::DifficultyChosen(Difficulty::Hard))
        );
    }

    #[tokio::test]
    async fn test_difficulty_defaults_to_easy_after_invalid_attempts() {
        let console = input("7\nfoo\n\n3\n", 3);
        assert_eq!(
            console.choose_difficulty("Ada", 1).await,
            Ok(GameEvent::DifficultyChosen(Difficulty::Easy))
        );
    }

    #[tokio::test]
    async fn test_answer_reprompts_until_valid() {
        let console = input("9\nabc\n2\n", 3);
        assert_eq!(
            console.choose_answer("Ada", &question()).await,
            Ok(GameEvent::ChoiceSelected(ChoiceIndex::new(1)))
        );
    }

    #[tokio::test]
    async fn test_commands_cancel_and_eof_quits() {
        let console = input("menu\n", 3);
        assert_eq!(
            console.choose_answer("Ada", &question()).await,
            Ok(GameEvent::Cancel(CancelTarget::Menu))
        );
        assert_eq!(
            console.choose_difficulty("Ada", 1).await,
            Ok(GameEvent::Cancel(CancelTarget::Quit))
        );
    }
}
