//! Main menu and player setup prompts

use super::prompt::{LinePrompt, Reply};
use colored::Colorize;
use kingdom_application::InputError;
use kingdom_domain::CancelTarget;

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    UnlimitedSolo,
    Exit,
}

/// Result of a setup prompt: a value, or the player backed out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome<T> {
    Ready(T),
    Cancelled(CancelTarget),
}

pub fn parse_menu_choice(text: &str) -> Option<MenuChoice> {
    match text.trim().to_lowercase().as_str() {
        "1" | "new" | "play" => Some(MenuChoice::NewGame),
        "2" | "solo" | "unlimited" => Some(MenuChoice::UnlimitedSolo),
        "3" | "exit" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Strictly positive integer, or None
pub fn parse_positive(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

fn print_menu() {
    println!();
    println!("{}", "Main Menu".cyan().bold());
    println!("  {}. New Game", "1".cyan());
    println!("  {}. Unlimited Solo Game", "2".cyan());
    println!("  {}. Exit", "3".cyan());
}

pub(super) async fn read_menu_choice(prompt: &LinePrompt) -> Result<MenuChoice, InputError> {
    print_menu();
    loop {
        match prompt.ask("Select an option (1-3):").await? {
            Reply::Cancel(CancelTarget::Quit) => return Ok(MenuChoice::Exit),
            Reply::Cancel(CancelTarget::Menu) => print_menu(),
            Reply::Text(text) => match parse_menu_choice(&text) {
                Some(choice) => return Ok(choice),
                None => println!("{}", "Please enter 1, 2 or 3.".yellow()),
            },
        }
    }
}

pub(super) async fn read_positive(
    prompt: &LinePrompt,
    label: &str,
    default: Option<u32>,
) -> Result<SetupOutcome<u32>, InputError> {
    loop {
        match prompt.ask(label).await? {
            Reply::Cancel(target) => return Ok(SetupOutcome::Cancelled(target)),
            Reply::Text(text) => match parse_positive(&text).or(default.filter(|_| text.is_empty())) {
                Some(n) => return Ok(SetupOutcome::Ready(n)),
                None => println!("{}", "Please enter a whole number above zero.".yellow()),
            },
        }
    }
}

/// Ask for `count` names; blank names become "Player N", repeats are refused
///
/// Only `/menu` and `/quit` leave a name prompt.
pub(super) async fn read_names(
    prompt: &LinePrompt,
    count: u32,
) -> Result<SetupOutcome<Vec<String>>, InputError> {
    let mut names: Vec<String> = Vec::new();
    for number in 1..=count {
        loop {
            let label = format!("Name for player {number}:");
            let name = match prompt.ask_name(&label).await? {
                Reply::Cancel(target) => return Ok(SetupOutcome::Cancelled(target)),
                Reply::Text(text) if text.is_empty() => format!("Player {number}"),
                Reply::Text(text) => text,
            };
            if names.iter().any(|taken| taken == &name) {
                println!(
                    "{}",
                    format!("{name} is already playing. Pick another name.").yellow()
                );
                continue;
            }
            names.push(name);
            break;
        }
    }
    Ok(SetupOutcome::Ready(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(lines: &str) -> LinePrompt {
        LinePrompt::from_reader(Cursor::new(lines.as_bytes().to_vec()))
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1"), Some(MenuChoice::NewGame));
        assert_eq!(parse_menu_choice(" Solo "), Some(MenuChoice::UnlimitedSolo));
        assert_eq!(parse_menu_choice("3"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("4"), None);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("3"), Some(3));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-2"), None);
        assert_eq!(parse_positive("many"), None);
    }

    #[tokio::test]
    async fn test_menu_retries_and_treats_eof_as_exit() {
        let p = prompt("9\n2\n");
        assert_eq!(read_menu_choice(&p).await, Ok(MenuChoice::UnlimitedSolo));
        assert_eq!(read_menu_choice(&p).await, Ok(MenuChoice::Exit));
    }

    #[tokio::test]
    async fn test_read_positive_uses_default_on_blank() {
        let p = prompt("\nzero\n0\n5\n");
        assert_eq!(
            read_positive(&p, "Rounds:", Some(3)).await,
            Ok(SetupOutcome::Ready(3))
        );
        assert_eq!(
            read_positive(&p, "Rounds:", Some(3)).await,
            Ok(SetupOutcome::Ready(5))
        );
    }

    #[tokio::test]
    async fn test_read_names_defaults_and_rejects_duplicates() {
        let p = prompt("Ada\nAda\n\n");
        assert_eq!(
            read_names(&p, 2).await,
            Ok(SetupOutcome::Ready(vec!["Ada".into(), "Player 2".into()]))
        );
    }

    #[tokio::test]
    async fn test_read_names_can_be_cancelled() {
        let p = prompt("Ada\n/menu\n");
        assert_eq!(
            read_names(&p, 3).await,
            Ok(SetupOutcome::Cancelled(CancelTarget::Menu))
        );
    }

    #[tokio::test]
    async fn test_read_names_accepts_command_words() {
        let p = prompt("Q\nMenu\nBack\nExit\n");
        assert_eq!(
            read_names(&p, 4).await,
            Ok(SetupOutcome::Ready(vec![
                "Q".into(),
                "Menu".into(),
                "Back".into(),
                "Exit".into()
            ]))
        );
    }
}
