//! Console implementation of the GamePresenter port

use crate::output::console::ConsoleFormatter;
use crate::progress::FetchSpinner;
use colored::Colorize;
use kingdom_application::GamePresenter;
use kingdom_domain::{
    CancelTarget, Difficulty, OutputFormat, Question, RoundLimit, Standings, TurnResult,
    join_names,
};

/// Prints game progress to stdout
pub struct ConsolePresenter {
    spinner: FetchSpinner,
    format: OutputFormat,
}

impl ConsolePresenter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        let spinner = if quiet {
            FetchSpinner::disabled()
        } else {
            FetchSpinner::new()
        };
        Self { spinner, format }
    }

    pub fn round_title(round: u32, limit: RoundLimit) -> String {
        match limit {
            RoundLimit::Fixed(total) => format!("Round {round} of {total}"),
            RoundLimit::Unlimited => format!("Round {round}"),
        }
    }
}

impl GamePresenter for ConsolePresenter {
    fn on_game_started(&self, players: &[String], limit: RoundLimit) {
        println!();
        println!("{}", ConsoleFormatter::header("New Game"));
        println!("Players: {}", join_names(players).bold());
        match limit {
            RoundLimit::Fixed(total) => println!("Rounds:  {total}"),
            RoundLimit::Unlimited => println!("Rounds:  unlimited (type quit or menu to stop)"),
        }
    }

    fn on_round_started(&self, round: u32, limit: RoundLimit) {
        println!("{}", ConsoleFormatter::section_header(&Self::round_title(round, limit)));
    }

    fn on_fetching_question(&self, player: &str, difficulty: Difficulty) {
        self.spinner
            .start(format!("Fetching a {difficulty} question for {player}..."));
    }

    fn on_question_ready(&self, player: &str, question: &Question) {
        self.spinner.stop();
        print!("{}", ConsoleFormatter::format_question(player, question));
    }

    fn on_fetch_failed(&self, _player: &str, _reason: &str) {
        self.spinner.stop();
    }

    fn on_turn_result(&self, result: &TurnResult) {
        println!("{}", ConsoleFormatter::format_turn_result(result));
    }

    fn on_final_ranking(&self, standings: &Standings) {
        println!();
        println!("{}", ConsoleFormatter::format(standings, self.format));
    }

    fn on_game_aborted(&self, target: CancelTarget) {
        self.spinner.stop();
        match target {
            CancelTarget::Menu => println!("{}", "Game abandoned. Back to the main menu.".yellow()),
            CancelTarget::Quit => println!("{}", "Goodbye!".cyan()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_stops_spinner() {
        let presenter = ConsolePresenter::new(OutputFormat::Text, false);
        presenter.on_fetching_question("Ada", Difficulty::Hard);
        assert!(presenter.spinner.is_running());

        presenter.on_fetch_failed("Ada", "Trivia service unavailable");
        assert!(!presenter.spinner.is_running());
    }

    #[test]
    fn test_round_title() {
        assert_eq!(
            ConsolePresenter::round_title(2, RoundLimit::Fixed(5)),
            "Round 2 of 5"
        );
        assert_eq!(
            ConsolePresenter::round_title(7, RoundLimit::Unlimited),
            "Round 7"
        );
    }
}
