//! Console output formatter for game results

use colored::Colorize;
use kingdom_domain::{Difficulty, OutputFormat, Question, RankEntry, Standings, TurnResult};

/// Formats game results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the final ranking in the requested format
    pub fn format(standings: &Standings, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_standings(standings),
            OutputFormat::Json => Self::format_json(standings),
        }
    }

    /// Ranking table followed by the winner message
    pub fn format_standings(standings: &Standings) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Final Ranking"));
        output.push('\n');

        for entry in &standings.entries {
            output.push_str(&Self::format_entry(entry));
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&format!("{}\n", standings.winners.message().green().bold()));
        output.push_str(&Self::footer());

        output
    }

    fn format_entry(entry: &RankEntry) -> String {
        let label = format!("{:>5}", entry.ordinal());
        let label = match entry.rank {
            1 => label.yellow().bold(),
            2 | 3 => label.cyan().bold(),
            _ => label.normal(),
        };
        let unit = if entry.score == 1 { "point" } else { "points" };
        format!(
            "  {}  {} with {} {}",
            label,
            entry.players_label(),
            entry.score.to_string().bold(),
            unit
        )
    }

    /// Format as JSON
    pub fn format_json(standings: &Standings) -> String {
        serde_json::to_string_pretty(standings).unwrap_or_else(|_| "{}".to_string())
    }

    /// Question text and numbered choices
    pub fn format_question(player: &str, question: &Question) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n{} {} {}\n",
            format!("[{}]", question.category()).dimmed(),
            Self::difficulty_label(question.difficulty()),
            format!("for {player}").dimmed()
        ));
        output.push_str(&format!("{}\n\n", question.text().bold()));
        for (i, choice) in question.choices().iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", (i + 1).to_string().cyan(), choice));
        }
        output
    }

    pub fn format_turn_result(result: &TurnResult) -> String {
        if result.correct {
            let unit = if result.points_awarded == 1 { "point" } else { "points" };
            format!(
                "{} {} earns {} {}. Total: {}",
                "Correct answer!".green().bold(),
                result.player,
                result.points_awarded,
                unit,
                result.total_score
            )
        } else {
            format!(
                "{} The correct answer was: {}",
                "Incorrect answer.".red().bold(),
                result.correct_answer.yellow()
            )
        }
    }

    pub fn difficulty_label(difficulty: Difficulty) -> String {
        let label = difficulty.label();
        match difficulty {
            Difficulty::Easy => label.green().to_string(),
            Difficulty::Medium => label.yellow().to_string(),
            Difficulty::Hard => label.red().to_string(),
        }
    }

    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    pub fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_domain::{ChoiceIndex, RankingEngine, ScoreSnapshot};

    fn standings() -> Standings {
        RankingEngine::rank(&ScoreSnapshot::from_pairs([
            ("Alice", 10),
            ("Bob", 10),
            ("Carol", 1),
        ]))
        .unwrap()
    }

    #[test]
    fn test_text_lists_every_group_and_winners() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&standings(), OutputFormat::Text);
        assert!(text.contains("1st  Alice and Bob with 10 points"));
        assert!(text.contains("3rd  Carol with 1 point"));
        assert!(text.contains("Congratulations Alice and Bob! You are all joint winners!"));
    }

    #[test]
    fn test_json_round_trips() {
        let json = ConsoleFormatter::format(&standings(), OutputFormat::Json);
        let parsed: Standings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, standings());
    }

    #[test]
    fn test_turn_result_messages() {
        colored::control::set_override(false);
        let mut result = TurnResult {
            round: 1,
            player: "Ada".into(),
            difficulty: Difficulty::Hard,
            selected: ChoiceIndex::new(0),
            selected_answer: "Paris".into(),
            correct: true,
            correct_answer: "Paris".into(),
            points_awarded: 3,
            total_score: 7,
        };
        assert_eq!(
            ConsoleFormatter::format_turn_result(&result),
            "Correct answer! Ada earns 3 points. Total: 7"
        );

        result.correct = false;
        result.correct_answer = "Rome".into();
        assert_eq!(
            ConsoleFormatter::format_turn_result(&result),
            "Incorrect answer. The correct answer was: Rome"
        );
    }
}
