//! CLI command definitions

use clap::{Parser, ValueEnum};
use kingdom_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for the final ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Ranking lines and the winner message
    Text,
    /// JSON document with rank entries and winners
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for culture-kingdom
#[derive(Parser, Debug)]
#[command(name = "culture-kingdom")]
#[command(author, version, about = "Culture Kingdom - a multiplayer trivia game")]
#[command(long_about = r#"
Culture Kingdom is a trivia game for one or more players.

Each round, every player picks a difficulty and answers one multiple-choice
question. Correct answers score 1 (easy), 2 (medium) or 3 (hard) points.
After the last round the players are ranked; tied players share a rank.

Questions come from the Open Trivia Database.

Configuration files are loaded from (in priority order):
1. KINGDOM_* environment variables
2. --config <path>     Explicit config file
3. ./kingdom.toml      Project-level config
4. ~/.config/culture-kingdom/config.toml   Global config

Example:
  culture-kingdom                          Full-screen game with menus
  culture-kingdom --console                Line-based game in the terminal
  culture-kingdom --console -p Ada -p Alan -r 5
  culture-kingdom --console --unlimited -p Ada
"#)]
pub struct Cli {
    /// Play in the line-based console instead of the full-screen UI
    #[arg(long)]
    pub console: bool,

    /// Player names (can be specified multiple times); skips the setup prompts
    #[arg(short, long = "player", value_name = "NAME")]
    pub players: Vec<String>,

    /// Number of rounds
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,

    /// Solo game that continues until you quit
    #[arg(long, conflicts_with = "rounds")]
    pub unlimited: bool,

    /// Final ranking format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Override the trivia API endpoint
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Append a JSONL transcript of every game to this file
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress spinners and banners
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_players_and_rounds() {
        let cli = Cli::parse_from([
            "culture-kingdom",
            "--console",
            "-p",
            "Ada",
            "--player",
            "Alan",
            "-r",
            "4",
            "-o",
            "json",
        ]);
        assert!(cli.console);
        assert_eq!(cli.players, vec!["Ada", "Alan"]);
        assert_eq!(cli.rounds, Some(4));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(Cli::try_parse_from(["culture-kingdom", "-r", "0"]).is_err());
    }

    #[test]
    fn test_unlimited_conflicts_with_rounds() {
        assert!(Cli::try_parse_from(["culture-kingdom", "--unlimited", "-r", "2"]).is_err());
        let cli = Cli::parse_from(["culture-kingdom", "--unlimited", "-vv"]);
        assert!(cli.unlimited);
        assert_eq!(cli.verbose, 2);
    }
}
