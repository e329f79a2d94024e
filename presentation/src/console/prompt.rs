//! Blocking line reader shared by every console prompt

use colored::Colorize;
use kingdom_application::InputError;
use kingdom_domain::CancelTarget;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Arc, Mutex};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Cancel(CancelTarget),
}

/// Classify a trimmed line: navigation commands or plain text
pub fn parse_reply(line: &str) -> Reply {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "menu" | "back" => Reply::Cancel(CancelTarget::Menu),
        "quit" | "exit" | "q" => Reply::Cancel(CancelTarget::Quit),
        _ => parse_name_reply(line),
    }
}

/// Free-text variant of [`parse_reply`] for name prompts
///
/// Only the slash forms (`/menu`, `/back`, `/quit`, `/exit`) navigate, so
/// "Q" or "Menu" are valid player names.
pub fn parse_name_reply(line: &str) -> Reply {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "/menu" | "/back" => Reply::Cancel(CancelTarget::Menu),
        "/quit" | "/exit" | "/q" => Reply::Cancel(CancelTarget::Quit),
        _ => Reply::Text(line.to_string()),
    }
}

/// Prompts for lines on stdout and reads them from a shared reader
///
/// Reads happen on the blocking thread pool so a pending prompt never
/// stalls the runtime (and Ctrl+C handling keeps working).
#[derive(Clone)]
pub struct LinePrompt {
    reader: Arc<Mutex<Box<dyn BufRead + Send>>>,
}

impl LinePrompt {
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    pub fn from_reader(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            reader: Arc::new(Mutex::new(Box::new(reader))),
        }
    }

    /// Print `label` and wait for a line; end of input counts as quit
    pub async fn ask(&self, label: &str) -> Result<Reply, InputError> {
        self.ask_with(label, parse_reply).await
    }

    /// Like [`Self::ask`], but bare words are kept as text
    pub async fn ask_name(&self, label: &str) -> Result<Reply, InputError> {
        self.ask_with(label, parse_name_reply).await
    }

    async fn ask_with(&self, label: &str, parse: fn(&str) -> Reply) -> Result<Reply, InputError> {
        print!("{} ", label.magenta().bold());
        io::stdout()
            .flush()
            .map_err(|e| InputError::Io(format!("Failed to flush stdout: {}", e)))?;

        match self.read_line().await? {
            Some(line) => Ok(parse(&line)),
            None => {
                println!();
                Ok(Reply::Cancel(CancelTarget::Quit))
            }
        }
    }

    async fn read_line(&self) -> Result<Option<String>, InputError> {
        let reader = Arc::clone(&self.reader);
        tokio::task::spawn_blocking(move || {
            let mut reader = reader
                .lock()
                .map_err(|e| InputError::Io(e.to_string()))?;
            let mut line = String::new();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| InputError::Io(format!("Failed to read input: {}", e)))?;
            Ok(if read == 0 {
                None
            } else {
                Some(line.trim().to_string())
            })
        })
        .await
        .map_err(|e| InputError::Io(e.to_string()))?
    }
}
