//! Game screen widgets: scoreboard and the current turn

use crate::tui::state::{GameView, Stage};
use kingdom_domain::Difficulty;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn highlighted(text: String, on: bool) -> Line<'static> {
    if on {
        Line::from(Span::styled(
            format!("▶ {text}"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(format!("  {text}"))
    }
}

/// Player list with live scores; the player on turn is highlighted
pub struct ScoreboardWidget<'a> {
    game: &'a GameView,
}

impl<'a> ScoreboardWidget<'a> {
    pub fn new(game: &'a GameView) -> Self {
        Self { game }
    }
}

impl<'a> Widget for ScoreboardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let current = self.game.current_player.as_deref();
        let mut lines: Vec<Line> = self
            .game
            .players
            .iter()
            .zip(&self.game.scores)
            .map(|(player, score)| {
                let style = if Some(player.as_str()) == current {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{player:<14}"), style),
                    Span::styled(format!("{score:>4}"), style),
                ])
            })
            .collect();

        if !self.game.last_results.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Recent turns",
                Style::default().fg(Color::DarkGray),
            )));
            for result in self.game.last_results.iter().rev() {
                let (mark, color) = if result.correct {
                    ("✓", Color::Green)
                } else {
                    ("✗", Color::Red)
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{mark} "), Style::default().fg(color)),
                    Span::raw(format!("{} +{}", result.player, result.points_awarded)),
                ]));
            }
        }

        let block = Block::default().borders(Borders::ALL).title(" Scores ");
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Difficulty picker, fetch notice or the question with its choices
pub struct TurnWidget<'a> {
    game: &'a GameView,
}

impl<'a> TurnWidget<'a> {
    pub fn new(game: &'a GameView) -> Self {
        Self { game }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let player = self.game.current_player.clone().unwrap_or_default();
        match &self.game.stage {
            Stage::Idle => vec![Line::from(Span::styled(
                "Waiting…",
                Style::default().fg(Color::DarkGray),
            ))],
            Stage::ChoosingDifficulty { selected } => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("{player}, choose a difficulty"),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                ];
                for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
                    let points = difficulty.points();
                    let unit = if points == 1 { "point" } else { "points" };
                    lines.push(highlighted(
                        format!("{}. {} ({} {})", i + 1, difficulty.label(), points, unit),
                        i == *selected,
                    ));
                }
                lines
            }
            Stage::Fetching { difficulty } => vec![Line::from(vec![
                Span::raw("Fetching a "),
                Span::styled(
                    difficulty.as_str().to_string(),
                    Style::default().fg(difficulty_color(*difficulty)),
                ),
                Span::raw(format!(" question for {player}…")),
            ])],
            Stage::Answering { question, selected } => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            format!("[{}] ", question.category()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            question.difficulty().label().to_string(),
                            Style::default().fg(difficulty_color(question.difficulty())),
                        ),
                        Span::styled(
                            format!(" for {player}"),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        question.text().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                ];
                for (i, choice) in question.choices().iter().enumerate() {
                    lines.push(highlighted(format!("{}. {}", i + 1, choice), i == *selected));
                }
                lines
            }
        }
    }
}

impl<'a> Widget for TurnWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.game.round_label()));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
