//! Turn result overlay

use kingdom_domain::TurnResult;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct ResultWidget<'a> {
    result: &'a TurnResult,
}

impl<'a> ResultWidget<'a> {
    pub fn new(result: &'a TurnResult) -> Self {
        Self { result }
    }
}

impl<'a> Widget for ResultWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let result = self.result;
        let (title, color) = if result.correct {
            ("Correct answer!", Color::Green)
        } else {
            ("Incorrect answer", Color::Red)
        };

        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if result.correct {
            let unit = if result.points_awarded == 1 { "point" } else { "points" };
            lines.push(Line::from(format!(
                "{} earns {} {}",
                result.player, result.points_awarded, unit
            )));
        } else {
            lines.push(Line::from(format!(
                "The correct answer was: {}",
                result.correct_answer
            )));
        }
        lines.push(Line::from(format!("Total: {}", result.total_score)));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
