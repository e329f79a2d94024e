//! Main menu widget

use crate::tui::state::{MenuItem, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct MenuWidget<'a> {
    state: &'a TuiState,
}

impl<'a> MenuWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for MenuWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to Culture Kingdom",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Easy 1 point · Medium 2 points · Hard 3 points",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        let selected = self.state.selected_menu_item();
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let text = format!("{}. {}", i + 1, item.label());
            let line = if *item == selected {
                Line::from(Span::styled(
                    format!("▶ {text} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(format!("  {text} ")))
            };
            lines.push(line);
        }

        let block = Block::default().borders(Borders::ALL).title(" Menu ");
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
