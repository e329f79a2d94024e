//! Header widget: title, current screen and round

use crate::tui::state::{Screen, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn context(&self) -> String {
        match self.state.screen {
            Screen::Menu => "Main Menu".into(),
            Screen::Setup if self.state.setup.solo => "Unlimited Solo Setup".into(),
            Screen::Setup => "New Game Setup".into(),
            Screen::Playing => self
                .state
                .game
                .as_ref()
                .map(|g| g.round_label())
                .unwrap_or_else(|| "Starting".into()),
            Screen::Ranking => "Final Ranking".into(),
        }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("♛ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "Culture Kingdom",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.context(), Style::default().fg(Color::Yellow)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
