//! Status bar widget: screen indicator, key hints and flash messages

use crate::tui::state::{Screen, Stage, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn indicator(&self) -> (&'static str, Color) {
        match self.state.screen {
            Screen::Menu => ("MENU", Color::Blue),
            Screen::Setup => ("SETUP", Color::Magenta),
            Screen::Playing => ("PLAY", Color::Green),
            Screen::Ranking => ("RESULT", Color::Yellow),
        }
    }

    fn hints(&self) -> &'static str {
        match self.state.screen {
            Screen::Menu => "↑/↓:select  Enter:open  1-3:shortcut  q:quit",
            Screen::Setup => "Tab:next  Ctrl+N:add player  Ctrl+D:remove  Enter:start  Esc:back",
            Screen::Playing if self.state.banner.is_some() => "any key:continue",
            Screen::Playing => match self.state.game.as_ref().map(|g| &g.stage) {
                Some(Stage::ChoosingDifficulty { .. }) => {
                    "↑/↓:select  Enter/1-3/e/m/h:choose  Esc:menu  q:quit"
                }
                Some(Stage::Answering { .. }) => "↑/↓:select  Enter/number:answer  Esc:menu  q:quit",
                _ => "Esc:menu  q:quit",
            },
            Screen::Ranking => "Enter:main menu  q:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (indicator, color) = self.indicator();
        let indicator_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        let indicator_line = Line::from(Span::styled(format!(" {} ", indicator), indicator_style));
        let indicator_width = indicator.len() as u16 + 2;
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => self.hints().to_string(),
        };
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::default();
        state.set_flash("Game abandoned");

        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&state).render(area, &mut buf);
        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();

        assert!(text.contains("MENU"));
        assert!(text.contains("Game abandoned"));
        assert!(!text.contains("q:quit"));
    }
}
