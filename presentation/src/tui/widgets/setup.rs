//! Player setup form widget

use crate::tui::state::{SetupField, SetupForm};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct SetupWidget<'a> {
    form: &'a SetupForm,
}

impl<'a> SetupWidget<'a> {
    pub fn new(form: &'a SetupForm) -> Self {
        Self { form }
    }

    fn field_line(&self, label: String, value: &str, placeholder: &str, focused: bool) -> Line<'a> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let value_span = if value.is_empty() {
            Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value.to_string())
        };
        let cursor = if focused { "█" } else { "" };

        Line::from(vec![
            Span::styled(if focused { "▶ " } else { "  " }, label_style),
            Span::styled(format!("{label:<10}"), label_style),
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    }
}

impl<'a> Widget for SetupWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from("")];

        for (i, name) in self.form.names.iter().enumerate() {
            let placeholder = format!("Player {}", i + 1);
            lines.push(self.field_line(
                format!("Player {}", i + 1),
                name,
                &placeholder,
                self.form.focus == SetupField::Name(i),
            ));
        }

        if self.form.solo {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Rounds continue until you leave the game.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.push(Line::from(""));
            lines.push(self.field_line(
                "Rounds".into(),
                &self.form.rounds,
                "",
                self.form.focus == SetupField::Rounds,
            ));
        }

        if let Some(error) = &self.form.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        let title = if self.form.solo {
            " Unlimited Solo Game "
        } else {
            " New Game "
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
