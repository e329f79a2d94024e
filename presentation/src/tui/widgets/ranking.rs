//! Final ranking widget

use kingdom_domain::Standings;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct RankingWidget<'a> {
    standings: &'a Standings,
}

impl<'a> RankingWidget<'a> {
    pub fn new(standings: &'a Standings) -> Self {
        Self { standings }
    }
}

impl<'a> Widget for RankingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from("")];

        for entry in &self.standings.entries {
            let color = match entry.rank {
                1 => Color::Yellow,
                2 | 3 => Color::Cyan,
                _ => Color::White,
            };
            let unit = if entry.score == 1 { "point" } else { "points" };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>5}  ", entry.ordinal()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{} with {} {}", entry.players_label(), entry.score, unit)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.standings.winners.message(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter: main menu   q: quit",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Final Ranking ");
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_domain::{RankingEngine, ScoreSnapshot};

    #[test]
    fn test_ranking_shows_ties_and_joint_winners() {
        let standings = RankingEngine::rank(&ScoreSnapshot::from_pairs([
            ("Alice", 10),
            ("Bob", 10),
            ("Carol", 8),
        ]))
        .unwrap();

        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        RankingWidget::new(&standings).render(area, &mut buf);
        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();

        assert!(text.contains("1st"));
        assert!(text.contains("Alice and Bob with 10 points"));
        assert!(text.contains("3rd"));
        assert!(text.contains("joint winners"));
    }
}
