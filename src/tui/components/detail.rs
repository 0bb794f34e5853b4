//! # Character Detail Component
//!
//! Biography and appearance tables plus one gauge per power stat, mirroring
//! the sections of the character record.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph, Row, Table, Wrap};

use crate::api::types::{Character, stat_value};
use crate::tui::component::Component;

pub struct CharacterDetail<'a> {
    character: &'a Character,
}

impl<'a> CharacterDetail<'a> {
    pub fn new(character: &'a Character) -> Self {
        Self { character }
    }

    fn gauge_color(value: u16) -> Color {
        match value {
            0..=33 => Color::Red,
            34..=66 => Color::Yellow,
            _ => Color::Green,
        }
    }
}

impl Component for CharacterDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let character = self.character;

        let [header_area, bio_area, appearance_area, stats_area] = Layout::vertical([
            Length(2),
            Length(5),
            Length(6),
            Min(8),
        ])
        .areas(area);

        // Header: name + portrait URL (the placeholder when the API has none)
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                character.name.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                character.image_url(),
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(header, header_area);

        let label_style = Style::default().fg(Color::Cyan);
        let widths = [Length(16), Min(0)];

        let biography = Table::new(
            vec![
                Row::new(vec![
                    Span::styled("Name:", label_style),
                    Span::raw(character.biography.full_name.as_str()),
                ]),
                Row::new(vec![
                    Span::styled("Aliases:", label_style),
                    Span::raw(character.biography.aliases.join(", ")),
                ]),
                Row::new(vec![
                    Span::styled("Place of Birth:", label_style),
                    Span::raw(character.biography.place_of_birth.as_str()),
                ]),
            ],
            widths,
        )
        .block(Block::bordered().title("Biography"));
        frame.render_widget(biography, bio_area);

        let appearance = Table::new(
            vec![
                Row::new(vec![
                    Span::styled("Gender:", label_style),
                    Span::raw(character.appearance.gender.as_str()),
                ]),
                Row::new(vec![
                    Span::styled("Race:", label_style),
                    Span::raw(character.appearance.race.as_str()),
                ]),
                Row::new(vec![
                    Span::styled("Height:", label_style),
                    Span::raw(character.appearance.metric_height()),
                ]),
                Row::new(vec![
                    Span::styled("Weight:", label_style),
                    Span::raw(character.appearance.metric_weight()),
                ]),
            ],
            widths,
        )
        .block(Block::bordered().title("Appearance"));
        frame.render_widget(appearance, appearance_area);

        // One gauge row per stat
        let stats_block = Block::bordered().title("Powerstats");
        let stats_inner = stats_block.inner(stats_area);
        frame.render_widget(stats_block, stats_area);

        let stats = character.powerstats.labeled();
        let rows = Layout::vertical([Length(1); 6]).split(stats_inner);
        for ((label, raw), row_area) in stats.iter().zip(rows.iter()) {
            let [label_area, gauge_area] =
                Layout::horizontal([Length(14), Min(10)]).areas(*row_area);

            frame.render_widget(
                Paragraph::new(*label).style(label_style).wrap(Wrap { trim: true }),
                label_area,
            );

            let value = stat_value(raw);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Self::gauge_color(value)))
                .ratio(f64::from(value) / 100.0)
                .label(format!("{value}"));
            frame.render_widget(gauge, gauge_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_character;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_gauge_color_bands() {
        assert_eq!(CharacterDetail::gauge_color(0), Color::Red);
        assert_eq!(CharacterDetail::gauge_color(33), Color::Red);
        assert_eq!(CharacterDetail::gauge_color(34), Color::Yellow);
        assert_eq!(CharacterDetail::gauge_color(66), Color::Yellow);
        assert_eq!(CharacterDetail::gauge_color(67), Color::Green);
        assert_eq!(CharacterDetail::gauge_color(100), Color::Green);
    }

    #[test]
    fn test_renders_full_character() {
        let character = sample_character(70, "Batman");
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut detail = CharacterDetail::new(&character);
                detail.render(f, f.area());
            })
            .unwrap();
    }

    #[test]
    fn test_renders_sparse_character() {
        // All-default character: empty strings, no image, "null"-free stats
        let character = Character::default();
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut detail = CharacterDetail::new(&character);
                detail.render(f, f.area());
            })
            .unwrap();
    }
}
