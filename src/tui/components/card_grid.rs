//! # Card Grid Component
//!
//! Renders the current result list as rows of four cards. The highlighted
//! card is what Enter opens when the query is empty.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::types::Character;
use crate::tui::component::Component;

/// Cards per row, matching the size of a random grid fetch.
pub const GRID_COLUMNS: usize = 4;

const CARD_HEIGHT: u16 = 6;

pub struct CardGrid<'a> {
    characters: &'a [Character],
    cursor: usize,
}

impl<'a> CardGrid<'a> {
    pub fn new(characters: &'a [Character], cursor: usize) -> Self {
        Self { characters, cursor }
    }

    fn card<'c>(character: &'c Character, highlighted: bool) -> Paragraph<'c> {
        let border_style = if highlighted {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines = vec![
            Line::styled(
                character.biography.full_name.as_str(),
                Style::default().fg(Color::Gray),
            ),
            Line::styled(
                character.appearance.race.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                character.image_url(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ),
        ];

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(character.name.as_str())
                    .border_style(border_style)
                    .title_style(border_style),
            )
            .wrap(Wrap { trim: true })
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.characters.is_empty() {
            let empty = Paragraph::new("No characters to show")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, area);
            return;
        }

        let row_count = self.characters.len().div_ceil(GRID_COLUMNS);
        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); row_count])
            .split(area);

        for (row_index, row_area) in rows.iter().enumerate() {
            let columns =
                Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .split(*row_area);

            for column_index in 0..GRID_COLUMNS {
                let index = row_index * GRID_COLUMNS + column_index;
                let Some(character) = self.characters.get(index) else {
                    break;
                };
                let card = Self::card(character, index == self.cursor);
                frame.render_widget(card, columns[column_index]);
            }
        }
    }
}
