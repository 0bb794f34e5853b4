//! # Search Bar Component
//!
//! Single-line query input with the key hints in the border title.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct SearchBar<'a> {
    query: &'a str,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }
}

impl Component for SearchBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(self.query),
            // Block cursor at the insertion point
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ]);

        let input = Paragraph::new(line).block(
            Block::bordered()
                .title("Search")
                .title_bottom("Enter: search / open  Ctrl+R: random  Esc: back  Ctrl+C: quit")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(input, area);
    }
}
