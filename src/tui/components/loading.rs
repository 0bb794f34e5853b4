//! # Loading Screen Component
//!
//! Full-screen spinner shown while the initial random grid is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingScreen {
    spinner_frame: usize,
}

impl LoadingScreen {
    pub fn new(spinner_frame: usize) -> Self {
        Self { spinner_frame }
    }

    pub fn spinner(frame: usize) -> &'static str {
        SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
    }
}

impl Component for LoadingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = Self::spinner(self.spinner_frame);

        let lines = vec![
            Line::from(Span::styled(
                "Herodex",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{spinner} Loading..."),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps_around() {
        assert_eq!(LoadingScreen::spinner(0), SPINNER_FRAMES[0]);
        assert_eq!(
            LoadingScreen::spinner(SPINNER_FRAMES.len()),
            SPINNER_FRAMES[0]
        );
        assert_eq!(LoadingScreen::spinner(3), SPINNER_FRAMES[3]);
    }
}
