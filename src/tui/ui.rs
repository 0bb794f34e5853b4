use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardGrid, CharacterDetail, LoadingScreen, SearchBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    if app.is_loading {
        LoadingScreen::new(spinner_frame).render(frame, frame.area());
        return;
    }

    if app.rate_limited {
        draw_rate_limited(frame);
        return;
    }

    if let Some(character) = &app.selected {
        let layout = Layout::vertical([Min(0), Length(1)]);
        let [detail_area, status_area] = layout.areas(frame.area());
        CharacterDetail::new(character).render(frame, detail_area);
        draw_status_line(frame, status_area, app, "Esc: back  Ctrl+R: random  Ctrl+C: quit");
        return;
    }

    // Browsing: search bar, card grid, status line
    let layout = Layout::vertical([Length(3), Min(0), Length(1)]);
    let [search_area, grid_area, status_area] = layout.areas(frame.area());

    SearchBar::new(&app.query).render(frame, search_area);
    CardGrid::new(&app.results, tui.cursor).render(frame, grid_area);
    draw_status_line(frame, status_area, app, "");
}

fn draw_rate_limited(frame: &mut Frame) {
    use Constraint::Length;

    let lines = vec![
        Line::from(Span::styled(
            "Too many requests",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("The character API reported a quota error."),
        Line::from("Please try again later."),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: back to browsing",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let [centered] = Layout::vertical([Length(lines.len() as u16 + 2)])
        .flex(Flex::Center)
        .areas(frame.area());

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::Red)));
    frame.render_widget(paragraph, centered);
}

fn draw_status_line(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    app: &App,
    hints: &str,
) {
    let text = if hints.is_empty() {
        format!("Herodex | {}", app.status_message)
    } else {
        format!("Herodex | {} | {}", app.status_message, hints)
    };
    frame.render_widget(
        Span::styled(text, Style::default().fg(Color::DarkGray)),
        area,
    );
}
