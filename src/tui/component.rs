use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data via props (struct fields) and render into
/// a `Frame` within a given `Rect`. `render` takes `&mut self` so a
/// component can update internal presentation state during the render pass,
/// in line with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
