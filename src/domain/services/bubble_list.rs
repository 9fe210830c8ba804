#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Author;
use crate::domain::services::Bubble;
use crate::domain::services::BubbleAlignment;
use crate::domain::services::BubbleEntry;

/// Flattens transcript entries into renderable lines at the current terminal
/// width. Rebuilt whenever the transcript changes or the window is resized.
#[derive(Default)]
pub struct BubbleList {
    lines: Vec<Line<'static>>,
    line_width: usize,
}

impl BubbleList {
    pub fn set_entries(&mut self, entries: &[BubbleEntry], line_width: usize) {
        self.line_width = line_width;
        self.lines = entries
            .iter()
            .flat_map(|entry| {
                let alignment = match entry.author {
                    Author::User => BubbleAlignment::Right,
                    Author::Wellcheck => BubbleAlignment::Left,
                };
                return Bubble::new(entry, alignment, line_width).as_lines();
            })
            .collect();
    }

    /// Appends preformatted lines, used for the result card below the
    /// transcript once an assessment completes.
    pub fn push_lines(&mut self, lines: Vec<Line<'static>>) {
        self.lines.extend(lines);
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<'_, B>, rect: Rect, scroll_index: u16) {
        frame.render_widget(
            Paragraph::new(self.lines.clone()).scroll((scroll_index, 0)),
            rect,
        );
    }
}
