#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

/// One transcript item ready for rendering: who said it, what they said, and
/// whether it is in a failed/error state (failed optimistic answers and
/// service error notices render with red borders).
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleEntry {
    pub author: Author,
    pub text: String,
    pub error: bool,
}

impl BubbleEntry {
    pub fn new(author: Author, text: &str) -> BubbleEntry {
        return BubbleEntry {
            author,
            text: text.to_string().replace('\t', "  "),
            error: false,
        };
    }

    pub fn error(author: Author, text: &str) -> BubbleEntry {
        let mut entry = BubbleEntry::new(author, text);
        entry.error = true;
        return entry;
    }
}

pub struct Bubble<'a> {
    entry: &'a BubbleEntry,
    alignment: BubbleAlignment,
    window_max_width: usize,
}

// "│ " on the left plus " │" on the right.
const BUBBLE_PADDING: usize = 4;
// Border elements plus room for the scrollbar.
const BORDER_ELEMENTS_LENGTH: usize = 5;
const OUTER_PADDING_PERCENTAGE: f32 = 0.04;

impl<'a> Bubble<'a> {
    pub fn new(entry: &'a BubbleEntry, alignment: BubbleAlignment, window_max_width: usize) -> Bubble<'a> {
        return Bubble {
            entry,
            alignment,
            window_max_width,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.max_line_length();
        let mut lines: Vec<Line> = vec![];

        for text_line in self.wrapped_text(max_line_length) {
            let fill = " ".repeat(max_line_length.saturating_sub(text_line.chars().count()));
            let formatted_length = text_line.chars().count() + fill.chars().count() + BUBBLE_PADDING;
            let outer_padding =
                " ".repeat(self.window_max_width.saturating_sub(formatted_length));

            let mut spans = vec![
                self.highlight_span("│ ".to_string()),
                Span::from(text_line),
                self.highlight_span(format!("{fill} │")),
            ];

            if self.alignment == BubbleAlignment::Left {
                spans.push(Span::from(outer_padding));
            } else {
                spans.insert(0, Span::from(outer_padding));
            }

            lines.push(Line::from(spans));
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn wrapped_text(&self, max_line_length: usize) -> Vec<String> {
        let mut lines: Vec<String> = vec![];

        for full_line in self.entry.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut width = 0;
            let mut current_line: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                let separator = usize::from(!current_line.is_empty());
                if width + separator + word.chars().count() > max_line_length
                    && !current_line.is_empty()
                {
                    lines.push(current_line.join(" "));
                    current_line = vec![word];
                    width = word.chars().count();
                } else {
                    current_line.push(word);
                    width += separator + word.chars().count();
                }
            }
            if !current_line.is_empty() {
                lines.push(current_line.join(" "));
            }
        }

        return lines;
    }

    fn max_line_length(&self) -> usize {
        // Keep a minimum padding on the bubble's outer side.
        let min_padding_length =
            ((self.window_max_width as f32 * OUTER_PADDING_PERCENTAGE).ceil()) as usize;
        let line_border_width = BORDER_ELEMENTS_LENGTH + min_padding_length;

        let mut max_line_length = self
            .entry
            .text
            .lines()
            .map(|line| return line.chars().count())
            .max()
            .unwrap_or(1);

        let widest = self.window_max_width.saturating_sub(line_border_width).max(1);
        if max_line_length > widest {
            max_line_length = widest;
        }

        let username = self.entry.author.to_string();
        if max_line_length < username.chars().count() {
            max_line_length = username.chars().count();
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        // Add 2 for the vertical bars.
        let inner_bar = ["─"].repeat(max_line_length + 2).join("");
        let mut top_bar = format!("╭{inner_bar}╮");
        let bottom_bar = format!("╰{inner_bar}╯");
        let bar_padding = " ".repeat(
            self.window_max_width
                .saturating_sub(max_line_length + BUBBLE_PADDING),
        );

        let username = self.entry.author.to_string();
        let top_replace = ["─"].repeat(username.chars().count()).join("");
        top_bar = top_bar.replacen(
            format!("╭{top_replace}").as_str(),
            format!("╭{username}").as_str(),
            1,
        );

        let mut res = vec![];
        if self.alignment == BubbleAlignment::Left {
            res.push(self.highlight_line(format!("{top_bar}{bar_padding}")));
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_padding}")));
        } else {
            res.push(self.highlight_line(format!("{bar_padding}{top_bar}")));
            res.extend(lines);
            res.push(self.highlight_line(format!("{bar_padding}{bottom_bar}")));
        }

        return res;
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.entry.error {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_line(&self, text: String) -> Line<'static> {
        return Line::from(self.highlight_span(text));
    }
}
