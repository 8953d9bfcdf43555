use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::picker::Picker;

const INPUT_PREFIX: &str = " \u{203a} "; // ›
const HELP_TEXT: &str =
    " Tab: complete  Up/Down: highlight  Enter: accept  Ctrl+W: up one level  Esc: cancel";

/// A trait for UI components that enforces a standard rendering interface.
trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Dropdown of directory suggestions, anchored to the bottom of its area so
/// it sits directly above the input.
struct SuggestionList<'a> {
    selected_index: Option<usize>,
    suggestions: &'a [String],
}

impl Component for SuggestionList<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let rows = if self.suggestions.is_empty() {
            vec![Line::from(Span::styled(
                "  No matching directories",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.suggestions
                .iter()
                .enumerate()
                .map(|(index, suggestion)| {
                    let is_selected = Some(index) == self.selected_index;
                    let marker = if is_selected { ">" } else { " " };
                    let style = if is_selected {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };

                    Line::from(Span::styled(format!("{marker} {suggestion}"), style))
                })
                .collect::<Vec<_>>()
        };

        let list_height = u16::try_from(rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let sections = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(list_height)])
            .split(area);

        let dropdown = Paragraph::new(rows).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(" Suggestions ", Style::default().fg(Color::Cyan))),
        );

        f.render_widget(Clear, sections[1]);
        f.render_widget(dropdown, sections[1]);
    }
}

/// Single-line path prompt with a terminal cursor.
struct PathInput<'a> {
    text: &'a str,
    text_before_cursor: &'a str,
}

impl Component for PathInput<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(" Path ", Style::default().fg(Color::Cyan)));
        let line = Line::from(vec![
            Span::styled(
                INPUT_PREFIX,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.text),
        ]);

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(line).block(block), area);

        let cursor_column = INPUT_PREFIX.width() + self.text_before_cursor.width();
        let cursor_x = u16::try_from(cursor_column)
            .unwrap_or(u16::MAX)
            .min(area.width.saturating_sub(2));
        f.set_cursor_position((
            area.x.saturating_add(1).saturating_add(cursor_x),
            area.y.saturating_add(1),
        ));
    }
}

/// Renders the picker: suggestions above the input, key help at the bottom.
pub(crate) fn render(f: &mut Frame, picker: &Picker<'_>) {
    let sections = Layout::default()
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let session = picker.session();
    SuggestionList {
        selected_index: session.selected_index(),
        suggestions: session.visible(),
    }
    .render(f, sections[0]);

    let input = picker.input();
    PathInput {
        text: input.text(),
        text_before_cursor: input.text_before_cursor(),
    }
    .render(f, sections[1]);

    let help = Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)));
    f.render_widget(help, sections[2]);
}
