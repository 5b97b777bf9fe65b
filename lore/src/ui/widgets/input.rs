//! Input field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::ChatTheme;

/// Single-line input field with a prompt and a block cursor.
///
/// The widget renders exactly what it is given. Mode concerns stay with the
/// caller: `render.rs` picks the prompt (`> ` for questions, `:` for
/// commands), strips the command sigil from the buffer, and decides whether
/// a placeholder applies.
pub struct InputWidget<'a> {
    content: &'a str,
    cursor: usize,
    prompt: &'a str,
    placeholder: Option<&'a str>,
    theme: &'a ChatTheme,
    active: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str, theme: &'a ChatTheme) -> Self {
        Self {
            content,
            cursor: content.chars().count(),
            prompt: "> ",
            placeholder: None,
            theme,
            active: false,
        }
    }

    /// Cursor position as a character index into the content
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = prompt;
        self
    }

    /// Hint shown dimmed when the content is empty
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Split the content around the cursor on char boundaries, so any
    /// cursor position (including past the end) is safe.
    fn split_at_cursor(&self) -> (&'a str, &'a str, &'a str) {
        match self.content.char_indices().nth(self.cursor) {
            Some((start, ch)) => {
                let end = start + ch.len_utf8();
                (
                    &self.content[..start],
                    &self.content[start..end],
                    &self.content[end..],
                )
            }
            None => (self.content, "", ""),
        }
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.active));

        let inner = block.inner(area);
        block.render(area, buf);

        let prompt = Span::styled(self.prompt, self.theme.user_style());

        let line = match (self.content.is_empty(), self.placeholder) {
            (true, Some(hint)) => Line::from(vec![
                prompt,
                Span::styled(hint, Style::default().add_modifier(Modifier::DIM)),
            ]),
            _ => {
                let (before, under, after) = self.split_at_cursor();
                let cursor_style = Style::default()
                    .fg(self.theme.user_text)
                    .add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
                Line::from(vec![
                    prompt,
                    Span::raw(before),
                    // Past the end the cursor sits on a phantom space
                    Span::styled(if under.is_empty() { " " } else { under }, cursor_style),
                    Span::raw(after),
                ])
            }
        };

        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_row(widget: InputWidget) -> String {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        // Row 1 is the single line inside the border
        (0..area.width).map(|x| buf[(x, 1)].symbol()).collect()
    }

    #[test]
    fn test_renders_prompt_and_content() {
        let theme = ChatTheme::default();
        let row = render_row(InputWidget::new("hello", &theme).cursor(5));
        assert!(row.contains("> hello"));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let theme = ChatTheme::default();
        let row = render_row(InputWidget::new("", &theme).placeholder("Ask me"));
        assert!(row.contains("> Ask me"));
    }

    #[test]
    fn test_command_prompt() {
        let theme = ChatTheme::default();
        let row = render_row(InputWidget::new("quit", &theme).prompt(":").cursor(4));
        assert!(row.contains(":quit"));
    }

    #[test]
    fn test_unicode_content_survives_cursor_split() {
        let theme = ChatTheme::default();
        // Cursor in the middle of a multibyte string must not garble it.
        let row = render_row(InputWidget::new("héllo", &theme).cursor(2));
        assert!(row.contains("> héllo"));
    }

    #[test]
    fn test_split_at_cursor_past_end() {
        let theme = ChatTheme::default();
        let widget = InputWidget::new("ab", &theme).cursor(7);
        assert_eq!(widget.split_at_cursor(), ("ab", "", ""));
    }
}
