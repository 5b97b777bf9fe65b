//! Status and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::InputMode;
use crate::ui::theme::ChatTheme;

/// Status bar: input mode, exchange count, transient message
pub struct StatusBarWidget<'a> {
    input_mode: InputMode,
    answered: usize,
    entries: usize,
    theme: &'a ChatTheme,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(
        input_mode: InputMode,
        answered: usize,
        entries: usize,
        theme: &'a ChatTheme,
    ) -> Self {
        Self {
            input_mode,
            answered,
            entries,
            theme,
            message: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    fn mode_span(&self) -> Span<'static> {
        match self.input_mode {
            InputMode::Normal => Span::styled(
                " NORMAL ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            InputMode::Insert => Span::styled(
                " INSERT ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            InputMode::Command => Span::styled(
                " COMMAND ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            self.mode_span(),
            Span::raw(" "),
            Span::styled(
                format!("{} asked", self.answered),
                Style::default().fg(self.theme.foreground),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} entries", self.entries),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ];

        if let Some(message) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                message.to_string(),
                self.theme.system_style().remove_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// One-line hotkey hints, varying by input mode
pub struct HotkeyBarWidget<'a> {
    input_mode: InputMode,
    theme: &'a ChatTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(input_mode: InputMode, theme: &'a ChatTheme) -> Self {
        Self { input_mode, theme }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.input_mode {
            InputMode::Normal => "i ask  j/k scroll  g/G top/bottom  ? help  :new reset  q quit",
            InputMode::Insert => "Enter send  Esc normal  ↑/↓ history",
            InputMode::Command => "Enter run  Esc cancel  (:q :new :help)",
        };

        let line = Line::from(Span::styled(hints, self.theme.system_style()));
        Paragraph::new(line).render(area, buf);
    }
}
