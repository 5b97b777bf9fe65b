//! Render orchestration for the chat TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode};
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{HotkeyBarWidget, InputWidget, StatusBarWidget, TranscriptWidget};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    // Title bar
    render_title_bar(frame, app, layout.title_area);

    // Transcript panel
    let transcript_widget = TranscriptWidget::new(app.session.transcript(), &app.theme)
        .scroll(app.transcript_scroll)
        .focused(app.input_mode == InputMode::Normal);
    frame.render_widget(transcript_widget, layout.transcript_area);

    // Status bar
    let status_widget = StatusBarWidget::new(
        app.input_mode,
        app.answered_count(),
        app.session.store().len(),
        &app.theme,
    )
    .message(app.status_message());
    frame.render_widget(status_widget, layout.status_bar);

    // Hotkey bar
    frame.render_widget(
        HotkeyBarWidget::new(app.input_mode, &app.theme),
        layout.hotkey_bar,
    );

    // Input area
    render_input(frame, app, layout.input_area);

    // Render overlay if present
    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Institutional Memory Agent | {} known questions ",
        app.session.store().len()
    );

    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the input area
fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = matches!(app.input_mode, InputMode::Insert | InputMode::Command);
    let buffer = app.input_buffer();

    // The ':' sigil lives in the app's buffer (command dispatch needs it);
    // for display it becomes the prompt instead.
    let input_widget = match app.input_mode {
        InputMode::Command => InputWidget::new(buffer.strip_prefix(':').unwrap_or(buffer), &app.theme)
            .prompt(":")
            .cursor(app.cursor_position().saturating_sub(1)),
        _ => InputWidget::new(buffer, &app.theme)
            .cursor(app.cursor_position())
            .placeholder("Ask about the ML platform..."),
    };

    frame.render_widget(input_widget.active(is_active), area);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: &Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(48, 18, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Institutional Memory Agent - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Input Modes:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  i       Enter INSERT mode (type a question)"),
        Line::from("  :       Enter COMMAND mode"),
        Line::from("  Esc     Return to NORMAL mode"),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation (NORMAL mode):",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  j/k or ↑/↓     Scroll up/down"),
        Line::from("  Ctrl+u/d       Scroll by half page"),
        Line::from("  g/G            Jump to top/bottom"),
        Line::from("  Mouse wheel    Scroll transcript"),
        Line::from(""),
        Line::from(Span::styled(
            "Commands:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  :q      Quit"),
        Line::from("  :new    Start a new conversation"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
