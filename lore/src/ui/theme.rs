//! Color theme and styling for the chat TUI

use ratatui::style::{Color, Modifier, Style};

/// Chat UI color theme
#[derive(Debug, Clone)]
pub struct ChatTheme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Text colors
    pub user_text: Color,
    pub agent_text: Color,
    pub system_text: Color,
}

impl Default for ChatTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            user_text: Color::Green,
            agent_text: Color::White,
            system_text: Color::DarkGray,
        }
    }
}

impl ChatTheme {
    /// Get style for user questions
    pub fn user_style(&self) -> Style {
        Style::default()
            .fg(self.user_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get style for agent answers
    pub fn agent_style(&self) -> Style {
        Style::default().fg(self.agent_text)
    }

    /// Get style for system messages
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}
