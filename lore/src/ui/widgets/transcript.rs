//! Transcript display widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget, Wrap,
    },
};

use lore_core::{Role, Turn};

use crate::ui::theme::ChatTheme;

/// Widget for displaying the conversation transcript
pub struct TranscriptWidget<'a> {
    turns: &'a [Turn],
    scroll: usize,
    theme: &'a ChatTheme,
    focused: bool,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(turns: &'a [Turn], theme: &'a ChatTheme) -> Self {
        Self {
            turns,
            scroll: 0,
            theme,
            focused: false,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn style_for_role(&self, role: Role) -> Style {
        match role {
            Role::User => self.theme.user_style(),
            Role::Assistant => self.theme.agent_style(),
        }
    }
}

impl Widget for TranscriptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Build title with scroll hint
        let title = if self.focused {
            " Conversation [j/k scroll] "
        } else {
            " Conversation "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        // Build lines from turns
        let mut lines: Vec<Line> = Vec::new();

        for turn in self.turns {
            let style = self.style_for_role(turn.role);

            // User questions get a prompt prefix
            let prefix = match turn.role {
                Role::User => "> ",
                Role::Assistant => "",
            };

            let text = format!("{}{}", prefix, turn.text);

            for line in text.lines() {
                lines.push(Line::from(Span::styled(line.to_string(), style)));
            }

            // Add blank line between turns
            lines.push(Line::from(""));
        }

        // Calculate scroll position
        let visible_height = inner.height as usize;
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .wrap(Wrap { trim: false });

        paragraph.render(inner, buf);

        // Render scrollbar if content exceeds visible area
        if total_lines > visible_height {
            let scrollbar_area = Rect {
                x: inner.x + inner.width.saturating_sub(1),
                y: inner.y,
                width: 1,
                height: inner.height,
            };

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .thumb_style(Style::default().fg(Color::DarkGray))
                .track_style(Style::default().fg(Color::Black))
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);

            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);

            // Hint at bottom if more content below
            if scroll < max_scroll {
                let remaining = max_scroll - scroll;
                let hint = format!(" ↓{remaining} more ");
                let hint_x = inner.x;
                let hint_y = inner.y + inner.height.saturating_sub(1);
                let hint_style = Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM);
                for (i, ch) in hint.chars().enumerate() {
                    let x = hint_x + (i as u16);
                    if x < inner.x + inner.width.saturating_sub(2) {
                        buf[(x, hint_y)].set_char(ch).set_style(hint_style);
                    }
                }
            }
        }
    }
}
