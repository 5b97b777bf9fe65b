//! Main application state and logic

use std::collections::VecDeque;

use lore_core::{ChatSession, Role};

use crate::ui::theme::ChatTheme;
use crate::ui::Overlay;

/// Vim-style input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and hotkeys (default)
    #[default]
    Normal,
    /// Insert mode - free text input
    Insert,
    /// Command mode - entering : commands
    Command,
}

/// Main application state
pub struct App {
    /// The conversation session (owns the transcript)
    pub session: ChatSession,

    // UI state
    pub theme: ChatTheme,
    overlay: Option<Overlay>,

    // Transcript display
    pub transcript_scroll: usize,
    pub scroll_locked_to_bottom: bool, // True = auto-scroll on new content

    // Input state
    pub input_mode: InputMode,
    input_buffer: String,
    cursor_position: usize,
    pub input_history: VecDeque<String>,
    pub history_index: Option<usize>,
    pub saved_input: Option<String>, // Saved current input when browsing history

    // Status
    status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new application around a chat session
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            theme: ChatTheme::default(),
            overlay: None,
            transcript_scroll: 0,
            scroll_locked_to_bottom: true,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            input_history: VecDeque::with_capacity(100),
            history_index: None,
            saved_input: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Submit a question to the session and update UI state.
    ///
    /// Empty input is silently ignored, matching the session guard.
    pub fn ask(&mut self, input: &str) {
        match self.session.submit(input) {
            Some(response) if response.matched => self.clear_status(),
            Some(_) => self.set_status("No exact match for that question"),
            None => return,
        }
        if self.scroll_locked_to_bottom {
            self.scroll_to_bottom();
        }
    }

    /// Start a fresh conversation, keeping the knowledge table
    pub fn new_conversation(&mut self) {
        self.session.reset();
        self.transcript_scroll = 0;
        self.scroll_locked_to_bottom = true;
        self.set_status("Started a new conversation");
    }

    /// Enter command mode (starts with :)
    pub fn enter_command_mode(&mut self) {
        self.input_mode = InputMode::Command;
        self.input_buffer.clear();
        self.input_buffer.push(':');
        self.cursor_position = 1;
    }

    /// Exit to normal mode
    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        // Clear command buffer when leaving command mode
        if self.input_buffer.starts_with(':') {
            self.input_buffer.clear();
            self.cursor_position = 0;
        }
    }

    /// Scroll transcript to bottom and lock to bottom
    pub fn scroll_to_bottom(&mut self) {
        // Parked at a sentinel; the widget clamps to the real maximum on render
        self.transcript_scroll = usize::MAX / 2;
        self.scroll_locked_to_bottom = true;
    }

    /// Rough upper bound on scroll, assuming ~60 char lines and a 20 line view.
    /// The widget knows the real geometry; this only keeps scroll_up sane
    /// after the position has been parked at the bottom sentinel.
    fn estimate_max_scroll(&self) -> usize {
        const ESTIMATED_WIDTH: usize = 60;
        const ESTIMATED_VISIBLE_HEIGHT: usize = 20;

        let estimated_lines: usize = self
            .session
            .transcript()
            .iter()
            .map(|turn| {
                let wrapped: usize = turn
                    .text
                    .lines()
                    .map(|line| (line.len() / ESTIMATED_WIDTH).max(1))
                    .sum();
                wrapped + 1 // plus the separator line
            })
            .sum();

        estimated_lines.saturating_sub(ESTIMATED_VISIBLE_HEIGHT)
    }

    /// Scroll transcript up (unlocks from bottom)
    pub fn scroll_up(&mut self, lines: usize) {
        // Leaving the bottom: pull the sentinel back to a real position first
        let max_scroll = self.estimate_max_scroll();
        self.transcript_scroll = self.transcript_scroll.min(max_scroll).saturating_sub(lines);
        self.scroll_locked_to_bottom = false;
    }

    /// Scroll transcript down (does not re-lock to bottom; G does that)
    pub fn scroll_down(&mut self, lines: usize) {
        let max_scroll = self.estimate_max_scroll();
        self.transcript_scroll = self
            .transcript_scroll
            .saturating_add(lines)
            .min(max_scroll + 100);
    }

    /// Scroll to the top of the transcript
    pub fn scroll_to_top(&mut self) {
        self.transcript_scroll = 0;
        self.scroll_locked_to_bottom = false;
    }

    /// Submit current input
    pub fn submit_input(&mut self) -> Option<String> {
        if self.input_buffer.is_empty() {
            return None;
        }

        let input = std::mem::take(&mut self.input_buffer);
        self.cursor_position = 0;

        // Questions are worth recalling; commands and blank lines are not
        if !input.starts_with(':') && !input.trim().is_empty() {
            self.input_history.push_front(input.clone());
            self.input_history.truncate(100);
        }
        self.history_index = None;
        self.saved_input = None;

        Some(input)
    }

    /// Byte offset of the given character position in the input buffer
    fn byte_index(&self, char_pos: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_pos)
            .map_or(self.input_buffer.len(), |(i, _)| i)
    }

    /// Remove the character under the cursor, if there is one
    fn remove_char_at_cursor(&mut self) {
        if let Some((start, ch)) = self.input_buffer.char_indices().nth(self.cursor_position) {
            self.input_buffer.drain(start..start + ch.len_utf8());
        }
    }

    /// Handle a typed character
    pub fn type_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.input_buffer.insert(at, c);
        self.cursor_position += 1;
    }

    /// Handle backspace
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.remove_char_at_cursor();
        }
    }

    /// Handle delete
    pub fn delete(&mut self) {
        self.remove_char_at_cursor();
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end (unicode-safe)
    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Recall the previous (older) input from history
    pub fn history_prev(&mut self) {
        if self.input_history.is_empty() {
            return;
        }

        // Park the draft before the first step back
        if self.history_index.is_none() && !self.input_buffer.is_empty() {
            self.saved_input = Some(self.input_buffer.clone());
        }

        let idx = match self.history_index {
            None => 0,
            Some(i) => (i + 1).min(self.input_history.len() - 1),
        };
        if let Some(entry) = self.input_history.get(idx).cloned() {
            self.set_input(entry);
            self.history_index = Some(idx);
        }
    }

    /// Step forward (newer) through history, ending at the parked draft
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                let draft = self.saved_input.take().unwrap_or_default();
                self.set_input(draft);
                self.history_index = None;
            }
            Some(i) => {
                if let Some(entry) = self.input_history.get(i - 1).cloned() {
                    self.set_input(entry);
                    self.history_index = Some(i - 1);
                }
            }
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    /// Close any open overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Process a colon command
    /// Returns true if the command was recognized
    pub fn process_command(&mut self, command: &str) -> bool {
        let cmd = command.trim_start_matches(':');
        let parts: Vec<&str> = cmd.split_whitespace().collect();

        if parts.is_empty() {
            return false;
        }

        match parts[0] {
            "q" | "quit" | "exit" => {
                self.should_quit = true;
                true
            }
            "new" => {
                self.new_conversation();
                true
            }
            "help" | "h" => {
                self.toggle_help();
                true
            }
            _ => {
                self.set_status(format!("Unknown command: {}", parts[0]));
                false
            }
        }
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Number of user questions answered so far
    pub fn answered_count(&self) -> usize {
        self.session
            .transcript()
            .iter()
            .filter(|t| t.role == Role::User)
            .count()
    }

    // =========================================================================
    // Getters for private fields
    // =========================================================================

    /// Get the current overlay
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Check if an overlay is currently open
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Get the current input buffer
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Get the current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set input buffer content and move cursor to end (unicode-safe)
    pub fn set_input(&mut self, content: impl Into<String>) {
        self.input_buffer = content.into();
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Clear the input buffer
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
}
