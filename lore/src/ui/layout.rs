//! Layout calculations for the chat TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// The single app layout: title, scrollable transcript, status bar,
/// hotkey bar, input bar.
pub struct AppLayout {
    pub title_area: Rect,
    pub transcript_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
    pub input_area: Rect,
}

impl AppLayout {
    /// Calculate the layout for the given terminal area
    pub fn calculate(area: Rect) -> Self {
        let [title_area, transcript_area, status_bar, hotkey_bar, input_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .areas(area);

        Self {
            title_area,
            transcript_area,
            status_bar,
            hotkey_bar,
            input_area,
        }
    }
}

/// Center a fixed-size rect inside an area, clamped to fit
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::calculate(area);
        let total = layout.title_area.height
            + layout.transcript_area.height
            + layout.status_bar.height
            + layout.hotkey_bar.height
            + layout.input_area.height;
        assert_eq!(total, 24);
        assert!(layout.transcript_area.height >= 5);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_fixed(50, 20, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 10);
    }
}
