//! Message popup rendering.
//!
//! A generic centered modal for informational messages and errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Renders a message popup with auto-sized dimensions.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let message_lines = message.lines().count().max(1) as u16;
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let popup_width = 40.max(longest_line + 6).min(area.width * 8 / 10);
    let popup_height = 6.max(message_lines + 4);
    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let block = create_popup_block("Message");
    frame.render_widget(Clear, popup_area);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let message_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(1),
    );
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height.saturating_sub(2),
        popup_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new("Esc:Close  Enter:Close")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_message_popup_renders() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render(frame, frame.area(), "Switched to testnet");
            })
            .unwrap();
        assert!(terminal.backend().to_string().contains("Switched to testnet"));
    }

    #[test]
    fn test_message_popup_empty_and_multiline() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        for message in ["", "Line 1\nLine 2\nLine 3"] {
            terminal
                .draw(|frame| {
                    render(frame, frame.area(), message);
                })
                .unwrap();
        }
    }
}
