//! Footer hint line rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::{App, Focus};
use crate::theme::MUTED_COLOR;

/// Render the footer with context-sensitive key hints.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.ui.has_active_popup() {
        "↑/↓:Select  Enter:Confirm  Esc:Close"
    } else if app.nav.show_detail {
        "↑/↓:Field  c:Copy value  Esc:Close"
    } else if app.ui.focus == Focus::Address {
        "Enter:Query  Tab:Table  Esc:Done  Ctrl+u:Clear"
    } else {
        "q:Quit  /:Address  n:Network  r:Re-query  e:Export CSV  c:Copy  s:Share  Enter:Details  ←/→:Columns  ?:Help"
    };

    frame.render_widget(
        Paragraph::new(hints)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StartupOptions;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_footer_hints_follow_focus() {
        let mut app = App::new(StartupOptions::default());
        let backend = TestBackend::new(120, 4);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 120, 1), &app))
            .unwrap();
        assert!(terminal.backend().to_string().contains("Enter:Query"));

        app.ui.focus = Focus::Table;
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 120, 1), &app))
            .unwrap();
        assert!(terminal.backend().to_string().contains("e:Export CSV"));
    }
}
