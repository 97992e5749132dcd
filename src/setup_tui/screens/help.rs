//! Help popup for the setup screen

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::setup_tui::ui::{centered_rect, Styles};

pub struct HelpScreen;

impl HelpScreen {
    fn lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("Connecting your notes", Styles::title())),
            Line::from(""),
            Line::from("Enter the S3 access key and secret key of the bucket that stores"),
            Line::from("your notes, your account ID and the key used to encrypt them."),
            Line::from("Done becomes available once all four fields hold a value."),
            Line::from(""),
            Line::from(Span::styled("Keys", Styles::title())),
            Line::from("  Tab / ↓          next field"),
            Line::from("  Shift+Tab / ↑    previous field"),
            Line::from("  Enter            next field, or finish on Done"),
            Line::from("  Ctrl+S           finish"),
            Line::from("  Ctrl+U           clear the current field"),
            Line::from("  Ctrl+R           show or hide secret fields"),
            Line::from("  Esc / Ctrl+C     cancel setup"),
            Line::from(""),
            Line::from("Press F1 or Esc to close this help"),
        ]
    }

    pub fn render(f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 70, area);

        let help = Paragraph::new(Self::lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("Help")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            );

        f.render_widget(Clear, popup_area);
        f.render_widget(help, popup_area);
    }
}
