//! Confirmation control

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::setup_tui::ui::Styles;

pub struct DoneButton;

impl DoneButton {
    pub const LABEL: &'static str = "[ Done ]";

    /// Dimmed while disabled, highlighted when enabled and focused
    pub fn render(f: &mut Frame, area: Rect, enabled: bool, focused: bool) {
        let style = match (enabled, focused) {
            (true, true) => Styles::selected(),
            (true, false) => Styles::success(),
            (false, _) => Styles::inactive(),
        };

        let border_style = if focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let paragraph = Paragraph::new(Self::LABEL)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );

        f.render_widget(paragraph, area);
    }
}
