use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::model::paging::PageButton;
use crate::util::colors;

/// Horizontal strip of page controls. The active page is highlighted and the
/// cursor marks the control a dispatch would hit.
pub struct PaginationBar<'a> {
    buttons: &'a [PageButton],
    cursor: usize,
}

impl<'a> PaginationBar<'a> {
    pub fn new(buttons: &'a [PageButton], cursor: usize) -> Self {
        Self { buttons, cursor }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.buttons.is_empty() || area.height == 0 {
            return;
        }

        let mut spans = Vec::with_capacity(self.buttons.len() * 2);
        for (i, button) in self.buttons.iter().enumerate() {
            let mut style = if button.active {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            if i == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!(" {} ", button.label), style));
        }

        Line::from(spans).render(area, buf);
    }
}
