use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::event::events::ToastKind;
use crate::ui::state::Toast;
use crate::util::colors;

/// Bottom-line transient notification.
pub struct ToastBar<'a> {
    toast: &'a Toast,
}

impl<'a> ToastBar<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }
}

impl Widget for ToastBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = match self.toast.kind {
            ToastKind::Info => Style::default().fg(colors::SECONDARY),
            ToastKind::Error => Style::default()
                .fg(colors::DANGER)
                .add_modifier(Modifier::BOLD),
        };

        let mut message = self.toast.message.as_str();
        // Clip to the bar instead of wrapping.
        while message.width() > area.width as usize {
            let mut chars = message.chars();
            chars.next_back();
            message = chars.as_str();
        }
        buf.set_string(area.x, area.y, message, style);
    }
}
