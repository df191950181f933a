use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_STEP_MS: u128 = 100;

#[derive(Default)]
pub struct Spinner {
    style: Style,
    label: Option<String>,
}

impl Spinner {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let symbol = FRAMES[(now / FRAME_STEP_MS) as usize % FRAMES.len()];

        let text = match self.label {
            Some(label) => format!("{symbol} {label}"),
            None => symbol.to_string(),
        };

        let x = area.x + area.width.saturating_sub(text.chars().count() as u16) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, text, self.style);
    }
}
