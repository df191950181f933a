use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::util::colors;

pub struct Sidebar<'a> {
    items: &'a [&'a str],
    active_index: usize,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: &'a [&'a str], active_index: usize) -> Self {
        Self {
            items,
            active_index,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.active_index {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                ListItem::new(format!("  {} {}", i + 1, item)).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
