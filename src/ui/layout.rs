use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    ui::{
        app::App,
        components::{sidebar::Sidebar, toast::ToastBar},
    },
    util::colors,
};

const SIDEBAR_ITEMS: [&str; 2] = ["Comments", "Music Store"];

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let main_area = chunks[0];
        let toast_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(1)])
            .split(main_area);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("blogtui")
            .title_alignment(Alignment::Center);

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(
            Sidebar::new(&SIDEBAR_ITEMS, self.app.state.ui.sidebar_index),
            sidebar_inner,
        );

        self.app
            .panels
            .render(f, content_area, &self.app.state, &self.app.ctx);

        if let Some(toast) = &self.app.state.ui.toast {
            f.render_widget(ToastBar::new(toast), toast_area);
        }
    }
}
