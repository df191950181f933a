use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    None,
}

#[async_trait]
pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action>;

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}
}
