use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::state::AppState;
use crate::ui::traits::{Action, View};

/// The two fixed sibling panels. Only the active one renders and takes
/// input, but result events reach every panel so background state (the
/// other panel's list) stays current.
pub struct PanelSet {
    panels: Vec<Box<dyn View>>,
    active: usize,
}

impl PanelSet {
    pub fn new(panels: Vec<Box<dyn View>>) -> Self {
        Self { panels, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn set_active(&mut self, index: usize) {
        if index < self.panels.len() {
            self.active = index;
        }
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.panels.len();
    }

    pub fn previous(&mut self) {
        self.active = (self.active + self.panels.len() - 1) % self.panels.len();
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        if let Some(panel) = self.panels.get_mut(self.active) {
            panel.render(f, area, state, ctx);
        }
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if let Some(panel) = self.panels.get_mut(self.active) {
            panel.handle_input(key, state, ctx).await
        } else {
            None
        }
    }

    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        for panel in &mut self.panels {
            panel.on_event(event, ctx).await;
        }
    }
}
