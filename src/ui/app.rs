use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;

use crate::{
    event::events::Event,
    http::ApiService,
    player::{AudioPlayer, LoggingPlayer},
    render::TextTemplates,
    ui::{
        context::AppContext,
        layout::AppLayout,
        message::AppMessage,
        panels::PanelSet,
        state::AppState,
        tui::{TerminalEvent, Tui},
        util::handler::EventHandler,
        views::{CommentsView, MusicStoreView},
    },
    util::task::TaskManager,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub panels: PanelSet,
    pub player: Box<dyn AudioPlayer>,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub async fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new().await?);

        let post_id = env_id("BLOG_POST_ID")?;
        let blog_id = env_id("BLOG_ID")?;

        let ctx = AppContext {
            api,
            event_tx: event_tx.clone(),
            renderer: Box::new(TextTemplates),
        };

        let panels = PanelSet::new(vec![
            Box::new(CommentsView::new(post_id, blog_id)),
            Box::new(MusicStoreView::default()),
        ]);

        Ok(Self {
            event_rx,
            event_tx,
            ctx,
            state: AppState::default(),
            panels,
            player: Box::new(LoggingPlayer::default()),
            task_manager: TaskManager::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        let _ = self.event_tx.send(Event::Initialize);

        while !self.should_quit {
            tui.draw(|f| {
                Self::ui(self, f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(app: &mut App, frame: &mut Frame) {
        if app.has_focus {
            let area = frame.area();
            AppLayout::new(app).render(frame, area);
        }
    }

    pub async fn update(&mut self, message: AppMessage) {
        match message {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::NextPanel => {
                self.panels.next();
                self.state.ui.sidebar_index = self.panels.active_index();
            }
            AppMessage::PreviousPanel => {
                self.panels.previous();
                self.state.ui.sidebar_index = self.panels.active_index();
            }
            AppMessage::SetPanel(index) => {
                self.panels.set_active(index);
                self.state.ui.sidebar_index = self.panels.active_index();
            }
        }
    }
}

fn env_id(key: &str) -> color_eyre::Result<u64> {
    let raw = std::env::var(key)
        .map_err(|_| color_eyre::eyre::eyre!("{key} is not set"))?;
    raw.parse()
        .map_err(|_| color_eyre::eyre::eyre!("{key} is not a numeric id: {raw}"))
}
