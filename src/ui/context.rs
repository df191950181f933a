use std::sync::Arc;

use flume::Sender;

use crate::event::events::Event;
use crate::http::ApiService;
use crate::render::TemplateRenderer;

pub struct AppContext {
    pub api: Arc<ApiService>,
    pub event_tx: Sender<Event>,
    pub renderer: Box<dyn TemplateRenderer>,
}
