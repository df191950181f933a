use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

use crate::{
    event::events::{Event, ToastKind},
    player,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        state::Toast,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Resize(_, _) => {}
            TerminalEvent::Tick => {
                if let Some(toast) = &app.state.ui.toast {
                    if toast.is_expired() {
                        app.state.ui.toast = None;
                        return Ok(true);
                    }
                }
                return Ok(app.has_focus);
            }
        }

        Ok(true)
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        app.panels.on_event(&evt, &app.ctx).await;

        match evt {
            Event::LoadComments {
                url,
                generation,
                query,
            } => {
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    "comments_fetch",
                    tokio::spawn(async move {
                        match api.fetch_comments(&url, &query).await {
                            Ok(envelope) => {
                                let _ = tx.send(Event::CommentsFetched {
                                    generation,
                                    envelope,
                                    query,
                                });
                            }
                            Err(e) => {
                                let _ = tx.send(Event::CommentsFailed {
                                    generation,
                                    message: e.to_string(),
                                });
                            }
                        }
                    }),
                );
            }
            Event::SubmitComment(submission) => {
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    "comment_submit",
                    tokio::spawn(async move {
                        match api.register_comment(submission).await {
                            Ok(response) => {
                                let _ = tx.send(Event::CommentRegistered {
                                    comment_count: response.comment_count,
                                });
                            }
                            Err(e) => {
                                let _ = tx.send(Event::CommentRegisterFailed {
                                    message: e.to_string(),
                                });
                            }
                        }
                    }),
                );
            }
            Event::UploadCommentImage { path } => {
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    "image_upload",
                    tokio::spawn(async move {
                        let file_name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        let bytes = match tokio::fs::read(&path).await {
                            Ok(bytes) => bytes,
                            Err(e) => {
                                let _ = tx.send(Event::CommentImageUploadFailed {
                                    message: e.to_string(),
                                });
                                return;
                            }
                        };
                        match api.upload_comment_image(&file_name, bytes).await {
                            Ok(url) => {
                                let _ = tx.send(Event::CommentImageUploaded { url });
                            }
                            Err(e) => {
                                let _ = tx.send(Event::CommentImageUploadFailed {
                                    message: e.to_string(),
                                });
                            }
                        }
                    }),
                );
            }
            Event::LoadCategories => {
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    "categories_fetch",
                    tokio::spawn(async move {
                        match api.fetch_music_categories().await {
                            Ok(categories) => {
                                let _ = tx.send(Event::CategoriesFetched(categories));
                            }
                            Err(e) => {
                                let _ = tx.send(Event::CategoriesFailed {
                                    message: e.to_string(),
                                });
                            }
                        }
                    }),
                );
            }
            Event::LoadMusicList {
                url,
                generation,
                query,
            } => {
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    "music_fetch",
                    tokio::spawn(async move {
                        match api.fetch_music_list(&url, &query).await {
                            Ok(envelope) => {
                                let _ = tx.send(Event::MusicListFetched {
                                    generation,
                                    envelope,
                                    query,
                                });
                            }
                            Err(e) => {
                                let _ = tx.send(Event::MusicListFailed {
                                    generation,
                                    message: e.to_string(),
                                });
                            }
                        }
                    }),
                );
            }
            Event::PlayTrack(track) => {
                let key = player::hand_off(app.player.as_mut(), &track);
                info!("playing '{}' as {}", track.title, key);
            }
            Event::Toast(kind, message) => {
                app.state.ui.toast = Some(Toast::new(kind, message));
            }
            Event::CommentsFailed { ref message, .. }
            | Event::CommentRegisterFailed { ref message }
            | Event::CommentImageUploadFailed { ref message }
            | Event::CategoriesFailed { ref message }
            | Event::MusicListFailed { ref message, .. } => {
                app.state.ui.toast = Some(Toast::new(ToastKind::Error, message.clone()));
            }
            _ => {}
        }
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind == KeyEventKind::Press {
            match evt.code {
                KeyCode::Char('c') if evt.modifiers == KeyModifiers::CONTROL => {
                    app.update(AppMessage::Quit).await;
                    return;
                }
                KeyCode::Tab => {
                    app.update(AppMessage::NextPanel).await;
                    return;
                }
                KeyCode::BackTab => {
                    app.update(AppMessage::PreviousPanel).await;
                    return;
                }
                _ => {}
            }

            let action = app.panels.handle_input(evt, &app.state, &app.ctx).await;

            if let Some(action) = action {
                if action == Action::Quit {
                    app.should_quit = true;
                }
                return;
            }

            if let Some(msg) = InputHandler::handle_key(evt) {
                app.update(msg).await;
            }
        }
    }
}
