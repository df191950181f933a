use std::path::PathBuf;

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::info;

use crate::{
    controller::{CommentFormState, PagedList},
    event::events::{Event, ToastKind},
    http::ApiService,
    model::comment::CommentDto,
    model::paging::PageQuery,
    render::Template,
    ui::{
        components::{pagination_bar::PaginationBar, spinner::Spinner},
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::{colors, file},
};

const COMMENT_RECORD_SIZE: u32 = 20;
const COMMENT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Browse,
    Text,
    Nickname,
    Password,
    ImagePath,
}

pub struct CommentsView {
    post_id: u64,
    blog_id: u64,
    form: CommentFormState,
    list: PagedList<CommentDto>,
    comment_count: u64,
    list_state: ListState,
    input_mode: InputMode,
    image_path_input: String,
    confirm_image_removal: bool,
    pagination_cursor: usize,
}

impl CommentsView {
    pub fn new(post_id: u64, blog_id: u64) -> Self {
        Self {
            post_id,
            blog_id,
            form: CommentFormState::default(),
            list: PagedList::new(
                ApiService::comment_list_url(post_id, blog_id),
                COMMENT_RECORD_SIZE,
                COMMENT_PAGE_SIZE,
            ),
            comment_count: 0,
            list_state: ListState::default(),
            input_mode: InputMode::Browse,
            image_path_input: String::new(),
            confirm_image_removal: false,
            pagination_cursor: 0,
        }
    }

    fn request_page(&mut self, page: u32, ctx: &AppContext) {
        let (generation, query) = self.list.begin_load(page);
        let _ = ctx.event_tx.send(Event::LoadComments {
            url: self.list.url().to_string(),
            generation,
            query,
        });
    }

    fn dispatch_pagination(&mut self, ctx: &AppContext) {
        let Some(button) = self.list.controls().get(self.pagination_cursor).cloned() else {
            return;
        };
        if let Some((generation, query)) = self.list.begin_load_for(&button) {
            let _ = ctx.event_tx.send(Event::LoadComments {
                url: button.url,
                generation,
                query,
            });
        }
    }

    fn submit(&mut self, ctx: &AppContext) {
        if !self.form.validate() {
            let _ = ctx.event_tx.send(Event::Toast(
                ToastKind::Error,
                "The form input does not satisfy the required shape.".to_string(),
            ));
            return;
        }
        if !self.form.begin_submit() {
            return;
        }
        let _ = ctx.event_tx.send(Event::SubmitComment(
            self.form.submission(self.post_id, self.blog_id),
        ));
    }

    fn commit_image_path(&mut self, ctx: &AppContext) {
        let path = PathBuf::from(self.image_path_input.trim());
        self.image_path_input.clear();

        match file::check_image_file(&path) {
            Ok(()) => {
                let _ = ctx.event_tx.send(Event::UploadCommentImage { path });
            }
            Err(message) => {
                self.form.remove_image();
                let _ = ctx.event_tx.send(Event::Toast(ToastKind::Error, message));
            }
        }
    }

    fn selected_comment(&self) -> Option<&CommentDto> {
        self.list.items().get(self.list_state.selected()?)
    }

    fn sync_after_apply(&mut self) {
        let row_count = self.list.items().len();
        if row_count == 0 {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(selected.min(row_count - 1)));
        }
        self.pagination_cursor = self
            .list
            .controls()
            .iter()
            .position(|b| b.active)
            .unwrap_or(0);
    }

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.input_mode {
            InputMode::Text => Some(&mut self.form.text),
            InputMode::Nickname => Some(&mut self.form.nickname),
            InputMode::Password => Some(&mut self.form.password),
            InputMode::ImagePath => Some(&mut self.image_path_input),
            InputMode::Browse => None,
        }
    }

    fn form_lines(&self) -> Vec<Line<'_>> {
        let text_line = if self.input_mode == InputMode::Text {
            format!("> {}", self.form.text)
        } else {
            format!("  {}", self.form.text)
        };

        let identity = if self.form.anonymous {
            format!(
                "anonymous [x]  nickname: {}  password: {}",
                self.form.nickname,
                "*".repeat(self.form.password.chars().count()),
            )
        } else {
            "anonymous [ ]".to_string()
        };

        let image = match (&self.form.thumbnail_image, self.input_mode) {
            (_, InputMode::ImagePath) => format!("image path: {}", self.image_path_input),
            (Some(url), _) => format!("image: {url}"),
            (None, _) => "image: -".to_string(),
        };

        let status = if self.confirm_image_removal {
            "remove attached image? y/n".to_string()
        } else if self.form.is_submitting() {
            "submitting...".to_string()
        } else {
            format!("{} {} chars", self.form.lock_icon(), self.form.text_count())
        };

        vec![
            Line::raw(text_line),
            Line::raw(identity),
            Line::raw(image),
            Line::styled(status, Style::default().fg(colors::NEUTRAL)),
        ]
    }
}

#[async_trait]
impl View for CommentsView {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let form_style = if self.input_mode == InputMode::Browse {
            Style::default().fg(colors::NEUTRAL)
        } else {
            Style::default().fg(colors::PRIMARY)
        };
        let form_block = Block::default()
            .borders(Borders::ALL)
            .title("Compose")
            .border_style(form_style);
        f.render_widget(Paragraph::new(self.form_lines()).block(form_block), chunks[0]);

        let list_block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Comments ({})", self.comment_count));
        let list_area = list_block.inner(chunks[1]);
        f.render_widget(list_block, chunks[1]);

        if self.list.is_loading() && self.list.items().is_empty() {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading comments...");
            f.render_widget(spinner, list_area);
        } else {
            let data = serde_json::to_value(self.list.items()).unwrap_or_default();
            let markup = ctx.renderer.render(Template::CommentList, &data);
            let items: Vec<ListItem> = markup
                .lines()
                .map(|line| ListItem::new(format!("  {line}")))
                .collect();
            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            f.render_stateful_widget(list, list_area, &mut self.list_state);
        }

        f.render_widget(
            PaginationBar::new(self.list.controls(), self.pagination_cursor),
            chunks[2],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.confirm_image_removal {
            self.confirm_image_removal = false;
            if key.code == KeyCode::Char('y') {
                self.form.remove_image();
                let _ = ctx.event_tx.send(Event::Toast(
                    ToastKind::Info,
                    "Attached image removed.".to_string(),
                ));
            }
            return Some(Action::None);
        }

        if self.input_mode != InputMode::Browse {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return None;
                }
                KeyCode::Enter => {
                    match self.input_mode {
                        InputMode::Text => self.submit(ctx),
                        InputMode::ImagePath => self.commit_image_path(ctx),
                        _ => {}
                    }
                    self.input_mode = InputMode::Browse;
                }
                KeyCode::Esc => self.input_mode = InputMode::Browse,
                KeyCode::Char(c) => {
                    if let Some(buffer) = self.active_buffer() {
                        buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(buffer) = self.active_buffer() {
                        buffer.pop();
                    }
                }
                _ => {}
            }
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Char('i') => self.input_mode = InputMode::Text,
            KeyCode::Char('n') => self.input_mode = InputMode::Nickname,
            KeyCode::Char('p') => self.input_mode = InputMode::Password,
            KeyCode::Char('f') => self.input_mode = InputMode::ImagePath,
            KeyCode::Char('a') => self.form.anonymous = !self.form.anonymous,
            KeyCode::Char('s') => self.form.toggle_lock(),
            KeyCode::Char('x') => {
                if self.form.thumbnail_image.is_some() {
                    self.confirm_image_removal = true;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let row_count = self.list.items().len();
                if row_count > 0 {
                    let i = self.list_state.selected().unwrap_or(0);
                    self.list_state.select(Some((i + 1).min(row_count - 1)));
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(i.saturating_sub(1)));
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.pagination_cursor = self.pagination_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if !self.list.controls().is_empty() {
                    self.pagination_cursor =
                        (self.pagination_cursor + 1).min(self.list.controls().len() - 1);
                }
            }
            KeyCode::Enter => self.dispatch_pagination(ctx),
            KeyCode::Char('u') => {
                if let Some(comment) = self.selected_comment() {
                    let url = format!(
                        "{}/comment/update/{}",
                        ctx.api.base_url(),
                        comment.comment_id
                    );
                    info!(comment_id = comment.comment_id, "opening comment editor");
                    if webbrowser::open(&url).is_err() {
                        let _ = ctx.event_tx.send(Event::Toast(
                            ToastKind::Error,
                            "The comment editor could not be opened.".to_string(),
                        ));
                    }
                }
            }
            KeyCode::Char('d') => {
                // Wired but not connected to a request in this version.
                if let Some(comment) = self.selected_comment() {
                    info!(comment_id = comment.comment_id, "delete action selected");
                    let _ = ctx.event_tx.send(Event::Toast(
                        ToastKind::Info,
                        "Deleting comments is not available yet.".to_string(),
                    ));
                }
            }
            KeyCode::Char('r') => {
                if let Some(comment) = self.selected_comment() {
                    info!(comment_id = comment.comment_id, "reply action selected");
                    let _ = ctx.event_tx.send(Event::Toast(
                        ToastKind::Info,
                        "Replying to comments is not available yet.".to_string(),
                    ));
                }
            }
            _ => return None,
        }
        Some(Action::None)
    }

    async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        match event {
            Event::Initialize => self.request_page(1, ctx),
            Event::CommentsFetched {
                generation,
                envelope,
                query,
            } => {
                let response = &envelope.comment_pagination_response;
                let applied = self.list.apply(
                    *generation,
                    response.comment_summary_dto.comment_dto_list.clone(),
                    response.comment_pagination.clone(),
                    *query,
                );
                if applied {
                    self.comment_count = response.comment_summary_dto.comment_count;
                    self.sync_after_apply();
                }
            }
            Event::CommentsFailed { generation, .. } => self.list.fail(*generation),
            Event::CommentRegistered { comment_count } => {
                self.form.reset();
                self.input_mode = InputMode::Browse;
                let page = PageQuery::last_page(*comment_count, self.list.record_size());
                self.request_page(page, ctx);
            }
            Event::CommentRegisterFailed { .. } => self.form.submit_failed(),
            Event::CommentImageUploaded { url } => self.form.attach_image(url.clone()),
            Event::CommentImageUploadFailed { .. } => self.form.remove_image(),
            _ => {}
        }
    }
}
