use std::time::Duration;

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    controller::{Cooldown, PagedList, SelectionMap},
    event::events::{Event, ToastKind},
    model::music::{
        ALL_CATEGORIES, KeywordType, MusicCategory, MusicQuery, MusicTrack, OrderBy,
    },
    render::{Template, TemplateRenderer},
    ui::{
        components::{pagination_bar::PaginationBar, spinner::Spinner},
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

const MUSIC_RECORD_SIZE: u32 = 5;
const MUSIC_PAGE_SIZE: u32 = 5;
const MUSIC_LIST_URL: &str = "/music/play-list";
const COOLDOWN_WINDOW: Duration = Duration::from_millis(1000);
const COOLDOWN_MESSAGE: &str = "Please try again in a moment.";
const EMPTY_LIST_MESSAGE: &str = "The play list for this category is empty.";

pub struct MusicStoreView {
    search_input: String,
    editing_search: bool,
    categories: Vec<MusicCategory>,
    category_index: usize,
    order_by: OrderBy,
    keyword_type: KeywordType,
    list: PagedList<MusicTrack>,
    checked: Vec<bool>,
    selection: SelectionMap,
    list_state: ListState,
    pagination_cursor: usize,
    search_cooldown: Cooldown,
    reload_cooldown: Cooldown,
}

impl Default for MusicStoreView {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            editing_search: false,
            categories: Vec::new(),
            category_index: 0,
            order_by: OrderBy::default(),
            keyword_type: KeywordType::default(),
            list: PagedList::new(MUSIC_LIST_URL, MUSIC_RECORD_SIZE, MUSIC_PAGE_SIZE),
            checked: Vec::new(),
            selection: SelectionMap::default(),
            list_state: ListState::default(),
            pagination_cursor: 0,
            search_cooldown: Cooldown::new(COOLDOWN_WINDOW),
            reload_cooldown: Cooldown::new(COOLDOWN_WINDOW),
        }
    }
}

impl MusicStoreView {
    fn category_id(&self) -> u64 {
        if self.category_index == 0 {
            ALL_CATEGORIES
        } else {
            self.categories
                .get(self.category_index - 1)
                .map(|c| c.category_id)
                .unwrap_or(ALL_CATEGORIES)
        }
    }

    /// The selector labels: the all-categories entry followed by the rows
    /// the renderer produces from the fetched category list.
    fn category_labels(&self, renderer: &dyn TemplateRenderer) -> Vec<String> {
        let data = serde_json::to_value(&self.categories).unwrap_or_default();
        let rendered = renderer.render(Template::MusicCategoryList, &data);
        std::iter::once("All".to_string())
            .chain(rendered.lines().map(str::to_string))
            .collect()
    }

    fn category_line(&self, renderer: &dyn TemplateRenderer) -> Line<'static> {
        let spans: Vec<Span> = self
            .category_labels(renderer)
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let style = if i == self.category_index {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                Span::styled(format!(" {label} "), style)
            })
            .collect();
        Line::from(spans)
    }

    fn compose_query(&self, page: u32) -> MusicQuery {
        MusicQuery {
            paging: crate::model::paging::PageQuery::new(page, MUSIC_RECORD_SIZE, MUSIC_PAGE_SIZE),
            category_id: self.category_id(),
            keyword: self.search_input.clone(),
            order_by: self.order_by,
            keyword_type: self.keyword_type,
        }
    }

    fn request_page(&mut self, page: u32, ctx: &AppContext) {
        let query = self.compose_query(page);
        let (generation, _) = self.list.begin_load(page);
        let _ = ctx.event_tx.send(Event::LoadMusicList {
            url: self.list.url().to_string(),
            generation,
            query,
        });
    }

    fn dispatch_pagination(&mut self, ctx: &AppContext) {
        let Some(button) = self.list.controls().get(self.pagination_cursor).cloned() else {
            return;
        };
        if button.active {
            return;
        }
        self.request_page(button.page, ctx);
    }

    fn keyboard_search(&mut self, ctx: &AppContext) {
        if self.search_cooldown.try_accept() {
            self.request_page(1, ctx);
        } else {
            let _ = ctx
                .event_tx
                .send(Event::Toast(ToastKind::Info, COOLDOWN_MESSAGE.to_string()));
        }
    }

    fn reload(&mut self, ctx: &AppContext) {
        if self.reload_cooldown.try_accept() {
            // Categories first; the list load chains off their arrival.
            let _ = ctx.event_tx.send(Event::LoadCategories);
        } else {
            let _ = ctx
                .event_tx
                .send(Event::Toast(ToastKind::Info, COOLDOWN_MESSAGE.to_string()));
        }
    }

    fn toggle_row(&mut self, index: usize) {
        let Some(track) = self.list.items().get(index).cloned() else {
            return;
        };
        let Some(checked) = self.checked.get_mut(index) else {
            return;
        };
        *checked = !*checked;
        self.selection.toggle(&track, *checked);
    }

    fn toggle_select_all(&mut self) {
        for index in 0..self.list.items().len() {
            self.toggle_row(index);
        }
    }

    fn sync_after_apply(&mut self) {
        self.checked = vec![false; self.list.items().len()];
        self.selection.clear();
        if self.list.items().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
        self.pagination_cursor = self
            .list
            .controls()
            .iter()
            .position(|b| b.active)
            .unwrap_or(0);
    }

    fn filter_line(&self) -> String {
        format!(
            "search: {}{}  order: {}  by: {}  selected: {}",
            self.search_input,
            if self.editing_search { "_" } else { "" },
            self.order_by.as_str(),
            self.keyword_type.as_str(),
            self.selection.len(),
        )
    }
}

#[async_trait]
impl View for MusicStoreView {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let filter_style = if self.editing_search {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let filter_block = Block::default()
            .borders(Borders::ALL)
            .title("Music Store")
            .border_style(filter_style);
        let filter_lines = vec![
            Line::raw(self.filter_line()),
            self.category_line(ctx.renderer.as_ref()),
        ];
        f.render_widget(Paragraph::new(filter_lines).block(filter_block), chunks[0]);

        let list_block = Block::default().borders(Borders::ALL).title("Play List");
        let list_area = list_block.inner(chunks[1]);
        f.render_widget(list_block, chunks[1]);

        if self.list.is_loading() && self.list.items().is_empty() {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading play list...");
            f.render_widget(spinner, list_area);
        } else {
            let data = serde_json::to_value(self.list.items()).unwrap_or_default();
            let markup = ctx.renderer.render(Template::MusicList, &data);
            let items: Vec<ListItem> = markup
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    let mark = if self.checked.get(i).copied().unwrap_or(false) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    ListItem::new(format!("  {mark} {line}"))
                })
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
        if self.editing_search {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return None;
                }
                KeyCode::Enter => self.keyboard_search(ctx),
                KeyCode::Esc => self.editing_search = false,
                KeyCode::Char(c) => self.search_input.push(c),
                KeyCode::Backspace => {
                    self.search_input.pop();
                }
                _ => {}
            }
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Char('/') => self.editing_search = true,
            KeyCode::Char('s') => self.request_page(1, ctx),
            KeyCode::Char('R') => self.reload(ctx),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return None,
            KeyCode::Char('c') => {
                self.category_index = (self.category_index + 1) % (self.categories.len() + 1);
                self.request_page(1, ctx);
            }
            KeyCode::Char('o') => {
                self.order_by = self.order_by.toggled();
                self.request_page(1, ctx);
            }
            KeyCode::Char('t') => self.keyword_type = self.keyword_type.next(),
            KeyCode::Char(' ') => {
                if let Some(index) = self.list_state.selected() {
                    self.toggle_row(index);
                }
            }
            KeyCode::Char('a') => self.toggle_select_all(),
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
            KeyCode::Enter => {
                if let Some(track) = self
                    .list_state
                    .selected()
                    .and_then(|i| self.list.items().get(i))
                {
                    let _ = ctx.event_tx.send(Event::PlayTrack(track.clone()));
                } else {
                    self.dispatch_pagination(ctx);
                }
            }
            KeyCode::PageDown => self.dispatch_pagination(ctx),
            _ => return None,
        }
        Some(Action::None)
    }

    async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        match event {
            Event::Initialize => {
                let _ = ctx.event_tx.send(Event::LoadCategories);
            }
            Event::CategoriesFetched(categories) => {
                self.categories = categories.clone();
                if self.category_index > self.categories.len() {
                    self.category_index = 0;
                }
                // The category selector must exist before the first list
                // render, so the default load only goes out now.
                self.request_page(1, ctx);
            }
            Event::MusicListFetched {
                generation,
                envelope,
                query,
            } => {
                let response = &envelope.music_pagination_response;
                if response.music_dto.is_empty() {
                    let applied =
                        self.list
                            .apply(*generation, Vec::new(), None, query.paging);
                    if applied {
                        self.sync_after_apply();
                        let _ = ctx.event_tx.send(Event::Toast(
                            ToastKind::Info,
                            EMPTY_LIST_MESSAGE.to_string(),
                        ));
                    }
                    return;
                }

                let applied = self.list.apply(
                    *generation,
                    response.music_dto.clone(),
                    response.music_pagination.clone(),
                    query.paging,
                );
                if applied {
                    self.sync_after_apply();
                }
            }
            Event::MusicListFailed { generation, .. } => self.list.fail(*generation),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextTemplates;

    #[test]
    fn category_selector_goes_through_the_renderer() {
        let mut view = MusicStoreView::default();
        view.categories = vec![
            MusicCategory {
                category_id: 1,
                category_name: "Jazz".to_string(),
            },
            MusicCategory {
                category_id: 2,
                category_name: "Rock".to_string(),
            },
        ];

        let labels = view.category_labels(&TextTemplates);
        assert_eq!(labels, vec!["All", "Jazz", "Rock"]);
    }

    #[test]
    fn category_selector_without_fetched_categories_still_offers_all() {
        let view = MusicStoreView::default();
        assert_eq!(view.category_labels(&TextTemplates), vec!["All"]);
        assert_eq!(view.category_id(), ALL_CATEGORIES);
    }
}
