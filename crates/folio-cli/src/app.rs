use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_config::Config;
use folio_engine::{BlogView, Post, ViewState};
use ratatui::widgets::ListState;

pub struct App {
    pub view: BlogView,
    pub list_state: ListState,
    /// Vertical scroll of the article in reading view
    pub scroll: u16,
    pub words_per_minute: u32,
    pub preview_tags: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(posts: Vec<Post>, config: &Config) -> Self {
        let mut app = Self {
            view: BlogView::new(posts),
            list_state: ListState::default(),
            scroll: 0,
            words_per_minute: config.words_per_minute,
            preview_tags: config.preview_tags,
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('l') => {
                    self.view.clear_filters();
                    self.sync_selection();
                }
                _ => {}
            }
            return;
        }

        match self.view.state() {
            ViewState::Listing => self.handle_listing_key(key.code),
            ViewState::Reading => self.handle_reading_key(key.code),
        }
    }

    fn handle_listing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down => self.next_post(),
            KeyCode::Up => self.previous_post(),
            KeyCode::Tab => self.cycle_tag(true),
            KeyCode::BackTab => self.cycle_tag(false),
            KeyCode::Enter => {
                if let Some(position) = self.list_state.selected()
                    && self.view.select_visible(position)
                {
                    self.scroll = 0;
                }
            }
            KeyCode::Esc => {
                self.view.clear_query();
                self.sync_selection();
            }
            KeyCode::Backspace => {
                self.view.pop_query_char();
                self.sync_selection();
            }
            KeyCode::Char(c) => {
                self.view.push_query_char(c);
                self.sync_selection();
            }
            _ => {}
        }
    }

    fn handle_reading_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.view.back(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            _ => {}
        }
    }

    fn next_post(&mut self) {
        let len = self.view.visible_posts().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_post(&mut self) {
        let len = self.view.visible_posts().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Steps through "All" followed by every tag, in either direction.
    fn cycle_tag(&mut self, forward: bool) {
        let tags = self.view.tags();
        if tags.is_empty() {
            return;
        }
        let current = self
            .view
            .filter()
            .tag()
            .and_then(|t| tags.iter().position(|x| x == t));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (Some(i), true) if i + 1 < tags.len() => Some(i + 1),
            (Some(_), true) => None,
            (None, false) => Some(tags.len() - 1),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };

        match next.map(|i| tags[i].clone()) {
            Some(tag) => self.view.toggle_tag(&tag),
            None => self.view.show_all_tags(),
        }
        self.sync_selection();
    }

    /// Keeps the list selection inside the filtered list.
    fn sync_selection(&mut self) {
        let len = self.view.visible_posts().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let i = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(i));
        }
    }
}
