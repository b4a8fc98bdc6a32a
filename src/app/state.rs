use crate::config::DisplayConfig;
use crate::fetch::{FetchOutcome, FetchRequest};
use crate::github::{ApiError, Entry, Profile, Repository};

use super::keys::Key;
use super::pagination::{paginate, Page};
use super::selection::TextSelection;

/// Rows taken by the header card above the file viewport
pub const HEADER_HEIGHT: u16 = 3;
/// Top bar, bottom bar and the viewport's bottom border
const CHROME_HEIGHT: u16 = 3;
/// Side borders and horizontal padding around the viewport
const CHROME_WIDTH: u16 = 4;

/// Ticks (~100ms each) a notification stays on screen
const NOTIFICATION_TICKS: u32 = 20;

// ── Enums ──

/// Which screen is shown and interactive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Typing the profile id
    Input,
    /// Overview tab of the profile view
    Profile,
    /// Repositories tab of the profile view
    Repositories,
    Files,
    FileContent,
    Search,
    /// Full-screen failure; only quitting leaves it
    Error(String),
}

impl Screen {
    /// Tab index while in the profile view (0 = Overview, 1 = Repositories)
    pub fn active_tab(&self) -> Option<usize> {
        match self {
            Screen::Profile => Some(0),
            Screen::Repositories => Some(1),
            _ => None,
        }
    }
}

/// Side effect requested by a transition, executed by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch(FetchRequest),
    Copy(String),
}

/// Size of the file-content viewport, recomputed on every resize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 20,
        }
    }
}

impl Viewport {
    /// Rows and columns left for file content once the bars, the header
    /// card and the borders are drawn
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Self {
            width: width.saturating_sub(CHROME_WIDTH).max(1),
            height: height
                .saturating_sub(HEADER_HEIGHT + CHROME_HEIGHT)
                .max(1),
        }
    }
}

// ── Session ──

/// The whole mutable state of one run
pub struct App {
    pub screen: Screen,

    /// Edited in the input screen
    pub profile_id: String,

    pub profile: Option<Profile>,

    /// Either the full listing or the last search results
    pub repositories: Vec<Repository>,

    /// Path segments of the current folder; empty = repository root
    pub directory_stack: Vec<String>,

    pub directory_listing: Vec<Entry>,

    pub selected_repository: Option<String>,

    pub selected_file: Option<String>,

    pub file_content: Option<String>,

    /// Index into whichever list the current screen shows
    pub cursor: usize,

    pub search_query: String,

    pub selection: TextSelection,

    // ── Presentation ──

    pub viewport: Viewport,

    /// First visible line of the file content
    pub content_scroll: u16,

    pub display: DisplayConfig,

    /// Fetches emitted and not yet applied
    pub in_flight: usize,

    pub spinner_tick: usize,

    pub notification: Option<String>,
    notification_ticks: u32,

    pub should_quit: bool,
}

impl App {
    pub fn new(initial_profile: Option<String>, display: DisplayConfig) -> Self {
        Self {
            screen: Screen::Input,
            profile_id: initial_profile.unwrap_or_default(),
            profile: None,
            repositories: Vec::new(),
            directory_stack: Vec::new(),
            directory_listing: Vec::new(),
            selected_repository: None,
            selected_file: None,
            file_content: None,
            cursor: 0,
            search_query: String::new(),
            selection: TextSelection::default(),
            viewport: Viewport::default(),
            content_scroll: 0,
            display,
            in_flight: 0,
            spinner_tick: 0,
            notification: None,
            notification_ticks: 0,
            should_quit: false,
        }
    }

    // ── Derived state ──

    /// Length of the list the cursor indexes on the current screen
    pub fn active_list_len(&self) -> usize {
        match self.screen {
            Screen::Repositories | Screen::Search => self.repositories.len(),
            Screen::Files => self.directory_listing.len(),
            _ => 0,
        }
    }

    pub fn page(&self) -> Page {
        paginate(self.cursor, self.active_list_len(), self.display.page_size)
    }

    /// Path of the current folder, segments joined by `/`
    pub fn current_path(&self) -> String {
        self.directory_stack.join("/")
    }

    /// Login for follow-up requests: the fetched profile's, else the typed id
    fn login(&self) -> String {
        match &self.profile {
            Some(p) => p.login.clone(),
            None => self.profile_id.trim().to_string(),
        }
    }

    fn content_line_count(&self) -> usize {
        self.file_content.as_deref().map_or(0, |c| c.lines().count())
    }

    // ── Inputs ──

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::for_terminal(width, height);
        self.clamp_scroll();
    }

    /// Apply one key. Returns at most one command for the event loop.
    pub fn handle_key(&mut self, key: Key) -> Option<Command> {
        if key == Key::Char('q') {
            self.should_quit = true;
            return None;
        }

        match self.screen {
            Screen::Input => self.input_key(key),
            Screen::Profile | Screen::Repositories if key == Key::Tab => {
                self.toggle_tab();
                None
            }
            Screen::Profile => None,
            Screen::Repositories => self.repositories_key(key),
            Screen::Files => self.files_key(key),
            Screen::FileContent => self.file_content_key(key),
            Screen::Search => self.search_key(key),
            Screen::Error(_) => None,
        }
    }

    /// Apply a completed fetch. Results are applied whatever screen is
    /// current when they arrive.
    pub fn apply(&mut self, outcome: FetchOutcome) -> Option<Command> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            FetchOutcome::Profile(Ok(profile)) => {
                tracing::info!(login = %profile.login, "profile loaded");
                let login = profile.login.clone();
                self.profile = Some(profile);
                self.fetch(FetchRequest::Repositories { login })
            }
            FetchOutcome::Repositories(Ok(repos)) => {
                tracing::info!(count = repos.len(), "repositories loaded");
                self.show_repositories(repos);
                None
            }
            FetchOutcome::Directory(Ok(entries)) => {
                tracing::debug!(
                    count = entries.len(),
                    path = %self.current_path(),
                    "directory loaded"
                );
                self.directory_listing = entries;
                self.cursor = 0;
                None
            }
            FetchOutcome::FileContent(Ok(content)) => {
                tracing::debug!(bytes = content.len(), "file loaded");
                self.file_content = Some(content);
                self.content_scroll = 0;
                self.selection.clear();
                None
            }
            FetchOutcome::Search(Ok(repos)) => {
                tracing::info!(count = repos.len(), query = %self.search_query, "search results");
                self.show_repositories(repos);
                None
            }
            FetchOutcome::Profile(Err(e))
            | FetchOutcome::Repositories(Err(e))
            | FetchOutcome::Directory(Err(e))
            | FetchOutcome::FileContent(Err(e))
            | FetchOutcome::Search(Err(e)) => {
                self.fail(e);
                None
            }
        }
    }

    // ── Per-screen key handling ──

    fn input_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Char(c) => {
                self.profile_id.push(c);
                None
            }
            Key::Backspace => {
                self.profile_id.pop();
                None
            }
            Key::Enter => {
                let id = self.profile_id.trim().to_string();
                if id.is_empty() {
                    return None;
                }
                self.screen = Screen::Profile;
                self.fetch(FetchRequest::Profile { id })
            }
            _ => None,
        }
    }

    fn toggle_tab(&mut self) {
        if self.screen == Screen::Profile {
            self.screen = Screen::Repositories;
            self.clamp_cursor();
        } else {
            self.screen = Screen::Profile;
        }
    }

    fn repositories_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Up => {
                self.cursor_up();
                None
            }
            Key::Down => {
                self.cursor_down();
                None
            }
            Key::Enter => {
                let repo = self.repositories.get(self.cursor)?.name.clone();
                self.selected_repository = Some(repo.clone());
                self.directory_stack.clear();
                self.directory_listing.clear();
                self.screen = Screen::Files;
                self.cursor = 0;
                let login = self.login();
                self.fetch(FetchRequest::Directory {
                    login,
                    repo,
                    path: String::new(),
                })
            }
            Key::Char('/') => {
                self.screen = Screen::Search;
                self.search_query.clear();
                None
            }
            Key::Escape => {
                self.screen = Screen::Profile;
                None
            }
            _ => None,
        }
    }

    fn files_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Up => {
                self.cursor_up();
                None
            }
            Key::Down => {
                self.cursor_down();
                None
            }
            Key::Enter => {
                let repo = self.selected_repository.clone()?;
                let entry = self.directory_listing.get(self.cursor)?.clone();
                if entry.is_dir() {
                    self.directory_stack.push(entry.name);
                    self.cursor = 0;
                    self.fetch_directory()
                } else {
                    let path = if self.directory_stack.is_empty() {
                        entry.name.clone()
                    } else {
                        format!("{}/{}", self.current_path(), entry.name)
                    };
                    self.selected_file = Some(entry.name);
                    self.file_content = None;
                    self.content_scroll = 0;
                    self.selection.clear();
                    self.screen = Screen::FileContent;
                    let login = self.login();
                    self.fetch(FetchRequest::FileContent { login, repo, path })
                }
            }
            Key::Escape => {
                if self.directory_stack.pop().is_some() {
                    self.cursor = 0;
                    self.fetch_directory()
                } else {
                    self.screen = Screen::Repositories;
                    self.cursor = 0;
                    None
                }
            }
            _ => None,
        }
    }

    fn file_content_key(&mut self, key: Key) -> Option<Command> {
        let selecting = self.selection.is_selecting();
        let content = self.file_content.as_deref().unwrap_or("");
        let line_width = self.viewport.width as isize;

        match key {
            Key::CtrlA => {
                self.selection.select_all(content);
                None
            }
            Key::CtrlD if selecting => {
                self.selection.release(content);
                None
            }
            Key::CtrlC if selecting => {
                let text = self.selection.selected(content).map(str::to_string);
                self.selection.clear();
                text.map(Command::Copy)
            }
            Key::Up if selecting => {
                self.selection.extend(content, -line_width);
                self.scroll_by(-1);
                None
            }
            Key::Down if selecting => {
                self.selection.extend(content, line_width);
                self.scroll_by(1);
                None
            }
            Key::Left if selecting => {
                self.selection.extend(content, -1);
                None
            }
            Key::Right if selecting => {
                self.selection.extend(content, 1);
                None
            }
            Key::Up => {
                self.scroll_by(-1);
                None
            }
            Key::Down => {
                self.scroll_by(1);
                None
            }
            Key::PageUp => {
                self.scroll_by(-(self.viewport.height as isize));
                None
            }
            Key::PageDown => {
                self.scroll_by(self.viewport.height as isize);
                None
            }
            Key::Escape => {
                if !selecting {
                    self.screen = Screen::Files;
                }
                self.selection.clear();
                None
            }
            _ => None,
        }
    }

    fn search_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Char(c) => {
                self.search_query.push(c);
                None
            }
            Key::Backspace => {
                self.search_query.pop();
                None
            }
            Key::Enter => {
                self.screen = Screen::Repositories;
                let login = self.login();
                let query = self.search_query.clone();
                self.fetch(FetchRequest::Search { login, query })
            }
            Key::Escape => {
                self.screen = Screen::Repositories;
                self.clamp_cursor();
                None
            }
            _ => None,
        }
    }

    // ── Helpers ──

    fn fetch(&mut self, request: FetchRequest) -> Option<Command> {
        self.in_flight += 1;
        tracing::debug!(?request, "fetch emitted");
        Some(Command::Fetch(request))
    }

    fn fetch_directory(&mut self) -> Option<Command> {
        let repo = self.selected_repository.clone()?;
        let login = self.login();
        let path = self.current_path();
        self.fetch(FetchRequest::Directory { login, repo, path })
    }

    fn show_repositories(&mut self, repos: Vec<Repository>) {
        self.repositories = repos;
        self.screen = Screen::Repositories;
        self.cursor = 0;
    }

    fn fail(&mut self, err: ApiError) {
        tracing::error!(error = %err, screen = ?self.screen, "fetch failed");
        self.screen = Screen::Error(err.to_string());
    }

    fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn cursor_down(&mut self) {
        let len = self.active_list_len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.active_list_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.content_line_count();
        let max = lines.saturating_sub(self.viewport.height as usize);
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: isize) {
        let current = self.content_scroll as isize;
        let next = (current + delta).clamp(0, self.max_scroll() as isize);
        self.content_scroll = next as u16;
    }

    fn clamp_scroll(&mut self) {
        self.content_scroll = self.content_scroll.min(self.max_scroll());
    }

    // ── Notifications ──

    pub fn notify(&mut self, msg: &str) {
        self.notification = Some(msg.to_string());
        self.notification_ticks = 0;
    }

    /// Called on every event loop iteration: advances the spinner and
    /// auto-clears notifications
    pub fn tick(&mut self) {
        if self.in_flight > 0 {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
        if self.notification.is_some() {
            self.notification_ticks += 1;
            if self.notification_ticks > NOTIFICATION_TICKS {
                self.notification = None;
                self.notification_ticks = 0;
            }
        }
    }

    /// Used by the event loop to report the outcome of a clipboard copy
    pub fn copied(&mut self, text: &str) {
        let lines = text.lines().count();
        self.notify(&format!(
            "Copied {} line{} to clipboard",
            lines,
            if lines == 1 { "" } else { "s" }
        ));
    }
}
