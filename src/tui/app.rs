use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{AppConfig, Task};
use crate::ops::filter::{self, DateFilter, StatusFilter};
use crate::ops::plural;
use crate::store::{self, FileStorage, TaskStore};
use crate::tui::theme::Theme;

use super::{input, render};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Search,
    Confirm,
    DuePick,
}

/// What the edit line is editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// Adding a new task
    New,
    /// Retitling the task with this id
    Retitle(String),
}

/// A destructive mutation waiting on the confirmation gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { id: String },
    ClearCompleted,
    ClearAll,
}

/// Pending confirmation prompt
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub config: AppConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,

    pub status_filter: StatusFilter,
    pub date_filter: DateFilter,

    /// Query being typed in Search mode
    pub search_input: String,
    /// Query the filter engine actually uses
    pub applied_query: String,
    /// When the pending debounce timer fires; typing resets it
    pub search_deadline: Option<Instant>,

    /// Tasks currently displayed, rebuilt each frame from the store
    pub visible: Vec<Task>,
    pub cursor: usize,
    pub scroll_offset: usize,

    pub edit_buffer: String,
    /// Byte offset into edit_buffer
    pub edit_cursor: usize,
    pub edit_target: Option<EditTarget>,

    pub confirm_state: Option<ConfirmState>,
    /// Task id awaiting a due-date quick pick
    pub due_pick_id: Option<String>,

    pub show_help: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TaskStore, config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.colors);
        App {
            store,
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            status_filter: StatusFilter::All,
            date_filter: DateFilter::All,
            search_input: String::new(),
            applied_query: String::new(),
            search_deadline: None,
            visible: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            confirm_state: None,
            due_pick_id: None,
            show_help: false,
            status_message: None,
        }
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Re-derive the visible task list from the store and current filters.
    /// Runs once per frame; clamps the cursor to the new list.
    pub fn refresh(&mut self) {
        let today = self.today();
        self.visible = filter::visible_tasks(
            self.store.tasks(),
            self.status_filter,
            self.date_filter,
            &self.applied_query,
            today,
        )
        .into_iter()
        .cloned()
        .collect();

        if self.visible.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
        }
    }

    /// Id of the task under the cursor
    pub fn selected_id(&self) -> Option<String> {
        self.visible.get(self.cursor).map(|t| t.id.clone())
    }

    /// The "items left" label in the configured locale, over the FULL list
    pub fn items_left(&self) -> String {
        plural::items_left_label(&self.config.locale, self.store.pending())
    }

    /// Reset the debounce timer; called on every Search-mode keystroke
    pub fn bump_search_deadline(&mut self) {
        self.search_deadline =
            Some(Instant::now() + Duration::from_millis(self.config.debounce_ms));
    }

    /// Apply the typed query immediately and cancel the pending timer
    pub fn apply_search_now(&mut self) {
        self.applied_query = self.search_input.clone();
        self.search_deadline = None;
    }

    /// Fire the debounce timer if its deadline has passed.
    /// A superseded deadline never fires: each keystroke replaced it.
    pub fn tick(&mut self) {
        if let Some(deadline) = self.search_deadline
            && Instant::now() >= deadline
        {
            self.apply_search_now();
        }
    }

    /// Poll timeout: short enough to fire the debounce timer promptly
    pub fn poll_timeout(&self) -> Duration {
        let frame = Duration::from_millis(250);
        match self.search_deadline {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(frame),
            None => frame,
        }
    }
}

/// Run the TUI against the given data directory
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Arc::new(FileStorage::open(data_dir)?);
    let store = TaskStore::open(storage);
    let config = store::load_config(data_dir);
    let mut app = App::new(store, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.refresh();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(app.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                }
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
