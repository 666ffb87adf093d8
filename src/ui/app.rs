//! Dashboard application loop
//!
//! One event loop owns all mutable state. Feed fetches run as spawned
//! tasks delivering a single event each; the clock ticker sends formatted
//! lines on its own channel. Both are drained between frames, so no
//! handler ever interleaves with another mid-mutation.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tracing::error;

use crate::clock::{self, Ticker};
use crate::config::Config;
use crate::feed::{FeedClient, FeedResult, FeedSource};
use crate::quotes::{Quote, QuoteBoard};
use crate::store::LocalStore;
use crate::tasks::{Task, TaskBook, TaskId, TaskStats};
use crate::theme::Theme;
use crate::weather::WeatherSnapshot;

use super::palette::Palette;
use super::panels;
use super::PanelState;

/// Input mode of the task panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    AddingTask { buffer: String },
    ConfirmDelete { id: TaskId, text: String },
}

/// Results of the spawned feed fetches
#[derive(Debug)]
pub enum AppEvent {
    WeatherLoaded(FeedResult<WeatherSnapshot>),
    QuotesLoaded(FeedResult<Vec<Quote>>),
}

/// All dashboard state, owned by the event loop
pub struct App {
    store: LocalStore,
    book: TaskBook,
    theme: Theme,
    palette: Palette,
    weather: PanelState<WeatherSnapshot>,
    quotes: PanelState<QuoteBoard>,
    clock_line: String,
    tasks: Vec<Task>,
    stats: TaskStats,
    selected: usize,
    mode: Mode,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(store: LocalStore, book: TaskBook) -> Self {
        let theme = Theme::load(&store);
        let mut app = Self {
            palette: Palette::for_theme(theme),
            theme,
            store,
            book,
            weather: PanelState::Loading,
            quotes: PanelState::Loading,
            clock_line: clock::now_line(),
            tasks: Vec::new(),
            stats: TaskStats::default(),
            selected: 0,
            mode: Mode::Normal,
            status: None,
            should_quit: false,
        };
        app.refresh_tasks();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a finished feed fetch
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WeatherLoaded(Ok(snapshot)) => {
                self.weather = PanelState::Ready(snapshot);
            }
            AppEvent::WeatherLoaded(Err(err)) => {
                error!(%err, "weather feed failed");
                self.weather = PanelState::Failed;
            }
            AppEvent::QuotesLoaded(Ok(quotes)) => {
                let mut board = QuoteBoard::new(quotes);
                board.draw();
                self.quotes = PanelState::Ready(board);
            }
            AppEvent::QuotesLoaded(Err(err)) => {
                error!(%err, "quotes feed failed");
                self.quotes = PanelState::Failed;
            }
        }
    }

    /// Apply a clock tick
    pub fn on_clock(&mut self, line: String) {
        self.clock_line = line;
    }

    /// Apply one key press according to the active mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::AddingTask { .. } => self.handle_adding_key(key),
            Mode::ConfirmDelete { .. } => self.handle_confirm_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => {
                self.mode = Mode::AddingTask {
                    buffer: String::new(),
                }
            }
            KeyCode::Char('n') => self.next_quote(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('d') => self.ask_delete_selected(),
            _ => {}
        }
    }

    fn handle_adding_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => self.submit_task(),
            KeyCode::Backspace => {
                if let Mode::AddingTask { buffer } = &mut self.mode {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Mode::AddingTask { buffer } = &mut self.mode {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.delete_confirmed(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
    }

    fn next_quote(&mut self) {
        if let PanelState::Ready(board) = &mut self.quotes {
            board.draw();
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
        self.palette = Palette::for_theme(self.theme);
        if let Err(err) = self.theme.save(&self.store) {
            self.status = Some(format!("Could not save theme: {}", err));
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn toggle_selected(&mut self) {
        let Some(task) = self.tasks.get(self.selected) else {
            return;
        };
        if let Err(err) = self.book.toggle(task.id) {
            self.status = Some(format!("Could not save task: {}", err));
        }
        self.refresh_tasks();
    }

    fn ask_delete_selected(&mut self) {
        let Some(task) = self.tasks.get(self.selected) else {
            return;
        };
        self.mode = Mode::ConfirmDelete {
            id: task.id,
            text: task.text.clone(),
        };
    }

    fn submit_task(&mut self) {
        let Mode::AddingTask { buffer } = &self.mode else {
            return;
        };
        let text = buffer.clone();
        match self.book.add(&text) {
            Ok(Some(task)) => {
                self.status = Some(format!("Added \"{}\"", task.text));
                self.mode = Mode::Normal;
                self.refresh_tasks();
                self.selected = self.tasks.len().saturating_sub(1);
            }
            // Blank input: keep the entry open, like a form that refocuses
            Ok(None) => {}
            Err(err) => {
                self.status = Some(format!("Could not save task: {}", err));
                self.mode = Mode::Normal;
                self.refresh_tasks();
            }
        }
    }

    fn delete_confirmed(&mut self) {
        let Mode::ConfirmDelete { id, .. } = self.mode else {
            return;
        };
        match self.book.remove(id) {
            Ok(Some(task)) => self.status = Some(format!("Deleted \"{}\"", task.text)),
            Ok(None) => self.status = Some("Task was already gone".to_string()),
            Err(err) => self.status = Some(format!("Could not delete task: {}", err)),
        }
        self.mode = Mode::Normal;
        self.refresh_tasks();
    }

    /// Reload the list from the store and recompute everything derived
    /// from it
    fn refresh_tasks(&mut self) {
        match self.book.load() {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => {
                self.status = Some(format!("Could not load tasks: {}", err));
                self.tasks.clear();
            }
        }
        self.stats = TaskStats::of(&self.tasks);
        if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len().saturating_sub(1);
        }
    }
}

/// Run the dashboard until the user quits
pub async fn run(config: Config) -> Result<()> {
    let store = LocalStore::open(&config.store.data_dir)?;
    let book = TaskBook::new(store.clone());
    let mut app = App::new(store, book);

    let client = FeedClient::new(config.feeds.request_timeout_ms);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let weather_source = FeedSource::parse(&config.feeds.weather);
    let weather_client = client.clone();
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = weather_client.fetch_value(&weather_source).await;
        let snapshot = result.map(|doc| WeatherSnapshot::normalize(&doc));
        let _ = tx.send(AppEvent::WeatherLoaded(snapshot));
    });

    let quotes_source = FeedSource::parse(&config.feeds.quotes);
    let quotes_client = client.clone();
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = quotes_client.fetch_json::<Vec<Quote>>(&quotes_source).await;
        let _ = tx.send(AppEvent::QuotesLoaded(result));
    });

    let (clock_tx, mut clock_rx) = mpsc::unbounded_channel();
    let ticker = Ticker::spawn(Duration::from_millis(config.clock.interval_ms), clock_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    while !app.should_quit() {
        while let Ok(evt) = event_rx.try_recv() {
            app.on_event(evt);
        }
        while let Ok(line) = clock_rx.try_recv() {
            app.on_clock(line);
        }

        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    ticker.stop();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let palette = &app.palette;
    let backdrop =
        Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    frame.render_widget(backdrop, frame.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[0]);

    let weather = Paragraph::new(panels::weather_lines(&app.weather, palette))
        .block(titled_block(" Weather ", palette))
        .wrap(Wrap { trim: false });
    frame.render_widget(weather, left[0]);

    let quote = Paragraph::new(panels::quote_lines(&app.quotes, palette))
        .block(titled_block(" Quotes ", palette))
        .wrap(Wrap { trim: false });
    frame.render_widget(quote, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(columns[1]);

    let tasks = Paragraph::new(panels::task_lines(
        &app.tasks,
        app.selected,
        &app.mode,
        palette,
    ))
    .block(titled_block(" Tasks ", palette))
    .wrap(Wrap { trim: false });
    frame.render_widget(tasks, right[0]);

    if let Some(summary) = app.stats.summary() {
        let stats = Paragraph::new(Line::from(Span::styled(
            summary,
            Style::default().fg(palette.muted),
        )));
        frame.render_widget(stats, right[1]);
    }

    let hints = Paragraph::new(panels::hint_line(
        &app.mode,
        app.status.as_deref(),
        palette,
    ));
    frame.render_widget(hints, rows[2]);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let right_text = format!("{}  {}", app.theme.icon(), app.clock_line);
    let right_width = right_text.chars().count() as u16 + 1;

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "⛅ Daydash",
        Style::default()
            .fg(app.palette.title)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, parts[0]);

    let clock = Paragraph::new(Line::from(Span::styled(
        right_text,
        Style::default().fg(app.palette.text),
    )));
    frame.render_widget(clock, parts[1]);
}

fn titled_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
}
