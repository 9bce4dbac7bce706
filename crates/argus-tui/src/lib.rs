// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use argus_app::{
    AppCommand, AppState, ApplyOutcome, InputFocus, MessageThread, PageStep, SearchMatch, Section,
    SectionPage, SectionRecords, SectionStore, StyleProfile, ThreadOverlayKind, UploadOutcome,
    controls, panel_visible, search_matches, step_target, style_profile,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::macros::format_description;

const CURSOR_MARK: &str = "▸";
const PREV_MARK: &str = "◀";
const NEXT_MARK: &str = "▶";

/// Seam between the UI loop and the backend. The synchronous methods
/// do the work; the `spawn_*` defaults run them in place and push the
/// outcome onto the internal event channel, so tests drive the loop
/// without threads. The real runtime overrides the spawns.
pub trait AppRuntime {
    fn load_page(&mut self, section: Section, page: u32, per_page: u32) -> Result<SectionPage>;

    /// Uploads the file, free to push `UploadEvent::Progress` onto the
    /// channel while the body streams.
    fn upload(&mut self, path: &Path, tx: &Sender<InternalEvent>) -> Result<UploadOutcome>;

    fn spawn_page_load(
        &mut self,
        section: Section,
        seq: u64,
        page: u32,
        per_page: u32,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let outcome = match self.load_page(section, page, per_page) {
            Ok(page) => FetchOutcome::Loaded(Box::new(page)),
            Err(error) => FetchOutcome::Failed(error.to_string()),
        };
        tx.send(InternalEvent::Fetch {
            section,
            seq,
            outcome,
        })
        .map_err(|_| anyhow!("fetch event channel closed"))?;
        Ok(())
    }

    fn spawn_upload(&mut self, path: PathBuf, tx: Sender<InternalEvent>) -> Result<()> {
        let event = match self.upload(&path, &tx) {
            Ok(outcome) => InternalEvent::Upload(UploadEvent::Completed {
                reload_required: outcome.reload_required,
            }),
            Err(error) => InternalEvent::Upload(UploadEvent::Failed {
                error: error.to_string(),
            }),
        };
        tx.send(event)
            .map_err(|_| anyhow!("upload event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus {
        token: u64,
    },
    Fetch {
        section: Section,
        seq: u64,
        outcome: FetchOutcome,
    },
    Upload(UploadEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Box<SectionPage>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    Progress { percent: u8 },
    Completed { reload_required: bool },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct SearchUiState {
    query: String,
    matches: Vec<SearchMatch>,
    cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct UploadUiState {
    path_input: String,
    in_flight: bool,
    percent: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Overlay {
    #[default]
    None,
    Thread {
        kind: ThreadOverlayKind,
        thread: MessageThread,
    },
    /// The selected index no longer resolves against the cached page;
    /// shown instead of silently reusing whatever record moved there.
    ThreadMissing {
        kind: ThreadOverlayKind,
        index: usize,
    },
    Inspector {
        section: Section,
        profile: StyleProfile,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    store: SectionStore,
    cursor: [usize; Section::ALL.len()],
    search: SearchUiState,
    overlay: Overlay,
    upload: UploadUiState,
    status_token: u64,
}

impl ViewData {
    fn new(per_page: u32) -> Self {
        Self {
            store: SectionStore::new(per_page),
            cursor: [0; Section::ALL.len()],
            search: SearchUiState::default(),
            overlay: Overlay::None,
            upload: UploadUiState::default(),
            status_token: 0,
        }
    }

    fn active_cursor(&self, state: &AppState) -> usize {
        self.cursor[state.active_section.index()]
    }
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R, per_page: u32) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(per_page);
    let (internal_tx, internal_rx) = mpsc::channel();

    request_page(
        state,
        runtime,
        &mut view_data,
        &internal_tx,
        state.active_section,
        1,
    );

    let mut result = Ok(());
    loop {
        process_internal_events(state, runtime, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Fetch {
                section,
                seq,
                outcome,
            } => handle_fetch_outcome(state, view_data, tx, section, seq, outcome),
            InternalEvent::Upload(event) => {
                handle_upload_event(state, runtime, view_data, tx, event);
            }
        }
    }
}

fn handle_fetch_outcome(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    section: Section,
    seq: u64,
    outcome: FetchOutcome,
) {
    match outcome {
        FetchOutcome::Loaded(page) => {
            if view_data.store.apply(section, seq, *page) == ApplyOutcome::Stale {
                return;
            }
            clamp_cursor(view_data, section);
            if section == state.active_section {
                // A fresh page starts with a blank search, the panel
                // hidden. Matches against the replaced records would
                // carry indices into rows that no longer exist.
                view_data.search = SearchUiState::default();
            }
        }
        FetchOutcome::Failed(error) => {
            emit_status(
                state,
                view_data,
                tx,
                format!("load {} failed: {error}", section.as_str()),
            );
        }
    }
}

fn handle_upload_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    event: UploadEvent,
) {
    match event {
        UploadEvent::Progress { percent } => {
            if view_data.upload.in_flight {
                view_data.upload.percent = Some(percent);
            }
        }
        UploadEvent::Completed { reload_required } => {
            view_data.upload = UploadUiState::default();
            emit_status(state, view_data, tx, "upload complete");
            if reload_required {
                // Only the section on screen refetches; the rest stay
                // cached until their next activation.
                request_page(state, runtime, view_data, tx, state.active_section, 1);
            }
        }
        UploadEvent::Failed { error } => {
            view_data.upload = UploadUiState::default();
            emit_status(state, view_data, tx, format!("upload failed: {error}"));
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn request_page<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    section: Section,
    page: u32,
) {
    let per_page = view_data.store.per_page(section);
    let seq = view_data.store.begin_fetch(section);
    if let Err(error) = runtime.spawn_page_load(section, seq, page, per_page, internal_tx.clone()) {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("load {} failed: {error}", section.as_str()),
        );
    }
}

fn refresh_search(state: &AppState, view_data: &mut ViewData) {
    let records = view_data.store.records(state.active_section);
    view_data.search.matches = search_matches(records, &view_data.search.query);
    if view_data.search.cursor >= view_data.search.matches.len() {
        view_data.search.cursor = 0;
    }
}

fn clamp_cursor(view_data: &mut ViewData, section: Section) {
    let len = view_data.store.records(section).len();
    let cursor = &mut view_data.cursor[section.index()];
    if len == 0 {
        *cursor = 0;
    } else if *cursor >= len {
        *cursor = len - 1;
    }
}

fn activate_section<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    section: Section,
) {
    state.dispatch(AppCommand::ActivateSection(section));
    view_data.overlay = Overlay::None;
    view_data.search = SearchUiState::default();
    // Every activation starts over from page 1, cached or not; the
    // sequence numbers in the store keep a slower earlier fetch from
    // clobbering this one.
    request_page(state, runtime, view_data, internal_tx, section, 1);
}

fn rotate_section<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    forward: bool,
) {
    let command = if forward {
        AppCommand::NextSection
    } else {
        AppCommand::PrevSection
    };
    state.dispatch(command);
    view_data.overlay = Overlay::None;
    view_data.search = SearchUiState::default();
    request_page(state, runtime, view_data, internal_tx, state.active_section, 1);
}

fn open_thread_overlay(view_data: &mut ViewData, state: &AppState, index: usize) {
    let section = state.active_section;
    let Some(kind) = section.policy().overlay else {
        return;
    };
    view_data.overlay = match view_data.store.records(section).thread(index) {
        Some(thread) => Overlay::Thread {
            kind,
            thread: thread.clone(),
        },
        None => Overlay::ThreadMissing { kind, index },
    };
}

fn open_inspector(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let section = state.active_section;
    match style_profile(section) {
        Some(profile) => {
            view_data.overlay = Overlay::Inspector { section, profile };
        }
        None => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("no inspector for {}", section.label()),
            );
        }
    }
}

fn step_active_page<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    step: PageStep,
) {
    let section = state.active_section;
    let page = view_data.store.page(section);
    let total_pages = view_data.store.total_pages(section);
    if let Some(target) = step_target(page, total_pages, step) {
        request_page(state, runtime, view_data, internal_tx, section, target);
    }
}

fn start_upload<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let path = view_data.upload.path_input.trim().to_owned();
    if path.is_empty() {
        emit_status(state, view_data, internal_tx, "upload: enter a file path");
        return;
    }

    view_data.upload.in_flight = true;
    view_data.upload.percent = Some(0);
    state.dispatch(AppCommand::FocusList);
    if let Err(error) = runtime.spawn_upload(PathBuf::from(path), internal_tx.clone()) {
        view_data.upload = UploadUiState::default();
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("upload failed: {error}"),
        );
    }
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.overlay != Overlay::None {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            view_data.overlay = Overlay::None;
        }
        return false;
    }

    match state.focus {
        InputFocus::Search => handle_search_key(state, view_data, key),
        InputFocus::Upload => handle_upload_key(state, runtime, view_data, internal_tx, key),
        InputFocus::List => handle_list_key(state, runtime, view_data, internal_tx, key),
    }
    false
}

fn handle_search_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            view_data.search = SearchUiState::default();
            state.dispatch(AppCommand::FocusList);
        }
        KeyCode::Enter => {
            let Some(hit) = view_data
                .search
                .matches
                .get(view_data.search.cursor)
                .cloned()
            else {
                state.dispatch(AppCommand::FocusList);
                return;
            };
            view_data.cursor[state.active_section.index()] = hit.index;
            state.dispatch(AppCommand::FocusList);
            if hit.opens_overlay {
                open_thread_overlay(view_data, state, hit.index);
            }
        }
        KeyCode::Up => {
            view_data.search.cursor = view_data.search.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            let last = view_data.search.matches.len().saturating_sub(1);
            view_data.search.cursor = (view_data.search.cursor + 1).min(last);
        }
        KeyCode::Backspace => {
            view_data.search.query.pop();
            refresh_search(state, view_data);
        }
        KeyCode::Char(c) => {
            view_data.search.query.push(c);
            refresh_search(state, view_data);
        }
        _ => {}
    }
}

fn handle_upload_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            view_data.upload.path_input.clear();
            state.dispatch(AppCommand::FocusList);
        }
        KeyCode::Enter => start_upload(state, runtime, view_data, internal_tx),
        KeyCode::Backspace => {
            view_data.upload.path_input.pop();
        }
        KeyCode::Char(c) => view_data.upload.path_input.push(c),
        _ => {}
    }
}

fn handle_list_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('f') | KeyCode::Tab => {
            rotate_section(state, runtime, view_data, internal_tx, true);
        }
        KeyCode::Char('b') | KeyCode::BackTab => {
            rotate_section(state, runtime, view_data, internal_tx, false);
        }
        KeyCode::Char(digit @ '1'..='6') => {
            if let Some(section) = digit
                .to_digit(10)
                .and_then(|n| Section::ALL.get(n as usize - 1))
            {
                activate_section(state, runtime, view_data, internal_tx, *section);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = view_data.store.records(state.active_section).len();
            let cursor = &mut view_data.cursor[state.active_section.index()];
            *cursor = (*cursor + 1).min(len.saturating_sub(1));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let cursor = &mut view_data.cursor[state.active_section.index()];
            *cursor = cursor.saturating_sub(1);
        }
        KeyCode::Char('n') | KeyCode::Right => {
            step_active_page(state, runtime, view_data, internal_tx, PageStep::Next);
        }
        KeyCode::Char('p') | KeyCode::Left => {
            step_active_page(state, runtime, view_data, internal_tx, PageStep::Previous);
        }
        KeyCode::Enter => {
            let index = view_data.active_cursor(state);
            if state.active_section.policy().overlay.is_some() {
                open_thread_overlay(view_data, state, index);
            } else {
                open_inspector(state, view_data, internal_tx);
            }
        }
        KeyCode::Char('i') => open_inspector(state, view_data, internal_tx),
        KeyCode::Char('/') => {
            state.dispatch(AppCommand::FocusSearch);
            refresh_search(state, view_data);
        }
        KeyCode::Char('u') => {
            if !view_data.upload.in_flight {
                state.dispatch(AppCommand::FocusUpload);
            }
        }
        KeyCode::Char('r') => {
            request_page(
                state,
                runtime,
                view_data,
                internal_tx,
                state.active_section,
                1,
            );
        }
        _ => {}
    }
}

fn marker(selected: bool) -> &'static str {
    if selected { CURSOR_MARK } else { " " }
}

/// Lines for one section's list pane. An empty collection projects to
/// nothing at all, headers included.
fn section_lines(records: &SectionRecords, cursor: usize) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }

    match records {
        SectionRecords::Conversations(rows) | SectionRecords::Messages(rows) => rows
            .iter()
            .enumerate()
            .map(|(index, row)| format!("{} {}  {}", marker(index == cursor), row.name, row.last_message))
            .collect(),
        SectionRecords::Calls(rows) => rows
            .iter()
            .enumerate()
            .map(|(index, row)| format!("{} {}  {}", marker(index == cursor), row.name, row.time))
            .collect(),
        SectionRecords::Keylogs(rows) => {
            // Table rows, not cards; no cursor.
            let mut lines = vec![format!(
                "  {:<20} {:<18} {}",
                "application", "time", "text"
            )];
            lines.extend(rows.iter().map(|row| {
                format!("  {:<20} {:<18} {}", row.application, row.time, row.text)
            }));
            lines
        }
        SectionRecords::Contacts(rows) => rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                format!("{} {}  {}", marker(index == cursor), row.name, row.phone_number)
            })
            .collect(),
        SectionRecords::InstalledApps(rows) => rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                format!("{} {}  v{}", marker(index == cursor), row.name, row.version)
            })
            .collect(),
    }
}

fn render_section_text(view_data: &ViewData, state: &AppState) -> String {
    let section = state.active_section;
    let records = view_data.store.records(section);
    section_lines(records, view_data.active_cursor(state)).join("\n")
}

/// The pagination strip, or an empty string when a single page exists
/// and no controls render.
fn pagination_line(view_data: &ViewData, section: Section) -> String {
    let page = view_data.store.page(section);
    let total_pages = view_data.store.total_pages(section);
    match controls(page, total_pages) {
        Some(controls) => format!(
            " {} {} {}",
            if controls.prev_enabled { PREV_MARK } else { " " },
            controls.label,
            if controls.next_enabled { NEXT_MARK } else { " " },
        ),
        None => String::new(),
    }
}

fn thread_overlay_title(kind: ThreadOverlayKind, name: &str) -> String {
    format!("{} - {}", kind.title(), name)
}

fn inspector_title(section: Section) -> String {
    format!("inspector - {}", section.label())
}

fn render_thread_overlay_text(thread: &MessageThread) -> String {
    thread
        .messages
        .iter()
        .map(|message| format!("{}: {}", message.sender, message.content))
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_thread_missing_text(index: usize) -> String {
    format!("record {index} is no longer on this page")
}

fn render_inspector_text(profile: &StyleProfile) -> String {
    [
        format!("element: {}", profile.element),
        format!("x: {}", profile.x),
        format!("y: {}", profile.y),
        format!("width: {}", profile.width),
        format!("height: {}", profile.height),
        format!("font-family: {}", profile.font_family),
        format!("font-size: {}", profile.font_size),
        format!("line-height: {}", profile.line_height),
        format!("text-align: {}", profile.text_align),
        format!("letter-spacing: {}", profile.letter_spacing),
        format!("fill: {}", profile.fill),
    ]
    .join("\n")
}

fn render_search_panel_text(search: &SearchUiState) -> String {
    search
        .matches
        .iter()
        .enumerate()
        .map(|(index, hit)| format!("{} {}", marker(index == search.cursor), hit.label))
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_upload_text(upload: &UploadUiState) -> String {
    if upload.in_flight {
        format!("uploading {}%", upload.percent.unwrap_or(0))
    } else {
        format!(
            "file path: {}▌\n\nenter to upload, esc to cancel",
            upload.path_input
        )
    }
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if let Some(line) = &state.status_line {
        return line.clone();
    }
    if state.focus == InputFocus::Search {
        return format!("search: {}▌", view_data.search.query);
    }
    if view_data.upload.in_flight {
        return format!("uploading {}%", view_data.upload.percent.unwrap_or(0));
    }

    let hint =
        "f/b sections  j/k select  enter open  i inspect  / search  u upload  r reload  ctrl+q quit";
    match fetched_at_label(view_data, state.active_section) {
        Some(fetched) => format!("{hint}  [{fetched}]"),
        None => hint.to_owned(),
    }
}

fn fetched_at_label(view_data: &ViewData, section: Section) -> Option<String> {
    let format = format_description!("[hour]:[minute]:[second]");
    let stamp = view_data.store.fetched_at(section)?.format(&format).ok()?;
    Some(format!("fetched {stamp}"))
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let selected = state.active_section.index();
    let tabs = Tabs::new(Section::ALL.iter().map(|section| section.label()))
        .block(Block::default().title("argus").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    let body = Paragraph::new(render_section_text(view_data, state)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(state.active_section.list_target()),
    );
    frame.render_widget(body, layout[1]);

    let pagination = Paragraph::new(pagination_line(view_data, state.active_section))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(pagination, layout[2]);

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, layout[3]);

    if panel_visible(&view_data.search.query, &view_data.search.matches) {
        let area = centered_rect(60, 50, frame.area());
        frame.render_widget(Clear, area);
        let panel = Paragraph::new(render_search_panel_text(&view_data.search)).block(
            Block::default()
                .title(state.active_section.search_target())
                .borders(Borders::ALL),
        );
        frame.render_widget(panel, area);
    }

    if state.focus == InputFocus::Upload || view_data.upload.in_flight {
        let area = centered_rect(60, 30, frame.area());
        frame.render_widget(Clear, area);
        let upload = Paragraph::new(render_upload_text(&view_data.upload))
            .block(Block::default().title("upload").borders(Borders::ALL));
        frame.render_widget(upload, area);
    }

    match &view_data.overlay {
        Overlay::None => {}
        Overlay::Thread { kind, thread } => {
            let area = centered_rect(70, 60, frame.area());
            frame.render_widget(Clear, area);
            let body = Paragraph::new(render_thread_overlay_text(thread)).block(
                Block::default()
                    .title(thread_overlay_title(*kind, &thread.name))
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
            frame.render_widget(body, area);
        }
        Overlay::ThreadMissing { kind, index } => {
            let area = centered_rect(50, 30, frame.area());
            frame.render_widget(Clear, area);
            let body = Paragraph::new(render_thread_missing_text(*index)).block(
                Block::default()
                    .title(kind.title())
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Red)),
            );
            frame.render_widget(body, area);
        }
        Overlay::Inspector { section, profile } => {
            let area = centered_rect(50, 60, frame.area());
            frame.render_widget(Clear, area);
            let body = Paragraph::new(render_inspector_text(profile)).block(
                Block::default()
                    .title(inspector_title(*section))
                    .borders(Borders::ALL),
            );
            frame.render_widget(body, area);
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
