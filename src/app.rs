//! Host application state
//!
//! `App` embeds the session engine in a crossterm/ratatui host: it owns the
//! [`Session`], translates key and mouse events into the engine's embedding
//! contract, tracks scrollback and the input cursor, runs the cosmetic
//! header intro effect, and renders each frame.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Span, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::content;
use crate::session::Session;
use crate::view::theme::Theme;
use crate::view::{self, Row, SegmentStyle};

/// Presentation mode. Night is the default; `mode` (and Ctrl+T) toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Day,
    Night,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Day => Mode::Night,
            Mode::Night => Mode::Day,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Day => "day",
            Mode::Night => "night",
        }
    }
}

/// Incremental reveal of the site name in the header. Cosmetic only: it
/// terminates after writing every character once and never touches dispatch.
struct Intro {
    revealed: usize,
    total: usize,
    interval: Duration,
    last_tick: Instant,
}

impl Intro {
    fn new(enabled: bool, interval_ms: u64) -> Self {
        let total = content::SITE_NAME.chars().count();
        Self {
            revealed: if enabled { 0 } else { total },
            total,
            interval: Duration::from_millis(interval_ms),
            last_tick: Instant::now(),
        }
    }

    fn tick(&mut self) -> bool {
        if self.revealed >= self.total || self.last_tick.elapsed() < self.interval {
            return false;
        }
        self.revealed += 1;
        self.last_tick = Instant::now();
        true
    }

    fn title(&self) -> String {
        content::SITE_NAME.chars().take(self.revealed).collect()
    }
}

/// Where the transcript was drawn last frame, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
struct ViewportCache {
    area: Rect,
    first_row: usize,
}

pub struct App {
    session: Session,
    mode: Rc<Cell<Mode>>,
    intro: Intro,
    /// Cursor position within the pending input, in chars.
    cursor: usize,
    /// Scrollback distance, in rows up from the bottom (0 = pinned).
    scroll_offset: usize,
    rows: Vec<Row>,
    viewport: ViewportCache,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let initial = if config.start_in_day_mode {
            Mode::Day
        } else {
            Mode::Night
        };
        let mode = Rc::new(Cell::new(initial));
        let toggle = {
            let mode = Rc::clone(&mode);
            Box::new(move || mode.set(mode.get().toggled()))
        };
        let session = Session::new(config.prompt_label.clone(), toggle);

        Self {
            session,
            mode,
            intro: Intro::new(config.intro.enabled, config.intro.interval_ms),
            cursor: 0,
            scroll_offset: 0,
            rows: Vec::new(),
            viewport: ViewportCache::default(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> Theme {
        match self.mode.get() {
            Mode::Day => Theme::day(),
            Mode::Night => Theme::night(),
        }
    }

    /// Advance time-based effects. Returns true if a re-render is needed.
    pub fn tick(&mut self) -> bool {
        self.intro.tick()
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match (code, modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,

            (KeyCode::Char('t'), KeyModifiers::CONTROL) => self.toggle_mode(),

            (KeyCode::Char(c), m) if m == KeyModifiers::NONE || m == KeyModifiers::SHIFT => {
                self.insert_char(c)
            }

            (KeyCode::Backspace, KeyModifiers::NONE) => self.delete_prev_char(),
            (KeyCode::Delete, KeyModifiers::NONE) => self.delete_next_char(),

            (KeyCode::Left, KeyModifiers::NONE) => self.cursor = self.cursor.saturating_sub(1),
            (KeyCode::Right, KeyModifiers::NONE) => {
                let count = self.session.pending_input().chars().count();
                self.cursor = (self.cursor + 1).min(count);
            }
            (KeyCode::Home, KeyModifiers::NONE) => self.cursor = 0,
            (KeyCode::End, KeyModifiers::NONE) => {
                self.cursor = self.session.pending_input().chars().count()
            }

            (KeyCode::Enter, KeyModifiers::NONE) => self.submit(),

            (KeyCode::Up, KeyModifiers::NONE) => self.scroll_up(1),
            (KeyCode::Down, KeyModifiers::NONE) => self.scroll_down(1),
            (KeyCode::PageUp, KeyModifiers::NONE) => {
                self.scroll_up(self.viewport.area.height as usize)
            }
            (KeyCode::PageDown, KeyModifiers::NONE) => {
                self.scroll_down(self.viewport.area.height as usize)
            }

            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll_up(3),
            MouseEventKind::ScrollDown => self.scroll_down(3),
            MouseEventKind::Down(MouseButton::Left) => {
                self.click(event.column, event.row);
            }
            _ => {}
        }
    }

    /// Insert externally pasted text at the cursor. Newlines become spaces;
    /// a paste never triggers a submit.
    pub fn paste(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\n' | '\r' => self.insert_char(' '),
                c if c.is_control() => {}
                c => self.insert_char(c),
            }
        }
    }

    fn submit(&mut self) {
        self.session.on_submit();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    fn toggle_mode(&mut self) {
        self.mode.set(self.mode.get().toggled());
    }

    fn insert_char(&mut self, c: char) {
        let mut text = self.session.pending_input().to_string();
        let byte = byte_index(&text, self.cursor);
        text.insert(byte, c);
        self.session.on_input_change(text);
        self.cursor += 1;
    }

    fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut text = self.session.pending_input().to_string();
        let byte = byte_index(&text, self.cursor - 1);
        text.remove(byte);
        self.session.on_input_change(text);
        self.cursor -= 1;
    }

    fn delete_next_char(&mut self) {
        let text = self.session.pending_input();
        if self.cursor >= text.chars().count() {
            return;
        }
        let mut text = text.to_string();
        let byte = byte_index(&text, self.cursor);
        text.remove(byte);
        self.session.on_input_change(text);
    }

    fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = (self.scroll_offset + rows).min(self.max_scroll());
    }

    fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    fn max_scroll(&self) -> usize {
        self.rows
            .len()
            .saturating_sub(self.viewport.area.height as usize)
    }

    /// Resolve a click against the last rendered layout and open the link
    /// under it, if any. Launch failures are logged, never fatal.
    fn click(&mut self, column: u16, row: u16) {
        let area = self.viewport.area;
        if !area.contains(Position::new(column, row)) {
            return;
        }
        let row_index = self.viewport.first_row + (row - area.y) as usize;
        let Some(url) = self
            .rows
            .get(row_index)
            .and_then(|r| r.link_at(column - area.x))
        else {
            return;
        };
        tracing::info!("Opening link: {}", url);
        if let Err(e) = open::that_detached(url) {
            tracing::warn!("Failed to open {}: {}", url, e);
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let theme = self.theme();
        let window = frame.area();
        if window.height < 3 {
            return;
        }

        let header_area = Rect::new(window.x, window.y, window.width, 1);
        let transcript_area = Rect::new(window.x, window.y + 1, window.width, window.height - 2);
        let input_area = Rect::new(window.x, window.y + window.height - 1, window.width, 1);

        frame.render_widget(
            Block::new().style(Style::new().bg(theme.background).fg(theme.foreground)),
            window,
        );

        self.render_header(frame, header_area, &theme);
        self.render_transcript(frame, transcript_area, &theme);
        self.render_input(frame, input_area, &theme);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let header = ratatui::text::Line::from(vec![
            Span::styled(
                format!("/{}", self.intro.title()),
                Style::new()
                    .fg(theme.header_accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  terminal@{}  |  {} mode  |  Ctrl+T toggle · Ctrl+Q quit",
                    content::SITE_NAME,
                    self.mode.get().label()
                ),
                Style::new().fg(theme.header_fg),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_transcript(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.rows = view::layout_transcript(self.session.transcript());
        self.viewport.area = area;

        let height = area.height as usize;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        let first_row = self
            .rows
            .len()
            .saturating_sub(height + self.scroll_offset);
        self.viewport.first_row = first_row;

        let visible = self.rows.iter().skip(first_row).take(height);
        let lines: Vec<ratatui::text::Line> = visible
            .map(|row| {
                let spans: Vec<Span> = row
                    .segments
                    .iter()
                    .map(|segment| {
                        let style = match segment.style {
                            SegmentStyle::Link => theme.link_style(),
                            SegmentStyle::Kind(kind) => theme.line_style(kind),
                        };
                        Span::styled(segment.text.clone(), style)
                    })
                    .collect();
                ratatui::text::Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let prompt = self.session.prompt_label();
        let input = self.session.pending_input();
        let line = ratatui::text::Line::from(vec![
            Span::styled(prompt.to_string(), theme.prompt_style()),
            Span::raw(" "),
            Span::styled(input.to_string(), Style::new().fg(theme.foreground)),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let before_cursor: String = input.chars().take(self.cursor).collect();
        let x = prompt.width() as u16 + 1 + before_cursor.width() as u16;
        frame.set_cursor_position(Position::new(
            area.x + x.min(area.width.saturating_sub(1)),
            area.y,
        ));
    }
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
