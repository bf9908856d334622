use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::config::Config;
use crate::content::ContentStore;
use crate::controller::{Controller, Theme};
use crate::markup;
use crate::prefs::Prefs;
use crate::settings::{Keymap, Settings};
use crate::ui::pane::ContentPane;
use crate::ui::sidebar::Sidebar;
use crate::ui::windows::help::HelpWindow;

/// Body lines are re-wrapped only when the lesson or the pane width
/// changes, not on every draw.
struct BodyCache {
    key: String,
    width: u16,
    lines: Vec<String>,
}

pub struct Viewer {
    controller: Controller,
    config: Config,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    body_cache: Option<BodyCache>,
    help_scroll: u16,
}

impl Viewer {
    pub fn new(config: Config, start_key: Option<&str>) -> eyre::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        let prefs = Prefs::new()?;
        let (width, _) = crossterm::terminal::size().unwrap_or((100, 30));

        let controller = Controller::new(
            ContentStore::curriculum(),
            Box::new(prefs),
            config.settings.narrow_width,
            width,
            start_key,
        )?;

        Ok(Self {
            controller,
            config,
            terminal,
            body_cache: None,
            help_scroll: 0,
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> eyre::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
        if self.config.settings.mouse_support {
            crossterm::execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;
        }

        self.terminal.clear()?;
        self.terminal.hide_cursor()?;

        loop {
            if self.controller.ui.should_quit {
                break;
            }

            self.ensure_body_cache();

            {
                let body: &[String] = self
                    .body_cache
                    .as_ref()
                    .map(|cache| cache.lines.as_slice())
                    .unwrap_or(&[]);
                let controller = &self.controller;
                let config = &self.config;
                let help_scroll = self.help_scroll;
                self.terminal.draw(|f| {
                    Self::render_static(f, controller, body, config, help_scroll);
                })?;
            }

            // Nothing animates; block until input arrives or the poll
            // wakes us to notice an external terminal change.
            if !crossterm::event::poll(Duration::from_secs(60))? {
                continue;
            }

            match crossterm::event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key)?;
                    }
                }
                Event::Resize(width, _) => {
                    self.controller.handle_resize(width);
                }
                _ => {}
            }
        }

        self.terminal.clear()?;
        self.terminal.show_cursor()?;
        if self.config.settings.mouse_support {
            crossterm::execute!(io::stdout(), crossterm::event::DisableMouseCapture)?;
        }
        crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
        crossterm::terminal::disable_raw_mode()?;

        Ok(())
    }

    /// Re-wrap the active lesson body if the lesson or pane width moved
    /// under us.
    fn ensure_body_cache(&mut self) {
        let width = self.content_width();
        let key = self.controller.ui.active_key.clone();

        let stale = match &self.body_cache {
            Some(cache) => cache.key != key || cache.width != width,
            None => true,
        };
        if stale {
            let record = self.controller.active_record();
            let lines = markup::render(record.body, width as usize);
            self.body_cache = Some(BodyCache { key, width, lines });
        }
    }

    /// Inner text width of the content pane under the current layout.
    fn content_width(&self) -> u16 {
        let (term_width, _) = crossterm::terminal::size().unwrap_or((100, 30));
        let pane_width = if self.controller.ui.is_narrow {
            term_width
        } else {
            term_width.saturating_sub(self.config.settings.sidebar_width)
        };
        // Bordered pane: two columns of chrome
        pane_width.saturating_sub(2).max(20)
    }

    fn content_view_height(&self) -> usize {
        let (_, term_height) = crossterm::terminal::size().unwrap_or((100, 30));
        // Header and footer line around the main area
        ContentPane::view_height(term_height.saturating_sub(2))
    }

    fn body_len(&self) -> usize {
        self.body_cache
            .as_ref()
            .map(|cache| cache.lines.len())
            .unwrap_or(0)
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> eyre::Result<()> {
        let keymap = self.config.keymap.clone();

        if self.controller.ui.show_help {
            self.handle_help_keys(key, &keymap);
            return Ok(());
        }

        if let KeyCode::Char(c) = key.code {
            if Some(c) == Keymap::key_of(&keymap.quit) {
                // Close the topmost thing; quit from the base view
                if self.controller.ui.is_narrow && self.controller.ui.sidebar_open {
                    self.controller.close_sidebar();
                } else {
                    self.controller.ui.should_quit = true;
                }
                return Ok(());
            }
            if Some(c) == Keymap::key_of(&keymap.switch_color) {
                self.controller.toggle_theme()?;
                return Ok(());
            }
            if Some(c) == Keymap::key_of(&keymap.toggle_menu) {
                self.controller.handle_menu_key();
                return Ok(());
            }
            if Some(c) == Keymap::key_of(&keymap.help) {
                self.controller.ui.show_help = true;
                self.help_scroll = 0;
                return Ok(());
            }
        }

        if key.code == KeyCode::Esc {
            self.controller.handle_escape();
            return Ok(());
        }

        if self.controller.sidebar_focused() {
            self.handle_sidebar_keys(key, &keymap);
        } else {
            self.handle_content_keys(key, &keymap);
        }
        Ok(())
    }

    fn handle_help_keys(&mut self, key: KeyEvent, keymap: &Keymap) {
        let total = HelpWindow::get_total_lines(keymap) as u16;
        match key.code {
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.scroll_down) => {
                self.help_scroll = (self.help_scroll + 1).min(total.saturating_sub(1));
            }
            KeyCode::Down => {
                self.help_scroll = (self.help_scroll + 1).min(total.saturating_sub(1));
            }
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.scroll_up) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            KeyCode::Up => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            _ => {
                self.controller.ui.show_help = false;
            }
        }
    }

    fn handle_sidebar_keys(&mut self, key: KeyEvent, keymap: &Keymap) {
        match key.code {
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.scroll_down) => {
                self.controller.sidebar_cursor_down();
            }
            KeyCode::Down => self.controller.sidebar_cursor_down(),
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.scroll_up) => {
                self.controller.sidebar_cursor_up();
            }
            KeyCode::Up => self.controller.sidebar_cursor_up(),
            KeyCode::Enter => self.controller.activate_sidebar_cursor(),
            _ => {}
        }
    }

    fn handle_content_keys(&mut self, key: KeyEvent, keymap: &Keymap) {
        let page = self.content_view_height().max(1);
        let max_scroll = ContentPane::max_scroll(self.body_len(), self.content_view_height());
        let row = &mut self.controller.ui.scroll_row;

        match key.code {
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.scroll_down) => {
                *row = (*row + 1).min(max_scroll);
            }
            KeyCode::Down => *row = (*row + 1).min(max_scroll),
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.scroll_up) => {
                *row = row.saturating_sub(1);
            }
            KeyCode::Up => *row = row.saturating_sub(1),
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.page_down) => {
                *row = (*row + page).min(max_scroll);
            }
            KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Right => {
                *row = (*row + page).min(max_scroll);
            }
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.page_up) => {
                *row = row.saturating_sub(page);
            }
            KeyCode::PageUp | KeyCode::Left => *row = row.saturating_sub(page),
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.top) => *row = 0,
            KeyCode::Home => *row = 0,
            KeyCode::Char(c) if Some(c) == Keymap::key_of(&keymap.bottom) => *row = max_scroll,
            KeyCode::End => *row = max_scroll,
            _ => {}
        }
    }

    /// The whole frame is a projection of the controller state; nothing
    /// here mutates anything.
    fn render_static(
        frame: &mut Frame,
        controller: &Controller,
        body: &[String],
        config: &Config,
        help_scroll: u16,
    ) {
        let base = Self::theme_style(&config.settings, controller.ui.theme);
        let frame_area = frame.area();
        frame.render_widget(Block::default().style(base), frame_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame_area);

        Self::render_header(frame, chunks[0], controller, body.len(), base);

        let record = controller.active_record();
        let rows = controller.sidebar_rows();

        if controller.ui.is_narrow {
            ContentPane::render(frame, chunks[1], record, body, controller.ui.scroll_row, base);
            if controller.ui.sidebar_open {
                Sidebar::render_overlay(frame, chunks[1], &rows, controller.ui.sidebar_cursor, base);
            }
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(config.settings.sidebar_width),
                    Constraint::Min(0),
                ])
                .split(chunks[1]);
            Sidebar::render_panel(
                frame,
                columns[0],
                &rows,
                controller.ui.sidebar_cursor,
                controller.sidebar_focused(),
                base,
            );
            ContentPane::render(frame, columns[1], record, body, controller.ui.scroll_row, base);
        }

        Self::render_footer(frame, chunks[2], controller, &config.keymap, base);

        if controller.ui.show_help {
            HelpWindow::render(frame, frame_area, &config.keymap, help_scroll);
        }
    }

    fn render_header(
        frame: &mut Frame,
        area: Rect,
        controller: &Controller,
        total_lines: usize,
        base: Style,
    ) {
        let title = format!(" tutui - {}", controller.active_record().title);
        let right = if total_lines > 0 {
            let percent = (controller.ui.scroll_row.saturating_mul(100)) / total_lines;
            format!("{}% ", percent.min(100))
        } else {
            String::new()
        };

        let width = area.width as usize;
        let pad = width
            .saturating_sub(title.chars().count())
            .saturating_sub(right.chars().count());
        let line = format!("{}{}{}", title, " ".repeat(pad), right);

        let header =
            Paragraph::new(Line::from(line)).style(base.add_modifier(Modifier::REVERSED));
        frame.render_widget(header, area);
    }

    fn render_footer(
        frame: &mut Frame,
        area: Rect,
        controller: &Controller,
        keymap: &Keymap,
        base: Style,
    ) {
        let hints = if controller.ui.is_narrow && controller.ui.sidebar_open {
            " Enter open  Esc close".to_string()
        } else {
            format!(
                " {} menu  {} {}  {} help  {} quit",
                keymap.toggle_menu,
                keymap.switch_color,
                controller.ui.theme.toggle_hint(),
                keymap.help,
                keymap.quit,
            )
        };

        let footer = Paragraph::new(Line::from(hints)).style(base.add_modifier(Modifier::DIM));
        frame.render_widget(footer, area);
    }

    /// Map the configured 256-color indices onto a style; negative
    /// values mean the terminal default.
    fn theme_style(settings: &Settings, theme: Theme) -> Style {
        let (fg, bg) = match theme {
            Theme::Light => (settings.light_color_fg, settings.light_color_bg),
            Theme::Dark => (settings.dark_color_fg, settings.dark_color_bg),
        };

        let mut style = Style::default();
        if let Ok(index) = u8::try_from(fg) {
            style = style.fg(Color::Indexed(index));
        }
        if let Ok(index) = u8::try_from(bg) {
            style = style.bg(Color::Indexed(index));
        }
        style
    }
}
