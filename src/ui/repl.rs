use std::{io::stdout, panic, thread, time::Duration};

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::{error, info};

use crate::{
    model::ids::{ChampionId, ItemId, LanguageCode},
    service::{browser::Browser, item_browser::ItemBrowser, loader::panic_message},
    ui::{
        details::{draw_details, draw_item_details},
        grid::TerminalGrid,
        labels::{labels_for, Labels},
        ReplError, ACCENT,
    },
};

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Champions,
    Items,
}

enum AppState {
    Grid,
    Details { id: ChampionId, scroll: u16 },
    ItemDetails { id: ItemId, scroll: u16 },
}

pub struct App {
    browser: Browser<TerminalGrid>,
    items: ItemBrowser<TerminalGrid>,
    languages: Vec<LanguageCode>,
    language_index: Option<usize>,
    tab: Tab,
    tag_cursor: usize,
    state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(
        browser: Browser<TerminalGrid>,
        items: ItemBrowser<TerminalGrid>,
        mut languages: Vec<LanguageCode>,
        initial: Option<LanguageCode>,
    ) -> Self {
        let language_index = initial.map(|lang| match languages.iter().position(|l| *l == lang) {
            Some(i) => i,
            None => {
                languages.push(lang);
                languages.len() - 1
            }
        });

        Self {
            browser,
            items,
            languages,
            language_index,
            tab: Tab::Champions,
            tag_cursor: 0,
            state: AppState::Grid,
            should_quit: false,
        }
    }

    /// Kicks off the first load.
    pub fn start(&mut self) {
        self.load_all();
    }

    fn load_all(&mut self) {
        let language = self.requested_language();
        self.browser.load(language.clone());
        self.items.load(language);
    }

    fn poll(&mut self) -> bool {
        self.browser.poll() | self.items.poll()
    }

    fn requested_language(&self) -> Option<LanguageCode> {
        self.language_index.and_then(|i| self.languages.get(i).cloned())
    }

    fn labels(&self) -> &'static Labels {
        labels_for(self.browser.state().language())
    }

    fn switch_language(&mut self, forward: bool) {
        let count = self.languages.len();
        if count == 0 {
            return;
        }

        let index = match (self.language_index, forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };
        self.language_index = Some(index);

        info!(language = %self.languages[index], "switching language");
        self.load_all();
    }

    fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
        let mut query = self.browser.state().query().to_string();
        edit(&mut query);
        self.browser.filter(&query);
    }

    fn grid_mut(&mut self) -> &mut TerminalGrid {
        match self.tab {
            Tab::Champions => self.browser.presenter_mut(),
            Tab::Items => self.items.presenter_mut(),
        }
    }

    fn open_details(&mut self) {
        self.state = match self.tab {
            Tab::Champions => match self.browser.presenter().selected() {
                Some(card) => AppState::Details {
                    id: ChampionId::from(card.id.clone()),
                    scroll: 0,
                },
                None => return,
            },
            Tab::Items => match self.items.presenter().selected() {
                Some(card) => AppState::ItemDetails {
                    id: ItemId::from(card.id.clone()),
                    scroll: 0,
                },
                None => return,
            },
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let AppState::Details { scroll, .. } | AppState::ItemDetails { scroll, .. } = &mut self.state {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state = AppState::Grid,
                KeyCode::Up => *scroll = scroll.saturating_sub(1),
                KeyCode::Down => *scroll = scroll.saturating_add(1),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::F(2) => {
                self.tab = match self.tab {
                    Tab::Champions => Tab::Items,
                    Tab::Items => Tab::Champions,
                };
            }
            KeyCode::Left => self.grid_mut().move_left(),
            KeyCode::Right => self.grid_mut().move_right(),
            KeyCode::Up => self.grid_mut().move_up(),
            KeyCode::Down => self.grid_mut().move_down(),
            KeyCode::Enter => self.open_details(),
            KeyCode::Tab => self.switch_language(true),
            KeyCode::BackTab => self.switch_language(false),
            KeyCode::F(5) => self.load_all(),
            _ => match self.tab {
                Tab::Champions => self.handle_champion_key(key),
                Tab::Items => self.handle_item_key(key),
            },
        }
    }

    fn handle_champion_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.edit_query(|q| q.push(c)),
            KeyCode::Backspace => self.edit_query(|q| {
                q.pop();
            }),
            KeyCode::Esc if !self.browser.state().query().is_empty() => self.browser.filter(""),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_item_key(&mut self, key: KeyEvent) {
        let tag_count = self.items.state().tags().len();
        self.tag_cursor = self.tag_cursor.min(tag_count.saturating_sub(1));

        match key.code {
            KeyCode::Char('[') => self.tag_cursor = self.tag_cursor.saturating_sub(1),
            KeyCode::Char(']') if self.tag_cursor + 1 < tag_count => self.tag_cursor += 1,
            KeyCode::Char(' ') if self.tag_cursor < tag_count => self.items.toggle_tag(self.tag_cursor),
            KeyCode::Char('m') | KeyCode::Char('M') => self.items.toggle_rift_only(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let labels = self.labels();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[0]);

        match self.tab {
            Tab::Champions => {
                let search = Paragraph::new(Line::from(vec![
                    Span::raw(self.browser.state().query().to_string()),
                    Span::styled("▏", Style::default().fg(ACCENT)),
                ]))
                .block(accent_block(labels.search));
                f.render_widget(search, header[0]);
            }
            Tab::Items => {
                f.render_widget(
                    Paragraph::new(self.tag_line()).block(accent_block(labels.tags)),
                    header[0],
                );
            }
        }

        let mut language_spans = Vec::new();
        for (i, lang) in self.languages.iter().enumerate() {
            if Some(i) == self.language_index {
                language_spans.push(Span::styled(
                    format!("[{}]", lang),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ));
            } else {
                language_spans.push(Span::styled(format!(" {} ", lang), Style::default().fg(Color::DarkGray)));
            }
            language_spans.push(Span::raw(" "));
        }
        f.render_widget(
            Paragraph::new(Line::from(language_spans)).block(accent_block(labels.choose_language)),
            header[1],
        );

        let mut help = match self.tab {
            Tab::Champions => {
                let state = self.browser.state();
                let mut title = format!(
                    "{} ({}/{})",
                    labels.champions,
                    state.visible().len(),
                    state.collection().len()
                );
                let loading = self.browser.is_loading();
                if loading {
                    title.push_str(&format!(" - {}", labels.loading));
                }
                let placeholder = if loading { labels.loading } else { labels.empty };
                draw_grid(f, chunks[1], &title, self.browser.presenter_mut(), placeholder);
                labels.help
            }
            Tab::Items => {
                let state = self.items.state();
                let mut title = format!(
                    "{} ({}/{})",
                    labels.items,
                    state.visible().len(),
                    state.collection().len()
                );
                if state.rift_only() {
                    title.push_str(&format!(" - {}", labels.rift_only));
                }
                let loading = self.items.is_loading();
                if loading {
                    title.push_str(&format!(" - {}", labels.items_loading));
                }
                let placeholder = if loading {
                    labels.items_loading
                } else {
                    labels.items_empty
                };
                draw_grid(f, chunks[1], &title, self.items.presenter_mut(), placeholder);
                labels.items_help
            }
        };

        match &self.state {
            AppState::Grid => {}
            AppState::Details { id, scroll } => match self.browser.state().collection().get(id) {
                Some(champ) => {
                    draw_details(f, chunks[1], champ, labels, *scroll);
                    help = labels.details_help;
                }
                None => self.state = AppState::Grid,
            },
            AppState::ItemDetails { id, scroll } => match self.items.state().collection().get(id) {
                Some(item) => {
                    draw_item_details(f, chunks[1], item, labels, *scroll);
                    help = labels.details_help;
                }
                None => self.state = AppState::Grid,
            },
        }

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(chunks[2]);
        f.render_widget(Paragraph::new(self.tab_line(labels)), footer[0]);
        f.render_widget(
            Paragraph::new(help)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            footer[1],
        );
    }

    /// Tag checkboxes, scrolled so the cursor stays near the left edge.
    fn tag_line(&self) -> Line<'static> {
        let tags = self.items.state().tags();
        let cursor = self.tag_cursor.min(tags.len().saturating_sub(1));

        let mut spans = Vec::new();
        for (i, tag) in tags.iter().enumerate().skip(cursor.saturating_sub(2)) {
            let mark = if tag.enabled { "[x]" } else { "[ ]" };
            let style = if i == cursor {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else if tag.enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("{} {}", mark, tag.name), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn tab_line(&self, labels: &Labels) -> Line<'static> {
        let tab_span = |tab: Tab, title: &str| {
            if tab == self.tab {
                Span::styled(format!(" {} ", title), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                Span::styled(format!(" {} ", title), Style::default().fg(Color::DarkGray))
            }
        };

        Line::from(vec![
            Span::styled("F2", Style::default().fg(Color::DarkGray)),
            tab_span(Tab::Champions, labels.champions),
            tab_span(Tab::Items, labels.items),
        ])
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<(), ReplError> {
        loop {
            self.poll();
            terminal.draw(|f| self.draw(f))?;

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}

fn draw_grid(f: &mut Frame, area: Rect, title: &str, grid: &mut TerminalGrid, placeholder: &str) {
    let block = accent_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if grid.cards().is_empty() {
        f.render_widget(
            Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
    } else {
        grid.draw(f, inner);
    }
}

fn accent_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(ACCENT))
}

pub fn run(mut app: App) -> Result<(), ReplError> {
    install_panic_hook();
    enable_raw_mode()?;

    let result = with_cleanup(
        || {
            execute!(stdout(), EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
            app.start();
            app.run(&mut terminal)
        },
        restore_terminal,
    );

    drop(panic::take_hook());
    result
}

/// Runs `cleanup` whatever `body` returns. The body's error is reported first.
fn with_cleanup<T>(
    body: impl FnOnce() -> Result<T, ReplError>,
    cleanup: impl FnOnce() -> Result<(), ReplError>,
) -> Result<T, ReplError> {
    let result = body();
    let restored = cleanup();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<(), ReplError> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Panics go to the log instead of the alternate screen. A panic on the main
/// thread also hands the terminal back before unwinding.
fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let current = thread::current();
        let thread_name = current.name().unwrap_or("<unnamed>");
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_default();
        error!(thread = thread_name, %location, "panicked: {}", panic_message(info.payload()));

        if thread_name == "main" {
            restore_terminal().ok();
        }
    }));
}
