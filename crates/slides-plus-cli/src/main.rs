mod args;

use anyhow::{Context, Result};
use args::{Args, USAGE};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use slides_plus_config::SlidesSettings;
use slides_plus_engine::{
    Deck, DeckConfig, Slide, io, parse_deck_with_defaults, slide_index_at_line,
};
use std::{
    env,
    io::{Stdout, stdout},
    path::Path,
    process,
};

struct App {
    deck: Deck,
    list_state: ListState,
    show_notes: bool,
    show_slide_numbers: bool,
}

impl App {
    fn new(deck: Deck, start: usize, settings: &SlidesSettings) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(start.min(deck.len() - 1)));
        Self {
            deck,
            list_state,
            show_notes: true,
            show_slide_numbers: settings.show_slide_numbers,
        }
    }

    fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn current_slide(&self) -> &Slide {
        &self.deck.slides[self.selected()]
    }

    fn next_slide(&mut self) {
        let last = self.deck.len() - 1;
        self.list_state.select(Some((self.selected() + 1).min(last)));
    }

    fn previous_slide(&mut self) {
        self.list_state.select(Some(self.selected().saturating_sub(1)));
    }

    fn first_slide(&mut self) {
        self.list_state.select(Some(0));
    }

    fn last_slide(&mut self) {
        self.list_state.select(Some(self.deck.len() - 1));
    }

    fn toggle_notes(&mut self) {
        self.show_notes = !self.show_notes;
    }

    fn slide_label(&self, slide: &Slide) -> String {
        let title = slide
            .title()
            .unwrap_or_else(|| format!("(slide {})", slide.index + 1));
        if self.show_slide_numbers {
            format!("{:>2}. {title}", slide.index + 1)
        } else {
            title
        }
    }

    fn render_slide_content(&self, slide: &Slide) -> Vec<String> {
        let mut lines: Vec<String> = slide.content.lines().map(str::to_string).collect();

        let blocks = slide.code_blocks();
        if !blocks.is_empty() {
            lines.push(String::new());
        }
        for block in blocks {
            let mut summary = format!(
                "[code: {} · {} lines",
                block.language.as_deref().unwrap_or("text"),
                block.line_count()
            );
            if block.shows_line_numbers() {
                summary.push_str(" · numbered");
            }
            let highlights = block.highlighted_lines();
            if !highlights.is_empty() {
                summary.push_str(&format!(" · highlight {highlights:?}"));
            }
            let steps = block.steps();
            if !steps.is_empty() {
                summary.push_str(&format!(" · {} steps", steps.len()));
            }
            summary.push(']');
            lines.push(summary);
        }

        lines
    }

    fn slide_heading(&self, slide: &Slide) -> String {
        let layout = slide.frontmatter.layout();
        format!(
            "Slide {}/{} · {} · {}",
            slide.index + 1,
            self.deck.len(),
            layout.as_str(),
            self.deck.transition_for(slide)
        )
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let settings = SlidesSettings::load().with_context(|| {
        format!(
            "Failed to load settings from {}",
            SlidesSettings::config_path().display()
        )
    })?;

    let Some(path) = args.path.clone().or_else(|| settings.decks_path.clone()) else {
        eprintln!("Error: No deck given and no decks_path in settings");
        eprintln!("{USAGE}");
        eprintln!(
            "Or set decks_path in {}",
            SlidesSettings::config_path().display()
        );
        process::exit(1);
    };

    if path.is_dir() {
        return list_decks(&path);
    }

    let text = io::read_file(&path)
        .with_context(|| format!("Failed to open deck {}", path.display()))?;
    let (deck, start) = open_deck(&text, &settings.deck_baseline(), args.line);
    log::info!("Loaded {} slides from {}", deck.len(), path.display());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&deck)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(deck, start, &settings);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Parses `text` and finds the slide holding `line`, both from the same text.
fn open_deck(text: &str, baseline: &DeckConfig, line: Option<usize>) -> (Deck, usize) {
    let deck = parse_deck_with_defaults(text, baseline);
    let start = line.map_or(0, |line| slide_index_at_line(text, line));
    (deck, start)
}

fn list_decks(dir: &Path) -> Result<()> {
    let files = io::scan_slide_files(dir)?;
    if files.is_empty() {
        println!("No slide decks under {}", dir.display());
    }
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_slide(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_slide(),
                KeyCode::Char('g') => app.first_slide(),
                KeyCode::Char('G') => app.last_slide(),
                KeyCode::Char('n') => app.toggle_notes(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Slide list panel
    let items: Vec<ListItem> = app
        .deck
        .slides
        .iter()
        .map(|slide| ListItem::new(Line::from(app.slide_label(slide))))
        .collect();
    let config = &app.deck.global_config;
    let list_title = format!("{} · {}", config.theme, config.aspect_ratio);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(list, columns[0], &mut app.list_state);

    let slide = app.current_slide();
    let slide_area = if app.show_notes && slide.has_notes() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1])
    } else {
        Layout::default()
            .constraints([Constraint::Percentage(100)])
            .split(columns[1])
    };

    // Content panel
    let content: Vec<Line> = app
        .render_slide_content(slide)
        .into_iter()
        .map(Line::from)
        .collect();
    let content = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.slide_heading(slide)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(content, slide_area[0]);

    // Notes panel
    if let Some(area) = slide_area.get(1) {
        let notes: Vec<Line> = slide.notes.lines().map(Line::from).collect();
        let notes = Paragraph::new(notes)
            .block(Block::default().borders(Borders::ALL).title("Notes"))
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true });
        f.render_widget(notes, *area);
    }

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Move | "),
        Span::raw("g/G: First/Last | "),
        Span::raw("n: Notes"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
