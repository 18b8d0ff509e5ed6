use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use picks_terminal::cards::{
    confidence_badge, direction_color, direction_label, format_game_date, tier_color, CardTheme,
    ConfidenceTier,
};
use picks_terminal::picks_fetch::spawn_picks_provider;
use picks_terminal::state::{
    apply_delta, phase_label, AppState, Delta, LoadPhase, Pick, ProviderCommand,
};

struct App {
    state: AppState,
    theme: CardTheme,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        Self {
            state: AppState::new(),
            theme: CardTheme::default(),
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('g') => self.state.select_first(),
            KeyCode::Char('G') => self.state.select_last(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.request_reload(true),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn request_reload(&mut self, announce: bool) {
        if self.state.phase == LoadPhase::Loading {
            if announce {
                self.state.push_log("[INFO] Load already in progress");
            }
            return;
        }
        let Some(tx) = &self.cmd_tx else {
            if announce {
                self.state.push_log("[INFO] Reload unavailable");
            }
            return;
        };
        if tx.send(ProviderCommand::Reload).is_err() {
            if announce {
                self.state.push_log("[WARN] Reload request failed");
            }
        } else if announce {
            self.state.push_log("[INFO] Reload requested");
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_picks_provider(tx, cmd_rx);

    let mut app = App::new(Some(cmd_tx));
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    render_cards(frame, chunks[1], &app.state, &app.theme);

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text()).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let title = format!(
        "NBA POINTS PICKS | {} | {} picks",
        phase_label(state.phase),
        state.picks.len()
    );
    let line1 = format!("  .--.  {title}");
    let line2 = " ( () )".to_string();
    let line3 = "  `--'".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text() -> &'static str {
    "j/k/↑/↓ Move | g/G Top/Bottom | r Reload | ? Help | q Quit"
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cards(frame: &mut Frame, area: Rect, state: &AppState, theme: &CardTheme) {
    let ranked = state.ranked();
    if ranked.is_empty() {
        let message = empty_message(state.phase);
        let empty = Paragraph::new(message).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    const ROW_HEIGHT: u16 = 5;
    if area.height < ROW_HEIGHT {
        let empty = Paragraph::new("Pick list needs more height")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let visible = (area.height / ROW_HEIGHT) as usize;
    let (start, end) = visible_range(state.selected, ranked.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let card_area = Rect {
            x: area.x,
            y: area.y + (i as u16) * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        render_card(frame, card_area, ranked[idx], idx, idx == state.selected, theme);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    pick: &Pick,
    rank: usize,
    selected: bool,
    theme: &CardTheme,
) {
    let tier = ConfidenceTier::classify(pick.confidence);
    let accent = tier_color(theme, tier);

    let mut border_style = Style::default().fg(accent);
    let mut title_style = Style::default().add_modifier(Modifier::BOLD);
    if selected {
        border_style = border_style.add_modifier(Modifier::BOLD);
        title_style = title_style.bg(Color::DarkGray);
    }

    let title = format!(" #{} {} ", rank + 1, pick.player);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let badge = Span::styled(
        format!(" {} ", confidence_badge(pick.confidence)),
        Style::default().fg(Color::Black).bg(accent),
    );
    let date = format_game_date(pick.game_time.as_deref());
    let mut badge_line = vec![badge];
    if !date.is_empty() {
        badge_line.push(Span::raw("  "));
        badge_line.push(Span::styled(date, Style::default().fg(Color::DarkGray)));
    }

    let stats_line = vec![
        Span::styled("Line ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}", pick.line)),
        Span::raw("   "),
        Span::styled("Projection ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}", pick.predicted)),
    ];

    let direction_line = vec![Span::styled(
        direction_label(pick.pick, pick.line),
        Style::default()
            .fg(direction_color(theme, pick.pick))
            .add_modifier(Modifier::BOLD),
    )];

    let body = Paragraph::new(vec![
        Line::from(badge_line),
        Line::from(stats_line),
        Line::from(direction_line),
    ]);
    frame.render_widget(body, inner);
}

fn empty_message(phase: LoadPhase) -> &'static str {
    match phase {
        LoadPhase::Idle => "",
        LoadPhase::Loading => "Loading picks...",
        LoadPhase::Loaded => "No picks for today's slate",
        LoadPhase::Failed => "Pick load failed (see console, r to retry)",
    }
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Picks Terminal - Help",
        "",
        "Cards are ordered by model confidence, highest first.",
        "Badge color: green >= 80, yellow 65-79, red below 65.",
        "",
        "Keys:",
        "  j/k or ↑/↓   Move selection",
        "  g / G        Jump to top / bottom",
        "  r            Reload the slate",
        "  ?            Toggle help",
        "  q            Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
