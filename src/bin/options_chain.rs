//! Terminal UI for the ETH options chain.
//!
//! # Usage
//!
//! ```sh
//! # optional: point at a mock quote server
//! export OPTIONS_CHAIN_QUOTE_URL="http://127.0.0.1:8080"
//! cargo run --bin options_chain --features cli 2>chain.log
//! ```
//!
//! Keys: `1`-`3` expiry, arrows move, `Enter` select / confirm, `Esc` cancel,
//! `q` quit.

use std::io;
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::{Frame, Terminal};

use options_chain::chain::grid::{CELL_TARGETS, GridCursor};
use options_chain::constants::NAV_LINKS;
use options_chain::types::EXPIRY_CATALOG;
use options_chain::view::{PageView, today_local};
use options_chain::{ChainConfig, ChainView, QuoteClient};

const ACCENT: Color = Color::Rgb(0x76, 0x6c, 0xf5);

#[tokio::main]
async fn main() -> options_chain::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cfg = ChainConfig::from_env()?;
    let client = QuoteClient::from_config(&cfg)?;
    let mut view = ChainView::mount(Arc::new(client), &cfg);

    enable_raw_mode()?;
    let res = match setup_terminal() {
        Ok(mut terminal) => run(&mut terminal, &mut view).await,
        Err(e) => Err(e),
    };

    let restored = restore_terminal();
    view.unmount();
    res.and(restored)
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal() -> options_chain::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Undo raw mode and the alternate screen, whether or not setup finished.
fn restore_terminal() -> options_chain::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run(terminal: &mut Tui, view: &mut ChainView) -> options_chain::Result<()> {
    let mut cursor = GridCursor::default();
    let mut keys = EventStream::new();
    let mut quote_rx = view.quote().subscribe();
    let mut quote_open = true;

    loop {
        let page = view.render(today_local());
        terminal.draw(|f| draw_ui(f, &page, cursor))?;

        tokio::select! {
            changed = quote_rx.changed(), if quote_open => {
                // Sender gone: the refresh task finished or was cancelled.
                if changed.is_err() {
                    quote_open = false;
                }
            }
            evt = keys.next() => {
                let Some(evt) = evt else { return Ok(()) };
                if let Event::Key(key) = evt? {
                    if !handle_key(view, &mut cursor, key) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Apply one key press. Returns `false` to quit.
fn handle_key(view: &mut ChainView, cursor: &mut GridCursor, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }

    if view.state().is_dialog_open() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                view.confirm();
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                view.cancel();
            }
            KeyCode::Char('q') => return false,
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(option) = EXPIRY_CATALOG.get(idx) {
                view.select_expiry(option.value);
            }
        }
        KeyCode::Up => cursor.up(),
        KeyCode::Down => cursor.down(),
        KeyCode::Left => cursor.left(),
        KeyCode::Right => cursor.right(),
        KeyCode::Enter => {
            if let Some((side, strike)) = cursor.selection() {
                view.select_cell(side, strike);
            }
        }
        _ => {}
    }
    true
}

fn draw_ui(f: &mut Frame, page: &PageView, cursor: GridCursor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(8),
        ])
        .split(f.area());

    // Navigation
    let mut nav = vec![Span::styled(
        "MOOD  ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    for (label, route) in NAV_LINKS {
        nav.push(Span::raw(format!("{label} ({route})  ")));
    }
    f.render_widget(Paragraph::new(Line::from(nav)), chunks[0]);

    // Header
    let header = vec![
        Line::from(Span::styled(
            page.header.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(page.header.quote_line()),
        Line::from(page.header.date_line()),
    ];
    f.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    // Expiry selector
    let mut buttons = Vec::new();
    for (i, b) in page.expiries.iter().enumerate() {
        let style = if b.selected {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        buttons.push(Span::styled(format!(" [{}] {} ", i + 1, b.label), style));
        buttons.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(buttons))
            .block(Block::default().title("Expiry").borders(Borders::ALL)),
        chunks[2],
    );

    draw_grid(f, chunks[3], page, cursor);

    if let Some(dialog) = &page.dialog {
        let area = centered(f.area(), 44, 10);
        let lines = vec![
            Line::from(Span::styled(
                format!("Option: {}", dialog.instrument_id),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Expiry: {}", dialog.expiry_label)),
            Line::from(format!("Strike: {}", dialog.strike)),
            Line::from(format!("Fair value: {}", dialog.fair_value)),
            Line::from(format!(
                "{}: ______ {}",
                dialog.price_field.label,
                dialog.price_field.unit.unwrap_or("")
            )),
            Line::from(format!("{}: ______", dialog.size_field.label)),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter] Confirm", Style::default().fg(ACCENT)),
                Span::raw("   [Esc] Cancel"),
            ]),
        ];
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines).block(Block::default().title("Confirm").borders(Borders::ALL)),
            area,
        );
    }
}

fn draw_grid(f: &mut Frame, area: Rect, page: &PageView, cursor: GridCursor) {
    let selected_column = CELL_TARGETS[cursor.cell].column;

    let rows: Vec<Row> = page
        .grid
        .rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let cells = row.cells.iter().enumerate().map(|(c, text)| {
                let mut style = Style::default();
                if r == cursor.row && c == selected_column {
                    style = style.bg(ACCENT).fg(Color::White);
                }
                Cell::from(text.clone()).style(style)
            });
            let bg = if row.striped {
                Color::Rgb(0x1f, 0x21, 0x22)
            } else {
                Color::Rgb(0x18, 0x12, 0x2b)
            };
            Row::new(cells).style(Style::default().bg(bg))
        })
        .collect();

    let widths = [Constraint::Ratio(1, 11); 11];
    let [calls, expiry, puts] = &page.grid.group_headers;
    let title = format!("{calls}  |  {expiry}  |  {puts}");
    let table = Table::new(rows, widths)
        .header(
            Row::new(page.grid.columns.to_vec())
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(table, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use crossterm::event::KeyModifiers;
    use options_chain::quote::QuoteSource;

    struct NoQuote;

    #[async_trait]
    impl QuoteSource for NoQuote {
        async fn spot_price(&self) -> options_chain::Result<f64> {
            Err(options_chain::ChainError::NotImplemented("quote"))
        }
    }

    fn press(view: &mut ChainView, cursor: &mut GridCursor, code: KeyCode) -> bool {
        handle_key(view, cursor, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn esc_cancels_dialog_and_never_quits() {
        let mut view = ChainView::mount(Arc::new(NoQuote), &ChainConfig::default());
        let mut cursor = GridCursor::default();

        assert!(press(&mut view, &mut cursor, KeyCode::Enter));
        assert!(view.state().is_dialog_open());
        assert!(press(&mut view, &mut cursor, KeyCode::Esc));
        assert!(!view.state().is_dialog_open());
        assert!(press(&mut view, &mut cursor, KeyCode::Esc));

        assert!(!press(&mut view, &mut cursor, KeyCode::Char('q')));
    }

    #[tokio::test]
    async fn digit_keys_select_expiry() {
        let mut view = ChainView::mount(Arc::new(NoQuote), &ChainConfig::default());
        let mut cursor = GridCursor::default();

        assert!(press(&mut view, &mut cursor, KeyCode::Char('2')));
        assert_eq!(view.state().selected_expiry(), Some(EXPIRY_CATALOG[1].value));
        assert!(press(&mut view, &mut cursor, KeyCode::Char('9')));
        assert_eq!(view.state().selected_expiry(), Some(EXPIRY_CATALOG[1].value));
    }
}
