// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;

use crate::api::GeminiClient;
use crate::errors::ChatResult;
use crate::key_handlers::handle_chat_input;
use crate::App;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(120);

/// Enum for different types of events.
#[derive(Debug)]
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI until the user quits.
pub async fn run_ui(client: GeminiClient) -> ChatResult<()> {
    let mut terminal = setup_or_restore(setup_terminal, restore_terminal)?;

    let app = App::new(client.has_valid_key());
    let res = run_app(&mut terminal, app, client).await;

    let restored = restore_terminal().and_then(|()| Ok(terminal.show_cursor()?));
    res.and(restored)
}

fn setup_terminal() -> ChatResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> ChatResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `setup`; if it fails part way, `restore` undoes whatever it managed
/// to change before the setup error is returned.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> ChatResult<T>,
    restore: impl FnOnce() -> ChatResult<()>,
) -> ChatResult<T> {
    setup().map_err(|e| {
        if let Err(restore_err) = restore() {
            error!("Failed to restore terminal after setup error: {}", restore_err);
        }
        e
    })
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: GeminiClient,
) -> ChatResult<()> {
    let (event_tx, event_rx) = mpsc::channel::<Event>(100);
    spawn_input_reader(event_tx);

    event_loop(terminal, &mut app, &client, event_rx).await
}

/// Draws, then waits for either terminal input or a finished reply.
/// Returns once the user quits or the input source goes away.
async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: &GeminiClient,
    mut event_rx: mpsc::Receiver<Event>,
) -> ChatResult<()> {
    let (reply_tx, mut reply_rx) = mpsc::channel::<String>(1);

    loop {
        terminal.draw(|f| draw(f, app))?;

        tokio::select! {
            event = event_rx.recv() => match event {
                Some(Event::Input(CEvent::Key(key))) => {
                    if let Some(text) = handle_chat_input(key, app) {
                        dispatch(client, text, reply_tx.clone());
                    }
                }
                Some(Event::Input(_)) => {}
                Some(Event::Tick) => app.on_tick(),
                None => {
                    error!("Terminal input stopped, leaving the UI");
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "terminal input closed",
                    )
                    .into());
                }
            },
            Some(reply) = reply_rx.recv() => {
                app.receive_reply(reply);
            }
        }

        if app.should_quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

/// Polls the terminal on a blocking thread. Stops once the receiver is gone.
fn spawn_input_reader(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            match event::poll(TICK_RATE) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Runs one request to completion and hands its display string back to the loop.
fn dispatch(client: &GeminiClient, text: String, reply_tx: mpsc::Sender<String>) {
    let client = client.clone();
    tokio::spawn(async move {
        debug!("Dispatching message ({} chars)", text.chars().count());
        let reply = client.send_message(&text).await;
        if reply_tx.send(reply).await.is_err() {
            debug!("UI closed before the reply arrived");
        }
    });
}

/// Renders the UI components.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Transcript
            Constraint::Length(1), // Status
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    header::draw_header(f, chunks[0]);
    chat::draw_messages(f, app, chunks[1]);
    app.status_indicator.render(f, chunks[2]);
    chat::draw_input(f, app, chunks[3]);
    footer::draw_footer(f, chunks[4], app);
}
