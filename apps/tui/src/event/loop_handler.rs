use crate::app::{handle_input, App};
use crate::event::snapshot::{settle, Snapshot};
use crate::terminal::Tui;
use crate::ui;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Reads terminal events on a blocking thread until the receiver goes away.
fn spawn_event_reader(tx: mpsc::UnboundedSender<Event>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || loop {
        match event::poll(EVENT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("failed to read terminal event: {e}");
                    break;
                }
            },
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(e) => {
                warn!("failed to poll terminal events: {e}");
                break;
            }
        }
    })
}

/// Applies one terminal event to the app.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_input(app, key.code);
        }
        Event::Resize(width, height) => {
            debug!(width, height, "terminal resized");
            app.resize(Rect::new(0, 0, width, height));
        }
        _ => {}
    }
}

fn draw(terminal: &mut Tui, app: &mut App, now: Duration) -> Result<()> {
    let size = terminal.size()?;
    app.resize(Rect::new(0, 0, size.width, size.height));
    app.tick(now);
    terminal
        .draw(|f| ui::ui(app, f))
        .map_err(|e| eyre!("Terminal draw error: {e}"))?;
    Ok(())
}

/// Run the main application event loop
pub async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let started = Instant::now();
    let (tx, mut events) = mpsc::unbounded_channel();
    let reader = spawn_event_reader(tx);

    let mut ticker = tokio::time::interval(app.tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while app.running {
        tokio::select! {
            _ = ticker.tick() => draw(terminal, app, started.elapsed())?,
            event = events.recv() => match event {
                Some(event) => handle_event(app, event),
                None => break,
            },
        }
    }

    drop(events);
    if let Err(e) = reader.await {
        warn!("event reader stopped abnormally: {e}");
    }
    Ok(())
}

/// Run the application in headless mode (no UI): settle the start page and
/// print what it shows.
pub fn run_headless(app: &mut App, reveal_delay: Duration, json: bool) -> Result<()> {
    settle(app, reveal_delay);
    let snapshot = Snapshot::capture(app);

    if json {
        let json = serde_json::to_string_pretty(&snapshot)?;
        println!("{json}");
    } else {
        println!("{}", snapshot.to_text());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use base_bharat_core::Route;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn key_presses_reach_the_app() {
        let mut app = App::new(&AppConfig::default());
        handle_event(&mut app, key(KeyCode::Char('4'), KeyEventKind::Press));
        assert_eq!(app.route(), &Route::PledgeWall);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut app = App::new(&AppConfig::default());
        handle_event(&mut app, key(KeyCode::Char('q'), KeyEventKind::Release));
        assert!(app.running);
    }

    #[test]
    fn resize_updates_the_viewport() {
        let mut app = App::new(&AppConfig::default());
        handle_event(&mut app, Event::Resize(60, 20));
        assert_eq!(app.viewport.width, 56);
    }
}
