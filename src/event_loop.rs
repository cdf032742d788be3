//! The event loop: the only place `App` is mutated while the TUI runs.

use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, KeyEventKind};
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};

use crate::app::App;
use crate::ui;

/// Spinner animation period.
pub const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Run until the app quits or the input stream ends.
///
/// Starts the film fetch if none has been started yet. `events` is the
/// terminal event stream (crossterm's `EventStream` in production).
pub async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App, mut events: S) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("app message receiver already taken"))?;

    if app.generation() == 0 {
        app.start_loading();
    }

    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    let outcome = loop {
        if app.needs_redraw {
            if let Err(err) = terminal.draw(|f| ui::render(f, &mut *app)) {
                break Err(err.into());
            }
            app.needs_redraw = false;
        }

        if app.should_quit {
            break Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }

            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(Event::Resize(width, height))) => {
                    tracing::debug!(width, height, "terminal resized");
                    app.mark_dirty();
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => break Err(err.into()),
                None => {
                    tracing::info!("input stream closed");
                    app.quit();
                }
            },
        }
    };

    app.message_rx = Some(message_rx);
    outcome
}
