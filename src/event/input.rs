use super::Event;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Convert a crossterm event into an application event
///
/// Key releases/repeats and bare mouse movement are dropped.
pub fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) if mouse.kind != MouseEventKind::Moved => {
            Some(Event::Mouse(mouse))
        }
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

/// Listen for terminal input events with graceful shutdown support
pub async fn listen(tx: mpsc::Sender<Event>, cancel: CancellationToken) {
    loop {
        tokio::select! {
            // Check for cancellation signal
            () = cancel.cancelled() => {
                tracing::debug!("Input listener cancelled");
                break;
            }
            // Poll for input with timeout
            () = tokio::time::sleep(Duration::from_millis(50)) => {
                // Drain everything already queued so a burst of input arrives together
                while event::poll(Duration::ZERO).unwrap_or(false) {
                    let Ok(raw) = event::read() else {
                        break;
                    };
                    if let Some(event) = translate(raw) {
                        if tx.send(event).await.is_err() {
                            // Channel closed, exit
                            return;
                        }
                    }
                }
            }
        }
    }
}
