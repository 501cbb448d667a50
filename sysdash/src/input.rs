//! Keyboard/terminal input: crossterm events mapped to dashboard commands.

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Quit,
    PauseToggle,
    /// No payload: the loop re-queries the terminal size itself.
    Resize,
}

pub fn map_event(ev: &Event) -> Option<UiEvent> {
    match ev {
        Event::Key(k) if k.kind == KeyEventKind::Press => match k.code {
            KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(UiEvent::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(UiEvent::Quit),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(UiEvent::PauseToggle),
            _ => None,
        },
        Event::Resize(_, _) => Some(UiEvent::Resize),
        _ => None,
    }
}

/// Forward mapped terminal events into `tx` until the terminal or the receiver goes away.
pub fn spawn_input_reader(tx: mpsc::Sender<UiEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(ev) = events.next().await {
            match ev {
                Ok(ev) => {
                    if let Some(ui) = map_event(&ev) {
                        if tx.send(ui).await.is_err() {
                            return;
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "terminal input failed");
                    return;
                }
            }
        }
        debug!("terminal event stream ended");
    })
}
