use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The startup fetch has completed, successfully or not.
    FetchSettled,
    /// Terminal input can no longer be read; the UI should exit.
    InputClosed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || pump_events(read_terminal_event, &event_tx, tick_rate));

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn read_terminal_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward terminal events and ticks until the receiver goes away or input
/// fails. An input failure is reported as [`AppEvent::InputClosed`].
fn pump_events(
    mut next_event: impl FnMut(Duration) -> io::Result<Option<Event>>,
    tx: &Sender<AppEvent>,
    tick_rate: Duration,
) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        let sent = match next_event(timeout) {
            Ok(Some(Event::Key(key))) => tx.send(AppEvent::Input(key)),
            Ok(Some(Event::Resize(cols, rows))) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Failed to read terminal events");
                let _ = tx.send(AppEvent::InputClosed);
                return;
            }
        };
        if sent.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            // Receiver gone: the UI loop has exited.
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
