use crate::message::Message;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Feeds terminal input and ticks into the same channel that effect
/// results are delivered on.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Message>,
    tx: mpsc::UnboundedSender<Message>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        tokio::spawn(async move {
            let mut last_tick = Instant::now();
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(POLL_INTERVAL) => {
                        let message = if event::poll(Duration::ZERO).unwrap_or(false) {
                            match event::read() {
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    Some(Message::Key(key))
                                }
                                Ok(CrosstermEvent::Resize(width, height)) => {
                                    Some(Message::Resize(width, height))
                                }
                                Ok(_) => None,
                                Err(e) => {
                                    tracing::warn!("Failed to read terminal event: {}", e);
                                    None
                                }
                            }
                        } else if last_tick.elapsed() >= tick_rate {
                            last_tick = Instant::now();
                            Some(Message::Tick)
                        } else {
                            None
                        };

                        if let Some(message) = message {
                            if event_tx.send(message).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self {
            rx,
            tx,
            shutdown_tx,
        }
    }

    /// Sender for redelivering effect results.
    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Message> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}
