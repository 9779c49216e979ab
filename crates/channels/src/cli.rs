//! CLI transport: interactive terminal question/answer loop.
//!
//! Reads one question per line from stdin (or any async reader) and prints
//! answers to stdout. Used for `roamer query` interactive mode.

use async_trait::async_trait;
use roamer_core::error::TransportError;
use roamer_core::transport::{Inbound, Transport};
use std::io::Write;
use std::sync::Mutex;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

type LineSource = Box<dyn AsyncBufRead + Send + Unpin>;

/// Interactive CLI transport for terminal sessions.
pub struct CliTransport {
    input: Mutex<Option<LineSource>>,
}

impl CliTransport {
    /// A transport reading from stdin.
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    /// A transport reading from any buffered async reader.
    pub fn from_reader(reader: impl AsyncBufRead + Send + Unpin + 'static) -> Self {
        Self {
            input: Mutex::new(Some(Box::new(reader))),
        }
    }
}

impl Default for CliTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// `exit` in any letter case ends the session.
fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit")
}

#[async_trait]
impl Transport for CliTransport {
    fn name(&self) -> &str {
        "cli"
    }

    async fn start(
        &self,
    ) -> Result<mpsc::Receiver<Result<Inbound, TransportError>>, TransportError> {
        let reader = self
            .input
            .lock()
            .map_err(|_| TransportError::ConnectionLost("input lock poisoned".into()))?
            .take()
            .ok_or_else(|| TransportError::ConnectionLost("transport already started".into()))?;

        let (tx, rx) = mpsc::channel(32);

        tokio::spawn(async move {
            let mut lines = reader.lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            continue;
                        }

                        if is_exit(&line) {
                            debug!("Exit requested");
                            break;
                        }

                        if tx.send(Ok(Inbound::new(line))).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF (Ctrl+D)
                    Err(e) => {
                        let _ = tx
                            .send(Err(TransportError::ConnectionLost(e.to_string())))
                            .await;
                        break;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, content: &str) -> Result<(), TransportError> {
        println!("\n{content}");
        Ok(())
    }

    async fn prompt(&self) -> Result<(), TransportError> {
        print!("\n> ");
        std::io::stdout()
            .flush()
            .map_err(|e| TransportError::DeliveryFailed(e.to_string()))
    }
}
