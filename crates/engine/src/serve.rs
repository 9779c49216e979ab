//! The interactive loop: prompt, read a question, answer it, repeat.

use crate::engine::QueryEngine;
use roamer_core::error::TransportError;
use roamer_core::Transport;
use roamer_memory::Session;
use tracing::{debug, warn};

/// Serve one session over `transport` until it closes.
///
/// Returns the number of questions answered. A transport read error ends
/// the session early and is returned to the caller.
pub async fn serve(
    engine: &QueryEngine,
    transport: &dyn Transport,
    session: &mut Session,
) -> Result<usize, TransportError> {
    let mut rx = transport.start().await?;
    let mut answered = 0;

    transport.prompt().await?;
    while let Some(result) = rx.recv().await {
        let inbound = match result {
            Ok(inbound) => inbound,
            Err(e) => {
                warn!(transport = transport.name(), error = %e, "Transport failed, ending session");
                return Err(e);
            }
        };

        let answer = engine.answer(&inbound.content, session).await;
        if let Some(warning) = &answer.warning {
            transport.send(&format!("Warning: {warning}")).await?;
        }
        transport.send(&answer.text).await?;
        answered += 1;

        transport.prompt().await?;
    }

    debug!(session = %session.id, answered, "Session ended");
    Ok(answered)
}
