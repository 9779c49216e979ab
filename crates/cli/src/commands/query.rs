//! `roamer query` - interactive question/answer session.

use roamer_channels::CliTransport;
use roamer_config::AppConfig;
use roamer_engine::{Composer, QueryEngine};
use roamer_memory::Session;
use std::sync::Arc;
use std::time::Duration;

pub async fn run(
    config: &AppConfig,
    message: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(super::load_store(config)?);

    let composer = match roamer_providers::router::build_from_config(config) {
        Some(augmenter) => Composer::with_augmenter(
            augmenter,
            Duration::from_secs(config.augmenter.timeout_secs),
        ),
        None => {
            if config.augmenter.enabled {
                println!(
                    "\nNote: ROAMER_API_KEY / OPENAI_API_KEY not set. Running in basic mode without augmented answers."
                );
            }
            Composer::plain()
        }
    };

    let engine = QueryEngine::new(store, composer);
    let mut session = Session::new(config.memory_size);

    if let Some(msg) = message {
        // Single message mode
        let answer = engine.answer(&msg, &mut session).await;
        if let Some(warning) = &answer.warning {
            println!("Warning: {warning}");
        }
        println!("{}", answer.text);
        return Ok(());
    }

    println!("\nWelcome to Roamer!");
    println!("Ask questions about any location (or type 'exit' to quit)");
    println!("Example: 'Tell me about California'");
    println!("You can also ask follow-up questions like 'What about New York?'");

    let transport = CliTransport::new();
    roamer_engine::serve(&engine, &transport, &mut session)
        .await
        .map_err(|e| format!("Transport error: {e}"))?;

    Ok(())
}
