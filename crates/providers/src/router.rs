//! Augmenter selection: builds the configured augmenter, if any.

use roamer_config::AppConfig;
use roamer_core::Augmenter;
use std::sync::Arc;
use tracing::info;

use crate::openai_compat::OpenAiCompatAugmenter;

/// Build the augmenter described by `config`.
///
/// Returns `None` when augmentation is disabled, or when a hosted provider
/// has no API key. Local servers (ollama, vllm, llama.cpp) run keyless.
pub fn build_from_config(config: &AppConfig) -> Option<Arc<dyn Augmenter>> {
    let settings = &config.augmenter;
    if !settings.enabled {
        return None;
    }

    let api_key = match (&config.api_key, is_local(&settings.provider)) {
        (Some(key), _) => key.clone(),
        (None, true) => String::new(),
        (None, false) => return None,
    };

    let base_url = settings
        .api_url
        .clone()
        .unwrap_or_else(|| default_base_url(&settings.provider));

    info!(provider = %settings.provider, model = %settings.model, "Augmenter configured");

    Some(Arc::new(
        OpenAiCompatAugmenter::new(&settings.provider, base_url, api_key, &settings.model)
            .with_temperature(settings.temperature)
            .with_max_tokens(settings.max_tokens),
    ))
}

fn is_local(provider_name: &str) -> bool {
    matches!(provider_name, "ollama" | "vllm" | "llamacpp" | "llama.cpp")
}

/// Get the default base URL for well-known providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "openai" => "https://api.openai.com/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        "llamacpp" | "llama.cpp" => "http://localhost:8080/v1".into(),
        _ => "https://api.openai.com/v1".into(),
    }
}
