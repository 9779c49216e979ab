//! Shared test helpers for engine tests.

use roamer_core::error::{AugmentError, TransportError};
use roamer_core::transport::{Inbound, Transport};
use roamer_core::{Augmenter, Category, Fact};
use roamer_store::RecordStore;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;

/// An augmenter that returns a sequence of scripted replies.
///
/// Panics if more calls are made than replies provided.
pub struct ScriptedAugmenter {
    replies: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedAugmenter {
    pub fn new(replies: Vec<&str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(String::from).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Augmenter for ScriptedAugmenter {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn augment(&self, prompt: &str) -> Result<String, AugmentError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            panic!("ScriptedAugmenter: no more replies");
        }
        Ok(replies.remove(0))
    }
}

/// An augmenter that always fails.
pub struct FailingAugmenter;

#[async_trait::async_trait]
impl Augmenter for FailingAugmenter {
    fn name(&self) -> &str {
        "failing_mock"
    }

    async fn augment(&self, _prompt: &str) -> Result<String, AugmentError> {
        Err(AugmentError::Network("connection refused".into()))
    }
}

/// An augmenter that answers only after a delay.
pub struct SlowAugmenter(pub Duration);

#[async_trait::async_trait]
impl Augmenter for SlowAugmenter {
    fn name(&self) -> &str {
        "slow_mock"
    }

    async fn augment(&self, _prompt: &str) -> Result<String, AugmentError> {
        tokio::time::sleep(self.0).await;
        Ok("too late".into())
    }
}

/// A transport that replays scripted questions and captures what is sent.
pub struct ScriptedTransport {
    questions: Mutex<Option<Vec<String>>>,
    sent: Mutex<Vec<String>>,
    prompts: Mutex<usize>,
}

impl ScriptedTransport {
    pub fn new(questions: &[&str]) -> Self {
        Self {
            questions: Mutex::new(Some(questions.iter().map(|q| q.to_string()).collect())),
            sent: Mutex::new(Vec::new()),
            prompts: Mutex::new(0),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn prompt_count(&self) -> usize {
        *self.prompts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn start(&self) -> Result<mpsc::Receiver<Result<Inbound, TransportError>>, TransportError> {
        let questions = self.questions.lock().unwrap().take().unwrap_or_default();
        let (tx, rx) = mpsc::channel(questions.len().max(1));
        for q in questions {
            tx.send(Ok(Inbound::new(q))).await.unwrap();
        }
        Ok(rx)
    }

    async fn send(&self, content: &str) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn prompt(&self) -> Result<(), TransportError> {
        *self.prompts.lock().unwrap() += 1;
        Ok(())
    }
}

/// A small store covering all three categories for two states plus two Travis locations.
pub fn sample_store() -> RecordStore {
    vec![
        Fact::new("California", Category::Tax, "state_taxes.csv").with_attribute("tax_rate", "7.25%"),
        Fact::new("Texas", Category::Tax, "state_taxes.csv").with_attribute("tax_rate", "6.25%"),
        Fact::new("Travis County", Category::Tax, "tax_policies_2023.pdf")
            .with_attribute("tax_rate", "1.9%"),
        Fact::new("Travis Heights", Category::Tax, "local_rates.pdf").with_attribute("tax_rate", "1.8%"),
        Fact::new("California", Category::Tourist, "tourist_info.csv")
            .with_attribute("attractions", "Golden Gate Bridge")
            .with_attribute("best_time", "April to October"),
        Fact::new("California", Category::Cost, "travel_costs.csv")
            .with_attribute("daily_cost", "200")
            .with_attribute("hotel_avg", "180")
            .with_attribute("food_avg", "60"),
        Fact::new("Texas", Category::Cost, "travel_costs.csv")
            .with_attribute("daily_cost", "150")
            .with_attribute("hotel_avg", "120")
            .with_attribute("food_avg", "45"),
    ]
    .into_iter()
    .collect()
}
