//! Answer composer: optional augmentation with verbatim fallback.
//!
//! Without an augmenter, or when the augmenter fails or times out, the
//! answer is exactly `facts + follow_up`. Failures are logged and absorbed.

use roamer_core::error::AugmentError;
use roamer_core::Augmenter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_AUGMENT_TIMEOUT: Duration = Duration::from_secs(30);

/// A composed answer.
#[derive(Debug, Clone)]
pub struct Composition {
    pub text: String,

    /// Set when an augmenter was configured but its reply could not be used
    pub fallback: Option<AugmentError>,
}

impl Composition {
    fn verbatim(facts: &str, follow_up: &str, fallback: Option<AugmentError>) -> Self {
        Self {
            text: format!("{facts}{follow_up}"),
            fallback,
        }
    }
}

pub struct Composer {
    augmenter: Option<Arc<dyn Augmenter>>,
    timeout: Duration,
}

impl Composer {
    /// A composer that always answers with the raw facts.
    pub fn plain() -> Self {
        Self {
            augmenter: None,
            timeout: DEFAULT_AUGMENT_TIMEOUT,
        }
    }

    pub fn with_augmenter(augmenter: Arc<dyn Augmenter>, timeout: Duration) -> Self {
        Self {
            augmenter: Some(augmenter),
            timeout,
        }
    }

    /// Compose the final answer text.
    pub async fn compose(
        &self,
        facts: &str,
        follow_up: &str,
        question: &str,
        prior_question: Option<&str>,
    ) -> String {
        self.composition(facts, follow_up, question, prior_question)
            .await
            .text
    }

    /// Like [`Composer::compose`], also reporting why augmentation was skipped.
    pub async fn composition(
        &self,
        facts: &str,
        follow_up: &str,
        question: &str,
        prior_question: Option<&str>,
    ) -> Composition {
        let Some(augmenter) = &self.augmenter else {
            return Composition::verbatim(facts, follow_up, None);
        };

        let prompt = build_prompt(question, prior_question, facts);
        match self.call(augmenter.as_ref(), &prompt).await {
            Ok(reply) => {
                debug!(augmenter = augmenter.name(), "Answer augmented");
                Composition {
                    text: format!("{reply}{follow_up}"),
                    fallback: None,
                }
            }
            Err(e) => {
                warn!(augmenter = augmenter.name(), error = %e, "Augmentation failed, answering with raw facts");
                Composition::verbatim(facts, follow_up, Some(e))
            }
        }
    }

    async fn call(&self, augmenter: &dyn Augmenter, prompt: &str) -> Result<String, AugmentError> {
        tokio::time::timeout(self.timeout, augmenter.augment(prompt))
            .await
            .map_err(|_| AugmentError::Timeout(self.timeout.as_secs()))?
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::plain()
    }
}

/// The prompt handed to the augmenter.
pub fn build_prompt(question: &str, prior_question: Option<&str>, facts: &str) -> String {
    match prior_question {
        Some(prior) => format!(
            "Previous question: {prior}\nCurrent question: {question}\nInformation: {facts}"
        ),
        None => format!("Question: {question}\nInformation: {facts}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FailingAugmenter, ScriptedAugmenter, SlowAugmenter};

    const FACTS: &str = "According to tax_policies_2023.pdf, the tax rate in Travis County is 1.9%";
    const FOLLOW_UP: &str = "\nWould you like to know more about Travis County?";

    #[tokio::test]
    async fn no_augmenter_is_verbatim() {
        let composer = Composer::plain();
        let answer = composer.compose(FACTS, FOLLOW_UP, "travis", None).await;
        assert_eq!(answer, format!("{FACTS}{FOLLOW_UP}"));

        let answer = composer.compose(FACTS, "", "travis", None).await;
        assert_eq!(answer, FACTS);
    }

    #[tokio::test]
    async fn augmenter_reply_replaces_facts_only() {
        let augmenter = Arc::new(ScriptedAugmenter::new(vec!["Travis County taxes at 1.9%."]));
        let composer = Composer::with_augmenter(augmenter.clone(), DEFAULT_AUGMENT_TIMEOUT);

        let answer = composer
            .compose(FACTS, FOLLOW_UP, "tax in travis?", Some("hello"))
            .await;
        assert_eq!(answer, format!("Travis County taxes at 1.9%.{FOLLOW_UP}"));

        let prompts = augmenter.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(
            prompts[0],
            format!("Previous question: hello\nCurrent question: tax in travis?\nInformation: {FACTS}")
        );
    }

    #[tokio::test]
    async fn failure_falls_back_verbatim() {
        let composer = Composer::with_augmenter(Arc::new(FailingAugmenter), DEFAULT_AUGMENT_TIMEOUT);
        let answer = composer.compose(FACTS, FOLLOW_UP, "travis", None).await;
        assert_eq!(answer, format!("{FACTS}{FOLLOW_UP}"));

        let composition = composer.composition(FACTS, "", "travis", None).await;
        assert_eq!(composition.text, FACTS);
        assert!(composition.fallback.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_falls_back_verbatim() {
        let composer = Composer::with_augmenter(
            Arc::new(SlowAugmenter(Duration::from_secs(60))),
            Duration::from_secs(2),
        );
        let composition = composer.composition(FACTS, FOLLOW_UP, "travis", None).await;
        assert_eq!(composition.text, format!("{FACTS}{FOLLOW_UP}"));
        assert!(matches!(composition.fallback, Some(AugmentError::Timeout(2))));
    }

    #[test]
    fn prompt_without_prior_question() {
        assert_eq!(
            build_prompt("tell me about texas", None, "facts"),
            "Question: tell me about texas\nInformation: facts"
        );
    }
}
