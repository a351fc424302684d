//! Fixed-delay mock answer service.

use std::time::Duration;

use crate::chat::Citation;

use super::{Answer, AnswerError, AnswerService};

/// Default artificial response delay.
const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Canned answer text returned for every question.
const SIMULATED_ANSWER: &str = "Yes, under Section 166 of the Motor Vehicles Act, 1988, the \
     claimants are entitled to an addition for future prospects even when the deceased was \
     self-employed and aged 54–55 years at the time of the accident. In Dani Devi v. Pritam \
     Singh, the Court held that 10% of the deceased's annual income should be added as future \
     prospects.";

/// Canned citation excerpt.
const SIMULATED_EXCERPT: &str = "as the age of the deceased at the time of accident was held to \
     be about 54-55 years by the learned Tribunal, being self-employed, as such, 10% of annual \
     income should have been awarded on account of future prospects.";

/// Source document for the canned citation.
const SIMULATED_SOURCE: &str = "Dani_Devi_v_Pritam_Singh.pdf";

/// External link for the canned citation.
const SIMULATED_LINK: &str = "https://lexisingapore-my.sharepoint.com/:b:/g/personal/harshit_lexi_sg/EdOegeiR_gdBvQxdyW4xE6oBCDgj5E4Bo5wjvhPHpqgIuQ?e=TEu4vz";

/// Paragraph label for the canned citation.
const SIMULATED_PARAGRAPH: &str = "Para 7";

/// Stand-in for a real answer-generation backend.
///
/// After a fixed delay it returns the same hardcoded answer with a single
/// hardcoded citation. The question text is deliberately ignored: the real
/// backend that would consume it is not wired up yet.
#[derive(Debug, Clone)]
pub struct MockAnswerService {
    delay: Duration,
}

impl Default for MockAnswerService {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl MockAnswerService {
    /// Create a mock service with the given response delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured response delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn canned_answer() -> Answer {
        Answer {
            text: SIMULATED_ANSWER.to_string(),
            citations: vec![Citation {
                text: SIMULATED_EXCERPT.to_string(),
                source: SIMULATED_SOURCE.to_string(),
                link: SIMULATED_LINK.to_string(),
                paragraph: Some(SIMULATED_PARAGRAPH.to_string()),
            }],
        }
    }
}

#[async_trait::async_trait]
impl AnswerService for MockAnswerService {
    async fn answer(&self, _question: &str) -> Result<Answer, AnswerError> {
        tokio::time::sleep(self.delay).await;
        Ok(Self::canned_answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_answer_arrives_after_configured_delay() {
        let service = MockAnswerService::default();
        let started = tokio::time::Instant::now();

        let answer = service.answer("ignored question").await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(1500));
        assert!(answer.text.starts_with("Yes, under Section 166"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_answer_carries_exactly_one_citation() {
        let service = MockAnswerService::new(Duration::from_millis(10));
        let answer = service.answer("anything").await.unwrap();

        assert_eq!(answer.citations.len(), 1);
        let citation = &answer.citations[0];
        assert_eq!(citation.source, "Dani_Devi_v_Pritam_Singh.pdf");
        assert_eq!(citation.paragraph.as_deref(), Some("Para 7"));
        assert!(citation.link.starts_with("https://"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_question_text_does_not_change_the_answer() {
        let service = MockAnswerService::new(Duration::from_millis(1));
        let a = service.answer("first question").await.unwrap();
        let b = service.answer("a completely different one").await.unwrap();
        assert_eq!(a, b);
    }
}
