//! The answer-service seam.
//!
//! [`AnswerService`] is the capability the input handler invokes: question
//! text in, answer plus citations out. The only implementation today is
//! [`MockAnswerService`], which produces a canned answer after a fixed delay;
//! a networked retrieval/generation backend would slot in behind the same
//! trait.

mod mock;

pub use mock::MockAnswerService;

use std::time::Duration;

use crate::chat::Citation;

/// An answer produced by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Answer text shown in the assistant bubble.
    pub text: String,
    /// Ordered citations backing the answer.
    pub citations: Vec<Citation>,
}

/// Failure kinds an answer backend can surface.
///
/// The mock never fails; these exist so a real backend can report through the
/// same seam and the UI path already clears the pending flag on every branch.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// The backend could not be reached.
    #[error("answer service unavailable: {0}")]
    Unavailable(String),
    /// The backend did not respond in time.
    #[error("answer service timed out after {0:?}")]
    Timeout(Duration),
    /// The backend found no relevant source for the question.
    #[error("no relevant source found for this question")]
    NoResult,
}

/// Trait for answer backends.
#[async_trait::async_trait]
pub trait AnswerService: Send + Sync {
    /// Produce an answer for the given question text.
    ///
    /// # Errors
    ///
    /// Returns an [`AnswerError`] when the backend cannot produce an answer.
    async fn answer(&self, question: &str) -> Result<Answer, AnswerError>;
}
