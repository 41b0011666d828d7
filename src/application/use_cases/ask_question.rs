use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::ChatClient;
use crate::domain::{Question, SubmissionOutcome, SYSTEM_INSTRUCTION};

/// Mediates between raw user input and the [`ChatClient`].
///
/// Each submission is validated, dispatched (at most one completion call),
/// and mapped to exactly one [`SubmissionOutcome`]. Failures from the
/// client are absorbed here: `execute` never returns an error, so a failed
/// submission leaves the caller free to submit again.
pub struct AskQuestionUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl AskQuestionUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Run one submission through validate → complete → outcome.
    ///
    /// Blank input (empty after trimming) is rejected before any network
    /// activity. Non-blank input is sent untrimmed: trimming is only a
    /// validity test, never a payload transformation.
    pub async fn execute(&self, question: &Question) -> SubmissionOutcome {
        if question.is_blank() {
            info!("Rejected blank question; no completion call made");
            return SubmissionOutcome::Rejected;
        }

        let start_time = Instant::now();

        match self
            .chat_client
            .complete(SYSTEM_INSTRUCTION, question.raw())
            .await
        {
            Ok(answer) => {
                info!(
                    "Completion succeeded in {:.2}s ({} bytes)",
                    start_time.elapsed().as_secs_f64(),
                    answer.len()
                );
                SubmissionOutcome::Succeeded(answer)
            }
            Err(e) => {
                warn!("Completion failed: {e}");
                SubmissionOutcome::failed(e.to_string())
            }
        }
    }
}
