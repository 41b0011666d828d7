use serde::{Deserialize, Serialize};

/// Terminal display state of one submission.
///
/// Every submission traverses idle → validate → (optional call) → one of
/// these three states. Failures are folded in here rather than propagated:
/// a failed submission leaves the process ready for the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// Input was blank after trimming; no call was made.
    Rejected,
    /// The completion call succeeded; holds the answer text verbatim.
    Succeeded(String),
    /// The completion call failed; holds the raw diagnostic detail.
    Failed { detail: String },
}

impl SubmissionOutcome {
    pub fn failed(detail: impl Into<String>) -> Self {
        Self::Failed {
            detail: detail.into(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The answer text, when this submission succeeded.
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Succeeded(text) => Some(text),
            _ => None,
        }
    }
}
