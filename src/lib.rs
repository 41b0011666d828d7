pub mod application;
pub mod connector;
pub mod domain;

pub use application::{AskQuestionUseCase, ChatClient};

pub use connector::{GroqChatClient, MockChatClient, RecordedCall};

pub use domain::{
    DomainError, Question, SubmissionOutcome, REFUSAL_LINE, SYSTEM_INSTRUCTION,
};
