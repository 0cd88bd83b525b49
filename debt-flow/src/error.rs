use thiserror::Error;

use crate::step::Step;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Step {step} expects {expected} input, got {received}")]
    UnexpectedInput {
        step: Step,
        expected: &'static str,
        received: &'static str,
    },

    #[error("Unknown option '{value}' for step {step}")]
    UnknownOption { step: Step, value: String },

    #[error("Step {0} does not accept user input")]
    InputClosed(Step),

    #[error("No analysis pending: session is at step {0}")]
    NotAnalyzing(Step),

    #[error("Storage error: {0}")]
    StorageError(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;
