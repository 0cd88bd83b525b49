//! Scripted debt-review conversation.
//!
//! A [`FlowController`] walks a [`Session`] through a fixed questionnaire and
//! the [`scorer`] turns the collected [`Answers`] into a risk level. Both are
//! free of presentation concerns: every transition yields a [`Turn`]
//! descriptor that a web page, a mobile view or a terminal renders its own way.

pub mod answers;
pub mod catalog;
pub mod contact;
pub mod controller;
pub mod error;
pub mod format;
pub mod outcome;
pub mod pacing;
pub mod prompt;
pub mod runner;
pub mod scorer;
pub mod step;
pub mod storage;
pub mod transcript;

// Re-export commonly used types
pub use answers::{Answers, normalize_amount};
pub use controller::{FlowController, SessionSnapshot, Turn, TurnStatus, UserInput};
pub use error::{FlowError, Result};
pub use outcome::{LegalAction, ResultCard};
pub use pacing::{InstantPacer, Pacer, TypingPacer};
pub use prompt::{Branding, Choice, InputMode, StepPrompt};
pub use runner::FlowRunner;
pub use scorer::{RiskLevel, RiskResult, score};
pub use step::Step;
pub use storage::{InMemorySessionStorage, Session, SessionStorage};
pub use transcript::{Message, Sender, Transcript};
