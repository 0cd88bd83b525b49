use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    answers::{Answers, normalize_amount},
    catalog::{DebtDuration, DebtType, NegativeListing, Renegotiation},
    error::{FlowError, Result},
    outcome::ResultCard,
    prompt::{Branding, InputMode, StepPrompt, choices_for, prompt_for},
    step::{InputKind, Step},
    storage::Session,
    transcript::{Message, Transcript},
};

/// An answer coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum UserInput {
    /// The `value` of a presented option.
    Choice(String),
    Text(String),
}

impl UserInput {
    fn kind(&self) -> &'static str {
        match self {
            UserInput::Choice(_) => InputKind::Choices.describe(),
            UserInput::Text(_) => InputKind::FreeText.describe(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnStatus {
    /// An input affordance is exposed.
    WaitingForInput,
    /// The analysis pause is pending; call `complete_analysis` after it.
    Analyzing,
    /// The result card is available.
    Completed,
    /// Blank text was submitted; nothing changed.
    Ignored,
}

/// What the presentation layer shows after one transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub step: Step,
    /// Bot messages appended by this transition, in reveal order.
    pub messages: Vec<String>,
    pub input: InputMode,
    pub status: TurnStatus,
    pub result: Option<ResultCard>,
}

/// Everything needed to redraw a session from scratch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub step: Step,
    pub answers: Answers,
    pub transcript: Transcript,
    pub input: InputMode,
    pub result: Option<ResultCard>,
}

/// Drives a [`Session`] through the questionnaire.
///
/// The controller holds no per-session state, so one instance can serve any
/// number of sessions and presentation variants.
#[derive(Debug, Clone, Default)]
pub struct FlowController {
    branding: Branding,
}

impl FlowController {
    pub fn new(branding: Branding) -> Self {
        Self { branding }
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Open a new session at `welcome` and log the greeting.
    pub fn start(&self, id: impl Into<String>) -> (Session, Turn) {
        let mut session = Session::new(id);
        let prompt = prompt_for(Step::Welcome, &session.answers, &self.branding);
        let turn = self.enter(&mut session, Step::Welcome, prompt);
        info!(session_id = %session.id, "Session started");
        (session, turn)
    }

    /// Apply one user answer to the session's current step.
    pub fn handle(&self, session: &mut Session, input: UserInput) -> Result<Turn> {
        let step = session.step;
        let expected = step.input_kind();

        match (expected, &input) {
            (InputKind::Closed, _) => {
                warn!(session_id = %session.id, step = %step, "Input received while closed");
                Err(FlowError::InputClosed(step))
            }
            (InputKind::Choices, UserInput::Choice(value)) => {
                let choice = choices_for(step)
                    .into_iter()
                    .find(|c| c.value == *value)
                    .ok_or_else(|| FlowError::UnknownOption {
                        step,
                        value: value.clone(),
                    })?;
                record(&mut session.answers, step, &choice.value)?;
                session.transcript.push(Message::user(choice.label));
                Ok(self.advance(session))
            }
            (InputKind::FreeText, UserInput::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    debug!(session_id = %session.id, step = %step, "Ignoring blank input");
                    return Ok(self.ignored(session));
                }
                record(&mut session.answers, step, text)?;
                session.transcript.push(Message::user(text));
                Ok(self.advance(session))
            }
            (_, input) => {
                warn!(
                    session_id = %session.id,
                    step = %step,
                    received = input.kind(),
                    "Input does not match the exposed affordance"
                );
                Err(FlowError::UnexpectedInput {
                    step,
                    expected: expected.describe(),
                    received: input.kind(),
                })
            }
        }
    }

    /// Leave `analyzing` for `result`. Valid exactly once per session.
    pub fn complete_analysis(&self, session: &mut Session) -> Result<Turn> {
        if session.step != Step::Analyzing {
            return Err(FlowError::NotAnalyzing(session.step));
        }
        Ok(self.advance(session))
    }

    /// Input affordance currently exposed by the session.
    pub fn current_input(&self, session: &Session) -> InputMode {
        prompt_for(session.step, &session.answers, &self.branding).input
    }

    /// The result card, once the session reached `result`.
    pub fn result_card(&self, session: &Session) -> Option<ResultCard> {
        session
            .step
            .is_terminal()
            .then(|| ResultCard::build(&session.answers, &self.branding))
    }

    pub fn snapshot(&self, session: &Session) -> SessionSnapshot {
        SessionSnapshot {
            id: session.id.clone(),
            step: session.step,
            answers: session.answers.clone(),
            transcript: session.transcript.clone(),
            input: self.current_input(session),
            result: self.result_card(session),
        }
    }

    fn advance(&self, session: &mut Session) -> Turn {
        let from = session.step;
        // `result` is the only step without a successor and never accepts input
        let to = from.next().unwrap_or(from);
        let prompt = prompt_for(to, &session.answers, &self.branding);

        info!(session_id = %session.id, from = %from, to = %to, "Step advanced");
        self.enter(session, to, prompt)
    }

    fn enter(&self, session: &mut Session, step: Step, prompt: StepPrompt) -> Turn {
        session.step = step;
        for text in &prompt.messages {
            session.transcript.push(Message::bot(text.as_str()));
        }
        session.touch();

        let (status, result) = match step {
            Step::Analyzing => (TurnStatus::Analyzing, None),
            Step::Result => {
                let card = ResultCard::build(&session.answers, &self.branding);
                info!(
                    session_id = %session.id,
                    points = card.points,
                    level = %card.level,
                    growth_percent = card.growth_percent,
                    "Risk analysis completed"
                );
                (TurnStatus::Completed, Some(card))
            }
            _ => (TurnStatus::WaitingForInput, None),
        };

        Turn {
            step,
            messages: prompt.messages,
            input: prompt.input,
            status,
            result,
        }
    }

    fn ignored(&self, session: &Session) -> Turn {
        Turn {
            step: session.step,
            messages: Vec::new(),
            input: self.current_input(session),
            status: TurnStatus::Ignored,
            result: None,
        }
    }
}

/// Write the answer collected at `step`.
fn record(answers: &mut Answers, step: Step, value: &str) -> Result<()> {
    let unknown = || FlowError::UnknownOption {
        step,
        value: value.to_string(),
    };
    match step {
        Step::Welcome => {}
        Step::Bank => answers.bank = Some(value.to_string()),
        Step::DebtType => answers.debt_type = Some(DebtType::from_code(value).ok_or_else(unknown)?),
        Step::OriginalAmount => answers.original_amount = Some(normalize_amount(value)),
        Step::CurrentAmount => answers.current_amount = Some(normalize_amount(value)),
        Step::Duration => {
            answers.duration = Some(DebtDuration::from_code(value).ok_or_else(unknown)?)
        }
        Step::NegativeListing => {
            answers.negative_listing = Some(NegativeListing::from_code(value).ok_or_else(unknown)?)
        }
        Step::RenegotiationAttempt => {
            answers.renegotiation = Some(Renegotiation::from_code(value).ok_or_else(unknown)?)
        }
        Step::Name => answers.full_name = Some(value.to_string()),
        Step::Phone => answers.phone = Some(value.to_string()),
        Step::Analyzing | Step::Result => return Err(FlowError::InputClosed(step)),
    }
    Ok(())
}
