//! Persona framing.
//!
//! Gemini has no system role in a chat session, so the persona is expressed
//! as a synthetic exchange at the head of every history: the instruction as a
//! user turn, then a short model acknowledgement.
//!
//! The server keeps no session state, so the framing is prepended on every
//! request. A client that echoes a full history back will therefore carry
//! earlier persona turns after the fresh prefix.

use mentor_types::turn::{Content, Turn};

/// Instruction establishing the Mentor persona.
pub const MENTOR_INSTRUCTION: &str = "You are 'Mentor', an advanced AI designed to be a supportive and empathetic partner. \
Your primary goal is to help users with their wellness, self-development, and career focus. \
Act as a guide, teacher, and mentor. \
Your responses should be encouraging, insightful, and focused on helping the user build self-trust, \
manage stress, find life balance, and stay focused on their goals. \
Ask clarifying questions to understand their needs better. \
Provide actionable, small steps (like 'Micro-Wins') they can take. \
Never be judgmental. Always be patient and supportive. \
Always respond in Markdown format for good readability.";

/// Model-side acknowledgement that follows the instruction.
pub const MENTOR_ACKNOWLEDGEMENT: &str =
    "Understood. I am ready to help as a supportive and empathetic mentor.";

/// The fixed instruction/acknowledgement pair prepended to every history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    instruction: String,
    acknowledgement: String,
}

impl Persona {
    pub fn new(instruction: impl Into<String>, acknowledgement: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            acknowledgement: acknowledgement.into(),
        }
    }

    /// The two synthetic turns, in order.
    pub fn preamble(&self) -> [Turn; 2] {
        [
            Turn::user(self.instruction.clone()),
            Turn::model(self.acknowledgement.clone()),
        ]
    }

    /// Prepend the preamble to a normalized history.
    pub fn frame(&self, history: Vec<Content>) -> Vec<Content> {
        let mut full = Vec::with_capacity(history.len() + 2);
        full.extend(self.preamble().map(Content::from));
        full.extend(history);
        full
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new(MENTOR_INSTRUCTION, MENTOR_ACKNOWLEDGEMENT)
    }
}
