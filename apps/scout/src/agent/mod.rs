//! Conversation orchestration for the Scout agent.
//!
//! The agent owns an append-only chat history and routes each user turn:
//! classify intent, extract parameters, fill the matching template. The
//! chat path makes no model calls and has no failure modes beyond an
//! intent miss, which is answered with a fixed clarification sentence.

pub mod intent;
pub mod params;
pub mod templates;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::agent::intent::classify;
use crate::agent::params::ParamMap;
use crate::agent::templates::template_for;

/// Reply used when no intent rule matches the message. Not an error.
pub const CLARIFICATION_REPLY: &str =
    "Sorry, I didn't understand your request. Could you please clarify?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Immutable once appended to the history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Core conversation handler for the Scout recruitment agent.
///
/// The history is owned exclusively by one session, grows unboundedly for
/// the session's lifetime, and is never truncated or summarized.
pub struct ScoutAgent {
    session_id: Uuid,
    history: Vec<Message>,
}

impl ScoutAgent {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            history: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    fn push(&mut self, role: Role, content: &str) {
        self.history.push(Message {
            role,
            content: content.to_string(),
            created_at: Utc::now(),
        });
    }

    /// Handles one user turn and returns the agent's reply.
    ///
    /// Appends the user message, classifies it, and either fills the
    /// intent's template from the extracted parameters or answers with
    /// [`CLARIFICATION_REPLY`]. The reply is appended as an assistant
    /// message before returning.
    pub fn handle(&mut self, message: &str) -> String {
        self.push(Role::User, message);

        let intent = classify(message);
        let reply = match template_for(intent) {
            None => CLARIFICATION_REPLY.to_string(),
            Some(template) => {
                let params = ParamMap::parse(message);
                debug!(
                    session = %self.session_id,
                    intent = intent.as_str(),
                    params = params.len(),
                    "filling template"
                );
                template.fill(&params)
            }
        };

        self.push(Role::Assistant, &reply);
        reply
    }
}

impl Default for ScoutAgent {
    fn default() -> Self {
        Self::new()
    }
}
