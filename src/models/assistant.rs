//! Assistant Types
//!
//! The directive grammar the assistant may embed in a reply, and the response
//! shape returned to the host.

use serde::{Deserialize, Serialize};

/// A structured command embedded in free-form assistant text.
///
/// Internally tagged on `type`; any unrecognized type deserializes to
/// `Unknown` and is inert (no error, no mutation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    /// Append an entry to the weekly checklist
    AddChecklist { text: String },
    /// Append an item to the WIP list
    AddWip { title: String },
    /// Any other `type` value; recognized but never applied
    #[serde(other)]
    Unknown,
}

/// Result of one assistant call.
///
/// Delegate failures surface here as `success: false` with an error message;
/// a malformed or unrecognized embedded directive never fails the call — the
/// conversational text is still returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    /// Conversational reply with any directive text stripped
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The directive that was applied, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Directive>,
}

impl ChatResponse {
    /// Successful reply with no applied action.
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
            error: None,
            action: None,
        }
    }

    /// Failed call; no conversational content.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(message.into()),
            action: None,
        }
    }

    /// Attach the applied directive.
    pub fn with_action(mut self, action: Directive) -> Self {
        self.action = Some(action);
        self
    }
}
