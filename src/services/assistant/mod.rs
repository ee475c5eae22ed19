//! Assistant Service
//!
//! The natural-language mutation channel. One call builds a context snapshot
//! from the active store, hands it to the external delegate together with the
//! user's message, extracts at most one structured directive from the reply,
//! applies it through the storage contract, and returns the reply with the
//! directive text removed.
//!
//! Delegate failures surface as a structured failure response. A malformed or
//! unrecognized embedded directive never fails the call: the conversational
//! text is still returned.

use std::sync::Arc;

use tracing::{debug, info, warn};

use life_dash_core::StorageProvider;

use crate::models::assistant::{ChatResponse, Directive};

pub mod context;
pub mod directive;
pub mod executor;

pub use context::build_context;
pub use directive::{extract_directive, Extraction};
pub use executor::{DelegateConfig, DelegateError, DelegateRunner, DEFAULT_TIMEOUT};

/// Chat assistant over the storage contract.
pub struct AssistantService {
    store: Arc<dyn StorageProvider>,
    runner: DelegateRunner,
}

impl AssistantService {
    /// Create an assistant over the given store and delegate configuration.
    pub fn new(store: Arc<dyn StorageProvider>, config: DelegateConfig) -> Self {
        Self {
            store,
            runner: DelegateRunner::new(config),
        }
    }

    /// Conversational call. May apply at most one directive embedded in the
    /// delegate's reply.
    pub async fn chat(&self, message: &str) -> ChatResponse {
        let context = match build_context(self.store.as_ref()).await {
            Ok(context) => context,
            Err(e) => return ChatResponse::err(e.to_string()),
        };

        let reply = match self.runner.run(&chat_prompt(&context, message)).await {
            Ok(reply) => reply,
            Err(e) => return ChatResponse::err(e.to_string()),
        };

        let Extraction { cleaned, directive } = extract_directive(&reply);
        let mut response = ChatResponse::ok(cleaned);
        if let Some(directive) = directive {
            if self.apply_directive(&directive).await {
                response = response.with_action(directive);
            }
        }
        response
    }

    /// Progress analysis over the current snapshot. No directive handling;
    /// the delegate's reply is returned verbatim.
    pub async fn analyze_progress(&self) -> ChatResponse {
        self.respond(analysis_prompt).await
    }

    /// Priority recommendations for the current checklist. No directive
    /// handling.
    pub async fn suggest_priority(&self) -> ChatResponse {
        self.respond(priority_prompt).await
    }

    async fn respond(&self, prompt_for: fn(&str) -> String) -> ChatResponse {
        let context = match build_context(self.store.as_ref()).await {
            Ok(context) => context,
            Err(e) => return ChatResponse::err(e.to_string()),
        };
        match self.runner.run(&prompt_for(&context)).await {
            Ok(reply) => ChatResponse::ok(reply),
            Err(e) => ChatResponse::err(e.to_string()),
        }
    }

    /// Apply a recognized directive through the contract. Returns whether a
    /// mutation happened; failures are logged, never surfaced.
    async fn apply_directive(&self, directive: &Directive) -> bool {
        let result = match directive {
            Directive::AddChecklist { text } => {
                info!(%text, "assistant directive: add checklist entry");
                self.store.add_checklist(text).await
            }
            Directive::AddWip { title } => {
                info!(%title, "assistant directive: add wip item");
                self.store.add_wip(title).await
            }
            Directive::Unknown => {
                debug!("ignoring unrecognized assistant directive");
                return false;
            }
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "assistant directive failed to apply");
                false
            }
        }
    }
}

fn chat_prompt(context: &str, message: &str) -> String {
    format!(
        r#"You are a personal productivity assistant.

{context}

User message: "{message}"

Answer the user or carry out the request based on the snapshot above.

If the user asks to add a checklist entry or a work-in-progress item, put JSON
on the **last line** of your reply in exactly one of these forms:

ACTION_JSON: {{"type": "add_checklist", "text": "entry to add"}}
or
ACTION_JSON: {{"type": "add_wip", "title": "task title"}}

Examples:
- "add groceries" -> Adding it to the checklist! ACTION_JSON: {{"type": "add_checklist", "text": "groceries"}}
- "start the blog post" -> Added to WIP! ACTION_JSON: {{"type": "add_wip", "title": "Blog post"}}

Keep the answer concise, and append the JSON only when the user asked for a
mutation."#
    )
}

fn analysis_prompt(context: &str) -> String {
    format!(
        r#"You are a personal productivity analyst.

{context}

Analyze the data above and provide:
1. An overall progress assessment (0-100%)
2. Key wins (at most 3)
3. Areas needing attention (at most 3)
4. Next action items (at most 3)

Keep the advice concise and actionable."#
    )
}

fn priority_prompt(context: &str) -> String {
    format!(
        r#"You are a task prioritization expert.

{context}

Review the checklist entries above and provide:
1. A recommended priority (P1/P2/P3) for each entry
2. The reasoning behind each recommendation

Format: [entry number] [recommended priority] - reasoning

Keep it concise."#
    )
}
