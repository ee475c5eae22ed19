//! Directive Extraction
//!
//! Finds at most one `ACTION_JSON: {...}` directive in a delegate reply,
//! strips it from the conversational text, and parses it. A parse failure is
//! logged and treated as "no directive"; it never fails the overall call.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::models::assistant::Directive;

fn action_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"ACTION_JSON:\s*(\{.*\})").expect("pattern compiles"))
}

/// Result of scanning a reply for a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Reply text with the matched directive substring removed
    pub cleaned: String,
    /// The parsed directive, if the match parsed
    pub directive: Option<Directive>,
}

/// Scan `reply` for the first directive. The matched substring is stripped
/// from the returned text regardless of whether parsing succeeded; text with
/// no match (including one the pattern cannot isolate, e.g. an unterminated
/// JSON object) is returned as-is.
pub fn extract_directive(reply: &str) -> Extraction {
    let caps = match action_re().captures(reply) {
        Some(caps) => caps,
        None => {
            return Extraction {
                cleaned: reply.trim().to_string(),
                directive: None,
            }
        }
    };

    let (whole, json) = match (caps.get(0), caps.get(1)) {
        (Some(whole), Some(json)) => (whole, json),
        _ => {
            return Extraction {
                cleaned: reply.trim().to_string(),
                directive: None,
            }
        }
    };

    let cleaned = format!("{}{}", &reply[..whole.start()], &reply[whole.end()..])
        .trim()
        .to_string();

    let directive = match serde_json::from_str::<Directive>(json.as_str()) {
        Ok(directive) => Some(directive),
        Err(e) => {
            warn!(error = %e, "discarding unparseable assistant directive");
            None
        }
    };

    Extraction { cleaned, directive }
}
