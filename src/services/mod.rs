//! Services
//!
//! Business logic: the document codec, the weekly document locator, the
//! dashboard snapshot builder, and the chat assistant.

pub mod assistant;
pub mod dashboard;
pub mod document;
pub mod weekly;

pub use assistant::{AssistantService, DelegateConfig};
pub use dashboard::dashboard_snapshot;
pub use weekly::{week_key, WeeklyLocator};
