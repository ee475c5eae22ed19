//! Data Models
//!
//! Plain-data structures exchanged with the host.

pub mod assistant;
pub mod dashboard;

pub use assistant::*;
pub use dashboard::*;
