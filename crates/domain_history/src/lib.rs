//! Car History
//!
//! Merges a car's policies and claims into one chronological event list.
//! Nothing here is persisted: the history is rebuilt on every request.

pub mod item;
pub mod aggregator;
pub mod error;
pub mod service;

pub use item::{HistoryEventKind, HistoryItem};
pub use aggregator::build_history;
pub use error::HistoryError;
pub use service::HistoryService;
