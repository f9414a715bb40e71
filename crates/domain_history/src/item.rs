//! History entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of event in a car's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryEventKind {
    #[serde(rename = "Policy Start")]
    PolicyStart,
    #[serde(rename = "Policy End")]
    PolicyEnd,
    #[serde(rename = "Claim")]
    Claim,
}

impl HistoryEventKind {
    pub fn label(&self) -> &'static str {
        match self {
            HistoryEventKind::PolicyStart => "Policy Start",
            HistoryEventKind::PolicyEnd => "Policy End",
            HistoryEventKind::Claim => "Claim",
        }
    }
}

impl fmt::Display for HistoryEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One dated event in a car's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub date: NaiveDate,
    pub event_type: HistoryEventKind,
    pub description: String,
}
