//! Activity log entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened in the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    SessionStarted,
    ExpenseLogged,
    BigPurchase,
    DayClosed,
    WeekSummarized,
    MonthSummarized,
    SessionEnded,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::SessionStarted => write!(f, "SESSION_STARTED"),
            ActivityKind::ExpenseLogged => write!(f, "EXPENSE_LOGGED"),
            ActivityKind::BigPurchase => write!(f, "BIG_PURCHASE"),
            ActivityKind::DayClosed => write!(f, "DAY_CLOSED"),
            ActivityKind::WeekSummarized => write!(f, "WEEK_SUMMARIZED"),
            ActivityKind::MonthSummarized => write!(f, "MONTH_SUMMARIZED"),
            ActivityKind::SessionEnded => write!(f, "SESSION_ENDED"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: ActivityKind,

    /// Day the operation referred to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,

    /// JSON form of the operation's outcome
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub detail: serde_json::Value,
}

impl ActivityEntry {
    /// Create an entry without detail
    pub fn new(event: ActivityKind, day: Option<i64>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            day,
            detail: serde_json::Value::Null,
        }
    }

    /// Create an entry carrying a serialized outcome
    ///
    /// Values that fail to serialize are recorded as null.
    pub fn with_detail<T: Serialize>(event: ActivityKind, day: Option<i64>, detail: &T) -> Self {
        Self {
            detail: serde_json::to_value(detail).unwrap_or(serde_json::Value::Null),
            ..Self::new(event, day)
        }
    }

    /// One-line human readable form
    pub fn format_human_readable(&self) -> String {
        let day = self
            .day
            .map(|d| format!(" day {}", d))
            .unwrap_or_default();
        format!(
            "[{}] {}{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event,
            day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;

    #[test]
    fn test_entry_with_detail() {
        let expense = ExpenseRecord::new(3, "Food", 4.25);
        let entry = ActivityEntry::with_detail(ActivityKind::ExpenseLogged, Some(3), &expense);

        assert_eq!(entry.detail["category"], "Food");
        assert_eq!(entry.detail["amount"], 4.25);
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = ActivityEntry::new(ActivityKind::SessionStarted, None);
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"event\":\"session_started\""));
        assert!(!json.contains("\"day\""));
        assert!(!json.contains("\"detail\""));

        let back: ActivityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.event, ActivityKind::SessionStarted);
        assert!(back.detail.is_null());
    }

    #[test]
    fn test_human_readable() {
        let entry = ActivityEntry::new(ActivityKind::DayClosed, Some(5));
        let text = entry.format_human_readable();
        assert!(text.contains("DAY_CLOSED day 5"));
    }
}
