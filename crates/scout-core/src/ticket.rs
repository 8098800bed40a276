//! Disclosure ticket entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a disclosure ticket. Created as [`TicketStatus::Submitted`];
/// later transitions belong to an external tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Submitted,
    Pending,
    Closed,
}

/// A formal information-disclosure request derived from one ranked notice.
///
/// `due_date` is always `period_to + 10` calendar days (the statutory
/// processing window). Never mutated after creation except `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisclosureTicket {
    pub id: String,
    pub agency: String,
    pub project_title: String,
    pub period_from: NaiveDate,
    pub period_to: NaiveDate,
    pub status: TicketStatus,
    /// Rendered markdown request text.
    pub request_text_md: String,
    #[serde(default)]
    pub links: Vec<String>,
    pub due_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_defaults_to_submitted() {
        assert_eq!(TicketStatus::default(), TicketStatus::Submitted);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
