//! Calendar event record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gourmet_core::EventId;

/// An entry in the calendar panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
}
