//! Inbox message record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gourmet_core::MessageId;

/// A message posted to the messaging panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sent_at: DateTime<Utc>,
    pub content: String,
    /// Shown as the "new" badge. Nothing in the session clears it.
    pub read: bool,
}
