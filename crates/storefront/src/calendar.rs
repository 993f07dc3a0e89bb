//! Calendar panel store.

use chrono::NaiveDate;
use tracing::debug;

use gourmet_core::EventId;

use crate::models::CalendarEvent;

/// Title given to events created by picking a date.
pub const PLACEHOLDER_TITLE: &str = "New event";
/// Description given to events created by picking a date.
pub const PLACEHOLDER_DESCRIPTION: &str = "Event description";

/// Append-only list of calendar events in creation order (not sorted by date).
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    events: Vec<CalendarEvent>,
    version: u64,
}

impl Calendar {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            version: 0,
        }
    }

    /// Append an event and return it.
    #[allow(clippy::indexing_slicing)] // the new record was just pushed
    pub fn add_event(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> &CalendarEvent {
        let id = EventId::sequential(self.events.len());
        self.events.push(CalendarEvent {
            id,
            date,
            title: title.into(),
            description: description.into(),
        });
        self.version += 1;
        debug!(event_id = %id, %date, "Added calendar event");
        &self.events[self.events.len() - 1]
    }

    /// Date-picker callback: adds a placeholder event on `date`.
    pub fn select_date(&mut self, date: NaiveDate) -> &CalendarEvent {
        self.add_event(PLACEHOLDER_TITLE, PLACEHOLDER_DESCRIPTION, date)
    }

    /// Events in creation order.
    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Events falling on `date`.
    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(move |event| event.date == date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_events_keep_creation_order() {
        let mut calendar = Calendar::new();
        calendar.add_event("Cata de vinos", "Ribera del Duero", date(2024, 5, 10));
        calendar.add_event("Inventario", "", date(2024, 3, 1));

        let dates: Vec<NaiveDate> = calendar.events().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2024, 5, 10), date(2024, 3, 1)]);
        let ids: Vec<i32> = calendar.events().iter().map(|e| e.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_select_date_uses_placeholder_text() {
        let mut calendar = Calendar::new();
        let event = calendar.select_date(date(2024, 2, 2));
        assert_eq!(event.title, PLACEHOLDER_TITLE);
        assert_eq!(event.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(calendar.on(date(2024, 2, 2)).count(), 1);
        assert_eq!(calendar.on(date(2024, 2, 3)).count(), 0);
    }
}
