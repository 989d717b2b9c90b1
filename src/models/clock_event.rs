use super::{event_kind::EventKind, location::Location, wire::ClockEventWire};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockEvent {
    pub id: Option<i64>,
    pub employee_id: i64, // ⇔ Employee.id, lookup by value only
    pub kind: EventKind,
    pub date: NaiveDate,
    pub time: NaiveTime, // minute precision
    pub note: Option<String>,
    pub location: Location,
    pub created_at: DateTime<Utc>,
}

impl ClockEvent {
    /// Build a record created locally. Empty notes are stored as `None`.
    pub fn new(
        id: Option<i64>,
        employee_id: i64,
        kind: EventKind,
        date: NaiveDate,
        time: NaiveTime,
        note: Option<String>,
        location: Location,
    ) -> Self {
        Self {
            id,
            employee_id,
            kind,
            date,
            time,
            note: note.filter(|n| !n.trim().is_empty()),
            location,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn to_wire(&self) -> ClockEventWire {
        ClockEventWire {
            id: self.id,
            employee_id: self.employee_id,
            kind: self.kind,
            date: self.date,
            time: self.time,
            note: self.note.clone(),
            location: self.location,
            created_at: Some(self.created_at),
        }
    }

    pub fn from_wire(wire: ClockEventWire) -> Self {
        Self {
            id: wire.id,
            employee_id: wire.employee_id,
            kind: wire.kind,
            date: wire.date,
            time: wire.time,
            note: wire.note,
            location: wire.location,
            created_at: wire.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Moment the event refers to (not when it was recorded).
    pub fn moment(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
