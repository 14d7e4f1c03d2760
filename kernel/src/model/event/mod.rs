use crate::model::id::EventId;
use chrono::{DateTime, Utc};
use strum::{Display, EnumString};

pub mod event;
pub mod query;

/// Lifecycle of a submitted event. New events always enter at `Pending`;
/// only an administrator moves them from there, and an `Approved` event is
/// closed to edits from everyone but that same admin status path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub address: String,
    pub coordinates: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub format: String,
    pub modality: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Location,
    pub max_participants: u32,
    pub price: f64,
    pub prizes: Option<String>,
    pub rules: Option<String>,
    pub registration_link: Option<String>,
    pub stream_link: Option<String>,
    pub contact: Option<String>,
    pub images: Vec<String>,
    /// Email of the collaborator who submitted the event. Weak reference,
    /// no integrity enforcement against the users collection.
    pub requester: String,
    pub status: EventStatus,
}

impl Event {
    /// The date used for filtering and ordering. Legacy records that only
    /// carried `date` are folded into `start_date` at ingestion, so this is
    /// the single place consumers need to look.
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    pub fn is_editable(&self) -> bool {
        self.status != EventStatus::Approved
    }
}
