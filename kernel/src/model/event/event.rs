use crate::model::{
    event::{Event, Location},
    id::EventId,
};
use chrono::{DateTime, Utc};

/// Payload for submitting a new event. Carries no status on purpose: a
/// freshly created event is pending no matter what the caller asked for.
pub struct CreateEvent {
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
    pub requester: String,
}

#[derive(Debug, Default)]
pub struct UpdateEvent {
    pub event_id: EventId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub format: Option<String>,
    pub modality: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub max_participants: Option<u32>,
    pub price: Option<f64>,
    pub prizes: Option<String>,
    pub rules: Option<String>,
    pub registration_link: Option<String>,
    pub stream_link: Option<String>,
    pub contact: Option<String>,
    pub images: Option<Vec<String>>,
}

impl UpdateEvent {
    /// Merges the set fields into the stored record. Id, requester and
    /// status are never touched here; status moves only through the admin
    /// transition path.
    pub fn apply_to(self, mut current: Event) -> Event {
        let UpdateEvent {
            event_id: _,
            title,
            description,
            category,
            format,
            modality,
            start_date,
            end_date,
            location,
            max_participants,
            price,
            prizes,
            rules,
            registration_link,
            stream_link,
            contact,
            images,
        } = self;

        if let Some(v) = title {
            current.title = v;
        }
        if let Some(v) = description {
            current.description = v;
        }
        if let Some(v) = category {
            current.category = v;
        }
        if let Some(v) = format {
            current.format = v;
        }
        if let Some(v) = modality {
            current.modality = v;
        }
        if let Some(v) = start_date {
            current.start_date = Some(v);
        }
        if let Some(v) = end_date {
            current.end_date = Some(v);
        }
        if let Some(v) = location {
            current.location = v;
        }
        if let Some(v) = max_participants {
            current.max_participants = v;
        }
        if let Some(v) = price {
            current.price = v;
        }
        if let Some(v) = prizes {
            current.prizes = Some(v);
        }
        if let Some(v) = rules {
            current.rules = Some(v);
        }
        if let Some(v) = registration_link {
            current.registration_link = Some(v);
        }
        if let Some(v) = stream_link {
            current.stream_link = Some(v);
        }
        if let Some(v) = contact {
            current.contact = Some(v);
        }
        if let Some(v) = images {
            current.images = v;
        }
        current
    }
}
