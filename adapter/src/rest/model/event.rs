use super::{de_flexible_date, de_opaque_id, de_participants, de_price};
use chrono::{DateTime, Utc};
use kernel::model::{
    event::{event::CreateEvent, Event, EventStatus, Location},
    id::EventId,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    #[serde(
        default,
        deserialize_with = "de_opaque_id",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub modality: String,
    #[serde(
        default,
        deserialize_with = "de_flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "de_flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
    /// Legacy alias of `startDate`; older rows only carry this one. Kept
    /// in sync on every write so legacy readers keep working.
    #[serde(
        default,
        deserialize_with = "de_flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: LocationRow,
    #[serde(default = "default_participants", deserialize_with = "de_participants")]
    pub max_participants: u32,
    #[serde(default, deserialize_with = "de_price")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prizes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub requester: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn default_participants() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LocationRow {
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<f64>>,
}

impl EventRow {
    /// Insert body for a new submission. Status is written as `pending`
    /// unconditionally; `CreateEvent` cannot carry one.
    pub fn from_create(event: CreateEvent) -> Self {
        let CreateEvent {
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
            requester,
        } = event;
        Self {
            id: String::new(),
            title,
            description,
            category,
            format,
            modality,
            start_date,
            end_date,
            date: start_date,
            location: LocationRow::from(location),
            max_participants,
            price,
            prizes,
            rules,
            registration_link,
            stream_link,
            contact,
            images,
            requester,
            status: Some(EventStatus::Pending.to_string()),
        }
    }
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        let EventRow {
            id,
            title,
            description,
            category,
            format,
            modality,
            start_date,
            end_date,
            date,
            location,
            max_participants,
            price,
            prizes,
            rules,
            registration_link,
            stream_link,
            contact,
            images,
            requester,
            status,
        } = row;
        Self {
            id: EventId::new(id),
            title,
            description,
            category,
            format,
            modality,
            // The legacy alias folds into the effective date here and
            // nowhere else.
            start_date: start_date.or(date),
            end_date,
            location: Location::from(location),
            max_participants,
            price,
            prizes,
            rules,
            registration_link,
            stream_link,
            contact,
            images,
            requester,
            // Absent or unrecognized status counts as pending.
            status: status
                .as_deref()
                .and_then(|s| EventStatus::from_str(s.trim()).ok())
                .unwrap_or_default(),
        }
    }
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.raw().to_string(),
            title: event.title.clone(),
            description: event.description.clone(),
            category: event.category.clone(),
            format: event.format.clone(),
            modality: event.modality.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            date: event.start_date,
            location: LocationRow::from(event.location.clone()),
            max_participants: event.max_participants,
            price: event.price,
            prizes: event.prizes.clone(),
            rules: event.rules.clone(),
            registration_link: event.registration_link.clone(),
            stream_link: event.stream_link.clone(),
            contact: event.contact.clone(),
            images: event.images.clone(),
            requester: event.requester.clone(),
            status: Some(event.status.to_string()),
        }
    }
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            address: row.address,
            coordinates: row
                .coordinates
                .filter(|c| c.len() >= 2)
                .map(|c| (c[0], c[1])),
        }
    }
}

impl From<Location> for LocationRow {
    fn from(location: Location) -> Self {
        Self {
            address: location.address,
            coordinates: location.coordinates.map(|(lat, lng)| vec![lat, lng]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_rows_normalize_status_date_and_price() {
        let row: EventRow = serde_json::from_str(
            r#"{"id": 3, "title": "Torneo", "date": "2024-03-01",
                "price": "25.5", "location": {"address": "Madrid"}}"#,
        )
        .unwrap();
        let event = Event::from(row);

        assert_eq!(event.id, EventId::from("3"));
        assert_eq!(event.status, EventStatus::Pending);
        assert!(event.effective_date().is_some());
        assert_eq!(event.price, 25.5);
        assert_eq!(event.location.address, "Madrid");
        assert!(event.location.coordinates.is_none());
    }

    #[test]
    fn garbage_price_counts_as_free() {
        let row: EventRow =
            serde_json::from_str(r#"{"id": "1", "price": "gratis"}"#).unwrap();
        assert_eq!(Event::from(row).price, 0.0);
    }

    #[test]
    fn unknown_status_counts_as_pending() {
        let row: EventRow =
            serde_json::from_str(r#"{"id": "1", "status": "archived"}"#).unwrap();
        assert_eq!(Event::from(row).status, EventStatus::Pending);
    }

    #[test]
    fn writes_keep_the_legacy_date_alias_in_sync() {
        let row: EventRow = serde_json::from_str(
            r#"{"id": "1", "startDate": "2024-03-01T10:00:00Z", "status": "approved"}"#,
        )
        .unwrap();
        let event = Event::from(row);
        let body = serde_json::to_value(EventRow::from(&event)).unwrap();

        assert_eq!(body["date"], body["startDate"]);
        assert_eq!(body["status"], "approved");
    }

    #[test]
    fn insert_body_forces_pending_and_drops_the_id() {
        let event = CreateEvent {
            title: "Torneo".into(),
            description: String::new(),
            category: "ajedrez".into(),
            format: "individual".into(),
            modality: "presencial".into(),
            start_date: None,
            end_date: None,
            location: Location::default(),
            max_participants: 16,
            price: 0.0,
            prizes: None,
            rules: None,
            registration_link: None,
            stream_link: None,
            contact: None,
            images: Vec::new(),
            requester: "colab@example.com".into(),
        };
        let body = serde_json::to_value(EventRow::from_create(event)).unwrap();

        assert!(body.get("id").is_none());
        assert_eq!(body["status"], "pending");
        assert_eq!(body["requester"], "colab@example.com");
    }
}
