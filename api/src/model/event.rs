use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        Location,
    },
    id::EventId,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub coordinates: Option<(f64, f64)>,
}

impl From<LocationRequest> for Location {
    fn from(value: LocationRequest) -> Self {
        Self {
            address: value.address,
            coordinates: value.coordinates,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[serde(default)]
    #[garde(skip)]
    pub description: String,
    #[serde(default)]
    #[garde(skip)]
    pub category: String,
    #[serde(default)]
    #[garde(skip)]
    pub format: String,
    #[serde(default)]
    #[garde(skip)]
    pub modality: String,
    #[serde(default)]
    #[garde(skip)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[garde(skip)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[garde(skip)]
    pub location: LocationRequest,
    #[garde(range(min = 1))]
    pub max_participants: u32,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[garde(skip)]
    pub prizes: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    pub rules: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    pub registration_link: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    pub stream_link: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    pub contact: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    pub images: Vec<String>,
    /// Accepted from the form but never honored; new events start pending.
    #[serde(default)]
    #[garde(skip)]
    pub status: Option<String>,
    /// Accepted but ignored; the requester is always the session user.
    #[serde(default)]
    #[garde(skip)]
    pub requester: Option<String>,
}

impl CreateEventRequest {
    pub fn into_event(self, requester: String) -> CreateEvent {
        let CreateEventRequest {
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
            status: _,
            requester: _,
        } = self;
        CreateEvent {
            title,
            description,
            category,
            format,
            modality,
            start_date,
            end_date,
            location: location.into(),
            max_participants,
            price,
            prizes,
            rules,
            registration_link,
            stream_link,
            contact,
            images,
            requester,
        }
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[garde(inner(length(min = 1)))]
    pub title: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub category: Option<String>,
    #[garde(skip)]
    pub format: Option<String>,
    #[garde(skip)]
    pub modality: Option<String>,
    #[garde(skip)]
    pub start_date: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub end_date: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub location: Option<LocationRequest>,
    #[garde(inner(range(min = 1)))]
    pub max_participants: Option<u32>,
    #[garde(inner(range(min = 0.0)))]
    pub price: Option<f64>,
    #[garde(skip)]
    pub prizes: Option<String>,
    #[garde(skip)]
    pub rules: Option<String>,
    #[garde(skip)]
    pub registration_link: Option<String>,
    #[garde(skip)]
    pub stream_link: Option<String>,
    #[garde(skip)]
    pub contact: Option<String>,
    #[garde(skip)]
    pub images: Option<Vec<String>>,
}

#[derive(new)]
pub struct UpdateEventRequestWithId(EventId, UpdateEventRequest);

impl From<UpdateEventRequestWithId> for UpdateEvent {
    fn from(value: UpdateEventRequestWithId) -> Self {
        let UpdateEventRequestWithId(
            event_id,
            UpdateEventRequest {
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
            },
        ) = value;
        Self {
            event_id,
            title,
            description,
            category,
            format,
            modality,
            start_date,
            end_date,
            location: location.map(Location::from),
            max_participants,
            price,
            prizes,
            rules,
            registration_link,
            stream_link,
            contact,
            images,
        }
    }
}
