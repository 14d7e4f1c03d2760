use crate::model::{
    event::{Event, EventStatus},
    role::Role,
};
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// Search filters applied to the fetched collection. Every set field is a
/// narrowing predicate and all of them are AND-combined; unset or empty
/// fields keep everything. Text matching is lower-cased substring matching,
/// with no diacritic or whitespace normalization.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Free text checked against title, description and category.
    pub q: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub location: Option<String>,
    /// Game/category substring.
    pub game: Option<String>,
    /// Type/format substring, also accepted on the category field.
    pub kind: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub modality: Option<String>,
    pub organizer: Option<String>,
}

impl EventFilter {
    fn matches(&self, event: &Event) -> bool {
        if let Some(q) = non_empty(&self.q) {
            let hit = contains_ci(&event.title, q)
                || contains_ci(&event.description, q)
                || contains_ci(&event.category, q);
            if !hit {
                return false;
            }
        }

        // Date bounds are inclusive; once a bound is set, undated events
        // drop out.
        if let Some(from) = self.from {
            match event.effective_date() {
                Some(date) if date >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.to {
            match event.effective_date() {
                Some(date) if date <= to => {}
                _ => return false,
            }
        }

        if let Some(location) = non_empty(&self.location) {
            if !contains_ci(&event.location.address, location) {
                return false;
            }
        }
        if let Some(game) = non_empty(&self.game) {
            if !contains_ci(&event.category, game) {
                return false;
            }
        }
        if let Some(kind) = non_empty(&self.kind) {
            if !contains_ci(&event.format, kind) && !contains_ci(&event.category, kind) {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if event.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if event.price > max {
                return false;
            }
        }
        if let Some(modality) = non_empty(&self.modality) {
            if !contains_ci(&event.modality, modality) {
                return false;
            }
        }
        if let Some(organizer) = non_empty(&self.organizer) {
            if !contains_ci(&event.requester, organizer) {
                return false;
            }
        }
        true
    }
}

/// The subset of the collection a caller with the given role may see.
/// Plain users only ever see approved events; admins and collaborators see
/// every status (collaborators narrow to their own submissions separately,
/// on their personal listing).
pub fn visible_events(all: &[Event], role: Role, filter: &EventFilter) -> Vec<Event> {
    all.iter()
        .filter(|ev| role != Role::User || ev.status == EventStatus::Approved)
        .filter(|ev| filter.matches(ev))
        .cloned()
        .collect()
}

/// Ordering for personal listings: newest effective date first, undated
/// events sort as epoch 0 and therefore last.
pub fn sort_by_effective_date_desc(events: &mut [Event]) {
    events.sort_by_key(|ev| {
        std::cmp::Reverse(ev.effective_date().map(|d| d.timestamp_millis()).unwrap_or(0))
    });
}

/// Status narrowing for the collaborator's own listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus),
}

impl StatusFilter {
    pub fn keeps(&self, status: EventStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == *wanted,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            EventStatus::from_str(s).map(StatusFilter::Only)
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
