use crate::model::{
    id::{EventId, UserId},
    role::Role,
};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub phone: Option<String>,
    pub username: Option<String>,
    pub photo: Option<String>,
    pub role: Role,
    /// Bookmarked event ids. Stored as a sequence but treated as a set;
    /// duplicates carry no meaning.
    pub saved_events: Vec<EventId>,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn has_saved(&self, event_id: &EventId) -> bool {
        self.saved_events.iter().any(|id| id == event_id)
    }

    /// Adds the id to the bookmark set, or removes every occurrence if it is
    /// already present. Returns whether the event is saved afterwards.
    pub fn toggle_saved(&mut self, event_id: EventId) -> bool {
        if self.has_saved(&event_id) {
            self.saved_events.retain(|id| id != &event_id);
            false
        } else {
            self.saved_events.push(event_id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_saved(ids: &[&str]) -> User {
        User {
            id: UserId::from("1"),
            email: "ana@example.com".into(),
            password: "secret".into(),
            name: None,
            last_name: None,
            second_last_name: None,
            phone: None,
            username: None,
            photo: None,
            role: Role::User,
            saved_events: ids.iter().map(|id| EventId::from(*id)).collect(),
            created_at: None,
        }
    }

    #[test]
    fn toggle_saved_round_trips_to_the_original_set() {
        let mut user = user_with_saved(&["4", "9"]);
        let before = user.saved_events.clone();

        assert!(user.toggle_saved(EventId::from("7")));
        assert!(user.has_saved(&EventId::from("7")));
        assert!(!user.toggle_saved(EventId::from("7")));

        assert_eq!(user.saved_events, before);
    }

    #[test]
    fn toggle_saved_removes_duplicate_entries_at_once() {
        let mut user = user_with_saved(&["4", "4", "9"]);
        assert!(!user.toggle_saved(EventId::from("4")));
        assert_eq!(user.saved_events, vec![EventId::from("9")]);
    }
}
