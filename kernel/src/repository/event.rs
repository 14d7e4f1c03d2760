use crate::model::{
    event::{event::CreateEvent, Event, EventStatus},
    id::EventId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, event_id: &EventId) -> AppResult<Option<Event>>;
    // Inserts with status pending; the payload cannot carry a status.
    async fn create(&self, event: CreateEvent) -> AppResult<Event>;
    // Full-record replacement of an already-merged record.
    async fn update(&self, event: &Event) -> AppResult<Event>;
    // Status-only patch, the admin transition path.
    async fn update_status(&self, event_id: &EventId, status: EventStatus) -> AppResult<Event>;
    async fn delete(&self, event_id: &EventId) -> AppResult<()>;
}
