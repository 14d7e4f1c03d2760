use crate::rest::{model::event::EventRow, RestClient};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{event::CreateEvent, Event, EventStatus},
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::AppResult;

#[derive(new)]
pub struct EventRepositoryImpl {
    client: RestClient,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = self.client.list("/events", &[]).await?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, event_id: &EventId) -> AppResult<Option<Event>> {
        let row: Option<EventRow> = self.client.get(&format!("/events/{event_id}")).await?;
        Ok(row.map(Event::from))
    }

    async fn create(&self, event: CreateEvent) -> AppResult<Event> {
        let created: EventRow = self
            .client
            .post("/events", &EventRow::from_create(event))
            .await?;
        Ok(created.into())
    }

    async fn update(&self, event: &Event) -> AppResult<Event> {
        let updated: EventRow = self
            .client
            .put(&format!("/events/{}", event.id), &EventRow::from(event))
            .await?;
        Ok(updated.into())
    }

    async fn update_status(&self, event_id: &EventId, status: EventStatus) -> AppResult<Event> {
        let updated: EventRow = self
            .client
            .patch(
                &format!("/events/{event_id}"),
                &serde_json::json!({ "status": status.to_string() }),
            )
            .await?;
        Ok(updated.into())
    }

    async fn delete(&self, event_id: &EventId) -> AppResult<()> {
        self.client.delete(&format!("/events/{event_id}")).await
    }
}
