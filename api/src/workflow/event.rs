use crate::{
    model::event::{CreateEventRequest, UpdateEventRequest, UpdateEventRequestWithId},
    session::SessionContext,
};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    event::{
        event::UpdateEvent,
        query::{sort_by_effective_date_desc, visible_events, EventFilter, StatusFilter},
        Event, EventStatus,
    },
    id::EventId,
    role::Role,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// The event lifecycle: collaborator submissions, admin status
/// transitions, and the role-gated views over the collection. Every
/// mutation ends with a re-fetch from the store; nothing is patched
/// locally, so the returned lists are always the store's truth.
#[derive(new)]
pub struct EventWorkflow {
    events: Arc<dyn EventRepository>,
    session: Arc<SessionContext>,
}

impl EventWorkflow {
    pub async fn list(&self) -> AppResult<Vec<Event>> {
        self.events.find_all().await
    }

    /// The filtered view for the current role. Logged-out callers are
    /// gated like plain users.
    pub async fn visible(&self, filter: &EventFilter) -> AppResult<Vec<Event>> {
        let role = self.session.role().unwrap_or(Role::User);
        let all = self.events.find_all().await?;
        Ok(visible_events(&all, role, filter))
    }

    /// Submits a new event and returns the collaborator's refreshed
    /// listing. Status and requester in the request are ignored.
    pub async fn create(&self, req: CreateEventRequest) -> AppResult<Vec<Event>> {
        req.validate(&())?;
        let requester = self.requester_email()?;

        self.events.create(req.into_event(requester)).await?;
        self.my_events(StatusFilter::All).await
    }

    pub async fn update(
        &self,
        event_id: &EventId,
        req: UpdateEventRequest,
    ) -> AppResult<Vec<Event>> {
        req.validate(&())?;
        let requester = self.requester_email()?;
        let current = self.fetch(event_id).await?;

        // Approved events are closed to edits for everyone; the admin
        // status path is the only way to touch them.
        if !current.is_editable() {
            return Err(AppError::ForbiddenOperation);
        }
        if current.requester != requester && !self.session.is_admin() {
            return Err(AppError::UnauthorizedError);
        }

        let patch = UpdateEvent::from(UpdateEventRequestWithId::new(event_id.clone(), req));
        self.events.update(&patch.apply_to(current)).await?;
        self.my_events(StatusFilter::All).await
    }

    pub async fn delete(&self, event_id: &EventId) -> AppResult<Vec<Event>> {
        let requester = self.requester_email()?;
        let current = self.fetch(event_id).await?;

        if !current.is_editable() {
            return Err(AppError::ForbiddenOperation);
        }
        if current.requester != requester && !self.session.is_admin() {
            return Err(AppError::UnauthorizedError);
        }

        self.events.delete(event_id).await?;
        self.my_events(StatusFilter::All).await
    }

    /// Admin-only status transition. Setting the status an event already
    /// has is a no-op, not an error.
    pub async fn set_status(
        &self,
        event_id: &EventId,
        status: EventStatus,
    ) -> AppResult<Vec<Event>> {
        if !self.session.is_admin() {
            return Err(AppError::UnauthorizedError);
        }
        let current = self.fetch(event_id).await?;
        if current.status != status {
            self.events.update_status(event_id, status).await?;
            tracing::info!(event_id = %event_id, status = %status, "event status changed");
        }
        self.events.find_all().await
    }

    /// The collaborator's own submissions, newest first, undated last.
    pub async fn my_events(&self, status: StatusFilter) -> AppResult<Vec<Event>> {
        let requester = self.requester_email()?;
        let all = self.events.find_all().await?;
        let mut mine: Vec<Event> = all
            .into_iter()
            .filter(|ev| ev.requester == requester && status.keeps(ev.status))
            .collect();
        sort_by_effective_date_desc(&mut mine);
        Ok(mine)
    }

    /// The session user's bookmarks resolved against the collection.
    /// Dangling ids are dropped without comment; the bookmark relation is
    /// a weak one.
    pub async fn saved_events(&self) -> AppResult<Vec<Event>> {
        let user = self
            .session
            .current_user()
            .ok_or(AppError::UnauthenticatedError)?;
        let all = self.events.find_all().await?;
        Ok(all.into_iter().filter(|ev| user.has_saved(&ev.id)).collect())
    }

    async fn fetch(&self, event_id: &EventId) -> AppResult<Event> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("event {event_id} not found")))
    }

    /// Submissions are for collaborators; admins pass as well since they
    /// may manage any event.
    fn requester_email(&self) -> AppResult<String> {
        let user = self
            .session
            .current_user()
            .ok_or(AppError::UnauthenticatedError)?;
        if user.role == Role::User {
            return Err(AppError::UnauthorizedError);
        }
        Ok(user.email)
    }
}
