//! In-memory stand-ins for the remote collections and the session slot,
//! shared by the workflow tests.

use crate::session::SessionContext;
use async_trait::async_trait;
use kernel::model::{
    event::{event::CreateEvent, Event, EventStatus, Location},
    id::{EventId, UserId},
    role::Role,
    user::{
        event::{AdminUpdateUser, CreateUser, DeleteUser},
        User,
    },
};
use kernel::repository::{
    event::EventRepository, session::SessionStore, user::UserRepository,
};
use shared::error::{AppError, AppResult};
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc, Mutex,
};

pub(crate) fn sample_user(id: &str, email: &str, role: Role) -> User {
    User {
        id: UserId::from(id),
        email: email.into(),
        password: "secret".into(),
        name: Some("Ana".into()),
        last_name: None,
        second_last_name: None,
        phone: None,
        username: None,
        photo: None,
        role,
        saved_events: Vec::new(),
        created_at: None,
    }
}

pub(crate) fn sample_event(id: &str, requester: &str, status: EventStatus) -> Event {
    Event {
        id: EventId::from(id),
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
        requester: requester.into(),
        status,
    }
}

pub(crate) async fn ctx(store: Arc<InMemorySessionStore>) -> AppResult<Arc<SessionContext>> {
    Ok(Arc::new(SessionContext::init(store).await?))
}

pub(crate) async fn ctx_with_user(user: User) -> AppResult<Arc<SessionContext>> {
    let store = InMemorySessionStore::empty();
    store.slot.lock().unwrap().replace(user);
    ctx(store).await
}

pub(crate) struct InMemorySessionStore {
    pub(crate) slot: Mutex<Option<User>>,
}

impl InMemorySessionStore {
    pub(crate) fn empty() -> Arc<Self> {
        Arc::new(Self {
            slot: Mutex::new(None),
        })
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> AppResult<Option<User>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    async fn store(&self, user: &User) -> AppResult<()> {
        self.slot.lock().unwrap().replace(user.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.slot.lock().unwrap().take();
        Ok(())
    }
}

pub(crate) struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    seq: AtomicU32,
}

impl InMemoryUsers {
    pub(crate) fn empty() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            seq: AtomicU32::new(1),
        })
    }

    pub(crate) fn seed(&self, user: User) {
        self.rows.lock().unwrap().push(user);
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let CreateUser {
            email,
            password,
            name,
            last_name,
            second_last_name,
            phone,
            username,
            photo,
            created_at,
        } = event;
        let user = User {
            id: UserId::new(self.seq.fetch_add(1, Ordering::SeqCst).to_string()),
            email,
            password,
            name,
            last_name,
            second_last_name,
            phone,
            username,
            photo,
            role: Role::User,
            saved_events: Vec::new(),
            created_at: Some(created_at),
        };
        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::EntityNotFound("user not found".into()))?;
        *row = user.clone();
        Ok(user.clone())
    }

    async fn admin_update(&self, event: AdminUpdateUser) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|u| u.id == event.user_id)
            .ok_or_else(|| AppError::EntityNotFound("user not found".into()))?;
        if let Some(name) = event.name {
            row.name = Some(name);
        }
        if let Some(role) = event.role {
            row.role = role;
        }
        Ok(row.clone())
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|u| u.id != event.user_id);
        Ok(())
    }
}

pub(crate) struct InMemoryEvents {
    rows: Mutex<Vec<Event>>,
    seq: AtomicU32,
    writes: AtomicU32,
}

impl InMemoryEvents {
    pub(crate) fn empty() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            seq: AtomicU32::new(1),
            writes: AtomicU32::new(0),
        })
    }

    pub(crate) fn seed(&self, event: Event) {
        self.rows.lock().unwrap().push(event);
    }

    pub(crate) fn get(&self, id: &str) -> Option<Event> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|ev| ev.id == EventId::from(id))
            .cloned()
    }

    /// Mutations applied to already-stored rows; inserts don't count.
    pub(crate) fn write_count(&self) -> u32 {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventRepository for InMemoryEvents {
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, event_id: &EventId) -> AppResult<Option<Event>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|ev| &ev.id == event_id)
            .cloned())
    }

    async fn create(&self, event: CreateEvent) -> AppResult<Event> {
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
        let stored = Event {
            id: EventId::new(self.seq.fetch_add(1, Ordering::SeqCst).to_string()),
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
            status: EventStatus::Pending,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, event: &Event) -> AppResult<Event> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|ev| ev.id == event.id)
            .ok_or_else(|| AppError::EntityNotFound("event not found".into()))?;
        *row = event.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(event.clone())
    }

    async fn update_status(&self, event_id: &EventId, status: EventStatus) -> AppResult<Event> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|ev| &ev.id == event_id)
            .ok_or_else(|| AppError::EntityNotFound("event not found".into()))?;
        row.status = status;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(row.clone())
    }

    async fn delete(&self, event_id: &EventId) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|ev| &ev.id != event_id);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
