use std::sync::Arc;

use adapter::repository::event::EventRepositoryImpl;
use adapter::repository::session::FileSessionStore;
use adapter::repository::user::UserRepositoryImpl;
use adapter::rest::RestClient;
use kernel::repository::event::EventRepository;
use kernel::repository::session::SessionStore;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;
use shared::error::AppResult;

#[derive(Clone)]
pub struct AppRegistry {
    user_repository: Arc<dyn UserRepository>,
    event_repository: Arc<dyn EventRepository>,
    session_store: Arc<dyn SessionStore>,
}

impl AppRegistry {
    pub fn new(app_config: &AppConfig) -> AppResult<Self> {
        let client = RestClient::new(&app_config.store)?;
        let user_repository = Arc::new(UserRepositoryImpl::new(client.clone()));
        let event_repository = Arc::new(EventRepositoryImpl::new(client));
        let session_store = Arc::new(FileSessionStore::new(app_config.session.slot_path.clone()));
        Ok(Self {
            user_repository,
            event_repository,
            session_store,
        })
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn session_store(&self) -> Arc<dyn SessionStore> {
        self.session_store.clone()
    }
}
