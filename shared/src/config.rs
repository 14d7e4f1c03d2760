use anyhow::Result;
use std::{env, path::PathBuf};

pub struct AppConfig {
    pub store: StoreConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let store = StoreConfig {
            base_url: env::var("STORE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3001".into()),
            timeout_secs: env::var("STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        };
        let session = SessionConfig {
            slot_path: env::var("SESSION_SLOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".session/auth_user.json")),
        };
        Ok(Self { store, session })
    }
}

pub struct StoreConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

pub struct SessionConfig {
    pub slot_path: PathBuf,
}
