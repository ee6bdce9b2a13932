use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config::Config, models::Registration, store::RecordStore};

/// Shared application state handed to every request handler.
///
/// `transient` mirrors the file-backed collection for records accepted by
/// this process; its lock is also held across every append, so two
/// in-process submissions cannot lose a write to the read-modify-write
/// cycle.
pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
    pub transient: Mutex<Vec<Registration>>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        let store = RecordStore::new(&config.data_path);

        Arc::new(Self {
            config,
            store,
            transient: Mutex::new(Vec::new()),
        })
    }
}
