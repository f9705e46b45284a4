use common::prelude::{Store, StoreError};

use crate::service_config::Config;

/// Shared service state handed to every request handler.
///
/// Holds the one open store; handlers only ever take read views from it.
#[derive(Clone, Debug)]
pub struct State {
    store: Store,
}

impl State {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        tracing::info!(
            path = %config.db_path.display(),
            timeout = ?config.open_timeout,
            "opening store"
        );
        let store = Store::open_with_timeout(&config.db_path, config.open_timeout).await?;
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl AsRef<Store> for State {
    fn as_ref(&self) -> &Store {
        &self.store
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("store setup error: {0}")]
    Store(#[from] StoreError),
}
