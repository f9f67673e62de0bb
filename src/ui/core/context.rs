use crate::{config::Config, logger::Logger, store::AppStore};

/// Services injected into the UI at startup
pub struct AppContext {
    pub store: AppStore,
    pub config: Config,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(store: AppStore, config: Config, logger: Logger) -> Self {
        Self { store, config, logger }
    }
}
