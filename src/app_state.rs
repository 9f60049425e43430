use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        content_source::{self, ContentSource},
        study_service::StudyService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<StudyService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source = content_source::from_config(&config);
        Self::with_source(config, source)
    }

    pub fn with_source(config: Config, source: Arc<dyn ContentSource>) -> Self {
        log::info!("Using {} content source", source.name());
        Self {
            study_service: Arc::new(StudyService::new(source)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_demo_config_selects_demo_source() {
        let state = AppState::new(Config::test_config());

        assert_eq!(state.study_service.source_name(), "demo");
        assert!(state.config.use_demo_mode);
    }
}
