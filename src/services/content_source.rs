use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::GenerationRequest,
    services::{fallback_generator, generation_client::GenerationClient, prompt_builder},
};

/// Produces raw study material for a request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn produce(&self, request: &GenerationRequest) -> AppResult<String>;
}

/// Deterministic local generator, no network.
pub struct FallbackContentSource;

#[async_trait]
impl ContentSource for FallbackContentSource {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn produce(&self, request: &GenerationRequest) -> AppResult<String> {
        Ok(fallback_generator::generate(request))
    }
}

pub struct RemoteContentSource {
    client: GenerationClient,
}

impl RemoteContentSource {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for RemoteContentSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn produce(&self, request: &GenerationRequest) -> AppResult<String> {
        let prompt = prompt_builder::build_prompt(request);
        self.client.complete(&prompt).await
    }
}

/// Demo mode always wins, whatever the credential holds.
pub fn from_config(config: &Config) -> Arc<dyn ContentSource> {
    if config.use_demo_mode {
        Arc::new(FallbackContentSource)
    } else {
        Arc::new(RemoteContentSource::new(GenerationClient::new(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::domain::{ContentType, Difficulty};

    fn request() -> GenerationRequest {
        GenerationRequest::new("Volcanoes", Difficulty::Beginner, ContentType::Both)
            .expect("valid request")
    }

    #[actix_web::test]
    async fn demo_mode_uses_fallback_even_with_real_credential() {
        // test_config points at a closed port with a non-placeholder key.
        let source = from_config(&Config::test_config());

        assert_eq!(source.name(), "demo");
        let raw = source.produce(&request()).await.expect("demo never fails");
        assert_eq!(raw, fallback_generator::generate(&request()));
    }

    #[actix_web::test]
    async fn remote_mode_with_placeholder_is_configuration_error() {
        let config = Config {
            use_demo_mode: false,
            ..Config::default()
        };
        let source = from_config(&config);

        assert_eq!(source.name(), "remote");
        let result = source.produce(&request()).await;
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }
}
