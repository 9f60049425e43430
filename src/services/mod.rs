pub mod content_source;
pub mod fallback_generator;
pub mod generation_client;
pub mod output_formatter;
pub mod prompt_builder;
pub mod study_service;
