use serde::Deserialize;

use crate::errors::AppResult;
use crate::models::domain::{ContentType, Difficulty, GenerationRequest};

/// Generate form / JSON body. The selectors arrive as free text and fall
/// back to their defaults when missing or unknown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
}

impl GenerateForm {
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
            .as_deref()
            .map(Difficulty::parse_or_default)
            .unwrap_or_default()
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
            .as_deref()
            .map(ContentType::parse_or_default)
            .unwrap_or_default()
    }

    pub fn to_request(&self) -> AppResult<GenerationRequest> {
        GenerationRequest::new(&self.topic, self.difficulty(), self.content_type())
    }
}

/// Query parameters read when the page is first opened.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitialStateParams {
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl InitialStateParams {
    pub fn selection(&self) -> (Difficulty, ContentType) {
        let difficulty = self
            .difficulty
            .as_deref()
            .and_then(Difficulty::parse)
            .unwrap_or_default();
        let content_type = self
            .content_type
            .as_deref()
            .and_then(ContentType::parse)
            .unwrap_or_default();
        (difficulty, content_type)
    }
}
