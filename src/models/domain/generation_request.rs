use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppResult;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }

    /// Unknown or empty values keep the built-in default.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Notes,
    Quiz,
    Both,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Notes, ContentType::Quiz, ContentType::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Notes => "notes",
            ContentType::Quiz => "quiz",
            ContentType::Both => "both",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn includes_notes(&self) -> bool {
        matches!(self, ContentType::Notes | ContentType::Both)
    }

    pub fn includes_quiz(&self) -> bool {
        matches!(self, ContentType::Quiz | ContentType::Both)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-triggered generation. Built fresh per request, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Validate)]
pub struct GenerationRequest {
    #[validate(length(min = 1, message = "Please enter a topic!"))]
    pub topic: String,
    pub difficulty: Difficulty,
    pub content_type: ContentType,
}

impl GenerationRequest {
    /// Trims the topic and rejects it when nothing is left.
    pub fn new(topic: &str, difficulty: Difficulty, content_type: ContentType) -> AppResult<Self> {
        let request = GenerationRequest {
            topic: topic.trim().to_string(),
            difficulty,
            content_type,
        };
        request.validate()?;
        Ok(request)
    }
}
