use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{ContentType, Difficulty, GenerationRequest};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub topic: String,
    pub difficulty: Difficulty,
    pub content_type: ContentType,
    pub source: String,
    pub raw: String,
    pub markup: String,
    pub question_blocks: usize,
    pub generated_at: DateTime<Utc>,
}

/// Everything the page template needs to draw the controls and the output
/// region.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub topic: String,
    pub difficulty: Difficulty,
    pub content_type: ContentType,
    pub output_visible: bool,
    pub output_markup: String,
    pub alert: Option<String>,
    pub focus_topic: bool,
}

impl PageView {
    pub fn initial(difficulty: Difficulty, content_type: ContentType) -> Self {
        Self {
            topic: String::new(),
            difficulty,
            content_type,
            output_visible: false,
            output_markup: String::new(),
            alert: None,
            focus_topic: true,
        }
    }

    pub fn with_output(request: &GenerationRequest, markup: String) -> Self {
        Self {
            topic: request.topic.clone(),
            difficulty: request.difficulty,
            content_type: request.content_type,
            output_visible: true,
            output_markup: markup,
            alert: None,
            focus_topic: false,
        }
    }

    pub fn with_alert(mut self, message: impl Into<String>) -> Self {
        self.alert = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view_hides_output_and_focuses_topic() {
        let view = PageView::initial(Difficulty::Advanced, ContentType::Quiz);

        assert!(!view.output_visible);
        assert!(view.output_markup.is_empty());
        assert!(view.focus_topic);
        assert!(view.alert.is_none());
    }

    #[test]
    fn view_serializes_selectors_lowercase() {
        let view = PageView::initial(Difficulty::Intermediate, ContentType::Both);
        let json = serde_json::to_value(&view).expect("view should serialize");

        assert_eq!(json["difficulty"], "intermediate");
        assert_eq!(json["content_type"], "both");
    }
}
