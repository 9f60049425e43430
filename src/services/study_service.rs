use std::sync::Arc;

use crate::{
    constants::prompts::CREDENTIAL_HINT,
    errors::{AppError, AppResult},
    models::{
        domain::{GenerationRequest, UiState},
        dto::{request::GenerateForm, response::PageView},
    },
    services::{
        content_source::ContentSource,
        output_formatter::{self, escape_html, FormattedOutput},
    },
};

/// Result of one successful generation cycle.
#[derive(Debug, Clone)]
pub struct Generation {
    pub request: GenerationRequest,
    pub source: &'static str,
    pub raw: String,
    pub formatted: FormattedOutput,
}

/// Drives a generation: busy state, content source, formatting and error
/// display.
pub struct StudyService {
    source: Arc<dyn ContentSource>,
    ui: UiState,
}

impl StudyService {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            ui: UiState::new(),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Runs one cycle for an already validated request. The busy flag is
    /// cleared on every return path.
    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<Generation> {
        let _busy = self.ui.enter()?;

        log::info!(
            "Generating {} material at {} level from {} source",
            request.content_type,
            request.difficulty,
            self.source.name()
        );

        let raw = self.source.produce(request).await?;
        let formatted = output_formatter::format_output(&raw, request.content_type);

        Ok(Generation {
            request: request.clone(),
            source: self.source.name(),
            raw,
            formatted,
        })
    }

    /// Page flow. An empty topic only raises an alert; any other failure is
    /// shown in the output region as an error panel.
    pub async fn generate_view(&self, form: &GenerateForm) -> PageView {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                let mut view = PageView::initial(form.difficulty(), form.content_type());
                view.topic = form.topic.clone();
                return view.with_alert(err.to_string());
            }
        };

        let markup = match self.generate(&request).await {
            Ok(generation) => generation.formatted.markup,
            Err(err) => {
                log::error!("Generation failed: {}", err);
                error_panel(&err)
            }
        };

        PageView::with_output(&request, markup)
    }

    /// Empties topic and output, keeps the selectors, refocuses the topic.
    pub fn clear_view(&self, form: &GenerateForm) -> PageView {
        PageView::initial(form.difficulty(), form.content_type())
    }
}

pub fn error_panel(err: &AppError) -> String {
    format!(
        "<div class=\"error-panel\"><h3>⚠️ Error</h3><p>{}</p><p class=\"error-hint\">{}</p></div>",
        escape_html(&err.to_string()),
        CREDENTIAL_HINT
    )
}
