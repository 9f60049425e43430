use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::prompts::MISSING_CREDENTIAL_MESSAGE,
    errors::{AppError, AppResult},
};

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Single-shot client for an OpenAI-compatible chat-completions endpoint.
/// No retries, no timeout, no streaming.
pub struct GenerationClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: SecretString,
    credential_configured: bool,
}

impl GenerationClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.api_endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            credential_configured: !config.credential_is_placeholder(),
        }
    }

    pub fn completion_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Sends the prompt and returns the first choice's text verbatim.
    pub async fn complete(&self, prompt: &str) -> AppResult<String> {
        if !self.credential_configured {
            return Err(AppError::ConfigurationError(
                MISSING_CREDENTIAL_MESSAGE.to_string(),
            ));
        }

        log::info!(
            "Sending generation request to {} (model {}, prompt {} chars)",
            self.endpoint,
            self.model,
            prompt.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.completion_request(prompt))
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach generation endpoint: {}", e);
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("");
            log::error!("Generation endpoint returned {}", status);
            return Err(AppError::upstream_status(status.as_u16(), status_text));
        }

        let body = response.text().await?;
        extract_reply(&body)
    }
}

/// Pulls `choices[0].message.content` out of a success body.
pub fn extract_reply(body: &str) -> AppResult<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| AppError::ParseError(format!("invalid response body: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| AppError::ParseError("response contained no choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use secrecy::SecretString;

    fn client_for(endpoint: &str, key: &str) -> GenerationClient {
        let config = Config {
            api_endpoint: endpoint.to_string(),
            api_key: SecretString::from(key.to_string()),
            use_demo_mode: false,
            ..Config::test_config()
        };
        GenerationClient::new(&config)
    }

    async fn completions(req: HttpRequest, body: web::Json<serde_json::Value>) -> HttpResponse {
        let auth = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if auth != "Bearer sk-test-key" {
            return HttpResponse::Unauthorized().finish();
        }
        if body["temperature"] != 0.7 || body["max_tokens"] != 1500 {
            return HttpResponse::BadRequest().finish();
        }

        let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
        HttpResponse::Ok().json(serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": format!("echo: {}", prompt) } },
                { "message": { "role": "assistant", "content": "second choice" } }
            ]
        }))
    }

    async fn unavailable() -> HttpResponse {
        HttpResponse::ServiceUnavailable().finish()
    }

    async fn malformed() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "choices": [] }))
    }

    /// Starts a local stand-in for the remote endpoint and returns its base URL.
    fn spawn_stub_server() -> String {
        let server = HttpServer::new(|| {
            App::new()
                .route("/v1/chat/completions", web::post().to(completions))
                .route("/unavailable", web::post().to(unavailable))
                .route("/malformed", web::post().to(malformed))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind ephemeral port");
        let addr = server.addrs()[0];
        actix_rt::spawn(server.run());
        format!("http://{}", addr)
    }

    #[test]
    fn completion_request_has_fixed_sampling_settings() {
        let client = client_for("http://localhost/v1/chat/completions", "sk-test-key");
        let request = client.completion_request("hello");

        let json = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["max_tokens"], 1500);
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn extract_reply_takes_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"first"}},{"message":{"role":"assistant","content":"second"}}]}"#;

        assert_eq!(extract_reply(body).expect("body is valid"), "first");
    }

    #[test]
    fn extract_reply_rejects_unexpected_shapes() {
        assert!(matches!(extract_reply("not json"), Err(AppError::ParseError(_))));
        assert!(matches!(extract_reply(r#"{"choices":[]}"#), Err(AppError::ParseError(_))));
        assert!(matches!(extract_reply(r#"{"data":1}"#), Err(AppError::ParseError(_))));
    }

    #[actix_web::test]
    async fn placeholder_credential_fails_before_network() {
        // Nothing listens on the discard port; a network attempt would be a transport error.
        let client = client_for("http://127.0.0.1:9/v1/chat/completions", "YOUR_API_KEY_HERE");

        let result = client.complete("prompt").await;
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[actix_web::test]
    async fn complete_returns_first_reply_verbatim() {
        let base = spawn_stub_server();
        let client = client_for(&format!("{}/v1/chat/completions", base), "sk-test-key");

        let reply = client.complete("Explain mitosis").await.expect("stub replies");
        assert_eq!(reply, "echo: Explain mitosis");
    }

    #[actix_web::test]
    async fn non_success_status_is_a_transport_error() {
        let base = spawn_stub_server();
        let client = client_for(&format!("{}/unavailable", base), "sk-test-key");

        match client.complete("prompt").await {
            Err(AppError::TransportError { status, message }) => {
                assert_eq!(status, Some(503));
                assert_eq!(message, "API Error: 503 - Service Unavailable");
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn wrong_credential_surfaces_401() {
        let base = spawn_stub_server();
        let client = client_for(&format!("{}/v1/chat/completions", base), "sk-other-key");

        let err = client.complete("prompt").await.expect_err("stub rejects key");
        assert_eq!(err.to_string(), "API Error: 401 - Unauthorized");
    }

    #[actix_web::test]
    async fn empty_choices_is_a_parse_error() {
        let base = spawn_stub_server();
        let client = client_for(&format!("{}/malformed", base), "sk-test-key");

        let result = client.complete("prompt").await;
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }
}
