use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use business::domain::tag_suggestion::errors::TagSuggestionError;
use business::domain::tag_suggestion::services::TagGeneratorService;

use crate::client::GeminiClient;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

pub struct TagGeneratorGemini {
    client: GeminiClient,
}

impl TagGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(content: &str, count: usize) -> String {
        let quoted =
            serde_json::to_string(content).unwrap_or_else(|_| format!("\"{}\"", content));

        format!(
            r##"Suggest {count} relevant hashtags for the following post: {quoted}.
Return ONLY a JSON array of exactly {count} short lowercase strings, without "#" symbols. Example: ["ai", "tech", "startup", "reactjs", "future"]"##
        )
    }

    /// Request body asking for schema-constrained JSON: an array of strings.
    fn build_body(prompt: &str) -> serde_json::Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }],
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                },
            },
        })
    }

    fn extract_text(envelope: GenerateContentResponse) -> Option<String> {
        let parts = envelope.candidates.into_iter().next()?.content?.parts;
        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn parse_tags(text: &str) -> Result<Vec<String>, TagSuggestionError> {
        // Remove markdown code fences if present
        let json_text = regex::Regex::new(r"^```(?:json)?\s*([\s\S]*?)\s*```$")
            .ok()
            .and_then(|re| re.captures(text.trim()))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| text.trim().to_string());

        serde_json::from_str::<Vec<String>>(&json_text).map_err(|err| {
            error!(error = %err, "Gemini output is not a JSON array of strings");
            TagSuggestionError::UpstreamMalformed
        })
    }
}

#[async_trait]
impl TagGeneratorService for TagGeneratorGemini {
    async fn generate(
        &self,
        content: &str,
        count: usize,
    ) -> Result<Vec<String>, TagSuggestionError> {
        let prompt = Self::build_prompt(content, count);
        let body = Self::build_body(&prompt);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, timeout = err.is_timeout(), "Gemini request failed");
                TagSuggestionError::UpstreamUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Gemini returned a non-success status");
            return Err(TagSuggestionError::UpstreamUnavailable);
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|err| {
            if err.is_decode() {
                error!(error = %err, "Gemini response envelope could not be decoded");
                TagSuggestionError::UpstreamMalformed
            } else {
                warn!(error = %err, "Gemini response body could not be read");
                TagSuggestionError::UpstreamUnavailable
            }
        })?;

        let text = Self::extract_text(envelope).ok_or_else(|| {
            error!("Gemini response has no candidate text");
            TagSuggestionError::UpstreamMalformed
        })?;

        Self::parse_tags(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn envelope(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn should_embed_content_and_count_in_prompt() {
        let prompt = TagGeneratorGemini::build_prompt("Just shipped my first React app!", 5);

        assert!(prompt.contains("\"Just shipped my first React app!\""));
        assert!(prompt.contains("Suggest 5 relevant hashtags"));
        assert!(prompt.contains("JSON array of exactly 5"));
        assert!(prompt.contains("without \"#\" symbols"));
    }

    #[test]
    fn should_build_same_prompt_for_same_content() {
        assert_eq!(
            TagGeneratorGemini::build_prompt("hello", 5),
            TagGeneratorGemini::build_prompt("hello", 5)
        );
    }

    #[test]
    fn should_escape_quotes_in_content() {
        let prompt = TagGeneratorGemini::build_prompt(r#"say "hi""#, 5);
        assert!(prompt.contains(r#""say \"hi\"""#));
    }

    #[test]
    fn should_request_array_of_strings_schema() {
        let body = TagGeneratorGemini::build_body("prompt");

        assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["items"]["type"],
            "STRING"
        );
    }

    #[test]
    fn should_extract_candidate_text() {
        let text = TagGeneratorGemini::extract_text(envelope(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "[\"rust\"," }, { "text": "\"tokio\"]" }] } }
            ]
        })));

        assert_eq!(text.as_deref(), Some("[\"rust\",\"tokio\"]"));
    }

    #[test]
    fn should_return_none_without_candidates() {
        assert!(TagGeneratorGemini::extract_text(envelope(json!({}))).is_none());
        assert!(
            TagGeneratorGemini::extract_text(envelope(json!({
                "candidates": [{ "finishReason": "SAFETY" }]
            })))
            .is_none()
        );
    }

    #[test]
    fn should_parse_json_array() {
        let tags = TagGeneratorGemini::parse_tags(
            r#"["react","webdev","coding","javascript","buildinpublic"]"#,
        )
        .unwrap();

        assert_eq!(
            tags,
            vec!["react", "webdev", "coding", "javascript", "buildinpublic"]
        );
    }

    #[test]
    fn should_parse_fenced_json_array() {
        let tags = TagGeneratorGemini::parse_tags("```json\n[\"rust\", \"async\"]\n```").unwrap();
        assert_eq!(tags, vec!["rust", "async"]);
    }

    #[test]
    fn should_reject_free_text() {
        assert_eq!(
            TagGeneratorGemini::parse_tags("Here are some tags: rust, async"),
            Err(TagSuggestionError::UpstreamMalformed)
        );
    }

    #[test]
    fn should_reject_json_object() {
        assert_eq!(
            TagGeneratorGemini::parse_tags(r#"{"tags": ["rust"]}"#),
            Err(TagSuggestionError::UpstreamMalformed)
        );
    }

    #[test]
    fn should_reject_array_of_non_strings() {
        assert_eq!(
            TagGeneratorGemini::parse_tags(r#"["rust", 42, null]"#),
            Err(TagSuggestionError::UpstreamMalformed)
        );
    }

    async fn read_request(socket: &mut TcpStream) {
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            received.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&received);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if received.len() >= end + 4 + content_length {
                    return;
                }
            }
        }
    }

    /// Serves one canned HTTP response and returns a base URL pointing at it.
    async fn upstream_replying(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/v1beta")
    }

    async fn generate_against(base_url: String) -> Result<Vec<String>, TagSuggestionError> {
        let client = GeminiClient::new("test-key".to_string(), Duration::from_secs(5))
            .unwrap()
            .with_base_url(base_url);
        TagGeneratorGemini::new(client).generate("hello", 5).await
    }

    #[tokio::test]
    async fn should_return_tags_from_candidate_text() {
        let base_url = upstream_replying(
            "200 OK",
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"[\"rust\",\"tokio\"]"}]}}]}"#,
        )
        .await;

        assert_eq!(
            generate_against(base_url).await,
            Ok(vec!["rust".to_string(), "tokio".to_string()])
        );
    }

    #[tokio::test]
    async fn should_report_unavailable_on_error_status() {
        let base_url = upstream_replying(
            "503 Service Unavailable",
            r#"{"error":{"code":503,"message":"overloaded"}}"#,
        )
        .await;

        assert_eq!(
            generate_against(base_url).await,
            Err(TagSuggestionError::UpstreamUnavailable)
        );
    }

    #[tokio::test]
    async fn should_report_malformed_on_undecodable_envelope() {
        let base_url = upstream_replying("200 OK", "this is not json").await;

        assert_eq!(
            generate_against(base_url).await,
            Err(TagSuggestionError::UpstreamMalformed)
        );
    }

    #[tokio::test]
    async fn should_report_malformed_on_empty_candidates() {
        let base_url = upstream_replying("200 OK", r#"{"candidates":[]}"#).await;

        assert_eq!(
            generate_against(base_url).await,
            Err(TagSuggestionError::UpstreamMalformed)
        );
    }

    #[tokio::test]
    async fn should_report_unavailable_when_upstream_unreachable() {
        let client = GeminiClient::new("test-key".to_string(), Duration::from_secs(2))
            .unwrap()
            .with_base_url("http://127.0.0.1:1/v1beta");
        let generator = TagGeneratorGemini::new(client);

        let result = generator.generate("hello", 5).await;

        assert_eq!(result, Err(TagSuggestionError::UpstreamUnavailable));
    }
}
