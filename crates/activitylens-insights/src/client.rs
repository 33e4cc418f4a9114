//! OpenAI Chat Completions client for the insight operations.
//!
//! One request, one response, no streaming and no conversation state. The
//! transport's default timeout applies; there is no retry.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::prompts;
use crate::types::{InsightError, InsightMessage};
use activitylens_pipeline::NormalizedRecord;

/// Fixed model revision for both insight calls.
pub const INSIGHT_MODEL: &str = "gpt-4o-mini";

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODELS_URL: &str = "https://api.openai.com/v1/models";

/// Classify a sample of activity titles into the four fixed categories.
///
/// Returns the service's response text verbatim. The response is expected to
/// be a JSON list of {activity, category} but is deliberately not parsed or
/// validated; a malformed response is the caller's to display as-is.
pub async fn categorize(
    client: &Client,
    api_key: &str,
    records: &[NormalizedRecord],
) -> Result<String, InsightError> {
    let titles = prompts::categorize_sample(records);
    let prompt = prompts::build_categorize_prompt(&titles);
    complete(client, api_key, prompts::CATEGORIZE_PERSONA, prompt).await
}

/// Summarize the most recent day's records in plain English.
pub async fn summarize(
    client: &Client,
    api_key: &str,
    records: &[NormalizedRecord],
) -> Result<String, InsightError> {
    let sample = prompts::latest_day_sample(records);
    let prompt = prompts::build_summary_prompt(&sample);
    complete(client, api_key, prompts::SUMMARY_PERSONA, prompt).await
}

/// Single non-streaming chat completion round trip.
async fn complete(
    client: &Client,
    api_key: &str,
    persona: &'static str,
    prompt: String,
) -> Result<String, InsightError> {
    let messages = [
        InsightMessage { role: "system", content: persona.to_string() },
        InsightMessage { role: "user", content: prompt },
    ];

    let body = json!({
        "model": INSIGHT_MODEL,
        "messages": messages,
    });

    debug!("Requesting completion from {} with model {}", COMPLETIONS_URL, INSIGHT_MODEL);

    let response = client
        .post(COMPLETIONS_URL)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| InsightError::transport(format!("Request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(InsightError::api(status, &body));
    }

    let parsed: serde_json::Value = response
        .json()
        .await
        .map_err(|e| InsightError::transport(format!("Response read error: {}", e)))?;

    extract_content(&parsed)
}

/// Pull the completion text out of the response envelope. The content text
/// itself is passed through unvalidated, but a success envelope without
/// `choices[0].message.content` is a failure, not a blank insight.
fn extract_content(parsed: &serde_json::Value) -> Result<String, InsightError> {
    parsed["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| InsightError::malformed("response has no choices[0].message.content"))
}

/// Test an API key by making a minimal authenticated request.
pub async fn test_api_key(client: &Client, api_key: &str) -> Result<(), String> {
    let resp = client
        .get(MODELS_URL)
        .header("Authorization", format!("Bearer {}", api_key))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(format!("API returned status {}", resp.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InsightErrorKind;
    use serde_json::json;

    #[test]
    fn test_extract_content_returns_text_verbatim() {
        let envelope = json!({
            "choices": [{"message": {"role": "assistant", "content": "not even json"}}],
        });
        assert_eq!(extract_content(&envelope).unwrap(), "not even json");
    }

    #[test]
    fn test_extract_content_missing_field_is_error_not_blank() {
        let no_choices = json!({"id": "cmpl-1"});
        let err = extract_content(&no_choices).unwrap_err();
        assert_eq!(err.kind, InsightErrorKind::Api);

        let non_string_content = json!({
            "choices": [{"message": {"content": {"unexpected": "object"}}}],
        });
        assert!(extract_content(&non_string_content).is_err());
    }
}
