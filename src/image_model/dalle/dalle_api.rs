use color_eyre::{
    Result,
    eyre::{bail, ensure},
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::image_model::Model;

pub const GENERATION_URL: &str = "https://api.openai.com/v1/images/generations";

// one square image at the standard quality tier
pub const IMAGE_SIZE: &str = "1024x1024";
pub const IMAGE_QUALITY: &str = "standard";

#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    pub created: Option<u64>,
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}

impl GenerationResponse {
    /// URL of the first generated image, if the API returned one
    pub fn image_url(&self) -> Option<&str> {
        self.data.first()?.url.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorInfo,
}

#[derive(Debug, Deserialize)]
struct ErrorInfo {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

/// Errors returned by the OpenAI image API
#[derive(Debug, Error)]
pub enum DalleApiError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Insufficient quota: {message}")]
    Quota { message: String },

    #[error("Rate limit exceeded: {message}")]
    RateLimit { message: String },

    #[error("Prompt was rejected by moderation: {message}")]
    ContentPolicy { message: String },

    #[error("Server error: {message}")]
    Server { message: String },

    /// Catch-all for unexpected error types
    #[error("Unexpected API error ({error_type}): {message}")]
    Unexpected { error_type: String, message: String },
}

impl DalleApiError {
    pub fn from_parts(
        error_type: Option<&str>,
        code: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();

        if let Some("content_policy_violation" | "moderation_blocked") = code {
            return Self::ContentPolicy { message };
        }

        match (error_type, code) {
            (Some("authentication_error"), _) | (_, Some("invalid_api_key")) => {
                Self::Authentication { message }
            }
            (Some("insufficient_quota"), _) | (_, Some("insufficient_quota")) => {
                Self::Quota { message }
            }
            (Some("rate_limit_error"), _) | (_, Some("rate_limit_exceeded")) => {
                Self::RateLimit { message }
            }
            (Some("invalid_request_error" | "image_generation_user_error"), _) => {
                Self::InvalidRequest { message }
            }
            (Some("server_error" | "api_error"), _) => Self::Server { message },
            (error_type, _) => Self::Unexpected {
                error_type: error_type.unwrap_or("unknown").to_string(),
                message,
            },
        }
    }
}

pub fn build_payload(prompt: &str, model: Model) -> serde_json::Value {
    let mut payload = json!({
        "model": model.to_string(),
        "prompt": prompt,
        "n": 1,
        "size": IMAGE_SIZE,
        "response_format": "url",
    });

    // the quality knob only exists on dall-e-3
    if model == Model::DallE3 {
        payload["quality"] = IMAGE_QUALITY.into();
    }

    payload
}

/// Requests one image for the prompt and returns the parsed response
pub async fn generate(
    prompt: &str,
    model: Model,
    api_key: &str,
    client: &Client,
) -> Result<GenerationResponse> {
    let resp = client
        .post(GENERATION_URL)
        .bearer_auth(api_key)
        .json(&build_payload(prompt, model))
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) => {
                let ErrorInfo {
                    message,
                    error_type,
                    code,
                } = body.error;
                return Err(
                    DalleApiError::from_parts(error_type.as_deref(), code.as_deref(), message)
                        .into(),
                );
            }
            Err(_) => bail!("Generation request failed: {status} - {text}"),
        }
    }

    Ok(serde_json::from_str(&text)?)
}

/// Fetches the image bytes behind a result URL
pub async fn fetch_image(url: &str, client: &Client) -> Result<Vec<u8>> {
    let resp = client.get(url).send().await?;

    ensure!(
        resp.status().is_success(),
        "Image download failed with {}: {url}",
        resp.status()
    );

    Ok(resp.bytes().await?.to_vec())
}
