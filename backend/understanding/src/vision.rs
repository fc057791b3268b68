/// Vision inference — describe a product photo using a vision LLM.
use anyhow::{bail, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::info;

/// Generation budget for one analysis.
const MAX_TOKENS: u32 = 1024;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Supported vision providers.
#[derive(Debug)]
pub enum VisionProvider {
    /// Any OpenAI-compatible chat-completions server (vLLM, llama.cpp, ...).
    /// `base_url` includes the version prefix, e.g. `http://localhost:8000/v1`.
    Compatible {
        base_url: String,
        api_key: Option<String>,
        model: String,
    },
    OpenAi { api_key: String, model: String },
    Gemini { api_key: String },
}

impl VisionProvider {
    pub fn compatible(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::Compatible {
            base_url: base_url.into(),
            api_key,
            model: model.into(),
        }
    }

    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::OpenAi {
            api_key: api_key.into(),
            model: "gpt-4o".to_string(),
        }
    }

    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self::Gemini {
            api_key: api_key.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Compatible { .. } => "compatible",
            Self::OpenAi { .. } => "openai",
            Self::Gemini { .. } => "gemini",
        }
    }
}

/// Describe an image from raw bytes using the given vision provider.
///
/// Returns unconstrained natural-language text; no format compliance is
/// guaranteed. Any HTTP or provider failure surfaces as a single error
/// with no partial result.
pub async fn describe_image(
    client: &reqwest::Client,
    provider: &VisionProvider,
    image_bytes: &[u8],
    mime_type: &str,
    prompt: &str,
) -> Result<String> {
    let b64 = STANDARD.encode(image_bytes);
    match provider {
        VisionProvider::Compatible {
            base_url,
            api_key,
            model,
        } => {
            describe_via_chat_completions(
                client,
                base_url,
                api_key.as_deref(),
                model,
                &b64,
                mime_type,
                prompt,
            )
            .await
        }
        VisionProvider::OpenAi { api_key, model } => {
            describe_via_chat_completions(
                client,
                OPENAI_BASE_URL,
                Some(api_key),
                model,
                &b64,
                mime_type,
                prompt,
            )
            .await
        }
        VisionProvider::Gemini { api_key } => {
            describe_via_gemini(client, api_key, &b64, mime_type, prompt).await
        }
    }
}

async fn describe_via_chat_completions(
    client: &reqwest::Client,
    base_url: &str,
    api_key: Option<&str>,
    model: &str,
    b64: &str,
    mime_type: &str,
    prompt: &str,
) -> Result<String> {
    info!("[Vision] Describing image via {} ({})", base_url, model);
    let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));
    let body = serde_json::json!({
        "model": model,
        "messages": [{
            "role": "user",
            "content": [
                { "type": "text", "text": prompt },
                { "type": "image_url",
                  "image_url": { "url": format!("data:{};base64,{}", mime_type, b64) } }
            ]
        }],
        "max_tokens": MAX_TOKENS
    });

    let mut request = client.post(&url).json(&body);
    if let Some(key) = api_key {
        request = request.bearer_auth(key);
    }
    let resp = request.send().await?;
    if !resp.status().is_success() {
        bail!("vision endpoint error: {}", resp.text().await.unwrap_or_default());
    }
    let json: serde_json::Value = resp.json().await?;
    Ok(json["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("")
        .to_string())
}

async fn describe_via_gemini(
    client: &reqwest::Client,
    api_key: &str,
    b64: &str,
    mime_type: &str,
    prompt: &str,
) -> Result<String> {
    info!("[Vision] Describing image via Gemini");
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        GEMINI_MODEL, api_key
    );
    let body = serde_json::json!({
        "contents": [{ "parts": [
            { "text": prompt },
            { "inlineData": { "mimeType": mime_type, "data": b64 } }
        ]}],
        "generationConfig": { "maxOutputTokens": MAX_TOKENS }
    });

    let resp = client.post(&url).json(&body).send().await?;
    if !resp.status().is_success() {
        bail!("Gemini vision error: {}", resp.text().await.unwrap_or_default());
    }
    let json: serde_json::Value = resp.json().await?;
    Ok(json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or("")
        .to_string())
}
