use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::outreach::application::ports::outgoing::{GenerationError, TextGenerator};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn new(system_prompt: &'a str, input: &'a str) -> Self {
        Self {
            system_instruction: Content {
                parts: [Part {
                    text: system_prompt,
                }],
            },
            contents: [Content {
                parts: [Part { text: input }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateReply {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: ReplyContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReplyContent {
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReplyPart {
    text: Option<String>,
}

impl GenerateReply {
    /// `candidates[0].content.parts[0].text`, when present and non-blank.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.trim().is_empty())
    }
}

pub struct HttpTextGenerator {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl HttpTextGenerator {
    pub fn new(client: reqwest::Client, url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, system_prompt: &str, input: &str) -> Result<String, GenerationError> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&GenerateRequest::new(system_prompt, input));
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Rejected(status.as_u16()));
        }

        let reply: GenerateReply = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        reply.into_text().ok_or(GenerationError::EmptyReply)
    }
}
