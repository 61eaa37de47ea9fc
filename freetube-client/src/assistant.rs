/* This file is part of the FreeTube Downloader project
*
*  Copyright (C) 2026 FreeTube Downloader contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use cloneable_errors::{ErrorContext, ResContext};
use log::{error, warn};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, if it has any
    fn text(self) -> Option<String> {
        let text: String = self.candidates.into_iter().next()?
            .content.parts.into_iter()
            .filter_map(|part| part.text)
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Answers copyright questions through the Gemini API
#[derive(Clone, Debug)]
pub struct LegalAssistant {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl LegalAssistant {
    pub fn new(api_key: Option<String>) -> LegalAssistant {
        LegalAssistant {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()),
            endpoint: GEMINI_ENDPOINT.clone(),
        }
    }

    /// Takes the key from the first non-empty variable of [`API_KEY_VARS`]
    pub fn from_env() -> LegalAssistant {
        let api_key = API_KEY_VARS.iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.is_empty());
        Self::new(api_key)
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> LegalAssistant {
        self.endpoint = endpoint;
        self
    }

    /// Always produces something to show in the chat, failures turn into canned replies
    pub async fn ask(&self, message: &str) -> String {
        let Some(ref api_key) = self.api_key else {
            return NO_API_KEY_REPLY.to_owned();
        };
        match self.generate(api_key, message).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("Gemini returned no text");
                EMPTY_ANSWER_REPLY.to_owned()
            },
            Err(e) => {
                error!("Gemini API error: {e:?}");
                CONNECTION_TROUBLE_REPLY.to_owned()
            },
        }
    }

    async fn generate(&self, api_key: &str, message: &str) -> Result<Option<String>, ErrorContext> {
        let request = GenerateRequest {
            system_instruction: Content { role: None, parts: [TextPart { text: LEGAL_ASSISTANT_INSTRUCTION }] },
            contents: [Content { role: Some("user"), parts: [TextPart { text: message }] }],
        };
        let resp = self.client.post(self.endpoint.clone())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send().await
            .context("Failed to send the generateContent request")?
            .error_for_status()
            .context("generateContent request failed")?;
        let resp: GenerateResponse = resp.json().await.context("Failed to deserialize the generateContent response")?;
        Ok(resp.text())
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use actix_web::{dev::ServerHandle, post, web, App, HttpRequest, HttpResponse, HttpServer};

    use super::*;

    #[post("/v1beta/models/gemini-2.5-flash:generateContent")]
    async fn fake_generate(req: HttpRequest, body: web::Json<serde_json::Value>) -> HttpResponse {
        if req.headers().get("x-goog-api-key").is_none_or(|key| key != "secret") {
            return HttpResponse::Forbidden().finish();
        }
        let question = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
        let instruction = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap_or_default();
        if !instruction.starts_with("You are the Legal Assistant") {
            return HttpResponse::BadRequest().finish();
        }
        match question {
            "silence" => HttpResponse::Ok().json(serde_json::json!({"candidates": []})),
            _ => HttpResponse::Ok().json(serde_json::json!({
                "candidates": [{"content": {"role": "model", "parts": [{"text": "CC BY lets you "}, {"text": "reuse with credit."}]}}]
            })),
        }
    }

    fn start_gemini() -> (Url, ServerHandle) {
        let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = HttpServer::new(|| App::new().service(fake_generate))
            .workers(1)
            .listen(listener)
            .unwrap()
            .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/v1beta/models/gemini-2.5-flash:generateContent")).unwrap();
        (endpoint, handle)
    }

    #[actix_web::test]
    async fn missing_key_short_circuits() {
        let assistant = LegalAssistant::new(Some(String::new()));
        assert!(assistant.api_key.is_none());
        assert_eq!(assistant.ask("What is CC BY?").await, NO_API_KEY_REPLY);
    }

    #[actix_web::test]
    async fn joins_answer_parts() {
        let (endpoint, handle) = start_gemini();
        let assistant = LegalAssistant::new(Some("secret".to_owned())).with_endpoint(endpoint);
        assert_eq!(assistant.ask("What is CC BY?").await, "CC BY lets you reuse with credit.");
        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn empty_answer_gets_canned_reply() {
        let (endpoint, handle) = start_gemini();
        let assistant = LegalAssistant::new(Some("secret".to_owned())).with_endpoint(endpoint);
        assert_eq!(assistant.ask("silence").await, EMPTY_ANSWER_REPLY);
        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn failures_get_canned_reply() {
        let (endpoint, handle) = start_gemini();
        let assistant = LegalAssistant::new(Some("wrong".to_owned())).with_endpoint(endpoint);
        assert_eq!(assistant.ask("What is CC BY?").await, CONNECTION_TROUBLE_REPLY);
        handle.stop(true).await;
    }
}
