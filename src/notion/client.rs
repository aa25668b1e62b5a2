//! Blocking HTTP client for the Notion REST API.

use super::DatabaseApi;
use super::types::{Filter, Page, PropertyMap, QueryPage};
use crate::config::NotionSettings;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::debug;

/// Error object returned by Notion on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub struct NotionClient {
    agent: ureq::Agent,
    base_url: String,
    token: String,
    api_version: String,
    page_size: u32,
}

impl NotionClient {
    pub fn new(settings: &NotionSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("habitsync/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            api_version: settings.api_version.clone(),
            page_size: settings.page_size.clamp(1, 100),
        }
    }

    fn post<T: DeserializeOwned>(&self, path: &str, body: &Value) -> AppResult<T> {
        let url = format!("{}/v1/{}", self.base_url, path);
        let body_str = serde_json::to_string(body)?;
        debug!(%url, "POST");

        let auth = format!("Bearer {}", self.token);
        let result = self
            .agent
            .post(&url)
            .set("Authorization", &auth)
            .set("Notion-Version", &self.api_version)
            .set("Content-Type", "application/json")
            .send_string(&body_str);

        match result {
            Ok(resp) => {
                let text = resp
                    .into_string()
                    .map_err(|e| AppError::Transport(e.to_string()))?;
                Ok(serde_json::from_str(&text)?)
            }
            Err(ureq::Error::Status(status, resp)) => {
                let text = resp.into_string().unwrap_or_default();
                Err(api_error(status, &text))
            }
            Err(ureq::Error::Transport(t)) => Err(AppError::Transport(t.to_string())),
        }
    }
}

fn api_error(status: u16, body: &str) -> AppError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let (code, message) = match parsed {
        Some(ErrorBody { code, message }) => (code, message),
        None => (None, None),
    };

    AppError::Api {
        status,
        code: code.unwrap_or_else(|| "unknown".to_string()),
        message: message.unwrap_or_else(|| body.trim().to_string()),
    }
}

impl DatabaseApi for NotionClient {
    fn query(
        &self,
        database_id: &str,
        filter: &Filter,
        start_cursor: Option<&str>,
    ) -> AppResult<QueryPage> {
        let mut body = json!({
            "filter": filter,
            "page_size": self.page_size,
        });
        if let Some(cursor) = start_cursor {
            body["start_cursor"] = Value::String(cursor.to_string());
        }

        self.post(&format!("databases/{}/query", database_id.trim()), &body)
    }

    fn create_page(&self, database_id: &str, properties: &PropertyMap) -> AppResult<Page> {
        let props: Map<String, Value> = properties
            .iter()
            .map(|(name, value)| (name.clone(), value.to_request_value()))
            .collect();

        let body = json!({
            "parent": { "database_id": database_id.trim() },
            "properties": props,
        });

        self.post("pages", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_reads_notion_error_object() {
        let err = api_error(
            401,
            r#"{"object":"error","status":401,"code":"unauthorized","message":"API token is invalid."}"#,
        );
        match err {
            AppError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 401);
                assert_eq!(code, "unauthorized");
                assert_eq!(message, "API token is invalid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_raw_body() {
        let err = api_error(502, "Bad Gateway\n");
        assert!(err.to_string().contains("502 (unknown): Bad Gateway"));
    }
}
