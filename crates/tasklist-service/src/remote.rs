use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use tasklist_core::task::Task;
use thiserror::Error;

use crate::TaskSource;

pub const DEFAULT_REMOTE_URL: &str = "https://dummyjson.com/todos";

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("no data in response")]
    NoData,

    #[error("json decode: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct TodoResponse {
    todos: Vec<RemoteTodo>,
}

#[derive(Debug, Deserialize)]
struct RemoteTodo {
    id: Option<i64>,
    #[serde(default)]
    todo: Option<String>,
    #[serde(default)]
    completed: Option<bool>,
}

impl RemoteTodo {
    fn into_task(self, fetched_at: chrono::DateTime<Utc>) -> Task {
        Task {
            id: self.id,
            title: Some(format!("Task {}", self.id.unwrap_or(0))),
            note: self.todo,
            created_at: Some(fetched_at),
            completed: self.completed,
        }
    }
}

/// One-shot HTTP client for the seed list.
pub struct RemoteClient {
    url: String,
    client: Client,
}

impl RemoteClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim().to_string(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.trim().to_string(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn parsed_url(&self) -> Result<Url, RemoteError> {
        let url = Url::parse(&self.url).map_err(|_| RemoteError::InvalidUrl(self.url.clone()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(RemoteError::InvalidUrl(self.url.clone())),
        }
    }

    /// GET the configured URL and decode its `todos` array.
    ///
    /// Remote titles are ignored; each task is titled `Task {id}` and
    /// stamped with the fetch time.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, RemoteError> {
        let url = self.parsed_url()?;
        tracing::info!("fetching seed tasks from {url}");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let body = resp.bytes().await?;
        let tasks = decode_tasks(&body)?;
        tracing::debug!("decoded {} seed tasks", tasks.len());
        Ok(tasks)
    }
}

fn decode_tasks(body: &[u8]) -> Result<Vec<Task>, RemoteError> {
    if body.is_empty() {
        return Err(RemoteError::NoData);
    }
    let decoded: TodoResponse = serde_json::from_slice(body)?;
    let now = Utc::now();
    Ok(decoded
        .todos
        .into_iter()
        .map(|todo| todo.into_task(now))
        .collect())
}

#[async_trait]
impl TaskSource for RemoteClient {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, RemoteError> {
        RemoteClient::fetch_tasks(self).await
    }
}
