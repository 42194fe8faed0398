//! HTTP access to the chat backend.
//!
//! [`ChatBackend`] is the seam the controller talks through; [`ChatClient`] is
//! the `reqwest` implementation used by both the browser and the CLI.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::{ClientConfig, ConfigError};
use crate::errors::ChatError;
use crate::models::{
    ErrorResponse, Message, SendMessageRequest, SendMessageResponse, ThreadId, ThreadListResponse,
    ThreadMessagesResponse, ThreadSummary,
};

/// Backend capabilities consumed by the controller.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// List the persisted threads.
    ///
    /// # Errors
    /// [`ChatError::Network`] or [`ChatError::Server`] when the request fails.
    async fn list_threads(&self) -> Result<Vec<ThreadSummary>, ChatError>;

    /// Fetch the ordered messages of one thread.
    ///
    /// # Errors
    /// [`ChatError::Network`] or [`ChatError::Server`] when the request fails.
    async fn get_thread(&self, thread_id: &ThreadId) -> Result<Vec<Message>, ChatError>;

    /// Post a human message. The server opens a new thread when
    /// `request.thread_id` is `None`.
    ///
    /// # Errors
    /// [`ChatError::Network`] or [`ChatError::Server`] when the request fails.
    async fn post_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse, ChatError>;
}

/// Supplies the anti-forgery token for state-changing requests.
pub trait CsrfSource {
    /// Current token, read fresh for every request.
    fn csrf_token(&self) -> Option<String>;
}

/// A token known up front, or none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCsrfToken(Option<String>);

impl StaticCsrfToken {
    /// Wraps a token; `None` sends no header.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }
}

impl CsrfSource for StaticCsrfToken {
    fn csrf_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Lightweight API client for the chat endpoints.
#[derive(Clone, Debug)]
pub struct ChatClient<C = StaticCsrfToken> {
    base_url: Url,
    client: Client,
    csrf: C,
    csrf_header: String,
}

impl<C: CsrfSource> ChatClient<C> {
    /// Create a client rooted at `base_url` (the API prefix, ending in `/`).
    pub fn new(base_url: Url, csrf: C) -> Self {
        Self {
            base_url,
            client: Client::new(),
            csrf,
            csrf_header: ClientConfig::with_defaults().csrf_header_name,
        }
    }

    /// Create a client from resolved configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidServerUrl`] when the configured server URL
    /// is not absolute.
    pub fn from_config(config: &ClientConfig, csrf: C) -> Result<Self, ConfigError> {
        Ok(Self::new(config.api_base()?, csrf).with_csrf_header(&config.csrf_header_name))
    }

    /// Send the token in `header` instead of `X-CSRFToken`.
    #[must_use]
    pub fn with_csrf_header(mut self, header: &str) -> Self {
        self.csrf_header = header.to_string();
        self
    }

    fn api_url(&self, path: &str) -> Result<Url, ChatError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn thread_url(&self, thread_id: &ThreadId) -> Result<Url, ChatError> {
        let mut url = self.api_url("thread/")?;
        url.path_segments_mut()
            .map_err(|()| ChatError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(thread_id.as_str())
            .push("");
        Ok(url)
    }

    fn apply_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        match self.csrf.csrf_token().filter(|token| !token.is_empty()) {
            Some(token) => request.header(self.csrf_header.as_str(), token),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ChatError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body).map_or_else(
                |_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                },
                |error| error.to_string(),
            );
            return Err(ChatError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait(?Send)]
impl<C: CsrfSource> ChatBackend for ChatClient<C> {
    async fn list_threads(&self) -> Result<Vec<ThreadSummary>, ChatError> {
        let url = self.api_url("threads/")?;
        debug!(%url, "listing threads");
        let response = self.client.get(url).send().await?;
        let body: ThreadListResponse = Self::decode(response).await?;
        Ok(body.threads)
    }

    async fn get_thread(&self, thread_id: &ThreadId) -> Result<Vec<Message>, ChatError> {
        let url = self.thread_url(thread_id)?;
        debug!(%url, "fetching thread messages");
        let response = self.client.get(url).send().await?;
        let body: ThreadMessagesResponse = Self::decode(response).await?;
        Ok(body.messages)
    }

    async fn post_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse, ChatError> {
        let url = self.api_url("send/")?;
        debug!(%url, new_thread = request.thread_id.is_none(), "posting message");
        let response = self
            .apply_csrf(self.client.post(url))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }
}
