use std::{fmt::Debug, rc::Rc};

use async_trait::async_trait;

use crate::{FetchError, ReplyListConfig};

/// Something that can answer an activation with a reply.
///
/// The dashboard talks to an HTTP endpoint through [`HttpReplySource`], but any source can be swapped in by providing
/// a [`SharedReplySource`] through context.
#[async_trait(?Send)]
pub trait ReplySource {
    /// Fetch one reply. Every call is independent; calls may overlap.
    async fn fetch(&self) -> Result<String, FetchError>;

    /// A human readable description of where replies come from, used in logs.
    fn describe(&self) -> String {
        String::from("custom reply source")
    }
}

/// Fetches replies with a plain `GET` request.
///
/// The request carries no headers, body or query parameters. The status code is ignored and the body is always
/// decoded as text, so an error page from the server still becomes a reply.
#[derive(Debug, Clone)]
pub struct HttpReplySource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpReplySource {
    /// Create a source that requests `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a source for the endpoint in `config`.
    pub fn from_config(config: &ReplyListConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    /// The URL this source requests.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ReplySource for HttpReplySource {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(self.endpoint())
            .send()
            .await
            .map_err(FetchError::Request)?;

        response.text().await.map_err(FetchError::Body)
    }

    fn describe(&self) -> String {
        self.endpoint().to_string()
    }
}

/// A cloneable handle to a [`ReplySource`] that can live in Dioxus context.
#[derive(Clone)]
pub struct SharedReplySource(Rc<dyn ReplySource>);

impl SharedReplySource {
    /// Wrap `source` so it can be provided through context.
    pub fn new(source: impl ReplySource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// Fetch one reply from the wrapped source.
    pub async fn fetch(&self) -> Result<String, FetchError> {
        self.0.fetch().await
    }

    /// Describe the wrapped source.
    pub fn describe(&self) -> String {
        self.0.describe()
    }
}

impl From<HttpReplySource> for SharedReplySource {
    fn from(source: HttpReplySource) -> Self {
        Self::new(source)
    }
}

impl Debug for SharedReplySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedReplySource")
            .field(&self.describe())
            .finish()
    }
}
