/// The endpoint the dashboard polls when no other configuration is provided.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/test";

/// Configuration for [`use_replies`](crate::use_replies).
///
/// Provide this through context, usually with `LaunchBuilder::with_context`. Components that can't find one fall back
/// to [`ReplyListConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyListConfig {
    /// The URL every activation sends a `GET` request to.
    pub endpoint: String,
}

impl ReplyListConfig {
    /// Create a config that points at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for ReplyListConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
