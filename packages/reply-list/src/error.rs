/// An error that settles a fetch without producing a reply.
///
/// A response with a non-success status is *not* an error: its body is still a reply.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent, or no response came back.
    #[error("Failed to reach the reply endpoint: {0}")]
    Request(#[source] reqwest::Error),

    /// A response arrived, but its body could not be read as text.
    #[error("Failed to read the reply body: {0}")]
    Body(#[source] reqwest::Error),
}
