use thiserror::Error;

/// Errors surfaced by `SessionStore::send`.
///
/// Every send failure crosses the store boundary as one of these variants,
/// never as a panic. The Display text is what the UI shows the user.
#[derive(Debug, Error)]
pub enum SendError {
    /// The submitted content was empty or whitespace-only. No I/O was
    /// attempted and no state changed.
    #[error("Empty message")]
    Empty,

    /// The remote call succeeded at the protocol level but returned no
    /// usable assistant content. The optimistic user message is kept.
    #[error("Server returned empty message")]
    EmptyReply,

    /// Another send is already in flight.
    #[error("A message is already being sent")]
    Busy,

    /// Network failure, non-2xx status, or malformed response. The
    /// optimistic user message was rolled back.
    #[error("{0}")]
    Transport(String),
}

/// Errors from history persistence backends.
///
/// These never propagate out of the session store: write/read failures are
/// logged and the in-memory sequence stays authoritative.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("storage read error: {0}")]
    Read(String),

    #[error("storage write error: {0}")]
    Write(String),
}

/// Errors from the remote assistant client.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The server reported a failure with a detail message.
    #[error("{detail}")]
    Api { detail: String },

    /// Transport-level failure (connect, timeout, non-2xx without detail).
    #[error("{0}")]
    Http(String),

    /// The response body could not be parsed.
    #[error("malformed response: {0}")]
    Deserialization(String),
}
