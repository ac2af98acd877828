use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    /// The diff collaborator (a `git diff` subprocess or service) failed.
    #[error("diff unavailable: {0}")]
    DiffUnavailable(String),

    /// Diff text was malformed, or a hunk header disagreed with its body.
    #[error("diff error: {0}")]
    Diff(#[from] commitlens_diff::DiffError),

    /// The indexed-source RPC failed. Fatal: partial results are never
    /// returned around a source failure.
    #[error("source query failed: {0}")]
    Source(String),

    /// The inbound pagination cursor was not a valid encoding. A client
    /// input error, not a server fault.
    #[error("invalid pagination cursor: {0}")]
    CursorDecode(String),

    /// The outgoing cursor mapping failed to serialize. Unreachable for the
    /// integer-keyed maps produced here; kept so the failure would surface
    /// as a server fault rather than a client error.
    #[error("failed to encode pagination cursor: {0}")]
    CursorEncode(String),

    #[error("invalid query configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;
