use std::io;

pub type AccessResult<T> = Result<T, AccessError>;

/// Failures of the session layer. Authorization queries themselves never
/// fail: they gate rendering and resolve to plain booleans.
#[derive(thiserror::Error, Debug)]
pub enum AccessError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("session storage error")]
    Storage(#[from] io::Error),
    #[error("session encoding error")]
    Encoding(#[from] serde_json::Error),
}

impl AccessError {
    pub fn unknown_role(name: impl Into<String>) -> Self {
        Self::UnknownRole(name.into())
    }
}
