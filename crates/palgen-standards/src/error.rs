use thiserror::Error;

#[derive(Debug, Error)]
pub enum StandardsError {
    #[error("invalid role map JSON: {0}")]
    RoleMap(#[from] serde_json::Error),
}
