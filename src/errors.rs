use crate::inspector::InspectorConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error(transparent)]
    Config(#[from] InspectorConfigError),
    #[error("failed to serialize pattern report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type InspectResult<T> = Result<T, InspectError>;
