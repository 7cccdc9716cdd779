//! Start endpoint DTOs

use serde::{Deserialize, Serialize};

use crate::domain::session::SessionParams;

/// Body of `POST /start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    pub source: String,
    pub target: String,
}

impl From<&SessionParams> for StartRequest {
    fn from(params: &SessionParams) -> Self {
        Self {
            source: params.source().to_string(),
            target: params.target().to_string(),
        }
    }
}

/// Successful response of `POST /start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    /// Human-readable status line
    pub message: String,
}
