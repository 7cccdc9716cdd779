//! Logs endpoint DTOs

use serde::{Deserialize, Serialize};

/// Successful response of `GET /logs`
///
/// `logs` is the backend's complete, ordered log history. It always replaces
/// what the panel shows rather than being merged with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<String>,
}
