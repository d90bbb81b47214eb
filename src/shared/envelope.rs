//! Response envelope
//!
//! Every JSON body the backend returns is wrapped as
//! `{ "isSuccess": bool, "code": "200", "message": "...", "data": ... }`.

use serde::{Deserialize, Serialize};

use crate::shared::error::ClientError;

/// Uniform response wrapper used by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Build a successful envelope around `data`
    pub fn success(data: T) -> Self {
        Self {
            is_success: true,
            code: Some("200".to_string()),
            message: None,
            data: Some(data),
        }
    }

    /// Build a failed envelope
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: None,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Unwrap the payload, treating `isSuccess: false` or a missing payload as failure
    pub fn into_data(self) -> Result<T, ClientError> {
        if !self.is_success {
            return Err(ClientError::unsuccessful(self.message));
        }
        self.data.ok_or_else(|| ClientError::decode("envelope has no data"))
    }
}
