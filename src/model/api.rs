use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message-only response body, used for both errors and confirmations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable message
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
