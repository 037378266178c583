use serde::{Deserialize, Serialize};

use linediff_core::DiffRecord;

use crate::error::{ProtocolError, ProtocolResult};

/// Body of a diff request. Both texts are required; they are optional
/// here so a missing field can be reported instead of failing to parse.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DiffRequest {
    #[serde(default)]
    pub text1: Option<String>,
    #[serde(default)]
    pub text2: Option<String>,
}

impl DiffRequest {
    pub fn new(text1: impl Into<String>, text2: impl Into<String>) -> Self {
        Self {
            text1: Some(text1.into()),
            text2: Some(text2.into()),
        }
    }

    /// Both texts, or `MissingTexts` if either is absent or null.
    pub fn into_texts(self) -> ProtocolResult<(String, String)> {
        match (self.text1, self.text2) {
            (Some(text1), Some(text2)) => Ok((text1, text2)),
            _ => Err(ProtocolError::MissingTexts),
        }
    }
}

/// Body of a successful diff response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResponse {
    pub diffs: Vec<DiffRecord>,
}

impl DiffResponse {
    pub fn new(diffs: Vec<DiffRecord>) -> Self {
        Self { diffs }
    }
}

/// Body of an error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
