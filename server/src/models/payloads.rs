use serde::{Deserialize, Serialize};

/// Fields are optional so absent values reach validation instead of being
/// rejected by the JSON extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessRequest {
    pub url: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub summary: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
