/// HTTP endpoint paths for the diff service.
pub mod endpoints {
    pub const DIFFS: &str = "/get-diffs";
    pub const HEALTH: &str = "/health";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
