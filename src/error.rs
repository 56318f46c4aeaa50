use thiserror::Error;

/// Failures that end a load cycle. An empty bibliography is not one of them.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("render target missing: no element with id \"{container}\" in the document")]
    RenderTargetMissing { container: String },

    #[error("failed to fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("fetching {location} returned HTTP {status}")]
    Status { location: String, status: u16 },
}

impl LoadError {
    pub fn fetch(location: impl Into<String>, reason: impl ToString) -> Self {
        LoadError::Fetch {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Fetch failures (transport or status) as opposed to integration errors
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, LoadError::Fetch { .. } | LoadError::Status { .. })
    }
}
