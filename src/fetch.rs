use log::{debug, info, warn};
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;

use crate::error::LoadError;

/// Where the bibliography lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BibSource {
    Url(String),
    File(PathBuf),
}

impl BibSource {
    /// `http(s)://` locations are fetched over the network, anything else is a path
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            BibSource::Url(location.to_string())
        } else {
            BibSource::File(PathBuf::from(location))
        }
    }

    pub fn location(&self) -> String {
        match self {
            BibSource::Url(url) => url.clone(),
            BibSource::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for BibSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location())
    }
}

/// Create an HTTP client for fetching bibliographies
pub fn create_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

fn decode_body(location: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("{} is not valid UTF-8, replacing invalid bytes", location);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Fetch the bibliography text, bypassing caches for network sources
pub async fn fetch_bibliography(client: &Client, source: &BibSource) -> Result<String, LoadError> {
    let location = source.location();
    info!("Fetching {}", location);

    let bytes = match source {
        BibSource::Url(url) => {
            let resp = client
                .get(url)
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache")
                .send()
                .await
                .map_err(|e| LoadError::fetch(&location, e))?;

            let status = resp.status();
            debug!(
                "Response {} (content-type: {})",
                status,
                resp.headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown")
            );
            if !status.is_success() {
                return Err(LoadError::Status {
                    location,
                    status: status.as_u16(),
                });
            }

            resp.bytes()
                .await
                .map_err(|e| LoadError::fetch(&location, e))?
                .to_vec()
        }
        BibSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| LoadError::fetch(&location, e))?,
    };

    info!("Fetched {} bytes", bytes.len());
    Ok(decode_body(&location, bytes))
}
