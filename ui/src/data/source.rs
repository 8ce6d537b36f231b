//! Document sources. The web build fetches over HTTP relative to the page;
//! desktop reads from its resource directory.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use reqwest::Url;

use crate::data::LoadError;

/// Anything that can hand over the raw bytes of a document by relative path.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError>;
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Option<Url>,
}

impl HttpSource {
    /// Resolve documents against the current page location (web only).
    pub fn page_relative() -> Self {
        Self {
            client: reqwest::Client::new(),
            base: None,
        }
    }

    pub fn with_base(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: Some(base),
        }
    }

    fn resolve(&self, path: &str) -> Result<Url, LoadError> {
        let to_error = |reason: String| LoadError::BaseUrl {
            path: path.to_string(),
            reason,
        };
        let base = match &self.base {
            Some(base) => base.clone(),
            None => page_location().map_err(to_error)?,
        };
        base.join(path).map_err(|err| to_error(err.to_string()))
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.resolve(path)?;
        let request_error = |source| LoadError::Request {
            path: path.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(request_error)?;
        Ok(body.to_vec())
    }
}

#[cfg(target_arch = "wasm32")]
fn page_location() -> Result<Url, String> {
    let window = web_sys::window().ok_or("window unavailable")?;
    let href = window
        .location()
        .href()
        .map_err(|err| format!("location unavailable: {err:?}"))?;
    Url::parse(&href).map_err(|err| err.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_location() -> Result<Url, String> {
    Err("no page location outside the browser; configure a base URL".to_string())
}

/// Reads documents from a directory on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DocumentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(self.root.join(path))
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_string(),
                source,
            })
    }
}

/// The source a platform shell provides through context.
#[derive(Debug, Clone)]
pub enum DataSource {
    Http(HttpSource),
    #[cfg(not(target_arch = "wasm32"))]
    Dir(DirSource),
}

impl DocumentSource for DataSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        match self {
            DataSource::Http(source) => source.fetch(path).await,
            #[cfg(not(target_arch = "wasm32"))]
            DataSource::Dir(source) => source.fetch(path).await,
        }
    }
}
