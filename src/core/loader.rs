use crate::domain::model::Portfolio;
use crate::domain::ports::{DataSource, Storage};
use crate::utils::error::DataLoadError;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the data document over HTTP(S). Single attempt; a non-success
/// status surfaces as a request error just like an unreachable host.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Portfolio, DataLoadError> {
        tracing::debug!("Requesting data document: {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        tracing::debug!("Data document response status: {}", response.status());
        let response = response.error_for_status()?;
        let data = response.json::<Portfolio>().await?;
        Ok(data)
    }
}

/// Reads the data document from storage, for the co-located `data.json`
/// case where no server is involved.
pub struct FileSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> DataSource for FileSource<S> {
    async fn fetch(&self) -> Result<Portfolio, DataLoadError> {
        tracing::debug!("Reading data document: {}", self.path);
        let bytes = self.storage.read_file(&self.path).await.map_err(|e| {
            DataLoadError::Io(std::io::Error::other(format!(
                "data document not readable: {}: {}",
                self.path, e
            )))
        })?;
        let data = serde_json::from_slice(&bytes)?;
        Ok(data)
    }
}
