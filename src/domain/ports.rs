use crate::domain::model::Portfolio;
use crate::utils::error::{DataLoadError, Result};
use async_trait::async_trait;

/// One-shot retrieval of the portfolio data document. Implementations make a
/// single attempt; retry policy is deliberately absent.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> std::result::Result<Portfolio, DataLoadError>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
}
