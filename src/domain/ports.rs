use crate::domain::model::{CatalogEntry, CatalogVariant, MergePolicy, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>>;
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch_image(&self, breed: &str) -> Result<String>;
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
    fn catalog_variant(&self) -> CatalogVariant;
    fn catalog_endpoint(&self) -> &str;
    fn image_endpoint(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
    fn timeout_seconds(&self) -> Option<u64>;
    fn merge_policy(&self) -> MergePolicy;
    fn query(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
}
