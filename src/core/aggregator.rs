use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::domain::model::{Breed, CatalogEntry, MergePolicy, PLACEHOLDER_IMAGE_URL};
use crate::domain::ports::{CatalogSource, ImageSource};
use crate::utils::error::{FetchError, Result};

pub struct BreedAggregator<C, I> {
    catalog: C,
    images: I,
    concurrent_requests: usize,
    merge_policy: MergePolicy,
    cancel: CancellationToken,
}

impl<C, I> BreedAggregator<C, I>
where
    C: CatalogSource,
    I: ImageSource + Clone + 'static,
{
    pub fn new(
        catalog: C,
        images: I,
        concurrent_requests: usize,
        merge_policy: MergePolicy,
    ) -> Self {
        Self {
            catalog,
            images,
            concurrent_requests: concurrent_requests.max(1),
            merge_policy,
            cancel: CancellationToken::new(),
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// 取得目錄並為每個品種補上圖片，回傳合併後的清單
    ///
    /// 目錄失敗是整個載入的終結錯誤，不會發出任何圖片請求；
    /// 單一品種的圖片失敗只影響該品種，由合併策略決定去留。
    pub async fn load_breeds(&self) -> Result<Vec<Breed>> {
        let entries = tokio::select! {
            biased;

            _ = self.cancel.cancelled() => return Err(FetchError::Cancelled),
            result = self.catalog.fetch_catalog() => result?,
        };
        tracing::info!("📡 Catalog returned {} entries", entries.len());

        let entries = dedup_entries(entries);
        let images = self.fetch_images(&entries).await?;

        let breeds = merge(entries, &images, self.merge_policy);
        tracing::info!("🐕 Merged breed list has {} entries", breeds.len());
        Ok(breeds)
    }

    /// 並發取得圖片，同時進行的請求數受 concurrent_requests 限制
    async fn fetch_images(&self, entries: &[CatalogEntry]) -> Result<HashMap<String, String>> {
        let semaphore = Arc::new(Semaphore::new(self.concurrent_requests));
        let mut handles = Vec::with_capacity(entries.len());

        for entry in entries {
            let images = self.images.clone();
            let semaphore = Arc::clone(&semaphore);
            let cancel = self.cancel.clone();
            let name = entry.name.clone();

            handles.push(tokio::spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return None;
                };

                tokio::select! {
                    biased;

                    _ = cancel.cancelled() => None,
                    result = images.fetch_image(&name) => match result {
                        Ok(url) => Some((name.to_lowercase(), url)),
                        Err(e) => {
                            // 單一品種失敗不往上傳，轉成缺圖
                            tracing::debug!("Image fetch failed for '{}': {}", name, e);
                            None
                        }
                    },
                }
            }));
        }

        let mut results = HashMap::with_capacity(handles.len());
        for handle in handles {
            if let Some((name, url)) = handle.await.ok().flatten() {
                results.insert(name, url);
            }
        }

        if self.cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        Ok(results)
    }
}

/// 按名稱（不分大小寫）去重，保留第一筆，維持目錄順序
fn dedup_entries(entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.name.to_lowercase()))
        .collect()
}

/// 以名稱（不分大小寫）對上圖片結果，缺圖品種依策略處理
fn merge(
    entries: Vec<CatalogEntry>,
    images: &HashMap<String, String>,
    policy: MergePolicy,
) -> Vec<Breed> {
    let mut breeds = Vec::with_capacity(entries.len());

    for entry in entries {
        let image_url = match (images.get(&entry.name.to_lowercase()), policy) {
            (Some(url), _) => url.clone(),
            (None, MergePolicy::Fallback) => PLACEHOLDER_IMAGE_URL.to_string(),
            (None, MergePolicy::DropOnMiss) => continue,
        };

        breeds.push(Breed {
            name: entry.name,
            image_url,
            temperament: entry.temperament,
        });
    }

    breeds
}
