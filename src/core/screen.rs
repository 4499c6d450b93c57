use tokio_util::sync::CancellationToken;

use crate::core::aggregator::BreedAggregator;
use crate::core::filter::filter_breeds;
use crate::domain::model::{Breed, LoadState};
use crate::domain::ports::{CatalogSource, ImageSource};

/// 品種清單畫面：持有載入狀態與查詢字串，狀態只由一次載入的結果轉移。
/// 畫面被丟棄時取消還在進行的請求。
pub struct BreedScreen<C, I>
where
    C: CatalogSource,
    I: ImageSource + Clone + 'static,
{
    aggregator: BreedAggregator<C, I>,
    cancel: CancellationToken,
    state: LoadState,
    query: String,
}

impl<C, I> BreedScreen<C, I>
where
    C: CatalogSource,
    I: ImageSource + Clone + 'static,
{
    pub fn new(aggregator: BreedAggregator<C, I>) -> Self {
        let cancel = aggregator.cancellation_token();
        Self {
            aggregator,
            cancel,
            state: LoadState::Loading,
            query: String::new(),
        }
    }

    /// 執行一次載入並轉移狀態
    pub async fn activate(&mut self) -> &LoadState {
        let result = self.aggregator.load_breeds().await;
        match &result {
            Ok(breeds) => tracing::info!("✅ Breed list ready ({} entries)", breeds.len()),
            Err(e) => tracing::error!("❌ Breed load failed: {}", e),
        }
        self.state = LoadState::from_result(result);
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// 目前查詢字串下可見的品種；尚未載入完成或失敗時為 None
    pub fn visible_breeds(&self) -> Option<Vec<Breed>> {
        self.state
            .breeds()
            .map(|breeds| filter_breeds(breeds, &self.query))
    }
}

impl<C, I> Drop for BreedScreen<C, I>
where
    C: CatalogSource,
    I: ImageSource + Clone + 'static,
{
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
