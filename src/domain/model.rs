use serde::{Deserialize, Serialize};

use crate::utils::error::FetchError;

/// 取不到圖片時使用的固定佔位圖
pub const PLACEHOLDER_IMAGE_URL: &str = "https://place-puppy.com/300x300";

/// 目錄沒有提供性情資料時顯示的句子
pub const NO_TEMPERAMENT: &str = "No temperament data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,
}

impl Breed {
    pub fn temperament_text(&self) -> &str {
        self.temperament.as_deref().unwrap_or(NO_TEMPERAMENT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub temperament: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temperament: None,
        }
    }

    pub fn with_temperament(name: impl Into<String>, temperament: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temperament: Some(temperament.into()),
        }
    }
}

/// 缺圖品種的合併策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// 只保留成功取得圖片的品種
    DropOnMiss,
    /// 全部保留，缺圖用佔位圖
    #[default]
    Fallback,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum CatalogVariant {
    /// 只有品種名稱的目錄
    Names,
    /// 帶性情描述的目錄
    #[default]
    Temperament,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

/// 畫面載入狀態，只由 aggregator 的結果轉移
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Vec<Breed>),
    Failed(FetchError),
}

impl LoadState {
    pub fn from_result(result: Result<Vec<Breed>, FetchError>) -> Self {
        match result {
            Ok(breeds) => LoadState::Ready(breeds),
            Err(e) => LoadState::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn breeds(&self) -> Option<&[Breed]> {
        match self {
            LoadState::Ready(breeds) => Some(breeds),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
