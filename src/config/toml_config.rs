use crate::adapters::dog_ceo::BREED_PLACEHOLDER;
use crate::config::{IMAGE_ENDPOINT_TEMPLATE, NAMES_CATALOG_ENDPOINT, TEMPERAMENT_CATALOG_ENDPOINT};
use crate::domain::model::{CatalogVariant, MergePolicy, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{
    self, validate_endpoint_template, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub query: Option<String>,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub catalog: Option<CatalogVariant>,
    pub catalog_endpoint: Option<String>,
    pub image_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    pub concurrent_requests: Option<usize>,
    pub timeout_seconds: Option<u64>,
    pub merge_policy: Option<MergePolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FetchError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FetchError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_KEY})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_variant(&self) -> CatalogVariant {
        self.source.catalog.unwrap_or_default()
    }

    fn catalog_endpoint(&self) -> &str {
        self.source
            .catalog_endpoint
            .as_deref()
            .unwrap_or(match self.catalog_variant() {
                CatalogVariant::Names => NAMES_CATALOG_ENDPOINT,
                CatalogVariant::Temperament => TEMPERAMENT_CATALOG_ENDPOINT,
            })
    }

    fn image_endpoint(&self) -> &str {
        self.source
            .image_endpoint
            .as_deref()
            .unwrap_or(IMAGE_ENDPOINT_TEMPLATE)
    }

    fn concurrent_requests(&self) -> usize {
        self.fetch.concurrent_requests.unwrap_or(8)
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.fetch.timeout_seconds
    }

    fn merge_policy(&self) -> MergePolicy {
        self.fetch.merge_policy.unwrap_or_default()
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.catalog_endpoint", self.catalog_endpoint())?;
        validate_endpoint_template("source.image_endpoint", self.image_endpoint(), BREED_PLACEHOLDER)?;
        validate_positive_number("fetch.concurrent_requests", self.concurrent_requests(), 1)?;

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        Ok(())
    }
}
