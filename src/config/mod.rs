pub mod toml_config;

pub use toml_config::TomlConfig;

pub const NAMES_CATALOG_ENDPOINT: &str = "https://dog.ceo/api/breeds/list/all";
pub const TEMPERAMENT_CATALOG_ENDPOINT: &str = "https://api.thedogapi.com/v1/breeds";
pub const IMAGE_ENDPOINT_TEMPLATE: &str = "https://dog.ceo/api/breed/{breed}/images/random";

#[cfg(feature = "cli")]
mod cli {
    use super::{IMAGE_ENDPOINT_TEMPLATE, NAMES_CATALOG_ENDPOINT, TEMPERAMENT_CATALOG_ENDPOINT};
    use crate::adapters::dog_ceo::BREED_PLACEHOLDER;
    use crate::domain::model::{CatalogVariant, MergePolicy, OutputFormat};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        self, validate_endpoint_template, validate_positive_number, validate_url,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "dog-breeds")]
    #[command(about = "Fetch, merge and search dog breeds from public APIs")]
    pub struct CliConfig {
        #[arg(long, value_enum, default_value = "temperament")]
        pub catalog: CatalogVariant,

        /// 未指定時依 catalog 變體選擇預設端點
        #[arg(long)]
        pub catalog_endpoint: Option<String>,

        #[arg(long, default_value = IMAGE_ENDPOINT_TEMPLATE)]
        pub image_endpoint: String,

        #[arg(long, default_value = "8")]
        pub concurrent_requests: usize,

        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        #[arg(long, value_enum, default_value = "fallback")]
        pub merge_policy: MergePolicy,

        /// 以名稱子字串（不分大小寫）過濾清單
        #[arg(long)]
        pub query: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        pub format: OutputFormat,

        /// 指定時將結果寫入該目錄，否則輸出到標準輸出
        #[arg(long)]
        pub output_path: Option<String>,

        /// 從 TOML 檔載入配置，忽略其他命令列參數
        #[arg(long)]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn catalog_variant(&self) -> CatalogVariant {
            self.catalog
        }

        fn catalog_endpoint(&self) -> &str {
            self.catalog_endpoint
                .as_deref()
                .unwrap_or(match self.catalog {
                    CatalogVariant::Names => NAMES_CATALOG_ENDPOINT,
                    CatalogVariant::Temperament => TEMPERAMENT_CATALOG_ENDPOINT,
                })
        }

        fn image_endpoint(&self) -> &str {
            &self.image_endpoint
        }

        fn concurrent_requests(&self) -> usize {
            self.concurrent_requests
        }

        fn timeout_seconds(&self) -> Option<u64> {
            self.timeout_seconds
        }

        fn merge_policy(&self) -> MergePolicy {
            self.merge_policy
        }

        fn query(&self) -> Option<&str> {
            self.query.as_deref()
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }
    }

    impl validation::Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("catalog_endpoint", ConfigProvider::catalog_endpoint(self))?;
            validate_endpoint_template("image_endpoint", &self.image_endpoint, BREED_PLACEHOLDER)?;
            validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;

            if let Some(path) = &self.output_path {
                validation::validate_path("output_path", path)?;
            }

            Ok(())
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
