use std::time::Duration;

use clap::Parser;
use dog_breeds::adapters::{DogApiCatalog, DogCeoCatalog, DogCeoImages, LocalStorage};
use dog_breeds::core::export;
use dog_breeds::domain::model::{CatalogVariant, OutputFormat};
use dog_breeds::domain::ports::{CatalogSource, ConfigProvider, Storage};
use dog_breeds::utils::validation::Validate;
use dog_breeds::utils::{error::FetchError, logger};
use dog_breeds::{BreedAggregator, BreedScreen, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting dog-breeds CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 優先使用 TOML 配置檔，否則用命令列參數
    let exit_code = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => run(&config).await,
            Err(e) => config_failure(&e),
        },
        None => run(&cli).await,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<P: ConfigProvider + Validate>(config: &P) -> i32 {
    // 驗證配置
    if let Err(e) = config.validate() {
        return config_failure(&e);
    }

    let mut builder = reqwest::Client::builder();
    if let Some(seconds) = config.timeout_seconds() {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    let client = match builder.build() {
        Ok(client) => client,
        Err(e) => return fetch_failure(&FetchError::Api(e)),
    };

    let images = match DogCeoImages::new(client.clone(), config.image_endpoint()) {
        Ok(images) => images,
        Err(e) => return config_failure(&e),
    };

    match config.catalog_variant() {
        CatalogVariant::Names => {
            let catalog = DogCeoCatalog::new(client, config.catalog_endpoint());
            run_screen(catalog, images, config).await
        }
        CatalogVariant::Temperament => {
            let catalog = DogApiCatalog::new(client, config.catalog_endpoint());
            run_screen(catalog, images, config).await
        }
    }
}

async fn run_screen<C, P>(catalog: C, images: DogCeoImages, config: &P) -> i32
where
    C: CatalogSource,
    P: ConfigProvider,
{
    let aggregator = BreedAggregator::new(
        catalog,
        images,
        config.concurrent_requests(),
        config.merge_policy(),
    );
    let mut screen = BreedScreen::new(aggregator);
    if let Some(query) = config.query() {
        screen.set_query(query);
    }

    screen.activate().await;

    if let Some(e) = screen.state().error() {
        return fetch_failure(e);
    }

    let breeds = screen.visible_breeds().unwrap_or_default();
    if !screen.query().is_empty() {
        tracing::info!(
            "🔍 Query '{}' matches {} breeds",
            screen.query(),
            breeds.len()
        );
    }

    let rendered = match render(&breeds, config.output_format()) {
        Ok(rendered) => rendered,
        Err(e) => return fetch_failure(&e),
    };

    // 寫入檔案或輸出到標準輸出
    match config.output_path() {
        Some(path) => {
            let storage = LocalStorage::new(path.to_string());
            let filename = format!("breeds.{}", config.output_format().extension());
            if let Err(e) = storage.write_file(&filename, rendered.as_bytes()).await {
                return fetch_failure(&e);
            }
            tracing::info!("✅ Breed list saved");
            println!("✅ Breed list saved to: {}/{}", path, filename);
        }
        None => println!("{}", rendered),
    }

    0
}

fn render(
    breeds: &[dog_breeds::Breed],
    format: OutputFormat,
) -> dog_breeds::Result<String> {
    match format {
        OutputFormat::Table => Ok(export::render_table(breeds)),
        OutputFormat::Json => export::to_json(breeds),
        OutputFormat::Csv => export::to_csv(breeds),
    }
}

fn config_failure(e: &FetchError) -> i32 {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    2
}

fn fetch_failure(e: &FetchError) -> i32 {
    tracing::error!("❌ Breed load failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    1
}
