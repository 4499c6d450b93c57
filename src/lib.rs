pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{DogApiCatalog, DogCeoCatalog, DogCeoImages, LocalStorage};
pub use crate::core::{aggregator::BreedAggregator, filter::filter_breeds, screen::BreedScreen};
pub use domain::model::{Breed, CatalogEntry, LoadState, MergePolicy, PLACEHOLDER_IMAGE_URL};
pub use utils::error::{FetchError, Result};
