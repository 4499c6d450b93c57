pub mod aggregator;
pub mod export;
pub mod filter;
pub mod screen;

pub use crate::domain::model::{Breed, CatalogEntry, LoadState, MergePolicy};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, ImageSource, Storage};
pub use crate::utils::error::Result;
