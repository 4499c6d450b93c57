pub mod dog_api;
pub mod dog_ceo;
pub mod storage;

pub use dog_api::DogApiCatalog;
pub use dog_ceo::{DogCeoCatalog, DogCeoImages};
pub use storage::LocalStorage;
