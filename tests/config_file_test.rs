use dog_breeds::domain::model::{CatalogVariant, MergePolicy, OutputFormat};
use dog_breeds::domain::ports::ConfigProvider;
use dog_breeds::utils::validation::Validate;
use dog_breeds::TomlConfig;
use tempfile::TempDir;

#[test]
fn test_config_loads_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("breeds.toml");
    std::fs::write(
        &config_path,
        r#"
query = "terrier"

[source]
catalog = "names"

[fetch]
concurrent_requests = 2
merge_policy = "drop-on-miss"

[output]
format = "csv"
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();

    assert_eq!(config.query(), Some("terrier"));
    assert_eq!(config.catalog_variant(), CatalogVariant::Names);
    assert_eq!(config.concurrent_requests(), 2);
    assert_eq!(config.merge_policy(), MergePolicy::DropOnMiss);
    assert_eq!(config.output_format(), OutputFormat::Csv);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = TomlConfig::from_file(temp_dir.path().join("nope.toml"));
    assert!(matches!(result, Err(dog_breeds::FetchError::Io(_))));
}

#[test]
fn test_env_substitution_applies_when_loading_from_file() {
    std::env::set_var("DOG_BREEDS_FILE_TEST_URL", "http://localhost:4444/breeds");

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("breeds.toml");
    std::fs::write(
        &config_path,
        r#"
[source]
catalog_endpoint = "${DOG_BREEDS_FILE_TEST_URL}"
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    assert_eq!(config.catalog_endpoint(), "http://localhost:4444/breeds");
}

#[test]
fn test_validation_catches_bad_file_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("breeds.toml");
    std::fs::write(
        &config_path,
        r#"
[fetch]
concurrent_requests = 0
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    let error = config.validate().unwrap_err();
    assert!(error.is_config_error());
}
