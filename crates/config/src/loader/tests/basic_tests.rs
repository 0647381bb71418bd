//! Basic loader tests: builder overrides, defaults, and report paths.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::ExposeSecret;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
fn test_loader_with_access_token_uses_default_endpoint() {
    let config = ConfigLoader::new()
        .with_access_token("test-token".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://container.googleapis.com");
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert_eq!(config.auth.access_token.expose_secret(), "test-token");
}

#[test]
fn test_loader_missing_access_token() {
    let result = ConfigLoader::new()
        .with_base_url("https://container.googleapis.com".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingAccessToken)));
}

#[test]
fn test_loader_normalizes_trailing_slash() {
    let config = ConfigLoader::new()
        .with_base_url("http://127.0.0.1:8080/".to_string())
        .with_access_token("test-token".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, "http://127.0.0.1:8080");
}

#[test]
fn test_report_config_defaults_to_non_prod() {
    let report = ConfigLoader::new().build_report_config();

    assert_eq!(report.environment, "NON-PROD");
    assert_eq!(report.targets_path, PathBuf::from("project/NON-PROD.json"));
    assert_eq!(
        report.output_path,
        PathBuf::from("output/Asset List GKE NON-PROD.csv")
    );
}

#[test]
fn test_report_config_follows_environment() {
    let report = ConfigLoader::new()
        .with_environment("PROD".to_string())
        .build_report_config();

    assert_eq!(report.targets_path, PathBuf::from("project/PROD.json"));
    assert_eq!(
        report.output_path,
        PathBuf::from("output/Asset List GKE PROD.csv")
    );
}

#[test]
fn test_report_config_explicit_paths_win() {
    let report = ConfigLoader::new()
        .with_environment("PROD".to_string())
        .with_targets_path(PathBuf::from("inventory/targets.json"))
        .with_output_path(PathBuf::from("reports/gke.csv"))
        .build_report_config();

    assert_eq!(report.environment, "PROD");
    assert_eq!(report.targets_path, PathBuf::from("inventory/targets.json"));
    assert_eq!(report.output_path, PathBuf::from("reports/gke.csv"));
}
