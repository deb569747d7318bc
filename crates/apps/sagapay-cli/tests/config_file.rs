//! Config file loading against real files.

use std::io::Write;

use sagapay_cli::CliConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
        [gateway]
        api_key = "file-key"
        api_secret = "file-secret"
        base_url = "https://sandbox.sagapay.net/"

        [defaults]
        ipn_url = "https://shop.example/ipn"
        "#,
    );

    let config = CliConfig::load(file.path()).unwrap();
    assert_eq!(config.gateway.api_key, "file-key");
    assert_eq!(config.defaults.ipn_url.as_deref(), Some("https://shop.example/ipn"));

    let client = config.client().unwrap();
    assert_eq!(client.api_key(), "file-key");
    assert_eq!(client.base_url(), "https://sandbox.sagapay.net");
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = CliConfig::load(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.defaults.ipn_url, None);
    assert!(!config.gateway.base_url.is_empty());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let file = write_config("[gateway\napi_key = ");
    let err = CliConfig::load(file.path()).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_bad_base_url_rejected_by_client() {
    let file = write_config(
        r#"
        [gateway]
        api_key = "key"
        api_secret = "secret"
        base_url = "ftp://api.sagapay.net"
        "#,
    );

    let config = CliConfig::load(file.path()).unwrap();
    let err = config.client().unwrap_err();
    assert_eq!(err.exit_code(), 4);
}
