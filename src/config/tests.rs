use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_tendrel_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("TENDREL_PORT");
        env::remove_var("TENDREL_BIND_ADDR");
        env::remove_var("TENDREL_CATALOG_PATH");
        env::remove_var("TENDREL_EMBEDDINGS_PATH");
        env::remove_var("TENDREL_RULES_PATH");
        env::remove_var("TENDREL_ENCODER_URL");
        env::remove_var("TENDREL_TOP_K");
    }
}

#[test]
#[serial]
fn default_config() {
    clear_tendrel_env();
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.catalog_path, PathBuf::from("./data/global_index.json"));
    assert_eq!(
        config.embeddings_path,
        PathBuf::from("./data/global_embeddings.npy")
    );
    assert!(config.rules_path.is_none());
    assert!(config.encoder_url.is_none());
    assert_eq!(config.top_k, 5);
}

#[test]
#[serial]
fn from_env_reads_overrides() {
    clear_tendrel_env();
    let config = with_env_vars(
        &[
            ("TENDREL_PORT", "9100"),
            ("TENDREL_BIND_ADDR", "0.0.0.0"),
            ("TENDREL_CATALOG_PATH", "/srv/index.json"),
            ("TENDREL_ENCODER_URL", "http://localhost:9200/encode"),
            ("TENDREL_TOP_K", "10"),
        ],
        || Config::from_env().expect("config loads"),
    );

    assert_eq!(config.port, 9100);
    assert_eq!(config.socket_addr(), "0.0.0.0:9100");
    assert_eq!(config.catalog_path, PathBuf::from("/srv/index.json"));
    assert_eq!(
        config.encoder_url.as_deref(),
        Some("http://localhost:9200/encode")
    );
    assert_eq!(config.top_k, 10);
}

#[test]
#[serial]
fn invalid_port_is_rejected() {
    clear_tendrel_env();
    let result = with_env_vars(&[("TENDREL_PORT", "not-a-port")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));

    let result = with_env_vars(&[("TENDREL_PORT", "0")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
#[serial]
fn invalid_top_k_is_rejected() {
    clear_tendrel_env();
    let result = with_env_vars(&[("TENDREL_TOP_K", "many")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidInteger { .. })));
}

#[test]
#[serial]
fn empty_encoder_url_is_treated_as_unset() {
    clear_tendrel_env();
    let config = with_env_vars(&[("TENDREL_ENCODER_URL", "")], || {
        Config::from_env().expect("config loads")
    });
    assert!(config.encoder_url.is_none());
}

#[test]
#[serial]
fn validate_rejects_missing_rules_file() {
    clear_tendrel_env();
    let config = Config {
        rules_path: Some(PathBuf::from("/definitely/not/here.json")),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
#[serial]
fn validate_accepts_defaults() {
    clear_tendrel_env();
    // default paths typically do not exist in the test environment, which
    // is fine: validate only rejects paths that exist with the wrong kind
    let config = Config::default();
    assert!(config.validate().is_ok());
}
