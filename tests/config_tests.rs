use navreplay::config::Config;
use tempfile::tempdir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.empty_domain, "");
    assert!(!config.create_backup);
    assert!(!config.compress_output);
}

#[test]
fn test_custom_config() {
    let config = Config {
        empty_domain: "about:blank".to_string(),
        create_backup: true,
        compress_output: true,
    };

    assert_eq!(config.empty_domain, "about:blank");
    assert!(config.create_backup);
    assert!(config.compress_output);
}

#[test]
fn test_config_partial_override() {
    let config = Config {
        create_backup: true,
        ..Default::default()
    };

    assert!(config.create_backup);
    assert_eq!(config.empty_domain, "");
}

#[test]
fn test_config_clone() {
    let config1 = Config::default();
    let config2 = config1.clone();

    assert_eq!(config1, config2);
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        empty_domain: "(none)".to_string(),
        create_backup: true,
        compress_output: false,
    };
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "create_backup = \"sometimes\"").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}
