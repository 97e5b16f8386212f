//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use ontime_config::OntimeConfig;
use std::path::PathBuf;

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
data_dir = "/srv/ontime"
pretty = true
"#,
        )?;

        let config: OntimeConfig = Figment::from(Serialized::defaults(OntimeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.data_dir, "/srv/ontime");
        assert!(config.storage.pretty);
        assert_eq!(
            config.storage.resolved_data_dir().expect("dir resolves"),
            PathBuf::from("/srv/ontime")
        );
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
default_limit = 10
confirm_deletes = false
upcoming_limit = 8
",
        )?;

        let config: OntimeConfig = Figment::from(Serialized::defaults(OntimeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 10);
        assert!(!config.general.confirm_deletes);
        assert_eq!(config.general.upcoming_limit, 8);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
upcoming_limit = 3
",
        )?;

        let config: OntimeConfig = Figment::from(Serialized::defaults(OntimeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.upcoming_limit, 3);
        assert_eq!(config.general.default_limit, 50);
        assert!(config.general.confirm_deletes);
        assert!(!config.storage.pretty);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".ontime")).expect("create .ontime");
        jail.create_file(
            ".ontime/config.toml",
            r#"
[storage]
data_dir = "./planner-data"
"#,
        )?;

        let config = OntimeConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, "./planner-data");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
default_limit = 10
",
        )?;
        jail.set_env("ONTIME_GENERAL__DEFAULT_LIMIT", "99");

        let config: OntimeConfig = Figment::from(Serialized::defaults(OntimeConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ONTIME_").split("__"))
            .extract()?;

        assert_eq!(config.general.default_limit, 99);
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("ONTIME_STORAGE__DATA_DRI", "/typo");

        let config: OntimeConfig = Figment::from(Serialized::defaults(OntimeConfig::default()))
            .merge(Env::prefixed("ONTIME_").split("__"))
            .extract()?;

        assert!(
            config.storage.data_dir.is_empty(),
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_config_error() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".ontime")).expect("create .ontime");
        jail.create_file(".ontime/config.toml", "[general]\ndefault_limit = \"many\"\n")?;

        let err = OntimeConfig::load().expect_err("bad value must fail");
        assert!(err.to_string().starts_with("Configuration error"));
        Ok(())
    });
}
