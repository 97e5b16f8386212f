//! `.env` values flow through figment's env layer.
//!
//! Kept in its own test binary: `dotenvy` writes to the real process
//! environment, which `Jail` does not restore.

use figment::Jail;
use ontime_config::OntimeConfig;

#[test]
fn dotenv_file_feeds_env_layer_without_overriding_process_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "ONTIME_GENERAL__UPCOMING_LIMIT=9\nONTIME_GENERAL__DEFAULT_LIMIT=11\n",
        )?;
        jail.set_env("ONTIME_GENERAL__DEFAULT_LIMIT", "12");

        let config = OntimeConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.general.upcoming_limit, 9);
        assert_eq!(config.general.default_limit, 12);
        Ok(())
    });
}
