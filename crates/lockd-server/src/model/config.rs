//! Configuration management for Lockd server
//!
//! This module handles loading and accessing application configuration.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};

use crate::startup::LoggingConfig;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'a', long = "address")]
    address: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "store", env = "LOCKD_STORE")]
    store: Option<String>,
    #[arg(long = "data-dir", env = "LOCKD_DATA_DIR")]
    data_dir: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("lockd")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml").required(false));

        if let Some(v) = args.address {
            config_builder = config_builder
                .set_override("server.address", v)
                .expect("Failed to set server address override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", i64::from(v))
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.store {
            config_builder = config_builder
                .set_override("lockd.store.backend", v)
                .expect("Failed to set store backend override");
        }
        if let Some(v) = args.data_dir {
            config_builder = config_builder
                .set_override("lockd.store.data_dir", v)
                .expect("Failed to set data directory override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_main_port(&self) -> u16 {
        self.config.get_int("server.port").unwrap_or(8080) as u16
    }

    // ========================================================================
    // Store Configuration
    // ========================================================================

    pub fn store_backend(&self) -> String {
        self.config
            .get_string("lockd.store.backend")
            .unwrap_or("rocksdb".to_string())
    }

    pub fn store_data_dir(&self) -> String {
        self.config
            .get_string("lockd.store.data_dir")
            .unwrap_or("data/locks".to_string())
    }

    // ========================================================================
    // Shutdown Configuration
    // ========================================================================

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(
            self.config
                .get_int("lockd.shutdown.timeout_seconds")
                .unwrap_or(30) as u64,
        )
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string("lockd.logs.path").ok(),
            self.config.get_bool("lockd.logs.console").unwrap_or(true),
            self.config.get_bool("lockd.logs.file").unwrap_or(true),
            self.config
                .get_string("lockd.logs.level")
                .unwrap_or("info".to_string()),
        )
    }
}
