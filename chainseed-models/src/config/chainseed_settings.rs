// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Build the settings for an object from layered configuration sources
//!
//! ---
//! The tool configuration is composed of an optional file part and an
//! environment part.
//!
//! The loader first looks at the path in the `CHAINSEED_CONFIG_PATH`
//! environment variable, falling back to the relative path
//! `base_config/config.toml`. If the file exists it is read as the base
//! layer; a missing file simply leaves the defaults in place.
//!
//! A second optional layer is read from `CHAINSEED_CONFIG_OVERRIDE_PATH`
//! (default `config/config.toml`), then from the per-user configuration
//! directory. Later layers override earlier ones key by key.
//!
//! The last layer is the environment variables carrying the given prefix,
//! overriding everything read from files.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::Path;

/// Merge the settings
/// 1. default
/// 2. in path specified in `CHAINSEED_CONFIG_PATH` environment variable (`base_config/config.toml` by default)
/// 3. in path specified in `CHAINSEED_CONFIG_OVERRIDE_PATH` environment variable (`config/config.toml` by default)
/// 4. in the user configuration directory
/// 5. environment variables prefixed with `env_prefix`
#[inline]
pub fn build_chainseed_settings<T: Deserialize<'static>>(app_name: &str, env_prefix: &str) -> T {
    let mut builder = config::Config::builder();
    let config_path = std::env::var("CHAINSEED_CONFIG_PATH")
        .unwrap_or_else(|_| "base_config/config.toml".to_string());

    if Path::new(&config_path).is_file() {
        builder = builder.add_source(config::File::with_name(&config_path));
    }

    let config_override_path = std::env::var("CHAINSEED_CONFIG_OVERRIDE_PATH")
        .unwrap_or_else(|_| "config/config.toml".to_string());

    if Path::new(&config_override_path).is_file() {
        builder = builder.add_source(config::File::with_name(&config_override_path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("net", "ChainseedLabs", app_name) {
        // Portable user config loading
        let user_config_path = proj_dirs.config_dir();
        if user_config_path.exists() {
            let path_str = user_config_path.to_str().unwrap();
            builder = builder.add_source(config::File::with_name(path_str));
        }
    }

    let s = builder
        .add_source(config::Environment::with_prefix(env_prefix))
        .build()
        .unwrap();

    s.try_deserialize().unwrap()
}
