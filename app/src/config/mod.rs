//! Configuration management: defaults and loading from the environment.

pub mod app_config;
pub mod defaults;

pub use app_config::AppConfig;
