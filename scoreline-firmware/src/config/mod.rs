//! Configuration loading and parsing
//!
//! The configuration is embedded at build time from scoreboard.toml and
//! parsed by a custom no_std parser.

pub mod toml;

use defmt::*;
use scoreline_core::config::ScoreboardConfig;

pub use toml::parse_config;

/// Embedded configuration (compiled into firmware)
/// Edit scoreboard.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../scoreboard.toml");

/// Load the embedded configuration
///
/// Falls back to the built-in defaults if the file does not parse or
/// validate.
pub fn load_config() -> ScoreboardConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            return ScoreboardConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("Invalid embedded config: {:?}", e);
        error!("Using default configuration");
        return ScoreboardConfig::default();
    }

    info!("Configuration loaded");
    debug!("  device name: {}", config.link.device_name.as_str());
    debug!("  baudrate: {}", config.link.baudrate);
    debug!("  intensity: {}", config.display.intensity);
    debug!("  debounce: {}ms", config.input.debounce_ms);
    debug!("  pulse: {}ms", config.feedback.pulse_ms);
    config
}
