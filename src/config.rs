//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HYPERSPIN_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyperspin_core::{DisplayConfig, HypersphereConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hypersphere sampling and rotation speeds
    #[serde(default)]
    pub hypersphere: HypersphereConfig,
    /// Point size and color ramps
    #[serde(default)]
    pub display: DisplayConfig,
    /// Frame loop settings
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HYPERSPIN_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HYPERSPIN_HYPERSPHERE__RADIUS=3 -> hypersphere.radius = 3.0
        figment = figment.merge(Env::prefixed("HYPERSPIN_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Elapsed time per tick in seconds when not running in real time
    pub fixed_timestep: f32,
    /// Number of ticks to run before exiting
    pub frames: u32,
    /// Measure elapsed time from the wall clock instead of the fixed step
    pub realtime: bool,
    /// Cap on measured elapsed time (first frame, stalls)
    pub max_delta: f32,
    /// Log a frame summary every this many ticks (0 disables)
    pub report_interval: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            frames: 600,
            realtime: false,
            max_delta: 0.25,
            report_interval: 60,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
