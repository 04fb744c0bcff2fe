use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the three backend endpoints hang off, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// "dark" or "light"; anything else falls back to dark.
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" or "json".
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Log file path. When unset the TUI discards logs and the CLI writes
    /// them to stderr.
    #[serde(default)]
    pub file: Option<String>,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_tick_ms() -> u64 {
    50
}

fn default_toast_secs() -> u64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_ms: default_tick_ms(),
            toast_secs: default_toast_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    /// Load configuration from the first TOML file that parses
    fn load_from_file() -> Self {
        if let Ok(path) = env::var("LINKDECK_CONFIG") {
            if let Some(config) = Self::try_read(&path) {
                return config;
            }
            warn!("LINKDECK_CONFIG={} unusable, trying default paths", path);
        }

        let config_paths = [
            "linkdeck.toml",
            "config.toml",
            "config/linkdeck.toml",
            "/etc/linkdeck/config.toml",
        ];

        for path in &config_paths {
            if Path::new(path).exists() {
                if let Some(config) = Self::try_read(path) {
                    return config;
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    fn try_read(path: &str) -> Option<Config> {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    debug!("Loaded config from: {}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse config file {}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read config file {}: {}", path, e);
                None
            }
        }
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        // API config
        if let Ok(base_url) = env::var("LINKDECK_API_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(timeout) = env::var("LINKDECK_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.timeout_secs = secs;
            }
        }

        // UI config
        if let Ok(theme) = env::var("LINKDECK_THEME") {
            self.ui.theme = theme;
        }

        // Logging config
        if let Ok(level) = env::var("LINKDECK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = env::var("LINKDECK_LOG_FILE") {
            self.logging.file = Some(file);
        }
        if let Ok(level) = env::var("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Base URL with any trailing slash removed, ready for path joining.
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Generate a sample TOML configuration file
    pub fn generate_sample_config() -> String {
        let sample_config = Config::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// Save current configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

// Global configuration instance
use std::sync::OnceLock;
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration instance
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::load)
}

/// Initialize the global configuration
pub fn init_config() {
    CONFIG.get_or_init(Config::load);
}
