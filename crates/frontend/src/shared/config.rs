use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub controller: ControllerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Origin of the REST API; empty means the page's own origin
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Cart+item form when true, cart-only form otherwise
    #[serde(default = "default_item_support")]
    pub item_support: bool,
    #[serde(default)]
    pub clear_mode: ClearMode,
}

/// How "Clear cart" empties a shopcart
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClearMode {
    /// `PUT /shopcarts/{id}/clear`
    #[default]
    Endpoint,
    /// Fetch the cart, then one `DELETE` per item without waiting for them.
    /// Deprecated: not equivalent to the endpoint under partial failure.
    PerItemDelete,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_item_support() -> bool {
    true
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl LoggingConfig {
    /// Configured level, `Debug` when the value is not a known level name
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[controller]
item_support = true
clear_mode = "endpoint"

[logging]
level = "debug"
"#;

/// localStorage key holding an override TOML document
pub const CONFIG_STORAGE_KEY: &str = "shopcart_config";

/// Parse an override document, falling back to the embedded default
///
/// Returns the config together with a note about which source was used, so the
/// caller can log it once logging is up.
pub fn resolve_config(override_toml: Option<&str>) -> (Config, String) {
    if let Some(contents) = override_toml {
        match toml::from_str::<Config>(contents) {
            Ok(config) => {
                let note = format!("Loading config from localStorage[{}]", CONFIG_STORAGE_KEY);
                return (config, note);
            }
            Err(e) => {
                let note = format!(
                    "Invalid config in localStorage[{}]: {}; using defaults",
                    CONFIG_STORAGE_KEY, e
                );
                return (default_config(), note);
            }
        }
    }
    (default_config(), "Using default embedded configuration".to_string())
}

/// Load configuration for the running page
///
/// Search order:
/// 1. `localStorage["shopcart_config"]` (full TOML document)
/// 2. Falls back to embedded default config
pub fn load_config() -> (Config, String) {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());
    resolve_config(stored.as_deref())
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

fn default_config() -> Config {
    match toml::from_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(_) => Config {
            api: ApiConfig {
                base_url: String::new(),
            },
            controller: ControllerConfig {
                item_support: default_item_support(),
                clear_mode: ClearMode::default(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        },
    }
}
