//! Catalog browser configuration
//!
//! The embedded TOML document is the only source of default values. A partial
//! override can be stored in `localStorage` under [`CONFIG_STORAGE_KEY`]; it
//! is merged over the defaults table before deserializing, so keys it omits
//! keep their default values.

use serde::Deserialize;

pub const CONFIG_STORAGE_KEY: &str = "catalog.config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub api: ApiConfig,
    pub catalog: ListConfig,
    pub search: SearchConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// List endpoint; detail records live at `<endpoint>/<name>`
    pub endpoint: String,
    /// Upper bound requested from the list endpoint in a single call
    pub list_limit: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    pub debounce_ms: u32,
    pub suggestion_limit: usize,
    /// Trimmed term length from which an empty result shows "no matches"
    pub no_match_min_len: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MediaConfig {
    /// `{id}` is replaced with the numeric species id
    pub sprite_url_template: String,
    pub fallback_image: String,
    pub speech_lang: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
endpoint = "https://pokeapi.co/api/v2/pokemon"
list_limit = 2000

[catalog]
page_size = 20

[search]
debounce_ms = 300
suggestion_limit = 7
no_match_min_len = 2

[media]
sprite_url_template = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png"
fallback_image = "/pokeball.svg"
speech_lang = "en"
"#;

impl CatalogConfig {
    pub fn sprite_url(&self, id: u32) -> String {
        self.media
            .sprite_url_template
            .replace("{id}", &id.to_string())
    }

    // A zero page size or suggestion limit would make the list unusable.
    fn sanitized(mut self, defaults: &CatalogConfig) -> Self {
        if self.catalog.page_size == 0 {
            self.catalog.page_size = defaults.catalog.page_size;
        }
        if self.search.suggestion_limit == 0 {
            self.search.suggestion_limit = defaults.search.suggestion_limit;
        }
        self
    }
}

/// Overlay `overlay` onto `base`, descending into tables present in both
fn merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(overlay_table) = value {
            if let Some(toml::Value::Table(base_table)) = base.get_mut(&key) {
                merge(base_table, overlay_table);
            } else {
                base.insert(key, toml::Value::Table(overlay_table));
            }
        } else {
            base.insert(key, value);
        }
    }
}

/// The embedded configuration, with no override applied
pub fn default_config() -> Result<CatalogConfig, toml::de::Error> {
    toml::from_str(DEFAULT_CONFIG)
}

/// Parse a partial override on top of the embedded defaults
pub fn parse_config(contents: &str) -> Result<CatalogConfig, toml::de::Error> {
    let mut table: toml::Table = DEFAULT_CONFIG.parse()?;
    merge(&mut table, contents.parse()?);
    let config: CatalogConfig = toml::Value::Table(table).try_into()?;
    Ok(config.sanitized(&default_config()?))
}

/// Load configuration for this session
///
/// Search order:
/// 1. `localStorage["catalog.config"]`, merged over the embedded defaults
/// 2. Falls back to the embedded default config
pub fn load_config() -> Result<CatalogConfig, toml::de::Error> {
    if let Some(contents) = stored_override() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded catalog config override from localStorage");
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid catalog config override: {}", e),
        }
    }
    default_config()
}

fn stored_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}
