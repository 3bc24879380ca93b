use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::domain::types::LangCode;

/// Prefix of environment variables overriding file settings,
/// e.g. `SHOWROOM_DATABASE_URL`.
pub const ENV_PREFIX: &str = "SHOWROOM";

/// Configuration options for content composition.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// SQLite database path handed to the connection pool.
    pub database_url: String,
    /// Directory holding one `<locale>.json` dictionary per language.
    pub dictionaries_dir: PathBuf,
    /// Locale used when a request names none or an unsupported one.
    pub default_locale: LangCode,
    /// Locales with both catalog content and a dictionary.
    pub supported_locales: Vec<LangCode>,
}

impl ContentConfig {
    /// Load settings from an optional YAML file, then apply `SHOWROOM_*`
    /// environment overrides. A `.env` file is read first if present.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = path.as_ref().to_string_lossy();
        Config::builder()
            .set_default("database_url", "showroom.db")?
            .set_default("dictionaries_dir", "locales")?
            .set_default("default_locale", "en")?
            .set_default("supported_locales", vec!["en"])?
            .add_source(File::new(&path, FileFormat::Yaml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("supported_locales"),
            )
            .build()?
            .try_deserialize()
    }

    /// Whether content exists for `locale`. The default locale is always supported.
    pub fn is_supported(&self, locale: &LangCode) -> bool {
        *locale == self.default_locale || self.supported_locales.contains(locale)
    }

    /// Pick the locale to serve for a request, falling back to the default
    /// when the requested value is missing, malformed or unsupported.
    pub fn resolve_locale(&self, requested: Option<&str>) -> LangCode {
        requested
            .and_then(|value| LangCode::new(value).ok())
            .filter(|locale| self.is_supported(locale))
            .unwrap_or_else(|| self.default_locale.clone())
    }
}
