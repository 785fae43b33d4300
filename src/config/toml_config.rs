use crate::core::ConfigProvider;
use crate::utils::error::{Result, TravelError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_WIKI_URL: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_COUNTRY: &str = "India";
pub const DEFAULT_USER_AGENT: &str = "SmartTravelAssistant/1.0";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_DATA_DIR: &str = "./travel-data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub geocoder_url: String,
    pub wiki_url: String,
    /// Appended to every geocoding query ("Goa" → "Goa,India").
    pub country: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            wiki_url: DEFAULT_WIKI_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TravelError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TravelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NOMINATIM_URL})，找不到就保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TravelError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("lookup.geocoder_url", &self.lookup.geocoder_url)?;
        validate_url("lookup.wiki_url", &self.lookup.wiki_url)?;
        validate_non_empty_string("lookup.user_agent", &self.lookup.user_agent)?;
        validate_positive_number("lookup.timeout_seconds", self.lookup.timeout_seconds, 1)?;
        validate_path("storage.data_dir", &self.storage.data_dir)?;
        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn geocoder_url(&self) -> &str {
        &self.lookup.geocoder_url
    }

    fn wiki_url(&self) -> &str {
        &self.lookup.wiki_url
    }

    fn country(&self) -> &str {
        &self.lookup.country
    }

    fn user_agent(&self) -> &str {
        &self.lookup.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.lookup.timeout_seconds
    }

    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
