use anyhow::{bail, Result};
use serde::Deserialize;

use crate::domain::view::list_view::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_UPLOAD_URL: &str = "https://jsonplaceholder.typicode.com/posts";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub upload_url: String,
    pub page_size: usize,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        if self.api_base_url.trim().is_empty() {
            bail!("api_base_url is required");
        }
        if self.upload_url.trim().is_empty() {
            bail!("upload_url is required");
        }
        Ok(())
    }

    /// Applies `USERS_*` overrides from a variable lookup.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("USERS_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(url) = lookup("USERS_UPLOAD_URL") {
            self.upload_url = url;
        }
        if let Some(size) = lookup("USERS_PAGE_SIZE") {
            self.page_size = match size.trim().parse() {
                Ok(size) => size,
                Err(_) => bail!("USERS_PAGE_SIZE is not a number: {size}"),
            };
        }
        self.validate()?;
        Ok(self)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::{Path, PathBuf};

    use anyhow::{anyhow, Context, Result};
    use directories::ProjectDirs;

    use super::AppConfig;

    pub fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "wana", "users-console")
            .ok_or_else(|| anyhow!("unable to resolve config directory"))?;
        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// A missing file means defaults.
    pub fn load_config_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        AppConfig::from_json(&text)
            .with_context(|| format!("invalid config: {}", path.display()))
    }

    pub fn load() -> Result<AppConfig> {
        let path = default_config_path()?;
        load_config_file(&path)?.apply_overrides(|key| std::env::var(key).ok())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{default_config_path, load_config_file};

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<AppConfig> {
    native::load()
}

#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<AppConfig> {
    Ok(AppConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_json(r#"{"page_size": 25}"#).expect("config should parse");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = AppConfig::from_json(r#"{"page_size": 0}"#).expect_err("page_size 0 should fail");
        assert!(
            err.to_string().contains("page_size"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = AppConfig::default()
            .apply_overrides(|key| match key {
                "USERS_API_BASE_URL" => Some("http://localhost:3000".to_string()),
                "USERS_PAGE_SIZE" => Some("5".to_string()),
                _ => None,
            })
            .expect("overrides should apply");

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.upload_url, DEFAULT_UPLOAD_URL);
    }

    #[test]
    fn non_numeric_page_size_override_fails() {
        let result = AppConfig::default().apply_overrides(|key| {
            (key == "USERS_PAGE_SIZE").then(|| "ten".to_string())
        });
        assert!(result.is_err());
    }
}
