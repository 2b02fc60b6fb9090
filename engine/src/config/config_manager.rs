use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use super::{ConfigSource, FileConfigSource, Validate};

/// Loads a YAML config once and caches it; an absent file falls back to
/// the type's defaults, a malformed or invalid one is an error.
pub struct ConfigManager<TConfig, TSource = FileConfigSource>
where
    TConfig: Clone + DeserializeOwned + Validate + Default,
    TSource: ConfigSource,
{
    source: TSource,
    cached: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<TConfig, FileConfigSource>
where
    TConfig: Clone + DeserializeOwned + Validate + Default,
{
    pub fn from_yaml_file(path: &str) -> Self {
        Self::new(FileConfigSource::new(path.to_string()))
    }
}

impl<TConfig, TSource> ConfigManager<TConfig, TSource>
where
    TConfig: Clone + DeserializeOwned + Validate + Default,
    TSource: ConfigSource,
{
    pub fn new(source: TSource) -> Self {
        Self {
            source,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let config = match self.source.read()? {
            Some(content) => {
                let config: TConfig = serde_yaml_ng::from_str(&content)
                    .map_err(|e| format!("Failed to parse config: {}", e))?;
                config
                    .validate()
                    .map_err(|e| format!("Config validation error: {}", e))?;
                config
            }
            None => TConfig::default(),
        };

        *cached = Some(config.clone());
        Ok(config)
    }
}
