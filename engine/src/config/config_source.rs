pub trait ConfigSource {
    /// Returns `Ok(None)` when no config exists and defaults apply.
    fn read(&self) -> Result<Option<String>, String>;
}

pub struct FileConfigSource {
    path: String,
}

impl FileConfigSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl ConfigSource for FileConfigSource {
    fn read(&self) -> Result<Option<String>, String> {
        let path = std::path::Path::new(&self.path);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(path)
            .map(Some)
            .map_err(|e| format!("Failed to read config file {}: {}", self.path, e))
    }
}
