use engine::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub tick_interval_ms: u32,
    pub cell_px: f32,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 1000 {
            return Err("tick_interval_ms must not exceed 1000".to_string());
        }
        if !(8.0..=64.0).contains(&self.cell_px) {
            return Err("cell_px must be between 8 and 64".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 120,
            cell_px: 24.0,
        }
    }
}
