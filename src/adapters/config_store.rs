//! In-memory configuration store.
//!
//! Implements [`ConfigPort`] by keeping the config as a `postcard` blob
//! under a namespaced key, the way a head-unit persistent store would.
//! Every save is validated first; invalid values are rejected, never
//! clamped.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::PanelConfig;

const CONFIG_NAMESPACE: &str = "climate";
const CONFIG_KEY: &str = "panelcfg";

#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    store: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn composite_key(namespace: &str, key: &str) -> String {
        format!("{}::{}", namespace, key)
    }

    /// Parse a JSON document, validate it and persist it.
    pub fn import_json(&self, json: &str) -> Result<PanelConfig, ConfigError> {
        let config: PanelConfig = serde_json::from_str(json).map_err(|e| {
            warn!("MemoryConfigStore: rejected JSON config: {}", e);
            ConfigError::Corrupted
        })?;
        self.save(&config)?;
        Ok(config)
    }

    /// Overwrite the stored blob verbatim (bypasses validation).
    pub fn write_raw(&self, bytes: Vec<u8>) {
        let key = Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY);
        self.store.borrow_mut().insert(key, bytes);
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }
}

impl ConfigPort for MemoryConfigStore {
    fn load(&self) -> Result<PanelConfig, ConfigError> {
        let key = Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY);
        match self.store.borrow().get(&key) {
            Some(bytes) => {
                let cfg: PanelConfig =
                    postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
                info!("MemoryConfigStore: loaded config ({} bytes)", bytes.len());
                Ok(cfg)
            }
            None => {
                info!("MemoryConfigStore: no stored config, using defaults");
                Ok(PanelConfig::default())
            }
        }
    }

    fn save(&self, config: &PanelConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let bytes = postcard::to_allocvec(config).map_err(|_| ConfigError::IoError)?;
        let key = Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY);
        self.store.borrow_mut().insert(key, bytes);
        info!("MemoryConfigStore: config saved");
        Ok(())
    }
}
