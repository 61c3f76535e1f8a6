use crate::error::{Error, Result};
use crate::widgets::components::dropdown::{
    DEFAULT_DELAY, DEFAULT_MAX_VISIBLE, DEFAULT_WIDTH, DropdownConfig,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// On-disk widget configuration.
///
/// ```yaml
/// placeholder: Enter search
/// delay_ms: 400
/// words:
///   - Carolus Haverbeke
///   - Agnes Obel
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub placeholder: String,
    pub delay_ms: u64,
    pub width: u16,
    pub max_visible: usize,
    pub words: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder: "Enter search".to_string(),
            delay_ms: u64::try_from(DEFAULT_DELAY.as_millis()).unwrap_or(u64::MAX),
            width: DEFAULT_WIDTH,
            max_visible: DEFAULT_MAX_VISIBLE,
            words: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn dropdown_config(&self) -> DropdownConfig {
        DropdownConfig::new(self.words.clone())
            .with_placeholder(self.placeholder.clone())
            .with_delay(self.delay())
            .with_width(self.width)
            .with_max_visible(self.max_visible)
    }
}

/// One word per line; blank lines are skipped and surrounding whitespace
/// trimmed.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Words {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&text))
}

pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
