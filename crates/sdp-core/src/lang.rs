use crate::error::{Result, SdpError};
use crate::io;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output language for the generated planning documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    pub const DEFAULT_CODE: &'static str = "en";

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }
}

impl FromStr for Language {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Language::En),
            "ja" => Ok(Language::Ja),
            other => Err(SdpError::InvalidLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// LanguageConfig
// ---------------------------------------------------------------------------

/// The single generated config artifact: `.sdp/config/language.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub language: Language,
}

impl LanguageConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: LanguageConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Write the file, unconditionally replacing any prior content.
    pub fn save(&self, path: &Path) -> Result<()> {
        let body = serde_yaml::to_string(self)?;
        let content = format!(
            "# SDP output language for generated planning documents.\n\
             # Supported codes: en, ja\n\
             {body}"
        );
        io::atomic_write(path, content.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
