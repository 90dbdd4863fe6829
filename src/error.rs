use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteLintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Site root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("No HTML files found in {}", root.display())]
    NoInputFiles { root: PathBuf },

    #[error("Unknown rule code: {0}")]
    UnknownRule(String),
}

impl SiteLintError {
    /// Short category label used as the heading of printed errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::UnknownRule(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::JsonSerialize(_) => "Output",
            Self::RootNotFound(_) | Self::NoInputFiles { .. } => "Discovery",
        }
    }

    /// Actionable hint printed under the error, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NoInputFiles { .. } | Self::RootNotFound(_) => {
                Some("Build the site first, or pass the output directory as ROOT")
            }
            Self::UnknownRule(_) => Some("Run `site-lint rules` to list valid rule codes"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
