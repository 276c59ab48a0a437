use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::rewrite::{TranslateOptions, TranslationResult};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Pipeline options
    #[serde(default)]
    pub translation: TranslateOptions,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// How results are printed or written
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Raw text, one section per variant
    #[default]
    Text,
    // @format: The full result as JSON
    Json,
    // @format: Display markup from the highlight renderer
    Html,
}

impl OutputFormat {
    // @returns: Lowercase format identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    // @returns: File extension for written outputs
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// One of the three rendered variants
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    // @variant: Plain-language paragraph
    Plain,
    // @variant: Short-post thread
    XReady,
    // @variant: Plain text with beginner tips
    Newbie,
}

impl Variant {
    /// All variants in display order
    pub const ALL: [Variant; 3] = [Variant::Plain, Variant::XReady, Variant::Newbie];

    // @returns: Lowercase variant identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::XReady => "xready",
            Self::Newbie => "newbie",
        }
    }

    // @returns: Section heading for text output
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::XReady => "X-ready",
            Self::Newbie => "Newbie",
        }
    }

    // @returns: The matching rendered string of a result
    pub fn select<'a>(&self, result: &'a TranslationResult) -> &'a str {
        match self {
            Self::Plain => &result.plain,
            Self::XReady => &result.x_ready,
            Self::Newbie => &result.newbie,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "xready" | "x-ready" | "thread" => Ok(Self::XReady),
            "newbie" => Ok(Self::Newbie),
            _ => Err(ConfigError::InvalidVariant(s.to_string())),
        }
    }
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Variants to emit, in order
    #[serde(default = "default_variants")]
    pub variants: Vec<Variant>,

    /// Whether to report which heuristics fired
    #[serde(default)]
    pub show_meta: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            variants: default_variants(),
            show_meta: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_variants() -> Vec<Variant> {
    Variant::ALL.to_vec()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.variants.is_empty() {
            return Err(ConfigError::NoVariants);
        }

        let mut seen = std::collections::HashSet::new();
        for variant in &self.output.variants {
            if !seen.insert(variant) {
                return Err(ConfigError::DuplicateVariant(variant.to_string()));
            }
        }

        Ok(())
    }

    /// Load a configuration file, writing a default one if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            translation: TranslateOptions::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
