/*!
 * Tests for application configuration functionality
 */

use plainspeak::app_config::{Config, LogLevel, OutputFormat, Variant};
use plainspeak::errors::ConfigError;
use plainspeak::ReadingLevel;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert!(config.translation.keep_terms);
    assert!(config.translation.highlight);
    assert_eq!(config.translation.reading_level, ReadingLevel::Simple);

    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.variants, Variant::ALL.to_vec());
    assert!(!config.output.show_meta);

    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.output.variants = vec![];
    assert_eq!(config.validate(), Err(ConfigError::NoVariants));

    config.output.variants = vec![Variant::Plain, Variant::Newbie, Variant::Plain];
    assert_eq!(
        config.validate(),
        Err(ConfigError::DuplicateVariant("plain".to_string()))
    );

    config.output.variants = vec![Variant::Newbie];
    assert!(config.validate().is_ok());
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("plainspeak.json");

    let config = Config::load_or_create(&config_path)?;

    assert_eq!(config, Config::default());
    assert!(config_path.exists());

    let reloaded = Config::load_or_create(&config_path)?;
    assert_eq!(reloaded, config);
    Ok(())
}

#[test]
fn test_loadOrCreate_withPartialFile_shouldFillDefaults() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "partial.json",
        r#"{ "translation": { "reading_level": "normal" }, "output": { "format": "json" } }"#,
    )?;

    let config = Config::load_or_create(&config_path)?;

    assert_eq!(config.translation.reading_level, ReadingLevel::Normal);
    assert!(config.translation.keep_terms);
    assert!(config.translation.highlight);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.variants, Variant::ALL.to_vec());
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

#[test]
fn test_loadOrCreate_withMalformedFile_shouldFail() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    let result = Config::load_or_create(&config_path);

    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_variant_fromStr_withAliases_shouldParse() {
    assert_eq!("plain".parse::<Variant>(), Ok(Variant::Plain));
    assert_eq!("X-Ready".parse::<Variant>(), Ok(Variant::XReady));
    assert_eq!("thread".parse::<Variant>(), Ok(Variant::XReady));
    assert_eq!(" newbie ".parse::<Variant>(), Ok(Variant::Newbie));
    assert_eq!(
        "tweet".parse::<Variant>(),
        Err(ConfigError::InvalidVariant("tweet".to_string()))
    );
}

#[test]
fn test_outputFormat_fromStr_shouldParseKnownFormats() {
    assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
    assert!("markdown".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Html.extension(), "html");
}

#[test]
fn test_readingLevel_fromStr_withUnknownLevel_shouldReturnConfigError() {
    assert_eq!(
        "expert".parse::<ReadingLevel>(),
        Err(ConfigError::InvalidReadingLevel("expert".to_string()))
    );
}

#[test]
fn test_logLevel_toLevelFilter_shouldMatchLogCrate() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

#[test]
fn test_config_serialization_shouldUseLowercaseEnums() -> anyhow::Result<()> {
    let json = serde_json::to_value(Config::default())?;

    assert_eq!(json["translation"]["reading_level"], "simple");
    assert_eq!(json["output"]["format"], "text");
    assert_eq!(json["output"]["variants"][1], "xready");
    assert_eq!(json["log_level"], "info");
    Ok(())
}
