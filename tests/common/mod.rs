/*!
 * Common test utilities for the plainspeak test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use plainspeak::app_config::{Config, OutputFormat, Variant};

/// Routes library logs to the test harness, once per process
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a jargon-heavy input file for testing
pub fn create_jargon_file(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, "Account abstraction improves wallet UX")
}

/// Builds a config with the given format and variants, other settings default
pub fn config_with_output(format: OutputFormat, variants: &[Variant]) -> Config {
    let mut config = Config::default();
    config.output.format = format;
    config.output.variants = variants.to_vec();
    config
}
