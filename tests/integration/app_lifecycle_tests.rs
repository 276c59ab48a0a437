/*!
 * Integration tests for the full application lifecycle
 */

use anyhow::Result;
use plainspeak::app_config::{Config, OutputFormat, Variant};
use plainspeak::{Controller, ReadingLevel};

use crate::common;

/// Test the config-to-output flow the command line runs
#[test]
fn test_app_lifecycle_withConfigFileAndOverrides_shouldTranslateFolder() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("drafts");
    let output_dir = temp_dir.path().join("plain");
    std::fs::create_dir(&input_dir)?;

    common::create_jargon_file(&input_dir, "first.txt")?;
    common::create_test_file(&input_dir, "second.txt", "ngmi, dyor before you ape in")?;
    common::create_test_file(&input_dir, "notes.md", "not picked up")?;

    let config_path = temp_dir.path().join("plainspeak.json");
    let mut config = Config::load_or_create(&config_path)?;
    config.translation.reading_level = ReadingLevel::Normal;
    config.output.variants = vec![Variant::Plain, Variant::Newbie];
    config.validate()?;

    let controller = Controller::with_config(config)?;
    let processed = controller.run_folder(&input_dir, Some(output_dir.as_path()), false)?;

    assert_eq!(processed, 2);
    assert!(output_dir.join("first.plain.txt").exists());
    assert!(output_dir.join("first.newbie.txt").exists());
    assert!(!output_dir.join("first.xready.txt").exists());
    assert!(!output_dir.join("notes.plain.txt").exists());

    let second = std::fs::read_to_string(output_dir.join("second.plain.txt"))?;
    assert_eq!(
        second,
        "not going to make it, do your own research before you buy quickly without much research"
    );
    Ok(())
}

#[test]
fn test_app_lifecycle_withInPlaceOutputs_shouldNotRetranslateGeneratedFiles() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path();
    common::create_test_file(input_dir, "post.txt", "wen airdrop")?;

    let controller = Controller::with_config(Config::default())?;

    assert_eq!(controller.run_folder(input_dir, None, false)?, 1);
    assert!(input_dir.join("post.plain.txt").exists());
    assert!(input_dir.join("post.xready.txt").exists());

    // Second pass sees the generated files but skips them
    assert_eq!(controller.run_folder(input_dir, None, false)?, 1);
    assert!(!input_dir.join("post.plain.plain.txt").exists());
    Ok(())
}

#[test]
fn test_app_lifecycle_withHtmlFolderRun_shouldWriteHtmlFiles() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("in");
    std::fs::create_dir(&input_dir)?;
    common::create_test_file(&input_dir, "whale.txt", "the whale & the dex")?;

    let config = common::config_with_output(OutputFormat::Html, &[Variant::Plain]);
    let controller = Controller::with_config(config)?;
    controller.run_folder(&input_dir, Some(temp_dir.path().join("out").as_path()), false)?;

    let html = std::fs::read_to_string(temp_dir.path().join("out").join("whale.plain.html"))?;
    assert!(html.contains("&amp;"));
    assert!(html.contains("<mark"));
    assert!(!html.contains("[[H]]"));
    Ok(())
}

#[test]
fn test_app_lifecycle_withMissingFolder_shouldFail() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    assert!(controller
        .run_folder(&temp_dir.path().join("absent"), None, false)
        .is_err());
    Ok(())
}
