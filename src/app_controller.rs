use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::Path;

use crate::app_config::{Config, OutputFormat, Variant};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::highlight::{render_highlighted_text, strip_highlight_markers};
use crate::rewrite::{TranslationResult, Translator};

// @module: Application controller for jargon translation

/// Text shown for every variant when there is nothing to translate
pub const EMPTY_OUTPUT: &str = "No output yet.";

/// Extension of input files picked up in folder mode
pub const INPUT_EXTENSION: &str = "txt";

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translator built from the configured options
    translator: Translator,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let translator = Translator::new(config.translation);

        Ok(Self { config, translator })
    }

    /// Configuration this controller runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate one input, refusing whitespace-only text
    pub fn translate_input(&self, text: &str) -> Result<TranslationResult, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Input("input is empty".to_string()));
        }

        Ok(self.translator.translate(text))
    }

    /// Result shown when the input is refused
    pub fn placeholder_result() -> TranslationResult {
        TranslationResult {
            plain: EMPTY_OUTPUT.to_string(),
            x_ready: EMPTY_OUTPUT.to_string(),
            newbie: EMPTY_OUTPUT.to_string(),
            ..Default::default()
        }
    }

    /// Translate text and render it in the configured format
    pub fn run_text(&self, text: &str) -> Result<String> {
        let result = match self.translate_input(text) {
            Ok(result) => result,
            Err(AppError::Input(reason)) => {
                warn!("Nothing to translate: {}", reason);
                Self::placeholder_result()
            }
            Err(e) => return Err(e.into()),
        };

        self.render(&result)
    }

    /// Render one variant of a result for display
    pub fn render_variant(&self, variant: Variant, result: &TranslationResult) -> String {
        let text = variant.select(result);
        match self.config.output.format {
            OutputFormat::Html => render_highlighted_text(text, self.config.translation.highlight),
            OutputFormat::Text | OutputFormat::Json => strip_highlight_markers(text),
        }
    }

    /// Render the configured variants of a result
    pub fn render(&self, result: &TranslationResult) -> Result<String> {
        if self.config.output.format == OutputFormat::Json {
            return serde_json::to_string_pretty(result)
                .context("Failed to serialize translation result");
        }

        let mut sections: Vec<String> = self
            .config
            .output
            .variants
            .iter()
            .map(|variant| format!("{}:\n{}", variant.display_name(), self.render_variant(*variant, result)))
            .collect();

        if self.config.output.show_meta {
            sections.push(format!(
                "Meta: two-layer={}, guardrail={}",
                result.meta.used_two_layer, result.meta.used_guardrail
            ));
        }

        Ok(sections.join("\n\n"))
    }

    /// Translate a file and write every configured variant next to it or into `output_dir`
    pub fn run_file(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<usize> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(output_dir)?;

        let text = FileManager::read_to_string(input_file)?;
        let result = match self.translate_input(&text) {
            Ok(result) => result,
            Err(AppError::Input(reason)) => {
                warn!("Skipping {:?}: {}", input_file, reason);
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };

        let outputs: Vec<(String, String)> = if self.config.output.format == OutputFormat::Json {
            vec![("result".to_string(), self.render(&result)?)]
        } else {
            self.config
                .output
                .variants
                .iter()
                .map(|variant| (variant.to_string(), self.render_variant(*variant, &result)))
                .collect()
        };

        let mut written = 0;
        for (name, content) in outputs {
            let output_path = FileManager::generate_output_path(
                input_file,
                output_dir,
                &name,
                self.config.output.format.extension(),
            );

            if output_path.exists() && !force_overwrite {
                warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_path);
                continue;
            }

            FileManager::write_to_file(&output_path, &content)?;
            debug!("Wrote {:?}", output_path);
            written += 1;
        }

        info!("Success: {:?} ({} output file(s))", input_file, written);
        Ok(written)
    }

    /// Translate every text file under a directory
    pub fn run_folder(&self, input_dir: &Path, output_dir: Option<&Path>, force_overwrite: bool) -> Result<usize> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files: Vec<_> = FileManager::find_files(input_dir, INPUT_EXTENSION)?
            .into_iter()
            .filter(|file| !is_generated_output(file))
            .collect();
        info!("Found {} input file(s) in {:?}", files.len(), input_dir);

        let mut processed_count = 0;
        for file in files {
            let target_dir = match output_dir {
                Some(dir) => dir.to_path_buf(),
                None => file.parent().unwrap_or(Path::new(".")).to_path_buf(),
            };

            match self.run_file(&file, &target_dir, force_overwrite) {
                Ok(_) => processed_count += 1,
                Err(e) => error!("Error processing file {:?}: {}", file, e),
            }
        }

        info!("Finished processing {} files", processed_count);
        Ok(processed_count)
    }
}

/// Whether a path looks like a file this controller wrote (`<stem>.<variant>.<ext>`)
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .map(Path::new)
        .and_then(|stem| stem.extension())
        .map(|inner| {
            let inner = inner.to_string_lossy();
            inner == "result" || Variant::ALL.iter().any(|variant| inner == variant.as_str())
        })
        .unwrap_or(false)
}
