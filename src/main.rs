// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use plainspeak::app_config::{self, Config, OutputFormat, Variant};
use plainspeak::rewrite::SAMPLE_INPUTS;
use plainspeak::{translate_text, Controller, ReadingLevel, TranslateOptions};

/// CLI Wrapper for ReadingLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliReadingLevel {
    Simple,
    Normal,
}

impl From<CliReadingLevel> for ReadingLevel {
    fn from(cli_level: CliReadingLevel) -> Self {
        match cli_level {
            CliReadingLevel::Simple => ReadingLevel::Simple,
            CliReadingLevel::Normal => ReadingLevel::Normal,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
    Html,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Html => OutputFormat::Html,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate jargon into plain language (default command)
    Translate(TranslateArgs),

    /// Run the built-in sample inputs through the pipeline
    Samples,

    /// Generate shell completions for plainspeak
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct TranslateArgs {
    /// Input text file, or a directory of .txt files (reads stdin when omitted)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Translate this text instead of reading a file
    #[arg(short = 't', long, conflicts_with = "input_path")]
    text: Option<String>,

    /// Reading level
    #[arg(short, long, value_enum)]
    reading_level: Option<CliReadingLevel>,

    /// Keep glossary terms in the x-ready variant
    #[arg(short, long, value_name = "BOOL")]
    keep_terms: Option<bool>,

    /// Highlight substituted definitions
    #[arg(long, value_name = "BOOL")]
    highlight: Option<bool>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Comma-separated variants to emit (plain, xready, newbie)
    #[arg(long, value_delimiter = ',')]
    variants: Vec<String>,

    /// Report which heuristics fired
    #[arg(long)]
    show_meta: bool,

    /// Write outputs to this directory instead of stdout
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "plainspeak.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// plainspeak - Jargon to plain language
///
/// Rewrites crypto and web3 jargon into a plain paragraph, a short-post
/// thread and a beginner version with tips.
#[derive(Parser, Debug)]
#[command(name = "plainspeak")]
#[command(version)]
#[command(about = "Rule-based jargon to plain language rewriter")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "plainspeak rewrites informal crypto jargon into plain language.

EXAMPLES:
    plainspeak notes.txt                          # Translate a file to stdout
    plainspeak -t \"gm, wagmi\"                     # Translate inline text
    echo \"ngmi\" | plainspeak                      # Translate stdin
    plainspeak -r normal --format json notes.txt  # Full result as JSON
    plainspeak -o out/ drafts/                    # Every .txt file in drafts/ into out/
    plainspeak samples                            # Run the built-in samples
    plainspeak completions bash > plainspeak.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in plainspeak.json by default. You can specify a
    different config file with --config-path. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: TranslateArgs,
}

// @struct: Custom stderr logger; filtering follows the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "plainspeak", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Samples) => run_samples(),
        Some(Commands::Translate(args)) => run_translate(args),
        None => run_translate(cli.args),
    }
}

fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let config = build_config(&options)?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)?;

    if let Some(text) = &options.text {
        return print_output(&controller.run_text(text)?);
    }

    match &options.input_path {
        Some(path) if path.is_dir() => {
            controller.run_folder(path, options.output_dir.as_deref(), options.force_overwrite)?;
            Ok(())
        }
        Some(path) if path.is_file() => match &options.output_dir {
            Some(output_dir) => {
                controller.run_file(path, output_dir, options.force_overwrite)?;
                Ok(())
            }
            None => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file: {:?}", path))?;
                print_output(&controller.run_text(&text)?)
            }
        },
        Some(path) => Err(anyhow!("Input path does not exist: {:?}", path)),
        None => {
            debug!("No input path given, reading stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            print_output(&controller.run_text(&text)?)
        }
    }
}

/// Load the config file and apply command-line overrides
fn build_config(options: &TranslateArgs) -> Result<Config> {
    let mut config = Config::load_or_create(Path::new(&options.config_path))?;

    if let Some(level) = &options.reading_level {
        config.translation.reading_level = level.clone().into();
    }

    if let Some(keep_terms) = options.keep_terms {
        config.translation.keep_terms = keep_terms;
    }

    if let Some(highlight) = options.highlight {
        config.translation.highlight = highlight;
    }

    if let Some(format) = &options.format {
        config.output.format = format.clone().into();
    }

    if !options.variants.is_empty() {
        config.output.variants = options
            .variants
            .iter()
            .map(|name| name.parse::<Variant>())
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid --variants value")?;
    }

    if options.show_meta {
        config.output.show_meta = true;
    }

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    Ok(config)
}

fn print_output(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write to stdout")?;
    Ok(())
}

fn run_samples() -> Result<()> {
    let options = TranslateOptions::new(true, false, ReadingLevel::Simple);
    info!("Running {} sample inputs", SAMPLE_INPUTS.len());

    for sample in SAMPLE_INPUTS {
        let result = translate_text(sample, &options);

        if !result.meta.used_two_layer && !result.meta.used_guardrail {
            warn!("Sample triggered no heuristics: {}", sample);
        }

        print_output(&format!(
            "Jargon to Human sample\nInput: {}\nPlain: {}\nX-ready: {}\nNewbie: {}\n",
            sample, result.plain, result.x_ready, result.newbie
        ))?;
    }

    Ok(())
}
