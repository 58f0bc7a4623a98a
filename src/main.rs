// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{LogLevel, ProviderPreference, Settings};
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod language_utils;
mod lookup;
mod providers;

/// CLI Wrapper for ProviderPreference to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProviderPreference {
    Auto,
    #[value(name = "libretranslate")]
    LibreTranslate,
    #[value(name = "mymemory")]
    MyMemory,
}

impl From<CliProviderPreference> for ProviderPreference {
    fn from(cli_preference: CliProviderPreference) -> Self {
        match cli_preference {
            CliProviderPreference::Auto => ProviderPreference::Auto,
            CliProviderPreference::LibreTranslate => ProviderPreference::LibreTranslate,
            CliProviderPreference::MyMemory => ProviderPreference::MyMemory,
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

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for wordglance
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
#[command(name = "wordglance", version, about = "Inline translation and dictionary lookup for English text", long_about = "\
Translate a piece of English text and, for single words, fetch the IPA
transcription and a pronunciation audio URL.

EXAMPLES:
    wordglance serendipity                     # Word: translation + phonetics
    wordglance \"a piece of cake\"               # Phrase: translation only
    wordglance -p mymemory hello               # Pin a single provider
    wordglance --json serendipity              # Raw response envelope
    wordglance completions bash > wg.bash      # Generate bash completions

CONFIGURATION:
    Settings are read from the platform config directory
    (wordglance/settings.json) or the file given with --config. A missing or
    malformed file silently falls back to the defaults.

PROVIDERS:
    libretranslate - LibreTranslate-compatible JSON API
    mymemory       - MyMemory translation memory API
    auto           - LibreTranslate first, MyMemory as fallback (default)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Treat the text as a single word (default: detected from the text)
    #[arg(short, long)]
    word: bool,

    /// Translation provider preference
    #[arg(short, long, value_enum)]
    provider: Option<CliProviderPreference>,

    /// Source language tag (e.g. 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language tag (e.g. 'zh-CN', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Settings file path
    #[arg(short, long = "config")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the raw response envelope as JSON
    #[arg(short, long)]
    json: bool,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after settings are resolved
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        return Ok(());
    }

    let Some(text) = cli.text else {
        return Err(anyhow!("No text given. Try: wordglance <TEXT>"));
    };

    let config_path = cli
        .config_path
        .unwrap_or_else(Settings::default_path);
    let mut settings = Settings::resolve(&config_path);

    // Command line overrides
    if let Some(preference) = cli.provider {
        settings.provider_preference = preference.into();
    }
    if let Some(source) = cli.source_language {
        settings.source_language = source;
    }
    if let Some(target) = cli.target_language {
        settings.target_language = target;
    }
    if let Some(level) = cli.log_level {
        settings.log_level = level.into();
    }

    log::set_max_level(match settings.log_level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    });

    if let Err(e) = settings.validate() {
        warn!("Settings problem: {}", e);
    }

    let is_word = if cli.word { Some(true) } else { None };
    let controller = Controller::new(settings);
    let response = controller.lookup(&text, is_word).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if let (Some(translation), Some(provider)) = (&response.translation, &response.provider_name) {
        println!("{}  (via {})", translation, provider);
    }
    if let Some(dict) = &response.dict {
        if let Some(ipa) = &dict.ipa {
            println!("IPA:   {}", ipa);
        }
        if let Some(audio_url) = &dict.audio_url {
            println!("Audio: {}", audio_url);
        }
    }

    if !response.success {
        let message = response
            .error_message
            .unwrap_or_else(|| "Lookup failed".to_string());
        return Err(anyhow!(message));
    }

    Ok(())
}
