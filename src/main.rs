// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::Write;
use std::path::Path;

use yatwai::app_config::{self, Config};
use yatwai::translation_service::TranslationService;

/// CLI wrapper for the input type selector
#[derive(Debug, Clone, ValueEnum)]
enum CliInputType {
    Text,
    Document,
    Html,
}

/// CLI wrapper for LogLevel to implement ValueEnum
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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text, a document or a web page (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for yatwai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text, file path or URL to translate, interpreted per --type
    #[arg(value_name = "INPUT")]
    input: String,

    /// Target language label passed verbatim into the translation prompt
    #[arg(short, long, default_value = "português")]
    language: String,

    /// Type of content to translate
    #[arg(short = 't', long = "type", value_enum, default_value = "text")]
    input_type: CliInputType,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Inference endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// yatwai - Yet Another Translation With AI
///
/// Translates plain text, document paragraphs or webpage text nodes using
/// an LLM completion endpoint.
#[derive(Parser, Debug)]
#[command(name = "yatwai")]
#[command(author = "yatwai team")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered multi-format translation tool")]
#[command(long_about = "yatwai translates plain text, document paragraphs or webpage text nodes
using an LLM completion endpoint.

EXAMPLES:
    yatwai \"Good morning\"                     # Translate a string (default: português)
    yatwai -l français \"Good morning\"         # Translate to another language
    yatwai -t document report.docx            # Translate a document paragraph by paragraph
    yatwai -t html example.com/page           # Translate a page's text nodes
    yatwai -m gpt-4o -t text \"Good morning\"   # Use a specific model
    yatwai completions bash > yatwai.bash     # Generate bash completions

CONFIGURATION:
    The provider credential is read from the GITHUB_TOKEN environment
    variable; the process fails fast when it is missing. The endpoint and
    model default to the GitHub Models inference service and can be
    overridden with --endpoint and --model.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text, file path or URL to translate, interpreted per --type
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Target language label passed verbatim into the translation prompt
    #[arg(short, long, default_value = "português")]
    language: String,

    /// Type of content to translate
    #[arg(short = 't', long = "type", value_enum, default_value = "text")]
    input_type: CliInputType,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Inference endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Glyph for log level
    fn glyph_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color prefix for log level
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
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let glyph = Self::glyph_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, glyph, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // Initialize the logger once with info level by default
    // The level is updated after the CLI and config are read
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    let outcome = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "yatwai", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            match cli.input {
                Some(input) => {
                    let translate_args = TranslateArgs {
                        input,
                        language: cli.language,
                        input_type: cli.input_type,
                        model: cli.model,
                        endpoint: cli.endpoint,
                        log_level: cli.log_level,
                    };
                    run_translate(translate_args).await
                }
                None => Err(anyhow!("INPUT is required when no subcommand is specified")),
            }
        }
    };

    // The single print-and-terminate point for every error kind
    if let Err(e) = outcome {
        error!("An error was encountered: {}", e);
        std::process::exit(1);
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load configuration from the environment, then apply CLI overrides
    let mut config = Config::from_env()?;

    if let Some(model) = &options.model {
        config.model = model.clone();
    }

    if let Some(endpoint) = &options.endpoint {
        config.endpoint = endpoint.clone();
    }

    // If log level was not set via command line, take it from the config
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let service = TranslationService::new(&config)?;

    match options.input_type {
        CliInputType::Text => {
            let result = service
                .translate_text(&options.input, &options.language)
                .await?;

            println!("\nTranslation: {}\n", result);
        }
        CliInputType::Document => {
            let paragraphs = service
                .translate_document(Path::new(&options.input), &options.language)
                .await?;

            println!("\nTranslated document content:\n");
            for (i, paragraph) in paragraphs.iter().enumerate() {
                println!("Paragraph {}:", i + 1);
                println!("{}\n", paragraph);
            }
        }
        CliInputType::Html => {
            let translations = service
                .translate_site(&options.input, &options.language)
                .await?;

            println!("\nTranslations for {}:\n", options.input);
            for item in &translations {
                println!("Tag <{}>:", item.tag);
                println!("Original: {}", item.original);
                println!("Translation: {}", item.translated);
                println!("{}\n", "-".repeat(80));
            }
        }
    }

    Ok(())
}
