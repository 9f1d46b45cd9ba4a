// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use tanzil_importer::app_config::{self, Config, OutputFormat};
use tanzil_importer::file_utils::FileManager;
use tanzil_importer::{Controller, TranslationOverrides};

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

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Json,
    Rows,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Rows => OutputFormat::Rows,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert the Tanzil Quran XML text
    Quran {
        /// Tanzil Quran XML file
        #[arg(value_name = "XML_PATH")]
        input_path: PathBuf,

        /// Mushaf short name, also the output file name
        #[arg(long)]
        short_name: Option<String>,

        /// Mushaf full name
        #[arg(long)]
        full_name: Option<String>,

        /// Mushaf source label
        #[arg(long)]
        source: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Convert one Tanzil translation XML file
    Translation {
        /// Translation file named `{language}.{author}.xml`
        #[arg(value_name = "XML_PATH")]
        input_path: PathBuf,

        /// Short name of the mushaf the translation belongs to
        #[arg(long)]
        mushaf: Option<String>,

        /// Language code, instead of the one in the file name
        #[arg(long)]
        language: Option<String>,

        /// Translator username, instead of the one in the file name
        #[arg(long)]
        author: Option<String>,

        /// Release date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_release_date)]
        release_date: Option<NaiveDate>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Convert every translation file in a directory
    TranslationBulk {
        /// Directory of `{language}.{author}.xml` files
        #[arg(value_name = "DIR")]
        input_dir: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "translations")]
        output_dir: PathBuf,

        /// Short name of the mushaf the translations belong to
        #[arg(long)]
        mushaf: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Tanzil Importer - normalize the Tanzil Quran text and translations
#[derive(Parser, Debug)]
#[command(name = "tanzil-importer")]
#[command(version)]
#[command(about = "Normalize Tanzil Quran XML and translations into JSON or table rows")]
#[command(long_about = "Tanzil Importer verifies the Tanzil Quran XML against its pinned release digest,
parses it into surahs, ayahs and words, and converts translation files aligned to the same coordinates.

EXAMPLES:
    tanzil-importer quran quran-simple.xml                  # Write hafs.json
    tanzil-importer --pretty quran quran-simple.xml         # Indented output
    tanzil-importer --format rows quran quran-simple.xml    # Row batches in hafs.rows.json
    tanzil-importer translation en.sahih.xml                # Write en.sahih.json
    tanzil-importer translation-bulk ./translations -o out  # Convert a whole directory
    tanzil-importer completions bash > tanzil.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<CliOutputFormat>,

    /// Indent the rendered JSON
    #[arg(long, global = true)]
    pretty: bool,
}

fn parse_release_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", value, e))
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

    // @returns: ANSI colour for log level
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // The logger accepts everything; the effective level is set below
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "tanzil-importer", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(to_level_filter(&config.log_level));

    match cli.command {
        Commands::Quran {
            input_path,
            short_name,
            full_name,
            source,
            output_dir,
        } => {
            let mut config = config;
            if let Some(short_name) = short_name {
                config.mushaf.short_name = short_name;
            }
            if let Some(full_name) = full_name {
                config.mushaf.full_name = full_name;
            }
            if let Some(source) = source {
                config.mushaf.source = source;
            }

            let controller = Controller::with_config(config)?;
            controller.run_quran(&input_path, &output_dir)?;
        }
        Commands::Translation {
            input_path,
            mushaf,
            language,
            author,
            release_date,
            output_dir,
        } => {
            let controller = Controller::with_config(config)?;
            let overrides = TranslationOverrides {
                mushaf,
                language,
                author,
                release_date,
            };
            let translation_id = controller.config().translation.first_translation_id;
            controller.run_translation(&input_path, &output_dir, &overrides, translation_id)?;
        }
        Commands::TranslationBulk {
            input_dir,
            output_dir,
            mushaf,
        } => {
            if !FileManager::dir_exists(&input_dir) {
                return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
            }

            let controller = Controller::with_config(config)?;
            let report = controller.run_translation_bulk(&input_dir, &output_dir, mushaf.as_deref())?;

            info!("Successfully imported translations: {}", report.written.len());
            if !report.is_success() {
                return Err(anyhow!(
                    "{} translation file(s) failed, see the errors above",
                    report.failures.len()
                ));
            }
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Load the config file (or write the default one), then apply CLI overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = Path::new(&cli.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", cli.config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)?;
        if let Err(e) = std::fs::write(config_path, config_json) {
            warn!("Failed to write default config to '{}': {}", cli.config_path, e);
        }
        config
    };

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(format) = &cli.format {
        config.output.format = format.clone().into();
    }
    if cli.pretty {
        config.output.pretty = true;
    }

    config.validate()?;
    Ok(config)
}
