use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bullyscan::cli::CommandContext;
use bullyscan::cli::commands::{self, ResultsOptions};
use bullyscan::cli::ui::Output;
use bullyscan::config::ConfigOverrides;

#[derive(Parser)]
#[command(name = "bullyscan")]
#[command(
    version,
    about = "Cyberbullying detection client for a text classification service"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, env = "BULLYSCAN_SERVICE_URL", help = "Classifier base URL")]
    service_url: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    timeout: Option<u64>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single text (reads stdin when omitted)
    Text {
        #[arg(help = "Text to analyze")]
        text: Option<String>,
    },

    /// Upload a single-column CSV of texts for batch analysis
    Csv {
        #[arg(help = "CSV file with one text per row")]
        file: PathBuf,
        #[arg(long, short, help = "Save the processed CSV into this directory")]
        download: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Show the results view for an already labeled CSV
    View {
        #[arg(help = "Labeled CSV file (text,label)")]
        file: PathBuf,
        #[arg(long, short, help = "Save a copy of the CSV into this directory")]
        download: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Check that the classifier service is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mbullyscan encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let overrides = ConfigOverrides {
        service_url: cli.service_url,
        timeout_secs: cli.timeout,
    };

    // `config path` and `config init` must work even when the current config is broken
    if let Commands::Config { action } = &cli.command {
        match action {
            ConfigAction::Path => {
                commands::config::path()?;
                return Ok(());
            }
            ConfigAction::Init { global, force } => {
                let output = if cli.quiet { Output::quiet() } else { Output::new() };
                commands::config::init(&output, *global, *force)?;
                return Ok(());
            }
            ConfigAction::Show { .. } => {}
        }
    }

    let ctx = CommandContext::load(&overrides, cli.quiet)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Commands::Text { text } => {
            rt.block_on(commands::text::run(&ctx, text))?;
        }
        Commands::Csv {
            file,
            download,
            format,
        } => {
            let options = ResultsOptions {
                download_dir: download,
                format,
            };
            rt.block_on(commands::csv::run(&ctx, &file, &options))?;
        }
        Commands::View {
            file,
            download,
            format,
        } => {
            let options = ResultsOptions {
                download_dir: download,
                format,
            };
            rt.block_on(commands::view::run(&ctx, &file, &options))?;
        }
        Commands::Health => {
            rt.block_on(commands::health::run(&ctx))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                commands::config::show(&ctx, global, &format)?;
            }
            ConfigAction::Path | ConfigAction::Init { .. } => {}
        },
    }

    Ok(())
}
