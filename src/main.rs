use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use osv_viewer::{
    config::Config,
    output::{print_source_detail, print_sources, OutputFormat, Style},
    Report, ReportViewer, ViewerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
    pub const NOT_FOUND: u8 = 2;
}

#[derive(Parser)]
#[command(name = "osv-viewer")]
#[command(author, version, about = "Browse osv-scanner JSON reports from the terminal")]
struct Cli {
    /// osv-scanner output JSON file
    #[arg(long = "in", value_name = "FILE", global = true)]
    input: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sources
    Sources {
        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List all vulnerabilities of a source
    Show {
        /// Source id, as printed by `sources`
        #[arg(value_name = "SOURCE_ID")]
        id: String,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn run() -> Result<u8> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: ignoring config file {}: {}",
            Config::config_path().display(),
            e
        );
        Config::default()
    });
    let color = config.color && !cli.no_color;

    init_logging(cli.verbose, color);

    match cli.command {
        Commands::Sources { format } => {
            let format = resolve_format(format, &config)?;
            let report = load_report(cli.input, &config)?;
            let listing = ReportViewer::new(&report).sources();
            print_sources(&listing, format)?;
            Ok(exit_codes::SUCCESS)
        }
        Commands::Show { id, format } => {
            let format = resolve_format(format, &config)?;
            let report = load_report(cli.input, &config)?;
            match ReportViewer::new(&report).show(&id) {
                Ok(detail) => {
                    print_source_detail(&detail, format, Style { color })?;
                    Ok(exit_codes::SUCCESS)
                }
                Err(e @ ViewerError::NotFound { .. }) => {
                    eprintln!("Error: {}", e);
                    Ok(exit_codes::NOT_FOUND)
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8, color: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(color)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_format(flag: Option<String>, config: &Config) -> Result<OutputFormat> {
    let format = flag.unwrap_or_else(|| config.default_format.clone());
    OutputFormat::from_str(&format).map_err(|e| anyhow::anyhow!(e))
}

fn load_report(input: Option<PathBuf>, config: &Config) -> Result<Report> {
    let Some(path) = input.or_else(|| config.report.clone()) else {
        bail!(
            "no report given: pass --in <FILE> or set `report` in {}",
            Config::config_path().display()
        );
    };

    tracing::info!(path = %path.display(), "loading report");
    Ok(Report::load(&path)?)
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'osv-viewer config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
