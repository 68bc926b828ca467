use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::EnvFilter,
};

use courier_config::validate::{self, Severity};

#[derive(Parser)]
#[command(name = "courier", about = "Courier — room-to-room chat relay")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Path to the relay configuration file.
    #[arg(
        long,
        global = true,
        env = "COURIER_CONFIG",
        default_value = "courier.toml"
    )]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration file and report errors/warnings.
    Check,
    /// Print the routing plan: each connector with its rooms and roles.
    Routes,
}

/// ANSI color codes.
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Check => check(&cli.config),
        Commands::Routes => routes(&cli.config),
    }
}

fn check(path: &PathBuf) -> anyhow::Result<()> {
    eprintln!("Checking {}\n", path.display());
    let config = courier_config::load_config(path)?;
    let result = validate::validate(&config);

    for d in &result.diagnostics {
        let (color, label) = match d.severity {
            Severity::Error => (RED, "error"),
            Severity::Warning => (YELLOW, "warning"),
        };
        eprintln!("  {BOLD}{color}{label}{RESET} {}: {}", d.path, d.message);
    }

    let errors = result.count(Severity::Error);
    let warnings = result.count(Severity::Warning);

    if errors == 0 && warnings == 0 {
        eprintln!("No issues found.");
    } else {
        eprintln!("\n{errors} error(s), {warnings} warning(s)");
    }

    if errors > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn routes(path: &PathBuf) -> anyhow::Result<()> {
    let config = courier_config::load_config(path)?;
    let registry = courier_gateway::build_registry(&config)?;

    info!(connectors = registry.len(), "routing plan built");
    for connector in registry.iter() {
        println!("{}", connector.topology());
    }
    Ok(())
}
