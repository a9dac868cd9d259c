use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use sumo_workspace::workspace::{
    DirectoryKind, RestoreOutcome, Workspace, WorkspaceConfig, WorkspaceError,
};

#[derive(Debug, Parser)]
#[command(name = "sumo-workspace")]
#[command(about = "Directory resolution, baseline restore, and cleanup for sumo mutation runs")]
struct Cli {
    /// Project directory.
    #[arg(long, global = true)]
    project: Option<PathBuf>,
    /// Contracts directory, relative to the project.
    #[arg(long, global = true)]
    contracts_dir: Option<String>,
    /// Test directory, relative to the project.
    #[arg(long, global = true)]
    test_dir: Option<String>,
    /// Build directory, relative to the project.
    #[arg(long, global = true)]
    build_dir: Option<String>,
    /// Log at debug level.
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Log errors only.
    #[arg(long, short, global = true)]
    quiet: bool,
    /// Explicit log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved path of a project directory.
    Resolve {
        /// Directory kind.
        #[arg(value_enum)]
        kind: KindArg,
        /// Emit JSON output.
        #[arg(long)]
        json: bool,
    },
    /// Create the results and mutants directories.
    Setup,
    /// Empty a derived directory.
    Clean {
        /// What to clean.
        #[arg(value_enum)]
        target: CleanTarget,
    },
    /// Restore contracts and tests from the baseline.
    Restore {
        /// Emit JSON output.
        #[arg(long)]
        json: bool,
    },
    /// Print the package manager used by the project.
    PackageManager,
    /// Print the fixed sumo paths.
    Paths {
        /// Emit JSON output.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    /// Solidity sources
    Contracts,
    /// Test suite
    Test,
    /// Compiler output
    Build,
}

impl From<KindArg> for DirectoryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Contracts => DirectoryKind::Contracts,
            KindArg::Test => DirectoryKind::Test,
            KindArg::Build => DirectoryKind::Build,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CleanTarget {
    /// sumo/results
    Results,
    /// Resolved build directory
    Build,
    /// Sandbox and ganache temp files
    Tmp,
}

fn init_logging(cli: &Cli) {
    let level = if let Some(level) = &cli.log_level {
        parse_level(level)
    } else if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        let level = env::var("SUMO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level)
    };

    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("sumo_workspace={}", level.as_str().to_lowercase()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{level}', defaulting to INFO. Valid levels: trace, debug, info, warn, error"
            );
            Level::INFO
        }
    }
}

fn make_config(cli: &Cli) -> Result<WorkspaceConfig, WorkspaceError> {
    let project = match &cli.project {
        Some(project) => project.clone(),
        None => WorkspaceConfig::default().project_root,
    };
    let mut config = WorkspaceConfig::load(project)?;
    if let Some(dir) = &cli.contracts_dir {
        config = config.with_contracts_dir(dir);
    }
    if let Some(dir) = &cli.test_dir {
        config = config.with_test_dir(dir);
    }
    if let Some(dir) = &cli.build_dir {
        config = config.with_build_dir(dir);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), WorkspaceError> {
    let workspace = Workspace::new(make_config(cli)?);

    match &cli.command {
        Command::Resolve { kind, json } => {
            let resolved = workspace.resolver().resolve((*kind).into())?;
            if *json {
                println!("{}", to_json(&resolved));
            } else {
                println!("{}", resolved.path.display());
            }
        }
        Command::Setup => {
            workspace.artifacts().setup()?;
            println!("results dir: {}", workspace.layout().results_dir.display());
        }
        Command::Clean { target } => match target {
            CleanTarget::Results => {
                if workspace.artifacts().clean()? {
                    println!("results directory cleaned");
                } else {
                    println!("results directory absent, nothing to clean");
                }
            }
            CleanTarget::Build => {
                let build_dir = workspace.sweeper().clean_build_dir()?;
                println!("build directory cleaned: {}", build_dir.display());
            }
            CleanTarget::Tmp => {
                let report = workspace.sweeper().clean_tmp();
                println!(
                    "temp entries removed: {}, failed: {}",
                    report.removed.len(),
                    report.failed.len()
                );
            }
        },
        Command::Restore { json } => {
            let outcome = workspace.snapshots().restore()?;
            if *json {
                println!("{}", to_json(&outcome));
            } else {
                match outcome {
                    RestoreOutcome::Skipped { .. } => {
                        println!("Project was not restored (No baseline available).");
                    }
                    RestoreOutcome::Restored { contracts, tests } => {
                        println!("Project restored: contracts={contracts}, tests={tests}");
                    }
                }
            }
        }
        Command::PackageManager => {
            println!("{}", workspace.package_manager()?);
        }
        Command::Paths { json } => {
            let layout = workspace.layout();
            if *json {
                println!("{}", to_json(layout));
            } else {
                println!("sumo: {}", layout.sumo_dir.display());
                println!("results: {}", layout.results_dir.display());
                println!("mutants: {}", layout.mutants_dir.display());
                println!("report: {}", layout.report_txt.display());
                println!("baseline: {}", layout.baseline_dir.display());
            }
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(err) if err.is_fatal() => {
            eprintln!("Error: {err}.");
            if let Some(hint) = err.hint() {
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
