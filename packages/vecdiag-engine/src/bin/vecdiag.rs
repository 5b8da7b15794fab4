//! Vecdiag CLI
//!
//! Explains why a C loop does or does not vectorize.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a file (or `-` for stdin)
//! cargo run --bin vecdiag -- analyze kernel.c
//!
//! # JSON output, custom compiler settings
//! cargo run --bin vecdiag -- analyze kernel.c --format json --config vecdiag.yaml
//!
//! # Run the s1113 sample under a fresh session
//! cargo run --bin vecdiag -- demo
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use vecdiag_engine::{
    render_json, render_text, AnalysisOrchestrator, EngineConfig, Result, S1113_SAMPLE,
};

#[derive(Parser)]
#[command(name = "vecdiag")]
#[command(about = "Vectorization diagnosis - dependencies, failure status and ranked fixes", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a C source file
    Analyze {
        /// Source file, or `-` for stdin
        file: PathBuf,

        /// Session to record the analysis in (created if missing)
        #[arg(short, long)]
        session: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Analyze the built-in s1113 sample
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let orchestrator = AnalysisOrchestrator::new(config);

    match cli.command {
        Commands::Analyze {
            file,
            session,
            format,
        } => {
            let source = read_source(&file)?;
            if let Some(id) = session.as_deref() {
                if !orchestrator.sessions().contains(id) {
                    orchestrator.create_session(id).await;
                }
            }
            run(&orchestrator, &source, session.as_deref(), format).await?;
        }
        Commands::Demo { format } => {
            let session = format!("demo-{}", Uuid::new_v4());
            println!("{}", orchestrator.create_session(&session).await);
            println!("Testing compiler server with s1113-like code...");
            run(&orchestrator, S1113_SAMPLE, Some(&session), format).await?;
        }
    }

    orchestrator.shutdown();
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_yaml_file(path)?,
        None => EngineConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

fn read_source(file: &PathBuf) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

async fn run(
    orchestrator: &AnalysisOrchestrator,
    source: &str,
    session: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let analysis = orchestrator.analyze(source, session).await;

    match format {
        OutputFormat::Text => print!("{}", render_text(&analysis, &orchestrator.config().report)),
        OutputFormat::Json => println!("{}", render_json(&analysis)?),
    }

    Ok(())
}
