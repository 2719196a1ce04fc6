mod config;
mod demos;
mod prompt;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use decli::{Program, Value};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::load_config;
use crate::demos::Demo;

/// Exit code when the program reported user-input errors.
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "decli")]
#[command(version, about = "Run declarative decli programs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default decli.json
    Init(InitArgs),

    /// Run one command line against a demo program
    Run(RunArgs),

    /// Read command lines from stdin until `exit`
    Repl(ReplArgs),

    /// Print a demo program's declarations as JSON
    Schema(SchemaArgs),
}

#[derive(Parser)]
struct InitArgs {
    /// Directory to write decli.json into (default: current directory)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Replace an existing decli.json
    #[arg(long)]
    force: bool,
}

#[derive(Parser)]
struct RunArgs {
    /// Path to a decli.json config
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the response as JSON instead of plain output
    #[arg(long)]
    json: bool,

    /// Demo program to run
    #[arg(value_enum)]
    demo: Demo,

    /// Command line passed to the program verbatim
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Parser)]
struct ReplArgs {
    /// Path to a decli.json config
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Demo program to drive
    #[arg(value_enum)]
    demo: Demo,
}

#[derive(Parser)]
struct SchemaArgs {
    /// Demo program to describe
    #[arg(value_enum)]
    demo: Demo,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => init(args),
        Commands::Run(args) => run(args),
        Commands::Repl(args) => repl(args),
        Commands::Schema(args) => schema(args),
    }
}

fn init(args: InitArgs) -> Result<ExitCode> {
    let dir = args.dir.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    let path = config::write_default_config(&dir, args.force)?;
    tracing::info!("wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn build_program(demo: Demo, config_path: Option<&Path>) -> Result<Program> {
    let loaded = load_config(config_path)?;
    let (config, usage) = match loaded {
        Some(loaded) => {
            tracing::debug!(path = %loaded.path.display(), "loaded config");
            (loaded.config.program, loaded.config.usage)
        }
        None => Default::default(),
    };
    let mut program = demo.build(config);
    if let Some(usage) = usage {
        program.usage(usage);
    }
    program.check().context("invalid program definition")?;
    Ok(program)
}

fn run(args: RunArgs) -> Result<ExitCode> {
    let mut program = build_program(args.demo, args.config.as_deref())?;
    if args.json {
        program.stderr(|_| {});
    }

    let response = program
        .exec(args.args)
        .context("command failed")?;

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &response).context("failed to write response")?;
        writeln!(out)?;
    } else if let Some(value) = &response.stdout {
        print_stdout(&mut out, value)?;
    }

    if response.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_USAGE))
    }
}

fn repl(args: ReplArgs) -> Result<ExitCode> {
    let mut program = build_program(args.demo, args.config.as_deref())?;
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    prompt::run(&mut program, stdin, stdout)?;
    Ok(ExitCode::SUCCESS)
}

fn schema(args: SchemaArgs) -> Result<ExitCode> {
    let program = build_program(args.demo, None)?;
    let json = serde_json::to_string_pretty(&program.schema())
        .context("failed to serialize schema")?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

/// Strings print as-is, anything else as pretty JSON.
pub(crate) fn print_stdout<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::String(text) => writeln!(out, "{text}")?,
        other => writeln!(out, "{}", serde_json::to_string_pretty(other)?)?,
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
