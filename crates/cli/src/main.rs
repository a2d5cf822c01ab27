mod demo;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use cmdtree::Parsed;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "cmdtree")]
#[command(version, about = "Inspect how argument vectors resolve against a command tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an argument vector against the built-in `git` tree and print the result
    Parse(ParseArgs),

    /// Parse an argument vector and dispatch it to the matched command's action
    Run(RunArgs),

    /// Print the built-in command tree declaration as JSON
    Tree,
}

#[derive(Parser)]
struct ParseArgs {
    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Argument vector, program path first (e.g. `-- git checkout -bu dev`)
    #[arg(value_name = "ARGV", trailing_var_arg = true, allow_hyphen_values = true)]
    argv: Vec<String>,
}

#[derive(Parser)]
struct RunArgs {
    /// Argument vector, program path first
    #[arg(value_name = "ARGV", trailing_var_arg = true, allow_hyphen_values = true)]
    argv: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    parsed: &'a Parsed,
    error: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => parse_command(args),
        Commands::Run(args) => run_command(args),
        Commands::Tree => tree_command(),
    }
}

fn parse_command(args: ParseArgs) -> Result<()> {
    tracing::debug!("executing parse command");
    if args.argv.is_empty() {
        bail!("expected an argument vector starting with the program path");
    }

    let app = demo::app();
    let (parsed, error) = match cmdtree::parse(&app, &args.argv) {
        Ok(parsed) => (parsed, None),
        Err(failure) => {
            let (error, partial) = failure.into_parts();
            (partial, Some(error.to_string()))
        }
    };

    if args.json {
        let report = Report {
            parsed: &parsed,
            error: error.clone(),
        };
        let json = serde_json::to_string_pretty(&report).context("failed to encode parse result")?;
        println!("{json}");
    } else {
        print_parsed(&parsed);
    }

    if let Some(error) = error {
        if !args.json {
            eprintln!("error: {error}");
        }
        std::process::exit(cmdtree::EXIT_USAGE);
    }
    Ok(())
}

fn print_parsed(parsed: &Parsed) {
    let options: Vec<String> = parsed
        .options()
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    println!("invocation: {}", parsed.invocation().join(" "));
    println!("args: {}", parsed.args().join(" "));
    println!("options: {}", options.join(" "));
}

fn run_command(args: RunArgs) -> Result<()> {
    tracing::debug!("executing run command");
    if args.argv.is_empty() {
        bail!("expected an argument vector starting with the program path");
    }

    let code = cmdtree::run(&demo::app(), &args.argv);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn tree_command() -> Result<()> {
    tracing::debug!("executing tree command");
    let json = serde_json::to_string_pretty(&demo::app()).context("failed to encode command tree")?;
    println!("{json}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
