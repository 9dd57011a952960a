//! Contract renderer CLI
//!
//! One invocation renders one contract.
//!
//! ## Usage
//!
//! ```bash
//! # Record inline
//! contract-render '{"contract_type":"regular","contractor_name":"Jane Doe"}' out/contract.docx
//!
//! # Record from a file or stdin
//! contract-render @record.json out/contract.docx
//! cat record.json | contract-render - out/
//!
//! # Preview without writing
//! contract-render @record.json out/contract.docx --dry-run
//! ```
//!
//! ## Exit Codes
//!
//! - 0: contract written (or previewed)
//! - 1: error

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use contract_render::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

enum Outcome {
    Written(PathBuf),
    Previewed(String),
}

fn cli() -> Command {
    Command::new("contract-render")
        .version(contract_render::VERSION)
        .about("Fill a vendor contract template and write it as a Word document")
        .arg(
            Arg::new("data")
                .required(true)
                .value_name("DATA")
                .help("Contract record as JSON, '-' to read stdin, or @FILE"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .value_name("OUTPUT")
                .value_parser(value_parser!(PathBuf))
                .help("Destination .docx path, or a directory to name the file after the contractor"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with font and page settings"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Print the filled contract as text instead of writing it"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Log output format (logs go to stderr, filtered by RUST_LOG)"),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_one::<String>("log-format").map(String::as_str) == Some("json"));

    match run(&matches).await {
        Ok(Outcome::Written(path)) => {
            println!("Contract generated: {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Previewed(text)) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// Single-line failure report: the error followed by its causes
fn error_line(e: &anyhow::Error) -> String {
    format!("Error: {e:#}")
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(matches: &ArgMatches) -> Result<Outcome> {
    let data = matches
        .get_one::<String>("data")
        .context("missing contract record")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .context("missing output path")?;

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    let json = read_record(data).await?;
    let input = ContractInput::from_json_str(&json)?;
    let renderer = ContractRenderer::new(config);

    if matches.get_flag("dry-run") {
        let document = renderer.build(&input)?;
        let text = PlainTextSerializer.serialize(&document)?;
        return Ok(Outcome::Previewed(String::from_utf8_lossy(&text).into_owned()));
    }

    let path = renderer.render_to_path(&input, output).await?;
    Ok(Outcome::Written(path))
}

async fn read_record(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut json = String::new();
        tokio::io::stdin()
            .read_to_string(&mut json)
            .await
            .context("failed to read contract record from stdin")?;
        return Ok(json);
    }
    if let Some(path) = arg.strip_prefix('@') {
        return tokio::fs::read_to_string(Path::new(path))
            .await
            .with_context(|| format!("failed to read contract record from {path}"));
    }
    Ok(arg.to_string())
}
