// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanwerk — build and check scan requests from the command line.
//
// Reads a JSON object of scan settings, assembles the full request against
// the named device's capabilities, prints it, and reports every validation
// problem. Exit status: 0 valid, 1 input or device needs fixing, 2 invalid
// request, 3 broken installation (config, driver description).

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use scanwerk_core::AppConfig;
use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_core::human_errors::{Severity, humanize_error};
use scanwerk_core::paths::Paths;
use scanwerk_device::DirectoryProvider;
use scanwerk_request::{RequestBuilder, ScanRequest};

#[derive(Debug, Parser)]
#[command(name = "scanwerk", version, about = "Build and validate scan requests")]
struct Cli {
    /// Configuration file (defaults to config.json in the config directory).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory of device descriptions (`ID.json` or `ID.txt`).
    #[arg(long, value_name = "DIR")]
    devices: Option<PathBuf>,

    /// Device used when the input names none.
    #[arg(long, value_name = "ID")]
    fallback_device: Option<String>,

    /// Scan settings as a JSON object; read from stdin when omitted.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// List the described devices and exit.
    #[arg(long)]
    list_devices: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "scan request could not be built");
            let human = humanize_error(&e);
            let (prefix, code) = failure_status(human.severity);
            eprintln!("{prefix}: {}\n{}", human.message, human.suggestion);
            ExitCode::from(code)
        }
    }
}

/// Stderr prefix and exit code for a request that could not be built.
fn failure_status(severity: Severity) -> (&'static str, u8) {
    match severity {
        Severity::ActionRequired => ("error", 1),
        Severity::Permanent => ("fatal", 3),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Paths::resolve()?.config_file(),
    };
    let config = AppConfig::load(&config_path)?;

    let devices_dir = match cli.devices {
        Some(dir) => dir,
        None => Paths::resolve()?.devices_dir(),
    };
    let mut provider = DirectoryProvider::new(devices_dir);
    if let Some(id) = cli.fallback_device {
        provider = provider.with_fallback(id);
    }

    if cli.list_devices {
        for id in provider.list_devices()? {
            println!("{id}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let input = read_input(cli.input)?;
    let builder = RequestBuilder::new(provider, config);
    let request = builder.build(input)?;

    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(report(&request, builder.config()))
}

fn read_input(path: Option<PathBuf>) -> Result<Value> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if text.trim().is_empty() {
        return Err(ScanwerkError::InvalidInput("no scan settings given".into()));
    }
    Ok(serde_json::from_str(&text)?)
}

fn report(request: &ScanRequest, config: &AppConfig) -> ExitCode {
    let errors = request.validate(config);
    if errors.is_empty() {
        tracing::info!(output = %request.output_filepath, "scan request valid");
        return ExitCode::SUCCESS;
    }
    for error in &errors {
        eprintln!("{error}");
    }
    ExitCode::from(2)
}
