//! Command-line probe for `synapse_core` field logic.
//!
//! # Responsibility
//! - Run one validator or formatter on a value and print the result.
//! - Optionally start file logging before the command runs.

use clap::{Parser, Subcommand};
use log::info;
use std::process::ExitCode;
use synapse_core::{
    api_error_message, default_log_level, format_date, format_time, init_logging, mask_cpf,
    mask_phone, Cpf,
};

#[derive(Parser, Debug)]
#[command(name = "synapse", author, version, about, long_about = None)]
struct Args {
    /// Log level (`trace|debug|info|warn|error`); defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "SYNAPSE_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a CPF; exits with status 1 when it is invalid.
    ValidateCpf { value: String },
    /// Apply the CPF input mask.
    MaskCpf { value: String },
    /// Apply the phone input mask.
    MaskPhone { value: String },
    /// Render `YYYY-MM-DD` as `DD/MM/YYYY`.
    FormatDate { value: String },
    /// Render `HH:MM:SS` as `HH:MM`.
    FormatTime { value: String },
    /// Extract the user-facing message from an API error body.
    ErrorMessage { body: String },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::ValidateCpf { .. } => "validate-cpf",
            Self::MaskCpf { .. } => "mask-cpf",
            Self::MaskPhone { .. } => "mask-phone",
            Self::FormatDate { .. } => "format-date",
            Self::FormatTime { .. } => "format-time",
            Self::ErrorMessage { .. } => "error-message",
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("synapse: {err}");
            return ExitCode::FAILURE;
        }
    }

    info!(
        "event=cli_command module=cli status=start command={}",
        args.command.name()
    );

    match args.command {
        Command::ValidateCpf { value } => match Cpf::parse(&value) {
            Ok(cpf) => {
                println!("valid {cpf}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                println!("invalid: {err}");
                ExitCode::FAILURE
            }
        },
        Command::MaskCpf { value } => print_line(mask_cpf(&value)),
        Command::MaskPhone { value } => print_line(mask_phone(&value)),
        Command::FormatDate { value } => print_line(format_date(&value)),
        Command::FormatTime { value } => print_line(format_time(&value)),
        Command::ErrorMessage { body } => print_line(api_error_message(&body)),
    }
}

fn print_line(output: String) -> ExitCode {
    println!("{output}");
    ExitCode::SUCCESS
}
