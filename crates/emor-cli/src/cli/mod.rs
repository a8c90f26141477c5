mod commands;
mod logging;

use clap::Parser;
use emor_core::EmorError;
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_emor_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            eprintln!("{}", diagnostic.fatal_exit_line());
            diagnostic.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            logging::init(cli.verbose);
            commands::run_convert_command(cli)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

/// Converts `emor.txt` and `invemor.txt` into `modpar_emor.h` and
/// `modpar_invemor.h`.
#[derive(Parser)]
#[command(name = "conv-emor", version, about = "EMoR parameter file to C++ header converter")]
pub(super) struct Cli {
    /// Directory holding emor.txt and invemor.txt
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Directory receiving the generated modpar_*.h headers
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Optional JSON summary of the conversions
    #[arg(long)]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Convert(EmorError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_emor_error(&self) -> EmorError {
        match self {
            Self::Usage(message) => {
                EmorError::input_validation("INPUT.CLI_USAGE", message.clone())
            }
            Self::Convert(error) => error.clone(),
            Self::Internal(error) => EmorError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
