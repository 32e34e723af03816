use crate::demo::{run_demo, DemoArgs};
use crate::interactive::{run_session, RunArgs};
use clap::{Parser, Subcommand};
use payroll::error::AppError;
use payroll::workflows::payroll::{ReportFormat, ValidationProfile};

#[derive(Parser, Debug)]
#[command(
    name = "Payroll Desk",
    about = "Register employees and print a payroll report from the console",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive registration menu (default command)
    Run(RunArgs),
    /// Register a sample roster without prompting and print its payroll report
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => run_session(args),
        Command::Demo(args) => run_demo(args),
    }
}

pub(crate) fn parse_profile(raw: &str) -> Result<ValidationProfile, String> {
    ValidationProfile::from_label(raw)
        .ok_or_else(|| format!("unknown validation profile '{raw}' (expected strict or decimal)"))
}

pub(crate) fn parse_format(raw: &str) -> Result<ReportFormat, String> {
    ReportFormat::from_label(raw)
        .ok_or_else(|| format!("unknown report format '{raw}' (expected text, json, or csv)"))
}

pub(crate) fn parse_capacity(raw: &str) -> Result<usize, String> {
    payroll::config::parse_capacity(raw).map_err(|err| err.to_string())
}
