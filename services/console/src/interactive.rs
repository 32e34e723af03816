use crate::cli::{parse_capacity, parse_profile};
use clap::Args;
use payroll::config::AppConfig;
use payroll::error::AppError;
use payroll::telemetry;
use payroll::workflows::payroll::{
    Console, EmployeeRegistry, PayrollSession, SessionOutcome, ValidationProfile,
};
use std::io;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    /// Override the configured validation profile (strict or decimal)
    #[arg(long, value_parser = parse_profile)]
    pub(crate) profile: Option<ValidationProfile>,
    /// Override the configured registry capacity
    #[arg(long, value_parser = parse_capacity)]
    pub(crate) capacity: Option<usize>,
}

pub(crate) fn run_session(mut args: RunArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(profile) = args.profile.take() {
        config.session.profile = profile;
    }
    if let Some(capacity) = args.capacity.take() {
        config.session.capacity = capacity;
    }

    telemetry::init(&config.telemetry)?;

    let mut registry = EmployeeRegistry::with_capacity(config.session.capacity);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let outcome =
        PayrollSession::new(&mut registry, config.session.profile).run(&mut console)?;
    if outcome == SessionOutcome::InputClosed {
        console.write_str("\n")?;
    }

    info!(?outcome, employees = registry.len(), "payroll desk closed");
    Ok(())
}
