use crate::cli::parse_format;
use clap::Args;
use payroll::config::AppConfig;
use payroll::error::AppError;
use payroll::telemetry;
use payroll::workflows::payroll::{
    Console, EmployeeRegistry, PayrollSession, ReportFormat, ValidationProfile,
};
use std::io::{self, Cursor, Write};
use tracing::info;

/// Menu input registering one employee of each kind, then exiting.
const SAMPLE_SESSION: &str = "\
1\nE100\nAnn Lee\n3000\n\
2\nE200\nBob Stone\n18.5\n32\n\
3\nC300\nCy Young\n1250\n3\n\
5\n";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Output format for the payroll report (text, json, or csv)
    #[arg(long, value_parser = parse_format, default_value = "text")]
    pub(crate) format: ReportFormat,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let registry = sample_registry()?;
    info!(
        employees = registry.len(),
        format = args.format.label(),
        "rendering demo payroll report"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_demo(&registry, args.format, &mut out)
}

/// Replays the sample session through the real menu loop with output discarded.
pub(crate) fn sample_registry() -> Result<EmployeeRegistry, AppError> {
    let mut registry = EmployeeRegistry::default();
    let mut console = Console::new(Cursor::new(SAMPLE_SESSION), io::sink());
    PayrollSession::new(&mut registry, ValidationProfile::Decimal).run(&mut console)?;
    Ok(registry)
}

pub(crate) fn render_demo<W: Write>(
    registry: &EmployeeRegistry,
    format: ReportFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let report = registry.report_all();
    format.render(&report, out)?;
    if format == ReportFormat::Text {
        writeln!(
            out,
            "Total payroll: ${} (generated {})",
            report.total_payroll(),
            report.generated_at().format("%Y-%m-%d %H:%M UTC")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use payroll::workflows::payroll::EmploymentKind;

    #[test]
    fn sample_session_registers_one_employee_of_each_kind() {
        let registry = sample_registry().expect("sample session replays");
        let kinds: Vec<EmploymentKind> = registry.iter().map(|employee| employee.kind()).collect();
        assert_eq!(kinds, EmploymentKind::ordered().to_vec());
        assert_eq!(registry.employees()[1].salary().value(), 592.0);
    }

    #[test]
    fn text_demo_appends_total_payroll() {
        let registry = sample_registry().expect("sample session replays");
        let mut out = Vec::new();
        render_demo(&registry, ReportFormat::Text, &mut out).expect("renders");
        let output = String::from_utf8(out).expect("utf8");

        assert!(output.starts_with("------ Employee Payroll Report ------\n"));
        assert!(output.contains("Employee: Bob Stone (ID: E200)\nHourly Wage: $18.5\n"));
        let footer = output.lines().last().expect("footer line");
        assert!(footer.starts_with("Total payroll: $7342 (generated "));
        assert!(footer.ends_with(" UTC)"));
    }

    #[test]
    fn json_demo_is_machine_readable() {
        let registry = sample_registry().expect("sample session replays");
        let mut out = Vec::new();
        render_demo(&registry, ReportFormat::Json, &mut out).expect("renders");
        let body: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

        assert_eq!(body["employee_count"], 3);
        assert_eq!(body["total_payroll"], 7342.0);
        assert_eq!(body["entries"][2]["id"], "C300");
    }
}
