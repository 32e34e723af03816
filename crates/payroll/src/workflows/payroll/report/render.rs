use std::io::{self, Write};

use super::summary::PayrollReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn render<W: Write>(
        self,
        report: &PayrollReport<'_>,
        out: &mut W,
    ) -> Result<(), RenderError> {
        match self {
            Self::Text => report.write_text(out)?,
            Self::Json => {
                serde_json::to_writer_pretty(&mut *out, &report.summary())?;
                writeln!(out)?;
            }
            Self::Csv => {
                let mut writer = csv::Writer::from_writer(&mut *out);
                for entry in report.entries() {
                    writer.serialize(entry)?;
                }
                writer.flush()?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to encode payroll report as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode payroll report as csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write payroll report: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::payroll::domain::{Amount, Compensation, Employee};
    use crate::workflows::payroll::validation::{parse_employee_id, parse_employee_name};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new(
                parse_employee_id("e1").expect("id"),
                parse_employee_name("Ann").expect("name"),
                Compensation::FullTime {
                    monthly_salary: Amount::from_validated(3000.0),
                },
            ),
            Employee::new(
                parse_employee_id("e2").expect("id"),
                parse_employee_name("Bob").expect("name"),
                Compensation::PartTime {
                    hourly_wage: Amount::from_validated(12.5),
                    hours_worked: 4,
                },
            ),
        ]
    }

    fn render(format: ReportFormat) -> String {
        let employees = roster();
        let generated_at = Utc
            .with_ymd_and_hms(2025, 3, 31, 17, 0, 0)
            .single()
            .expect("valid timestamp");
        let report = PayrollReport::new(&employees, generated_at);
        let mut out = Vec::new();
        format.render(&report, &mut out).expect("render succeeds");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn json_output_carries_totals_and_entries() {
        let body: Value = serde_json::from_str(&render(ReportFormat::Json)).expect("valid json");

        assert_eq!(body["employee_count"], 2);
        assert_eq!(body["total_payroll"], 3050.0);
        assert_eq!(body["generated_at"], "2025-03-31T17:00:00Z");
        assert_eq!(body["entries"][0]["id"], "E1");
        assert_eq!(body["entries"][0]["kind"], "full_time");
        assert!(body["entries"][0]["quantity"].is_null());
        assert_eq!(body["entries"][1]["total"], 50.0);
    }

    #[test]
    fn csv_output_has_header_and_one_row_per_employee() {
        let output = render(ReportFormat::Csv);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "id,name,kind,kind_label,rate,quantity,total");
        assert_eq!(lines[1], "E1,Ann,full_time,Full-time,3000.0,,3000.0");
        assert_eq!(lines[2], "E2,Bob,part_time,Part-time,12.5,4,50.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn text_output_matches_console_report() {
        let output = render(ReportFormat::Text);
        assert!(output.starts_with("------ Employee Payroll Report ------\n"));
        assert!(output.contains("Hourly Wage: $12.5\nHours Worked: 4\nTotal Salary: $50\n\n"));
    }

    #[test]
    fn formats_parse_from_labels() {
        assert_eq!(ReportFormat::from_label("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_label("csv"), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::from_label("xml"), None);
        assert_eq!(ReportFormat::default().label(), "text");
    }
}
