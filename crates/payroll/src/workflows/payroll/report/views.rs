use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::EmploymentKind;

/// One row of the payroll report, flattened for JSON and CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollEntryView {
    pub id: String,
    pub name: String,
    pub kind: EmploymentKind,
    pub kind_label: &'static str,
    pub rate: f64,
    pub quantity: Option<u32>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayrollSummary {
    pub generated_at: DateTime<Utc>,
    pub employee_count: usize,
    pub total_payroll: f64,
    pub entries: Vec<PayrollEntryView>,
}
