use chrono::{DateTime, Utc};
use std::io::{self, Write};

use super::super::domain::{Amount, Compensation, Employee};
use super::views::{PayrollEntryView, PayrollSummary};

pub(crate) const REPORT_HEADER: &str = "------ Employee Payroll Report ------";

/// Read-only payroll view over the registered employees.
#[derive(Debug, Clone, Copy)]
pub struct PayrollReport<'a> {
    employees: &'a [Employee],
    generated_at: DateTime<Utc>,
}

impl<'a> PayrollReport<'a> {
    pub fn new(employees: &'a [Employee], generated_at: DateTime<Utc>) -> Self {
        Self {
            employees,
            generated_at,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn total_payroll(&self) -> Amount {
        self.employees.iter().map(Employee::salary).sum()
    }

    pub fn entries(&self) -> Vec<PayrollEntryView> {
        self.employees
            .iter()
            .map(|employee| {
                let compensation = employee.compensation();
                PayrollEntryView {
                    id: employee.id().to_string(),
                    name: employee.name().to_string(),
                    kind: employee.kind(),
                    kind_label: employee.kind().label(),
                    rate: compensation.rate().value(),
                    quantity: compensation.quantity(),
                    total: employee.salary().value(),
                }
            })
            .collect()
    }

    pub fn summary(&self) -> PayrollSummary {
        PayrollSummary {
            generated_at: self.generated_at,
            employee_count: self.employees.len(),
            total_payroll: self.total_payroll().value(),
            entries: self.entries(),
        }
    }

    /// Writes the console report: a header, then one block per employee
    /// followed by a blank line.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for employee in self.employees {
            write_employee(employee, out)?;
        }
        out.flush()
    }
}

fn write_employee<W: Write>(employee: &Employee, out: &mut W) -> io::Result<()> {
    writeln!(out, "Employee: {} (ID: {})", employee.name(), employee.id())?;
    match *employee.compensation() {
        Compensation::FullTime { monthly_salary } => {
            writeln!(out, "Fixed Monthly Salary: ${monthly_salary}")?;
        }
        Compensation::PartTime {
            hourly_wage,
            hours_worked,
        } => {
            writeln!(out, "Hourly Wage: ${hourly_wage}")?;
            writeln!(out, "Hours Worked: {hours_worked}")?;
            writeln!(out, "Total Salary: ${}", employee.salary())?;
        }
        Compensation::Contractual {
            payment_per_project,
            projects_completed,
        } => {
            writeln!(out, "Contract Payment Per Project: ${payment_per_project}")?;
            writeln!(out, "Projects Completed: {projects_completed}")?;
            writeln!(out, "Total Salary: ${}", employee.salary())?;
        }
    }
    writeln!(out)
}
