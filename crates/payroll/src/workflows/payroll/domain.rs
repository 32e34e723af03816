use serde::Serialize;
use std::fmt;

/// Uppercase alphanumeric identifier assigned to an employee at registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Wraps an already validated identifier, normalizing it to uppercase.
    pub(crate) fn normalized(raw: &str) -> Self {
        Self(raw.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw user input.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name made of letters and interior spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeName(String);

impl EmployeeName {
    pub(crate) fn from_validated(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative, finite money amount.
///
/// Displayed rounded to cents with trailing zeroes dropped, so `3000.0`
/// renders as `3000`, `12.5` as `12.5`, and `0.1 * 3` as `0.3`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub(crate) fn from_validated(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Rate multiplied by a count, as used for hourly and per-project pay.
    pub fn times(self, count: u32) -> Amount {
        Amount(self.0 * f64::from(count))
    }

    /// Like [`Amount::times`], but `None` when the product is not finite.
    pub fn checked_times(self, count: u32) -> Option<Amount> {
        let product = self.0 * f64::from(count);
        product.is_finite().then_some(Amount(product))
    }
}

impl std::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, amount| acc + amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = format!("{:.2}", self.0);
        f.write_str(cents.trim_end_matches('0').trim_end_matches('.'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentKind {
    FullTime,
    PartTime,
    Contractual,
}

impl EmploymentKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::FullTime, Self::PartTime, Self::Contractual]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contractual => "Contractual",
        }
    }
}

/// How an employee's salary is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Compensation {
    FullTime {
        monthly_salary: Amount,
    },
    PartTime {
        hourly_wage: Amount,
        hours_worked: u32,
    },
    Contractual {
        payment_per_project: Amount,
        projects_completed: u32,
    },
}

impl Compensation {
    pub const fn kind(&self) -> EmploymentKind {
        match self {
            Self::FullTime { .. } => EmploymentKind::FullTime,
            Self::PartTime { .. } => EmploymentKind::PartTime,
            Self::Contractual { .. } => EmploymentKind::Contractual,
        }
    }

    /// The monthly figure, hourly wage, or per-project payment.
    pub fn rate(&self) -> Amount {
        match *self {
            Self::FullTime { monthly_salary } => monthly_salary,
            Self::PartTime { hourly_wage, .. } => hourly_wage,
            Self::Contractual {
                payment_per_project,
                ..
            } => payment_per_project,
        }
    }

    /// Hours or projects the rate is multiplied by; `None` for fixed salaries.
    pub fn quantity(&self) -> Option<u32> {
        match *self {
            Self::FullTime { .. } => None,
            Self::PartTime { hours_worked, .. } => Some(hours_worked),
            Self::Contractual {
                projects_completed, ..
            } => Some(projects_completed),
        }
    }

    pub fn salary(&self) -> Amount {
        match self.quantity() {
            Some(count) => self.rate().times(count),
            None => self.rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: EmployeeName,
    compensation: Compensation,
}

impl Employee {
    pub fn new(id: EmployeeId, name: EmployeeName, compensation: Compensation) -> Self {
        Self {
            id,
            name,
            compensation,
        }
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &EmployeeName {
        &self.name
    }

    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    pub fn kind(&self) -> EmploymentKind {
        self.compensation.kind()
    }

    pub fn salary(&self) -> Amount {
        self.compensation.salary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_render_without_trailing_zeroes() {
        assert_eq!(Amount::from_validated(3000.0).to_string(), "3000");
        assert_eq!(Amount::from_validated(12.5).to_string(), "12.5");
        assert_eq!(Amount::ZERO.to_string(), "0");
    }

    #[test]
    fn amounts_hide_binary_rounding_noise() {
        let total = Amount::from_validated(0.1).times(3);
        assert_eq!(total.value(), 0.1 * 3.0);
        assert_eq!(total.to_string(), "0.3");
        assert_eq!(Amount::from_validated(2500.5).to_string(), "2500.5");
        assert_eq!(Amount::from_validated(10.0).to_string(), "10");
        assert_eq!(Amount::from_validated(1.005).times(2).to_string(), "2.01");
    }

    #[test]
    fn checked_product_refuses_overflow() {
        let huge = Amount::from_validated(1e308);
        assert_eq!(huge.checked_times(10), None);
        assert_eq!(
            Amount::from_validated(12.5).checked_times(4),
            Some(Amount::from_validated(50.0))
        );
    }

    #[test]
    fn variable_pay_multiplies_rate_by_count() {
        let part_time = Compensation::PartTime {
            hourly_wage: Amount::from_validated(10.0),
            hours_worked: 5,
        };
        assert_eq!(part_time.salary(), Amount::from_validated(50.0));
        assert_eq!(part_time.kind(), EmploymentKind::PartTime);

        let contract = Compensation::Contractual {
            payment_per_project: Amount::from_validated(199.75),
            projects_completed: 4,
        };
        assert_eq!(contract.salary().value(), 199.75 * 4.0);
        assert_eq!(contract.quantity(), Some(4));
    }

    #[test]
    fn fixed_salary_has_no_quantity() {
        let full_time = Compensation::FullTime {
            monthly_salary: Amount::from_validated(3000.0),
        };
        assert_eq!(full_time.quantity(), None);
        assert_eq!(full_time.salary(), full_time.rate());
    }

    #[test]
    fn identifiers_compare_case_insensitively() {
        let id = EmployeeId::normalized("e1");
        assert_eq!(id.as_str(), "E1");
        assert!(id.matches("e1"));
        assert!(id.matches("E1"));
        assert!(!id.matches("E10"));
    }
}
