//! Parsers turning raw console lines into typed payroll values.
//!
//! Every parser is pure: it either returns the typed value or a
//! [`ValidationError`] whose `Display` text is the message shown to the user
//! before re-prompting.

use serde::{Deserialize, Serialize};

use super::domain::{Amount, EmployeeId, EmployeeName, EmploymentKind};

/// Rule set applied to numeric input and to the first menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationProfile {
    /// Digits only for money; zero is accepted; any menu choice at any time.
    #[default]
    Strict,
    /// Digits with one optional decimal point, strictly positive values, and
    /// a first menu choice limited to registering a full-time employee or exiting.
    Decimal,
}

impl ValidationProfile {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Decimal => "decimal",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" | "classic" => Some(Self::Strict),
            "decimal" => Some(Self::Decimal),
            _ => None,
        }
    }

    pub const fn restricts_first_choice(self) -> bool {
        matches!(self, Self::Decimal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid or Duplicate ID! Try again.")]
    InvalidId,
    #[error("Invalid or Duplicate ID! Try again.")]
    DuplicateId,
    #[error("Invalid name! Only letters and spaces are allowed.")]
    InvalidName,
    #[error("Invalid input! Please enter a valid number without spaces or symbols.")]
    InvalidWholeAmount,
    #[error(
        "Invalid input! Please enter a positive number (digits and at most one decimal point)."
    )]
    InvalidDecimalAmount,
    #[error("Invalid input! Please enter a valid whole number.")]
    InvalidCount,
    #[error("Invalid input! Please enter a whole number greater than zero.")]
    NonPositiveCount,
    #[error("Invalid input! The total salary would be too large; please enter a smaller number.")]
    TotalOverflow,
    #[error("Invalid choice! Please enter a number between 1 and 5.")]
    ChoiceOutOfRange,
    #[error("Invalid choice! Please start by adding a full-time employee (1) or exit (5).")]
    FirstChoiceRestricted,
}

/// A validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register(EmploymentKind),
    Report,
    Exit,
}

impl MenuChoice {
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Register(EmploymentKind::FullTime)),
            2 => Some(Self::Register(EmploymentKind::PartTime)),
            3 => Some(Self::Register(EmploymentKind::Contractual)),
            4 => Some(Self::Report),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|byte| byte.is_ascii_digit())
}

pub fn parse_employee_id(raw: &str) -> Result<EmployeeId, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidId);
    }
    Ok(EmployeeId::normalized(trimmed))
}

pub fn parse_employee_name(raw: &str) -> Result<EmployeeName, ValidationError> {
    let name = raw.trim_end_matches(['\r', '\n']);
    let starts_with_letter = name
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic());
    let letters_and_spaces = name
        .chars()
        .all(|ch| ch.is_ascii_alphabetic() || ch == ' ');

    if !starts_with_letter || !letters_and_spaces || name.ends_with(' ') {
        return Err(ValidationError::InvalidName);
    }
    Ok(EmployeeName::from_validated(name))
}

pub fn parse_amount(raw: &str, profile: ValidationProfile) -> Result<Amount, ValidationError> {
    let trimmed = raw.trim();
    match profile {
        ValidationProfile::Strict => {
            if !is_digits(trimmed) {
                return Err(ValidationError::InvalidWholeAmount);
            }
            let value: f64 = trimmed
                .parse()
                .map_err(|_| ValidationError::InvalidWholeAmount)?;
            if !value.is_finite() {
                return Err(ValidationError::InvalidWholeAmount);
            }
            Ok(Amount::from_validated(value))
        }
        ValidationProfile::Decimal => {
            let digits = trimmed.bytes().filter(u8::is_ascii_digit).count();
            let points = trimmed.bytes().filter(|byte| *byte == b'.').count();
            if digits == 0 || points > 1 || digits + points != trimmed.len() {
                return Err(ValidationError::InvalidDecimalAmount);
            }
            let value: f64 = trimmed
                .parse()
                .map_err(|_| ValidationError::InvalidDecimalAmount)?;
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidDecimalAmount);
            }
            Ok(Amount::from_validated(value))
        }
    }
}

/// Hours worked or projects completed.
pub fn parse_count(raw: &str, profile: ValidationProfile) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if !is_digits(trimmed) {
        return Err(ValidationError::InvalidCount);
    }
    let count: u32 = trimmed.parse().map_err(|_| ValidationError::InvalidCount)?;
    if profile == ValidationProfile::Decimal && count == 0 {
        return Err(ValidationError::NonPositiveCount);
    }
    Ok(count)
}

/// Parses a count that `rate` will be multiplied by, refusing products that overflow.
pub fn parse_count_for_rate(
    raw: &str,
    profile: ValidationProfile,
    rate: Amount,
) -> Result<u32, ValidationError> {
    let count = parse_count(raw, profile)?;
    rate.checked_times(count)
        .map(|_| count)
        .ok_or(ValidationError::TotalOverflow)
}

/// Parses a menu selection. `first_choice` is true until one choice has been accepted.
pub fn parse_menu_choice(
    raw: &str,
    profile: ValidationProfile,
    first_choice: bool,
) -> Result<MenuChoice, ValidationError> {
    let trimmed = raw.trim();
    if !is_digits(trimmed) {
        return Err(ValidationError::ChoiceOutOfRange);
    }
    let choice = trimmed
        .parse::<u32>()
        .ok()
        .and_then(MenuChoice::from_number)
        .ok_or(ValidationError::ChoiceOutOfRange)?;

    let opening_choice = matches!(
        choice,
        MenuChoice::Register(EmploymentKind::FullTime) | MenuChoice::Exit
    );
    if first_choice && profile.restricts_first_choice() && !opening_choice {
        return Err(ValidationError::FirstChoiceRestricted);
    }
    Ok(choice)
}
