use chrono::Utc;

use super::domain::{Employee, EmployeeId};
use super::report::PayrollReport;

/// Number of employees a session accepts unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 100;

/// Ordered, append-only collection of the employees registered this session.
#[derive(Debug, Clone)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    capacity: usize,
}

impl Default for EmployeeRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl EmployeeRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            employees: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// True when no registered employee carries `id`, ignoring case.
    pub fn is_unique(&self, id: &str) -> bool {
        !self.employees.iter().any(|employee| employee.id().matches(id))
    }

    pub fn append(&mut self, employee: Employee) -> Result<&Employee, RegistryError> {
        if self.is_full() {
            return Err(RegistryError::Full {
                capacity: self.capacity,
            });
        }
        if !self.is_unique(employee.id().as_str()) {
            return Err(RegistryError::DuplicateId(employee.id().clone()));
        }

        let index = self.employees.len();
        self.employees.push(employee);
        Ok(&self.employees[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.employees.iter()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Read-only payroll projection over every registered employee, in order.
    pub fn report_all(&self) -> PayrollReport<'_> {
        PayrollReport::new(&self.employees, Utc::now())
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.employees.len() >= self.capacity
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("employee registry is full (capacity {capacity})")]
    Full { capacity: usize },
    #[error("employee id {0} is already registered")]
    DuplicateId(EmployeeId),
}
