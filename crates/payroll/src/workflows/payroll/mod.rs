//! Interactive employee registration and payroll reporting.
//!
//! Raw console lines pass through [`validation`] into typed values, the
//! [`session`] menu loop appends employees to the single owned
//! [`EmployeeRegistry`], and [`report`] renders what was registered.

pub mod console;
pub mod domain;
pub mod registry;
pub mod report;
pub mod session;
pub mod validation;

pub use console::{Console, ConsoleError};
pub use domain::{Amount, Compensation, Employee, EmployeeId, EmployeeName, EmploymentKind};
pub use registry::{EmployeeRegistry, RegistryError, DEFAULT_CAPACITY};
pub use report::{PayrollReport, RenderError, ReportFormat};
pub use session::{MenuState, PayrollSession, SessionOutcome};
pub use validation::{MenuChoice, ValidationError, ValidationProfile};
