use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use super::console::{Console, ConsoleError};
use super::domain::{Compensation, Employee, EmploymentKind};
use super::registry::EmployeeRegistry;
use super::validation::{
    parse_amount, parse_count_for_rate, parse_employee_id, parse_employee_name, parse_menu_choice,
    MenuChoice, ValidationError, ValidationProfile,
};

const MENU: &str = "\nMenu\n\
1 - Full-time Employee\n\
2 - Part-time Employee\n\
3 - Contractual Employee\n\
4 - Display Payroll Report\n\
5 - Exit\n\
Enter choice: ";

/// Where the menu loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Idle,
    AwaitingType,
    CollectingFields(EmploymentKind),
    Reporting,
    Exiting,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Exited,
    InputClosed,
}

/// Menu loop dispatching validated choices to the registry it borrows.
pub struct PayrollSession<'r> {
    registry: &'r mut EmployeeRegistry,
    profile: ValidationProfile,
    state: MenuState,
    accepted_choices: usize,
}

impl<'r> PayrollSession<'r> {
    pub fn new(registry: &'r mut EmployeeRegistry, profile: ValidationProfile) -> Self {
        Self {
            registry,
            profile,
            state: MenuState::Idle,
            accepted_choices: 0,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Drives the menu until Exit is chosen or input runs out.
    pub fn run<R, W>(&mut self, console: &mut Console<R, W>) -> io::Result<SessionOutcome>
    where
        R: BufRead,
        W: Write,
    {
        info!(
            profile = self.profile.label(),
            capacity = self.registry.capacity(),
            "payroll session started"
        );

        loop {
            match self.step(console) {
                Ok(MenuState::Exiting) => {
                    info!(employees = self.registry.len(), "payroll session exited");
                    return Ok(SessionOutcome::Exited);
                }
                Ok(_) => {}
                Err(ConsoleError::Closed) => {
                    self.state = MenuState::Exiting;
                    info!(employees = self.registry.len(), "input closed, ending session");
                    return Ok(SessionOutcome::InputClosed);
                }
                Err(ConsoleError::Io(err)) => return Err(err),
            }
        }
    }

    /// Performs one transition and returns the new state.
    pub fn step<R, W>(&mut self, console: &mut Console<R, W>) -> Result<MenuState, ConsoleError>
    where
        R: BufRead,
        W: Write,
    {
        let next = match self.state {
            MenuState::Idle => {
                console.write_str(MENU)?;
                MenuState::AwaitingType
            }
            MenuState::AwaitingType => self.await_choice(console)?,
            MenuState::CollectingFields(kind) => {
                self.collect_employee(kind, console)?;
                MenuState::Idle
            }
            MenuState::Reporting => {
                self.registry.report_all().write_text(console.output_mut())?;
                MenuState::Idle
            }
            MenuState::Exiting => MenuState::Exiting,
        };

        self.state = next;
        Ok(next)
    }

    fn await_choice<R, W>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<MenuState, ConsoleError>
    where
        R: BufRead,
        W: Write,
    {
        let raw = console.next_line()?;
        let choice = match parse_menu_choice(&raw, self.profile, self.accepted_choices == 0) {
            Ok(choice) => choice,
            Err(err) => {
                console.write_line(&err.to_string())?;
                return Ok(MenuState::Idle);
            }
        };
        self.accepted_choices += 1;

        let next = match choice {
            MenuChoice::Register(_) if self.registry.is_full() => {
                warn!(
                    capacity = self.registry.capacity(),
                    "registry full, refusing registration"
                );
                console.write_line(&format!(
                    "Employee registry is full (capacity {}). Cannot add more employees.",
                    self.registry.capacity()
                ))?;
                MenuState::Idle
            }
            MenuChoice::Register(kind) => MenuState::CollectingFields(kind),
            MenuChoice::Report => MenuState::Reporting,
            MenuChoice::Exit => {
                console.write_line("Exiting...")?;
                MenuState::Exiting
            }
        };
        Ok(next)
    }

    fn collect_employee<R, W>(
        &mut self,
        kind: EmploymentKind,
        console: &mut Console<R, W>,
    ) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
    {
        let profile = self.profile;
        let registry = &*self.registry;
        let id = console.prompt_until("Enter ID: ", |raw| {
            let id = parse_employee_id(raw)?;
            if registry.is_unique(id.as_str()) {
                Ok(id)
            } else {
                Err(ValidationError::DuplicateId)
            }
        })?;
        let name = console.prompt_until("Enter Name: ", parse_employee_name)?;

        let amount = |raw: &str| parse_amount(raw, profile);
        let compensation = match kind {
            EmploymentKind::FullTime => Compensation::FullTime {
                monthly_salary: console.prompt_until("Enter Fixed Monthly Salary: ", amount)?,
            },
            EmploymentKind::PartTime => {
                let hourly_wage = console.prompt_until("Enter Hourly Wage: ", amount)?;
                let hours_worked = console.prompt_until("Enter Hours Worked: ", |raw| {
                    parse_count_for_rate(raw, profile, hourly_wage)
                })?;
                Compensation::PartTime {
                    hourly_wage,
                    hours_worked,
                }
            }
            EmploymentKind::Contractual => {
                let payment_per_project =
                    console.prompt_until("Enter Payment Per Project: ", amount)?;
                let projects_completed =
                    console.prompt_until("Enter Projects Completed: ", |raw| {
                        parse_count_for_rate(raw, profile, payment_per_project)
                    })?;
                Compensation::Contractual {
                    payment_per_project,
                    projects_completed,
                }
            }
        };

        match self.registry.append(Employee::new(id, name, compensation)) {
            Ok(stored) => {
                info!(
                    id = %stored.id(),
                    kind = kind.label(),
                    salary = stored.salary().value(),
                    "employee registered"
                );
            }
            Err(err) => {
                warn!(error = %err, "employee registration rejected");
                console.write_line(&format!("Unable to register employee: {err}"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drive(
        registry: &mut EmployeeRegistry,
        profile: ValidationProfile,
        script: &str,
    ) -> (SessionOutcome, String) {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let outcome = PayrollSession::new(registry, profile)
            .run(&mut console)
            .expect("in-memory io never fails");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        (outcome, output)
    }

    #[test]
    fn steps_walk_through_the_state_machine() {
        let mut registry = EmployeeRegistry::default();
        let mut console = Console::new(Cursor::new("4\n5\n"), Vec::new());
        let mut session = PayrollSession::new(&mut registry, ValidationProfile::Strict);

        assert_eq!(session.state(), MenuState::Idle);
        assert_eq!(session.step(&mut console).expect("menu"), MenuState::AwaitingType);
        assert_eq!(session.step(&mut console).expect("choice"), MenuState::Reporting);
        assert_eq!(session.step(&mut console).expect("report"), MenuState::Idle);
        assert_eq!(session.step(&mut console).expect("menu"), MenuState::AwaitingType);
        assert_eq!(session.step(&mut console).expect("choice"), MenuState::Exiting);
        assert_eq!(session.step(&mut console).expect("terminal"), MenuState::Exiting);
    }

    #[test]
    fn registration_moves_through_collecting_fields() {
        let mut registry = EmployeeRegistry::default();
        let mut console = Console::new(Cursor::new("2\nE2\nBob\n10\n5\n"), Vec::new());
        let mut session = PayrollSession::new(&mut registry, ValidationProfile::Strict);

        session.step(&mut console).expect("menu");
        assert_eq!(
            session.step(&mut console).expect("choice"),
            MenuState::CollectingFields(EmploymentKind::PartTime)
        );
        assert_eq!(session.step(&mut console).expect("fields"), MenuState::Idle);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.employees()[0].salary().value(), 50.0);
    }

    #[test]
    fn invalid_choices_reprint_the_menu() {
        let mut registry = EmployeeRegistry::default();
        let (outcome, output) =
            drive(&mut registry, ValidationProfile::Strict, "0\n6\nabc\n\n5\n");

        assert_eq!(outcome, SessionOutcome::Exited);
        assert_eq!(
            output
                .matches("Invalid choice! Please enter a number between 1 and 5.")
                .count(),
            4
        );
        assert_eq!(output.matches("Enter choice: ").count(), 5);
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn full_registry_skips_field_prompts() {
        let mut registry = EmployeeRegistry::with_capacity(0);
        let (_, output) = drive(&mut registry, ValidationProfile::Strict, "1\n5\n");

        assert!(output.contains("Employee registry is full (capacity 0)"));
        assert!(!output.contains("Enter ID: "));
        assert!(registry.is_empty());
    }

    #[test]
    fn closed_input_ends_the_session() {
        let mut registry = EmployeeRegistry::default();
        let (outcome, _) = drive(&mut registry, ValidationProfile::Strict, "1\nE1\n");

        assert_eq!(outcome, SessionOutcome::InputClosed);
        assert!(registry.is_empty());
    }
}
