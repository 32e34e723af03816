mod cli;
mod demo;
mod interactive;

use payroll::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
