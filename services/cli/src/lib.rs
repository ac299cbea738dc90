mod cli;
mod demo;
mod infra;

use counsel_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
