mod cli;
mod commands;

use advocate_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
