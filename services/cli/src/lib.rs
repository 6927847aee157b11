mod browse;
mod cli;
mod commands;
mod output;

use uni_directory::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
