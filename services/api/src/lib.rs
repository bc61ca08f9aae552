mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use homecoming::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
