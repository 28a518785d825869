mod cli;
mod durable;
mod infra;
mod report;
mod routes;
mod server;

use support_planner::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
