mod cli;
mod infra;
mod report;
mod routes;
mod server;

use churn_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
