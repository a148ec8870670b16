use lil_timesheet::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Deployment secrets (e.g. GOOGLE_CLIENT_SECRET) may live in a .env
    // file next to the working directory.
    dotenv::dotenv().ok();

    Cli::menu().await
}
