use clap::Parser;

use berth::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = cli::execute(cli).await {
        cli::output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
