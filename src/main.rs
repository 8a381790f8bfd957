use clap::Parser;
use nutrirag::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Chat(args) => cli::chat::run(args).await,
        Command::Query(args) => cli::query::run(args).await,
    }
}
