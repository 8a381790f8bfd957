//! Query command - one-shot question answering

use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::agent::AgentReply;
use crate::infrastructure::logging;

#[derive(Args)]
pub struct QueryArgs {
    /// The question to answer
    pub question: String,

    /// User id for interaction memory
    #[arg(long, default_value = "cli")]
    pub user: String,

    /// Print groundedness and precision scores after the answer
    #[arg(long)]
    pub scores: bool,
}

/// Answer a single question and exit
pub async fn run(args: QueryArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let agent = super::build_agent(&config)?;
    let reply = agent.ask(&args.user, &args.question).await?;

    println!("{}", reply.message());

    if args.scores {
        if let AgentReply::Answer(state) = &reply {
            println!(
                "\ngroundedness: {}  precision: {}  loops: {}/{}",
                format_score(state.groundedness_score),
                format_score(state.precision_score),
                state.groundedness_loop_count,
                state.precision_loop_count,
            );
        }
    }

    Ok(())
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.1}", s),
        None => "-".to_string(),
    }
}
