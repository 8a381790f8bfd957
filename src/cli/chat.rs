//! Chat command - interactive console session

use std::io::{BufRead, Write};

use clap::Args;
use tracing::error;

use crate::config::AppConfig;
use crate::infrastructure::agent::AgentReply;
use crate::infrastructure::logging;

#[derive(Args)]
pub struct ChatArgs {
    /// User id for interaction memory; prompted for when omitted
    #[arg(long)]
    pub user: Option<String>,
}

/// Run the interactive chat loop
pub async fn run(args: ChatArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let agent = super::build_agent(&config)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    let user_id = match args.user {
        Some(user) => user,
        None => {
            write!(stdout, "Enter your user id: ")?;
            stdout.flush()?;
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            let user = line.trim().to_string();
            if user.is_empty() {
                "anonymous".to_string()
            } else {
                user
            }
        }
    };

    writeln!(
        stdout,
        "\nHello {}! Ask me anything about nutrition. Type 'exit' to quit.\n",
        user_id
    )?;

    loop {
        write!(stdout, "You: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            writeln!(stdout, "Goodbye!")?;
            break;
        }

        // One bad turn must not end the session
        match agent.ask(&user_id, question).await {
            Ok(reply) => {
                writeln!(stdout, "\nAssistant: {}\n", reply.message())?;
                if let AgentReply::Answer(state) = &reply {
                    tracing::debug!(
                        groundedness = ?state.groundedness_score,
                        precision = ?state.precision_score,
                        "Turn quality scores"
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "Turn failed");
                writeln!(
                    stdout,
                    "\nAssistant: Something went wrong handling that question. Please try again.\n"
                )?;
            }
        }
    }

    Ok(())
}
