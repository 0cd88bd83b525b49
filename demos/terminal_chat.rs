// Runs the debt-review conversation in the terminal, in-process.
//
// The same FlowRunner used by the HTTP service drives the session; the
// terminal is just another presentation of each Turn.

mod render;

use clap::Parser;
use debt_flow::{
    Branding, FlowController, FlowError, FlowRunner, InMemorySessionStorage, InstantPacer, Pacer,
    TurnStatus, TypingPacer, pacing::reveal,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(about = "Chat with the debt-review assistant in your terminal")]
struct Args {
    /// Skip the simulated typing and analysis delays
    #[arg(long)]
    instant: bool,

    #[arg(long)]
    assistant_name: Option<String>,

    #[arg(long)]
    firm_name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    render::init_tracing();
    let args = Args::parse();

    let defaults = Branding::default();
    let branding = Branding {
        assistant_name: args.assistant_name.unwrap_or(defaults.assistant_name),
        firm_name: args.firm_name.unwrap_or(defaults.firm_name),
        country_code: defaults.country_code,
    };
    let pacer: Arc<dyn Pacer> = if args.instant {
        Arc::new(InstantPacer)
    } else {
        Arc::new(TypingPacer)
    };

    let runner = FlowRunner::new(
        Arc::new(FlowController::new(branding)),
        Arc::new(InMemorySessionStorage::new()),
    );
    let (session_id, mut turn) = runner.start().await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        reveal(pacer.as_ref(), &turn.messages, render::print_bot).await;

        match turn.status {
            TurnStatus::Analyzing => {
                turn = runner.run_analysis(&session_id, pacer.as_ref()).await?;
                continue;
            }
            TurnStatus::Completed => {
                if let Some(card) = &turn.result {
                    render::print_card(card);
                }
                break;
            }
            TurnStatus::WaitingForInput | TurnStatus::Ignored => {}
        }

        render::print_input(&turn.input)?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let Some(answer) = render::parse_answer(&turn.input, &line) else {
            println!("Please pick one of the numbered options.");
            turn.messages.clear();
            continue;
        };

        match runner.respond(&session_id, answer).await {
            Ok(next) => turn = next,
            Err(e @ FlowError::UnknownOption { .. }) => {
                println!("{e}");
                turn.messages.clear();
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
