// Terminal front-end for a running debt-review-service.
//
// Honours the service's reveal schedule and polls the session while the
// analysis is pending.

mod render;

use clap::Parser;
use debt_flow::{SessionSnapshot, Step, Turn, TurnStatus, UserInput};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(about = "Talk to the debt-review service from the terminal")]
struct Args {
    /// Base URL of the service
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Print messages immediately instead of following the reveal schedule
    #[arg(long)]
    instant: bool,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    session_id: String,
    #[serde(flatten)]
    turn: Turn,
    reveal_after_ms: Vec<u64>,
}

struct Client {
    http: reqwest::Client,
    url: String,
}

impl Client {
    async fn chat(
        &self,
        session_id: Option<&str>,
        input: Option<UserInput>,
    ) -> anyhow::Result<ChatReply> {
        let response = self
            .http
            .post(format!("{}/chat", self.url))
            .json(&json!({ "session_id": session_id, "input": input }))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn snapshot(&self, session_id: &str) -> anyhow::Result<SessionSnapshot> {
        let response = self
            .http
            .get(format!("{}/session/{}", self.url, session_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

async fn show(reply: &ChatReply, instant: bool) {
    let mut elapsed = 0;
    for (message, at) in reply.turn.messages.iter().zip(&reply.reveal_after_ms) {
        if !instant {
            tokio::time::sleep(Duration::from_millis(at.saturating_sub(elapsed))).await;
        }
        elapsed = *at;
        render::print_bot(message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    render::init_tracing();
    let args = Args::parse();
    let client = Client {
        http: reqwest::Client::new(),
        url: args.url.trim_end_matches('/').to_string(),
    };

    let mut reply = client.chat(None, None).await?;
    let session_id = reply.session_id.clone();
    tracing::info!(session_id = %session_id, "Session started");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        show(&reply, args.instant).await;

        if reply.turn.status == TurnStatus::Analyzing {
            let card = loop {
                tokio::time::sleep(Duration::from_millis(500)).await;
                let snapshot = client.snapshot(&session_id).await?;
                if snapshot.step == Step::Result {
                    break snapshot.result;
                }
            };
            if let Some(card) = card {
                render::print_card(&card);
            }
            break;
        }

        render::print_input(&reply.turn.input)?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let Some(answer) = render::parse_answer(&reply.turn.input, &line) else {
            println!("Please pick one of the numbered options.");
            reply.turn.messages.clear();
            continue;
        };

        reply = client.chat(Some(&session_id), Some(answer)).await?;
    }

    Ok(())
}
