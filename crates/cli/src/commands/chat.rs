//! Chat command handler.
//!
//! Interactive session on stdin/stdout. Each line is one message.

use super::build_responder;
use clap::Args;
use digibot_assistant::{ChatMessage, ChatSession, Sender};
use digibot_core::{config::AppConfig, AppResult};
use std::borrow::Cow;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

const PROMPT: &str = "> ";

/// Start an interactive chat session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Print the transcript as JSON when the session ends
    #[arg(long)]
    pub json: bool,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let responder = build_responder(config)?;
        let mut session = ChatSession::new(Arc::new(responder));

        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        run_session(&mut session, stdin, &mut stdout).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(session.messages())?);
        }

        tracing::info!(messages = session.messages().len(), "Chat session ended");
        Ok(())
    }
}

/// Drive `session` from `input` until EOF or `/quit`.
async fn run_session<R, W>(session: &mut ChatSession, mut input: R, out: &mut W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(greeting) = session.messages().first() {
        writeln!(out, "{}\n", greeting.content)?;
    }

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            break;
        }

        // Invalid UTF-8 is replaced, not fatal; the rest of the input is still read
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::warn!("Input line is not valid UTF-8; replaced invalid bytes");
        }

        match line.trim() {
            "/quit" | "/exit" => break,
            "/history" => {
                for message in session.messages() {
                    writeln!(out, "{}", format_message(message))?;
                }
            }
            _ => {
                if let Some(reply) = session.send(&line).await {
                    writeln!(out, "{}\n", reply.content)?;
                }
            }
        }
    }

    Ok(())
}

fn format_message(message: &ChatMessage) -> String {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Bot => "digibot",
    };
    format!(
        "[{}] {}: {}",
        message.timestamp.format("%H:%M:%S"),
        who,
        message.content
    )
}
