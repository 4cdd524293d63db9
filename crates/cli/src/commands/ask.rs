//! Ask command handler.
//!
//! Answers a single question and exits.

use super::build_responder;
use clap::Args;
use digibot_assistant::{BotReply, ReplySource};
use digibot_core::{config::AppConfig, AppError, AppResult};
use std::path::PathBuf;

/// Ask DigiBot a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub prompt: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "prompt")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let question = self.get_prompt()?;
        let responder = build_responder(config)?;

        let reply = responder.reply(&question).await;

        if self.json {
            println!("{}", render_json(&reply)?);
        } else {
            println!("{}", reply.text);
        }

        Ok(())
    }

    /// Resolve the question from the positional argument or `--file`.
    fn get_prompt(&self) -> AppResult<String> {
        let raw = match (&self.prompt, &self.file) {
            (Some(prompt), _) => prompt.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                return Err(AppError::Config(
                    "No question provided. Pass it as an argument or with --file".to_string(),
                ))
            }
        };

        let question = raw.trim();
        if question.is_empty() {
            return Err(AppError::Config("Question is empty".to_string()));
        }

        Ok(question.to_string())
    }
}

fn render_json(reply: &BotReply) -> AppResult<String> {
    let mut output = serde_json::json!({
        "answer": reply.text,
        "source": reply.source,
    });

    if let ReplySource::Faq { question } = &reply.source {
        output["question"] = serde_json::Value::String(question.clone());
    }

    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(prompt: Option<&str>, file: Option<PathBuf>) -> AskCommand {
        AskCommand {
            prompt: prompt.map(str::to_string),
            file,
            json: false,
        }
    }

    #[test]
    fn test_prompt_from_argument_is_trimmed() {
        let cmd = command(Some("  How do I use Paytm?\n"), None);
        assert_eq!(cmd.get_prompt().unwrap(), "How do I use Paytm?");
    }

    #[test]
    fn test_prompt_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("question.txt");
        std::fs::write(&path, "How do I take a photo?\n").unwrap();

        let cmd = command(None, Some(path));
        assert_eq!(cmd.get_prompt().unwrap(), "How do I take a photo?");
    }

    #[test]
    fn test_missing_prompt() {
        let cmd = command(None, None);
        assert!(matches!(cmd.get_prompt(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_blank_prompt() {
        let cmd = command(Some("   "), None);
        assert!(matches!(cmd.get_prompt(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_json_output_for_faq_reply() {
        let reply = BotReply {
            text: "Open the camera app.".to_string(),
            source: ReplySource::Faq {
                question: "How do I take a photo?".to_string(),
            },
        };

        let value: serde_json::Value = serde_json::from_str(&render_json(&reply).unwrap()).unwrap();
        assert_eq!(value["answer"], "Open the camera app.");
        assert_eq!(value["source"]["kind"], "faq");
        assert_eq!(value["question"], "How do I take a photo?");
    }

    #[test]
    fn test_json_output_for_help_text() {
        let reply = BotReply {
            text: "help".to_string(),
            source: ReplySource::Default,
        };

        let value: serde_json::Value = serde_json::from_str(&render_json(&reply).unwrap()).unwrap();
        assert_eq!(value["source"]["kind"], "default");
        assert!(value.get("question").is_none());
    }
}
