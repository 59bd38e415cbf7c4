//! Confirmations and prompts on the terminal.

use flohmarkt_admin::dialogs::{Confirmation, Dialogs, TextPrompt};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Answers dialogs from flags first, then from stdin.
#[derive(Debug, Clone, Default)]
pub struct TerminalDialogs {
    assume_yes: bool,
    text: Option<String>,
}

impl TerminalDialogs {
    pub const fn new(assume_yes: bool, text: Option<String>) -> Self {
        Self { assume_yes, text }
    }

    async fn ask(question: &str) -> Option<String> {
        let mut stderr = tokio::io::stderr();
        stderr.write_all(question.as_bytes()).await.ok()?;
        stderr.write_all(b" ").await.ok()?;
        stderr.flush().await.ok()?;

        let mut line = String::new();
        let read = BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .ok()?;
        // EOF means the question was dismissed.
        (read > 0).then(|| line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Whether a typed answer means yes.
fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "نعم" | "ن"
    )
}

impl Dialogs for TerminalDialogs {
    async fn confirm(&self, confirmation: Confirmation) -> bool {
        if self.assume_yes {
            return true;
        }
        let question = format!("{} [y/N]", confirmation.question());
        Self::ask(&question).await.is_some_and(|a| is_yes(&a))
    }

    async fn prompt(&self, prompt: TextPrompt) -> Option<String> {
        if let Some(text) = &self.text {
            return Some(text.clone());
        }
        let label = match &prompt.default {
            Some(current) => format!("{} [{current}]", prompt.label),
            None => prompt.label.to_string(),
        };
        let answer = Self::ask(&label).await?;
        // An empty line keeps the pre-filled value, like a browser prompt.
        match (answer.trim().is_empty(), prompt.default) {
            (true, Some(current)) => Some(current),
            _ => Some(answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(is_yes("نعم"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }

    #[tokio::test]
    async fn test_flags_answer_without_reading_stdin() {
        let dialogs = TerminalDialogs::new(true, Some("ألعاب".to_string()));
        assert!(dialogs.confirm(Confirmation::DeleteProduct).await);
        assert_eq!(
            dialogs
                .prompt(TextPrompt::rename_category("كتب".to_string()))
                .await
                .as_deref(),
            Some("ألعاب")
        );
    }
}
