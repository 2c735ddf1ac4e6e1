use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use tokio::process::Command;

use base::setting;

lazy_static! {
    static ref MBID_RE: Regex = Regex::new(
        r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
    )
    .unwrap();
}

/// First registry identifier found in the text, or an empty string.
pub fn extract_mbid(text: &str) -> String {
    MBID_RE
        .find(text.trim())
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Source of a registry identifier picked by the user. Read only on explicit
/// request, never cached; failures yield an empty string.
#[async_trait]
pub trait ClipboardReader: Send + Sync {
    async fn read_identifier(&self) -> String;
}

/// Reads the clipboard through an external paste command.
pub struct CommandClipboard {
    command: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(clipboard: &setting::Clipboard) -> Self {
        CommandClipboard {
            command: clipboard.command.clone(),
            args: clipboard.args.clone(),
        }
    }
}

#[async_trait]
impl ClipboardReader for CommandClipboard {
    async fn read_identifier(&self) -> String {
        match Command::new(&self.command).args(&self.args).output().await {
            Ok(output) if output.status.success() => {
                extract_mbid(String::from_utf8_lossy(&output.stdout).as_ref())
            }
            Ok(output) => {
                tracing::warn! {command = %self.command, status = %output.status, "Clipboard command failed"};
                String::new()
            }
            Err(error) => {
                tracing::warn! {command = %self.command, %error, "Could not run clipboard command"};
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_identifier_from_a_release_url() {
        assert_eq!(
            extract_mbid("  https://musicbrainz.org/release/B84EE12A-09ef-421b-82de-0441a926375b/edit\n"),
            "B84EE12A-09ef-421b-82de-0441a926375b"
        );
    }

    #[test]
    fn no_identifier_is_empty() {
        assert_eq!(extract_mbid("hello"), "");
        assert_eq!(extract_mbid(""), "");
    }

    #[tokio::test]
    async fn missing_command_reads_empty() {
        let clipboard = CommandClipboard::new(&setting::Clipboard {
            command: "crosscheck-no-such-paste-command".to_string(),
            args: vec![],
        });
        assert_eq!(clipboard.read_identifier().await, "");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn reads_identifier_from_command_output() {
        let clipboard = CommandClipboard::new(&setting::Clipboard {
            command: "echo".to_string(),
            args: vec!["see b84ee12a-09ef-421b-82de-0441a926375b".to_string()],
        });
        assert_eq!(
            clipboard.read_identifier().await,
            "b84ee12a-09ef-421b-82de-0441a926375b"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_command_reads_empty() {
        let clipboard = CommandClipboard::new(&setting::Clipboard {
            command: "false".to_string(),
            args: vec![],
        });
        assert_eq!(clipboard.read_identifier().await, "");
    }
}
