//! Console rendering for chat turns and transcripts

use colored::Colorize;
use conversa_domain::{ConversationHistory, Role, Turn};

/// Formats turns and transcripts for console display
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Render the assistant's reply for display after a turn.
    pub fn render_reply(reply: &str) -> String {
        format!("{}\n{}", "Assistant:".yellow().bold(), reply)
    }

    /// Render one recorded turn, timestamped.
    pub fn render_turn(turn: &Turn) -> String {
        let role = match turn.role {
            Role::User => "User".cyan().bold(),
            Role::Assistant => "Assistant".yellow().bold(),
        };
        let mut line = format!("[{}] {}: {}", turn.timestamp.dimmed(), role, turn.content);
        if turn.attached_context.is_some() {
            line.push_str(&format!(" {}", "(with attached context)".dimmed()));
        }
        line
    }

    /// Render the full recorded transcript, oldest turn first.
    pub fn render_transcript(history: &ConversationHistory) -> String {
        if history.is_empty() {
            return "No conversation recorded yet.".to_string();
        }
        history
            .turns()
            .iter()
            .map(Self::render_turn)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_turn_contains_role_and_content() {
        colored::control::set_override(false);
        let turn = Turn::user("hello there");
        let rendered = ConsoleRenderer::render_turn(&turn);
        assert!(rendered.contains("User"));
        assert!(rendered.contains("hello there"));
        assert!(rendered.contains(&turn.timestamp));
    }

    #[test]
    fn test_render_turn_marks_attached_context() {
        colored::control::set_override(false);
        let turn = Turn::user("www.example.com").with_attached_context("page text");
        assert!(ConsoleRenderer::render_turn(&turn).contains("(with attached context)"));
    }

    #[test]
    fn test_render_transcript_empty() {
        let history = ConversationHistory::default();
        assert_eq!(
            ConsoleRenderer::render_transcript(&history),
            "No conversation recorded yet."
        );
    }

    #[test]
    fn test_render_transcript_orders_turns() {
        colored::control::set_override(false);
        let mut history = ConversationHistory::default();
        history.push(Turn::user("first"));
        history.push(Turn::assistant("second"));
        let transcript = ConsoleRenderer::render_transcript(&history);
        assert!(transcript.find("first").unwrap() < transcript.find("second").unwrap());
    }
}
