//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! are deserialized directly.

use conversa_domain::{DEFAULT_MAX_HISTORY, Model};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gemini-2.5-flash"
///
/// [chat]
/// max_history = 10
/// history_file = "~/.local/share/conversa/history.txt"
///
/// [log]
/// conversation_file = "conversa.transcript.jsonl"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection
    pub model: FileModelConfig,
    /// Chat loop settings
    pub chat: FileChatConfig,
    /// Transcript logging settings
    pub log: FileLogConfig,
}

/// Model selection from TOML (`[model]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier; unset means the default (preview) model
    pub name: Option<String>,
}

impl FileModelConfig {
    /// Parse the configured model name into a [`Model`].
    ///
    /// `Model::from_str` is infallible; unknown names become `Custom`.
    /// Blank names are treated as unset.
    pub fn parse_model(&self) -> Option<Model> {
        let name = self.name.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        Some(name.parse().unwrap())
    }
}

/// Chat loop settings from TOML (`[chat]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Recency window; the history cap is twice this
    pub max_history: usize,
    /// Path to the REPL line-edit history file
    pub history_file: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            history_file: None,
        }
    }
}

/// Transcript logging settings from TOML (`[log]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path for the JSONL conversation transcript; unset disables it
    pub conversation_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
name = "gemini-2.5-flash"

[chat]
max_history = 6
history_file = "~/.local/share/conversa/history.txt"

[log]
conversation_file = "transcript.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.parse_model(), Some(Model::Gemini25Flash));
        assert_eq!(config.chat.max_history, 6);
        assert!(config.chat.history_file.is_some());
        assert_eq!(
            config.log.conversation_file.as_deref(),
            Some("transcript.jsonl")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[chat]
max_history = 4
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.max_history, 4);
        // Defaults apply elsewhere
        assert!(config.model.name.is_none());
        assert!(config.log.conversation_file.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.model.parse_model().is_none());
        assert_eq!(config.chat.max_history, DEFAULT_MAX_HISTORY);
        assert!(config.log.conversation_file.is_none());
    }

    #[test]
    fn test_blank_model_name_is_unset() {
        let config: FileConfig = toml::from_str("[model]\nname = \"  \"\n").unwrap();
        assert!(config.model.parse_model().is_none());
    }

    #[test]
    fn test_unknown_model_name_becomes_custom() {
        let config: FileConfig = toml::from_str("[model]\nname = \"gemini-exp-1206\"\n").unwrap();
        assert_eq!(
            config.model.parse_model(),
            Some(Model::Custom("gemini-exp-1206".to_string()))
        );
    }
}
