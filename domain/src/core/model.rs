//! Model value object representing a Gemini model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available Gemini models (Value Object)
///
/// Two identifiers ship as first-class variants: the preview release and
/// the stable release. Anything else round-trips through `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Preview release
    Gemini25FlashPreview,
    /// Stable release
    Gemini25Flash,
    /// Any other model identifier, passed through verbatim
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25FlashPreview => "gemini-2.5-flash-preview-09-2025",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a preview release
    pub fn is_preview(&self) -> bool {
        matches!(self, Model::Gemini25FlashPreview)
    }
}

impl Default for Model {
    /// Returns the default model (the preview release)
    fn default() -> Self {
        Model::Gemini25FlashPreview
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.5-flash-preview-09-2025" => Model::Gemini25FlashPreview,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::Gemini25FlashPreview, Model::Gemini25Flash] {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-exp-1206".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-exp-1206".to_string()));
        assert_eq!(model.to_string(), "gemini-exp-1206");
    }

    #[test]
    fn test_model_default_is_preview() {
        assert!(Model::default().is_preview());
        assert!(!Model::Gemini25Flash.is_preview());
    }
}
