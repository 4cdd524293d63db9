//! Provider identification.

use serde::{Deserialize, Serialize};

/// Remote provider kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// OpenAI chat completions (or a compatible endpoint)
    OpenAI,
    /// No remote tier; every answer comes from the FAQ
    None,
}

impl ProviderType {
    /// Every provider the remote tier understands.
    pub const ALL: [ProviderType; 2] = [Self::OpenAI, Self::None];

    /// Parse provider type from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Some(Self::OpenAI),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Get the canonical provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_parsing() {
        assert_eq!(ProviderType::parse("openai"), Some(ProviderType::OpenAI));
        assert_eq!(ProviderType::parse("OpenAI"), Some(ProviderType::OpenAI));
        assert_eq!(ProviderType::parse("none"), Some(ProviderType::None));
        assert_eq!(ProviderType::parse(" none "), Some(ProviderType::None));
        assert_eq!(ProviderType::parse("ollama"), None);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for provider in ProviderType::ALL {
            assert_eq!(ProviderType::parse(provider.as_str()), Some(provider));
        }
    }
}
