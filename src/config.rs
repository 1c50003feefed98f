//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::parsing::whatsapp::MEDIA_MARKER;

/// Configuration for [`ChatParser`](crate::ChatParser).
///
/// # Example
///
/// ```
/// use chatlens::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_media_marker("<attachment omitted>")
///     .with_skip_noise(false);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Literal marker identifying a media-placeholder line
    /// (default: `<Media omitted>`).
    pub media_marker: String,

    /// Drop blank lines and exporter system notices (default: true).
    pub skip_noise: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            media_marker: MEDIA_MARKER.to_owned(),
            skip_noise: true,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media-placeholder marker.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Sets whether noise lines are dropped.
    #[must_use]
    pub fn with_skip_noise(mut self, skip: bool) -> Self {
        self.skip_noise = skip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ParserConfig::default();
        assert_eq!(config.media_marker, "<Media omitted>");
        assert!(config.skip_noise);
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new()
            .with_media_marker("<file>")
            .with_skip_noise(false);
        assert_eq!(config.media_marker, "<file>");
        assert!(!config.skip_noise);
    }
}
