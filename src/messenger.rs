//! Supported messenger kinds.
//!
//! [`Messenger`] is the allow-list of export formats the parser implements.
//! There is currently exactly one. Asking for anything else is a hard,
//! user-visible configuration error at the string boundary
//! ([`FromStr`](std::str::FromStr), serde, CLI), not a parse failure.

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;

/// A messenger whose exports the parser understands.
///
/// # Example
///
/// ```
/// use chatlens::Messenger;
/// use std::str::FromStr;
///
/// let kind = Messenger::from_str("whatsapp").unwrap();
/// assert_eq!(kind, Messenger::WhatsApp);
///
/// // Aliases are supported
/// assert_eq!(Messenger::from_str("wa").unwrap(), Messenger::WhatsApp);
///
/// // Anything off the allow-list is a configuration error
/// assert!(Messenger::from_str("telegram").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Messenger {
    /// WhatsApp TXT exports (Android and iOS, several locale layouts).
    #[serde(alias = "wa")]
    WhatsApp,
}

impl Messenger {
    /// Returns all supported messengers.
    pub fn all() -> &'static [Messenger] {
        &[Messenger::WhatsApp]
    }

    /// Returns all accepted messenger names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["whatsapp", "wa"]
    }
}

impl std::fmt::Display for Messenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Messenger::WhatsApp => write!(f, "WhatsApp"),
        }
    }
}

impl std::str::FromStr for Messenger {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(Messenger::WhatsApp),
            _ => Err(ChatlensError::unsupported_messenger(s)),
        }
    }
}
