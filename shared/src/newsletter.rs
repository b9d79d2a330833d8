//! Newsletter signup check. Nothing is submitted anywhere; the form only
//! confirms or rejects locally.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shown when the address does not look like `local@domain.tld`.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Confirmation used when a section does not supply its own.
pub const DEFAULT_THANKS: &str = "Thank you for subscribing! You will receive our latest news.";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Whether `email` has the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Result of pressing the subscribe button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// Accepted; the input should be cleared.
    Subscribed {
        /// Confirmation to show.
        message: String,
    },
    /// Rejected; the input keeps its value.
    Rejected {
        /// Inline error to show.
        message: String,
    },
}

impl SubscribeOutcome {
    /// Text shown to the reader.
    pub fn message(&self) -> &str {
        match self {
            Self::Subscribed {
                message,
            }
            | Self::Rejected {
                message,
            } => message,
        }
    }

    /// Whether the input field should be cleared.
    pub fn clears_input(&self) -> bool {
        matches!(self, Self::Subscribed { .. })
    }
}

/// Validate the raw input (trimmed first) and pick the message.
pub fn subscribe(input: &str, thanks: &str) -> SubscribeOutcome {
    let email = input.trim();
    if !email.is_empty() && validate_email(email) {
        SubscribeOutcome::Subscribed {
            message: thanks.to_string(),
        }
    } else {
        SubscribeOutcome::Rejected {
            message: INVALID_EMAIL_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last+news@mail.example.cm"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["user@", "@example.com", "plaintext", "user@example", "a b@example.com", ""] {
            assert!(!validate_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn subscribe_trims_and_reports() {
        let ok = subscribe("  user@example.com ", DEFAULT_THANKS);
        assert!(ok.clears_input());
        assert_eq!(ok.message(), DEFAULT_THANKS);

        let bad = subscribe("user@", DEFAULT_THANKS);
        assert!(!bad.clears_input());
        assert_eq!(bad.message(), INVALID_EMAIL_MESSAGE);

        assert!(!subscribe("   ", DEFAULT_THANKS).clears_input());
    }
}
