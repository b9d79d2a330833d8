//! Category tokens and the per-category artwork.

use std::fmt;

/// Token carried by the wildcard filter control.
pub const ALL: &str = "all";

const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=400&h=250&fit=crop";

const CATEGORY_IMAGES: &[(&str, &str)] = &[
    ("NEWS", DEFAULT_IMAGE),
    (
        "BUSINESS",
        "https://images.unsplash.com/photo-1551135049-8a33b5883817?w=400&h=250&fit=crop",
    ),
    (
        "CULTURE",
        "https://images.unsplash.com/photo-1577495508326-19a1b3cf65b7?w=400&h=250&fit=crop",
    ),
    (
        "SPORTS",
        "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=400&h=250&fit=crop",
    ),
    (
        "SOCIETY",
        "https://images.unsplash.com/photo-1532619187608-e5375cab36aa?w=400&h=250&fit=crop",
    ),
    (
        "HI-TECH",
        "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=400&h=250&fit=crop",
    ),
    (
        "ENTERTAINMENT",
        "https://images.unsplash.com/photo-1489599735734-79b4d8c3b0bb?w=400&h=250&fit=crop",
    ),
    (
        "COLUMN",
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=250&fit=crop",
    ),
    (
        "DOCUMENTARY",
        "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=250&fit=crop",
    ),
    (
        "INTERVIEW",
        "https://images.unsplash.com/photo-1551836022-deb4988cc6c0?w=400&h=250&fit=crop",
    ),
    (
        "EDITOR'S CHOICE",
        "https://images.unsplash.com/photo-1486312338219-ce68e2c6f44d?w=400&h=250&fit=crop",
    ),
    (
        "OPINION",
        "https://images.unsplash.com/photo-1504711331083-9c895941bf81?w=400&h=250&fit=crop",
    ),
    (
        "TRAVEL",
        "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=400&h=250&fit=crop",
    ),
];

/// Image used for a category label, case-insensitive, defaulting to the
/// news artwork.
pub fn default_image(category: &str) -> &'static str {
    let category = category.trim();
    CATEGORY_IMAGES
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(category))
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_IMAGE)
}

/// Turn a display label into a filter token: ASCII-lowercased, with every
/// run of other characters collapsed into a single `-`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Value of a `data-category` attribute on a filter control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryToken {
    /// Wildcard, matches every card.
    All,
    /// Matches cards carrying exactly this token.
    Named(String),
}

impl CategoryToken {
    /// Parse a raw attribute value or display label into its slug form.
    /// Input with no alphanumerics yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let slug = slugify(raw);
        if slug.is_empty() {
            None
        } else if slug == ALL {
            Some(Self::All)
        } else {
            Some(Self::Named(slug))
        }
    }

    /// Whether a card with `card_token` stays visible under this token. The
    /// card token is compared in slug form; a card without one only survives
    /// the wildcard.
    pub fn matches(&self, card_token: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => {
                card_token.is_some_and(|token| token == name.as_str() || slugify(token) == *name)
            },
        }
    }

    /// Attribute value of the token.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Named(name) => name,
        }
    }

    /// Whether this is the wildcard.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("EDITOR'S CHOICE"), "editor-s-choice");
        assert_eq!(slugify("  Hi-Tech  "), "hi-tech");
        assert_eq!(slugify("BUSINESS COLUMN"), "business-column");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn parse_recognizes_wildcard() {
        assert_eq!(CategoryToken::parse("ALL"), Some(CategoryToken::All));
        assert_eq!(CategoryToken::parse("   "), None);
        assert_eq!(
            CategoryToken::parse(" politics "),
            Some(CategoryToken::Named("politics".to_string()))
        );
        assert_eq!(
            CategoryToken::parse("Politics"),
            Some(CategoryToken::Named("politics".to_string()))
        );
        assert_eq!(
            CategoryToken::parse("EDITOR'S CHOICE"),
            Some(CategoryToken::Named("editor-s-choice".to_string()))
        );
        assert!(CategoryToken::parse("Politics")
            .is_some_and(|token| token.matches(Some("politics"))));
    }

    #[test]
    fn missing_card_token_only_matches_wildcard() {
        assert!(CategoryToken::All.matches(None));
        assert!(!CategoryToken::Named("sports".to_string()).matches(None));
        assert!(CategoryToken::Named("sports".to_string()).matches(Some("sports")));
        assert!(CategoryToken::Named("sports".to_string()).matches(Some("Sports")));
        assert!(!CategoryToken::Named("sports".to_string()).matches(Some("sportsline")));
    }

    #[test]
    fn unknown_category_uses_news_image() {
        assert_eq!(default_image("weather"), DEFAULT_IMAGE);
        assert_ne!(default_image("travel"), DEFAULT_IMAGE);
    }
}
