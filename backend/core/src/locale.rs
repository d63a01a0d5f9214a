use serde::{Deserialize, Serialize};

/// Language used for the model prompt, placeholder descriptions, and
/// marketplace blurbs.
///
/// The catalog targets Turkish marketplaces, so Turkish is the default; the
/// placeholder text is deliberately not hardcoded to one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    /// Parse a locale tag such as `tr` or `en-US` (case-insensitive; only the
    /// primary subtag matters).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "tr" => Some(Self::Tr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primary_subtag() {
        assert_eq!(Locale::from_tag("tr"), Some(Locale::Tr));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("TR_tr"), Some(Locale::Tr));
        assert_eq!(Locale::from_tag("de"), None);
    }

    #[test]
    fn defaults_to_turkish() {
        assert_eq!(Locale::default(), Locale::Tr);
    }
}
