use std::fmt;
use std::str::FromStr;

use crate::error::{BundleError, Result};

/// A language/country/variant triple.
///
/// Language is kept lowercase and country uppercase; the variant is kept
/// as given. The root locale has all three segments empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    pub const ROOT: Locale = Locale {
        language: String::new(),
        country: String::new(),
        variant: String::new(),
    };

    pub fn new(language: &str, country: &str, variant: &str) -> Self {
        Self {
            language: language.trim().to_lowercase(),
            country: country.trim().to_uppercase(),
            variant: variant.trim().to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn is_root(&self) -> bool {
        self.language.is_empty() && self.country.is_empty() && self.variant.is_empty()
    }

    /// Parse a tag such as `ja`, `ja_JP`, `ja-JP` or `en_US_POSIX`.
    ///
    /// An empty tag is the root locale. Anything after the second separator
    /// belongs to the variant.
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Self::ROOT);
        }

        let mut parts = tag.splitn(3, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.next().unwrap_or_default();

        let valid = |segment: &str| segment.chars().all(|c| c.is_ascii_alphanumeric());
        let valid_variant = |segment: &str| {
            segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        };
        if !valid(language) || !valid(country) || !valid_variant(variant) {
            return Err(BundleError::invalid_argument(
                "locale",
                format!("'{}' is not a valid locale tag", tag),
            ));
        }

        Ok(Self::new(language, country, variant))
    }

    /// Bundle-name suffix: `_language_COUNTRY_variant` with empty trailing
    /// segments omitted. An empty segment before a non-empty one is kept
    /// (`_ja__POSIX`). The root locale has an empty suffix.
    pub fn suffix(&self) -> String {
        let segments = [&self.language, &self.country, &self.variant];
        let used = segments
            .iter()
            .rposition(|segment| !segment.is_empty())
            .map_or(0, |last| last + 1);

        segments[..used]
            .iter()
            .fold(String::new(), |mut suffix, segment| {
                suffix.push('_');
                suffix.push_str(segment);
                suffix
            })
    }

    /// Variant chain from most to least specific, ending with the root locale.
    ///
    /// `ja_JP_x` gives `[ja_JP_x, ja_JP, ja, root]`; levels that collapse to
    /// the same locale appear once.
    pub fn variant_chain(&self) -> Vec<Locale> {
        let levels = [
            self.clone(),
            Locale::new(&self.language, &self.country, ""),
            Locale::new(&self.language, "", ""),
            Locale::ROOT,
        ];

        let mut chain: Vec<Locale> = Vec::with_capacity(levels.len());
        for level in levels {
            if !chain.contains(&level) {
                chain.push(level);
            }
        }
        chain
    }

    /// The next less specific locale, or `None` for the root
    pub fn parent(&self) -> Option<Locale> {
        self.variant_chain().into_iter().nth(1)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("root")
        } else {
            f.write_str(&self.suffix()[1..])
        }
    }
}

impl FromStr for Locale {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Candidate resource name: `<base_name><suffix>.<format>`
pub fn candidate_name(base_name: &str, locale: &Locale, format: &str) -> String {
    format!("{}{}.{}", base_name, locale.suffix(), format)
}
