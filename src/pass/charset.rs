//! Character pool construction.

use std::collections::HashSet;

use crate::config::GenerationConfig;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/\\|";

/// Characters that render near-identically in many fonts.
pub const SIMILAR: &str = "Il1O0o";

/// Symbols that tend to break quoting, copy/paste, or manual entry.
pub const AMBIGUOUS: &str = "{}[]()/\\'\"`~,;:.<>";

/// The four built-in character categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Digits,
        Category::Symbols,
    ];

    /// The full fixed alphabet for this category, before any exclusions.
    pub fn alphabet(self) -> &'static str {
        match self {
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Digits => DIGITS,
            Category::Symbols => SYMBOLS,
        }
    }
}

/// Build the sampling pool: enabled category alphabets plus the custom
/// include string, first occurrence wins, minus the exclusion set.
///
/// An empty pool is a valid result; the sampler treats it as "nothing to
/// draw" rather than an error.
pub fn build(config: &GenerationConfig) -> Vec<char> {
    let mut pool: Vec<char> = Vec::new();

    for category in Category::ALL {
        if config.category_enabled(category) {
            pool.extend(category.alphabet().chars());
        }
    }
    pool.extend(config.custom_include.chars());

    let mut excluded: HashSet<char> = config.exclude_chars.chars().collect();
    if config.avoid_similar {
        excluded.extend(SIMILAR.chars());
    }
    if config.avoid_ambiguous {
        excluded.extend(AMBIGUOUS.chars());
    }

    let mut seen = HashSet::with_capacity(pool.len());
    pool.retain(|c| !excluded.contains(c) && seen.insert(*c));
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> GenerationConfig {
        GenerationConfig {
            avoid_similar: false,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn all_categories_no_exclusions() {
        let config = base_config();
        let pool = build(&config);
        assert_eq!(pool.len(), 26 + 26 + 10 + SYMBOLS.chars().count());
        assert_eq!(pool[0], 'A');
    }

    #[test]
    fn disabled_categories_are_absent() {
        let config = GenerationConfig {
            uppercase: false,
            symbols: false,
            ..base_config()
        };
        let pool = build(&config);
        assert!(!pool.contains(&'A'));
        assert!(!pool.contains(&'!'));
        assert!(pool.contains(&'a'));
        assert!(pool.contains(&'7'));
    }

    #[test]
    fn custom_include_deduplicates_against_base() {
        let config = GenerationConfig {
            custom_include: "abcéé".to_string(),
            ..base_config()
        };
        let pool = build(&config);
        // a, b, c already present from lowercase; é appears exactly once.
        assert_eq!(pool.iter().filter(|&&c| c == 'a').count(), 1);
        assert_eq!(pool.iter().filter(|&&c| c == 'é').count(), 1);
    }

    #[test]
    fn custom_include_preserves_first_seen_order() {
        let config = GenerationConfig {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            custom_include: "zyxzy".to_string(),
            ..base_config()
        };
        assert_eq!(build(&config), vec!['z', 'y', 'x']);
    }

    #[test]
    fn explicit_excludes_are_removed() {
        let config = GenerationConfig {
            exclude_chars: "abc".to_string(),
            ..base_config()
        };
        let pool = build(&config);
        assert!(!pool.contains(&'a'));
        assert!(!pool.contains(&'b'));
        assert!(!pool.contains(&'c'));
        assert!(pool.contains(&'d'));
    }

    #[test]
    fn avoid_similar_removes_lookalikes() {
        let config = GenerationConfig {
            avoid_similar: true,
            ..base_config()
        };
        let pool = build(&config);
        for c in SIMILAR.chars() {
            assert!(!pool.contains(&c), "{c:?} should be excluded");
        }
    }

    #[test]
    fn avoid_ambiguous_removes_tricky_symbols() {
        let config = GenerationConfig {
            avoid_ambiguous: true,
            ..base_config()
        };
        let pool = build(&config);
        for c in AMBIGUOUS.chars() {
            assert!(!pool.contains(&c), "{c:?} should be excluded");
        }
        assert!(pool.contains(&'!'));
    }

    #[test]
    fn exclusion_beats_custom_include() {
        let config = GenerationConfig {
            custom_include: "xyz".to_string(),
            exclude_chars: "y".to_string(),
            ..base_config()
        };
        assert!(!build(&config).contains(&'y'));
    }

    #[test]
    fn everything_off_yields_empty_pool() {
        let config = GenerationConfig {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..base_config()
        };
        assert!(build(&config).is_empty());
    }
}
